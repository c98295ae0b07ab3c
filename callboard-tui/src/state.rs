//! Application state.
//!
//! `App` is the explicit state container handed to the views. Call
//! lifecycle changes go through the `CallStore`; everything else here is
//! presentation state (query, selection, notifications, help modal) plus the
//! ticker handle for the active call.

use crate::config::TuiConfig;
use crate::events::TuiEvent;
use crate::keys::{is_interrupt, map_key, map_search_key, Action, SearchKey};
use crate::nav::FilterNav;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::SwitchboardTheme;
use crate::ticker::ActiveCallTicker;
use callboard_core::{
    format_duration, project, Call, CallError, CallEvent, CallGenerator, CallId, CallStore,
    Projection, StatusFilter, Transition, ViewQuery,
};
use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

const MAX_NOTIFICATIONS: usize = 50;

pub const HELP_TEXT: &str = "n new call • a answer • r reject • e end call\n\
j/k or arrows move • Tab / Shift-Tab or 1-6 filter • / search\n\
? help • Esc close • q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

pub struct App {
    pub config: TuiConfig,
    pub theme: SwitchboardTheme,
    pub store: CallStore,
    pub generator: CallGenerator,
    pub query: ViewQuery,
    pub selected: Option<CallId>,
    pub input_mode: InputMode,
    pub notifications: Vec<Notification>,
    pub modal: Option<Modal>,
    ticker: Option<ActiveCallTicker>,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let store = if config.seed_sample_calls {
            CallStore::seeded(Utc::now())
        } else {
            CallStore::new()
        };
        let generator = match config.rng_seed {
            Some(seed) => CallGenerator::seeded(seed),
            None => CallGenerator::from_entropy(),
        };
        let mut app = Self {
            config,
            theme: SwitchboardTheme::switchboard(),
            store,
            generator,
            query: ViewQuery::default(),
            selected: None,
            input_mode: InputMode::Normal,
            notifications: Vec::new(),
            modal: None,
            ticker: None,
        };
        app.ensure_selection();
        app
    }

    // ------------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------------

    pub fn projection(&self) -> Projection<'_> {
        project(self.store.calls(), &self.query)
    }

    /// The selected call, if it is visible under the current query.
    pub fn selected_call(&self) -> Option<&Call> {
        let id = self.selected.as_ref()?;
        self.projection().calls.into_iter().find(|c| &c.id == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected.as_ref()?;
        self.projection().calls.iter().position(|c| &c.id == id)
    }

    /// The latest notification, while it is still worth showing.
    pub fn current_notification(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.notifications.last().filter(|note| note.is_fresh(now))
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.is_some()
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    /// Apply one event from the app channel. Returns true when the app
    /// should quit.
    pub fn handle_event(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::Input(key) => self.handle_key(key),
            TuiEvent::CallTimerTick(id) => {
                self.handle_timer_tick(&id);
                false
            }
            TuiEvent::Resize { .. } => false,
        }
    }

    /// Route a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_interrupt(&key) {
            return true;
        }
        match self.input_mode {
            InputMode::Search => {
                if let Some(search_key) = map_search_key(key) {
                    self.handle_search_key(search_key);
                }
                false
            }
            InputMode::Normal => match map_key(key) {
                Some(action) => self.handle_action(action),
                None => false,
            },
        }
    }

    pub fn handle_action(&mut self, action: Action) -> bool {
        if self.modal.is_some() {
            match action {
                Action::Quit => return true,
                Action::Cancel | Action::OpenHelp => self.modal = None,
                _ => {}
            }
            return false;
        }
        match action {
            Action::Quit => return true,
            Action::SimulateIncoming => {
                self.simulate_incoming_call();
            }
            Action::Answer => self.answer_selected(),
            Action::Reject => self.reject_selected(),
            Action::EndCall => self.end_active_call(),
            Action::MoveDown => self.select_next(),
            Action::MoveUp => self.select_previous(),
            Action::NextFilter => self.set_filter(self.query.filter.next()),
            Action::PrevFilter => self.set_filter(self.query.filter.previous()),
            Action::SwitchFilter(index) => {
                if let Some(filter) = StatusFilter::from_index(index) {
                    self.set_filter(filter);
                }
            }
            Action::OpenSearch => self.input_mode = InputMode::Search,
            Action::OpenHelp => {
                self.modal = Some(Modal {
                    title: "Keybindings".to_string(),
                    message: HELP_TEXT.to_string(),
                })
            }
            Action::Cancel => {}
        }
        false
    }

    pub fn handle_search_key(&mut self, key: SearchKey) {
        match key {
            SearchKey::Insert(c) => self.query.search.push(c),
            SearchKey::Backspace => {
                self.query.search.pop();
            }
            SearchKey::Commit => self.input_mode = InputMode::Normal,
            SearchKey::Discard => {
                self.query.search.clear();
                self.input_mode = InputMode::Normal;
            }
        }
        self.ensure_selection();
    }

    // ------------------------------------------------------------------------
    // Call actions
    // ------------------------------------------------------------------------

    pub fn simulate_incoming_call(&mut self) -> Call {
        let call = self.store.create_incoming_call(&mut self.generator);
        self.notify(
            NotificationLevel::Info,
            format!("Incoming call from {} ({})", call.caller, call.phone),
        );
        if self.query.matches(&call) {
            self.selected = Some(call.id.clone());
        } else {
            self.ensure_selection();
        }
        call
    }

    pub fn answer_selected(&mut self) {
        let Some(call) = self.selected_call() else {
            self.notify(NotificationLevel::Warning, "No call selected.");
            return;
        };
        if !call.is_incoming() {
            let message = format!("Only incoming calls can be answered ({} is {}).", call.caller, call.status);
            self.notify(NotificationLevel::Warning, message);
            return;
        }
        let id = call.id.clone();
        let caller = call.caller.clone();
        match self.store.apply(CallEvent::Answer(id)) {
            Ok(_) => self.notify(NotificationLevel::Success, format!("Connected to {}.", caller)),
            Err(CallError::LineBusy { .. }) => {
                self.notify(NotificationLevel::Warning, "Line busy: end the active call first.")
            }
            Err(err) => debug!(error = %err, "Answer ignored"),
        }
        self.ensure_selection();
    }

    pub fn reject_selected(&mut self) {
        let Some(call) = self.selected_call() else {
            self.notify(NotificationLevel::Warning, "No call selected.");
            return;
        };
        if !call.is_incoming() {
            let message = format!("Only incoming calls can be rejected ({} is {}).", call.caller, call.status);
            self.notify(NotificationLevel::Warning, message);
            return;
        }
        let id = call.id.clone();
        let caller = call.caller.clone();
        self.store.reject(&id);
        self.notify(NotificationLevel::Info, format!("Rejected call from {}.", caller));
        self.ensure_selection();
    }

    pub fn end_active_call(&mut self) {
        match self.store.apply(CallEvent::End) {
            Ok(Transition::Ended { id, duration }) => {
                let caller = self
                    .store
                    .get(&id)
                    .map(|c| c.caller.clone())
                    .unwrap_or_default();
                self.notify(
                    NotificationLevel::Success,
                    format!("Call with {} ended after {}.", caller, format_duration(duration)),
                );
            }
            Ok(_) => {}
            Err(_) => self.notify(NotificationLevel::Warning, "No active call to end."),
        }
        self.ensure_selection();
    }

    pub fn handle_timer_tick(&mut self, id: &CallId) {
        self.store.tick(id);
    }

    // ------------------------------------------------------------------------
    // Timer ownership
    // ------------------------------------------------------------------------

    /// Make the ticker match the store: one ticker for the active call, none
    /// when the line is free. Call after every event. Needs a tokio runtime
    /// when a call is active.
    pub fn sync_ticker(&mut self, sender: &mpsc::Sender<TuiEvent>) {
        match self.store.active_id() {
            Some(active) => {
                let current = self.ticker.as_ref().map(|t| t.call_id());
                if current != Some(active) {
                    let period = Duration::from_millis(self.config.tick_interval_ms);
                    self.ticker = Some(ActiveCallTicker::spawn(active.clone(), period, sender.clone()));
                }
            }
            None => {
                if let Some(ticker) = self.ticker.take() {
                    ticker.cancel();
                }
            }
        }
    }

    /// Stop the ticker before teardown.
    pub fn shutdown(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            if self.store.active_id().is_some() {
                warn!(call_id = %ticker.call_id(), "Shutting down with a call still active");
            }
            ticker.cancel();
        }
    }

    // ------------------------------------------------------------------------
    // Query and selection
    // ------------------------------------------------------------------------

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.query.filter = filter;
        self.ensure_selection();
    }

    pub fn select_next(&mut self) {
        let id = {
            let projection = self.projection();
            let next = match self.selected_index() {
                Some(index) if !projection.is_empty() => (index + 1) % projection.len(),
                _ => 0,
            };
            projection.get(next).map(|c| c.id.clone())
        };
        self.selected = id;
    }

    pub fn select_previous(&mut self) {
        let id = {
            let projection = self.projection();
            let prev = match self.selected_index() {
                Some(0) | None => projection.len().saturating_sub(1),
                Some(index) => index - 1,
            };
            projection.get(prev).map(|c| c.id.clone())
        };
        self.selected = id;
    }

    /// Keep the selection on a visible call, falling back to the first one.
    pub fn ensure_selection(&mut self) {
        if self.selected_index().is_none() {
            let first = self.projection().get(0).map(|c| c.id.clone());
            self.selected = first;
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let excess = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..excess);
        }
    }
}
