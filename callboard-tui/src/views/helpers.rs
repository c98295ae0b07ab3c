//! Common layout helpers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Horizontal split with `left_percent` on the left.
pub fn two_column(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let left_percent = left_percent.min(100);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// A rectangle of `width` x `height` centred in `area`, clamped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_column_covers_area() {
        let area = Rect::new(0, 0, 100, 10);
        let (left, right) = two_column(area, 60);
        assert_eq!(left.width, 60);
        assert_eq!(right.width, 40);
        assert_eq!(right.x, 60);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(2, 2, 20, 10);
        let rect = centered_rect(40, 4, area);
        assert_eq!(rect, Rect::new(2, 5, 20, 4));
    }
}
