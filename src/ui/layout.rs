//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Root screen layout: feed and about panes side by side, status bar below.
pub struct AppLayout {
    pub feed_area: Rect,
    pub about_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // panes
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[0]);

        Self {
            feed_area: panes[0],
            about_area: panes[1],
            status_area: rows[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bar_is_one_row_at_bottom() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.status_area, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.feed_area.height, 29);
        assert_eq!(layout.feed_area.width + layout.about_area.width, 100);
    }
}
