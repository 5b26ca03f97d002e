use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Screen regions shared by every wizard step.
pub struct Layout {
    pub header: Rect,
    pub sidebar: Rect,
    /// Progress header above the step body; zero-height when hidden
    pub progress: Rect,
    pub body: Rect,
    pub message: Rect,
    pub status: Rect,
}

impl Layout {
    /// `interior` steps get the step sidebar and the progress header.
    pub fn new(area: Rect, interior: bool) -> Self {
        // Message panel space is always reserved so the step body never jumps
        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // Header
                Constraint::Min(10),    // Content
                Constraint::Length(3),  // Message panel
                Constraint::Length(1),  // Status bar
            ])
            .split(area);

        let sidebar_width = if interior { 24 } else { 0 };
        let columns = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
            .split(rows[1]);

        let progress_height = if interior { 3 } else { 0 };
        let main = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(progress_height), Constraint::Min(5)])
            .split(columns[1]);

        Self {
            header: rows[0],
            sidebar: columns[0],
            progress: main[0],
            body: main[1],
            message: rows[2],
            status: rows[3],
        }
    }

    pub fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
        let horizontal = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(width),
                Constraint::Fill(1),
            ])
            .split(area);

        let vertical = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(height),
                Constraint::Fill(1),
            ])
            .split(horizontal[1]);

        vertical[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_screen_steps_give_body_the_space() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = Layout::new(area, false);
        assert_eq!(layout.progress.height, 0);
        assert_eq!(layout.sidebar.width, 0);
        assert_eq!(layout.body.height, 40 - 1 - 3 - 1);
    }

    #[test]
    fn interior_steps_reserve_progress_header() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = Layout::new(area, true);
        assert_eq!(layout.progress.height, 3);
        assert_eq!(layout.sidebar.width, 24);
        assert_eq!(layout.body.y, layout.progress.y + 3);
    }

    #[test]
    fn centered_box_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let boxed = Layout::centered_box(area, 40, 6);
        assert_eq!(boxed, Rect::new(20, 9, 40, 6));
    }
}
