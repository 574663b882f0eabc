use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the main view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub clip_list: Rect,
    pub input: Rect,
    pub flash: Rect,
    pub keyboard_hints: Rect,
}

/// Split the screen into clip list, input panel, flash line and keyboard hints
pub fn create_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Clip list
            Constraint::Length(3), // Value/alias inputs
            Constraint::Length(1), // Flash messages
            Constraint::Length(1), // Keyboard hints bar
        ])
        .split(area);

    MainLayout {
        clip_list: chunks[0],
        input: chunks[1],
        flash: chunks[2],
        keyboard_hints: chunks[3],
    }
}

/// Create centered rectangle for popups/overlays
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_regions() {
        let layout = create_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.clip_list, Rect::new(0, 0, 80, 19));
        assert_eq!(layout.input, Rect::new(0, 19, 80, 3));
        assert_eq!(layout.flash, Rect::new(0, 22, 80, 1));
        assert_eq!(layout.keyboard_hints, Rect::new(0, 23, 80, 1));
    }
}
