use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_input::Input;

use super::Theme;
use crate::models::MAX_ALIAS_CHARS;

/// Which input box has focus
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    #[default]
    Value,
    Alias,
}

impl InputField {
    pub fn toggle(self) -> Self {
        match self {
            InputField::Value => InputField::Alias,
            InputField::Alias => InputField::Value,
        }
    }
}

/// Rendering parameters for the value/alias input panel
pub struct InputPanelContext<'a> {
    pub value: &'a Input,
    pub alias: &'a Input,
    pub focus: InputField,
    /// Input mode is active; show focus and cursor
    pub active: bool,
    pub theme: &'a Theme,
}

/// Draw the value and alias boxes side by side
pub fn render_input_panel(frame: &mut Frame, area: Rect, ctx: InputPanelContext) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let alias_len = ctx.alias.value().trim().chars().count();
    let counter_style = if alias_len > MAX_ALIAS_CHARS {
        ctx.theme.alias_counter_over
    } else {
        ctx.theme.alias_counter
    };
    let alias_title = Line::from(vec![
        Span::raw(" Alias "),
        Span::styled(format!("{}/{} ", alias_len, MAX_ALIAS_CHARS), counter_style),
    ]);

    render_field(
        frame,
        chunks[0],
        ctx.value,
        Line::from(" Value "),
        ctx.active && ctx.focus == InputField::Value,
        ctx.theme,
    );
    render_field(
        frame,
        chunks[1],
        ctx.alias,
        alias_title,
        ctx.active && ctx.focus == InputField::Alias,
        ctx.theme,
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    input: &Input,
    title: Line,
    focused: bool,
    theme: &Theme,
) {
    let border_style = if focused {
        theme.input_border_focused
    } else {
        theme.input_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let inner = block.inner(area);
    let width = inner.width.max(1) as usize;
    let scroll = input.visual_scroll(width);

    let paragraph = Paragraph::new(input.value())
        .style(theme.input_text)
        .scroll((0, scroll as u16))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused {
        let cursor = input.visual_cursor().max(scroll) - scroll;
        frame.set_cursor_position((inner.x + cursor as u16, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_focus_toggle() {
        assert_eq!(InputField::Value.toggle(), InputField::Alias);
        assert_eq!(InputField::Alias.toggle(), InputField::Value);
    }

    #[test]
    fn test_panel_shows_values_and_counter() {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        let value = Input::new("hello".to_string());
        let alias = Input::new("greeting".to_string());
        let theme = Theme::default();

        terminal
            .draw(|frame| {
                render_input_panel(
                    frame,
                    frame.area(),
                    InputPanelContext {
                        value: &value,
                        alias: &alias,
                        focus: InputField::Alias,
                        active: true,
                        theme: &theme,
                    },
                );
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let top: String = (0..60).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
        let middle: String = (0..60).map(|x| buffer[(x, 1)].symbol().to_string()).collect();
        assert!(top.contains("Value"));
        assert!(top.contains("8/20"));
        assert!(middle.contains("hello"));
        assert!(middle.contains("greeting"));
    }
}
