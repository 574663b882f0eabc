use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::Theme;
use crate::app::AppMode;
use crate::logging::FlashMessage;

const NORMAL_HINTS: &[(&[&str], &str)] = &[
    (&["j", "k"], "move"),
    (&["a"], "add"),
    (&["Enter"], "copy"),
    (&["d"], "delete"),
    (&["m"], "reorder"),
    (&["?"], "help"),
    (&["q"], "quit"),
];

const INPUT_HINTS: &[(&[&str], &str)] = &[
    (&["Tab"], "value/alias"),
    (&["Enter"], "add clip"),
    (&["Esc"], "done"),
];

const MOVE_HINTS: &[(&[&str], &str)] = &[
    (&["j", "k"], "choose slot"),
    (&["Enter"], "drop"),
    (&["Esc"], "cancel"),
];

const HELP_HINTS: &[(&[&str], &str)] = &[(&["?", "Esc"], "close help")];

/// Render keyboard hints bar showing mode-specific shortcuts
pub fn render_keyboard_hints(frame: &mut Frame, area: Rect, mode: AppMode, theme: &Theme) {
    let hint_data = match mode {
        AppMode::Normal => NORMAL_HINTS,
        AppMode::Input => INPUT_HINTS,
        AppMode::Move => MOVE_HINTS,
        AppMode::Help => HELP_HINTS,
    };

    let mut hints = Vec::new();

    for (keys, description) in hint_data {
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                hints.push(Span::styled("/", theme.status_desc.add_modifier(Modifier::DIM)));
            }
            hints.push(Span::styled(*key, theme.status_key));
        }

        hints.push(Span::raw(" "));
        hints.push(Span::styled(*description, theme.status_desc));
        hints.push(Span::raw("  "));
    }

    let paragraph =
        Paragraph::new(Line::from(hints)).style(theme.status_desc.bg(theme.status_bar_bg));

    frame.render_widget(paragraph, area);
}

/// Render the most recent flash message, if any
pub fn render_flash_line(frame: &mut Frame, area: Rect, messages: &[FlashMessage], theme: &Theme) {
    let Some(latest) = messages.last() else {
        return;
    };

    let mut spans = vec![Span::styled(latest.message.clone(), theme.flash_style(latest.level))];
    if messages.len() > 1 {
        spans.push(Span::styled(
            format!("  (+{} more, c to clear)", messages.len() - 1),
            theme.status_desc,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
