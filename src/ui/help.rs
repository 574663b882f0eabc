use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::Theme;
use super::layout::centered_rect;

struct HelpSection {
    title: &'static str,
    items: &'static [(&'static [&'static str], &'static str)],
}

const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Navigation",
        items: &[
            (&["k", "↑", "j", "↓"], "Move up/down"),
            (&["Home", "End"], "Jump to top/bottom"),
        ],
    },
    HelpSection {
        title: "Clips",
        items: &[
            (&["a", "i"], "Add a clip (Tab switches value/alias)"),
            (&["Enter", "y"], "Copy selected clip to clipboard"),
            (&["d"], "Delete selected clip"),
            (&["c"], "Clear status messages"),
        ],
    },
    HelpSection {
        title: "Reorder",
        items: &[
            (&["m"], "Pick up selected clip"),
            (&["j", "k"], "Choose where to drop it"),
            (&["Enter"], "Drop"),
            (&["Esc"], "Cancel"),
            (&["mouse"], "Drag a row onto another row"),
        ],
    },
    HelpSection {
        title: "General",
        items: &[(&["?"], "Show/hide this help"), (&["q", "Esc"], "Quit")],
    },
];

const KEY_COLUMN_WIDTH: usize = 16;

fn add_help_content(content: &mut Vec<Line<'static>>, section: &HelpSection, theme: &Theme) {
    content.push(Line::from(Span::styled(section.title, theme.help_header)));

    for (keys, description) in section.items {
        let keys_text = keys.join("/");
        let padding = " ".repeat(KEY_COLUMN_WIDTH.saturating_sub(keys_text.width()));
        content.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(keys_text, theme.help_key),
            Span::raw(padding),
            Span::styled(*description, theme.help_desc),
        ]));
    }

    content.push(Line::from(""));
}

/// Render help overlay listing every key binding
pub fn render_help_overlay(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, overlay_area);

    let mut content = Vec::new();
    for section in HELP_SECTIONS {
        add_help_content(&mut content, section, theme);
    }
    content.push(Line::from(Span::styled(
        "Press ? or Esc to close",
        theme.help_footer,
    )));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" quickclip help ", theme.help_title))
                .style(Style::default().bg(theme.help_modal_bg))
                .padding(ratatui::widgets::Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, overlay_area);
}
