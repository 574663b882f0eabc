use log::Level;
use ratatui::prelude::*;

/// Runtime theme with direct field access for all UI elements
#[derive(Debug, Clone)]
pub struct Theme {
    // === Default Colors ===
    pub default_fg: Color,
    pub default_bg: Color,

    // === Backgrounds ===
    pub selection_bg: Color,
    pub status_bar_bg: Color,
    pub help_modal_bg: Color,
    pub error_modal_bg: Color,

    // === Clip list ===
    pub clip_list_header: Style,
    pub clip_list_item_count: Style,
    pub clip_number: Style,
    pub clip_alias: Style,
    pub clip_text: Style,
    pub clip_text_selected: Style,
    pub drag_handle: Style,
    pub dragging: Style,
    pub drag_over: Style,
    pub empty_hint: Style,

    // === Row buttons ===
    pub copy_button: Style,
    pub copied_button: Style,
    pub delete_button: Style,

    // === Input panel ===
    pub input_border: Style,
    pub input_border_focused: Style,
    pub input_text: Style,
    pub alias_counter: Style,
    pub alias_counter_over: Style,

    // === Status bar ===
    pub status_key: Style,
    pub status_desc: Style,
    pub flash_error: Style,
    pub flash_warn: Style,
    pub flash_info: Style,

    // === Help modal ===
    pub help_title: Style,
    pub help_header: Style,
    pub help_key: Style,
    pub help_desc: Style,
    pub help_footer: Style,

    // === Error modal ===
    pub error_text: Style,
    pub error_border: Style,
}

impl Theme {
    /// Style used to show a flash message of the given level
    pub fn flash_style(&self, level: Level) -> Style {
        match level {
            Level::Error => self.flash_error,
            Level::Warn => self.flash_warn,
            _ => self.flash_info,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        let fg = Color::Reset;
        let accent = Color::Cyan;
        let muted = Color::DarkGray;

        Theme {
            default_fg: fg,
            default_bg: Color::Reset,

            selection_bg: Color::Rgb(50, 54, 62),
            status_bar_bg: Color::Reset,
            help_modal_bg: Color::Rgb(30, 32, 38),
            error_modal_bg: Color::Rgb(48, 20, 24),

            clip_list_header: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            clip_list_item_count: Style::default().fg(muted),
            clip_number: Style::default().fg(muted),
            clip_alias: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            clip_text: Style::default().fg(fg),
            clip_text_selected: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            drag_handle: Style::default().fg(muted),
            dragging: Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
            drag_over: Style::default().add_modifier(Modifier::UNDERLINED),
            empty_hint: Style::default().fg(muted).add_modifier(Modifier::ITALIC),

            copy_button: Style::default().fg(accent),
            copied_button: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            delete_button: Style::default().fg(Color::Red),

            input_border: Style::default().fg(muted),
            input_border_focused: Style::default().fg(accent),
            input_text: Style::default().fg(fg),
            alias_counter: Style::default().fg(muted),
            alias_counter_over: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            status_key: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            status_desc: Style::default().fg(muted),
            flash_error: Style::default().fg(Color::Red),
            flash_warn: Style::default().fg(Color::Yellow),
            flash_info: Style::default().fg(muted),

            help_title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            help_header: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            help_key: Style::default().fg(accent),
            help_desc: Style::default().fg(fg),
            help_footer: Style::default().fg(muted).add_modifier(Modifier::ITALIC),

            error_text: Style::default().fg(Color::White),
            error_border: Style::default().fg(Color::Red),
        }
    }
}
