use anyhow::Result;
use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::controller::ClipListController;
use crate::logging::FlashMessage;
use crate::storage::Config;
use crate::ui::{self, ClipListRenderContext, CopyFeedback, InputField, InputPanelContext, RowHitbox, Theme};

/// Application mode determines which keybindings are active
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Browse the list
    #[default]
    Normal,
    /// Typing into the value/alias inputs (activated with 'a')
    Input,
    /// Keyboard drag-and-drop (activated with 'm')
    Move,
    /// Help overlay (activated with '?')
    Help,
}

/// Terminal front end around the clip list controller
pub struct App {
    /// Current interaction mode
    pub mode: AppMode,

    /// Owns the clip list, persistence and clipboard
    controller: ClipListController,

    pub config: Config,

    theme: Theme,

    /// Selected row in the list
    pub selected_index: usize,

    pub value_input: Input,
    pub alias_input: Input,
    pub input_field: InputField,

    /// Rows showing "Copied!"
    copy_feedback: CopyFeedback,

    /// Controller revision the view last synced with
    seen_revision: u64,

    /// Blocking notification, dismissed by any key
    pub error_message: Option<String>,

    /// Top visible row of the clip list
    list_scroll_offset: usize,

    /// Row areas from the last draw, for mouse routing
    hitboxes: Vec<RowHitbox>,

    /// Flag to request application exit
    pub should_quit: bool,

    /// Flash messages displayed in the status line
    pub flash_messages: Vec<FlashMessage>,

    /// Receiver for flash messages from logger
    flash_rx: Option<Receiver<FlashMessage>>,
}

impl App {
    pub fn new(
        controller: ClipListController,
        config: Config,
        flash_rx: Option<Receiver<FlashMessage>>,
    ) -> Self {
        let copy_feedback =
            CopyFeedback::new(Duration::from_millis(config.general.copied_feedback_ms));
        let seen_revision = controller.revision();

        App {
            mode: AppMode::default(),
            controller,
            config,
            theme: Theme::default(),
            selected_index: 0,
            value_input: Input::default(),
            alias_input: Input::default(),
            input_field: InputField::default(),
            copy_feedback,
            seen_revision,
            error_message: None,
            list_scroll_offset: 0,
            hitboxes: Vec::new(),
            should_quit: false,
            flash_messages: Vec::new(),
            flash_rx,
        }
    }

    pub fn controller(&self) -> &ClipListController {
        &self.controller
    }

    /// Periodic housekeeping: flash messages, copy confirmations, revision sync
    pub fn tick(&mut self, now: Instant) {
        self.poll_flash_messages();
        self.prune_flash_messages(now);
        self.copy_feedback.prune(now);
        self.sync_revision();
    }

    /// Poll flash message receiver and add to queue
    pub fn poll_flash_messages(&mut self) {
        if let Some(rx) = &self.flash_rx {
            while let Ok(msg) = rx.try_recv() {
                self.flash_messages.push(msg);
            }
        }
    }

    /// Remove expired flash messages (based on config duration)
    pub fn prune_flash_messages(&mut self, now: Instant) {
        let duration = Duration::from_millis(self.config.general.flash_message_duration_ms);
        self.flash_messages
            .retain(|msg| now.saturating_duration_since(msg.timestamp) < duration);
    }

    pub fn clear_flash_messages(&mut self) {
        self.flash_messages.clear();
    }

    /// After a mutation the rows are rebuilt: old copy confirmations go away
    /// and the selection is clamped to the new list.
    fn sync_revision(&mut self) {
        let revision = self.controller.revision();
        if revision == self.seen_revision {
            return;
        }
        self.seen_revision = revision;
        self.copy_feedback.clear();

        let len = self.controller.clips().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    fn show_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    /// Add a clip from the input fields
    pub fn submit_input(&mut self) {
        let result = self
            .controller
            .add_clip(self.value_input.value(), self.alias_input.value());
        self.sync_revision();

        match result {
            Ok(Some(index)) => {
                self.value_input.reset();
                self.alias_input.reset();
                self.input_field = InputField::Value;
                self.selected_index = index;
            }
            Ok(None) => {}
            Err(e) => self.show_error(e.to_string()),
        }
    }

    /// Copy the clip at `index`, flashing "Copied!" on success
    pub fn copy_at(&mut self, index: usize) {
        match self.controller.copy_clip(index) {
            Ok(()) => self.copy_feedback.mark(index, Instant::now()),
            Err(e) => self.show_error(e.to_string()),
        }
    }

    pub fn copy_selected(&mut self) {
        if !self.controller.clips().is_empty() {
            self.copy_at(self.selected_index);
        }
    }

    pub fn delete_at(&mut self, index: usize) {
        if let Err(e) = self.controller.delete_clip(index) {
            log::warn!("Delete ignored: {}", e);
        }
        self.sync_revision();
    }

    pub fn delete_selected(&mut self) {
        if !self.controller.clips().is_empty() {
            self.delete_at(self.selected_index);
        }
    }

    pub fn move_up(&mut self, n: usize) {
        self.selected_index = self.selected_index.saturating_sub(n);
    }

    pub fn move_down(&mut self, n: usize) {
        let len = self.controller.clips().len();
        if len > 0 {
            self.selected_index = (self.selected_index + n).min(len - 1);
        }
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected_index = self.controller.clips().len().saturating_sub(1);
    }

    pub fn enter_input_mode(&mut self) {
        self.mode = AppMode::Input;
        self.input_field = InputField::Value;
    }

    /// Pick up the selected clip for a keyboard drag
    pub fn start_move(&mut self) {
        if self.controller.clips().is_empty() {
            return;
        }
        self.controller.drag_start(self.selected_index);
        self.controller.drag_over(self.selected_index);
        self.mode = AppMode::Move;
    }

    /// Shift the drop target by `delta` rows
    fn move_target(&mut self, delta: isize) {
        let drag = self.controller.drag_state();
        let Some(current) = drag.target().or(drag.source()) else {
            return;
        };
        let last = self.controller.clips().len().saturating_sub(1);
        let next = current.saturating_add_signed(delta).min(last);
        if next != current {
            self.controller.drag_leave(current);
            self.controller.drag_over(next);
        }
        self.selected_index = next;
    }

    /// Drop on the highlighted row and end the drag
    pub fn confirm_move(&mut self) {
        let drag = self.controller.drag_state();
        if let Some(target) = drag.target().or(drag.source()) {
            if self.controller.drop_on(target) {
                self.selected_index = target;
            }
        }
        self.controller.drag_end();
        self.sync_revision();
        self.mode = AppMode::Normal;
    }

    /// End the drag without dropping
    pub fn cancel_move(&mut self) {
        if let Some(source) = self.controller.drag_state().source() {
            self.selected_index = source;
        }
        self.controller.drag_end();
        self.mode = AppMode::Normal;
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Help => AppMode::Normal,
            _ => AppMode::Help,
        };
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatch a terminal event
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Handle keyboard event based on current mode
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Any key dismisses the error notification
        if self.error_message.is_some() {
            self.error_message = None;
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.mode == AppMode::Move {
                self.cancel_move();
            }
            self.quit();
            return Ok(());
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Input => self.handle_input_key(key),
            AppMode::Move => self.handle_move_key(key),
            AppMode::Help => self.handle_help_key(key),
        }
        Ok(())
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(1),
            KeyCode::Home => self.jump_to_top(),
            KeyCode::End => self.jump_to_bottom(),
            KeyCode::Char('a') | KeyCode::Char('i') => self.enter_input_mode(),
            KeyCode::Enter | KeyCode::Char('y') => self.copy_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('m') => self.start_move(),
            KeyCode::Char('c') => self.clear_flash_messages(),
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Tab | KeyCode::BackTab => self.input_field = self.input_field.toggle(),
            KeyCode::Esc => self.mode = AppMode::Normal,
            _ => {
                let event = Event::Key(key);
                match self.input_field {
                    InputField::Value => self.value_input.handle_event(&event),
                    InputField::Alias => self.alias_input.handle_event(&event),
                };
            }
        }
    }

    fn handle_move_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_target(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_target(-1),
            KeyCode::Enter => self.confirm_move(),
            KeyCode::Esc => self.cancel_move(),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc) {
            self.mode = AppMode::Normal;
        }
    }

    /// Mouse drag-and-drop and row buttons.
    /// Only active in Normal mode with no notification showing.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.error_message.is_some() || self.mode != AppMode::Normal {
            return;
        }

        let hovered = ui::locate(&self.hitboxes, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match hovered {
                Some(ui::HitTarget::Copy(index)) => {
                    self.selected_index = index;
                    self.copy_at(index);
                }
                Some(ui::HitTarget::Delete(index)) => self.delete_at(index),
                Some(ui::HitTarget::Row(index)) => {
                    self.selected_index = index;
                    self.controller.drag_start(index);
                }
                None => {}
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                let drag = self.controller.drag_state();
                if !drag.is_dragging() {
                    return;
                }
                let row = hovered.map(ui::HitTarget::index);
                if let Some(previous) = drag.target() {
                    if Some(previous) != row {
                        self.controller.drag_leave(previous);
                    }
                }
                if let Some(row) = row {
                    self.controller.drag_over(row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if !self.controller.drag_state().is_dragging() {
                    return;
                }
                if let Some(row) = hovered.map(ui::HitTarget::index) {
                    if self.controller.drop_on(row) {
                        self.selected_index = row;
                    }
                }
                self.controller.drag_end();
                self.sync_revision();
            }
            MouseEventKind::ScrollUp => self.move_up(1),
            MouseEventKind::ScrollDown => self.move_down(1),
            _ => {}
        }
    }

    /// Keep the selected row inside the visible window
    fn update_scroll_offset(&mut self, capacity: usize) {
        if capacity == 0 {
            return;
        }
        if self.selected_index < self.list_scroll_offset {
            self.list_scroll_offset = self.selected_index;
        } else if self.selected_index >= self.list_scroll_offset + capacity {
            self.list_scroll_offset = self.selected_index + 1 - capacity;
        }
        let max_offset = self.controller.clips().len().saturating_sub(capacity);
        self.list_scroll_offset = self.list_scroll_offset.min(max_offset);
    }

    /// Render the TUI
    pub fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Set themed colors for entire frame
        frame.render_widget(
            Block::default().style(
                Style::default()
                    .fg(self.theme.default_fg)
                    .bg(self.theme.default_bg),
            ),
            size,
        );

        let layout = ui::create_main_layout(size);

        self.update_scroll_offset(ui::clip_list::visible_row_capacity(layout.clip_list));

        let rows = self.controller.rows(&self.copy_feedback);
        self.hitboxes = ui::render_clip_list(
            frame,
            layout.clip_list,
            &rows,
            ClipListRenderContext {
                selected: self.selected_index,
                scroll_offset: self.list_scroll_offset,
                theme: &self.theme,
            },
        );

        ui::render_input_panel(
            frame,
            layout.input,
            InputPanelContext {
                value: &self.value_input,
                alias: &self.alias_input,
                focus: self.input_field,
                active: self.mode == AppMode::Input,
                theme: &self.theme,
            },
        );

        ui::render_flash_line(frame, layout.flash, &self.flash_messages, &self.theme);
        ui::render_keyboard_hints(frame, layout.keyboard_hints, self.mode, &self.theme);

        if self.mode == AppMode::Help {
            ui::render_help_overlay(frame, size, &self.theme);
        }

        // Notification takes precedence over other overlays
        if let Some(ref error_msg) = self.error_message {
            ui::render_error_modal(frame, size, error_msg, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardBackend;
    use crate::clipboard::test_support::{FailingClipboard, RecordingClipboard};
    use crate::storage::{ClipPersistence, DEFAULT_STORAGE_KEY, MemoryStore};
    use crate::ui::rows::{COPIED_LABEL, COPY_LABEL};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use serde_json::json;

    fn app_with(values: &[&str], clipboard: Box<dyn ClipboardBackend>) -> (MemoryStore, App) {
        let records: Vec<_> = values
            .iter()
            .map(|v| json!({"value": v, "alias": null}))
            .collect();
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, json!(records));
        let controller = ClipListController::new(
            ClipPersistence::new(Box::new(store.clone()), DEFAULT_STORAGE_KEY),
            clipboard,
        );
        (store, App::new(controller, Config::default(), None))
    }

    fn app(values: &[&str]) -> (MemoryStore, App) {
        app_with(values, Box::new(RecordingClipboard::default()))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
        .unwrap();
    }

    fn render(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }

    fn values(app: &App) -> Vec<String> {
        app.controller()
            .clips()
            .iter()
            .map(|c| c.value.clone())
            .collect()
    }

    #[test]
    fn test_add_through_inputs() {
        let (store, mut app) = app(&["foo"]);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, AppMode::Input);

        type_text(&mut app, "bar");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "B");
        press(&mut app, KeyCode::Enter);

        assert_eq!(values(&app), ["foo", "bar"]);
        assert_eq!(
            app.controller().clips().get(1).unwrap().alias.as_deref(),
            Some("B")
        );
        assert_eq!(app.value_input.value(), "");
        assert_eq!(app.alias_input.value(), "");
        assert_eq!(app.input_field, InputField::Value);
        assert_eq!(app.selected_index, 1);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_blank_value_is_ignored_quietly() {
        let (store, mut app) = app(&[]);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(app.controller().clips().is_empty());
        assert_eq!(app.error_message, None);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_long_alias_shows_notification_and_keeps_input() {
        let (store, mut app) = app(&["a"]);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "value");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "this alias is far too long");
        press(&mut app, KeyCode::Enter);

        assert_eq!(values(&app), ["a"]);
        assert!(app.error_message.as_deref().unwrap().contains("20 characters"));
        assert_eq!(app.value_input.value(), "value");
        assert_eq!(store.write_count(), 0);

        // The next key only dismisses the notification
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.error_message, None);
        assert_eq!(app.alias_input.value(), "this alias is far too long");
    }

    #[test]
    fn test_keyboard_move_forward() {
        let (store, mut app) = app(&["A", "B", "C", "D"]);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.mode, AppMode::Move);
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert!(app.controller().drag_state().is_target(3));
        press(&mut app, KeyCode::Enter);

        assert_eq!(values(&app), ["B", "C", "D", "A"]);
        assert_eq!(app.selected_index, 3);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(!app.controller().drag_state().is_dragging());
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_keyboard_move_backward() {
        let (_store, mut app) = app(&["A", "B", "C", "D"]);
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('m'));
        for _ in 0..5 {
            press(&mut app, KeyCode::Char('k'));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(values(&app), ["D", "A", "B", "C"]);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_keyboard_move_cancel() {
        let (store, mut app) = app(&["A", "B", "C"]);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(values(&app), ["A", "B", "C"]);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(!app.controller().drag_state().is_dragging());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_drop_on_own_slot_writes_nothing() {
        let (store, mut app) = app(&["A", "B"]);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(values(&app), ["A", "B"]);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_copy_flashes_confirmation() {
        let clipboard = RecordingClipboard::default();
        let (store, mut app) = app_with(&["A", "B"], Box::new(clipboard.clone()));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(clipboard.last().as_deref(), Some("B"));
        let rows = app.controller().rows(&app.copy_feedback);
        assert_eq!(rows[1].copy_label, COPIED_LABEL);
        assert_eq!(rows[0].copy_label, COPY_LABEL);
        assert_eq!(values(&app), ["A", "B"]);
        assert_eq!(store.write_count(), 0);

        app.tick(Instant::now() + Duration::from_millis(1600));
        let rows = app.controller().rows(&app.copy_feedback);
        assert_eq!(rows[1].copy_label, COPY_LABEL);
    }

    #[test]
    fn test_copy_failure_shows_notification() {
        let (_store, mut app) = app_with(&["A"], Box::new(FailingClipboard));
        press(&mut app, KeyCode::Enter);
        let message = app.error_message.clone().unwrap();
        assert!(message.contains("Failed to copy item to clipboard"));
        assert_eq!(values(&app), ["A"]);
    }

    #[test]
    fn test_delete_clamps_selection() {
        let (store, mut app) = app(&["A", "B", "C"]);
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(values(&app), ["A", "B"]);
        assert_eq!(app.selected_index, 1);
        assert_eq!(store.write_count(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('d'));
        assert!(values(&app).is_empty());
        assert_eq!(app.selected_index, 0);
        assert_eq!(store.write_count(), 3);
    }

    #[test]
    fn test_mouse_drag_reorders() {
        let (store, mut app) = app(&["A", "B", "C", "D"]);
        render(&mut app);

        // Header occupies row 0, clips start at row 1
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 10, 1);
        assert!(app.controller().drag_state().is_source(0));

        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 10, 2);
        assert!(app.controller().drag_state().is_target(1));

        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 10, 4);
        assert!(app.controller().drag_state().is_target(3));
        assert!(!app.controller().drag_state().is_target(1));

        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 10, 4);
        assert_eq!(values(&app), ["B", "C", "D", "A"]);
        assert!(!app.controller().drag_state().is_dragging());
        assert_eq!(app.selected_index, 3);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_mouse_release_outside_rows_cancels() {
        let (store, mut app) = app(&["A", "B"]);
        render(&mut app);

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 10, 1);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 10, 2);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 10, 10);
        assert_eq!(app.controller().drag_state().target(), None);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 10, 10);

        assert_eq!(values(&app), ["A", "B"]);
        assert!(!app.controller().drag_state().is_dragging());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_mouse_click_is_not_a_move() {
        let (store, mut app) = app(&["A", "B"]);
        render(&mut app);
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 10, 2);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 10, 2);
        assert_eq!(values(&app), ["A", "B"]);
        assert_eq!(app.selected_index, 1);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_mouse_buttons() {
        let clipboard = RecordingClipboard::default();
        let (_store, mut app) = app_with(&["A", "B", "C"], Box::new(clipboard.clone()));
        render(&mut app);

        let copy = app.hitboxes[2].copy;
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), copy.x, copy.y);
        assert_eq!(clipboard.last().as_deref(), Some("C"));

        let delete = app.hitboxes[0].delete;
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), delete.x, delete.y);
        assert_eq!(values(&app), ["B", "C"]);
    }

    #[test]
    fn test_draw_shows_error_modal() {
        let (_store, mut app) = app_with(&["A"], Box::new(FailingClipboard));
        press(&mut app, KeyCode::Enter);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("Error"));
        assert!(screen.contains("dismiss"));
    }

    #[test]
    fn test_help_toggle_and_quit() {
        let (_store, mut app) = app(&[]);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
