pub mod clip_list;
pub mod error_modal;
pub mod help;
pub mod input;
pub mod layout;
pub mod rows;
pub mod status;
pub mod theme;

pub use clip_list::{ClipListRenderContext, HitTarget, RowHitbox, locate, render_clip_list};
pub use error_modal::render_error_modal;
pub use help::render_help_overlay;
pub use input::{InputField, InputPanelContext, render_input_panel};
pub use layout::{MainLayout, centered_rect, create_main_layout};
pub use rows::{CopyFeedback, RowView, build_rows};
pub use status::{render_flash_line, render_keyboard_hints};
pub use theme::Theme;
