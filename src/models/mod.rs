pub mod clip;
pub mod drag;

pub use clip::{Clip, ClipError, ClipList, MAX_ALIAS_CHARS};
pub use drag::{DragState, DropOutcome};
