use crate::clipboard::ClipboardBackend;
use crate::models::{Clip, ClipError, ClipList, DragState, DropOutcome};
use crate::storage::ClipPersistence;
use crate::ui::rows::{CopyFeedback, RowView, build_rows};

/// Owns the clip list for the lifetime of the UI.
///
/// Every mutation writes the whole list through to the store and bumps the
/// revision, which tells the view to rebuild its rows.
pub struct ClipListController {
    clips: ClipList,
    persistence: ClipPersistence,
    clipboard: Box<dyn ClipboardBackend>,
    drag: DragState,
    revision: u64,
}

impl ClipListController {
    /// Load the stored list and take ownership of the collaborators
    pub fn new(persistence: ClipPersistence, clipboard: Box<dyn ClipboardBackend>) -> Self {
        let clips = persistence.load();
        log::debug!(
            "Controller ready with {} clips under '{}', clipboard backend: {}",
            clips.len(),
            persistence.key(),
            clipboard.name()
        );

        ClipListController {
            clips,
            persistence,
            clipboard,
            drag: DragState::Idle,
            revision: 0,
        }
    }

    pub fn clips(&self) -> &ClipList {
        &self.clips
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Incremented after every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current row descriptions, rebuilt from scratch
    pub fn rows(&self, feedback: &CopyFeedback) -> Vec<RowView> {
        build_rows(&self.clips, &self.drag, feedback)
    }

    /// Append a clip from raw input.
    ///
    /// Returns `Ok(None)` without touching anything when the value is blank.
    pub fn add_clip(&mut self, value: &str, alias: &str) -> Result<Option<usize>, ClipError> {
        let Some(clip) = Clip::from_input(value, alias)? else {
            log::debug!("Ignoring add with empty value");
            return Ok(None);
        };

        let index = self.clips.push(clip);
        log::info!("Added clip at position {}", index);
        self.commit();
        Ok(Some(index))
    }

    /// Remove the clip at `index`
    pub fn delete_clip(&mut self, index: usize) -> Result<Clip, ClipError> {
        let clip = self.clips.remove(index)?;
        log::info!("Deleted clip at position {}", index);
        self.commit();
        Ok(clip)
    }

    /// Write the value at `index` to the clipboard. Never touches the list.
    pub fn copy_clip(&self, index: usize) -> Result<(), ClipError> {
        let clip = self.clips.get(index).ok_or(ClipError::IndexOutOfRange {
            index,
            len: self.clips.len(),
        })?;

        self.clipboard.write_text(&clip.value).map_err(|e| {
            log::error!("Failed to copy: {:#}", e);
            ClipError::Clipboard(format!("{:#}", e))
        })?;

        log::debug!("Copied clip {} via {}", index, self.clipboard.name());
        Ok(())
    }

    /// Reposition a clip with remove-then-insert semantics.
    /// Persists only when the list actually changed.
    pub fn move_clip(&mut self, from: usize, to: usize) -> Result<bool, ClipError> {
        let moved = self.clips.move_clip(from, to)?;
        if moved {
            log::info!("Moved clip from {} to {}", from, to);
            self.commit();
        }
        Ok(moved)
    }

    pub fn drag_start(&mut self, index: usize) {
        if index >= self.clips.len() {
            log::warn!("Ignoring drag start on missing row {}", index);
            return;
        }
        log::debug!("Drag started on row {}", index);
        self.drag.start(index);
    }

    /// Pointer is over a candidate drop target
    pub fn drag_over(&mut self, index: usize) {
        self.drag.enter(index);
    }

    pub fn drag_leave(&mut self, index: usize) {
        self.drag.leave(index);
    }

    /// Handle a drop on `target`. Returns true if the list was reordered.
    pub fn drop_on(&mut self, target: usize) -> bool {
        match self.drag.drop_on(target) {
            DropOutcome::Move { from, to } => match self.move_clip(from, to) {
                Ok(moved) => moved,
                Err(e) => {
                    log::warn!("Ignoring drop: {}", e);
                    false
                }
            },
            DropOutcome::SameSlot => false,
            DropOutcome::NoSource => {
                log::debug!("Drop on row {} without a drag start", target);
                false
            }
        }
    }

    /// Clear all drag markers, whether or not a drop happened
    pub fn drag_end(&mut self) {
        if self.drag.end() {
            log::debug!("Drag cancelled");
        }
    }

    fn commit(&mut self) {
        self.persistence.save(&self.clips);
        self.revision += 1;
    }
}
