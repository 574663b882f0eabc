//! Pure mapping from the clip list to row descriptions.
//!
//! Rows are rebuilt from scratch on every render, so each row's `index` always
//! matches the current list snapshot.

use std::time::{Duration, Instant};

use crate::models::{ClipList, DragState};

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const DELETE_LABEL: &str = "Delete";

/// Everything needed to draw one clip row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Current position in the list
    pub index: usize,
    pub alias: Option<String>,
    pub value: String,
    pub copy_label: &'static str,
    pub delete_label: &'static str,
    pub draggable: bool,
    /// Row is the drag source
    pub dragging: bool,
    /// Row is highlighted as the drop target
    pub drag_over: bool,
}

/// Rows currently showing the "Copied!" confirmation
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    duration: Duration,
    active: Vec<(usize, Instant)>,
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        CopyFeedback {
            duration,
            active: Vec::new(),
        }
    }

    /// Start (or restart) the confirmation for row `index`
    pub fn mark(&mut self, index: usize, now: Instant) {
        self.active.retain(|&(i, _)| i != index);
        self.active.push((index, now));
    }

    /// Revert rows whose confirmation has expired
    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.active
            .retain(|&(_, since)| now.saturating_duration_since(since) < duration);
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.iter().any(|&(i, _)| i == index)
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        CopyFeedback::new(Duration::from_millis(1500))
    }
}

/// Build one row per clip, in list order
pub fn build_rows(clips: &ClipList, drag: &DragState, feedback: &CopyFeedback) -> Vec<RowView> {
    clips
        .iter()
        .enumerate()
        .map(|(index, clip)| RowView {
            index,
            alias: clip.alias.clone(),
            value: clip.value.clone(),
            copy_label: if feedback.is_active(index) {
                COPIED_LABEL
            } else {
                COPY_LABEL
            },
            delete_label: DELETE_LABEL,
            draggable: true,
            dragging: drag.is_source(index),
            drag_over: drag.is_target(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Clip;

    fn sample() -> ClipList {
        ClipList::from_clips(vec![
            Clip {
                value: "foo".into(),
                alias: None,
            },
            Clip {
                value: "bar".into(),
                alias: Some("B".into()),
            },
        ])
    }

    #[test]
    fn test_one_row_per_clip_in_order() {
        let rows = build_rows(&sample(), &DragState::Idle, &CopyFeedback::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].value, "foo");
        assert_eq!(rows[0].alias, None);
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].alias.as_deref(), Some("B"));
        assert!(rows.iter().all(|r| r.draggable));
        assert!(rows.iter().all(|r| r.copy_label == COPY_LABEL));
        assert!(rows.iter().all(|r| r.delete_label == DELETE_LABEL));
    }

    #[test]
    fn test_render_is_idempotent() {
        let clips = sample();
        let feedback = CopyFeedback::default();
        let first = build_rows(&clips, &DragState::Idle, &feedback);
        let second = build_rows(&clips, &DragState::Idle, &feedback);
        assert_eq!(first, second);
    }

    #[test]
    fn test_drag_markers() {
        let mut drag = DragState::default();
        drag.start(0);
        drag.enter(1);
        let rows = build_rows(&sample(), &drag, &CopyFeedback::default());
        assert!(rows[0].dragging && !rows[0].drag_over);
        assert!(!rows[1].dragging && rows[1].drag_over);

        drag.end();
        let rows = build_rows(&sample(), &drag, &CopyFeedback::default());
        assert!(rows.iter().all(|r| !r.dragging && !r.drag_over));
    }

    #[test]
    fn test_copy_feedback_expires() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new(Duration::from_millis(1500));
        feedback.mark(1, start);

        let rows = build_rows(&sample(), &DragState::Idle, &feedback);
        assert_eq!(rows[0].copy_label, COPY_LABEL);
        assert_eq!(rows[1].copy_label, COPIED_LABEL);

        feedback.prune(start + Duration::from_millis(1499));
        assert!(feedback.is_active(1));
        feedback.prune(start + Duration::from_millis(1500));
        assert!(!feedback.is_active(1));
    }

    #[test]
    fn test_copy_feedback_remark_restarts_timer() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new(Duration::from_millis(1500));
        feedback.mark(0, start);
        feedback.mark(0, start + Duration::from_millis(1000));
        feedback.prune(start + Duration::from_millis(2000));
        assert!(feedback.is_active(0));
    }
}
