/// Drag-and-drop reorder state.
///
/// `Idle -> Dragging -> (drop) Dropped -> (end) Idle`, or
/// `Dragging -> (end) Idle` when the drag is cancelled without a drop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// A row is being dragged; `over` is the row currently highlighted as drop target
    Dragging { source: usize, over: Option<usize> },
    /// A drop has been handled, waiting for the drag to end
    Dropped,
}

/// What a drop event resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Reposition the clip at `from` to `to`
    Move { from: usize, to: usize },
    /// Released on its own slot
    SameSlot,
    /// No drag start was recorded
    NoSource,
}

impl DragState {
    /// Record `index` as the pending source
    pub fn start(&mut self, index: usize) {
        *self = DragState::Dragging {
            source: index,
            over: None,
        };
    }

    /// Pointer entered a candidate target row
    pub fn enter(&mut self, index: usize) {
        if let DragState::Dragging { over, .. } = self {
            *over = Some(index);
        }
    }

    /// Pointer left a row, clearing its highlight
    pub fn leave(&mut self, index: usize) {
        if let DragState::Dragging { over, .. } = self {
            if *over == Some(index) {
                *over = None;
            }
        }
    }

    /// Resolve a drop on `target`. The recorded source is consumed.
    pub fn drop_on(&mut self, target: usize) -> DropOutcome {
        let outcome = match *self {
            DragState::Dragging { source, .. } if source == target => DropOutcome::SameSlot,
            DragState::Dragging { source, .. } => DropOutcome::Move {
                from: source,
                to: target,
            },
            DragState::Idle | DragState::Dropped => DropOutcome::NoSource,
        };
        if outcome != DropOutcome::NoSource {
            *self = DragState::Dropped;
        }
        outcome
    }

    /// Terminal transition back to `Idle`.
    /// Returns true if the drag was cancelled (ended without a drop).
    pub fn end(&mut self) -> bool {
        let cancelled = matches!(self, DragState::Dragging { .. });
        *self = DragState::Idle;
        cancelled
    }

    /// Row `index` is the one being dragged
    pub fn is_source(&self, index: usize) -> bool {
        matches!(*self, DragState::Dragging { source, .. } if source == index)
    }

    /// Row `index` is highlighted as the drop target
    pub fn is_target(&self, index: usize) -> bool {
        matches!(*self, DragState::Dragging { over: Some(over), .. } if over == index)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Row currently highlighted as the drop target
    pub fn target(&self) -> Option<usize> {
        match *self {
            DragState::Dragging { over, .. } => over,
            _ => None,
        }
    }

    /// Index recorded at drag start
    pub fn source(&self) -> Option<usize> {
        match *self {
            DragState::Dragging { source, .. } => Some(source),
            _ => None,
        }
    }
}
