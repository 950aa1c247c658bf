//! Tap-to-select input
//!
//! Collapses tap sequences onto the same `move_or_merge` call that a drag and
//! drop produces. A drop needs no resolution: it maps straight to
//! `Action::MoveOrMerge { from: drag_source, to: drop_target }`.

use crate::sim::{Action, Board};

/// What a single tap resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    /// Tap on an empty slot with nothing selected
    None,
    /// Slot is now selected
    Selected(usize),
    /// Selected slot tapped again, selection dropped
    Cleared,
    /// Second tap on another slot: run this move
    MoveOrMerge { from: usize, to: usize },
}

impl TapAction {
    /// Engine action to run, if any
    pub fn action(&self) -> Option<Action> {
        match *self {
            TapAction::MoveOrMerge { from, to } => Some(Action::MoveOrMerge { from, to }),
            _ => None,
        }
    }
}

/// Tracks the currently selected slot between taps
#[derive(Debug, Clone, Default)]
pub struct TapSelector {
    selected: Option<usize>,
}

impl TapSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Resolve a tap on `index` against the current board
    pub fn tap(&mut self, index: usize, board: &Board) -> TapAction {
        match self.selected.take() {
            None if board.get(index).is_some() => {
                self.selected = Some(index);
                TapAction::Selected(index)
            }
            None => TapAction::None,
            Some(from) if from == index => TapAction::Cleared,
            Some(from) => TapAction::MoveOrMerge { from, to: index },
        }
    }
}
