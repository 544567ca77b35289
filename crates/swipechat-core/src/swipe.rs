//! Swipe affordances on message rows
//!
//! Dragging a row left reveals the reply and edit actions; dragging it right
//! reveals delete. Only one row is open at a time, and taking an action
//! closes it. This is pure bookkeeping; drawing the sliding row is the
//! front-end's job.

use serde::Serialize;

use crate::types::MessageId;

/// Leftward drag (px) needed to reveal the reply/edit actions.
pub const ACTIONS_THRESHOLD_PX: f64 = 40.0;
/// Rightward drag (px) needed to reveal delete.
pub const DELETE_THRESHOLD_PX: f64 = 30.0;

/// Which affordance a row has revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SwipeSide {
    /// Reply and edit, revealed on the trailing edge by a leftward drag
    Actions,
    /// Delete, revealed on the leading edge by a rightward drag
    Delete,
}

impl SwipeSide {
    /// Side revealed by a horizontal drag of `dx` px (negative is left).
    pub fn from_drag(dx: f64) -> Option<SwipeSide> {
        if dx <= -ACTIONS_THRESHOLD_PX {
            Some(SwipeSide::Actions)
        } else if dx >= DELETE_THRESHOLD_PX {
            Some(SwipeSide::Delete)
        } else {
            None
        }
    }
}

/// Tracks the single open row and the drag in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    open: Option<(MessageId, SwipeSide)>,
    drag: Option<(MessageId, f64)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pointer went down on row `id` at horizontal position `x`.
    pub fn begin(&mut self, id: MessageId, x: f64) {
        self.drag = Some((id, x));
    }

    /// The pointer was released at `x`. Returns the side now open on that
    /// row, if any.
    ///
    /// A drag past a threshold opens that side (closing any other row). A
    /// drag towards the opposite side of an open row closes it. Short drags
    /// and taps leave things as they are so buttons inside an open row still
    /// receive their clicks.
    pub fn release(&mut self, x: f64) -> Option<SwipeSide> {
        let (id, start) = self.drag.take()?;
        match (SwipeSide::from_drag(x - start), self.side_for(id)) {
            (Some(side), Some(current)) if side != current => self.close(id),
            (Some(side), _) => self.open = Some((id, side)),
            (None, _) => {}
        }
        self.side_for(id)
    }

    /// Abandon the drag in progress (pointer left the row).
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Open `side` on row `id`, closing any other row.
    pub fn open(&mut self, id: MessageId, side: SwipeSide) {
        self.open = Some((id, side));
    }

    /// Close row `id` if it is open.
    pub fn close(&mut self, id: MessageId) {
        if matches!(self.open, Some((open_id, _)) if open_id == id) {
            self.open = None;
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Side revealed on row `id`, if it is the open row.
    pub fn side_for(&self, id: MessageId) -> Option<SwipeSide> {
        match self.open {
            Some((open_id, side)) if open_id == id => Some(side),
            _ => None,
        }
    }

    pub fn open_row(&self) -> Option<MessageId> {
        self.open.map(|(id, _)| id)
    }
}
