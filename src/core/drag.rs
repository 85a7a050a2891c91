//! Bounded drag state machine for snap-back cards.
//!
//! Two phases: `Idle` (offset is exactly zero) and `Dragging` (offset follows
//! the pointer, clamped to [`DragBounds`]). The offset is always recomputed
//! from the grab anchor and the current pointer position, never accumulated
//! from deltas, so repeated events with the same pointer are idempotent.

use eframe::egui::{Pos2, Vec2};
use log::trace;
use serde::{Deserialize, Serialize};

/// Allowed offset box relative to the rest position (px).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragBounds {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for DragBounds {
    fn default() -> Self {
        Self {
            top: -50.0,
            left: -50.0,
            right: 50.0,
            bottom: 50.0,
        }
    }
}

impl DragBounds {
    /// Same extent in every direction.
    pub fn uniform(extent: f32) -> Self {
        let e = extent.abs();
        Self {
            top: -e,
            left: -e,
            right: e,
            bottom: e,
        }
    }

    /// Clamp an offset into the box. Inverted edges are treated as swapped.
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        let (min_x, max_x) = ordered(self.left, self.right);
        let (min_y, max_y) = ordered(self.top, self.bottom);
        let x = if offset.x.is_nan() { 0.0 } else { offset.x.clamp(min_x, max_x) };
        let y = if offset.y.is_nan() { 0.0 } else { offset.y.clamp(min_y, max_y) };
        Vec2::new(x, y)
    }

    pub fn contains(&self, offset: Vec2) -> bool {
        self.clamp(offset) == offset
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    let (a, b) = (
        if a.is_finite() { a } else { 0.0 },
        if b.is_finite() { b } else { 0.0 },
    );
    if a <= b { (a, b) } else { (b, a) }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// `anchor` is the pointer position that maps to a zero offset.
    Dragging { anchor: Pos2 },
}

/// Per-card drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    phase: DragPhase,
    offset: Vec2,
}

impl DragState {
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Current offset; always `Vec2::ZERO` when idle.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Begin a drag at `pointer`. `from` is where the card is currently drawn
    /// (non-zero when grabbed mid-way through a snap-back), so the card does
    /// not jump under the pointer.
    pub fn on_drag_start(&mut self, pointer: Pos2, from: Vec2, bounds: &DragBounds) {
        let start = bounds.clamp(from);
        self.phase = DragPhase::Dragging { anchor: pointer - start };
        self.offset = start;
        trace!("drag start at {:?} from {:?}", pointer, start);
    }

    /// Track the pointer. Ignored unless dragging.
    pub fn on_drag(&mut self, pointer: Pos2, bounds: &DragBounds) -> Vec2 {
        if let DragPhase::Dragging { anchor } = self.phase {
            self.offset = bounds.clamp(pointer - anchor);
        }
        self.offset
    }

    /// Release. Returns the offset the card was released at; the state itself
    /// is back at the origin.
    pub fn on_drag_end(&mut self) -> Vec2 {
        let released = self.offset;
        if self.is_dragging() {
            trace!("drag end at {:?}", released);
        }
        self.phase = DragPhase::Idle;
        self.offset = Vec2::ZERO;
        released
    }

    /// Interrupted gesture (pointer left, widget vanished). Same guarantee as
    /// a release.
    pub fn cancel(&mut self) -> Vec2 {
        if self.is_dragging() {
            trace!("drag cancelled at {:?}", self.offset);
        }
        self.on_drag_end()
    }
}
