//! Core math: scroll progress, connector fill, drag and spring physics.
//!
//! Pure state and arithmetic only. Widgets in [`crate::widgets`] feed these
//! types with geometry and pointer input sampled from egui each frame.

pub mod drag;
pub mod progress;
pub mod spring;

pub use drag::{DragBounds, DragPhase, DragState};
pub use progress::{
    interpolate, progress, progress_with, ContainerEdge, FillState, ScrollGeometry, ScrollOffset,
    ScrollOffsets, DEFAULT_OPACITY_RAMP,
};
pub use spring::{SpringConfig, SpringState};
