//! Draggable card - bounded drag with spring snap-back
//!
//! Grab the card and it follows the pointer inside a fixed offset box; let go
//! and it springs back to its rest position. Hovering lifts and tilts it
//! slightly.

mod card;
mod card_ui;

pub use card::{CardConfig, CardState, CardTransform, HoverStyle};
pub use card_ui::{CardResponse, DraggableCard};
