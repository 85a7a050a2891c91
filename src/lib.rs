//! UNIHOOK - landing page with a scroll-linked timeline and draggable cards.
//!
//! Re-exports all modules for use by binary targets.

// Core math (progress, drag, spring)
pub mod core;

// App modules
pub mod app;
pub mod cli;
pub mod config;
pub mod help;
pub mod page;
pub mod settings;
pub mod shell;
pub mod widgets;

pub use app::LandingApp;
pub use core::{DragBounds, FillState, ScrollOffsets, SpringConfig};
pub use settings::AppSettings;
pub use widgets::card::{CardConfig, DraggableCard};
pub use widgets::timeline::{Step, TimelineConfig, TimelineState, render_timeline};
