//! Timeline widget - scroll-linked vertical step list
//!
//! Steps stack top to bottom with sticky titles; a connector line fills as the
//! page scrolls through the list.

mod timeline;
mod timeline_helpers;
mod timeline_ui;

pub use timeline::{
    LayoutMeasurement,
    Step,
    StepContent,
    TimelineConfig,
    TimelineState,
    sticky_title_y,
};
pub use timeline_ui::{TimelineResponse, render_timeline};
