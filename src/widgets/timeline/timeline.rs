//! Timeline widget - steps, configuration and state.
//!
//! Data flow: the host hands an ordered `&[Step]` to `render_timeline` every
//! frame. The renderer measures the list once after the first layout pass
//! (`TimelineState::mount`), then on every frame feeds the container's position
//! relative to the scroll viewport into `TimelineState::on_scroll`, which maps
//! it to progress and the connector `FillState`.

use eframe::egui::Ui;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{FillState, ScrollGeometry, ScrollOffsets, DEFAULT_OPACITY_RAMP};

/// Anything that can paint itself into a step's content region.
///
/// The timeline never inspects content; it only hands it a `Ui`.
pub trait StepContent {
    fn ui(&self, ui: &mut Ui);
}

impl<F> StepContent for F
where
    F: Fn(&mut Ui),
{
    fn ui(&self, ui: &mut Ui) {
        self(ui)
    }
}

/// One narrative entry: a title and opaque content.
pub struct Step {
    pub title: String,
    pub content: Box<dyn StepContent>,
}

impl Step {
    pub fn new(title: impl Into<String>, content: impl StepContent + 'static) -> Self {
        Self {
            title: title.into(),
            content: Box::new(content),
        }
    }
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step").field("title", &self.title).finish_non_exhaustive()
    }
}

/// Configuration for timeline widget
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub max_width: f32,          // Container width cap
    pub horizontal_padding: f32, // Inset on both sides of the container
    pub step_spacing: f32,       // Space above every step row
    pub bottom_padding: f32,     // Space below the last row
    pub column_gap: f32,         // Gap between title column and content
    pub title_width: f32,        // Title column width (incl. indent)
    pub title_indent: f32,       // Title text offset from the column's left edge
    pub title_size: f32,
    pub sticky_top: f32,         // Titles pin this far below the viewport top
    pub line_x: f32,             // Connector center, from the container's inner left edge
    pub line_width: f32,
    pub marker_radius: f32,
    pub offsets: ScrollOffsets,
    pub opacity_ramp: f32,       // Progress over which the fill fades in
    pub remeasure_on_resize: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            max_width: 896.0,
            horizontal_padding: 40.0,
            step_spacing: 160.0,
            bottom_padding: 80.0,
            column_gap: 40.0,
            title_width: 300.0,
            title_indent: 80.0,
            title_size: 36.0,
            sticky_top: 160.0,
            line_x: 32.0,
            line_width: 2.0,
            marker_radius: 8.0,
            offsets: ScrollOffsets::default(),
            opacity_ramp: DEFAULT_OPACITY_RAMP,
            remeasure_on_resize: true,
        }
    }
}

/// Measured geometry of the rendered step list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutMeasurement {
    pub total_height: f32,
    /// Container width the measurement was taken at.
    pub width: f32,
    /// Top of each step row relative to the list top.
    pub step_offsets: Vec<f32>,
}

/// Timeline state (persistent between frames, owned by the host)
#[derive(Clone, Debug, Default)]
pub struct TimelineState {
    measurement: Option<LayoutMeasurement>,
    geometry: Option<ScrollGeometry>,
    progress: f32,
    fill: FillState,
    remeasure_requested: bool,
}

impl TimelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.measurement.is_some()
    }

    pub fn measurement(&self) -> Option<&LayoutMeasurement> {
        self.measurement.as_ref()
    }

    /// Measured list height, 0 before the first layout pass.
    pub fn total_height(&self) -> f32 {
        self.measurement.as_ref().map_or(0.0, |m| m.total_height)
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn fill(&self) -> FillState {
        self.fill
    }

    pub fn geometry(&self) -> Option<ScrollGeometry> {
        self.geometry
    }

    /// Whether the renderer should take a fresh measurement this frame.
    pub fn needs_measure(&self, width: f32, config: &TimelineConfig) -> bool {
        match &self.measurement {
            None => true,
            Some(_) if self.remeasure_requested => true,
            Some(m) => config.remeasure_on_resize && (m.width - width).abs() > 0.5,
        }
    }

    /// Force a measurement on the next frame (content changed).
    pub fn request_remeasure(&mut self) {
        self.remeasure_requested = true;
    }

    /// Record the measured list. Cached scroll geometry is dropped so the next
    /// `on_scroll` recomputes against the new height.
    pub fn mount(&mut self, measurement: LayoutMeasurement) {
        if self.measurement.as_ref() != Some(&measurement) {
            debug!(
                "Timeline measured: {} steps, height {:.1}px at width {:.1}px",
                measurement.step_offsets.len(),
                measurement.total_height,
                measurement.width
            );
        }
        self.measurement = Some(measurement);
        self.remeasure_requested = false;
        self.geometry = None;
    }

    /// Recompute progress and fill from the container's current position.
    ///
    /// Pure arithmetic over cached measurements; calling it again with the same
    /// geometry returns the cached fill unchanged.
    pub fn on_scroll(&mut self, geometry: ScrollGeometry, config: &TimelineConfig) -> FillState {
        if self.geometry == Some(geometry) {
            return self.fill;
        }

        self.progress = geometry.progress(&config.offsets);
        self.fill = FillState::from_progress(self.progress, self.total_height(), config.opacity_ramp);
        self.geometry = Some(geometry);
        self.fill
    }

    /// Index of the step whose row has reached the sticky line, if any.
    pub fn active_step(&self, config: &TimelineConfig) -> Option<usize> {
        let measurement = self.measurement.as_ref()?;
        let geometry = self.geometry?;
        let list_top = geometry.container_top - geometry.scroll_y;

        measurement
            .step_offsets
            .iter()
            .rposition(|offset| list_top + offset + config.step_spacing <= config.sticky_top + 1.0)
    }

    /// Drop measurement and scroll caches.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Vertical position of a sticky title inside its row.
///
/// Mirrors `position: sticky; top: <pin>` on a `self-start` item: the title
/// sits at the top of its row, follows the pin line once the row scrolls past
/// it, and never leaves the row.
pub fn sticky_title_y(row_top: f32, row_bottom: f32, title_height: f32, pin_y: f32) -> f32 {
    let latest = (row_bottom - title_height).max(row_top);
    pin_y.clamp(row_top, latest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(total_height: f32, steps: usize) -> LayoutMeasurement {
        LayoutMeasurement {
            total_height,
            width: 800.0,
            step_offsets: (0..steps).map(|i| i as f32 * total_height / steps as f32).collect(),
        }
    }

    fn geometry_at(container_top: f32, height: f32) -> ScrollGeometry {
        ScrollGeometry {
            scroll_y: 0.0,
            container_top,
            container_height: height,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn test_unmounted_state_has_flat_connector() {
        let config = TimelineConfig::default();
        let mut state = TimelineState::new();

        let fill = state.on_scroll(geometry_at(-500.0, 0.0), &config);

        assert!(!state.is_mounted());
        assert_eq!(fill.height, 0.0);
        assert_eq!(state.total_height(), 0.0);
    }

    #[test]
    fn test_four_step_scenario() {
        let config = TimelineConfig::default();
        let mut state = TimelineState::new();
        let total = 2800.0;
        state.mount(measured(total, 4));

        // Top at 10% of the viewport, bottom well below 50%
        let fill = state.on_scroll(geometry_at(100.0, total), &config);
        assert_eq!(state.progress(), 0.0);
        assert_eq!(fill.height, 0.0);

        // Bottom reaches 50% of the viewport
        let fill = state.on_scroll(geometry_at(500.0 - total, total), &config);
        assert_eq!(state.progress(), 1.0);
        assert_eq!(fill.height, total);
        assert_eq!(fill.opacity, 1.0);
    }

    #[test]
    fn test_on_scroll_is_idempotent() {
        let config = TimelineConfig::default();
        let mut state = TimelineState::new();
        state.mount(measured(2000.0, 4));

        let geometry = geometry_at(-640.0, 2000.0);
        let first = state.on_scroll(geometry, &config);
        for _ in 0..10 {
            assert_eq!(state.on_scroll(geometry, &config), first);
        }
        assert!(first.height > 0.0 && first.height < 2000.0);
    }

    #[test]
    fn test_mount_invalidates_cached_geometry() {
        let config = TimelineConfig::default();
        let mut state = TimelineState::new();
        state.mount(measured(1000.0, 2));
        let geometry = geometry_at(-1000.0, 1000.0);
        let before = state.on_scroll(geometry, &config);

        state.mount(measured(3000.0, 2));
        let after = state.on_scroll(geometry, &config);

        assert_ne!(before, after);
        assert_eq!(after.height, state.progress() * 3000.0);
    }

    #[test]
    fn test_needs_measure() {
        let mut config = TimelineConfig::default();
        let mut state = TimelineState::new();
        assert!(state.needs_measure(800.0, &config));

        state.mount(measured(1000.0, 2));
        assert!(!state.needs_measure(800.0, &config));
        assert!(state.needs_measure(640.0, &config));

        config.remeasure_on_resize = false;
        assert!(!state.needs_measure(640.0, &config));

        state.request_remeasure();
        assert!(state.needs_measure(800.0, &config));
    }

    #[test]
    fn test_active_step_follows_scroll() {
        let config = TimelineConfig::default();
        let mut state = TimelineState::new();
        state.mount(LayoutMeasurement {
            total_height: 2000.0,
            width: 800.0,
            step_offsets: vec![0.0, 500.0, 1000.0, 1500.0],
        });

        state.on_scroll(geometry_at(400.0, 2000.0), &config);
        assert_eq!(state.active_step(&config), None);

        // First row's title line (offset + spacing) reaches the sticky line
        state.on_scroll(geometry_at(0.0, 2000.0), &config);
        assert_eq!(state.active_step(&config), Some(0));

        state.on_scroll(geometry_at(-1100.0, 2000.0), &config);
        assert_eq!(state.active_step(&config), Some(2));
    }

    #[test]
    fn test_sticky_title_y() {
        // Row 200..800, title 40 tall
        assert_eq!(sticky_title_y(200.0, 800.0, 40.0, 100.0), 200.0); // not reached yet
        assert_eq!(sticky_title_y(200.0, 800.0, 40.0, 450.0), 450.0); // pinned
        assert_eq!(sticky_title_y(200.0, 800.0, 40.0, 900.0), 760.0); // pushed out by row end
        // Row shorter than the title
        assert_eq!(sticky_title_y(200.0, 220.0, 40.0, 500.0), 200.0);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: TimelineConfig = serde_json::from_str(r#"{"step_spacing": 200.0}"#).unwrap();
        assert_eq!(config.step_spacing, 200.0);
        assert_eq!(config.max_width, 896.0);
        assert_eq!(config.offsets, ScrollOffsets::default());
    }
}
