//! Scroll-linked timeline - UI rendering
//!
//! Each step is displayed as a row showing:
//! - A sticky title with a marker dot on the connector
//! - The step's content region, painted by the host
//!
//! One connector track spans the measured list height; its fill grows with
//! scroll progress and fades in over the first part of it.
//!
//! The viewport is the clip rect of the enclosing `ScrollArea`; progress is
//! derived from where the list sits inside it, so no scroll offsets need to be
//! threaded through. Painting order: connector (reserved slot), then rows with
//! their titles, so markers and titles sit above the line.

use super::timeline_helpers::{connector_shapes, draw_marker, track_rect};
use super::{LayoutMeasurement, Step, TimelineConfig, TimelineState, sticky_title_y};
use crate::core::{FillState, ScrollGeometry};
use eframe::egui::{self, Align, FontId, Layout, Rect, Sense, Shape, Ui, UiBuilder, Vec2, pos2, vec2};

/// What the timeline reports back to the host after a frame.
pub struct TimelineResponse {
    pub response: egui::Response,
    pub progress: f32,
    pub fill: FillState,
    pub active_step: Option<usize>,
}

/// Render `steps` as a vertical timeline.
///
/// Call inside a vertical `ScrollArea`. `state` must be kept by the caller
/// between frames; one state per timeline.
pub fn render_timeline(
    ui: &mut Ui,
    steps: &[Step],
    state: &mut TimelineState,
    config: &TimelineConfig,
) -> TimelineResponse {
    let viewport = ui.clip_rect();
    let width = ui.available_width().min(config.max_width).max(0.0);
    let item_spacing = ui.spacing().item_spacing;

    let inner = ui.scope(|ui| {
        ui.spacing_mut().item_spacing = Vec2::ZERO;
        ui.set_width(width);

        let list_top = ui.cursor().top();
        let left = ui.max_rect().left() + config.horizontal_padding;
        let right = (ui.max_rect().left() + width - config.horizontal_padding).max(left);

        let connector_slot = ui.painter().add(Shape::Noop);
        let mut step_offsets = Vec::with_capacity(steps.len());

        for (idx, step) in steps.iter().enumerate() {
            ui.add_space(config.step_spacing);
            let row_top = ui.cursor().top();
            step_offsets.push(row_top - list_top);

            let title = ui.painter().layout(
                step.title.clone(),
                FontId::proportional(config.title_size),
                ui.visuals().strong_text_color(),
                (config.title_width - config.title_indent).max(1.0),
            );

            let content_left = (left + config.title_width + config.column_gap).min(right);
            let content_rect = Rect::from_min_size(
                pos2(content_left, row_top),
                vec2(right - content_left, f32::INFINITY),
            );
            let mut content_ui = ui.new_child(
                UiBuilder::new()
                    .max_rect(content_rect)
                    .layout(Layout::top_down(Align::Min))
                    .id_salt(("timeline_step", idx)),
            );
            content_ui.spacing_mut().item_spacing = item_spacing;
            step.content.ui(&mut content_ui);

            let row_bottom = content_ui.min_rect().bottom().max(row_top + title.size().y);
            let row_rect = Rect::from_min_max(pos2(left, row_top), pos2(right, row_bottom));
            ui.allocate_rect(row_rect, Sense::hover());

            // Sticky title: follows the pin line while its row passes under it
            let title_y = sticky_title_y(
                row_rect.top(),
                row_rect.bottom(),
                title.size().y,
                viewport.top() + config.sticky_top,
            );
            let marker = pos2(left + config.line_x, title_y + title.size().y / 2.0);
            draw_marker(ui.painter(), marker, config.marker_radius, ui.visuals().panel_fill);
            let text_color = ui.visuals().strong_text_color();
            ui.painter()
                .galley(pos2(left + config.title_indent, title_y), title, text_color);
        }

        // Empty list renders an empty container
        if !steps.is_empty() {
            ui.add_space(config.bottom_padding);
        }
        let list_bottom = ui.cursor().top();

        if state.needs_measure(width, config) {
            state.mount(LayoutMeasurement {
                total_height: list_bottom - list_top,
                width,
                step_offsets,
            });
        }

        let total_height = state.total_height();
        let geometry = ScrollGeometry {
            scroll_y: 0.0,
            container_top: list_top - viewport.top(),
            container_height: total_height,
            viewport_height: viewport.height(),
        };
        let fill = state.on_scroll(geometry, config);

        let track = track_rect(left + config.line_x, list_top, total_height, config);
        ui.painter().set(connector_slot, Shape::Vec(connector_shapes(track, fill)));

        fill
    });

    TimelineResponse {
        response: inner.response,
        progress: state.progress(),
        fill: inner.inner,
        active_step: state.active_step(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_steps(n: usize) -> Vec<Step> {
        (0..n)
            .map(|i| {
                Step::new(format!("Step {}", i), move |ui: &mut Ui| {
                    for line in 0..(i + 1) * 3 {
                        ui.label(format!("line {}", line));
                    }
                })
            })
            .collect()
    }

    fn run_frame(
        ctx: &egui::Context,
        steps: &[Step],
        state: &mut TimelineState,
        config: &TimelineConfig,
        size: Vec2,
    ) -> (f32, FillState) {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), size)),
            ..Default::default()
        };
        let mut out = (0.0, FillState::default());
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let response = render_timeline(ui, steps, state, config);
                    out = (response.progress, response.fill);
                });
            });
        });
        out
    }

    #[test]
    fn test_first_frame_measures_list() {
        let ctx = egui::Context::default();
        let config = TimelineConfig::default();
        let steps = demo_steps(4);
        let mut state = TimelineState::new();

        run_frame(&ctx, &steps, &mut state, &config, vec2(1280.0, 800.0));

        let m = state.measurement().expect("measured after first frame");
        assert_eq!(m.step_offsets.len(), 4);
        assert!(m.total_height >= 4.0 * config.step_spacing + config.bottom_padding);
        assert!(m.step_offsets.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(m.step_offsets[0], config.step_spacing);
    }

    #[test]
    fn test_empty_steps_measure_zero() {
        let ctx = egui::Context::default();
        let config = TimelineConfig::default();
        let mut state = TimelineState::new();

        let (_, fill) = run_frame(&ctx, &[], &mut state, &config, vec2(1280.0, 800.0));

        assert!(state.is_mounted());
        assert_eq!(state.total_height(), 0.0);
        assert_eq!(fill.height, 0.0);
    }

    #[test]
    fn test_measurement_is_kept_between_frames() {
        let ctx = egui::Context::default();
        let config = TimelineConfig::default();
        let steps = demo_steps(4);
        let mut state = TimelineState::new();

        run_frame(&ctx, &steps, &mut state, &config, vec2(1280.0, 800.0));
        let first = state.total_height();
        let (_, a) = run_frame(&ctx, &steps, &mut state, &config, vec2(1280.0, 800.0));
        let (_, b) = run_frame(&ctx, &steps, &mut state, &config, vec2(1280.0, 800.0));

        assert_eq!(state.total_height(), first);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_stays_within_measured_height() {
        let ctx = egui::Context::default();
        let config = TimelineConfig::default();
        let steps = demo_steps(4);
        let mut state = TimelineState::new();

        // Short viewport: list is already past the start offset at rest
        for _ in 0..3 {
            let (progress, fill) = run_frame(&ctx, &steps, &mut state, &config, vec2(1280.0, 200.0));
            assert!((0.0..=1.0).contains(&progress));
            assert!(fill.height <= state.total_height());
            assert!((0.0..=1.0).contains(&fill.opacity));
        }
    }
}
