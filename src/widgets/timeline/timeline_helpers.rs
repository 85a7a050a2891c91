//! Timeline UI helpers: connector geometry, gradients and marker drawing.
use eframe::egui::{Color32, Mesh, Painter, Pos2, Rect, Shape, Stroke, pos2, vec2};

use super::TimelineConfig;
use crate::core::FillState;

pub(super) const NEUTRAL_200: Color32 = Color32::from_rgb(229, 229, 229);
pub(super) const NEUTRAL_300: Color32 = Color32::from_rgb(212, 212, 212);
pub(super) const BLUE_500: Color32 = Color32::from_rgb(59, 130, 246);
pub(super) const PURPLE_500: Color32 = Color32::from_rgb(168, 85, 247);

/// Track gradient, top (0) to bottom (1).
pub(super) const TRACK_STOPS: [(f32, Color32); 3] = [
    (0.0, Color32::TRANSPARENT),
    (0.5, NEUTRAL_200),
    (0.99, Color32::TRANSPARENT),
];

/// Fill gradient, transparent at its leading edge, purple at the bottom.
pub(super) const FILL_STOPS: [(f32, Color32); 3] = [
    (0.0, Color32::TRANSPARENT),
    (0.9, BLUE_500),
    (1.0, PURPLE_500),
];

/// Alpha mask over the whole track; fades both ends of the connector.
pub(super) const TRACK_MASK: [(f32, f32); 4] = [(0.0, 0.0), (0.1, 1.0), (0.9, 1.0), (1.0, 0.0)];

/// Sample a piecewise-linear color gradient at `t`.
pub(super) fn sample_gradient(stops: &[(f32, Color32)], t: f32) -> Color32 {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Color32::TRANSPARENT;
    };
    if t <= first.0 {
        return first.1;
    }
    if t >= last.0 {
        return last.1;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.0 {
            let span = b.0 - a.0;
            let k = if span > f32::EPSILON { (t - a.0) / span } else { 1.0 };
            return a.1.lerp_to_gamma(b.1, k);
        }
    }
    last.1
}

/// Sample a piecewise-linear scalar curve at `t`.
pub(super) fn sample_curve(stops: &[(f32, f32)], t: f32) -> f32 {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return 1.0;
    };
    if t <= first.0 {
        return first.1;
    }
    if t >= last.0 {
        return last.1;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.0 {
            let span = b.0 - a.0;
            let k = if span > f32::EPSILON { (t - a.0) / span } else { 1.0 };
            return a.1 + (b.1 - a.1) * k;
        }
    }
    last.1
}

/// Vertical gradient strip over `rect`, masked by `TRACK_MASK` laid over
/// `mask_rect`, then faded by `opacity`.
pub(super) fn gradient_mesh(
    rect: Rect,
    mask_rect: Rect,
    stops: &[(f32, Color32)],
    opacity: f32,
) -> Mesh {
    let mut mesh = Mesh::default();
    if rect.height() <= 0.0 || rect.width() <= 0.0 {
        return mesh;
    }

    // Vertices at every gradient or mask stop that falls inside the strip
    let mut ys: Vec<f32> = stops
        .iter()
        .map(|(t, _)| rect.top() + t * rect.height())
        .chain(TRACK_MASK.iter().map(|(t, _)| mask_rect.top() + t * mask_rect.height()))
        .chain([rect.top(), rect.bottom()])
        .filter(|y| *y >= rect.top() && *y <= rect.bottom())
        .collect();
    ys.sort_by(|a, b| a.total_cmp(b));
    ys.dedup_by(|a, b| (*a - *b).abs() < 0.01);

    let opacity = opacity.clamp(0.0, 1.0);
    for (i, y) in ys.iter().enumerate() {
        let local = (y - rect.top()) / rect.height();
        let mask = if mask_rect.height() > 0.0 {
            sample_curve(&TRACK_MASK, (y - mask_rect.top()) / mask_rect.height())
        } else {
            1.0
        };
        let color = sample_gradient(stops, local).gamma_multiply(mask * opacity);

        mesh.colored_vertex(pos2(rect.left(), *y), color);
        mesh.colored_vertex(pos2(rect.right(), *y), color);
        if i > 0 {
            let b = (i * 2) as u32;
            mesh.add_triangle(b - 2, b - 1, b);
            mesh.add_triangle(b - 1, b, b + 1);
        }
    }
    mesh
}

/// Track rect for a list starting at `top`, connector centered on `x`.
pub(super) fn track_rect(x: f32, top: f32, total_height: f32, config: &TimelineConfig) -> Rect {
    let half = config.line_width.max(0.0) / 2.0;
    Rect::from_min_max(pos2(x - half, top), pos2(x + half, top + total_height.max(0.0)))
}

/// Shapes for the connector track and its animated fill.
///
/// Empty when nothing has been measured; the fill is skipped while fully
/// transparent.
pub(super) fn connector_shapes(track: Rect, fill: FillState) -> Vec<Shape> {
    if track.height() <= 0.0 {
        return Vec::new();
    }

    let mut shapes = vec![Shape::mesh(gradient_mesh(track, track, &TRACK_STOPS, 1.0))];

    let fill_height = fill.height.clamp(0.0, track.height());
    if fill_height > 0.0 && fill.opacity > 0.0 {
        let fill_rect = Rect::from_min_size(track.min, vec2(track.width(), fill_height));
        shapes.push(Shape::mesh(gradient_mesh(fill_rect, track, &FILL_STOPS, fill.opacity)));
    }
    shapes
}

/// Step marker: a ring in the panel color that cuts the track, with a dot.
pub(super) fn draw_marker(painter: &Painter, center: Pos2, radius: f32, background: Color32) {
    painter.circle_filled(center, radius, background);
    painter.circle(center, radius * 0.5, NEUTRAL_200, Stroke::new(1.0, NEUTRAL_300));
}
