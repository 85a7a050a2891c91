//! Draggable card - UI rendering and pointer handling
//!
//! Content is laid out once at the rest position, then drawn through a visual
//! transform (drag offset, hover lift and scale). Layout of the surrounding
//! page never moves while the card is dragged. The rounded background is
//! painted into a reserved slot after the content is measured, and carries the
//! hover rotation.

use eframe::egui::{
    self, CursorIcon, Id, PointerButton, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2, emath::Rot2,
    pos2, vec2,
};

use super::{CardConfig, CardState, CardTransform};

/// Corner tessellation for the card background.
const CORNER_SEGMENTS: usize = 6;

/// Result of showing a card.
pub struct CardResponse<R> {
    pub inner: R,
    /// Interaction response over the transformed card rect.
    pub response: egui::Response,
    /// Offset the card will be drawn at next frame.
    pub offset: Vec2,
    /// Logical drag offset; zero whenever no gesture is active.
    pub drag_offset: Vec2,
    pub dragging: bool,
    /// Gesture ended this frame (release or interruption).
    pub released: bool,
}

/// A card that can be dragged within bounds and springs back on release.
///
/// ```ignore
/// DraggableCard::new("quote_code").show(ui, |ui| {
///     ui.label("content");
/// });
/// ```
pub struct DraggableCard {
    id_salt: Id,
    config: CardConfig,
}

impl DraggableCard {
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            config: CardConfig::default(),
        }
    }

    pub fn config(mut self, config: CardConfig) -> Self {
        self.config = config;
        self
    }

    /// Toggle dragging; a non-draggable card keeps its hover style.
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.config.draggable = draggable;
        self
    }

    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> CardResponse<R> {
        let id = ui.make_persistent_id(self.id_salt);
        let config = self.config;
        let ctx = ui.ctx().clone();

        let mut state: CardState = ui.data_mut(|d| d.get_temp(id)).unwrap_or_default();

        let dt = ui.input(|i| i.stable_dt);
        state.advance(dt, &config);

        let hover_t = ctx.animate_bool_with_time(
            id.with("hover"),
            state.hovered && !state.drag.is_dragging(),
            config.hover.duration,
        );
        let transform = CardTransform::compose(state.visual_offset(), hover_t, &config.hover);
        let pivot = ui.cursor().min + state.size / 2.0;
        let ts = transform.to_ts(pivot);

        let inner = ui.with_visual_transform(ts, |ui| {
            let background = ui.painter().add(Shape::Noop);
            let frame = egui::Frame::new()
                .inner_margin(config.inner_margin)
                .show(ui, add_contents);
            let rect = frame.response.rect;
            ui.painter()
                .set(background, card_background(rect, transform.rotation, &config));
            (frame.inner, rect)
        });
        let (inner, rest_rect) = inner.inner;
        state.size = rest_rect.size();

        let sense = if config.draggable { Sense::drag() } else { Sense::hover() };
        let response = ui.interact(ts.mul_rect(rest_rect), id.with("card"), sense);

        let mut released = false;
        if config.draggable {
            if response.drag_started_by(PointerButton::Primary)
                && let Some(pointer) = response.interact_pointer_pos()
            {
                state.start(pointer, &config.bounds);
            }

            if state.drag.is_dragging() {
                if response.drag_stopped() {
                    state.release(ui.input(|i| i.pointer.velocity()));
                    released = true;
                } else if response.dragged_by(PointerButton::Primary)
                    && let Some(pointer) = response.interact_pointer_pos()
                {
                    state.drag.on_drag(pointer, &config.bounds);
                } else {
                    // Gesture lost without a release (pointer gone, focus lost)
                    state.cancel();
                    released = true;
                }
            }
        } else if state.drag.is_dragging() {
            state.cancel();
            released = true;
        }

        state.hovered = response.hovered();
        if config.draggable {
            if state.drag.is_dragging() {
                ctx.set_cursor_icon(CursorIcon::Grabbing);
            } else if response.hovered() {
                ctx.set_cursor_icon(CursorIcon::Grab);
            }
        }
        if state.is_returning() {
            ctx.request_repaint();
        }

        let out = CardResponse {
            inner,
            response,
            offset: state.visual_offset(),
            drag_offset: state.drag.offset(),
            dragging: state.drag.is_dragging(),
            released,
        };
        ui.data_mut(|d| d.insert_temp(id, state));
        out
    }
}

/// Outline of a rounded rect, clockwise on screen starting at the top-left
/// corner.
pub(super) fn rounded_rect_points(rect: Rect, radius: f32, segments: usize) -> Vec<Pos2> {
    let r = radius.clamp(0.0, rect.width().min(rect.height()) / 2.0);
    if r <= 0.0 || segments == 0 {
        return vec![rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()];
    }

    let corners = [
        (pos2(rect.left() + r, rect.top() + r), 180.0_f32),
        (pos2(rect.right() - r, rect.top() + r), 270.0),
        (pos2(rect.right() - r, rect.bottom() - r), 0.0),
        (pos2(rect.left() + r, rect.bottom() - r), 90.0),
    ];
    let mut points = Vec::with_capacity(corners.len() * (segments + 1));
    for (center, start) in corners {
        for i in 0..=segments {
            let angle = (start + 90.0 * i as f32 / segments as f32).to_radians();
            points.push(center + r * vec2(angle.cos(), angle.sin()));
        }
    }
    points
}

/// Drop shadow plus body, rotated by `rotation` radians about the rect center.
pub(super) fn card_background(rect: Rect, rotation: f32, config: &CardConfig) -> Shape {
    if !rect.is_positive() {
        return Shape::Noop;
    }
    let center = rect.center();
    let rot = Rot2::from_angle(rotation);
    let body: Vec<Pos2> = rounded_rect_points(rect, config.corner_radius, CORNER_SEGMENTS)
        .into_iter()
        .map(|p| center + rot * (p - center))
        .collect();
    let shadow: Vec<Pos2> = body.iter().map(|p| *p + vec2(0.0, 4.0)).collect();

    Shape::Vec(vec![
        Shape::convex_polygon(shadow, config.shadow, Stroke::NONE),
        Shape::convex_polygon(body, config.fill, Stroke::new(1.0, config.border)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Event, Modifiers, RawInput};

    struct Frame {
        rect: Rect,
        offset: Vec2,
        drag_offset: Vec2,
        dragging: bool,
        released: bool,
    }

    fn run_card(ctx: &egui::Context, events: Vec<Event>, draggable: bool) -> Frame {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let mut out = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add_space(100.0);
                let card = DraggableCard::new("test_card")
                    .draggable(draggable)
                    .show(ui, |ui| {
                        ui.set_min_size(vec2(200.0, 120.0));
                        ui.label("card");
                    });
                out = Some(Frame {
                    rect: card.response.rect,
                    offset: card.offset,
                    drag_offset: card.drag_offset,
                    dragging: card.dragging,
                    released: card.released,
                });
            });
        });
        out.expect("card shown")
    }

    fn press(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_card_at_rest() {
        let ctx = egui::Context::default();
        let first = run_card(&ctx, vec![], true);
        let second = run_card(&ctx, vec![], true);

        assert!(first.rect.width() >= 200.0);
        assert_eq!(first.rect, second.rect);
        assert_eq!(second.offset, Vec2::ZERO);
        assert!(!second.dragging);
    }

    #[test]
    fn test_drag_clamps_and_snaps_back() {
        let ctx = egui::Context::default();
        let rest = run_card(&ctx, vec![], true);
        let grab = rest.rect.center();

        run_card(&ctx, vec![Event::PointerMoved(grab)], true);
        run_card(&ctx, vec![press(grab, true)], true);
        run_card(&ctx, vec![Event::PointerMoved(grab + vec2(10.0, 0.0))], true);
        let far = run_card(&ctx, vec![Event::PointerMoved(grab + vec2(300.0, -300.0))], true);

        assert!(far.dragging);
        assert_eq!(far.drag_offset, vec2(50.0, -50.0));

        let up = run_card(&ctx, vec![press(grab + vec2(300.0, -300.0), false)], true);
        assert!(up.released);
        assert!(!up.dragging);
        assert_eq!(up.drag_offset, Vec2::ZERO);
        assert_ne!(up.offset, Vec2::ZERO);

        let mut last = up.offset;
        for _ in 0..300 {
            last = run_card(&ctx, vec![], true).offset;
            if last == Vec2::ZERO {
                break;
            }
        }
        assert_eq!(last, Vec2::ZERO);
    }

    #[test]
    fn test_non_draggable_card_ignores_drag() {
        let ctx = egui::Context::default();
        let rest = run_card(&ctx, vec![], false);
        let grab = rest.rect.center();

        run_card(&ctx, vec![Event::PointerMoved(grab), press(grab, true)], false);
        let moved = run_card(&ctx, vec![Event::PointerMoved(grab + vec2(40.0, 40.0))], false);

        assert!(!moved.dragging);
        assert_eq!(moved.drag_offset, Vec2::ZERO);
    }

    #[test]
    fn test_rounded_rect_points() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 50.0));
        let points = rounded_rect_points(rect, 8.0, 4);
        assert_eq!(points.len(), 4 * 5);
        assert!(points.iter().all(|p| rect.expand(0.01).contains(*p)));

        // Radius is limited by the short side
        let clamped = rounded_rect_points(rect, 500.0, 4);
        assert!(clamped.iter().all(|p| rect.expand(0.01).contains(*p)));

        assert_eq!(rounded_rect_points(rect, 0.0, 4).len(), 4);
    }

    #[test]
    fn test_background_rotation_keeps_center() {
        let config = CardConfig::default();
        let rect = Rect::from_center_size(pos2(200.0, 200.0), vec2(120.0, 80.0));
        let flat = card_background(rect, 0.0, &config).visual_bounding_rect();
        let tilted = card_background(rect, 0.2, &config).visual_bounding_rect();

        assert!(tilted.width() > flat.width());
        assert!((tilted.center().x - flat.center().x).abs() < 0.5);
        assert!(matches!(card_background(Rect::NOTHING, 0.0, &config), Shape::Noop));
    }
}
