//! Draggable card - configuration, per-instance state and visual transform.

use eframe::egui::{Color32, Pos2, Vec2, emath::TSTransform};
use serde::{Deserialize, Serialize};

use crate::core::{DragBounds, DragState, SpringConfig, SpringState};

/// Fixed hover micro-interaction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverStyle {
    pub scale: f32,
    pub lift: f32,         // px, upwards
    pub rotation_deg: f32, // clockwise
    pub duration: f32,     // ease in/out time, seconds
}

impl Default for HoverStyle {
    fn default() -> Self {
        Self {
            scale: 1.05,
            lift: 2.0,
            rotation_deg: 1.0,
            duration: 0.15,
        }
    }
}

/// Configuration for draggable cards
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub draggable: bool,
    pub bounds: DragBounds,
    pub hover: HoverStyle,
    pub spring: SpringConfig,
    pub corner_radius: f32,
    pub inner_margin: f32,
    pub fill: Color32,
    pub border: Color32,
    pub shadow: Color32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            draggable: true,
            bounds: DragBounds::default(),
            hover: HoverStyle::default(),
            spring: SpringConfig::SNAP_BACK,
            corner_radius: 8.0,
            inner_margin: 0.0,
            fill: Color32::from_rgb(29, 31, 33),
            border: Color32::from_rgba_unmultiplied(255, 255, 255, 13),
            shadow: Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        }
    }
}

/// Offset, scale and rotation a card is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub offset: Vec2,
    pub scale: f32,
    pub rotation: f32, // radians
}

impl CardTransform {
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        rotation: 0.0,
    };

    /// Combine the drag offset with the hover style weighted by `hover_t`
    /// (0 = resting, 1 = fully hovered).
    pub fn compose(offset: Vec2, hover_t: f32, hover: &HoverStyle) -> Self {
        let t = if hover_t.is_nan() { 0.0 } else { hover_t.clamp(0.0, 1.0) };
        Self {
            offset: offset + Vec2::new(0.0, -hover.lift * t),
            scale: 1.0 + (hover.scale - 1.0) * t,
            rotation: hover.rotation_deg.to_radians() * t,
        }
    }

    /// Translate + scale about `pivot`. Rotation is applied separately to the
    /// card background since layer transforms carry no rotation.
    pub fn to_ts(&self, pivot: Pos2) -> TSTransform {
        TSTransform::from_translation(pivot.to_vec2() + self.offset)
            * TSTransform::from_scaling(self.scale)
            * TSTransform::from_translation(-pivot.to_vec2())
    }
}

/// Per-card state, kept in egui memory under the card's id.
#[derive(Clone, Debug, Default)]
pub struct CardState {
    pub drag: DragState,
    spring: Option<SpringState>,
    pub hovered: bool,
    /// Size from the last layout pass, used as the scale pivot.
    pub size: Vec2,
}

impl CardState {
    /// Offset the card is drawn at: the drag offset while dragging, the spring
    /// position while returning, otherwise zero.
    pub fn visual_offset(&self) -> Vec2 {
        if self.drag.is_dragging() {
            self.drag.offset()
        } else {
            self.spring.map_or(Vec2::ZERO, |s| s.position())
        }
    }

    pub fn is_returning(&self) -> bool {
        self.spring.is_some()
    }

    /// Grab the card. A running return animation is interrupted and the drag
    /// continues from where the card is drawn.
    pub fn start(&mut self, pointer: Pos2, bounds: &DragBounds) {
        let from = self.visual_offset();
        self.spring = None;
        self.drag.on_drag_start(pointer, from, bounds);
    }

    /// Let go with the pointer's `velocity`; the card springs back to origin.
    pub fn release(&mut self, velocity: Vec2) {
        let released = self.drag.on_drag_end();
        let velocity = if velocity.is_finite() { velocity } else { Vec2::ZERO };
        self.spring = (released != Vec2::ZERO || velocity != Vec2::ZERO)
            .then(|| SpringState::to_origin(released, velocity));
    }

    /// Gesture interrupted: same return as a release, without momentum.
    pub fn cancel(&mut self) {
        if self.drag.is_dragging() {
            let from = self.drag.cancel();
            self.spring = (from != Vec2::ZERO).then(|| SpringState::to_origin(from, Vec2::ZERO));
        }
    }

    /// Advance the return animation, kept inside the drag bounds. Returns
    /// `true` while it is running.
    pub fn advance(&mut self, dt: f32, config: &CardConfig) -> bool {
        let Some(spring) = &mut self.spring else {
            return false;
        };
        let running = spring.step(dt, &config.spring);
        spring.confine(&config.bounds);
        if running {
            true
        } else {
            self.spring = None;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn test_release_resets_logical_offset_and_animates_visual() {
        let config = CardConfig::default();
        let bounds = config.bounds;
        let mut state = CardState::default();

        state.start(pos2(0.0, 0.0), &bounds);
        state.drag.on_drag(pos2(80.0, -20.0), &bounds);
        assert_eq!(state.visual_offset(), vec2(50.0, -20.0));

        state.release(Vec2::ZERO);
        assert_eq!(state.drag.offset(), Vec2::ZERO);
        assert!(state.is_returning());
        assert_eq!(state.visual_offset(), vec2(50.0, -20.0));

        let mut frames = 0;
        while state.advance(1.0 / 60.0, &config) {
            frames += 1;
            assert!(frames < 600);
        }
        assert_eq!(state.visual_offset(), Vec2::ZERO);
        assert!(!state.is_returning());
    }

    #[test]
    fn test_release_at_origin_needs_no_animation() {
        let bounds = DragBounds::default();
        let mut state = CardState::default();
        state.start(pos2(5.0, 5.0), &bounds);
        state.release(Vec2::ZERO);
        assert!(!state.is_returning());
        assert_eq!(state.visual_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_grab_during_return_continues_from_visual_position() {
        let config = CardConfig::default();
        let bounds = config.bounds;
        let mut state = CardState::default();

        state.start(pos2(0.0, 0.0), &bounds);
        state.drag.on_drag(pos2(50.0, 0.0), &bounds);
        state.release(Vec2::ZERO);
        state.advance(1.0 / 60.0, &config);
        let mid = state.visual_offset();
        assert!(mid.x > 0.0 && mid.x < 50.0);

        state.start(pos2(300.0, 300.0), &bounds);
        assert!(!state.is_returning());
        assert_eq!(state.visual_offset(), mid);
    }

    #[test]
    fn test_fling_stays_inside_bounds() {
        let config = CardConfig::default();
        let bounds = config.bounds;
        let mut state = CardState::default();

        state.start(pos2(0.0, 0.0), &bounds);
        state.drag.on_drag(pos2(-30.0, 20.0), &bounds);
        state.release(vec2(-2000.0, 1500.0));

        let mut frames = 0;
        while state.advance(1.0 / 60.0, &config) {
            let offset = state.visual_offset();
            assert!(bounds.contains(offset), "frame {}: {:?}", frames, offset);
            frames += 1;
            assert!(frames < 600);
        }
        assert_eq!(state.visual_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_undamped_spring_still_returns() {
        let mut config = CardConfig::default();
        config.spring.damping = 0.0;
        let bounds = config.bounds;
        let mut state = CardState::default();

        state.start(pos2(0.0, 0.0), &bounds);
        state.drag.on_drag(pos2(40.0, 0.0), &bounds);
        state.release(Vec2::ZERO);

        let mut frames = 0;
        while state.advance(1.0 / 60.0, &config) {
            frames += 1;
            assert!(frames < 200, "still returning at {:?}", state.visual_offset());
        }
        assert!(!state.is_returning());
        assert_eq!(state.visual_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_cancel_returns_to_origin_logically() {
        let bounds = DragBounds::default();
        let mut state = CardState::default();
        state.start(pos2(0.0, 0.0), &bounds);
        state.drag.on_drag(pos2(-30.0, 30.0), &bounds);

        state.cancel();

        assert!(!state.drag.is_dragging());
        assert_eq!(state.drag.offset(), Vec2::ZERO);
        assert!(state.is_returning());
        assert_eq!(state.visual_offset(), vec2(-30.0, 30.0));
    }

    #[test]
    fn test_hover_transform() {
        let hover = HoverStyle::default();

        let rest = CardTransform::compose(Vec2::ZERO, 0.0, &hover);
        assert_eq!(rest, CardTransform::IDENTITY);

        let full = CardTransform::compose(Vec2::ZERO, 1.0, &hover);
        assert!((full.scale - 1.05).abs() < 1e-6);
        assert_eq!(full.offset, vec2(0.0, -2.0));
        assert!((full.rotation - 1.0_f32.to_radians()).abs() < 1e-6);

        // Out-of-range weights are clamped
        assert_eq!(CardTransform::compose(Vec2::ZERO, 7.0, &hover), full);
    }

    #[test]
    fn test_transform_scales_about_pivot() {
        let t = CardTransform {
            offset: vec2(10.0, 0.0),
            scale: 2.0,
            rotation: 0.0,
        };
        let pivot = pos2(100.0, 100.0);
        let ts = t.to_ts(pivot);

        assert_eq!(ts * pivot, pos2(110.0, 100.0));
        assert_eq!(ts * pos2(110.0, 100.0), pos2(130.0, 100.0));
    }

    #[test]
    fn test_config_serde_roundtrip_defaults() {
        let config: CardConfig = serde_json::from_str(r#"{"draggable": false}"#).unwrap();
        assert!(!config.draggable);
        assert_eq!(config.bounds, DragBounds::default());
        assert_eq!(config.hover, HoverStyle::default());
    }
}
