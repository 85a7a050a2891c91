//! Damped spring used for the card's return-to-origin animation.
//!
//! Integrated with semi-implicit Euler in fixed sub-steps so the motion does
//! not depend on the frame rate. Once both distance and speed drop below the
//! rest thresholds the spring lands exactly on its target.

use eframe::egui::Vec2;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::DragBounds;

/// Longest sub-step used when integrating (seconds).
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Frame deltas above this are treated as a hitch and shortened (seconds).
const MAX_FRAME_DT: f32 = 0.1;

/// Damping never drops below this fraction of critical damping.
const MIN_DAMPING_RATIO: f32 = 0.5;

/// Stiffness floor; keeps a zero or negative setting pulling toward target.
const MIN_STIFFNESS: f32 = 1.0;

/// A return that runs longer than this lands on its target (seconds).
const MAX_DURATION: f32 = 3.0;

/// Spring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target below which the spring may settle (px).
    pub rest_delta: f32,
    /// Speed below which the spring may settle (px/s).
    pub rest_speed: f32,
}

impl SpringConfig {
    /// Snap-back feel used by drag release: stiff, slightly overdamped.
    pub const SNAP_BACK: Self = Self {
        stiffness: 200.0,
        damping: 40.0,
        mass: 1.0,
        rest_delta: 0.5,
        rest_speed: 10.0,
    };

    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: Self::SNAP_BACK.rest_delta,
            rest_speed: Self::SNAP_BACK.rest_speed,
        }
    }

    fn effective_mass(&self) -> f32 {
        if self.mass.is_finite() { self.mass.max(f32::EPSILON) } else { 1.0 }
    }

    fn effective_stiffness(&self) -> f32 {
        if self.stiffness.is_finite() { self.stiffness.max(MIN_STIFFNESS) } else { MIN_STIFFNESS }
    }

    /// Configured damping, raised to at least half of critical damping.
    pub fn effective_damping(&self) -> f32 {
        let critical = 2.0 * (self.effective_stiffness() * self.effective_mass()).sqrt();
        let floor = critical * MIN_DAMPING_RATIO;
        if self.damping.is_finite() { self.damping.max(floor) } else { floor }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::SNAP_BACK
    }
}

/// Position and velocity of a 2D spring heading for `target`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringState {
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    elapsed: f32,
}

impl SpringState {
    /// Spring released at `position` with `velocity`, returning to the origin.
    pub fn to_origin(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            target: Vec2::ZERO,
            elapsed: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_at_rest(&self, config: &SpringConfig) -> bool {
        (self.position - self.target).length() <= config.rest_delta
            && self.velocity.length() <= config.rest_speed
    }

    /// Advance by `dt` seconds. Returns `true` while still moving.
    pub fn step(&mut self, dt: f32, config: &SpringConfig) -> bool {
        if !self.position.is_finite() || !self.velocity.is_finite() {
            self.settle();
            return false;
        }

        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        let mass = config.effective_mass();
        let stiffness = config.effective_stiffness();
        let damping = config.effective_damping();
        let steps = (dt / MAX_SUBSTEP).ceil().max(1.0) as usize;
        let h = dt / steps as f32;

        for _ in 0..steps {
            let displacement = self.position - self.target;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
        }

        self.elapsed += dt;

        if self.is_at_rest(config) {
            self.settle();
            return false;
        }
        if self.elapsed >= MAX_DURATION {
            trace!("spring timed out {:?} from target", self.position - self.target);
            self.settle();
            return false;
        }
        true
    }

    /// Keep the position inside `bounds`; velocity pointing further out on a
    /// clamped axis is dropped.
    pub fn confine(&mut self, bounds: &DragBounds) {
        let clamped = bounds.clamp(self.position);
        if clamped.x != self.position.x {
            self.velocity.x = 0.0;
        }
        if clamped.y != self.position.y {
            self.velocity.y = 0.0;
        }
        self.position = clamped;
    }

    fn settle(&mut self) {
        self.position = self.target;
        self.velocity = Vec2::ZERO;
    }
}
