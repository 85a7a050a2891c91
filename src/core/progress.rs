//! Scroll progress and connector fill math.
//!
//! Everything here is plain arithmetic over geometry that was already measured
//! by the renderer. Nothing in this module touches egui, so the mapping from
//! scroll position to progress can be checked with synthetic numbers.
//!
//! Progress is defined by two [`ScrollOffset`]s, each pairing an edge of the
//! tracked container with a line across the viewport. With the defaults
//! (`"start 10%"`, `"end 50%"`) progress is 0 when the container's top edge
//! sits 10% down the viewport and 1 when its bottom edge sits halfway down.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use log::trace;
use serde::{Deserialize, Serialize};

/// Default fraction of progress over which the fill fades in.
pub const DEFAULT_OPACITY_RAMP: f32 = 0.1;

/// Edge of the tracked container an offset refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerEdge {
    Start,
    Center,
    End,
}

impl ContainerEdge {
    /// Position of the edge as a fraction of the container height.
    pub fn fraction(self) -> f32 {
        match self {
            ContainerEdge::Start => 0.0,
            ContainerEdge::Center => 0.5,
            ContainerEdge::End => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContainerEdge::Start => "start",
            ContainerEdge::Center => "center",
            ContainerEdge::End => "end",
        }
    }
}

impl FromStr for ContainerEdge {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" | "top" => Ok(ContainerEdge::Start),
            "center" => Ok(ContainerEdge::Center),
            "end" | "bottom" => Ok(ContainerEdge::End),
            other => Err(anyhow!("unknown container edge '{}'", other)),
        }
    }
}

/// Where a container edge meets a horizontal line across the viewport.
///
/// Serialized as `"<edge> <percent>%"`, e.g. `"start 10%"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScrollOffset {
    pub edge: ContainerEdge,
    /// Viewport line as a fraction of viewport height (0 = top, 1 = bottom).
    pub viewport: f32,
}

impl ScrollOffset {
    pub const fn new(edge: ContainerEdge, viewport: f32) -> Self {
        Self { edge, viewport }
    }

    /// Scroll position at which the container edge reaches the viewport line.
    pub fn scroll_position(&self, container_top: f32, container_height: f32, viewport_height: f32) -> f32 {
        container_top + self.edge.fraction() * container_height - self.viewport * viewport_height
    }
}

impl FromStr for ScrollOffset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(edge), Some(line), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("expected '<start|center|end> <percent>%', got '{}'", s);
        };

        let edge: ContainerEdge = edge.parse()?;
        let viewport = match line.strip_suffix('%') {
            Some(pct) => {
                pct.parse::<f32>()
                    .with_context(|| format!("invalid viewport percentage in '{}'", s))?
                    / 100.0
            }
            None => line
                .parse::<f32>()
                .with_context(|| format!("invalid viewport fraction in '{}'", s))?,
        };

        if !viewport.is_finite() {
            bail!("viewport line in '{}' is not finite", s);
        }

        Ok(Self { edge, viewport })
    }
}

impl fmt::Display for ScrollOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Round away float noise so 0.1 prints as "10%", not "10.000001%"
        let pct = (self.viewport * 100.0 * 1000.0).round() / 1000.0;
        write!(f, "{} {}%", self.edge.as_str(), pct)
    }
}

impl TryFrom<String> for ScrollOffset {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScrollOffset> for String {
    fn from(value: ScrollOffset) -> Self {
        value.to_string()
    }
}

/// Pair of offsets where progress is 0 (`start`) and 1 (`end`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffsets {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl Default for ScrollOffsets {
    fn default() -> Self {
        Self {
            start: ScrollOffset::new(ContainerEdge::Start, 0.1),
            end: ScrollOffset::new(ContainerEdge::End, 0.5),
        }
    }
}

/// Container position relative to the scroll viewport, sampled once per frame.
///
/// `scroll_y` and `container_top` only matter through their difference, so a
/// renderer that knows the container's on-screen position can pass
/// `scroll_y = 0` and the viewport-relative top.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    pub scroll_y: f32,
    pub container_top: f32,
    pub container_height: f32,
    pub viewport_height: f32,
}

impl ScrollGeometry {
    pub fn progress(&self, offsets: &ScrollOffsets) -> f32 {
        progress_with(
            self.scroll_y,
            self.container_top,
            self.container_height,
            self.viewport_height,
            offsets,
        )
    }
}

/// Scroll progress with the default `"start 10%"` / `"end 50%"` offsets.
pub fn progress(scroll_y: f32, container_top: f32, container_height: f32, viewport_height: f32) -> f32 {
    progress_with(
        scroll_y,
        container_top,
        container_height,
        viewport_height,
        &ScrollOffsets::default(),
    )
}

/// Scroll progress through a container, clamped to `[0, 1]`.
///
/// When the two offsets coincide or cross (a container shorter than the gap
/// between the viewport lines) progress jumps from 0 to 1 at the start offset.
pub fn progress_with(
    scroll_y: f32,
    container_top: f32,
    container_height: f32,
    viewport_height: f32,
    offsets: &ScrollOffsets,
) -> f32 {
    if ![scroll_y, container_top, container_height, viewport_height]
        .iter()
        .all(|v| v.is_finite())
    {
        trace!("non-finite scroll geometry, progress 0");
        return 0.0;
    }

    let height = container_height.max(0.0);
    let viewport = viewport_height.max(0.0);
    let start = offsets.start.scroll_position(container_top, height, viewport);
    let end = offsets.end.scroll_position(container_top, height, viewport);
    let span = end - start;

    if span <= f32::EPSILON {
        trace!("degenerate progress span {:.1}..{:.1}", start, end);
        return if scroll_y >= start { 1.0 } else { 0.0 };
    }

    ((scroll_y - start) / span).clamp(0.0, 1.0)
}

/// Map `value` from the `input` range onto the `output` range, clamped.
pub fn interpolate(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let span = input[1] - input[0];
    if span.abs() <= f32::EPSILON || value.is_nan() {
        return if value >= input[1] { output[1] } else { output[0] };
    }
    let t = ((value - input[0]) / span).clamp(0.0, 1.0);
    output[0] + (output[1] - output[0]) * t
}

/// Height and opacity of the connector fill overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FillState {
    pub height: f32,
    pub opacity: f32,
}

impl FillState {
    /// Derive the fill from progress: height grows over the whole range,
    /// opacity saturates after `opacity_ramp`.
    pub fn from_progress(progress: f32, total_height: f32, opacity_ramp: f32) -> Self {
        let total = if total_height.is_finite() {
            total_height.max(0.0)
        } else {
            0.0
        };
        let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };

        let opacity = if opacity_ramp <= 0.0 {
            1.0
        } else {
            interpolate(p, [0.0, opacity_ramp], [0.0, 1.0])
        };

        Self {
            height: interpolate(p, [0.0, 1.0], [0.0, total]),
            opacity,
        }
    }
}
