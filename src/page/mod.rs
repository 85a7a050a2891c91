//! Landing page composition: hero, the swap timeline, footer.

pub mod footer;
pub mod hero;
pub mod palette;
pub mod steps;
pub mod typed;

use eframe::egui::{Align, Layout, Rect, Ui, UiBuilder, pos2, vec2};
use log::debug;

use crate::widgets::card::CardConfig;
use crate::widgets::timeline::{Step, TimelineConfig, TimelineResponse, TimelineState, render_timeline};

pub use footer::render_footer;
pub use hero::render_hero;
pub use steps::demo_steps;
pub use typed::{PromptKind, PromptLine, TypedLines};

/// What the page reports after a frame.
pub struct PageResponse {
    pub timeline: TimelineResponse,
    pub swap_clicked: bool,
}

/// Page content plus the timeline state it owns.
pub struct Page {
    steps: Vec<Step>,
    card: CardConfig,
    pub timeline: TimelineState,
}

impl Page {
    pub fn new(card: CardConfig) -> Self {
        Self {
            steps: demo_steps(&card),
            card,
            timeline: TimelineState::new(),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Rebuild step content when card settings change.
    pub fn set_card_config(&mut self, card: &CardConfig) {
        if &self.card == card {
            return;
        }
        debug!("Card settings changed, rebuilding steps");
        self.card = card.clone();
        self.steps = demo_steps(card);
        self.timeline.request_remeasure();
    }

    /// Render the whole page centered in `ui` (call inside a vertical
    /// `ScrollArea`).
    pub fn ui(&mut self, ui: &mut Ui, config: &TimelineConfig) -> PageResponse {
        let width = ui.available_width().min(config.max_width).max(0.0);
        let left = ui.max_rect().center().x - width / 2.0;
        let column = Rect::from_min_size(pos2(left, ui.cursor().top()), vec2(width, f32::INFINITY));

        ui.scope_builder(
            UiBuilder::new()
                .max_rect(column)
                .layout(Layout::top_down(Align::Min)),
            |ui| {
                let swap_clicked = render_hero(ui);
                let timeline = render_timeline(ui, &self.steps, &mut self.timeline, config);
                render_footer(ui);
                PageResponse { timeline, swap_clicked }
            },
        )
        .inner
    }
}
