use crate::core::FillState;
use crate::widgets::status::ProgressBar;
use eframe::egui;

/// How long a status message stays visible (seconds)
const MESSAGE_TIMEOUT: f64 = 4.0;

/// Snapshot of page state shown in the status bar
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusInfo {
    pub progress: f32,
    pub fill: FillState,
    pub total_height: f32,
    pub step_count: usize,
    pub active_step: Option<(usize, String)>,
}

/// Status bar component
pub struct StatusBar {
    pub current_message: String,
    message_time: Option<f64>,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            current_message: String::new(),
            message_time: None,
        }
    }

    /// Show `message` until it times out
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.current_message = message.into();
        self.message_time = None;
    }

    /// Expire old messages
    pub fn update(&mut self, ctx: &egui::Context) {
        if self.current_message.is_empty() {
            return;
        }
        let now = ctx.input(|i| i.time);
        let shown = *self.message_time.get_or_insert(now);
        if now - shown > MESSAGE_TIMEOUT {
            self.current_message.clear();
            self.message_time = None;
        } else {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(MESSAGE_TIMEOUT));
        }
    }

    /// Render status bar at bottom of screen. `drag_enabled` is the live
    /// card drag toggle.
    pub fn render(&self, ctx: &egui::Context, info: &StatusInfo, drag_enabled: &mut bool) -> bool {
        let mut changed = false;
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut bar = ProgressBar::new(120.0, 12.0);
                bar.set_fraction(info.progress);
                bar.render(ui).on_hover_text("Timeline scroll progress");

                ui.separator();

                // Connector fill
                ui.monospace(format!(
                    "fill {:>6.0}/{:<6.0}px  {:>3.0}%",
                    info.fill.height,
                    info.total_height,
                    info.fill.opacity * 100.0
                ));

                ui.separator();

                // Active step
                match &info.active_step {
                    Some((idx, title)) => {
                        ui.monospace(format!("{}/{} {}", idx + 1, info.step_count, title))
                    }
                    None => ui.monospace(format!("-/{}", info.step_count)),
                };

                ui.separator();

                changed = ui
                    .checkbox(drag_enabled, "Drag cards")
                    .on_hover_text("Toggle card dragging")
                    .changed();

                if !self.current_message.is_empty() {
                    ui.separator();
                    ui.monospace(&self.current_message);
                }
            });
        });
        changed
    }
}
