//! Standalone timeline window for development and testing.
//!
//! Demo steps in a scroll area, with a side panel showing the live scroll
//! geometry, progress and connector fill.

use eframe::egui;
use unihook::shell;
use unihook::widgets::card::CardConfig;
use unihook::widgets::timeline::{Step, TimelineConfig, TimelineState, render_timeline};

fn main() -> eframe::Result<()> {
    shell::init_logger();

    eframe::run_native(
        "unihook-timeline",
        shell::native_options("UNIHOOK - Timeline", egui::vec2(1200.0, 700.0)),
        Box::new(|_cc| Ok(Box::new(TimelineApp::new()))),
    )
}

struct TimelineApp {
    steps: Vec<Step>,
    state: TimelineState,
    config: TimelineConfig,
}

impl TimelineApp {
    fn new() -> Self {
        Self {
            steps: unihook::page::demo_steps(&CardConfig::default()),
            state: TimelineState::new(),
            config: TimelineConfig::default(),
        }
    }

    fn readout(&mut self, ui: &mut egui::Ui) {
        ui.heading("Geometry");
        ui.separator();

        match self.state.geometry() {
            Some(g) => {
                egui::Grid::new("geometry").num_columns(2).show(ui, |ui| {
                    ui.label("scroll_y");
                    ui.monospace(format!("{:.1}", g.scroll_y));
                    ui.end_row();
                    ui.label("container_top");
                    ui.monospace(format!("{:.1}", g.container_top));
                    ui.end_row();
                    ui.label("container_height");
                    ui.monospace(format!("{:.1}", g.container_height));
                    ui.end_row();
                    ui.label("viewport_height");
                    ui.monospace(format!("{:.1}", g.viewport_height));
                    ui.end_row();
                });
            }
            None => {
                ui.label("not measured");
            }
        }

        ui.add_space(8.0);
        let fill = self.state.fill();
        ui.monospace(format!("progress {:.3}", self.state.progress()));
        ui.monospace(format!("fill     {:.1}px", fill.height));
        ui.monospace(format!("opacity  {:.2}", fill.opacity));
        let active = self
            .state
            .active_step(&self.config)
            .and_then(|idx| self.steps.get(idx))
            .map_or("-", |s| s.title.as_str());
        ui.monospace(format!("active   {}", active));

        ui.add_space(8.0);
        ui.separator();
        let mut changed = false;
        changed |= ui
            .add(egui::Slider::new(&mut self.config.step_spacing, 0.0..=240.0).text("Spacing"))
            .changed();
        changed |= ui
            .checkbox(&mut self.config.remeasure_on_resize, "Re-measure on resize")
            .changed();
        if ui.button("Re-measure").clicked() || changed {
            self.state.request_remeasure();
        }
    }
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("readout")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| self.readout(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("timeline_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    // Room above and below so the start and end lines can be crossed
                    ui.add_space(ui.clip_rect().height() * 0.5);
                    render_timeline(ui, &self.steps, &mut self.state, &self.config);
                    ui.add_space(ui.clip_rect().height());
                });
        });
    }
}
