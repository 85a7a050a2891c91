//! Standalone card playground.
//!
//! One draggable card with live controls for bounds, spring and hover style.

use eframe::egui;
use unihook::core::DragBounds;
use unihook::shell;
use unihook::widgets::card::{CardConfig, DraggableCard};

fn main() -> eframe::Result<()> {
    shell::init_logger();

    eframe::run_native(
        "unihook-card",
        shell::native_options("UNIHOOK - Card", egui::vec2(900.0, 600.0)),
        Box::new(|_cc| Ok(Box::new(CardApp::default()))),
    )
}

#[derive(Default)]
struct CardApp {
    config: CardConfig,
    last_offset: egui::Vec2,
    releases: usize,
}

impl CardApp {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Card");
        ui.separator();
        ui.checkbox(&mut self.config.draggable, "Draggable");

        let mut extent = self.config.bounds.right;
        if ui
            .add(egui::Slider::new(&mut extent, 0.0..=200.0).text("Bounds"))
            .changed()
        {
            self.config.bounds = DragBounds::uniform(extent);
        }

        ui.add_space(8.0);
        ui.label("Spring");
        ui.add(egui::Slider::new(&mut self.config.spring.stiffness, 10.0..=1000.0).text("Stiffness"));
        ui.add(egui::Slider::new(&mut self.config.spring.damping, 1.0..=100.0).text("Damping"));
        ui.add(egui::Slider::new(&mut self.config.spring.mass, 0.1..=5.0).text("Mass"));

        ui.add_space(8.0);
        ui.label("Hover");
        ui.add(egui::Slider::new(&mut self.config.hover.scale, 1.0..=1.2).text("Scale"));
        ui.add(egui::Slider::new(&mut self.config.hover.lift, 0.0..=10.0).text("Lift"));
        ui.add(egui::Slider::new(&mut self.config.hover.rotation_deg, -5.0..=5.0).text("Rotation"));

        ui.add_space(8.0);
        if ui.button("Defaults").clicked() {
            self.config = CardConfig::default();
        }

        ui.separator();
        ui.monospace(format!("offset   {:>6.1} {:>6.1}", self.last_offset.x, self.last_offset.y));
        ui.monospace(format!("releases {}", self.releases));
    }
}

impl eframe::App for CardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.vertical_centered(|ui| {
                let mut config = self.config.clone();
                config.inner_margin = 24.0;
                let response = DraggableCard::new("playground").config(config).show(ui, |ui| {
                    ui.label(egui::RichText::new("Drag me").size(20.0));
                    ui.label("Release to snap back");
                });
                self.last_offset = response.offset;
                if response.released {
                    self.releases += 1;
                }
            });
        });
    }
}
