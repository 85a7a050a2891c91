use eframe::egui::{self, Hyperlink, RichText, Ui};

use super::palette::{NEUTRAL_200, NEUTRAL_400};

pub const EVENT_LINE: &str = "San Francisco, CA // ETHGlobal Hackathon 2024/10/19";

/// (handle, profile url)
pub const CONTRIBUTORS: &[(&str, &str)] = &[
    ("@Attens", "https://github.com/Attens1423"),
    ("@Ashu", "https://github.com/0xashu"),
    ("@Shiran", "https://github.com/ShiranZH"),
    ("@Katherine", "https://github.com/katherine84522"),
];

/// Event line and contributor links, centered.
pub fn render_footer(ui: &mut Ui) {
    ui.add_space(32.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(EVENT_LINE).monospace().italics().color(NEUTRAL_200));
        ui.add_space(4.0);

        // Center the link row by measuring it first
        let links_width: f32 = CONTRIBUTORS
            .iter()
            .map(|(name, _)| {
                ui.painter()
                    .layout_no_wrap(name.to_string(), egui::FontId::monospace(12.0), NEUTRAL_400)
                    .size()
                    .x
            })
            .sum::<f32>()
            + 16.0 * (CONTRIBUTORS.len().saturating_sub(1)) as f32;
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - links_width) / 2.0).max(0.0));
            ui.spacing_mut().item_spacing.x = 16.0;
            for (name, url) in CONTRIBUTORS {
                let text = RichText::new(*name).monospace().italics().size(12.0).color(NEUTRAL_400);
                ui.add(Hyperlink::from_label_and_url(text, *url)).on_hover_text(*url);
            }
        });
    });
    ui.add_space(64.0);
}
