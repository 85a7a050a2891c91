//! Context help overlay.
//!
//! Each widget area implements `HelpProvider` to list its bindings. Global
//! help (F-keys, Ctrl+R, etc.) is shown below every section.

use eframe::egui;

/// Single help entry (key binding + description)
#[derive(Clone, Debug)]
pub struct HelpEntry {
    pub key: &'static str,
    pub desc: &'static str,
}

impl HelpEntry {
    pub const fn new(key: &'static str, desc: &'static str) -> Self {
        Self { key, desc }
    }
}

/// Trait for widgets that provide context-sensitive help
pub trait HelpProvider {
    /// Section title (e.g., "Timeline", "Card")
    fn help_title(&self) -> &'static str;

    /// Help entries for this widget
    fn help_entries(&self) -> &'static [HelpEntry];
}

/// Global hotkeys
pub const GLOBAL_HELP: &[HelpEntry] = &[
    HelpEntry::new("F1", "Toggle help"),
    HelpEntry::new("F12", "Toggle Preferences"),
    HelpEntry::new("Ctrl+R", "Reset Settings"),
    HelpEntry::new("ESC", "Close Window / Quit"),
];

/// Page scrolling
pub const TIMELINE_HELP: &[HelpEntry] = &[
    HelpEntry::new("Mouse Wheel", "Scroll the page"),
    HelpEntry::new("Home / End", "Jump to top / bottom"),
    HelpEntry::new("PgUp / PgDn", "Scroll one screen"),
    HelpEntry::new("Up / Down", "Scroll a little"),
];

/// Draggable cards
pub const CARD_HELP: &[HelpEntry] = &[
    HelpEntry::new("Hover", "Lift card"),
    HelpEntry::new("Left Drag", "Move card (within bounds)"),
    HelpEntry::new("Release", "Card springs back"),
];

pub struct TimelineHelp;
pub struct CardHelp;

impl HelpProvider for TimelineHelp {
    fn help_title(&self) -> &'static str {
        "Timeline"
    }

    fn help_entries(&self) -> &'static [HelpEntry] {
        TIMELINE_HELP
    }
}

impl HelpProvider for CardHelp {
    fn help_title(&self) -> &'static str {
        "Card"
    }

    fn help_entries(&self) -> &'static [HelpEntry] {
        CARD_HELP
    }
}

/// Render help overlay for the given sections
pub fn render_help_overlay(ui: &mut egui::Ui, providers: &[&dyn HelpProvider], include_global: bool) {
    let font_id = egui::FontId::proportional(13.0);
    let text_color = egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200);
    let key_color = egui::Color32::from_rgb(255, 200, 100);

    // Align descriptions (estimate based on char count)
    let max_key_len = providers
        .iter()
        .flat_map(|p| p.help_entries().iter())
        .chain(if include_global { GLOBAL_HELP.iter() } else { [].iter() })
        .map(|e| e.key.len())
        .max()
        .unwrap_or(10);
    let max_key_width = (max_key_len as f32) * 8.0 + 20.0;

    let render_entries = |ui: &mut egui::Ui, entries: &[HelpEntry]| {
        for entry in entries {
            ui.horizontal(|ui| {
                ui.add_sized(
                    [max_key_width, 18.0],
                    egui::Label::new(egui::RichText::new(entry.key).font(font_id.clone()).color(key_color)),
                );
                ui.label(egui::RichText::new(entry.desc).font(font_id.clone()).color(text_color));
            });
        }
    };
    let section_title = |ui: &mut egui::Ui, title: &str| {
        ui.label(egui::RichText::new(title).font(font_id.clone()).color(egui::Color32::GRAY));
        ui.add_space(4.0);
    };

    egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180))
        .inner_margin(12.0)
        .corner_radius(4.0)
        .show(ui, |ui| {
            for (idx, provider) in providers.iter().enumerate() {
                if idx > 0 {
                    ui.add_space(8.0);
                }
                section_title(ui, provider.help_title());
                render_entries(ui, provider.help_entries());
            }

            if include_global && !GLOBAL_HELP.is_empty() {
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(4.0);
                section_title(ui, "Global");
                render_entries(ui, GLOBAL_HELP);
            }
        });
}

/// All sections, in display order
pub fn all_help_sections() -> Vec<(&'static str, &'static [HelpEntry])> {
    vec![
        ("Global", GLOBAL_HELP),
        (TimelineHelp.help_title(), TimelineHelp.help_entries()),
        (CardHelp.help_title(), CardHelp.help_entries()),
    ]
}
