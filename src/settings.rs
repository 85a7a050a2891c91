//! Application settings and the Preferences window.
//!
//! Settings persist through eframe storage as JSON (see `app`), and can be
//! exported to / imported from a standalone JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;
use egui_ltreeview::TreeView;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::core::{DragBounds, ScrollOffset};
use crate::widgets::card::CardConfig;
use crate::widgets::timeline::TimelineConfig;

/// Settings categories
#[derive(Debug, Clone, Copy, PartialEq)]
enum SettingsCategory {
    General,
    Timeline,
    Card,
    Files,
}

impl SettingsCategory {
    const ALL: [SettingsCategory; 4] = [
        SettingsCategory::General,
        SettingsCategory::Timeline,
        SettingsCategory::Card,
        SettingsCategory::Files,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SettingsCategory::General => "General",
            SettingsCategory::Timeline => "Timeline",
            SettingsCategory::Card => "Card",
            SettingsCategory::Files => "Files",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Application settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub timeline: TimelineConfig,
    pub card: CardConfig,

    // UI
    pub dark_mode: bool,
    pub font_size: f32,
    pub show_help: bool,
    pub show_status_bar: bool,

    // Internal
    pub selected_settings_category: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            timeline: TimelineConfig::default(),
            card: CardConfig::default(),
            dark_mode: true,
            font_size: 14.0,
            show_help: false,
            show_status_bar: true,
            selected_settings_category: Some("Timeline".to_string()),
        }
    }
}

impl AppSettings {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize settings")
    }

    /// Parse settings; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse settings JSON")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write settings: {}", path.display()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid settings file: {}", path.display()))
    }

    /// Apply command-line overrides on top of loaded settings.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(width) = args.width {
            if width.is_finite() && width > 0.0 {
                self.timeline.max_width = width;
            } else {
                warn!("Ignoring invalid --width {}", width);
            }
        }
        if args.no_drag {
            self.card.draggable = false;
        }
    }

    /// Restore defaults, keeping the Preferences window on its current page.
    pub fn reset(&mut self) {
        let category = self.selected_settings_category.take();
        *self = Self::default();
        self.selected_settings_category = category;
    }
}

/// Render General settings category
fn render_general_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Appearance");
    ui.add_space(8.0);

    ui.label("Font Size:");
    ui.add(
        egui::Slider::new(&mut settings.font_size, 10.0..=22.0)
            .suffix(" px")
            .step_by(0.5),
    );
    ui.add_space(8.0);

    ui.checkbox(&mut settings.dark_mode, "Dark Mode");
    ui.checkbox(&mut settings.show_status_bar, "Show Status Bar");
    ui.checkbox(&mut settings.show_help, "Show Help Overlay (F1)");
}

/// Render Timeline settings category
fn render_timeline_settings(ui: &mut egui::Ui, config: &mut TimelineConfig) {
    ui.heading("Layout");
    ui.add_space(8.0);

    let px_slider = |ui: &mut egui::Ui, label: &str, value: &mut f32, range: std::ops::RangeInclusive<f32>| {
        ui.label(label);
        ui.add(egui::Slider::new(value, range).suffix(" px").step_by(1.0));
        ui.add_space(4.0);
    };
    px_slider(ui, "Container Width:", &mut config.max_width, 480.0..=1600.0);
    px_slider(ui, "Step Spacing:", &mut config.step_spacing, 0.0..=400.0);
    px_slider(ui, "Bottom Padding:", &mut config.bottom_padding, 0.0..=400.0);
    px_slider(ui, "Title Column Width:", &mut config.title_width, 120.0..=500.0);
    px_slider(ui, "Sticky Title Offset:", &mut config.sticky_top, 0.0..=400.0);
    ui.checkbox(&mut config.remeasure_on_resize, "Re-measure on resize");

    ui.add_space(16.0);
    ui.heading("Scroll Offsets");
    ui.add_space(8.0);

    offset_edit(ui, "offset_start", "Start:", &mut config.offsets.start);
    offset_edit(ui, "offset_end", "End:", &mut config.offsets.end);
    ui.label("Format: <start|center|end> <N>%  e.g. \"start 10%\".");

    ui.add_space(8.0);
    ui.label("Fill Fade-in (progress):");
    ui.add(egui::Slider::new(&mut config.opacity_ramp, 0.0..=1.0).step_by(0.01));
}

/// Text field bound to a `ScrollOffset`; applies only parseable input.
fn offset_edit(ui: &mut egui::Ui, id_salt: &str, label: &str, value: &mut ScrollOffset) {
    let id = ui.make_persistent_id(id_salt);
    let mut text: String = ui
        .data_mut(|d| d.get_temp(id))
        .unwrap_or_else(|| value.to_string());

    ui.horizontal(|ui| {
        ui.label(label);
        let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(120.0));
        match text.parse::<ScrollOffset>() {
            Ok(parsed) => {
                if response.changed() {
                    *value = parsed;
                }
            }
            Err(e) => {
                ui.colored_label(egui::Color32::from_rgb(240, 80, 80), format!("{:#}", e));
            }
        }
        if !response.has_focus() {
            text = value.to_string();
        }
    });

    ui.data_mut(|d| d.insert_temp(id, text));
}

/// Render Card settings category
fn render_card_settings(ui: &mut egui::Ui, card: &mut CardConfig) {
    ui.heading("Drag");
    ui.add_space(8.0);

    ui.checkbox(&mut card.draggable, "Cards are draggable");
    ui.label("Drag Extent:");
    let mut extent = card.bounds.right.abs();
    if ui
        .add(egui::Slider::new(&mut extent, 0.0..=200.0).suffix(" px").step_by(5.0))
        .changed()
    {
        card.bounds = DragBounds::uniform(extent);
    }

    ui.add_space(16.0);
    ui.heading("Snap-back Spring");
    ui.add_space(8.0);
    ui.label("Stiffness:");
    ui.add(egui::Slider::new(&mut card.spring.stiffness, 10.0..=1000.0));
    ui.label("Damping:");
    ui.add(egui::Slider::new(&mut card.spring.damping, 1.0..=100.0));
    ui.label("Mass:");
    ui.add(egui::Slider::new(&mut card.spring.mass, 0.1..=10.0));

    ui.add_space(16.0);
    ui.heading("Hover");
    ui.add_space(8.0);
    ui.label("Scale:");
    ui.add(egui::Slider::new(&mut card.hover.scale, 1.0..=1.2).step_by(0.01));
    ui.label("Lift:");
    ui.add(egui::Slider::new(&mut card.hover.lift, 0.0..=10.0).suffix(" px"));
    ui.label("Rotation:");
    ui.add(egui::Slider::new(&mut card.hover.rotation_deg, -5.0..=5.0).suffix("\u{b0}"));
}

/// Render Files category. Returns a status message for the host.
fn render_files_settings(ui: &mut egui::Ui, settings: &mut AppSettings, config_dir: &Path) -> Option<String> {
    let mut message = None;

    ui.heading("Settings File");
    ui.add_space(8.0);
    ui.label(format!("Config folder: {}", config_dir.display()));
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.button("Export...").clicked()
            && let Some(path) = json_dialog("Export Settings", config_dir).save_file()
        {
            message = Some(match settings.save_to(&path) {
                Ok(()) => {
                    info!("Settings exported to {}", path.display());
                    format!("Exported {}", path.display())
                }
                Err(e) => {
                    warn!("{:#}", e);
                    format!("Export failed: {:#}", e)
                }
            });
        }

        if ui.button("Import...").clicked()
            && let Some(path) = json_dialog("Import Settings", config_dir).pick_file()
        {
            message = Some(match AppSettings::load_from(&path) {
                Ok(mut loaded) => {
                    loaded.selected_settings_category = settings.selected_settings_category.clone();
                    *settings = loaded;
                    info!("Settings imported from {}", path.display());
                    format!("Imported {}", path.display())
                }
                Err(e) => {
                    warn!("{:#}", e);
                    format!("Import failed: {:#}", e)
                }
            });
        }
    });

    ui.add_space(16.0);
    ui.heading("Defaults");
    ui.add_space(8.0);
    if ui.button("Reset All Settings").clicked() {
        settings.reset();
        message = Some("Settings reset to defaults".to_string());
    }
    ui.label("Same as Ctrl+R.");

    message
}

fn json_dialog(title: &str, dir: &Path) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .set_directory(dir)
        .add_filter("JSON", &["json"])
        .set_file_name(crate::config::SETTINGS_FILE)
        .set_title(title)
}

/// Render settings window. Returns a status message when a file action ran.
pub fn render_settings_window(
    ctx: &egui::Context,
    show_settings: &mut bool,
    settings: &mut AppSettings,
    config_dir: &Path,
) -> Option<String> {
    // Get selected category from settings or use default
    let mut selected = settings
        .selected_settings_category
        .as_deref()
        .and_then(SettingsCategory::from_str)
        .unwrap_or(SettingsCategory::Timeline);
    let mut message = None;

    egui::Window::new("Preferences")
        .id(egui::Id::new("settings_window"))
        .open(show_settings)
        .default_size([640.0, 480.0])
        .min_size([480.0, 360.0])
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        // Left panel: category tree
                        ui.vertical(|ui| {
                            ui.set_width(160.0);
                            ui.add_space(4.0);

                            let tree_id = ui.make_persistent_id("settings_tree_view");
                            let (_response, actions) = TreeView::new(tree_id).show(ui, |builder| {
                                for (idx, category) in SettingsCategory::ALL.iter().enumerate() {
                                    builder.leaf(idx, category.as_str());
                                }
                            });

                            for action in actions {
                                if let egui_ltreeview::Action::SetSelected(node_ids) = action
                                    && let Some(&node_id) = node_ids.first()
                                    && let Some(&category) = SettingsCategory::ALL.get(node_id)
                                {
                                    selected = category;
                                }
                            }
                        });

                        ui.separator();

                        // Right panel: content for selected category
                        ui.vertical(|ui| {
                            ui.add_space(8.0);
                            match selected {
                                SettingsCategory::General => render_general_settings(ui, settings),
                                SettingsCategory::Timeline => {
                                    render_timeline_settings(ui, &mut settings.timeline)
                                }
                                SettingsCategory::Card => render_card_settings(ui, &mut settings.card),
                                SettingsCategory::Files => {
                                    message = render_files_settings(ui, settings, config_dir);
                                }
                            }
                        });
                    });
                });
        });

    // Save selected category
    settings.selected_settings_category = Some(selected.as_str().to_string());
    message
}
