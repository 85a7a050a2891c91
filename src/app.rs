//! Main application - eframe::App implementation.
//!
//! Each frame:
//! - Apply theme and font settings
//! - Handle keyboard input (help, preferences, reset, page scrolling)
//! - Render status bar, the scrolled page, overlays and dialogs
//! - Feed settings changes back into the page
//!
//! Settings are persisted by eframe (`save`) as JSON under `eframe::APP_KEY`.

use eframe::egui::{self, Key, Modifiers};
use log::{debug, info, warn};

use crate::cli::Args;
use crate::config::PathConfig;
use crate::help::{CardHelp, TimelineHelp, render_help_overlay};
use crate::page::Page;
use crate::settings::{AppSettings, render_settings_window};
use crate::widgets::status::{StatusBar, StatusInfo};
use crate::widgets::timeline::TimelineConfig;

/// Arrow-key scroll step (px)
const LINE_STEP: f32 = 40.0;

/// Fraction of the viewport scrolled by PageUp/PageDown
const PAGE_FRACTION: f32 = 0.9;

/// Pending programmatic scroll
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScrollRequest {
    Top,
    Bottom,
    By(f32),
}

/// Main application state
pub struct LandingApp {
    pub settings: AppSettings,
    page: Page,
    status_bar: StatusBar,
    show_settings: bool,
    path_config: PathConfig,
    applied_style: Option<(bool, f32)>,
    applied_timeline: TimelineConfig,
    scroll_request: Option<ScrollRequest>,
    scroll_offset: f32,
    viewport_height: f32,
    content_height: f32,
}

impl LandingApp {
    pub fn new(settings: AppSettings, path_config: PathConfig) -> Self {
        Self {
            page: Page::new(settings.card.clone()),
            applied_timeline: settings.timeline.clone(),
            settings,
            status_bar: StatusBar::new(),
            show_settings: false,
            path_config,
            applied_style: None,
            scroll_request: None,
            scroll_offset: 0.0,
            viewport_height: 0.0,
            content_height: 0.0,
        }
    }

    /// Restore persisted settings (unless `--reset`) and apply CLI overrides.
    pub fn from_storage(storage: Option<&dyn eframe::Storage>, args: &Args, path_config: PathConfig) -> Self {
        let mut settings = if args.reset {
            info!("--reset: starting from default settings");
            AppSettings::default()
        } else {
            storage
                .and_then(|s| s.get_string(eframe::APP_KEY))
                .and_then(|json| match AppSettings::from_json(&json) {
                    Ok(settings) => Some(settings),
                    Err(e) => {
                        warn!("Ignoring persisted settings: {:#}", e);
                        None
                    }
                })
                .unwrap_or_else(|| {
                    info!("No persisted settings found, using defaults");
                    AppSettings::default()
                })
        };
        settings.apply_args(args);
        debug!("Starting with settings: {:?}", settings);
        Self::new(settings, path_config)
    }

    pub fn path_config(&self) -> &PathConfig {
        &self.path_config
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    fn apply_style(&mut self, ctx: &egui::Context) {
        let wanted = (self.settings.dark_mode, self.settings.font_size);
        if self.applied_style == Some(wanted) {
            return;
        }

        ctx.set_visuals(if self.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // Scale every text style relative to Body
        let mut style = (*ctx.style()).clone();
        let body = style
            .text_styles
            .get(&egui::TextStyle::Body)
            .map_or(14.0, |f| f.size);
        let scale = self.settings.font_size / body.max(1.0);
        for font_id in style.text_styles.values_mut() {
            font_id.size *= scale;
        }
        ctx.set_style(style);

        self.applied_style = Some(wanted);
        self.page.timeline.request_remeasure();
    }

    /// Push settings edits into the page.
    fn sync_settings(&mut self) {
        self.page.set_card_config(&self.settings.card);
        if self.applied_timeline != self.settings.timeline {
            self.applied_timeline = self.settings.timeline.clone();
            self.page.timeline.request_remeasure();
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::F1)) {
            self.settings.show_help = !self.settings.show_help;
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::F12)) {
            self.show_settings = !self.show_settings;
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::R)) {
            self.settings.reset();
            self.status_bar.set_message("Settings reset to defaults");
            info!("Settings reset");
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Escape)) {
            if self.show_settings {
                self.show_settings = false;
            } else if self.settings.show_help {
                self.settings.show_help = false;
            } else {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }

        // Page navigation, unless a text field has the keyboard
        if ctx.wants_keyboard_input() {
            return;
        }
        let page = self.viewport_height * PAGE_FRACTION;
        let bindings = [
            (Key::Home, ScrollRequest::Top),
            (Key::End, ScrollRequest::Bottom),
            (Key::PageUp, ScrollRequest::By(-page)),
            (Key::PageDown, ScrollRequest::By(page)),
            (Key::ArrowUp, ScrollRequest::By(-LINE_STEP)),
            (Key::ArrowDown, ScrollRequest::By(LINE_STEP)),
        ];
        for (key, request) in bindings {
            if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, key)) {
                self.scroll_request = Some(request);
            }
        }
    }

    /// Status bar snapshot from the last scroll update.
    fn status_info(&self) -> StatusInfo {
        let timeline = &self.page.timeline;
        let active = timeline.active_step(&self.settings.timeline);
        StatusInfo {
            progress: timeline.progress(),
            fill: timeline.fill(),
            total_height: timeline.total_height(),
            step_count: self.page.steps().len(),
            active_step: active.and_then(|idx| self.page.steps().get(idx).map(|s| (idx, s.title.clone()))),
        }
    }

    /// One frame of UI; `update` minus the eframe plumbing.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.apply_style(ctx);
        self.handle_keyboard(ctx);
        self.status_bar.update(ctx);

        if self.settings.show_status_bar {
            let info = self.status_info();
            if self.status_bar.render(ctx, &info, &mut self.settings.card.draggable) {
                info!("Card dragging {}", if self.settings.card.draggable { "enabled" } else { "disabled" });
            }
        }

        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("page_scroll")
            .auto_shrink([false; 2]);
        if let Some(request) = self.scroll_request.take() {
            let target = match request {
                ScrollRequest::Top => 0.0,
                ScrollRequest::Bottom => (self.content_height - self.viewport_height).max(0.0),
                ScrollRequest::By(dy) => (self.scroll_offset + dy).max(0.0),
            };
            scroll = scroll.vertical_scroll_offset(target);
        }

        let timeline_config = self.settings.timeline.clone();
        let mut swap_clicked = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            let output = scroll.show(ui, |ui| {
                let response = self.page.ui(ui, &timeline_config);
                swap_clicked = response.swap_clicked;
            });
            self.scroll_offset = output.state.offset.y;
            self.viewport_height = output.inner_rect.height();
            self.content_height = output.content_size.y;
        });

        if swap_clicked {
            info!("Swap clicked");
            self.status_bar.set_message("Swap is a demo button");
        }

        if self.settings.show_help {
            egui::Area::new(egui::Id::new("help_overlay"))
                .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    render_help_overlay(ui, &[&TimelineHelp, &CardHelp], true);
                });
        }

        if self.show_settings
            && let Some(message) = render_settings_window(
                ctx,
                &mut self.show_settings,
                &mut self.settings,
                &crate::config::config_dir(&self.path_config),
            )
        {
            self.status_bar.set_message(message);
        }

        self.sync_settings();
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }

    /// Save app state to persistent storage
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.settings.to_json() {
            Ok(json) => {
                storage.set_string(eframe::APP_KEY, json);
                debug!("Settings saved");
            }
            Err(e) => warn!("Failed to save settings: {:#}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run(app: &mut LandingApp, ctx: &egui::Context, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 800.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.ui(ctx));
    }

    fn key(key: Key, modifiers: Modifiers) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    /// In-memory storage for persistence tests
    #[derive(Default)]
    struct MemStorage(std::collections::HashMap<String, String>);

    impl eframe::Storage for MemStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_settings_persist_through_storage() {
        let args = Args::try_parse_from(["unihook"]).unwrap();
        let mut app = LandingApp::new(AppSettings::default(), PathConfig::default());
        app.settings.font_size = 18.0;
        app.settings.card.draggable = false;

        let mut storage = MemStorage::default();
        eframe::App::save(&mut app, &mut storage);

        let restored = LandingApp::from_storage(Some(&storage), &args, PathConfig::default());
        assert_eq!(restored.settings, app.settings);

        let args = Args::try_parse_from(["unihook", "--reset"]).unwrap();
        let reset = LandingApp::from_storage(Some(&storage), &args, PathConfig::default());
        assert_eq!(reset.settings, AppSettings::default());
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_defaults() {
        let args = Args::try_parse_from(["unihook", "--no-drag"]).unwrap();
        let mut storage = MemStorage::default();
        eframe::Storage::set_string(&mut storage, eframe::APP_KEY, "{not json".to_string());

        let app = LandingApp::from_storage(Some(&storage), &args, PathConfig::default());
        assert!(!app.settings.card.draggable);
        assert_eq!(app.settings.timeline, TimelineConfig::default());
    }

    #[test]
    fn test_frames_measure_page_and_toggle_panels() {
        let ctx = egui::Context::default();
        let mut app = LandingApp::new(AppSettings::default(), PathConfig::default());

        run(&mut app, &ctx, vec![]);
        assert!(app.page().timeline.is_mounted());
        assert!(app.viewport_height > 0.0);

        run(&mut app, &ctx, vec![key(Key::F1, Modifiers::NONE)]);
        assert!(app.settings.show_help);
        run(&mut app, &ctx, vec![key(Key::Escape, Modifiers::NONE)]);
        assert!(!app.settings.show_help);

        run(&mut app, &ctx, vec![key(Key::F12, Modifiers::NONE)]);
        assert!(app.show_settings);
    }

    #[test]
    fn test_end_key_scrolls_to_bottom() {
        let ctx = egui::Context::default();
        let mut app = LandingApp::new(AppSettings::default(), PathConfig::default());

        run(&mut app, &ctx, vec![]);
        run(&mut app, &ctx, vec![key(Key::End, Modifiers::NONE)]);
        run(&mut app, &ctx, vec![]);
        assert!(app.scroll_offset > 0.0);

        assert!(app.page().timeline.progress() > 0.0);

        run(&mut app, &ctx, vec![key(Key::Home, Modifiers::NONE)]);
        run(&mut app, &ctx, vec![]);
        assert_eq!(app.scroll_offset, 0.0);
    }

    #[test]
    fn test_timeline_edit_requests_remeasure() {
        let ctx = egui::Context::default();
        let mut app = LandingApp::new(AppSettings::default(), PathConfig::default());
        run(&mut app, &ctx, vec![]);
        let before = app.page().timeline.total_height();

        app.settings.timeline.step_spacing += 100.0;
        run(&mut app, &ctx, vec![]);
        run(&mut app, &ctx, vec![]);

        let after = app.page().timeline.total_height();
        assert!((after - before - 400.0).abs() < 1.0, "{} -> {}", before, after);
    }
}
