use eframe::egui;

/// Compact bar showing scroll progress through the timeline
pub struct ProgressBar {
    fraction: f32,
    width: f32,
    height: f32,
    fill_color: egui::Color32,
}

impl ProgressBar {
    /// Create new progress bar with specified dimensions
    /// Default fill color: blue-500
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_color(width, height, egui::Color32::from_rgb(59, 130, 246))
    }

    /// Create new progress bar with custom fill color
    pub fn with_color(width: f32, height: f32, fill_color: egui::Color32) -> Self {
        Self {
            fraction: 0.0,
            width,
            height,
            fill_color,
        }
    }

    /// Update progress (0..=1, anything else is clamped)
    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Text drawn over the bar
    pub fn label(&self) -> String {
        format!("{:.0}%", self.fraction * 100.0)
    }

    /// Render progress bar
    pub fn render(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(self.width, self.height), egui::Sense::hover());

        // Background
        ui.painter().rect_filled(rect, 2.0, egui::Color32::from_gray(40));

        if self.fraction > 0.0 {
            let fill_rect = egui::Rect::from_min_size(
                rect.min,
                egui::vec2(rect.width() * self.fraction, rect.height()),
            );
            ui.painter().rect_filled(fill_rect, 2.0, self.fill_color);
        }

        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            self.label(),
            egui::FontId::monospace(9.0),
            egui::Color32::from_gray(220),
        );
        response
    }
}
