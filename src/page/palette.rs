//! Page colors (Tailwind shades the landing page is styled with).

use eframe::egui::Color32;

pub const PINK_400: Color32 = Color32::from_rgb(244, 114, 182);
pub const NEUTRAL_200: Color32 = Color32::from_rgb(229, 229, 229);
pub const NEUTRAL_400: Color32 = Color32::from_rgb(163, 163, 163);
pub const NEUTRAL_800: Color32 = Color32::from_rgb(38, 38, 38);
pub const TERMINAL_TEXT: Color32 = Color32::WHITE;

/// Wordmark hover gradient, left to right.
pub const WORDMARK_STOPS: [Color32; 5] = [
    Color32::from_rgb(234, 179, 8),  // yellow-500
    Color32::from_rgb(239, 68, 68),  // red-500
    Color32::from_rgb(59, 130, 246), // blue-500
    Color32::from_rgb(6, 182, 212),  // cyan-500
    Color32::from_rgb(139, 92, 246), // violet-500
];
