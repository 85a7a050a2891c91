//! Hero section: star link, hover wordmark, description, tagline, Swap button.

use eframe::egui::{self, Button, Color32, FontId, Hyperlink, Response, RichText, Sense, Ui, pos2, vec2};

use super::palette::{NEUTRAL_200, NEUTRAL_800, PINK_400, WORDMARK_STOPS};

pub const WORDMARK: &str = "UNIHOOK";
pub const TAGLINE: &str = "Aggregator // Order Limit // Tick Mapping";
pub const REPO_URL: &str = "https://github.com/Attens1423/market-maker-hook";
pub const AGGREGATOR_URL: &str = "https://github.com/Attens1423/Aggregator-Hook";

const WORDMARK_SIZE: f32 = 96.0;
const LETTER_SPACING: f32 = 6.0;

/// Render the hero. Returns `true` when the (decorative) Swap button was
/// clicked.
pub fn render_hero(ui: &mut Ui) -> bool {
    let mut swap_clicked = false;
    ui.add_space(96.0);
    ui.vertical_centered(|ui| {
        ui.add(Hyperlink::from_label_and_url(
            RichText::new("\u{2605} Star").size(14.0),
            REPO_URL,
        ))
        .on_hover_text("Star Attens1423/market-maker-hook on GitHub");

        ui.add_space(16.0);
        wordmark(ui, WORDMARK, WORDMARK_SIZE);
        ui.add_space(16.0);

        ui.set_max_width(ui.available_width().min(672.0));
        description(ui);
        ui.add_space(8.0);
        ui.label(RichText::new(TAGLINE).monospace().color(PINK_400));

        ui.add_space(32.0);
        let swap = Button::new(RichText::new("Swap").monospace().italics().size(16.0))
            .min_size(vec2(160.0, 40.0));
        swap_clicked = ui.add(swap).clicked();
    });
    swap_clicked
}

fn description(ui: &mut Ui) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        let text = |s: &str| RichText::new(s).color(NEUTRAL_200);
        let link = |s: &str| RichText::new(s).color(PINK_400);

        ui.add(Hyperlink::from_label_and_url(link("Market Maker Hook"), REPO_URL));
        ui.label(text(" extends "));
        ui.add(Hyperlink::from_label_and_url(link("Aggregator Hook"), AGGREGATOR_URL));
        ui.label(text(
            " with a practical use case: a MatchEngine maintains an order book supplied by \
             market makers, and when a user trades, the Aggregator Hook technique fills in \
             liquidity so the user gets order-book quotes directly. This design also lets \
             market makers plug seamlessly into the Uniswap V4 ecosystem.",
        ));
    });
}

/// Large letter-spaced wordmark. Letters near the pointer light up with the
/// wordmark gradient while hovered.
pub fn wordmark(ui: &mut Ui, text: &str, size: f32) -> Response {
    let font = FontId::proportional(size);
    let glyphs: Vec<_> = text
        .chars()
        .map(|c| ui.painter().layout_no_wrap(c.to_string(), font.clone(), Color32::WHITE))
        .collect();
    let count = glyphs.len();
    let width = glyphs.iter().map(|g| g.size().x).sum::<f32>()
        + LETTER_SPACING * count.saturating_sub(1) as f32;
    let height = glyphs.iter().map(|g| g.size().y).fold(0.0, f32::max);

    let (rect, response) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let glow = ui.ctx().animate_bool_with_time(response.id, response.hovered(), 0.3);
    let pointer_x = ui.ctx().pointer_latest_pos().map(|p| p.x);

    let mut x = rect.left();
    for (i, galley) in glyphs.into_iter().enumerate() {
        let center_x = x + galley.size().x / 2.0;
        let weight = pointer_x.map_or(0.0, |px| glow_weight(center_x, px, rect.width() * 0.3)) * glow;
        let t = if count > 1 { i as f32 / (count - 1) as f32 } else { 0.0 };
        let color = NEUTRAL_800.lerp_to_gamma(gradient_at(&WORDMARK_STOPS, t), weight);
        let advance = galley.size().x;
        ui.painter()
            .galley_with_override_text_color(pos2(x, rect.top()), galley, color);
        x += advance + LETTER_SPACING;
    }
    response
}

/// Linear falloff from 1 at the pointer to 0 at `radius`.
pub fn glow_weight(x: f32, pointer_x: f32, radius: f32) -> f32 {
    if radius.is_nan() || radius <= 0.0 || !pointer_x.is_finite() {
        return 0.0;
    }
    (1.0 - (x - pointer_x).abs() / radius).clamp(0.0, 1.0)
}

/// Evenly spaced color stops sampled at `t` in 0..=1.
fn gradient_at(stops: &[Color32], t: f32) -> Color32 {
    match stops {
        [] => Color32::TRANSPARENT,
        [only] => *only,
        _ => {
            let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
            let i = (scaled.floor() as usize).min(stops.len() - 2);
            stops[i].lerp_to_gamma(stops[i + 1], scaled - i as f32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_weight_falloff() {
        assert_eq!(glow_weight(100.0, 100.0, 50.0), 1.0);
        assert!((glow_weight(125.0, 100.0, 50.0) - 0.5).abs() < 1e-6);
        assert_eq!(glow_weight(200.0, 100.0, 50.0), 0.0);
        assert_eq!(glow_weight(100.0, 100.0, 0.0), 0.0);
        assert_eq!(glow_weight(100.0, f32::NAN, 50.0), 0.0);
    }

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(gradient_at(&WORDMARK_STOPS, 0.0), WORDMARK_STOPS[0]);
        assert_eq!(gradient_at(&WORDMARK_STOPS, 1.0), WORDMARK_STOPS[4]);
        assert_eq!(gradient_at(&WORDMARK_STOPS, 0.5), WORDMARK_STOPS[2]);
        assert_eq!(gradient_at(&[], 0.5), Color32::TRANSPARENT);
    }

    #[test]
    fn test_hero_renders_headless() {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, vec2(1200.0, 900.0))),
            ..Default::default()
        };
        let mut clicked = true;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| clicked = render_hero(ui));
        });
        assert!(!clicked);
    }
}
