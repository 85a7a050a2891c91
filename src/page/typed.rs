//! Terminal-style prompt lines that type themselves out once on screen.
//!
//! The full text is always laid out; unrevealed characters are painted
//! transparent, so the block's height never changes while typing and the
//! timeline measurement stays valid.

use eframe::egui::{self, Color32, FontId, Id, Rect, Ui, text::LayoutJob, vec2};

use super::palette::{PINK_400, TERMINAL_TEXT};

/// Default typing speed (characters per second).
pub const DEFAULT_CPS: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    /// `$ ...` line, pink
    Command,
    /// `> ...` line, pink marker with white text
    Output,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PromptLine {
    pub kind: PromptKind,
    pub text: String,
}

impl PromptLine {
    pub fn command(text: impl Into<String>) -> Self {
        Self { kind: PromptKind::Command, text: text.into() }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self { kind: PromptKind::Output, text: text.into() }
    }

    fn prefix(&self) -> &'static str {
        match self.kind {
            PromptKind::Command => "$ ",
            PromptKind::Output => "> ",
        }
    }

    /// Character count including the prompt prefix.
    fn len(&self) -> usize {
        self.prefix().chars().count() + self.text.chars().count()
    }
}

/// Block of prompt lines revealed character by character.
#[derive(Clone, Debug)]
pub struct TypedLines {
    id: Id,
    lines: Vec<PromptLine>,
    chars_per_second: f32,
    font_size: f32,
}

impl TypedLines {
    pub fn new(id_salt: impl std::hash::Hash, lines: Vec<PromptLine>) -> Self {
        Self {
            id: Id::new(("typed_lines", id_salt)),
            lines,
            chars_per_second: DEFAULT_CPS,
            font_size: 13.0,
        }
    }

    pub fn speed(mut self, chars_per_second: f32) -> Self {
        self.chars_per_second = chars_per_second;
        self
    }

    pub fn total_chars(&self) -> usize {
        self.lines.iter().map(PromptLine::len).sum()
    }

    pub fn ui(&self, ui: &mut Ui) {
        let now = ui.input(|i| i.time);
        let probe = Rect::from_min_size(ui.cursor().min, vec2(ui.available_width().max(1.0), 1.0));
        let visible = ui.is_rect_visible(probe);

        let started: Option<f64> = ui.data_mut(|d| d.get_temp(self.id));
        let started = match started {
            Some(t) => Some(t),
            None if visible => {
                ui.data_mut(|d| d.insert_temp(self.id, now));
                Some(now)
            }
            None => None,
        };

        let total = self.total_chars();
        let revealed = started.map_or(0, |t| revealed_chars(now - t, self.chars_per_second, total));

        let mut budget = revealed;
        for (idx, line) in self.lines.iter().enumerate() {
            let shown = budget.min(line.len());
            budget -= shown;
            ui.add_space(if idx == 0 { 0.0 } else { 4.0 });
            ui.label(self.layout_line(line, shown));
        }

        if started.is_some() && revealed < total {
            ui.ctx().request_repaint();
        }
    }

    fn layout_line(&self, line: &PromptLine, shown: usize) -> LayoutJob {
        let font = FontId::monospace(self.font_size);
        let text_color = match line.kind {
            PromptKind::Command => PINK_400,
            PromptKind::Output => TERMINAL_TEXT,
        };

        let prefix = line.prefix();
        let prefix_shown = shown.min(prefix.chars().count());

        let mut job = LayoutJob::default();
        append_split(&mut job, prefix, prefix_shown, PINK_400, &font);
        append_split(&mut job, &line.text, shown - prefix_shown, text_color, &font);
        job
    }
}

/// Append `text` with its first `shown` characters in `color`, the rest
/// transparent.
fn append_split(job: &mut LayoutJob, text: &str, shown: usize, color: Color32, font: &FontId) {
    let cut = text.char_indices().nth(shown).map_or(text.len(), |(i, _)| i);
    let (head, tail) = text.split_at(cut);
    for (part, color) in [(head, color), (tail, Color32::TRANSPARENT)] {
        if !part.is_empty() {
            job.append(
                part,
                0.0,
                egui::TextFormat { font_id: font.clone(), color, ..Default::default() },
            );
        }
    }
}

/// Characters visible `elapsed` seconds after typing started.
pub fn revealed_chars(elapsed: f64, chars_per_second: f32, total: usize) -> usize {
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return 0;
    }
    if chars_per_second.is_nan() || chars_per_second <= 0.0 {
        return total;
    }
    ((elapsed * chars_per_second as f64) as usize).min(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revealed_chars() {
        assert_eq!(revealed_chars(0.0, 60.0, 100), 0);
        assert_eq!(revealed_chars(-1.0, 60.0, 100), 0);
        assert_eq!(revealed_chars(0.5, 60.0, 100), 30);
        assert_eq!(revealed_chars(10.0, 60.0, 100), 100);
        // Zero speed shows everything at once
        assert_eq!(revealed_chars(0.1, 0.0, 42), 42);
        assert_eq!(revealed_chars(f64::NAN, 60.0, 42), 0);
    }

    #[test]
    fn test_total_chars_counts_prefixes() {
        let lines = TypedLines::new(
            "t",
            vec![PromptLine::command("abc"), PromptLine::output("Balance: 1.5 ETH")],
        );
        assert_eq!(lines.total_chars(), 2 + 3 + 2 + 16);
    }

    #[test]
    fn test_hidden_characters_keep_layout() {
        let lines = TypedLines::new("t", vec![PromptLine::output("Fetching balance...")]);
        let line = &lines.lines[0];

        let hidden = lines.layout_line(line, 0);
        let full = lines.layout_line(line, line.len());

        assert_eq!(hidden.text, full.text);
        assert_eq!(hidden.text, "> Fetching balance...");
        assert!(hidden.sections.iter().all(|s| s.format.color == Color32::TRANSPARENT));
        assert!(full.sections.iter().all(|s| s.format.color != Color32::TRANSPARENT));
    }

    #[test]
    fn test_typing_starts_when_visible() {
        let ctx = egui::Context::default();
        let lines = TypedLines::new("visible", vec![PromptLine::command("Execute swap...")]);
        let id = lines.id;

        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(egui::Pos2::ZERO, vec2(600.0, 400.0))),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| lines.ui(ui));
        });

        let started: Option<f64> = ctx.data_mut(|d| d.get_temp(id));
        assert!(started.is_some());
    }
}
