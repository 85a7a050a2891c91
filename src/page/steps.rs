//! Demo steps narrating a swap: Quote, Before Swap, Swap, After Swap.

use eframe::egui::{self, Ui, scroll_area::ScrollSource};
use egui_extras::syntax_highlighting::{CodeTheme, code_view_ui};

use super::typed::{PromptLine, TypedLines};
use crate::widgets::card::{CardConfig, DraggableCard};
use crate::widgets::timeline::Step;

/// Tick-to-liquidity mapping shown in the Quote step.
pub const CODE_SNIPPET: &str = "\
uint160 sqrtPriceX96 = TickMath.getSqrtRatioAtTick(curTick);

if(zeroForOne) {
  uint256 tmp1 = fromAmount * uint256(sqrtPriceX96) / Q96 *uint256(sqrtPriceX96) / Q96- toAmount;
  uint256 tmp2 = fromAmount * uint256(sqrtPriceX96) * toAmount / Q96;
  liquidity = uint128(tmp2 / tmp1);
} else {
  uint256 tmp1 = fromAmount - toAmount * uint256(sqrtPriceX96) / Q96 * uint256(sqrtPriceX96) / Q96;
  uint256 tmp2 = fromAmount * uint256(sqrtPriceX96) * toAmount / Q96;
  liquidity = uint128(tmp2 / tmp1);
}
";

/// Closest language the built-in highlighter knows for Solidity.
const CODE_LANGUAGE: &str = "cpp";

/// (title, command, outputs)
const SCRIPTS: [(&str, &str, [&str; 3]); 4] = [
    (
        "Quote",
        "Query the best price for a swap...",
        ["Searching DEX platforms...", "Comparing prices...", "Best price found!"],
    ),
    (
        "Before Swap",
        "Check wallet balance...",
        ["Connecting to wallet...", "Fetching balance...", "Balance: 1.5 ETH"],
    ),
    (
        "Swap",
        "Execute swap...",
        ["Initiating transaction...", "Confirming on blockchain...", "Swap successful!"],
    ),
    (
        "After Swap",
        "Verify new balance...",
        ["Updating wallet...", "Fetching new balance...", "New balance: 100 USDC"],
    ),
];

/// Build the four demo steps. Cards inside them use `card`.
pub fn demo_steps(card: &CardConfig) -> Vec<Step> {
    SCRIPTS
        .iter()
        .enumerate()
        .map(|(idx, (title, command, outputs))| {
            let mut lines = vec![PromptLine::command(*command)];
            lines.extend(outputs.iter().map(|s| PromptLine::output(*s)));
            let typed = TypedLines::new(*title, lines);

            if idx == 0 {
                let card = CardConfig { inner_margin: 12.0, ..card.clone() };
                Step::new(*title, move |ui: &mut Ui| quote_content(ui, &typed, &card))
            } else {
                // Prompt panels stay put; hover only
                let card = CardConfig { inner_margin: 16.0, draggable: false, ..card.clone() };
                let salt = ("prompt_card", idx);
                Step::new(*title, move |ui: &mut Ui| {
                    DraggableCard::new(salt).config(card.clone()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        typed.ui(ui);
                    });
                    ui.add_space(32.0);
                })
            }
        })
        .collect()
}

fn quote_content(ui: &mut Ui, typed: &TypedLines, card: &CardConfig) {
    typed.ui(ui);
    ui.add_space(12.0);
    DraggableCard::new("quote_code").config(card.clone()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::ScrollArea::horizontal()
            .id_salt("quote_code_scroll")
            .scroll_source(ScrollSource {
                drag: false,
                ..Default::default()
            })
            .show(ui, |ui| {
                let theme = CodeTheme::from_style(ui.style());
                code_view_ui(ui, &theme, CODE_SNIPPET, CODE_LANGUAGE);
            });
    });
    ui.add_space(32.0);
}
