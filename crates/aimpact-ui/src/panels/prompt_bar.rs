//! Collapsed view — suggestion chips over the prompt input.

use aimpact_core::Intent;
use aimpact_types::{session::SessionState, suggestion::SuggestionCatalog};
use egui::{self, RichText, Vec2};

use crate::panels::input::input_bar;
use crate::theme::*;

/// Render the collapsed prompt bar. Returns the intents issued this frame.
pub fn prompt_bar(
    ui: &mut egui::Ui,
    state: &SessionState,
    catalog: &SuggestionCatalog,
) -> Vec<Intent> {
    let mut intents = Vec::new();

    ui.vertical_centered(|ui| {
        ui.set_max_width(BUBBLE_MAX_WIDTH + 2.0 * PANEL_PADDING.x);

        ui.horizontal_wrapped(|ui| {
            for suggestion in catalog.list() {
                let chip = egui::Button::new(
                    RichText::new(format!("✨ {}", suggestion.label)).color(TEXT_SECONDARY),
                )
                .fill(BG_SECONDARY)
                .stroke(egui::Stroke::new(1.0, BORDER))
                .corner_radius(CHIP_ROUNDING)
                .min_size(Vec2::new(0.0, 36.0));

                if ui.add(chip).clicked() {
                    log::debug!("Suggestion picked: {}", suggestion.id);
                    intents.push(Intent::PickSuggestion(suggestion.id.clone()));
                }
            }
        });

        ui.add_space(16.0);
        input_bar(ui, state.draft(), &mut intents);
    });

    intents
}
