//! Single-line prompt input shared by both views.

use aimpact_core::Intent;
use egui::{self, RichText, Vec2};

use crate::theme::*;
use crate::view::{send_enabled, INPUT_HINT};

/// Render the input row, pushing `UpdateDraft` / `SubmitDraft` intents.
pub fn input_bar(ui: &mut egui::Ui, draft: &str, intents: &mut Vec<Intent>) {
    let mut text = draft.to_string();

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(Vec2::new(16.0, 10.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .hint_text(RichText::new(INPUT_HINT).color(TEXT_MUTED))
                        .frame(false)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(15.0)),
                );

                if response.changed() {
                    intents.push(Intent::UpdateDraft(text.clone()));
                }

                let enabled = send_enabled(&text);
                let send_btn = ui.add_enabled(
                    enabled,
                    egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                        .fill(if enabled { BG_USER_BUBBLE } else { BG_SURFACE })
                        .corner_radius(BUBBLE_ROUNDING)
                        .min_size(Vec2::new(60.0, 0.0)),
                );

                // Submit on Enter or button click
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if enabled && (enter || send_btn.clicked()) {
                    intents.push(Intent::SubmitDraft);
                    response.request_focus();
                }
            });
        });
}
