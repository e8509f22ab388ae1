//! Expanded view — full-screen transcript with a back button.

use aimpact_core::Intent;
use aimpact_types::{message::Message, session::SessionState};
use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use crate::panels::input::input_bar;
use crate::theme::*;
use crate::view::{bubble_style, timestamp_label, typing_dot_lift};

/// Render the expanded transcript. Returns the intents issued this frame.
pub fn transcript_view(ui: &mut egui::Ui, state: &SessionState, title: &str) -> Vec<Intent> {
    let mut intents = Vec::new();

    // Header
    ui.horizontal(|ui| {
        if ui
            .add(egui::Button::new(RichText::new("← Back").color(TEXT_SECONDARY)).frame(false))
            .clicked()
        {
            intents.push(Intent::Back);
        }
        ui.with_layout(Layout::centered_and_justified(egui::Direction::LeftToRight), |ui| {
            ui.heading(RichText::new(title).color(TEXT_PRIMARY).strong());
        });
    });
    ui.separator();

    // Messages
    let available_height = ui.available_height() - 80.0;
    ScrollArea::vertical()
        .max_height(available_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(PANEL_PADDING.y);
            for message in state.transcript() {
                render_message(ui, message);
                ui.add_space(12.0);
            }
            if state.is_pending() {
                typing_indicator(ui);
            }
        });

    ui.add_space(8.0);
    input_bar(ui, state.draft(), &mut intents);

    intents
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let style = bubble_style(message.origin());

    ui.with_layout(Layout::top_down(style.align), |ui| {
        let mut frame = egui::Frame::default()
            .fill(style.fill)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(Vec2::new(20.0, 14.0));
        if let Some(stroke) = style.stroke {
            frame = frame.stroke(egui::Stroke::new(1.0, stroke));
        }

        frame.show(ui, |ui| {
            ui.set_max_width(BUBBLE_MAX_WIDTH);
            ui.label(RichText::new(style.speaker).color(TEXT_MUTED).small());
            ui.label(RichText::new(message.text()).color(style.text));
        });

        ui.label(
            RichText::new(timestamp_label(message.created_at()))
                .color(TEXT_MUTED)
                .small(),
        );
    });
}

fn typing_indicator(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time);

    ui.with_layout(Layout::top_down(Align::Min), |ui| {
        egui::Frame::default()
            .fill(BG_SECONDARY)
            .stroke(egui::Stroke::new(1.0, BORDER))
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(Vec2::new(20.0, 14.0))
            .show(ui, |ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(36.0, 12.0), egui::Sense::hover());
                for index in 0..3 {
                    let center = egui::pos2(
                        rect.left() + 6.0 + index as f32 * 12.0,
                        rect.bottom() - 4.0 - typing_dot_lift(time, index),
                    );
                    ui.painter().circle_filled(center, 3.0, TEXT_SECONDARY.linear_multiply(0.6));
                }
            });
    });
}
