//! Title block and artwork shown above the collapsed prompt bar.

use egui::{self, Color32, RichText, Sense, Vec2};

use crate::theme::*;
use crate::view::{ART_SIZE, art_phase, art_points};

const ART_BACKGROUND: Color32 = Color32::from_rgb(10, 10, 10);
const ART_DOT_RADIUS: f32 = 0.6;

pub fn hero(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        artwork(ui);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(RichText::new("AI").size(72.0).strong().color(TEXT_PRIMARY));
            ui.label(RichText::new("mpact").size(72.0).strong().color(TEXT_SECONDARY));
        });
        ui.label(RichText::new("Super Agent").size(20.0).color(TEXT_SECONDARY));
        ui.add_space(24.0);
    });
}

/// Animated point field. The caller keeps repainting while this is visible.
fn artwork(ui: &mut egui::Ui) {
    let size = Vec2::new(ART_SIZE.x.min(ui.available_width()), ART_SIZE.y);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, ART_BACKGROUND);

    let t = art_phase(ui.input(|i| i.time));
    let center = rect.center();
    for (offset, alpha) in art_points(t) {
        let pos = center + offset.to_vec2();
        if rect.contains(pos) {
            painter.circle_filled(pos, ART_DOT_RADIUS, Color32::from_white_alpha(alpha));
        }
    }
}
