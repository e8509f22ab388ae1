//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(5, 5, 7);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(20, 20, 24);
pub const BG_SURFACE: Color32 = Color32::from_rgb(38, 38, 44);
pub const BG_USER_BUBBLE: Color32 = Color32::from_rgb(58, 58, 64);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(245, 245, 247);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(192, 192, 198);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 128);
pub const ACCENT: Color32 = Color32::from_rgb(192, 192, 198);
pub const BORDER: Color32 = Color32::from_rgb(48, 48, 54);

pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(16);
pub const CHIP_ROUNDING: CornerRadius = CornerRadius::same(255);
pub const PANEL_PADDING: Vec2 = Vec2::new(24.0, 16.0);
pub const BUBBLE_MAX_WIDTH: f32 = 640.0;

/// Apply the dark silver theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.weak_bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_USER_BUBBLE;
    style.visuals.widgets.hovered.weak_bg_fill = BG_USER_BUBBLE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(10.0, 8.0);

    ctx.set_style(style);
}
