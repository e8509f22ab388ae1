//! Rendering decisions that do not need an egui context.

use std::f64::consts::PI;

use aimpact_types::message::Origin;
use chrono::{DateTime, Local, Utc};
use egui::{Align, Color32, Pos2};

use crate::theme::*;

pub const INPUT_HINT: &str = "Ask me anything...";

/// Seconds between neighbouring typing dots
const TYPING_STAGGER: f64 = 0.1;
/// Peak lift of a typing dot, in points
const TYPING_LIFT: f64 = 4.0;

/// The send control is live whenever the draft has visible text.
/// An answer being outstanding does not disable it.
pub fn send_enabled(draft: &str) -> bool {
    !draft.trim().is_empty()
}

/// How a transcript bubble is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleStyle {
    pub align: Align,
    pub fill: Color32,
    pub text: Color32,
    pub stroke: Option<Color32>,
    pub speaker: &'static str,
}

pub fn bubble_style(origin: Origin) -> BubbleStyle {
    match origin {
        Origin::User => BubbleStyle {
            align: Align::Max,
            fill: BG_USER_BUBBLE,
            text: TEXT_PRIMARY,
            stroke: None,
            speaker: "You",
        },
        Origin::Agent => BubbleStyle {
            align: Align::Min,
            fill: BG_SECONDARY,
            text: TEXT_SECONDARY,
            stroke: Some(BORDER),
            speaker: "Agent",
        },
    }
}

/// Bubble caption for a message sent at `at`, in the viewer's time zone
pub fn timestamp_label(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

/// Vertical lift of typing dot `index` at `time` seconds (one bounce per second).
pub fn typing_dot_lift(time: f64, index: usize) -> f32 {
    let phase = (time - index as f64 * TYPING_STAGGER) * std::f64::consts::TAU;
    (phase.sin().max(0.0) * TYPING_LIFT) as f32
}

/// Size of the hero artwork, in points
pub const ART_SIZE: egui::Vec2 = egui::vec2(600.0, 300.0);
/// Points plotted per artwork frame
pub const ART_POINTS: usize = 8000;
/// Phase advance per second (PI/240 per frame at 60 fps)
const ART_RATE: f64 = PI / 4.0;

/// Artwork phase at `time` seconds since start
pub fn art_phase(time: f64) -> f64 {
    time * ART_RATE
}

/// One frame of the hero artwork at phase `t`.
///
/// Yields each point's offset from the canvas center together with its
/// alpha in `60..=140`. Points that come out non-finite are skipped.
pub fn art_points(t: f64) -> impl Iterator<Item = (Pos2, u8)> {
    (0..ART_POINTS).filter_map(move |i| {
        let x = i as f64;
        let y = x / 235.0;
        let k = (4.0 + (y * 2.0 - t).sin() * 3.0) * (x / 29.0).cos();
        let e = y / 8.0 - 13.0;
        let d = k.hypot(e);
        let q = 3.0 * (2.0 * k).sin()
            + 0.3 / k
            + (y / 25.0).sin() * k * (9.0 + 4.0 * (e * 9.0 - d * 3.0 + t * 2.0).sin());
        let c = d - t;

        let px = (q + 30.0 * c.cos()) * 1.2;
        let py = (q * c.sin() + d * 39.0 - 220.0 - ART_SIZE.y as f64 / 1.5) * 1.2;
        if !px.is_finite() || !py.is_finite() {
            return None;
        }

        let alpha = 100.0 + (c + t).sin() * 40.0;
        Some((Pos2::new(px as f32, py as f32), alpha.round() as u8))
    })
}
