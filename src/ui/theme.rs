// LandSearch - ui/theme.rs
//
// Colour scheme, notice colours, and layout constants.
// No dependencies on app state or business logic.

use crate::app::notify::NoticeKind;
use egui::Color32;

/// Background colour of a notification toast.
pub fn notice_bg_colour(kind: NoticeKind) -> Color32 {
    match kind {
        NoticeKind::Success => Color32::from_rgb(22, 163, 74), // Green 600
        NoticeKind::Error => Color32::from_rgb(220, 38, 38),   // Red 600
    }
}

/// Text colour on a notification toast.
pub const NOTICE_TEXT: Color32 = Color32::WHITE;

/// Accent for the active page button and the statistics figures.
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235); // Blue 600

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 300.0;
pub const NOTICE_WIDTH: f32 = 320.0;
pub const VIEWER_WIDTH: f32 = 520.0;

/// Apply light/dark visuals and scale every text style from `font_size`.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => font_size * 1.4,
                egui::TextStyle::Small => font_size * 0.75,
                _ => font_size,
            };
        }
    });
}
