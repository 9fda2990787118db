use crate::theme::*;
use eframe::egui::{self, Color32};
use profilecard_app_core::StatusRing;

pub fn status_color(ring: StatusRing) -> Color32 {
    match ring {
        StatusRing::Online => COL_LIGHT_GREEN_200,
        StatusRing::Offline => COL_LIGHT_RED_200,
    }
}

pub fn content_alpha(emphasized: bool) -> f32 {
    if emphasized {
        ALPHA_HIGH
    } else {
        ALPHA_MEDIUM
    }
}

pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

/// Samples a gradient of evenly spaced `stops` at `t` in `0..=1`.
pub fn sample_gradient(stops: &[Color32], t: f32) -> Color32 {
    match stops {
        [] => Color32::TRANSPARENT,
        [only] => *only,
        _ => {
            let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
            let ix = (scaled.floor() as usize).min(stops.len() - 2);
            lerp_color(stops[ix], stops[ix + 1], scaled - ix as f32)
        }
    }
}

pub fn icon_button(ui: &mut egui::Ui, glyph: &str, hover: &str) -> egui::Response {
    let text = egui::RichText::new(glyph).size(20.0).color(COL_ON_PRIMARY);
    ui.add(
        egui::Button::new(text)
            .frame(false)
            .min_size(egui::vec2(40.0, 40.0)),
    )
    .on_hover_text(hover)
}
