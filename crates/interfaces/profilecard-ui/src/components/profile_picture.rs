use crate::textures::AvatarTextures;
use crate::theme::*;
use crate::utils::{sample_gradient, status_color};
use eframe::egui::{self, Color32, Stroke};
use profilecard_app_core::{AvatarViewState, AvatarVm};
use profilecard_config::{
    AVATAR_CROSSFADE_SECS, AVATAR_PADDING, GRADIENT_BORDER_WIDTH, STATUS_RING_WIDTH,
};

const RING_SEGMENTS: usize = 96;

/// Outer edge length of a picture drawn at `size`.
pub fn outer_size(size: f32) -> f32 {
    size + 2.0 * (STATUS_RING_WIDTH + AVATAR_PADDING)
}

/// Circular avatar: status ring, rainbow border, then the image, placeholder
/// or fallback inside.
pub fn draw(ui: &mut egui::Ui, vm: &AvatarVm, size: f32, textures: &mut AvatarTextures) {
    let outer = outer_size(size);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(outer, outer), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let center = rect.center();
    let radius = size / 2.0;
    let inner = radius - GRADIENT_BORDER_WIDTH;
    let painter = ui.painter_at(rect);

    match &vm.state {
        AvatarViewState::Loading => {
            painter.circle_filled(center, radius, COL_SURFACE);
            let spinner_rect = egui::Rect::from_center_size(center, egui::Vec2::splat(size * 0.4));
            egui::Spinner::new()
                .size(size * 0.4)
                .color(COL_PURPLE_500)
                .paint_at(ui, spinner_rect);
        }
        AvatarViewState::Ready { image, crossfade } => {
            let (texture, uploaded_at) = textures.get_or_upload(ui.ctx(), vm.key, image);
            let alpha = if *crossfade {
                let elapsed = (ui.input(|i| i.time) - uploaded_at) as f32;
                let t = (elapsed / AVATAR_CROSSFADE_SECS).clamp(0.0, 1.0);
                if t < 1.0 {
                    ui.ctx().request_repaint();
                }
                t
            } else {
                1.0
            };

            painter.circle_filled(center, radius, COL_SURFACE);
            let image_rect = egui::Rect::from_center_size(center, egui::Vec2::splat(inner * 2.0));
            egui::Image::from_texture(&texture)
                .tint(Color32::WHITE.gamma_multiply(alpha))
                .paint_at(ui, image_rect);
        }
        AvatarViewState::Failed => {
            painter.circle_filled(center, radius, COL_PURPLE_200);
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                &vm.fallback_initial,
                egui::FontId::proportional(size * 0.4),
                COL_ON_PRIMARY,
            );
        }
    }

    paint_sweep_ring(
        &painter,
        center,
        radius - GRADIENT_BORDER_WIDTH / 2.0,
        GRADIENT_BORDER_WIDTH,
        &RAINBOW,
    );
    painter.circle_stroke(
        center,
        radius + STATUS_RING_WIDTH / 2.0,
        Stroke::new(STATUS_RING_WIDTH, status_color(vm.ring)),
    );

    if matches!(vm.state, AvatarViewState::Failed) {
        let _ = response.on_hover_text(format!("Could not load {}", vm.reference));
    }
}

fn paint_sweep_ring(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    width: f32,
    stops: &[Color32],
) {
    let step = std::f32::consts::TAU / RING_SEGMENTS as f32;
    for i in 0..RING_SEGMENTS {
        let a0 = i as f32 * step;
        // Overlap segments slightly so no seams show between them.
        let a1 = a0 + step * 1.2;
        let p0 = center + radius * egui::vec2(a0.cos(), a0.sin());
        let p1 = center + radius * egui::vec2(a1.cos(), a1.sin());
        let color = sample_gradient(stops, i as f32 / RING_SEGMENTS as f32);
        painter.line_segment([p0, p1], Stroke::new(width, color));
    }
}
