use crate::theme::*;
use crate::utils::content_alpha;
use eframe::egui;
use egui_taffy::taffy::prelude::length;
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    name: &str,
    status_label: &str,
    emphasized: bool,
    align: taffy::AlignItems,
) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        align_items: Some(align),
        padding: length(8.0),
        gap: length(2.0),
        ..Default::default()
    })
    .add(|tui| {
        tui.label(
            egui::RichText::new(name)
                .size(24.0)
                .color(COL_TEXT.gamma_multiply(content_alpha(emphasized))),
        );
        tui.label(
            egui::RichText::new(status_label)
                .size(14.0)
                .color(COL_TEXT.gamma_multiply(ALPHA_MEDIUM)),
        );
    });
}
