use crate::theme::*;
use crate::utils::icon_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use profilecard_app_core::{AppBarIcon, AppBarVm};

pub struct AppBarResponse {
    pub icon_clicked: bool,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &AppBarVm) -> AppBarResponse {
    let mut icon_clicked = false;
    let (glyph, hover) = match vm.icon {
        AppBarIcon::Home => ("🏠", "Home"),
        AppBarIcon::Back => ("⬅", "Back"),
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        align_items: Some(taffy::AlignItems::Center),
        padding: length(4.0),
        gap: length(16.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new().with_background_color(COL_PURPLE_500),
        |tui| {
            icon_clicked |= tui.ui(|ui| icon_button(ui, glyph, hover)).clicked();
            tui.label(
                egui::RichText::new(vm.title)
                    .size(20.0)
                    .strong()
                    .color(COL_ON_PRIMARY),
            );
        },
    );

    AppBarResponse { icon_clicked }
}
