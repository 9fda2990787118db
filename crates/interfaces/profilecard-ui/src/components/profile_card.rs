use crate::components::{profile_content, profile_picture};
use crate::textures::AvatarTextures;
use crate::theme::*;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use profilecard_app_core::ProfileCardVm;
use profilecard_config::LIST_AVATAR_SIZE;

/// One row of the users list. Returns `true` when the card was clicked.
pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    vm: &ProfileCardVm,
    textures: &mut AvatarTextures,
) -> bool {
    let card_height = profile_picture::outer_size(LIST_AVATAR_SIZE);

    let response = tui
        .id(egui_taffy::tid(("profile-card", vm.id)))
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            justify_content: Some(taffy::JustifyContent::Start),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            margin: taffy::Rect {
                left: length(16.0),
                right: length(16.0),
                top: length(8.0),
                bottom: length(4.0),
            },
            ..Default::default()
        })
        .bg_clickable(
            TuiBackground::new()
                .with_background_color(COL_SURFACE)
                .with_border_color(COL_LIGHT_GRAY)
                .with_border_width(1.0)
                .with_corner_radius(card_height * CARD_CORNER_FRACTION),
            |tui| {
                tui.ui(|ui| profile_picture::draw(ui, &vm.avatar, LIST_AVATAR_SIZE, textures));
                profile_content::draw(
                    &mut *tui,
                    &vm.name,
                    vm.status_label,
                    vm.emphasized,
                    taffy::AlignItems::Start,
                );
            },
        );

    response.clicked()
}
