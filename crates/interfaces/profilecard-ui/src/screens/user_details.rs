use crate::components::{profile_content, profile_picture};
use crate::textures::AvatarTextures;
use crate::theme::*;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use profilecard_app_core::viewmodel::{DetailBody, UserDetailsVm};
use profilecard_config::DETAIL_AVATAR_SIZE;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &UserDetailsVm, textures: &mut AvatarTextures) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        align_items: Some(taffy::AlignItems::Center),
        justify_content: Some(taffy::JustifyContent::Start),
        flex_grow: 1.0,
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        ..Default::default()
    })
    .add(|tui| match &vm.body {
        DetailBody::Profile(card) => {
            tui.ui(|ui| profile_picture::draw(ui, &card.avatar, DETAIL_AVATAR_SIZE, textures));
            profile_content::draw(
                &mut *tui,
                &card.name,
                card.status_label,
                card.emphasized,
                taffy::AlignItems::Center,
            );
        }
        DetailBody::NotFound { message, .. } => {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                align_items: Some(taffy::AlignItems::Center),
                padding: length(24.0),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("Profile not found")
                        .size(24.0)
                        .strong()
                        .color(COL_ERROR),
                );
                tui.label(
                    egui::RichText::new(message)
                        .size(14.0)
                        .color(COL_TEXT.gamma_multiply(ALPHA_MEDIUM)),
                );
            });
        }
    });
}
