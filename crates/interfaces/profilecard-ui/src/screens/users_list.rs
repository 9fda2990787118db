use crate::components::profile_card;
use crate::textures::AvatarTextures;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use profilecard_app_core::viewmodel::UsersListVm;
use profilecard_core::ProfileId;

/// Scrollable column of profile cards in store order. Returns the tapped profile, if any.
pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    vm: &UsersListVm,
    textures: &mut AvatarTextures,
) -> Option<ProfileId> {
    let mut tapped = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        flex_basis: length(0.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        padding: taffy::Rect {
            left: length(0.0),
            right: length(0.0),
            top: length(0.0),
            bottom: length(8.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        for card in &vm.cards {
            if profile_card::draw(&mut *tui, card, textures) {
                tapped = Some(card.id);
            }
        }
    });

    tapped
}
