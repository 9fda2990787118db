use crate::components::app_bar;
use crate::screens::{user_details, users_list};
use crate::textures::AvatarTextures;
use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use profilecard_app_core::{AppCommand, ProfileCardApplication, ScreenVm};

pub struct ProfileCardUiApp {
    core: ProfileCardApplication,
    textures: AvatarTextures,
}

impl ProfileCardUiApp {
    pub fn new(mut core: ProfileCardApplication) -> Self {
        core.dispatch(AppCommand::MountCurrentView);
        Self {
            core,
            textures: AvatarTextures::default(),
        }
    }
}

impl eframe::App for ProfileCardUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.core.tick() {
            ctx.request_repaint();
        }
        self.core
            .store
            .read(|s| self.textures.retain(|k| s.avatars.contains_key(k)));

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::MIN.saturating_add(2);
        });
        ctx.style_mut(|style| {
            // Measure text without wrapping so egui_taffy layout is width-independent.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let screen = self.core.screen();
        let last_error = self.core.state().last_error;
        let mut commands = Vec::new();

        // Escape and the mouse "back" button behave like the system back action.
        if ctx.input(|i| {
            i.key_pressed(egui::Key::Escape) || i.pointer.button_pressed(egui::PointerButton::Extra1)
        }) {
            commands.push(AppCommand::NavigateBack);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(COL_BACKGROUND))
            .show(ctx, |ui| {
                tui(ui, ui.id().with("root"))
                    .reserve_available_space()
                    .style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        size: percent(1.),
                        min_size: taffy::Size {
                            width: percent(1.),
                            height: length(0.0),
                        },
                        ..Default::default()
                    })
                    .show(|tui| {
                        tui.style(taffy::Style {
                            size: taffy::Size {
                                width: percent(1.),
                                height: length(APP_BAR_HEIGHT),
                            },
                            flex_shrink: 0.0,
                            ..Default::default()
                        })
                        .add(|tui| {
                            let resp = app_bar::draw(tui, screen.app_bar());
                            // The home icon on the list is decorative.
                            if resp.icon_clicked && matches!(screen, ScreenVm::UserDetails(_)) {
                                commands.push(AppCommand::NavigateBack);
                            }
                        });

                        if let Some(message) = &last_error {
                            tui.style(taffy::Style {
                                flex_direction: taffy::FlexDirection::Row,
                                justify_content: Some(taffy::JustifyContent::SpaceBetween),
                                align_items: Some(taffy::AlignItems::Center),
                                padding: length(8.0),
                                flex_shrink: 0.0,
                                size: taffy::Size {
                                    width: percent(1.),
                                    height: length(40.0),
                                },
                                ..Default::default()
                            })
                            .bg_add(
                                TuiBackground::new()
                                    .with_background_color(COL_ERROR.linear_multiply(0.12))
                                    .with_border_color(COL_ERROR)
                                    .with_border_width(1.0),
                                |tui| {
                                    tui.label(egui::RichText::new(message).color(COL_ERROR));
                                    if tui.ui(|ui| ui.button("DISMISS")).clicked() {
                                        commands.push(AppCommand::DismissError);
                                    }
                                },
                            );
                        }

                        match &screen {
                            ScreenVm::UsersList(vm) => {
                                if let Some(id) = users_list::draw(tui, vm, &mut self.textures) {
                                    commands.push(AppCommand::OpenDetails(id));
                                }
                            }
                            ScreenVm::UserDetails(vm) => {
                                user_details::draw(tui, vm, &mut self.textures)
                            }
                        }
                    });
            });

        for cmd in commands {
            tracing::debug!("Dispatching {:?}", cmd);
            self.core.dispatch(cmd);
        }

        if self.core.has_pending_avatars() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
