use std::sync::Arc;

use profilecard_core::{ProfileId, ProfileRecord, ProfileStore, Route};
use profilecard_infra::AvatarImage;

use crate::avatar::AvatarState;
use crate::domain::{AppState, AvatarKey, ViewId};

pub const USERS_LIST_TITLE: &str = "UserLists";
pub const USER_DETAILS_TITLE: &str = "User profile details";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppBarIcon {
    Home,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppBarVm {
    pub title: &'static str,
    pub icon: AppBarIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRing {
    Online,
    Offline,
}

#[derive(Debug, Clone)]
pub enum AvatarViewState {
    Loading,
    Ready {
        image: Arc<AvatarImage>,
        crossfade: bool,
    },
    Failed,
}

#[derive(Debug, Clone)]
pub struct AvatarVm {
    pub key: AvatarKey,
    pub reference: String,
    pub ring: StatusRing,
    pub state: AvatarViewState,
    pub fallback_initial: String,
}

#[derive(Debug, Clone)]
pub struct ProfileCardVm {
    pub id: ProfileId,
    pub name: String,
    pub status_label: &'static str,
    /// Online profiles render at full emphasis, offline ones dimmed.
    pub emphasized: bool,
    pub avatar: AvatarVm,
}

impl ProfileCardVm {
    fn new(state: &AppState, view_id: ViewId, p: &ProfileRecord) -> Self {
        let key = AvatarKey {
            view_id,
            profile_id: p.id,
        };
        let avatar_state = match state.avatar(&key) {
            Some(AvatarState::Ready { image, crossfade }) => AvatarViewState::Ready {
                image: image.clone(),
                crossfade: *crossfade,
            },
            Some(AvatarState::Failed(_)) => AvatarViewState::Failed,
            Some(AvatarState::Loading) | None => AvatarViewState::Loading,
        };

        Self {
            id: p.id,
            name: p.name.clone(),
            status_label: p.status_label(),
            emphasized: p.online_status,
            avatar: AvatarVm {
                key,
                reference: p.avatar_reference.clone(),
                ring: if p.online_status {
                    StatusRing::Online
                } else {
                    StatusRing::Offline
                },
                state: avatar_state,
                fallback_initial: p.initial(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct UsersListVm {
    pub view_id: ViewId,
    pub app_bar: AppBarVm,
    pub cards: Vec<ProfileCardVm>,
}

pub fn users_list_vm(state: &AppState, profiles: &ProfileStore, view_id: ViewId) -> UsersListVm {
    UsersListVm {
        view_id,
        app_bar: AppBarVm {
            title: USERS_LIST_TITLE,
            icon: AppBarIcon::Home,
        },
        cards: profiles
            .all()
            .iter()
            .map(|p| ProfileCardVm::new(state, view_id, p))
            .collect(),
    }
}

#[derive(Debug, Clone)]
pub enum DetailBody {
    Profile(ProfileCardVm),
    NotFound { id: ProfileId, message: String },
}

#[derive(Debug, Clone)]
pub struct UserDetailsVm {
    pub view_id: ViewId,
    pub app_bar: AppBarVm,
    pub body: DetailBody,
}

pub fn user_details_vm(
    state: &AppState,
    profiles: &ProfileStore,
    view_id: ViewId,
    id: ProfileId,
) -> UserDetailsVm {
    let body = match profiles.by_id(id) {
        Ok(p) => DetailBody::Profile(ProfileCardVm::new(state, view_id, p)),
        Err(e) => {
            tracing::debug!("Details requested for missing profile: {e}");
            DetailBody::NotFound {
                id,
                message: format!("No profile with id {id}."),
            }
        }
    };

    UserDetailsVm {
        view_id,
        app_bar: AppBarVm {
            title: USER_DETAILS_TITLE,
            icon: AppBarIcon::Back,
        },
        body,
    }
}

#[derive(Debug, Clone)]
pub enum ScreenVm {
    UsersList(UsersListVm),
    UserDetails(UserDetailsVm),
}

impl ScreenVm {
    pub fn app_bar(&self) -> &AppBarVm {
        match self {
            ScreenVm::UsersList(vm) => &vm.app_bar,
            ScreenVm::UserDetails(vm) => &vm.app_bar,
        }
    }
}

/// View model for whatever frame is on top of the back stack.
pub fn screen_vm(state: &AppState, profiles: &ProfileStore) -> ScreenVm {
    let frame = state.router.current_frame();
    match frame.route {
        Route::UsersList => ScreenVm::UsersList(users_list_vm(state, profiles, frame.view_id)),
        Route::UserDetails(id) => {
            ScreenVm::UserDetails(user_details_vm(state, profiles, frame.view_id, id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ProfileStore {
        ProfileStore::new(vec![
            ProfileRecord::new(1, "Alice", "alice.png", true),
            ProfileRecord::new(2, "Bob", "bob.png", false),
        ])
        .unwrap()
    }

    #[test]
    fn list_cards_follow_store_order_and_status() {
        let state = AppState::default();
        let ScreenVm::UsersList(vm) = screen_vm(&state, &store()) else {
            panic!("root screen should be the users list");
        };

        assert_eq!(vm.app_bar.title, "UserLists");
        let rows: Vec<_> = vm
            .cards
            .iter()
            .map(|c| (c.name.as_str(), c.status_label, c.avatar.ring))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Alice", "Active now", StatusRing::Online),
                ("Bob", "Offline", StatusRing::Offline),
            ]
        );
        assert!(matches!(vm.cards[0].avatar.state, AvatarViewState::Loading));
    }

    #[test]
    fn details_for_missing_profile_render_not_found() {
        let state = AppState::default();
        let vm = user_details_vm(&state, &store(), uuid::Uuid::new_v4(), 9);

        assert_eq!(vm.app_bar.icon, AppBarIcon::Back);
        match vm.body {
            DetailBody::NotFound { id, message } => {
                assert_eq!(id, 9);
                assert_eq!(message, "No profile with id 9.");
            }
            other => panic!("expected not-found body, got {other:?}"),
        }
    }
}
