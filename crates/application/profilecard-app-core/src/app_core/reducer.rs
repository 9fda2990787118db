use crate::avatar::AvatarState;
use crate::domain::AppState;

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::RoutePushed(frame) => state.router.push(frame),

        DomainEvent::RoutePopped => {
            if let Some(frame) = state.router.navigate_back() {
                state.avatars.retain(|k, _| k.view_id != frame.view_id);
            }
        }

        DomainEvent::AvatarRequested(key) => {
            if state.router.is_mounted(key.view_id) {
                state.avatars.insert(key, AvatarState::Loading);
            }
        }

        // Results only land in slots that still exist; a popped view has none.
        DomainEvent::AvatarLoaded {
            key,
            image,
            crossfade,
        } => {
            if let Some(slot) = state.avatars.get_mut(&key) {
                *slot = AvatarState::Ready { image, crossfade };
            }
        }

        DomainEvent::AvatarFailed { key, message } => {
            if let Some(slot) = state.avatars.get_mut(&key) {
                *slot = AvatarState::Failed(message);
            }
        }

        DomainEvent::UserError(msg) => state.last_error = Some(msg),
        DomainEvent::ErrorDismissed => state.last_error = None,
    }
    state
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use profilecard_core::Route;
    use profilecard_infra::AvatarImage;

    use super::*;
    use crate::domain::{AvatarKey, NavFrame};

    fn image() -> Arc<AvatarImage> {
        Arc::new(AvatarImage {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 255],
        })
    }

    #[test]
    fn popping_a_view_drops_its_avatar_slots() {
        let frame = NavFrame::new(Route::UserDetails(2));
        let key = AvatarKey {
            view_id: frame.view_id,
            profile_id: 2,
        };

        let mut state = reduce(AppState::default(), DomainEvent::RoutePushed(frame));
        state = reduce(state, DomainEvent::AvatarRequested(key));
        assert!(state.avatar(&key).is_some_and(|a| a.is_loading()));

        state = reduce(state, DomainEvent::RoutePopped);
        assert!(state.avatar(&key).is_none());

        state = reduce(
            state,
            DomainEvent::AvatarLoaded {
                key,
                image: image(),
                crossfade: true,
            },
        );
        assert!(state.avatars.is_empty(), "late result must not resurrect the slot");
    }

    #[test]
    fn requests_for_unmounted_views_are_ignored() {
        let stray = AvatarKey {
            view_id: uuid::Uuid::new_v4(),
            profile_id: 1,
        };
        let state = reduce(AppState::default(), DomainEvent::AvatarRequested(stray));
        assert!(state.avatars.is_empty());
    }

    #[test]
    fn failures_replace_loading() {
        let state = AppState::default();
        let key = AvatarKey {
            view_id: state.router.root_frame().view_id,
            profile_id: 1,
        };

        let state = reduce(state, DomainEvent::AvatarRequested(key));
        let state = reduce(
            state,
            DomainEvent::AvatarFailed {
                key,
                message: "404".into(),
            },
        );
        assert!(matches!(state.avatar(&key), Some(AvatarState::Failed(m)) if m == "404"));
    }

    #[test]
    fn back_at_root_keeps_state() {
        let state = AppState::default();
        let root = *state.router.current_frame();
        let state = reduce(state, DomainEvent::RoutePopped);
        assert_eq!(*state.router.current_frame(), root);
    }

    #[test]
    fn user_errors_can_be_dismissed() {
        let state = reduce(AppState::default(), DomainEvent::UserError("bad link".into()));
        assert_eq!(state.last_error.as_deref(), Some("bad link"));
        let state = reduce(state, DomainEvent::ErrorDismissed);
        assert!(state.last_error.is_none());
    }
}
