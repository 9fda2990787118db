use std::sync::Arc;

use profilecard_infra::AvatarImage;

use crate::domain::{AvatarKey, NavFrame};

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Navigation
    RoutePushed(NavFrame),
    RoutePopped,

    // Avatars
    AvatarRequested(AvatarKey),
    AvatarLoaded {
        key: AvatarKey,
        image: Arc<AvatarImage>,
        crossfade: bool,
    },
    AvatarFailed {
        key: AvatarKey,
        message: String,
    },

    // User-visible errors
    UserError(String),
    ErrorDismissed,
}

impl DomainEvent {
    /// The avatar slot an async result belongs to, if any.
    pub fn avatar_key(&self) -> Option<AvatarKey> {
        match self {
            DomainEvent::AvatarLoaded { key, .. } | DomainEvent::AvatarFailed { key, .. } => {
                Some(*key)
            }
            _ => None,
        }
    }
}
