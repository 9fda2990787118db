use std::collections::HashMap;

use profilecard_core::{ProfileId, Route};

use crate::avatar::AvatarState;
use crate::navigation::Router;

/// Identity of one mounted view instance. A new id is minted every time a
/// route is pushed, so two visits to the same route never share state.
pub type ViewId = uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavFrame {
    pub route: Route,
    pub view_id: ViewId,
}

impl NavFrame {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            view_id: uuid::Uuid::new_v4(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AvatarKey {
    pub view_id: ViewId,
    pub profile_id: ProfileId,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub router: Router,
    pub avatars: HashMap<AvatarKey, AvatarState>,
    pub last_error: Option<String>,
}

impl AppState {
    pub fn avatar(&self, key: &AvatarKey) -> Option<&AvatarState> {
        self.avatars.get(key)
    }
}
