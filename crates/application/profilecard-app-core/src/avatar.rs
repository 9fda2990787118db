use std::collections::HashMap;
use std::sync::Arc;

use profilecard_config::AVATAR_DECODE_SIZE;
use profilecard_infra::AvatarImage;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::app_core::DomainEvent;
use crate::domain::{AvatarKey, ViewId};
use crate::ports::AvatarLoader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarTransform {
    CircleCrop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRequest {
    pub reference: String,
    pub transform: AvatarTransform,
    pub crossfade: bool,
    pub size_px: u32,
}

impl AvatarRequest {
    pub fn circle(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            transform: AvatarTransform::CircleCrop,
            crossfade: true,
            size_px: AVATAR_DECODE_SIZE,
        }
    }
}

#[derive(Debug, Clone)]
pub enum AvatarState {
    Loading,
    Ready {
        image: Arc<AvatarImage>,
        crossfade: bool,
    },
    Failed(String),
}

impl AvatarState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AvatarState::Loading)
    }
}

/// Spawns avatar fetches and ties each one to the view that asked for it.
/// Cancelling a view stops all of its in-flight fetches.
pub struct AvatarTasks<A> {
    loader: Arc<A>,
    tx: mpsc::Sender<DomainEvent>,
    views: HashMap<ViewId, CancellationToken>,
}

impl<A: AvatarLoader> AvatarTasks<A> {
    pub fn new(loader: Arc<A>, tx: mpsc::Sender<DomainEvent>) -> Self {
        Self {
            loader,
            tx,
            views: HashMap::new(),
        }
    }

    pub fn request(&mut self, key: AvatarKey, request: AvatarRequest) -> anyhow::Result<()> {
        let rt = crate::async_runtime::runtime()?;
        let token = self.views.entry(key.view_id).or_default().child_token();
        let loader = self.loader.clone();
        let tx = self.tx.clone();

        debug!(
            "Requesting avatar for profile {} ({})",
            key.profile_id, request.reference
        );

        rt.spawn(async move {
            let ev = tokio::select! {
                _ = token.cancelled() => {
                    debug!("Avatar fetch for profile {} cancelled", key.profile_id);
                    return;
                }
                res = loader.load(&request) => match res {
                    Ok(image) => DomainEvent::AvatarLoaded {
                        key,
                        image: Arc::new(image),
                        crossfade: request.crossfade,
                    },
                    Err(e) => {
                        warn!("Avatar {} failed to load: {:#}", request.reference, e);
                        DomainEvent::AvatarFailed {
                            key,
                            message: format!("{e:#}"),
                        }
                    }
                },
            };
            let _ = tx.send(ev).await;
        });

        Ok(())
    }

    pub fn cancel_view(&mut self, view_id: ViewId) {
        if let Some(token) = self.views.remove(&view_id) {
            token.cancel();
        }
    }
}

impl<A> Drop for AvatarTasks<A> {
    fn drop(&mut self) {
        for (_, token) in self.views.drain() {
            token.cancel();
        }
    }
}
