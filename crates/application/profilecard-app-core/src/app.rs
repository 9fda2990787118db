use async_trait::async_trait;
use profilecard_core::ProfileStore;
use profilecard_infra::{AvatarFetcher, AvatarImage};

use crate::app_core::AppStore;
use crate::avatar::{AvatarRequest, AvatarTransform};
use crate::kernel::AppKernel;
use crate::ports::AvatarLoader;

/// Loads avatars over HTTP or from disk through the shared fetcher.
pub struct HttpAvatarLoader {
    fetcher: AvatarFetcher,
}

impl Default for HttpAvatarLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpAvatarLoader {
    pub fn new() -> Self {
        let client = profilecard_infra::default_http_client().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {e}");
            reqwest::Client::new()
        });
        Self {
            fetcher: AvatarFetcher::new(client),
        }
    }
}

#[async_trait]
impl AvatarLoader for HttpAvatarLoader {
    async fn load(&self, request: &AvatarRequest) -> anyhow::Result<AvatarImage> {
        match request.transform {
            AvatarTransform::CircleCrop => Ok(self
                .fetcher
                .fetch_avatar(&request.reference, request.size_px)
                .await?),
        }
    }
}

pub type ProfileCardApplication = AppKernel<HttpAvatarLoader>;

impl AppKernel<HttpAvatarLoader> {
    /// Production wiring: the given store plus network-backed avatars.
    pub fn with_store(profiles: ProfileStore) -> Self {
        AppKernel::new(AppStore::default(), profiles, HttpAvatarLoader::new())
    }
}
