use async_trait::async_trait;
use profilecard_infra::AvatarImage;

use crate::avatar::AvatarRequest;

/// Image-loading collaborator. Implementations fetch, decode and transform one avatar.
#[async_trait]
pub trait AvatarLoader: Send + Sync + 'static {
    async fn load(&self, request: &AvatarRequest) -> anyhow::Result<AvatarImage>;
}
