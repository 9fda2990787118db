pub mod app;
pub mod app_core;
mod async_runtime;
pub mod avatar;
pub mod domain;
pub mod kernel;
pub mod navigation;
pub mod ports;
pub mod viewmodel;

pub use app::{HttpAvatarLoader, ProfileCardApplication};
pub use app_core::*;
pub use avatar::{AvatarRequest, AvatarState, AvatarTasks, AvatarTransform};
pub use domain::{AppState, AvatarKey, NavFrame, ViewId};
pub use kernel::AppKernel;
pub use navigation::Router;
pub use ports::*;
pub use viewmodel::*;

pub use profilecard_core::{ProfileId, ProfileRecord, ProfileStore, Route};
pub use profilecard_infra::AvatarImage;
