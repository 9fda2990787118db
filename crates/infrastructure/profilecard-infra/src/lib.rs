pub mod error;
pub mod imaging;
pub mod net;

// Re-exports for convenience
pub use error::AvatarError;
pub use imaging::{circle_crop, decode_circle_avatar, AvatarImage};
pub use net::{default_http_client, AvatarFetcher, AvatarSource};
