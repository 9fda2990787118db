//! Central configuration constants for layout, avatar loading and runtime limits.

/// Avatar edge length on list cards, in points.
pub const LIST_AVATAR_SIZE: f32 = 72.0;

/// Avatar edge length on the detail screen, in points.
pub const DETAIL_AVATAR_SIZE: f32 = 240.0;

/// Width of the online/offline status ring around an avatar.
pub const STATUS_RING_WIDTH: f32 = 2.0;

/// Width of the rainbow border drawn inside the status ring.
pub const GRADIENT_BORDER_WIDTH: f32 = 4.0;

/// Outer padding around the avatar card.
pub const AVATAR_PADDING: f32 = 12.0;

/// Pixel size avatars are decoded and cropped to. Covers the largest on-screen size.
pub const AVATAR_DECODE_SIZE: u32 = 256;

/// Duration of the fade-in once an avatar finishes loading, in seconds.
pub const AVATAR_CROSSFADE_SECS: f32 = 0.3;

/// Capacity of the channel carrying async results back to the UI thread.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Upper bound for a single avatar HTTP request, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 20;

/// User agent sent with avatar requests.
pub const HTTP_USER_AGENT: &str = concat!("profilecard/", env!("CARGO_PKG_VERSION"));

/// Initial window size.
pub const WINDOW_SIZE: [f32; 2] = [420.0, 760.0];

/// Minimum window size.
pub const WINDOW_MIN_SIZE: [f32; 2] = [320.0, 480.0];

