pub mod profile;
pub mod route;
pub mod store;

pub use profile::{ProfileId, ProfileRecord, ACTIVE_NOW_LABEL, OFFLINE_LABEL};
pub use route::{Route, RouteError};
pub use store::{ProfileStore, StoreError};
