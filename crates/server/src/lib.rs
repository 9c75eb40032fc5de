//! HTTP front end of the storage ticket kiosk.

pub mod api;
pub mod metrics;
pub mod state;

pub use api::create_router;
pub use state::AppState;
