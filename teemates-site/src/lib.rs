//! TeeMates Site Service
//!
//! Serves the built landing-page assets and the contact/support form
//! endpoint. Everything data-bearing goes through the `Backend` seam
//! from `teemates-core`; this crate adds the HTTP surface around it.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use state::AppState;
