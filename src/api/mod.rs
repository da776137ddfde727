//! # API Module
//!
//! HTTP endpoints served by the local callback server while `sponow auth`
//! is running.
//!
//! ## Endpoints
//!
//! - [`callback`] - target of the OAuth redirect. Records the authorization
//!   code (or the provider's error) in shared state for the CLI to pick up.
//! - [`health`] - liveness probe returning status and version.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use sponow::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
