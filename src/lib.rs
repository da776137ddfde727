//! Spotify Playback Client Library
//!
//! This library provides a small client for the Spotify Web API: OAuth2
//! authorization-code login with a client id and secret, persisted tokens with
//! expiry tracking, "what is playing" lookups and basic transport controls.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `http` - Injected HTTP transport and its reqwest implementation
//! - `management` - Credential/token store and the token lifecycle session
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify accounts service and Web API request wrappers
//! - `storage` - Injected key-value storage backends
//! - `types` - Data structures and type definitions
//! - `utils` - Formatting helpers
//!
//! # Example
//!
//! ```
//! use sponow::{http::ReqwestTransport, management::{CredentialStore, Session}};
//! use sponow::{spotify::SpotifyClient, storage::FileStore};
//!
//! #[tokio::main]
//! async fn main() -> sponow::Res<()> {
//!     let session = Session::new(
//!         CredentialStore::new(FileStore::default_location()),
//!         SpotifyClient::new(ReqwestTransport::new()),
//!     );
//!     if let Some(playing) = session.currently_playing().await? {
//!         println!("{:?}", playing.item);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod http;
pub mod management;
pub mod server;
pub mod spotify;
pub mod storage;
pub mod types;
pub mod utils;

/// Boxed error alias for binary-level plumbing where the concrete error
/// type does not matter.
///
/// # Example
///
/// ```
/// use sponow::Res;
///
/// async fn current_title() -> Res<String> {
///     Ok("title".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Opening {}", url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a confirmation line prefixed with a green checkmark.
///
/// ```
/// success!("Credentials saved");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with status 1.
///
/// Evaluates to `!`, so it can stand in for a value in a `match` arm.
/// Only the CLI layer uses it; library code returns errors instead.
///
/// ```
/// let token = match session.access_token().await {
///     Ok(token) => token,
///     Err(e) => error!("Not authorized: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line to stderr without stopping.
///
/// ```
/// warning!("Failed to open browser: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
