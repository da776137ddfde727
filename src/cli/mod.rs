//! # CLI Module
//!
//! Command-line layer for sponow. Each command builds a [`Session`] over the
//! on-disk store and the reqwest transport, runs one operation and prints the
//! outcome with the crate's output macros.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`login`] - stores the application's client id and secret
//! - [`auth`] - authorization-code flow through the browser and local callback server
//! - [`logout`] - forgets credentials and token
//!
//! ### Playback
//!
//! - [`now_playing`] - currently playing track or episode
//! - [`status`] - device, shuffle/repeat and progress
//! - [`control`] - play, pause, next, previous
//!
//! ## Error Presentation
//!
//! Errors end the process with a message that says what to do next:
//! missing credentials point at `sponow login`, a missing or unrefreshable
//! token points at `sponow auth`, and a missing device asks the user to start
//! Spotify somewhere.
//!
//! ## Usage Patterns
//!
//! ```bash
//! sponow login --client-id <ID> --client-secret <SECRET>
//! sponow auth
//! sponow now-playing
//! sponow next
//! ```

mod auth;
mod player;

pub use auth::auth;
pub use auth::login;
pub use auth::logout;
pub use auth::wait_for_callback;
pub use player::Control;
pub use player::control;
pub use player::now_playing;
pub use player::status;

use crate::{
    error,
    http::ReqwestTransport,
    management::{CredentialStore, Session, SessionError},
    spotify::{ApiError, Endpoints, SpotifyClient},
    storage::FileStore,
};

pub(crate) fn session() -> Session<FileStore, ReqwestTransport> {
    Session::new(
        CredentialStore::new(FileStore::default_location()),
        SpotifyClient::with_endpoints(ReqwestTransport::new(), Endpoints::from_env()),
    )
}

pub(crate) fn report(err: SessionError) -> ! {
    match err {
        SessionError::MissingCredentials => {
            error!("No credentials stored. Run sponow login first.")
        }
        SessionError::NotAuthorized | SessionError::Api(ApiError::TokenExpired) => {
            error!("Not authorized with Spotify. Run sponow auth.")
        }
        SessionError::Api(ApiError::NoActiveDevice) => {
            error!("No active device. Start Spotify on a device and try again.")
        }
        SessionError::Api(e) => error!("Spotify request failed: {}", e),
        SessionError::Storage(e) => error!("Failed to access local storage: {}", e),
    }
}
