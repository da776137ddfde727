//! # Spotify Integration Module
//!
//! Thin request wrappers around the Spotify accounts service and Web API. Every
//! wrapper is an instance of one request shape, run by a single executor:
//!
//! 1. **Build**: base URL + endpoint path, `Authorization` header (Basic for the
//!    token endpoint, Bearer for everything else), optional form body.
//! 2. **Send**: through the injected [`HttpTransport`].
//! 3. **Classify**: the status code is mapped onto a small, fixed outcome set.
//!
//! ```text
//! transport error             -> ApiError::Transport
//! status in empty-success set -> Outcome::Empty   (204, and 202 for controls)
//! 401 on a Bearer call        -> ApiError::TokenExpired
//! 404 on a control call       -> ApiError::NoActiveDevice
//! any other non-2xx           -> ApiError::Failed("failed to ...")
//! otherwise                   -> Outcome::Body(text)
//! ```
//!
//! ## Submodules
//!
//! - [`auth`] - authorization URL, code exchange and token refresh
//! - [`player`] - now-playing, playback state and transport controls
//!
//! ## Retry Policy
//!
//! There is none. `TokenExpired` is a signal for the caller to refresh and try
//! again; see [`crate::management::Session`] for the caller used by the CLI.

pub mod auth;
pub mod player;

pub use auth::{SCOPES, generate_auth_url};

use serde::de::DeserializeOwned;

use crate::{
    config,
    http::{Authorization, HttpRequest, HttpTransport, Method},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The access token was rejected; refresh it and retry once.
    #[error("access token expired")]
    TokenExpired,
    /// A playback command found no device to act on.
    #[error("no active device")]
    NoActiveDevice,
    #[error("network failure: {0}")]
    Transport(String),
    #[error("{0}")]
    Failed(&'static str),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Hosts the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_url: config::DEFAULT_AUTH_URL.to_string(),
            token_url: config::DEFAULT_TOKEN_URL.to_string(),
            api_url: config::DEFAULT_API_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Endpoints with environment overrides applied.
    pub fn from_env() -> Self {
        Self {
            auth_url: config::spotify_apiauth_url(),
            token_url: config::spotify_apitoken_url(),
            api_url: config::spotify_apiurl(),
        }
    }
}

/// What a 404 means for a given call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotFound {
    Failure,
    NoActiveDevice,
}

pub(crate) struct Call {
    pub operation: &'static str,
    pub method: Method,
    pub url: String,
    pub authorization: Authorization,
    pub form: Option<Vec<(String, String)>>,
    pub empty_success: &'static [u16],
    pub not_found: NotFound,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Empty,
    Body(String),
}

impl Outcome {
    fn decode<T: DeserializeOwned>(self) -> Result<Option<T>, ApiError> {
        match self {
            Outcome::Empty => Ok(None),
            Outcome::Body(body) => serde_json::from_str(&body)
                .map(Some)
                .map_err(|e| ApiError::Decode(e.to_string())),
        }
    }
}

/// Spotify client parameterized over the HTTP transport.
pub struct SpotifyClient<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: HttpTransport> SpotifyClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_endpoints(transport, Endpoints::default())
    }

    pub fn with_endpoints(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{base}/{path}",
            base = self.endpoints.api_url.trim_end_matches('/'),
            path = path.trim_start_matches('/')
        )
    }

    pub(crate) async fn execute(&self, call: Call) -> Result<Outcome, ApiError> {
        let expiring = call.authorization.is_bearer();
        let request = HttpRequest {
            method: call.method,
            url: call.url,
            authorization: call.authorization,
            form: call.form,
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Transport(e.0))?;

        if call.empty_success.contains(&response.status) {
            return Ok(Outcome::Empty);
        }

        match response.status {
            401 if expiring => Err(ApiError::TokenExpired),
            404 if call.not_found == NotFound::NoActiveDevice => Err(ApiError::NoActiveDevice),
            _ if !response.is_success() => Err(ApiError::Failed(call.operation)),
            _ => Ok(Outcome::Body(response.body)),
        }
    }
}
