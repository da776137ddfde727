//! # HTTP Transport Module
//!
//! Minimal request/response model used by the Spotify gateway and the
//! [`HttpTransport`] seam it is issued through. The gateway never talks to
//! `reqwest` directly; it hands an [`HttpRequest`] to a transport and gets a
//! status code plus body text back. Tests substitute their own transport.
//!
//! Timeouts and cancellation are the transport's business.

mod client;

pub use client::ReqwestTransport;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Value of the `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// App identity, used for the token endpoint.
    Basic { username: String, password: String },
    /// User access token, used for resource calls.
    Bearer(String),
}

impl Authorization {
    pub fn header_value(&self) -> String {
        match self {
            Authorization::Basic { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
            }
            Authorization::Bearer(token) => format!("Bearer {token}"),
        }
    }

    pub fn is_bearer(&self) -> bool {
        matches!(self, Authorization::Bearer(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub authorization: Authorization,
    /// Sent as `application/x-www-form-urlencoded` when present.
    pub form: Option<Vec<(String, String)>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network-level failure: no HTTP status was obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
