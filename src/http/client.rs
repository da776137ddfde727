use async_trait::async_trait;
use reqwest::{Client, header};

use super::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
        }
        .header(header::AUTHORIZATION, request.authorization.header_value());

        let builder = match (&request.form, request.method) {
            (Some(form), _) => builder.form(form),
            // the player endpoints reject bodyless writes without a length
            (None, Method::Post | Method::Put) => builder.header(header::CONTENT_LENGTH, "0"),
            (None, Method::Get) => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
