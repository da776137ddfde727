use url::form_urlencoded;

use crate::{
    config,
    http::{Authorization, HttpTransport, Method},
    spotify::{ApiError, Call, NotFound, SpotifyClient},
    types::{Credentials, TokenResponse},
};

/// Permissions requested at authorization time.
pub const SCOPES: [&str; 3] = [
    "user-read-currently-playing",
    "user-read-playback-state",
    "user-modify-playback-state",
];

/// Builds the URL users are redirected to in order to grant access.
///
/// The consent dialog is always shown (`show_dialog=true`), even for users who
/// already approved the application, so switching accounts is possible.
///
/// # Example
///
/// ```
/// let url = generate_auth_url("abc", "http://127.0.0.1:8888/callback");
/// assert!(url.starts_with("https://accounts.spotify.com/authorize?client_id=abc"));
/// ```
pub fn generate_auth_url(client_id: &str, redirect_uri: &str) -> String {
    build_auth_url(config::DEFAULT_AUTH_URL, client_id, redirect_uri)
}

fn build_auth_url(auth_url: &str, client_id: &str, redirect_uri: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", client_id)
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("scope", &SCOPES.join(" "))
        .append_pair("show_dialog", "true")
        .finish();

    format!("{auth_url}?{query}")
}

fn basic(credentials: &Credentials) -> Authorization {
    Authorization::Basic {
        username: credentials.client_id.clone(),
        password: credentials.client_secret.clone(),
    }
}

impl<T: HttpTransport> SpotifyClient<T> {
    /// Same as [`generate_auth_url`] against this client's authorization host.
    pub fn auth_url(&self, client_id: &str, redirect_uri: &str) -> String {
        build_auth_url(&self.endpoints.auth_url, client_id, redirect_uri)
    }

    /// Exchanges the one-time authorization code from the redirect for tokens.
    ///
    /// `redirect_uri` must be the exact value used when building the
    /// authorization URL.
    ///
    /// # Errors
    ///
    /// - `ApiError::Transport` - the request never got a response
    /// - `ApiError::Failed` - any non-success status (invalid or reused code,
    ///   wrong client secret, mismatched redirect URI)
    /// - `ApiError::Decode` - the body is not a token response
    pub async fn exchange_code_for_token(
        &self,
        code: &str,
        credentials: &Credentials,
        redirect_uri: &str,
    ) -> Result<TokenResponse, ApiError> {
        let outcome = self
            .execute(Call {
                operation: "failed to exchange code for token",
                method: Method::Post,
                url: self.endpoints.token_url.clone(),
                authorization: basic(credentials),
                form: Some(vec![
                    ("grant_type".to_string(), "authorization_code".to_string()),
                    ("code".to_string(), code.to_string()),
                    ("redirect_uri".to_string(), redirect_uri.to_string()),
                ]),
                empty_success: &[],
                not_found: NotFound::Failure,
            })
            .await?;

        outcome
            .decode()?
            .ok_or(ApiError::Failed("failed to exchange code for token"))
    }

    /// Mints a new access token from a refresh token.
    ///
    /// Spotify may or may not rotate the refresh token. When the response
    /// carries none, the one passed in is kept so the result is always
    /// usable for the next refresh.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
        credentials: &Credentials,
    ) -> Result<TokenResponse, ApiError> {
        let outcome = self
            .execute(Call {
                operation: "failed to refresh token",
                method: Method::Post,
                url: self.endpoints.token_url.clone(),
                authorization: basic(credentials),
                form: Some(vec![
                    ("grant_type".to_string(), "refresh_token".to_string()),
                    ("refresh_token".to_string(), refresh_token.to_string()),
                ]),
                empty_success: &[],
                not_found: NotFound::Failure,
            })
            .await?;

        let mut response: TokenResponse = outcome
            .decode()?
            .ok_or(ApiError::Failed("failed to refresh token"))?;

        if response
            .refresh_token
            .as_deref()
            .is_none_or(|t| t.is_empty())
        {
            response.refresh_token = Some(refresh_token.to_string());
        }

        Ok(response)
    }
}
