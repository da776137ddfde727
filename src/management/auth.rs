use chrono::Utc;
use serde::Deserialize;

use crate::{
    storage::{KeyValueStore, StorageError},
    types::{Credentials, Token, TokenResponse},
};

pub const CREDENTIALS_KEY: &str = "spotify-credentials";
pub const TOKEN_KEY: &str = "spotify-token";

/// Tokens are considered expired this long before the server says so.
pub const EXPIRY_MARGIN_MS: i64 = 60_000;

/// Owns the two persisted slots: app credentials and the current token.
///
/// Reads fail soft. A slot that is missing, unreadable or holds malformed JSON
/// reads as absent. Writes report storage errors.
pub struct CredentialStore<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        CredentialStore { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub async fn get_credentials(&self) -> Option<Credentials> {
        self.read(CREDENTIALS_KEY).await
    }

    pub async fn save_credentials(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<(), StorageError> {
        let credentials = Credentials {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        };
        let json = serde_json::to_string(&credentials)?;
        self.store.set(CREDENTIALS_KEY, &json).await
    }

    /// Forgets the credentials together with any token minted from them.
    pub async fn clear_credentials(&self) -> Result<(), StorageError> {
        self.store.remove(&[CREDENTIALS_KEY, TOKEN_KEY]).await
    }

    pub async fn get_token(&self) -> Option<Token> {
        self.get_token_at(now_ms()).await
    }

    /// Returns the stored token if it is still valid at `now_ms`.
    ///
    /// Expiry is only checked here; expired tokens stay in storage until
    /// they are replaced or cleared.
    pub async fn get_token_at(&self, now_ms: i64) -> Option<Token> {
        self.read::<Token>(TOKEN_KEY)
            .await
            .filter(|token| token.expires_at > now_ms)
    }

    pub async fn save_token(&self, response: &TokenResponse) -> Result<Token, StorageError> {
        self.save_token_at(response, now_ms()).await
    }

    pub async fn save_token_at(
        &self,
        response: &TokenResponse,
        now_ms: i64,
    ) -> Result<Token, StorageError> {
        let lifetime_ms = i64::try_from(response.expires_in)
            .unwrap_or(i64::MAX / 1000)
            .saturating_mul(1000);

        let token = Token {
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone().unwrap_or_default(),
            expires_at: now_ms
                .saturating_add(lifetime_ms)
                .saturating_sub(EXPIRY_MARGIN_MS),
        };

        let json = serde_json::to_string(&token)?;
        self.store.set(TOKEN_KEY, &json).await?;
        Ok(token)
    }

    /// Refresh token of the stored token, whether or not it has expired.
    pub async fn stored_refresh_token(&self) -> Option<String> {
        self.read::<Token>(TOKEN_KEY)
            .await
            .map(|token| token.refresh_token)
            .filter(|refresh_token| !refresh_token.is_empty())
    }

    async fn read<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key).await.ok()??;
        serde_json::from_str(&raw).ok()
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
