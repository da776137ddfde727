use std::future::Future;

use crate::{
    http::HttpTransport,
    management::CredentialStore,
    spotify::{ApiError, SpotifyClient},
    storage::{KeyValueStore, StorageError},
    types::{Credentials, CurrentlyPlaying, PlaybackState, Token},
};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no application credentials stored")]
    MissingCredentials,
    #[error("not authorized with Spotify")]
    NotAuthorized,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Drives the token lifecycle on behalf of a caller.
///
/// Reads the current token from the store, refreshes it when it is absent or
/// rejected, persists the result and retries the rejected call once. Calls
/// from several callers are not coordinated; concurrent refreshes each write
/// their token and the last write wins.
pub struct Session<S, T> {
    store: CredentialStore<S>,
    client: SpotifyClient<T>,
}

impl<S: KeyValueStore, T: HttpTransport> Session<S, T> {
    pub fn new(store: CredentialStore<S>, client: SpotifyClient<T>) -> Self {
        Session { store, client }
    }

    pub fn store(&self) -> &CredentialStore<S> {
        &self.store
    }

    pub fn client(&self) -> &SpotifyClient<T> {
        &self.client
    }

    pub async fn login(&self, client_id: &str, client_secret: &str) -> Result<(), SessionError> {
        self.store.save_credentials(client_id, client_secret).await?;
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), SessionError> {
        self.store.clear_credentials().await?;
        Ok(())
    }

    pub async fn authorize_url(&self, redirect_uri: &str) -> Result<String, SessionError> {
        let credentials = self.credentials().await?;
        Ok(self.client.auth_url(&credentials.client_id, redirect_uri))
    }

    /// Exchanges the redirect's authorization code and stores the token.
    pub async fn complete_authorization(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<Token, SessionError> {
        let credentials = self.credentials().await?;
        let response = self
            .client
            .exchange_code_for_token(code, &credentials, redirect_uri)
            .await?;
        Ok(self.store.save_token(&response).await?)
    }

    /// Mints a new token from the stored refresh token and stores it.
    pub async fn refresh(&self) -> Result<Token, SessionError> {
        let credentials = self.credentials().await?;
        let refresh_token = self
            .store
            .stored_refresh_token()
            .await
            .ok_or(SessionError::NotAuthorized)?;

        let response = self
            .client
            .refresh_access_token(&refresh_token, &credentials)
            .await?;
        Ok(self.store.save_token(&response).await?)
    }

    /// Current access token, refreshing first if the stored one has expired.
    pub async fn access_token(&self) -> Result<String, SessionError> {
        match self.store.get_token().await {
            Some(token) => Ok(token.access_token),
            None => Ok(self.refresh().await?.access_token),
        }
    }

    pub async fn currently_playing(&self) -> Result<Option<CurrentlyPlaying>, SessionError> {
        let client = &self.client;
        self.with_token(|token| async move { client.get_currently_playing(&token).await })
            .await
    }

    pub async fn playback_state(&self) -> Result<Option<PlaybackState>, SessionError> {
        let client = &self.client;
        self.with_token(|token| async move { client.get_playback_state(&token).await })
            .await
    }

    pub async fn play(&self) -> Result<bool, SessionError> {
        let client = &self.client;
        self.with_token(|token| async move { client.play(&token).await })
            .await
    }

    pub async fn pause(&self) -> Result<bool, SessionError> {
        let client = &self.client;
        self.with_token(|token| async move { client.pause(&token).await })
            .await
    }

    pub async fn next(&self) -> Result<bool, SessionError> {
        let client = &self.client;
        self.with_token(|token| async move { client.next(&token).await })
            .await
    }

    pub async fn previous(&self) -> Result<bool, SessionError> {
        let client = &self.client;
        self.with_token(|token| async move { client.previous(&token).await })
            .await
    }

    async fn credentials(&self) -> Result<Credentials, SessionError> {
        self.store
            .get_credentials()
            .await
            .ok_or(SessionError::MissingCredentials)
    }

    // A second TokenExpired after a fresh refresh is handed back to the caller.
    async fn with_token<R, F, Fut>(&self, call: F) -> Result<R, SessionError>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<R, ApiError>>,
    {
        let token = self.access_token().await?;
        match call(token).await {
            Err(ApiError::TokenExpired) => {
                let token = self.refresh().await?;
                Ok(call(token.access_token).await?)
            }
            result => Ok(result?),
        }
    }
}
