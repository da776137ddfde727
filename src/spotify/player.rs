use crate::{
    http::{Authorization, HttpTransport, Method},
    spotify::{ApiError, Call, NotFound, SpotifyClient},
    types::{CurrentlyPlaying, PlaybackState},
};

const READ_EMPTY: &[u16] = &[204];
const CONTROL_EMPTY: &[u16] = &[202, 204];

impl<T: HttpTransport> SpotifyClient<T> {
    /// Fetches the item currently playing on the user's account.
    ///
    /// Returns `Ok(None)` when Spotify answers `204 No Content`, which means
    /// nothing is playing. The result is never cached.
    pub async fn get_currently_playing(
        &self,
        access_token: &str,
    ) -> Result<Option<CurrentlyPlaying>, ApiError> {
        self.read(
            "failed to fetch currently playing",
            "me/player/currently-playing",
            access_token,
        )
        .await
    }

    /// Fetches device, shuffle/repeat and progress information.
    ///
    /// Returns `Ok(None)` when there is no playback session at all.
    pub async fn get_playback_state(
        &self,
        access_token: &str,
    ) -> Result<Option<PlaybackState>, ApiError> {
        self.read("failed to fetch playback state", "me/player", access_token)
            .await
    }

    pub async fn play(&self, access_token: &str) -> Result<bool, ApiError> {
        self.control("failed to start playback", Method::Put, "me/player/play", access_token)
            .await
    }

    pub async fn pause(&self, access_token: &str) -> Result<bool, ApiError> {
        self.control("failed to pause playback", Method::Put, "me/player/pause", access_token)
            .await
    }

    pub async fn next(&self, access_token: &str) -> Result<bool, ApiError> {
        self.control("failed to skip to next track", Method::Post, "me/player/next", access_token)
            .await
    }

    pub async fn previous(&self, access_token: &str) -> Result<bool, ApiError> {
        self.control(
            "failed to skip to previous track",
            Method::Post,
            "me/player/previous",
            access_token,
        )
        .await
    }

    async fn read<R: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        access_token: &str,
    ) -> Result<Option<R>, ApiError> {
        self.execute(Call {
            operation,
            method: Method::Get,
            url: self.api_url(path),
            authorization: Authorization::Bearer(access_token.to_string()),
            form: None,
            empty_success: READ_EMPTY,
            not_found: NotFound::Failure,
        })
        .await?
        .decode()
    }

    // Any 2xx counts as accepted; the body, if any, is not inspected.
    async fn control(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        access_token: &str,
    ) -> Result<bool, ApiError> {
        self.execute(Call {
            operation,
            method,
            url: self.api_url(path),
            authorization: Authorization::Bearer(access_token.to_string()),
            form: None,
            empty_success: CONTROL_EMPTY,
            not_found: NotFound::NoActiveDevice,
        })
        .await
        .map(|_| true)
    }
}
