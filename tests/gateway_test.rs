mod common;

use common::{FakeTransport, client, form_value};
use sponow::{
    http::{Authorization, Method},
    spotify::{ApiError, Endpoints, SCOPES, SpotifyClient, generate_auth_url},
    types::Credentials,
};

const PLAYING: &str = r#"{
    "is_playing": true,
    "progress_ms": 42000,
    "currently_playing_type": "track",
    "item": {
        "id": "t1",
        "name": "Song",
        "uri": "spotify:track:t1",
        "duration_ms": 180000,
        "artists": [{"id": "a1", "name": "Band"}],
        "album": {"id": "al1", "name": "Record", "images": []}
    }
}"#;

fn credentials() -> Credentials {
    Credentials {
        client_id: "abc".to_string(),
        client_secret: "xyz".to_string(),
    }
}

#[test]
fn test_generate_auth_url() {
    let url = generate_auth_url("abc", "http://127.0.0.1:8888/callback");

    assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(url.contains("client_id=abc"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8888%2Fcallback"));
    assert!(url.contains(
        "scope=user-read-currently-playing+user-read-playback-state+user-modify-playback-state"
    ));
    assert!(url.ends_with("show_dialog=true"));
    assert_eq!(SCOPES.len(), 3);
}

#[test]
fn test_auth_url_uses_configured_host() {
    let client = SpotifyClient::with_endpoints(
        FakeTransport::new(),
        Endpoints {
            auth_url: "http://localhost:9000/authorize".to_string(),
            ..Endpoints::default()
        },
    );

    let url = client.auth_url("abc", "http://x/cb");
    assert!(url.starts_with("http://localhost:9000/authorize?client_id=abc&"));
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_exchange_code_request_shape() {
    let client = client(FakeTransport::new().respond(
        200,
        r#"{"access_token":"A","token_type":"Bearer","refresh_token":"R","expires_in":3600}"#,
    ));

    let response = client
        .exchange_code_for_token("the-code", &credentials(), "http://x/cb")
        .await
        .unwrap();
    assert_eq!(response.access_token, "A");
    assert_eq!(response.refresh_token.as_deref(), Some("R"));
    assert_eq!(response.expires_in, 3600);

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "https://accounts.spotify.com/api/token");
    // base64("abc:xyz")
    assert_eq!(request.authorization.header_value(), "Basic YWJjOnh5eg==");
    assert_eq!(form_value(request, "grant_type"), Some("authorization_code"));
    assert_eq!(form_value(request, "code"), Some("the-code"));
    assert_eq!(form_value(request, "redirect_uri"), Some("http://x/cb"));
}

#[tokio::test]
async fn test_exchange_code_failure_is_generic() {
    let client = client(FakeTransport::new().respond(400, r#"{"error":"invalid_grant"}"#));

    let err = client
        .exchange_code_for_token("bad", &credentials(), "http://x/cb")
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Failed("failed to exchange code for token"));
}

#[tokio::test]
async fn test_token_endpoint_401_is_not_token_expired() {
    let client = client(FakeTransport::new().respond(401, r#"{"error":"invalid_client"}"#));

    let err = client
        .refresh_access_token("R", &credentials())
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Failed("failed to refresh token"));
}

#[tokio::test]
async fn test_refresh_keeps_previous_refresh_token() {
    let client = client(FakeTransport::new().respond(
        200,
        r#"{"access_token":"A2","token_type":"Bearer","expires_in":3600}"#,
    ));

    let response = client
        .refresh_access_token("R1", &credentials())
        .await
        .unwrap();
    assert_eq!(response.access_token, "A2");
    assert_eq!(response.refresh_token.as_deref(), Some("R1"));

    let request = &client.transport().requests()[0];
    assert_eq!(form_value(request, "grant_type"), Some("refresh_token"));
    assert_eq!(form_value(request, "refresh_token"), Some("R1"));
}

#[tokio::test]
async fn test_refresh_accepts_rotated_refresh_token() {
    let client = client(FakeTransport::new().respond(
        200,
        r#"{"access_token":"A2","refresh_token":"R2","expires_in":3600}"#,
    ));

    let response = client
        .refresh_access_token("R1", &credentials())
        .await
        .unwrap();
    assert_eq!(response.refresh_token.as_deref(), Some("R2"));
}

#[tokio::test]
async fn test_currently_playing_decodes_item() {
    let client = client(FakeTransport::new().respond(200, PLAYING));

    let playing = client.get_currently_playing("tok").await.unwrap().unwrap();
    assert!(playing.is_playing);
    assert_eq!(playing.progress_ms, Some(42000));
    let item = playing.item.unwrap();
    assert_eq!(item.name, "Song");
    assert_eq!(item.artists[0].name, "Band");

    let request = &client.transport().requests()[0];
    assert_eq!(request.method, Method::Get);
    assert_eq!(
        request.url,
        "https://api.spotify.com/v1/me/player/currently-playing"
    );
    assert_eq!(request.authorization, Authorization::Bearer("tok".to_string()));
    assert!(request.form.is_none());
}

#[tokio::test]
async fn test_currently_playing_204_is_nothing_playing() {
    let client = client(FakeTransport::new().respond(204, ""));

    assert!(client.get_currently_playing("tok").await.unwrap().is_none());
}

#[tokio::test]
async fn test_playback_state_204_is_absent() {
    let client = client(FakeTransport::new().respond(204, ""));

    assert!(client.get_playback_state("tok").await.unwrap().is_none());
    assert_eq!(
        client.transport().requests()[0].url,
        "https://api.spotify.com/v1/me/player"
    );
}

#[tokio::test]
async fn test_playback_state_decodes_device() {
    let client = client(FakeTransport::new().respond(
        200,
        r#"{"device":{"id":"d1","name":"Kitchen","type":"Speaker","is_active":true,"volume_percent":40},
            "shuffle_state":true,"repeat_state":"context","is_playing":false,"item":null}"#,
    ));

    let state = client.get_playback_state("tok").await.unwrap().unwrap();
    let device = state.device.unwrap();
    assert_eq!(device.name, "Kitchen");
    assert_eq!(device.kind, "Speaker");
    assert_eq!(device.volume_percent, Some(40));
    assert!(state.shuffle_state);
    assert_eq!(state.repeat_state.as_deref(), Some("context"));
    assert!(state.item.is_none());
}

#[tokio::test]
async fn test_401_is_token_expired_on_every_resource_call() {
    let transport = (0..6).fold(FakeTransport::new(), |t, _| t.respond(401, ""));
    let client = client(transport);

    assert_eq!(
        client.get_currently_playing("tok").await.unwrap_err(),
        ApiError::TokenExpired
    );
    assert_eq!(
        client.get_playback_state("tok").await.unwrap_err(),
        ApiError::TokenExpired
    );
    assert_eq!(client.play("tok").await.unwrap_err(), ApiError::TokenExpired);
    assert_eq!(client.pause("tok").await.unwrap_err(), ApiError::TokenExpired);
    assert_eq!(client.next("tok").await.unwrap_err(), ApiError::TokenExpired);
    assert_eq!(client.previous("tok").await.unwrap_err(), ApiError::TokenExpired);
}

#[tokio::test]
async fn test_404_on_controls_is_no_active_device() {
    let transport = (0..4).fold(FakeTransport::new(), |t, _| t.respond(404, ""));
    let client = client(transport);

    assert_eq!(client.play("tok").await.unwrap_err(), ApiError::NoActiveDevice);
    assert_eq!(client.pause("tok").await.unwrap_err(), ApiError::NoActiveDevice);
    assert_eq!(client.next("tok").await.unwrap_err(), ApiError::NoActiveDevice);
    assert_eq!(
        client.previous("tok").await.unwrap_err(),
        ApiError::NoActiveDevice
    );
}

#[tokio::test]
async fn test_404_on_reads_is_generic_failure() {
    let client = client(FakeTransport::new().respond(404, "").respond(404, ""));

    assert_eq!(
        client.get_currently_playing("tok").await.unwrap_err(),
        ApiError::Failed("failed to fetch currently playing")
    );
    assert_eq!(
        client.get_playback_state("tok").await.unwrap_err(),
        ApiError::Failed("failed to fetch playback state")
    );
}

#[tokio::test]
async fn test_controls_accept_200_202_and_204() {
    let client = client(
        FakeTransport::new()
            .respond(204, "")
            .respond(202, "")
            .respond(200, "")
            .respond(204, ""),
    );

    assert!(client.play("tok").await.unwrap());
    assert!(client.pause("tok").await.unwrap());
    assert!(client.next("tok").await.unwrap());
    assert!(client.previous("tok").await.unwrap());

    let requests = client.transport().requests();
    let shape: Vec<_> = requests
        .iter()
        .map(|r| (r.method, r.url.trim_start_matches("https://api.spotify.com/v1/")))
        .collect();
    assert_eq!(
        shape,
        vec![
            (Method::Put, "me/player/play"),
            (Method::Put, "me/player/pause"),
            (Method::Post, "me/player/next"),
            (Method::Post, "me/player/previous"),
        ]
    );
}

#[tokio::test]
async fn test_other_statuses_are_named_failures() {
    let client = client(FakeTransport::new().respond(429, "").respond(500, ""));

    assert_eq!(
        client.get_currently_playing("tok").await.unwrap_err(),
        ApiError::Failed("failed to fetch currently playing")
    );
    assert_eq!(
        client.next("tok").await.unwrap_err(),
        ApiError::Failed("failed to skip to next track")
    );
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let client = client(FakeTransport::new().fail("connection refused"));

    assert_eq!(
        client.pause("tok").await.unwrap_err(),
        ApiError::Transport("connection refused".to_string())
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let client = client(FakeTransport::new().respond(200, "<html>"));

    assert!(matches!(
        client.get_currently_playing("tok").await,
        Err(ApiError::Decode(_))
    ));
}

#[tokio::test]
async fn test_custom_api_base_is_joined_cleanly() {
    let client = SpotifyClient::with_endpoints(
        FakeTransport::new().respond(204, ""),
        Endpoints {
            api_url: "http://localhost:9000/v1/".to_string(),
            ..Endpoints::default()
        },
    );

    client.get_playback_state("tok").await.unwrap();
    assert_eq!(
        client.transport().requests()[0].url,
        "http://localhost:9000/v1/me/player"
    );
}

#[tokio::test]
async fn test_blank_success_body_on_reads_is_decode_error() {
    let client = client(
        FakeTransport::new()
            .respond(202, "")
            .respond(200, "")
            .respond(202, "")
            .respond(200, "  "),
    );

    assert!(matches!(
        client.get_currently_playing("tok").await,
        Err(ApiError::Decode(_))
    ));
    assert!(matches!(
        client.get_currently_playing("tok").await,
        Err(ApiError::Decode(_))
    ));
    assert!(matches!(
        client.get_playback_state("tok").await,
        Err(ApiError::Decode(_))
    ));
    assert!(matches!(
        client.get_playback_state("tok").await,
        Err(ApiError::Decode(_))
    ));
}
