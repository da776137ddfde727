use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Mutex;

use crate::{
    cli::{report, session},
    config, error, info,
    server::start_api_server,
    success,
    types::CallbackResult,
    warning,
};

const CALLBACK_TIMEOUT: Duration = Duration::from_secs(120);

/// Stores the application's client id and secret.
///
/// Overwrites whatever was stored before. The stored token is left alone; run
/// `sponow auth` afterwards to mint one for the new credentials.
pub async fn login(client_id: String, client_secret: String) {
    if client_id.trim().is_empty() || client_secret.trim().is_empty() {
        error!("Client id and client secret must not be empty.");
    }

    match session().login(client_id.trim(), client_secret.trim()).await {
        Ok(()) => success!("Credentials saved. Run sponow auth to authorize."),
        Err(e) => report(e),
    }
}

/// Forgets the credentials and the token minted from them.
pub async fn logout() {
    match session().logout().await {
        Ok(()) => success!("Logged out."),
        Err(e) => report(e),
    }
}

/// Runs the authorization-code flow end to end.
///
/// 1. Starts the local callback server on `SERVER_ADDRESS`
/// 2. Opens the authorization URL in the default browser
/// 3. Waits for Spotify to redirect back with a code
/// 4. Exchanges the code and stores the token
pub async fn auth() {
    let session = session();
    let redirect_uri = config::spotify_redirect_uri();

    let auth_url = match session.authorize_url(&redirect_uri).await {
        Ok(url) => url,
        Err(e) => report(e),
    };

    let shared_state: Arc<Mutex<Option<CallbackResult>>> = Arc::new(Mutex::new(None));
    let server_state = Arc::clone(&shared_state);
    let addr = config::server_addr();
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(&addr, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    info!("Opening Spotify authorization page...");
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for authorization...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = wait_for_callback(shared_state, CALLBACK_TIMEOUT).await;
    pb.finish_and_clear();
    server.abort();

    match result {
        Some(CallbackResult::Code(code)) => {
            match session.complete_authorization(&code, &redirect_uri).await {
                Ok(_) => success!("Authentication successful!"),
                Err(e) => report(e),
            }
        }
        Some(CallbackResult::Denied(reason)) => error!("Authorization denied: {}", reason),
        None => error!("Authentication timed out."),
    }
}

/// Polls the shared callback state once per second until it is filled or
/// `max_wait` has passed.
pub async fn wait_for_callback(
    shared_state: Arc<Mutex<Option<CallbackResult>>>,
    max_wait: Duration,
) -> Option<CallbackResult> {
    use std::time::Instant;

    let start = Instant::now();

    loop {
        if let Some(result) = shared_state.lock().await.take() {
            return Some(result);
        }
        if start.elapsed() >= max_wait {
            return None;
        }
        tokio::time::sleep(Duration::from_secs(1).min(max_wait)).await;
    }
}
