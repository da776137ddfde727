use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{types::CallbackResult, warning};

/// Receives the OAuth redirect and hands its outcome to the waiting CLI.
///
/// Spotify appends either `code` or `error` to the redirect URI. The code is
/// not exchanged here; the caller polling the shared state does that.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<CallbackResult>>>>,
) -> Html<&'static str> {
    let result = match (params.get("code"), params.get("error")) {
        (Some(code), _) if !code.is_empty() => CallbackResult::Code(code.clone()),
        (_, Some(error)) => {
            warning!("Authorization was not granted: {}", error);
            CallbackResult::Denied(error.clone())
        }
        _ => return Html("<h4>Missing authorization code.</h4>"),
    };

    let granted = matches!(result, CallbackResult::Code(_));
    *shared_state.lock().await = Some(result);

    if granted {
        Html("<h2>Authorization received.</h2><p>You can close this browser window.</p>")
    } else {
        Html("<h4>Authorization denied.</h4>")
    }
}
