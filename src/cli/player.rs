use tabled::Table;

use crate::{
    cli::{report, session},
    info, success,
    utils::{item_row, now_playing_row, playback_row},
};

/// Transport commands accepted by [`control`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Play,
    Pause,
    Next,
    Previous,
}

pub async fn now_playing() {
    let playing = match session().currently_playing().await {
        Ok(playing) => playing,
        Err(e) => report(e),
    };

    match playing.as_ref().and_then(now_playing_row) {
        Some(row) => {
            let state = if playing.as_ref().is_some_and(|p| p.is_playing) {
                "Now playing"
            } else {
                "Paused"
            };
            info!("{}:", state);
            println!("{}", Table::new(vec![row]));
        }
        None => info!("Nothing is playing right now."),
    }
}

pub async fn status() {
    let state = match session().playback_state().await {
        Ok(state) => state,
        Err(e) => report(e),
    };

    let Some(state) = state else {
        info!("No playback session. Start playing on any device first.");
        return;
    };

    println!("{}", Table::new(vec![playback_row(&state)]));
    if let Some(item) = &state.item {
        println!("{}", Table::new(vec![item_row(item, state.progress_ms)]));
    }
}

pub async fn control(command: Control) {
    let session = session();
    let result = match command {
        Control::Play => session.play().await,
        Control::Pause => session.pause().await,
        Control::Next => session.next().await,
        Control::Previous => session.previous().await,
    };

    match result {
        Ok(_) => success!(
            "{}",
            match command {
                Control::Play => "Playback started.",
                Control::Pause => "Playback paused.",
                Control::Next => "Skipped to next track.",
                Control::Previous => "Skipped to previous track.",
            }
        ),
        Err(e) => report(e),
    }
}
