use crate::types::{
    Artist, CurrentlyPlaying, NowPlayingTableRow, PlaybackState, PlaybackTableRow, PlayingItem,
};

/// Formats milliseconds as `m:ss`, or `h:mm:ss` from one hour on.
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    let (hours, minutes, seconds) = (total_secs / 3600, (total_secs / 60) % 60, total_secs % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

pub fn join_artists(artists: &[Artist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_progress(progress_ms: Option<u64>, duration_ms: u64) -> String {
    match progress_ms {
        Some(progress) => format!(
            "{} / {}",
            format_duration(progress.min(duration_ms)),
            format_duration(duration_ms)
        ),
        None => format_duration(duration_ms),
    }
}

// Episodes have no artists or album; their show stands in for both.
fn item_columns(item: &PlayingItem) -> (String, String) {
    match &item.show {
        Some(show) => (show.publisher.clone(), show.name.clone()),
        None => (
            join_artists(&item.artists),
            item.album
                .as_ref()
                .map(|album| album.name.clone())
                .unwrap_or_default(),
        ),
    }
}

pub fn item_row(item: &PlayingItem, progress_ms: Option<u64>) -> NowPlayingTableRow {
    let (artists, album) = item_columns(item);
    NowPlayingTableRow {
        title: item.name.clone(),
        artists,
        album,
        progress: format_progress(progress_ms, item.duration_ms),
    }
}

pub fn now_playing_row(playing: &CurrentlyPlaying) -> Option<NowPlayingTableRow> {
    let item = playing.item.as_ref()?;
    Some(item_row(item, playing.progress_ms))
}

pub fn playback_row(state: &PlaybackState) -> PlaybackTableRow {
    let device = state.device.as_ref();
    PlaybackTableRow {
        device: device
            .map(|d| format!("{} ({})", d.name, d.kind))
            .unwrap_or_else(|| "-".to_string()),
        state: if state.is_playing { "playing" } else { "paused" }.to_string(),
        shuffle: if state.shuffle_state { "on" } else { "off" }.to_string(),
        repeat: state.repeat_state.clone().unwrap_or_else(|| "off".to_string()),
        volume: device
            .and_then(|d| d.volume_percent)
            .map(|v| format!("{v}%"))
            .unwrap_or_else(|| "-".to_string()),
    }
}
