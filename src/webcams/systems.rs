//! Webcam request and result-draining systems

use bevy::prelude::*;

use crate::config::TrackerConfig;
use crate::webcams::types::{
    WebcamChannels, WebcamCommand, WebcamDirectory, WebcamResult, sample_webcams,
};

/// Request the listing when a real key is configured; otherwise install the
/// built-in samples directly without touching the network.
pub fn request_webcams(
    config: Res<TrackerConfig>,
    channels: Option<Res<WebcamChannels>>,
    mut directory: ResMut<WebcamDirectory>,
) {
    if !config.webcam_key_configured() {
        directory.entries = sample_webcams();
        directory.from_fallback = true;
        println!("[WEBCAMS] no key configured; using sample cameras");
        return;
    }
    let Some(channels) = channels else {
        directory.entries = sample_webcams();
        directory.from_fallback = true;
        return;
    };
    let url = format!(
        "{}/limit={}?key={}",
        config.webcam_api_url.trim_end_matches('/'),
        config.webcam_limit,
        config.webcam_api_key
    );
    let _ = channels.cmd_tx.send(WebcamCommand::FetchList { url });
}

/// Drain listing results. Any failure, or an empty listing, falls back to
/// the samples; no error is shown to the user.
pub fn process_webcam_results(
    mut directory: ResMut<WebcamDirectory>,
    channels: Option<Res<WebcamChannels>>,
) {
    let Some(channels) = channels else { return };
    let Ok(guard) = channels.res_rx.lock() else {
        return;
    };
    while let Ok(msg) = guard.try_recv() {
        match msg {
            WebcamResult::Listed(entries) if !entries.is_empty() => {
                directory.entries = entries;
                directory.from_fallback = false;
            }
            WebcamResult::Listed(_) => {
                directory.entries = sample_webcams();
                directory.from_fallback = true;
            }
            WebcamResult::Failed { error } => {
                warn!("webcam listing failed, using samples: {}", error);
                directory.entries = sample_webcams();
                directory.from_fallback = true;
            }
        }
    }
}
