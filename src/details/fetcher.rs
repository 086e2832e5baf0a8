//! Detail lookup worker.
//!
//! Commands are served sequentially, so each record's metadata has exactly
//! one fetch owner and results never interleave for the same satellite.

use crate::details::types::{
    DetailChannels, DetailCommand, DetailPayload, DetailResult, metadata_from_payload,
};
use anyhow::{Context, Result};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

/// Start the background detail worker thread.
pub fn start_detail_worker() -> DetailChannels {
    let (cmd_tx, cmd_rx) = mpsc::channel::<DetailCommand>();
    let (res_tx, res_rx) = mpsc::channel::<DetailResult>();

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
        rt.block_on(async move {
            let client = reqwest::Client::new();

            while let Ok(cmd) = cmd_rx.recv() {
                let DetailCommand::Fetch { norad, url } = cmd;
                let msg = match fetch_details(&client, norad, &url).await {
                    Ok(metadata) => DetailResult::Resolved { norad, metadata },
                    Err(e) => {
                        // Recovered locally with the placeholder; log only.
                        eprintln!("[DETAILS] norad={} lookup failed: {}", norad, e);
                        DetailResult::Unresolved {
                            norad,
                            error: e.to_string(),
                        }
                    }
                };
                let _ = res_tx.send(msg);
            }
        });
    });

    DetailChannels {
        cmd_tx,
        res_rx: Arc::new(Mutex::new(res_rx)),
    }
}

async fn fetch_details(
    client: &reqwest::Client,
    norad: u32,
    url: &str,
) -> Result<crate::registry::SatelliteMetadata> {
    let resp = client
        .get(url)
        .header("accept", "application/json")
        .send()
        .await
        .context("request failed")?;
    let status = resp.status();
    let body = resp.text().await.context("read response")?;
    if !status.is_success() {
        anyhow::bail!("http {} for norad {}", status, norad);
    }
    let payload: DetailPayload = serde_json::from_str(&body).context("malformed payload")?;
    Ok(metadata_from_payload(norad, &payload))
}
