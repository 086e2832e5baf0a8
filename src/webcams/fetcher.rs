//! Webcam listing worker.

use crate::webcams::types::{
    WebcamChannels, WebcamCommand, WebcamEntry, WebcamListPayload, WebcamResult,
    entries_from_payload,
};
use anyhow::{Context, Result};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

/// Start the background webcam worker thread.
pub fn start_webcam_worker() -> WebcamChannels {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WebcamCommand>();
    let (res_tx, res_rx) = mpsc::channel::<WebcamResult>();

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
        rt.block_on(async move {
            let client = reqwest::Client::new();

            while let Ok(cmd) = cmd_rx.recv() {
                let WebcamCommand::FetchList { url } = cmd;
                let msg = match fetch_listing(&client, &url).await {
                    Ok(entries) => {
                        println!("[WEBCAMS] listed {} cameras", entries.len());
                        WebcamResult::Listed(entries)
                    }
                    Err(e) => {
                        eprintln!("[WEBCAMS] listing failed: {}", e);
                        WebcamResult::Failed {
                            error: e.to_string(),
                        }
                    }
                };
                let _ = res_tx.send(msg);
            }
        });
    });

    WebcamChannels {
        cmd_tx,
        res_rx: Arc::new(Mutex::new(res_rx)),
    }
}

async fn fetch_listing(client: &reqwest::Client, url: &str) -> Result<Vec<WebcamEntry>> {
    let resp = client
        .get(url)
        .header("accept", "application/json")
        .send()
        .await
        .context("request failed")?;
    let status = resp.status();
    let body = resp.text().await.context("read response")?;
    if !status.is_success() {
        anyhow::bail!("http {} for webcam listing", status);
    }
    let payload: WebcamListPayload = serde_json::from_str(&body).context("malformed payload")?;
    Ok(entries_from_payload(&payload))
}
