//! TLE feed fetching worker.

use crate::tle::parser::parse_feed;
use crate::tle::types::{FeedChannels, FeedCommand, FeedResult};
use chrono::Utc;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

/// Start the background feed worker thread. The thread owns a tokio runtime
/// and an HTTP client; it serves one fetch command at a time.
pub fn start_feed_worker() -> FeedChannels {
    let (cmd_tx, cmd_rx) = mpsc::channel::<FeedCommand>();
    let (res_tx, res_rx) = mpsc::channel::<FeedResult>();

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
        rt.block_on(async move {
            let client = reqwest::Client::new();

            while let Ok(cmd) = cmd_rx.recv() {
                let FeedCommand::FetchFeed { url, cap } = cmd;
                let res = async {
                    let resp = client
                        .get(&url)
                        .header("accept", "text/plain")
                        .send()
                        .await?;
                    let status = resp.status();
                    let body = resp.text().await?;
                    println!("[TLE FEED] status={} bytes={}", status, body.len());
                    if !status.is_success() {
                        anyhow::bail!("HTTP {} for feed", status);
                    }
                    Ok::<_, anyhow::Error>(parse_feed(&body, cap))
                }
                .await;

                let msg = match res {
                    Ok(sets) => {
                        println!("[TLE FEED] parsed {} sets (cap {})", sets.len(), cap);
                        FeedResult::Loaded {
                            sets,
                            fetched_utc: Utc::now(),
                        }
                    }
                    Err(e) => {
                        eprintln!("[TLE FEED] FAILURE: {}", e);
                        FeedResult::Failed {
                            error: e.to_string(),
                        }
                    }
                };
                let _ = res_tx.send(msg);
            }
        });
    });

    FeedChannels {
        cmd_tx,
        res_rx: Arc::new(Mutex::new(res_rx)),
    }
}
