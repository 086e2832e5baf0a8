//! Feed request and result-draining systems

use bevy::prelude::*;

use crate::config::TrackerConfig;
use crate::details::types::{DetailChannels, DetailCommand, detail_url};
use crate::registry::SatelliteRegistry;
use crate::tle::types::{FeedChannels, FeedCommand, FeedResult, FeedStatus};
use crate::ui::state::FeedNotice;

/// Kick off the load session: one feed fetch, no retry.
pub fn request_feed(
    config: Res<TrackerConfig>,
    channels: Option<Res<FeedChannels>>,
    mut status: ResMut<FeedStatus>,
) {
    if status.requested {
        return;
    }
    let Some(channels) = channels else {
        warn!("feed channels unavailable; cannot start load session");
        return;
    };
    status.requested = true;
    println!("[REQUEST] fetching TLE feed (cap {})", config.sample_cap);
    let _ = channels.cmd_tx.send(FeedCommand::FetchFeed {
        url: config.tle_feed_url.clone(),
        cap: config.sample_cap,
    });
}

/// Drain feed results into the registry and issue one detail lookup per
/// admitted record. A feed failure raises the blocking notice; a rejected
/// triplet is logged and loading continues.
pub fn process_feed_results(
    mut registry: ResMut<SatelliteRegistry>,
    mut status: ResMut<FeedStatus>,
    mut notice: ResMut<FeedNotice>,
    config: Res<TrackerConfig>,
    feed: Option<Res<FeedChannels>>,
    details: Option<Res<DetailChannels>>,
) {
    let Some(feed) = feed else { return };
    let Ok(guard) = feed.res_rx.lock() else {
        return;
    };
    while let Ok(msg) = guard.try_recv() {
        match msg {
            FeedResult::Loaded { sets, fetched_utc } => {
                for set in sets {
                    match registry.add_satellite(&set.name, &set.line1, &set.line2) {
                        Ok(record) => {
                            let norad = record.norad_id;
                            if let Some(details) = &details {
                                let url =
                                    detail_url(&config.detail_api_url, norad, &config.detail_api_key);
                                let _ = details.cmd_tx.send(DetailCommand::Fetch { norad, url });
                            }
                        }
                        Err(rejection) => {
                            warn!("skipping feed entry {:?}: {}", set.name, rejection);
                        }
                    }
                }
                status.loaded_utc = Some(fetched_utc);
                println!("[TLE DISPATCH] registry holds {} satellites", registry.len());
            }
            FeedResult::Failed { error } => {
                eprintln!("[TLE DISPATCH] feed failed: {}", error);
                notice.message = Some(format!("Failed to load satellites: {}", error));
            }
        }
    }
}
