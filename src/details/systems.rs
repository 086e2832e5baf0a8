//! Detail result draining system

use bevy::prelude::*;

use crate::details::types::{DetailChannels, DetailResult};
use crate::registry::{MetadataUpdate, SatelliteRegistry};

/// Drain lookup outcomes into the registry. Failures attach the placeholder;
/// results for catalog numbers not in the registry are discarded.
pub fn process_detail_results(
    mut registry: ResMut<SatelliteRegistry>,
    channels: Option<Res<DetailChannels>>,
) {
    let Some(channels) = channels else { return };
    let Ok(guard) = channels.res_rx.lock() else {
        return;
    };
    while let Ok(msg) = guard.try_recv() {
        let (norad, update) = match msg {
            DetailResult::Resolved { norad, metadata } => {
                (norad, MetadataUpdate::Resolved(metadata))
            }
            DetailResult::Unresolved { norad, error } => {
                debug!("norad {} details unresolved: {}", norad, error);
                (norad, MetadataUpdate::Unresolved)
            }
        };
        if registry.attach_metadata(norad, update).is_none() {
            warn!("discarding detail result for unknown norad {}", norad);
        }
    }
}
