//! Satellite detail lookup module
//!
//! Best-effort per-satellite metadata fetch, keyed by NORAD id. Lookup
//! failures are recovered locally with placeholder metadata and never
//! surfaced to the user.

use bevy::prelude::*;

pub mod fetcher;
pub mod systems;
pub mod types;

pub use fetcher::start_detail_worker;
pub use types::{DetailChannels, DetailCommand, DetailResult};

/// Plugin for satellite metadata lookups
pub struct DetailsPlugin;

impl Plugin for DetailsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_detail_worker)
            .add_systems(Update, systems::process_detail_results);
    }
}

fn setup_detail_worker(mut commands: Commands) {
    let channels = start_detail_worker();
    println!("[INIT] detail worker started");
    commands.insert_resource(channels);
}
