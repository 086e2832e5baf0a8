//! TLE (Two-Line Element) feed module
//!
//! Fetches the plaintext satellite feed on a worker thread, parses it into
//! name/line1/line2 triplets, and loads the registry.

use bevy::prelude::*;

pub mod fetcher;
pub mod mock_data;
pub mod parser;
pub mod systems;
pub mod types;

pub use fetcher::start_feed_worker;
pub use types::{FeedChannels, FeedCommand, FeedResult, FeedStatus, TleSet};

use crate::ui::state::AppScreen;

/// Plugin for TLE feed loading
pub struct TlePlugin;

impl Plugin for TlePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FeedStatus>()
            .add_systems(Startup, setup_feed_worker)
            .add_systems(OnEnter(AppScreen::Operations), systems::request_feed)
            .add_systems(Update, systems::process_feed_results);
    }
}

/// Setup system to start the feed worker
fn setup_feed_worker(mut commands: Commands) {
    let channels = start_feed_worker();
    println!("[INIT] TLE feed worker started");
    commands.insert_resource(channels);
}
