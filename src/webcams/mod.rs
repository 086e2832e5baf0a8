//! Webcam directory module
//!
//! Optional webcam listing for the 2D camera map. Without a configured key,
//! or on any fetch failure, the built-in sample cameras are used instead;
//! the view never shows an error.

use bevy::prelude::*;

pub mod fetcher;
pub mod systems;
pub mod types;

pub use fetcher::start_webcam_worker;
pub use types::{WebcamChannels, WebcamCommand, WebcamDirectory, WebcamEntry, WebcamResult};

use crate::ui::state::AppScreen;

/// Plugin for the webcam directory
pub struct WebcamPlugin;

impl Plugin for WebcamPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebcamDirectory>()
            .add_systems(Startup, setup_webcam_worker)
            .add_systems(OnEnter(AppScreen::Operations), systems::request_webcams)
            .add_systems(Update, systems::process_webcam_results);
    }
}

fn setup_webcam_worker(mut commands: Commands) {
    let channels = start_webcam_worker();
    println!("[INIT] webcam worker started");
    commands.insert_resource(channels);
}
