//! Satellite scene module
//!
//! Owns the marker entities and the per-frame render-sync pass that moves
//! them along their propagated orbits.

use bevy::prelude::*;

pub mod components;
pub mod systems;

pub use components::{GroundTrack, NoradId, Satellite};
pub use systems::{draw_ground_tracks, render_sync, spawn_missing_satellite_markers};

use crate::ui::state::AppScreen;

/// Plugin for satellite rendering and propagation sync
pub struct SatellitePlugin;

impl Plugin for SatellitePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_missing_satellite_markers,
                render_sync.after(spawn_missing_satellite_markers),
                draw_ground_tracks.after(render_sync),
            )
                .run_if(in_state(AppScreen::Operations)),
        );
    }
}
