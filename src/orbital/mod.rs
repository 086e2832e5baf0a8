//! Orbital mechanics module
//!
//! This module handles orbital calculations, coordinate transformations,
//! the scene projection, and time management for satellite propagation.

use bevy::prelude::*;

pub mod coordinates;
pub mod propagation;
pub mod scene;
pub mod time;

pub use coordinates::{GeodeticPoint, gstime, teme_to_geodetic};
pub use propagation::minutes_since_epoch;
pub use scene::{sample_track, scene_position, to_scene_position};
pub use time::{SimulationTime, advance_simulation_clock};

/// Plugin for orbital mechanics and time management
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationTime>()
            .add_systems(Update, advance_simulation_clock);
    }
}
