//! Components for satellite scene entities

use bevy::prelude::*;

/// Component marker for satellite entities
#[derive(Component)]
pub struct Satellite;

/// Component storing NORAD ID for a satellite entity
#[derive(Component, Copy, Clone, Debug)]
pub struct NoradId(pub u32);

/// The satellite's forward ground track in scene coordinates, fully
/// replaced on every successful render-sync pass.
#[derive(Component, Default)]
pub struct GroundTrack {
    pub points: Vec<Vec3>,
}
