//! Render-sync systems: marker spawning, per-frame position and track
//! updates, and ground-track drawing.

use bevy::prelude::*;

use crate::orbital::scene::{sample_track, to_scene_position};
use crate::orbital::time::SimulationTime;
use crate::registry::SatelliteRegistry;
use crate::satellite::components::{GroundTrack, NoradId, Satellite};
use crate::ui::state::{ActiveView, ViewState};

const MARKER_RADIUS: f32 = 0.005;
const MARKER_COLOR: Color = Color::srgb(0.0, 1.0, 1.0);
const TRACK_COLOR: Color = Color::srgba(0.0, 1.0, 1.0, 0.3);

/// Spawn a marker entity for every registry record that lacks one.
pub fn spawn_missing_satellite_markers(
    mut registry: ResMut<SatelliteRegistry>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for record in registry.iter_mut() {
        if record.entity.is_some() {
            continue;
        }
        let mesh = Sphere::new(MARKER_RADIUS).mesh().ico(3).unwrap();
        let entity = commands
            .spawn((
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(materials.add(StandardMaterial {
                    emissive: MARKER_COLOR.to_linear() * 8.0,
                    ..Default::default()
                })),
                Satellite,
                NoradId(record.norad_id),
                GroundTrack::default(),
                // Parked just above the surface until the first sync pass.
                Transform::from_translation(Vec3::X * 1.01),
            ))
            .id();
        record.entity = Some(entity);
    }
}

/// Per-tick render sync: pull every record through the transformer and the
/// track sampler, writing the results into the scene. When propagation
/// yields nothing for the current instant the previous position and track
/// are left untouched (stale-hold), never hidden or removed.
pub fn render_sync(
    registry: Res<SatelliteRegistry>,
    sim_time: Res<SimulationTime>,
    mut markers: Query<(&NoradId, &mut Transform, &mut GroundTrack), With<Satellite>>,
) {
    let now = sim_time.current_utc;
    for (norad, mut transform, mut track) in markers.iter_mut() {
        let Some(record) = registry.get(norad.0) else {
            continue;
        };
        let Some(position) = to_scene_position(&record.elements, now) else {
            continue;
        };
        transform.translation = position;
        track.points = sample_track(&record.elements, now);
    }
}

/// Draw each satellite's track as a line strip while the globe view is active.
pub fn draw_ground_tracks(
    view: Res<ViewState>,
    tracks: Query<&GroundTrack, With<Satellite>>,
    mut gizmos: Gizmos,
) {
    if view.active != ActiveView::Globe {
        return;
    }
    for track in tracks.iter() {
        if track.points.len() < 2 {
            continue;
        }
        gizmos.linestrip(track.points.iter().copied(), TRACK_COLOR);
    }
}
