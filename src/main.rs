use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

mod config;
mod details;
mod orbital;
mod registry;
mod satellite;
mod tle;
mod ui;
mod webcams;

use config::TrackerConfig;
use details::DetailsPlugin;
use orbital::OrbitalPlugin;
use registry::SatelliteRegistry;
use satellite::SatellitePlugin;
use tle::TlePlugin;
use ui::{MainCamera, UiPlugin};
use webcams::WebcamPlugin;

/// The globe is a unit sphere; satellites orbit on a shell starting at 1.01.
const GLOBE_RADIUS: f32 = 1.0;
const ATMOSPHERE_RADIUS: f32 = 1.01;

/// Setup scene: globe, atmosphere shell, lighting, and the orbit camera.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(AmbientLight {
        brightness: 120.0,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(GLOBE_RADIUS).mesh().ico(5).unwrap())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.01, 0.05, 0.07),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Name::new("Globe"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(ATMOSPHERE_RADIUS).mesh().ico(5).unwrap())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.0, 1.0, 1.0, 0.08),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            ..default()
        })),
        Name::new("Atmosphere"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            ..default()
        },
        Transform::from_xyz(5.0, 3.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: 0.01,
            far: 100.0,
            ..default()
        }),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: Some(3.0),
            ..default()
        },
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Orbitdeck Command Center".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    app.add_plugins(EguiPlugin {
        enable_multipass_for_primary_context: true,
    });
    app.add_plugins(PanOrbitCameraPlugin);

    let config = TrackerConfig::from_env();
    app.insert_resource(SatelliteRegistry::with_cap(config.sample_cap));
    app.insert_resource(config);

    app.add_plugins(OrbitalPlugin);
    app.add_plugins(TlePlugin);
    app.add_plugins(DetailsPlugin);
    app.add_plugins(WebcamPlugin);
    app.add_plugins(SatellitePlugin);
    app.add_plugins(UiPlugin);

    app.add_systems(Startup, setup);

    app.run();
}
