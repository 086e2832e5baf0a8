//! Egui pass systems for the login and operations screens.

use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContext, EguiContexts, egui};
use bevy_egui::egui::Color32;

use crate::orbital::SimulationTime;
use crate::registry::SatelliteRegistry;
use crate::tle::types::FeedStatus;
use crate::ui::map;
use crate::ui::panels;
use crate::ui::state::{
    ActiveView, FeedNotice, LoginForm, MainCamera, SelectedSatellite, UiCommand, ViewState,
};
use crate::webcams::types::WebcamDirectory;

/// Credential gate. Any non-empty pair passes; empty fields get the
/// denial banner. Submitting emits a command rather than flipping state
/// here.
pub fn login_ui(
    mut contexts: EguiContexts,
    mut login: ResMut<LoginForm>,
    mut out: EventWriter<UiCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.heading("ORBITDECK COMMAND CENTER");
            ui.add_space(16.0);

            let user_edit = ui.add(
                egui::TextEdit::singleline(&mut login.username)
                    .hint_text("username")
                    .desired_width(220.0),
            );
            let pass_edit = ui.add(
                egui::TextEdit::singleline(&mut login.password)
                    .password(true)
                    .hint_text("password")
                    .desired_width(220.0),
            );

            ui.add_space(8.0);
            let submitted = ui.button("Log in").clicked()
                || ((user_edit.lost_focus() || pass_edit.lost_focus())
                    && ui.input(|i| i.key_pressed(egui::Key::Enter)));
            if submitted {
                out.write(UiCommand::Authenticate {
                    username: login.username.clone(),
                    password: login.password.clone(),
                });
            }

            if login.denied {
                ui.add_space(8.0);
                ui.colored_label(Color32::RED, "ACCESS DENIED: INVALID CREDENTIALS");
            }
        });
    });
}

/// Operations screen: tab bar, the active view's panels, the blocking feed
/// notice, and the 3D viewport crop around the egui panels.
pub fn operations_ui(
    mut contexts: EguiContexts,
    mut camera: Single<&mut Camera, (With<MainCamera>, Without<EguiContext>)>,
    window: Single<&Window, With<PrimaryWindow>>,
    registry: Res<SatelliteRegistry>,
    status: Res<FeedStatus>,
    notice: Res<FeedNotice>,
    view: Res<ViewState>,
    selected: Res<SelectedSatellite>,
    directory: Res<WebcamDirectory>,
    mut sim_time: ResMut<SimulationTime>,
    mut out: EventWriter<UiCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    let top = egui::TopBottomPanel::top("top_bar")
        .show(ctx, |ui| {
            panels::tab_bar(ui, &view, &mut sim_time, &mut out);
        })
        .response
        .rect
        .height();

    let bottom = egui::TopBottomPanel::bottom("status_bar")
        .show(ctx, |ui| {
            panels::status_bar(ui, &registry, &status);
        })
        .response
        .rect
        .height();

    let mut left = 0.0;
    match view.active {
        ActiveView::Globe => {
            left = egui::SidePanel::left("satellite_sidebar")
                .resizable(true)
                .default_width(260.0)
                .show(ctx, |ui| {
                    panels::satellite_list(ui, &registry, &status, &selected, &mut out);
                })
                .response
                .rect
                .width();
            panels::detail_window(ctx, &registry, &selected, &mut out);
        }
        ActiveView::CameraMap => {
            egui::CentralPanel::default().show(ctx, |ui| {
                map::draw_camera_map(ui, &directory);
            });
        }
    }

    if let Some(message) = notice.message.as_deref() {
        panels::feed_notice(ctx, message);
    }

    if view.active != ActiveView::Globe {
        camera.viewport = None;
        return;
    }

    // Scale from logical units to physical units and crop the 3D viewport
    // to the free space between the panels.
    let scale = window.scale_factor();
    let left_px = (left * scale) as u32;
    let top_px = (top * scale) as u32;
    let bottom_px = (bottom * scale) as u32;

    let pos = UVec2::new(left_px, top_px);
    let size = UVec2::new(
        window.physical_width().saturating_sub(left_px).max(1),
        window
            .physical_height()
            .saturating_sub(top_px + bottom_px)
            .max(1),
    );

    camera.viewport = Some(Viewport {
        physical_position: pos,
        physical_size: size,
        ..default()
    });
}
