//! Panel render helpers for the operations screen.

use bevy::prelude::*;
use bevy_egui::egui::{self, Align2, Color32};
use chrono::SecondsFormat;

use crate::orbital::SimulationTime;
use crate::registry::{MetadataState, SatelliteRegistry};
use crate::tle::types::FeedStatus;
use crate::ui::state::{ActiveView, SelectedSatellite, UiCommand, ViewState};

/// Top bar: view tabs, the UTC clock, and the time-scale control.
pub fn tab_bar(
    ui: &mut egui::Ui,
    view: &ViewState,
    sim_time: &mut SimulationTime,
    out: &mut EventWriter<UiCommand>,
) {
    ui.horizontal(|ui| {
        ui.strong("ORBITDECK");
        ui.separator();

        if ui
            .selectable_label(view.active == ActiveView::Globe, "SATELLITE TRACKING")
            .clicked()
        {
            out.write(UiCommand::SwitchView(ActiveView::Globe));
        }
        if ui
            .selectable_label(view.active == ActiveView::CameraMap, "GLOBAL CAMERAS")
            .clicked()
        {
            out.write(UiCommand::SwitchView(ActiveView::CameraMap));
        }

        ui.separator();
        ui.strong("UTC:");
        ui.monospace(
            sim_time
                .current_utc
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        );

        ui.separator();
        ui.label("Scale:");
        ui.add(egui::Slider::new(&mut sim_time.time_scale, 1.0..=1000.0));
        if ui.button("Now").clicked() {
            sim_time.reset_to_now();
        }
    });
}

/// Sidebar list of tracked satellites; clicking a row opens the detail panel.
pub fn satellite_list(
    ui: &mut egui::Ui,
    registry: &SatelliteRegistry,
    status: &FeedStatus,
    selected: &SelectedSatellite,
    out: &mut EventWriter<UiCommand>,
) {
    ui.heading("Tracked satellites");
    ui.separator();

    if registry.is_empty() {
        if status.requested && status.loaded_utc.is_none() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading satellites...");
            });
        } else {
            ui.label("No satellites loaded.");
        }
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for record in registry.iter() {
                let active = selected.norad == Some(record.norad_id);
                let label = format!("{}\nNORAD: {}", record.name, record.norad_id);
                if ui.selectable_label(active, label).clicked() {
                    out.write(UiCommand::SelectSatellite(record.norad_id));
                }
            }
        });
}

/// Floating detail panel for the selected satellite.
pub fn detail_window(
    ctx: &egui::Context,
    registry: &SatelliteRegistry,
    selected: &SelectedSatellite,
    out: &mut EventWriter<UiCommand>,
) {
    let Some(norad) = selected.norad else { return };
    let Some(record) = registry.get(norad) else {
        return;
    };
    let metadata = record.metadata();

    egui::Window::new(record.name.clone())
        .id(egui::Id::new("satellite_details"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::RIGHT_TOP, [-16.0, 48.0])
        .show(ctx, |ui| {
            egui::Grid::new("detail_rows").num_columns(2).show(ui, |ui| {
                ui.label("Operator");
                ui.strong(&metadata.owner);
                ui.end_row();
                ui.label("Purpose");
                ui.strong(&metadata.purpose);
                ui.end_row();
                ui.label("NORAD ID");
                ui.strong(record.norad_id.to_string());
                ui.end_row();
                ui.label("Frequency");
                ui.strong(&metadata.frequency);
                ui.end_row();
                ui.label("Launch Date");
                ui.strong(&metadata.launch_date);
                ui.end_row();
            });
            if record.metadata_state() == MetadataState::Pending {
                ui.colored_label(Color32::GRAY, "Details pending...");
            }
            ui.separator();
            ui.horizontal(|ui| {
                ui.hyperlink_to("N2YO Tracking", &metadata.link);
                ui.hyperlink_to("TLE Source", "https://celestrak.org");
            });
            if ui.button("Close").clicked() {
                out.write(UiCommand::CloseDetails);
            }
        });
}

/// Bottom status strip.
pub fn status_bar(
    ui: &mut egui::Ui,
    registry: &SatelliteRegistry,
    status: &FeedStatus,
) {
    ui.horizontal(|ui| {
        ui.label(format!(
            "Satellites: {}/{}",
            registry.len(),
            registry.sample_cap()
        ));
        ui.separator();
        match status.loaded_utc {
            Some(at) => {
                ui.label(format!(
                    "Feed loaded {}",
                    at.to_rfc3339_opts(SecondsFormat::Secs, true)
                ));
            }
            None => {
                ui.label("Feed not loaded");
            }
        }
    });
}

/// Blocking load-failure notice; stays up for the session, no retry.
pub fn feed_notice(ctx: &egui::Context, message: &str) {
    egui::Window::new("LOAD FAILURE")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.colored_label(Color32::RED, message);
            ui.label("Check the connection and restart the session.");
        });
}
