//! User interface module
//!
//! Screen state, the typed command dispatch, and the egui-based view layer.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub mod commands;
pub mod map;
pub mod panels;
pub mod state;
pub mod systems;

pub use state::{AppScreen, MainCamera, UiCommand};

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppScreen>()
            .init_resource::<state::ViewState>()
            .init_resource::<state::LoginForm>()
            .init_resource::<state::SelectedSatellite>()
            .init_resource::<state::FeedNotice>()
            .add_event::<UiCommand>()
            .add_systems(
                EguiPrimaryContextPass,
                (
                    systems::login_ui.run_if(in_state(AppScreen::Login)),
                    systems::operations_ui.run_if(in_state(AppScreen::Operations)),
                ),
            )
            .add_systems(Update, commands::apply_ui_commands);
    }
}
