//! Single consumer for UI commands.

use bevy::prelude::*;

use crate::ui::state::{
    AppScreen, LoginForm, SelectedSatellite, UiCommand, ViewState, credentials_accepted,
};

/// Apply every command emitted by the view layer this frame.
pub fn apply_ui_commands(
    mut events: EventReader<UiCommand>,
    mut next_screen: ResMut<NextState<AppScreen>>,
    mut view: ResMut<ViewState>,
    mut login: ResMut<LoginForm>,
    mut selected: ResMut<SelectedSatellite>,
) {
    for command in events.read() {
        match command {
            UiCommand::Authenticate { username, password } => {
                if credentials_accepted(username, password) {
                    login.denied = false;
                    next_screen.set(AppScreen::Operations);
                } else {
                    login.denied = true;
                }
            }
            UiCommand::SwitchView(target) => {
                view.active = *target;
            }
            UiCommand::SelectSatellite(norad) => {
                selected.norad = Some(*norad);
            }
            UiCommand::CloseDetails => {
                selected.norad = None;
            }
        }
    }
}
