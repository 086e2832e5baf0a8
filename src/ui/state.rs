//! UI state: screens, views, selection, and the typed command event.

use bevy::prelude::*;

/// Top-level screens. The login gate only checks that both fields are
/// non-empty; it is a placeholder, not a security boundary.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppScreen {
    #[default]
    Login,
    Operations,
}

/// The two operations views behind the tab switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Globe,
    CameraMap,
}

#[derive(Resource)]
pub struct ViewState {
    pub active: ActiveView,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active: ActiveView::Globe,
        }
    }
}

/// Marker for the 3D camera whose viewport gets cropped around the panels.
#[derive(Component)]
pub struct MainCamera;

/// Login form fields plus the denial flag.
#[derive(Resource, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub denied: bool,
}

/// Satellite highlighted in the sidebar; drives the detail panel.
#[derive(Resource, Default)]
pub struct SelectedSatellite {
    pub norad: Option<u32>,
}

/// Blocking notification raised when the feed load fails. There is no
/// retry; the message stays up for the session.
#[derive(Resource, Default)]
pub struct FeedNotice {
    pub message: Option<String>,
}

/// Typed commands produced by the view layer and consumed by a single
/// update function, keeping view wiring out of the pipeline.
#[derive(Event, Debug, Clone)]
pub enum UiCommand {
    Authenticate { username: String, password: String },
    SwitchView(ActiveView),
    SelectSatellite(u32),
    CloseDetails,
}

/// Any non-empty username/password pair passes the gate.
pub fn credentials_accepted(username: &str, password: &str) -> bool {
    !username.trim().is_empty() && !password.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_accepts_any_non_empty_pair() {
        assert!(credentials_accepted("operator", "hunter2"));
        assert!(credentials_accepted("a", "b"));
    }

    #[test]
    fn gate_rejects_blank_fields() {
        assert!(!credentials_accepted("", "hunter2"));
        assert!(!credentials_accepted("operator", ""));
        assert!(!credentials_accepted("   ", "hunter2"));
    }
}
