//! Webcam data types, wire payloads, and the built-in fallback set

use bevy::prelude::*;
use serde::Deserialize;
use std::sync::{
    Arc, Mutex,
    mpsc::{Receiver, Sender},
};

/// One camera marker on the 2D map.
#[derive(Clone, Debug, PartialEq)]
pub struct WebcamEntry {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub preview_url: String,
}

/// Commands for the webcam worker thread
#[derive(Debug)]
pub enum WebcamCommand {
    FetchList { url: String },
}

/// Results from the webcam worker thread
#[derive(Debug)]
pub enum WebcamResult {
    Listed(Vec<WebcamEntry>),
    Failed { error: String },
}

/// Resource containing channels for communicating with the webcam worker thread
#[derive(Resource)]
pub struct WebcamChannels {
    pub cmd_tx: Sender<WebcamCommand>,
    pub res_rx: Arc<Mutex<Receiver<WebcamResult>>>,
}

/// Cameras currently shown on the map.
#[derive(Resource, Default)]
pub struct WebcamDirectory {
    pub entries: Vec<WebcamEntry>,
    /// Whether the entries are the built-in samples rather than live data.
    pub from_fallback: bool,
}

/// Built-in cameras used when no key is configured or the listing fails.
pub fn sample_webcams() -> Vec<WebcamEntry> {
    vec![
        WebcamEntry {
            name: "Auckland".to_string(),
            latitude: -36.8485,
            longitude: 174.7633,
            preview_url: offline_preview(),
        },
        WebcamEntry {
            name: "New York".to_string(),
            latitude: 40.7128,
            longitude: -74.0060,
            preview_url: offline_preview(),
        },
    ]
}

fn offline_preview() -> String {
    "https://via.placeholder.com/320x180/11151f/00ffff?text=CAM+OFFLINE".to_string()
}

/// Wire shape of the webcam listing. Everything is optional; entries
/// without coordinates are dropped, other absences get defaults.
#[derive(Debug, Deserialize)]
pub struct WebcamListPayload {
    pub result: Option<WebcamListResult>,
}

#[derive(Debug, Deserialize)]
pub struct WebcamListResult {
    pub webcams: Option<Vec<WebcamPayload>>,
}

#[derive(Debug, Deserialize)]
pub struct WebcamPayload {
    pub title: Option<String>,
    pub location: Option<WebcamLocation>,
    pub image: Option<WebcamImage>,
}

#[derive(Debug, Deserialize)]
pub struct WebcamLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct WebcamImage {
    pub current: Option<WebcamImageSet>,
}

#[derive(Debug, Deserialize)]
pub struct WebcamImageSet {
    pub preview: Option<String>,
}

/// Flatten a parsed listing into map entries.
pub fn entries_from_payload(payload: &WebcamListPayload) -> Vec<WebcamEntry> {
    let Some(webcams) = payload.result.as_ref().and_then(|r| r.webcams.as_ref()) else {
        return Vec::new();
    };
    webcams
        .iter()
        .filter_map(|cam| {
            let location = cam.location.as_ref()?;
            let latitude = location.latitude.filter(|v| v.is_finite())?;
            let longitude = location.longitude.filter(|v| v.is_finite())?;
            Some(WebcamEntry {
                name: cam
                    .title
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .unwrap_or("Unnamed camera")
                    .to_string(),
                latitude,
                longitude,
                preview_url: cam
                    .image
                    .as_ref()
                    .and_then(|i| i.current.as_ref())
                    .and_then(|c| c.preview.clone())
                    .unwrap_or_else(offline_preview),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_set_has_at_least_two_located_cameras() {
        let samples = sample_webcams();
        assert!(samples.len() >= 2);
        for cam in &samples {
            assert!(cam.latitude.is_finite() && cam.longitude.is_finite());
            assert!(!cam.name.is_empty());
            assert!(!cam.preview_url.is_empty());
        }
    }

    #[test]
    fn listing_payload_flattens_to_entries() {
        let payload: WebcamListPayload = serde_json::from_str(
            r#"{"result":{"webcams":[
                {"title":"Harbour","location":{"latitude":-36.84,"longitude":174.76},
                 "image":{"current":{"preview":"https://cams.example/1.jpg"}}},
                {"title":"No location"}
            ]}}"#,
        )
        .unwrap();
        let entries = entries_from_payload(&payload);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Harbour");
        assert_eq!(entries[0].preview_url, "https://cams.example/1.jpg");
    }

    #[test]
    fn missing_title_and_preview_get_defaults() {
        let payload: WebcamListPayload = serde_json::from_str(
            r#"{"result":{"webcams":[{"location":{"latitude":1.0,"longitude":2.0}}]}}"#,
        )
        .unwrap();
        let entries = entries_from_payload(&payload);
        assert_eq!(entries[0].name, "Unnamed camera");
        assert!(entries[0].preview_url.contains("OFFLINE"));
    }

    #[test]
    fn empty_or_absent_listing_yields_no_entries() {
        let payload: WebcamListPayload = serde_json::from_str(r#"{}"#).unwrap();
        assert!(entries_from_payload(&payload).is_empty());
    }
}
