//! Detail lookup payload types and worker channel structures

use bevy::prelude::*;
use serde::Deserialize;
use std::sync::{
    Arc, Mutex,
    mpsc::{Receiver, Sender},
};

use crate::registry::{SatelliteMetadata, tracking_link};

/// Commands for the detail worker thread. The URL is built by the sender so
/// the worker stays free of configuration.
#[derive(Debug)]
pub enum DetailCommand {
    Fetch { norad: u32, url: String },
}

/// Results from the detail worker thread. `Unresolved` covers every failure
/// mode (network, non-OK status, malformed payload); the drain system maps
/// it to placeholder metadata.
#[derive(Debug)]
pub enum DetailResult {
    Resolved {
        norad: u32,
        metadata: SatelliteMetadata,
    },
    Unresolved {
        norad: u32,
        error: String,
    },
}

/// Resource containing channels for communicating with the detail worker thread
#[derive(Resource)]
pub struct DetailChannels {
    pub cmd_tx: Sender<DetailCommand>,
    pub res_rx: Arc<Mutex<Receiver<DetailResult>>>,
}

/// Wire shape of the detail endpoint: a wrapper object with an optional
/// nested record. Every field is optional; absences become placeholders.
#[derive(Debug, Deserialize)]
pub struct DetailPayload {
    pub satellite: Option<DetailRecord>,
}

#[derive(Debug, Deserialize)]
pub struct DetailRecord {
    pub country: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "launchDate")]
    pub launch_date: Option<String>,
}

/// Lookup endpoint for one catalog number.
pub fn detail_url(base: &str, norad: u32, key: &str) -> String {
    format!("{}/{}/0/0/0/1/&apiKey={}", base.trim_end_matches('/'), norad, key)
}

/// Map a parsed payload to metadata, filling absent fields with the
/// documented placeholders.
pub fn metadata_from_payload(norad: u32, payload: &DetailPayload) -> SatelliteMetadata {
    let record = payload.satellite.as_ref();
    let field = |value: Option<&String>| {
        value
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown")
            .to_string()
    };
    SatelliteMetadata {
        owner: field(record.and_then(|r| r.country.as_ref())),
        purpose: field(record.and_then(|r| r.description.as_ref())),
        frequency: "N/A".to_string(),
        launch_date: field(record.and_then(|r| r.launch_date.as_ref())),
        link: tracking_link(norad),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_maps_to_metadata() {
        let payload: DetailPayload = serde_json::from_str(
            r#"{"satellite":{"country":"USA","description":"Earth observation","launchDate":"2013-02-11"}}"#,
        )
        .unwrap();
        let metadata = metadata_from_payload(39084, &payload);
        assert_eq!(metadata.owner, "USA");
        assert_eq!(metadata.purpose, "Earth observation");
        assert_eq!(metadata.launch_date, "2013-02-11");
        assert_eq!(metadata.frequency, "N/A");
        assert!(metadata.link.ends_with("s=39084"));
    }

    #[test]
    fn absent_fields_become_placeholders() {
        let payload: DetailPayload =
            serde_json::from_str(r#"{"satellite":{"country":"France"}}"#).unwrap();
        let metadata = metadata_from_payload(7, &payload);
        assert_eq!(metadata.owner, "France");
        assert_eq!(metadata.purpose, "Unknown");
        assert_eq!(metadata.launch_date, "Unknown");
    }

    #[test]
    fn missing_record_becomes_all_placeholders() {
        let payload: DetailPayload = serde_json::from_str(r#"{}"#).unwrap();
        let metadata = metadata_from_payload(7, &payload);
        assert_eq!(metadata.owner, "Unknown");
        assert_eq!(metadata.purpose, "Unknown");
    }

    #[test]
    fn malformed_payload_fails_to_parse() {
        assert!(serde_json::from_str::<DetailPayload>(r#"{"satellite": 42}"#).is_err());
        assert!(serde_json::from_str::<DetailPayload>("not json").is_err());
    }

    #[test]
    fn url_embeds_norad_and_key() {
        let url = detail_url("https://api.example.com/details/", 25544, "KEY");
        assert_eq!(url, "https://api.example.com/details/25544/0/0/0/1/&apiKey=KEY");
    }
}
