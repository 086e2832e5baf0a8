//! Runtime configuration for feeds and API keys.

use bevy::prelude::*;

/// Sentinel value meaning "no real key configured"; triggers the built-in
/// webcam fallback instead of a network fetch.
pub const PLACEHOLDER_KEY: &str = "YOUR_API_KEY_HERE";

/// Configuration for the external feeds this session talks to.
#[derive(Resource, Clone, Debug)]
pub struct TrackerConfig {
    /// Plaintext TLE feed (name/line1/line2 triplets).
    pub tle_feed_url: String,
    /// Maximum satellites admitted per load session; excess feed entries are ignored.
    pub sample_cap: usize,
    /// Satellite-detail lookup endpoint, keyed by NORAD id.
    pub detail_api_url: String,
    pub detail_api_key: String,
    /// Webcam listing endpoint. Optional; a placeholder key selects the samples.
    pub webcam_api_url: String,
    pub webcam_api_key: String,
    pub webcam_limit: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tle_feed_url: "https://celestrak.org/NORAD/elements/gp.php?GROUP=active&FORMAT=tle"
                .to_string(),
            sample_cap: 50,
            detail_api_url: "https://www.n2yo.com/rest/v1/satellite/details".to_string(),
            detail_api_key: PLACEHOLDER_KEY.to_string(),
            webcam_api_url: "https://api.windy.com/api/webcams/v2/list".to_string(),
            webcam_api_key: PLACEHOLDER_KEY.to_string(),
            webcam_limit: 20,
        }
    }
}

impl TrackerConfig {
    /// Defaults with API keys taken from the environment when present.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("ORBITDECK_DETAIL_API_KEY") {
            if !key.trim().is_empty() {
                config.detail_api_key = key;
            }
        }
        if let Ok(key) = std::env::var("ORBITDECK_WEBCAM_API_KEY") {
            if !key.trim().is_empty() {
                config.webcam_api_key = key;
            }
        }
        config
    }

    /// Whether a real webcam key is configured; otherwise the sample set is used.
    pub fn webcam_key_configured(&self) -> bool {
        !self.webcam_api_key.trim().is_empty() && self.webcam_api_key != PLACEHOLDER_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cap_is_fifty() {
        let config = TrackerConfig::default();
        assert_eq!(config.sample_cap, 50);
    }

    #[test]
    fn placeholder_key_disables_webcam_fetch() {
        let mut config = TrackerConfig::default();
        assert!(!config.webcam_key_configured());
        config.webcam_api_key = "abc123".to_string();
        assert!(config.webcam_key_configured());
    }
}
