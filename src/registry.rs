//! In-memory registry of tracked satellites for the session.
//!
//! Records are created from TLE triplets, keyed uniquely by NORAD id, and
//! live until teardown. Metadata arrives asynchronously and may stay in the
//! pending state forever; reads always yield usable values.

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;

use crate::tle::parser::parse_tle_epoch_to_utc;

/// Default per-session cap on admitted satellites.
pub const DEFAULT_SAMPLE_CAP: usize = 50;

/// Why a TLE triplet was not admitted to the registry.
#[derive(Debug)]
pub enum TleRejection {
    /// The line pair did not parse into a usable propagation model.
    Malformed(String),
    /// A record with this NORAD id already exists; the original is kept.
    DuplicateNorad(u32),
    /// The session cap is reached; excess feed entries are ignored.
    AtCapacity(usize),
}

impl fmt::Display for TleRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TleRejection::Malformed(reason) => write!(f, "malformed TLE pair: {}", reason),
            TleRejection::DuplicateNorad(norad) => {
                write!(f, "NORAD {} already registered", norad)
            }
            TleRejection::AtCapacity(cap) => write!(f, "registry at capacity ({})", cap),
        }
    }
}

impl std::error::Error for TleRejection {}

/// Parsed TLE pair: the SGP4 model plus its reference epoch.
/// Immutable once constructed; owned by exactly one [`SatelliteRecord`].
pub struct OrbitalElements {
    constants: sgp4::Constants,
    epoch_utc: DateTime<Utc>,
}

impl OrbitalElements {
    /// Parse a TLE line pair into a propagation model, returning the catalog
    /// number alongside. Any parse or model-construction failure is a
    /// [`TleRejection::Malformed`].
    pub fn from_tle(
        name: Option<&str>,
        line1: &str,
        line2: &str,
    ) -> Result<(u32, Self), TleRejection> {
        let norad = line1
            .get(2..7)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .ok_or_else(|| TleRejection::Malformed("no catalog number in line 1".into()))?;
        let epoch_utc = parse_tle_epoch_to_utc(line1)
            .ok_or_else(|| TleRejection::Malformed("unparseable epoch in line 1".into()))?;
        let elements = sgp4::Elements::from_tle(
            name.map(|n| n.to_string()),
            line1.as_bytes(),
            line2.as_bytes(),
        )
        .map_err(|e| TleRejection::Malformed(e.to_string()))?;
        let constants = sgp4::Constants::from_elements(&elements)
            .map_err(|e| TleRejection::Malformed(e.to_string()))?;
        Ok((norad, Self { constants, epoch_utc }))
    }

    pub fn constants(&self) -> &sgp4::Constants {
        &self.constants
    }

    pub fn epoch_utc(&self) -> DateTime<Utc> {
        self.epoch_utc
    }
}

/// Descriptive satellite metadata from the detail lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SatelliteMetadata {
    pub owner: String,
    pub purpose: String,
    pub frequency: String,
    pub launch_date: String,
    pub link: String,
}

impl SatelliteMetadata {
    /// Placeholder shown while the lookup is pending or after it failed.
    /// The tracking link is always derivable from the catalog number.
    pub fn placeholder(norad: u32) -> Self {
        Self {
            owner: "Unknown".to_string(),
            purpose: "Unknown".to_string(),
            frequency: "N/A".to_string(),
            launch_date: "Unknown".to_string(),
            link: tracking_link(norad),
        }
    }
}

/// External tracking page for a catalog number.
pub fn tracking_link(norad: u32) -> String {
    format!("https://www.n2yo.com/satellite/?s={}", norad)
}

/// Lifecycle of a record's metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetadataState {
    /// Lookup in flight; reads yield the placeholder.
    Pending,
    /// Lookup succeeded; protected against placeholder overwrites.
    Resolved,
    /// Lookup failed; placeholder values are final unless a real payload lands.
    Placeholder,
}

/// Outcome of a detail lookup, handed to [`SatelliteRegistry::attach_metadata`].
#[derive(Clone, Debug)]
pub enum MetadataUpdate {
    Resolved(SatelliteMetadata),
    Unresolved,
}

/// One tracked satellite. Elements are immutable after creation; the scene
/// entity is attached once the marker is spawned.
pub struct SatelliteRecord {
    pub name: String,
    pub norad_id: u32,
    pub elements: OrbitalElements,
    metadata: SatelliteMetadata,
    metadata_state: MetadataState,
    pub entity: Option<Entity>,
}

impl SatelliteRecord {
    /// Current metadata; the placeholder while the lookup is pending.
    pub fn metadata(&self) -> &SatelliteMetadata {
        &self.metadata
    }

    pub fn metadata_state(&self) -> MetadataState {
        self.metadata_state
    }
}

/// Session store of tracked satellites, preserving feed order.
#[derive(Resource)]
pub struct SatelliteRegistry {
    records: Vec<SatelliteRecord>,
    index: HashMap<u32, usize>,
    sample_cap: usize,
}

impl Default for SatelliteRegistry {
    fn default() -> Self {
        Self::with_cap(DEFAULT_SAMPLE_CAP)
    }
}

impl SatelliteRegistry {
    pub fn with_cap(sample_cap: usize) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            sample_cap,
        }
    }

    /// Parse a TLE pair and admit the satellite. Fails without side effects
    /// on malformed lines, duplicate catalog numbers, or a full registry.
    pub fn add_satellite(
        &mut self,
        name: &str,
        line1: &str,
        line2: &str,
    ) -> Result<&SatelliteRecord, TleRejection> {
        if self.records.len() >= self.sample_cap {
            return Err(TleRejection::AtCapacity(self.sample_cap));
        }
        let name = name.trim();
        let (norad_id, elements) = OrbitalElements::from_tle(Some(name), line1, line2)?;
        if self.index.contains_key(&norad_id) {
            return Err(TleRejection::DuplicateNorad(norad_id));
        }
        let record = SatelliteRecord {
            name: name.to_string(),
            norad_id,
            elements,
            metadata: SatelliteMetadata::placeholder(norad_id),
            metadata_state: MetadataState::Pending,
            entity: None,
        };
        let idx = self.records.len();
        self.index.insert(norad_id, idx);
        self.records.push(record);
        Ok(&self.records[idx])
    }

    /// Attach the outcome of a detail lookup. Idempotent: an identical
    /// payload leaves the record unchanged, and a placeholder outcome never
    /// downgrades a record that already resolved. Returns whether anything
    /// changed; `None` if the catalog number is unknown (result discarded).
    pub fn attach_metadata(&mut self, norad: u32, update: MetadataUpdate) -> Option<bool> {
        let record = self.get_mut(norad)?;
        match update {
            MetadataUpdate::Resolved(metadata) => {
                if record.metadata_state == MetadataState::Resolved
                    && record.metadata == metadata
                {
                    return Some(false);
                }
                record.metadata = metadata;
                record.metadata_state = MetadataState::Resolved;
                Some(true)
            }
            MetadataUpdate::Unresolved => {
                if record.metadata_state == MetadataState::Resolved {
                    return Some(false);
                }
                let changed = record.metadata_state != MetadataState::Placeholder;
                record.metadata = SatelliteMetadata::placeholder(norad);
                record.metadata_state = MetadataState::Placeholder;
                Some(changed)
            }
        }
    }

    pub fn get(&self, norad: u32) -> Option<&SatelliteRecord> {
        self.index.get(&norad).map(|&i| &self.records[i])
    }

    pub fn get_mut(&mut self, norad: u32) -> Option<&mut SatelliteRecord> {
        let i = *self.index.get(&norad)?;
        Some(&mut self.records[i])
    }

    /// Records in feed order.
    pub fn iter(&self) -> impl Iterator<Item = &SatelliteRecord> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SatelliteRecord> {
        self.records.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn sample_cap(&self) -> usize {
        self.sample_cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tle::mock_data::{ISS_LINE1, ISS_LINE2, VANGUARD_LINE1, VANGUARD_LINE2};

    #[test]
    fn admits_a_well_formed_pair() {
        let mut registry = SatelliteRegistry::default();
        let record = registry
            .add_satellite("ISS (ZARYA)", ISS_LINE1, ISS_LINE2)
            .expect("ISS TLE should parse");
        assert_eq!(record.norad_id, 25544);
        assert_eq!(record.name, "ISS (ZARYA)");
        assert_eq!(record.metadata_state(), MetadataState::Pending);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn pending_metadata_reads_as_placeholder() {
        let mut registry = SatelliteRegistry::default();
        registry
            .add_satellite("ISS (ZARYA)", ISS_LINE1, ISS_LINE2)
            .unwrap();
        let record = registry.get(25544).unwrap();
        assert_eq!(record.metadata().owner, "Unknown");
        assert_eq!(record.metadata().frequency, "N/A");
        assert!(record.metadata().link.contains("25544"));
    }

    #[test]
    fn rejects_malformed_lines_without_side_effects() {
        let mut registry = SatelliteRegistry::default();
        let result = registry.add_satellite("BROKEN", "1 garbage", "2 garbage");
        assert!(matches!(result, Err(TleRejection::Malformed(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn rejects_duplicate_norad() {
        let mut registry = SatelliteRegistry::default();
        registry
            .add_satellite("ISS (ZARYA)", ISS_LINE1, ISS_LINE2)
            .unwrap();
        let result = registry.add_satellite("ISS AGAIN", ISS_LINE1, ISS_LINE2);
        assert!(matches!(result, Err(TleRejection::DuplicateNorad(25544))));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(25544).unwrap().name, "ISS (ZARYA)");
    }

    #[test]
    fn enforces_the_session_cap() {
        let mut registry = SatelliteRegistry::with_cap(1);
        registry
            .add_satellite("ISS (ZARYA)", ISS_LINE1, ISS_LINE2)
            .unwrap();
        let result = registry.add_satellite("VANGUARD 1", VANGUARD_LINE1, VANGUARD_LINE2);
        assert!(matches!(result, Err(TleRejection::AtCapacity(1))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn preserves_feed_order() {
        let mut registry = SatelliteRegistry::default();
        registry
            .add_satellite("ISS (ZARYA)", ISS_LINE1, ISS_LINE2)
            .unwrap();
        registry
            .add_satellite("VANGUARD 1", VANGUARD_LINE1, VANGUARD_LINE2)
            .unwrap();
        let norads: Vec<u32> = registry.iter().map(|r| r.norad_id).collect();
        assert_eq!(norads, vec![25544, 5]);
    }

    #[test]
    fn metadata_attachment_is_idempotent() {
        let mut registry = SatelliteRegistry::default();
        registry
            .add_satellite("ISS (ZARYA)", ISS_LINE1, ISS_LINE2)
            .unwrap();
        let payload = SatelliteMetadata {
            owner: "USA/Russia".to_string(),
            purpose: "Crewed station".to_string(),
            frequency: "N/A".to_string(),
            launch_date: "1998-11-20".to_string(),
            link: tracking_link(25544),
        };
        assert_eq!(
            registry.attach_metadata(25544, MetadataUpdate::Resolved(payload.clone())),
            Some(true)
        );
        assert_eq!(
            registry.attach_metadata(25544, MetadataUpdate::Resolved(payload.clone())),
            Some(false)
        );
        assert_eq!(registry.get(25544).unwrap().metadata(), &payload);
    }

    #[test]
    fn placeholder_never_downgrades_a_resolved_record() {
        let mut registry = SatelliteRegistry::default();
        registry
            .add_satellite("ISS (ZARYA)", ISS_LINE1, ISS_LINE2)
            .unwrap();
        let payload = SatelliteMetadata {
            owner: "USA/Russia".to_string(),
            purpose: "Crewed station".to_string(),
            frequency: "N/A".to_string(),
            launch_date: "1998-11-20".to_string(),
            link: tracking_link(25544),
        };
        registry.attach_metadata(25544, MetadataUpdate::Resolved(payload.clone()));
        assert_eq!(
            registry.attach_metadata(25544, MetadataUpdate::Unresolved),
            Some(false)
        );
        let record = registry.get(25544).unwrap();
        assert_eq!(record.metadata_state(), MetadataState::Resolved);
        assert_eq!(record.metadata(), &payload);
    }

    #[test]
    fn failed_lookup_finalizes_the_placeholder() {
        let mut registry = SatelliteRegistry::default();
        registry
            .add_satellite("ISS (ZARYA)", ISS_LINE1, ISS_LINE2)
            .unwrap();
        assert_eq!(
            registry.attach_metadata(25544, MetadataUpdate::Unresolved),
            Some(true)
        );
        let record = registry.get(25544).unwrap();
        assert_eq!(record.metadata_state(), MetadataState::Placeholder);
        assert_eq!(record.metadata().owner, "Unknown");
    }

    #[test]
    fn unknown_norad_results_are_discarded() {
        let mut registry = SatelliteRegistry::default();
        assert_eq!(registry.attach_metadata(99999, MetadataUpdate::Unresolved), None);
    }
}
