//! Orbital propagation utilities

use chrono::{DateTime, Utc};

/// Minutes between the TLE epoch and a simulation timestamp, the time
/// argument SGP4 propagates over. Negative when the timestamp precedes
/// the epoch.
pub fn minutes_since_epoch(sim_utc: DateTime<Utc>, epoch: DateTime<Utc>) -> f64 {
    let delta = sim_utc - epoch;
    delta.num_seconds() as f64 / 60.0 + (delta.subsec_nanos() as f64) / 60.0 / 1.0e9
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn whole_and_fractional_minutes() {
        let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let one_hour = Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
        assert!((minutes_since_epoch(one_hour, epoch) - 60.0).abs() < 1e-10);

        let ninety_secs = epoch + chrono::Duration::seconds(90);
        assert!((minutes_since_epoch(ninety_secs, epoch) - 1.5).abs() < 1e-10);
    }

    #[test]
    fn before_epoch_is_negative() {
        let epoch = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        assert!((minutes_since_epoch(earlier, epoch) + 120.0).abs() < 1e-10);
    }

    #[test]
    fn subsecond_precision_survives() {
        let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let at = epoch + chrono::Duration::seconds(90) + chrono::Duration::nanoseconds(500_000_000);
        let expected = 1.5 + 0.5 / 60.0;
        assert!((minutes_since_epoch(at, epoch) - expected).abs() < 1e-12);
    }
}
