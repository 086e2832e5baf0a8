//! Projection of geodetic coordinates onto the render sphere, plus the
//! forward ground-track sampler.
//!
//! The globe is a unit sphere; satellites sit on a shell starting at 1.01
//! with height exaggerated by a fixed factor. The axis convention below is
//! load-bearing: longitude is offset by 180 degrees and latitude is measured
//! from the pole, so any sign change visibly misplaces satellites against
//! the globe.

use bevy::math::Vec3;
use chrono::{DateTime, Duration, Utc};

use crate::orbital::coordinates::{EARTH_RADIUS_KM, GeodeticPoint, gstime, teme_to_geodetic};
use crate::orbital::propagation::minutes_since_epoch;
use crate::registry::OrbitalElements;

/// Samples per track: now plus 30 future steps.
pub const TRACK_SAMPLES: usize = 31;
/// Spacing between track samples (30 minutes), for a 15-hour forward window.
pub const TRACK_STEP_MS: i64 = 1_800_000;

const SHELL_RADIUS: f64 = 1.01;
const HEIGHT_SCALE: f64 = 0.1;

/// Distance from the origin for a satellite at the given height.
pub fn scene_radius(height_km: f64) -> f64 {
    SHELL_RADIUS + height_km / EARTH_RADIUS_KM * HEIGHT_SCALE
}

/// Map geodetic coordinates to the render sphere.
pub fn scene_position(geo: &GeodeticPoint) -> Vec3 {
    let radius = scene_radius(geo.height_km);
    let colatitude = (90.0 - geo.latitude_deg).to_radians();
    let theta = (geo.longitude_deg + 180.0).to_radians();
    Vec3::new(
        -(radius * colatitude.sin() * theta.cos()) as f32,
        (radius * colatitude.cos()) as f32,
        (radius * colatitude.sin() * theta.sin()) as f32,
    )
}

/// Propagate elements to `at` and project the result. `None` when
/// propagation fails (degenerate elements, decayed orbit) or produces a
/// non-finite state; callers skip the sample instead of rendering garbage.
pub fn to_scene_position(elements: &OrbitalElements, at: DateTime<Utc>) -> Option<Vec3> {
    let minutes = minutes_since_epoch(at, elements.epoch_utc());
    let state = elements
        .constants()
        .propagate(sgp4::MinutesSinceEpoch(minutes))
        .ok()?;
    let [x, y, z] = state.position;
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return None;
    }
    let geo = teme_to_geodetic(state.position, gstime(at));
    if !geo.latitude_deg.is_finite() || !geo.longitude_deg.is_finite() || !geo.height_km.is_finite()
    {
        return None;
    }
    Some(scene_position(&geo))
}

/// Timestamps the track sampler evaluates, strictly increasing from `now`.
pub fn track_instants(now: DateTime<Utc>) -> impl Iterator<Item = DateTime<Utc>> {
    (0..TRACK_SAMPLES as i64).map(move |step| now + Duration::milliseconds(step * TRACK_STEP_MS))
}

/// Sample the forward ground track. Undefined samples are omitted, not
/// padded or interpolated; the result stays ordered in time. Recomputed
/// from scratch on every call.
pub fn sample_track(elements: &OrbitalElements, now: DateTime<Utc>) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(TRACK_SAMPLES);
    for at in track_instants(now) {
        if let Some(point) = to_scene_position(elements, at) {
            points.push(point);
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tle::mock_data::{ISS_LINE1, ISS_LINE2};

    fn iss_elements() -> OrbitalElements {
        let (norad, elements) =
            OrbitalElements::from_tle(Some("ISS (ZARYA)"), ISS_LINE1, ISS_LINE2)
                .expect("ISS TLE should parse");
        assert_eq!(norad, 25544);
        elements
    }

    #[test]
    fn golden_projection_at_origin() {
        // lat 0, lon 0, height 0 -> theta = 180 deg, colatitude = 90 deg,
        // so x = -(r * 1 * cos(180 deg)) = +r.
        let point = scene_position(&GeodeticPoint {
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            height_km: 0.0,
        });
        assert!((point.x - 1.01).abs() < 1e-6);
        assert!(point.y.abs() < 1e-6);
        assert!(point.z.abs() < 1e-6);
    }

    #[test]
    fn golden_projection_at_the_antimeridian() {
        // lon 180 -> theta = 360 deg -> x = -r.
        let point = scene_position(&GeodeticPoint {
            latitude_deg: 0.0,
            longitude_deg: 180.0,
            height_km: 0.0,
        });
        assert!((point.x + 1.01).abs() < 1e-6);
        assert!(point.y.abs() < 1e-6);
        assert!(point.z.abs() < 1e-5);
    }

    #[test]
    fn projected_distance_matches_height() {
        for &(lat, lon, height) in &[
            (0.0, 0.0, 0.0),
            (51.6, -122.3, 420.0),
            (-36.8, 174.7, 550.0),
            (82.5, 10.0, 35786.0),
        ] {
            let point = scene_position(&GeodeticPoint {
                latitude_deg: lat,
                longitude_deg: lon,
                height_km: height,
            });
            assert!((point.length() as f64 - scene_radius(height)).abs() < 1e-5);
        }
    }

    #[test]
    fn radius_grows_monotonically_with_height() {
        let mut previous = 0.0_f32;
        for height in [0.0, 200.0, 400.0, 2000.0, 20000.0] {
            let point = scene_position(&GeodeticPoint {
                latitude_deg: 45.0,
                longitude_deg: 45.0,
                height_km: height,
            });
            assert!(point.length() > previous);
            previous = point.length();
        }
    }

    #[test]
    fn poles_land_on_the_y_axis() {
        let north = scene_position(&GeodeticPoint {
            latitude_deg: 90.0,
            longitude_deg: 0.0,
            height_km: 0.0,
        });
        assert!((north.y - 1.01).abs() < 1e-6);
        assert!(north.x.abs() < 1e-6 && north.z.abs() < 1e-6);

        let south = scene_position(&GeodeticPoint {
            latitude_deg: -90.0,
            longitude_deg: 0.0,
            height_km: 0.0,
        });
        assert!((south.y + 1.01).abs() < 1e-6);
    }

    #[test]
    fn iss_projects_onto_the_low_orbit_shell() {
        let elements = iss_elements();
        let point =
            to_scene_position(&elements, elements.epoch_utc()).expect("propagation at epoch");
        // ISS orbits around 420 km; well inside the LEO band of the shell.
        assert!(point.length() > 1.01 && point.length() < 1.05);
    }

    #[test]
    fn successful_samples_are_always_finite() {
        let elements = iss_elements();
        for hours in -120..120 {
            let at = elements.epoch_utc() + Duration::hours(hours);
            if let Some(point) = to_scene_position(&elements, at) {
                assert!(point.x.is_finite() && point.y.is_finite() && point.z.is_finite());
                assert!(point.length() > 1.0);
            }
        }
    }

    #[test]
    fn track_instants_step_by_thirty_minutes() {
        let now = Utc::now();
        let instants: Vec<_> = track_instants(now).collect();
        assert_eq!(instants.len(), TRACK_SAMPLES);
        for pair in instants.windows(2) {
            let gap = pair[1] - pair[0];
            assert_eq!(gap.num_milliseconds(), TRACK_STEP_MS);
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn track_is_bounded_and_full_for_a_healthy_orbit() {
        let elements = iss_elements();
        let track = sample_track(&elements, elements.epoch_utc());
        assert!(track.len() <= TRACK_SAMPLES);
        // A current TLE propagates cleanly across the whole 15-hour window.
        assert_eq!(track.len(), TRACK_SAMPLES);
    }
}
