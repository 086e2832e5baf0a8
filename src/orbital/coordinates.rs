//! Coordinate transformations: sidereal time and TEME -> geodetic.

use chrono::{DateTime, Utc};
use std::f64::consts::{PI, TAU};

/// Mean Earth radius used by the scene height exaggeration.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const WGS84_A_KM: f64 = 6378.137;
const WGS84_F: f64 = 1.0 / 298.257223563;

/// Sub-satellite point: latitude/longitude in degrees, height above the
/// ellipsoid in km. Derived per frame, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub height_km: f64,
}

/// Greenwich Mean Sidereal Time in radians (IAU 1982 polynomial).
///
/// The rotation angle between the inertial TEME frame and the Earth-fixed
/// frame; absolute phase matters here, so this is the full polynomial
/// rather than a rotation-rate approximation.
pub fn gstime(t: DateTime<Utc>) -> f64 {
    let jd = t.timestamp() as f64 / 86400.0
        + (t.timestamp_subsec_nanos() as f64) / (86400.0 * 1.0e9)
        + 2440587.5;
    let tut = (jd - 2451545.0) / 36525.0;
    let gmst_sec = 67310.54841
        + tut * (876600.0 * 3600.0 + 8640184.812866 + tut * (0.093104 - tut * 6.2e-6));
    // seconds of sidereal time -> radians (240 sidereal seconds per degree)
    (gmst_sec.rem_euclid(86400.0) * PI / 43200.0).rem_euclid(TAU)
}

/// Convert a TEME position (km) at the given sidereal angle to geodetic
/// coordinates, recovering latitude and height iteratively over the WGS84
/// flattening.
pub fn teme_to_geodetic(position_km: [f64; 3], gmst: f64) -> GeodeticPoint {
    let [x, y, z] = position_km;
    let r = (x * x + y * y).sqrt();
    let e2 = WGS84_F * (2.0 - WGS84_F);

    let longitude = wrap_neg_pos_pi(y.atan2(x) - gmst);
    let mut latitude = z.atan2(r);
    let mut c = 1.0;
    for _ in 0..10 {
        let phi = latitude;
        c = 1.0 / (1.0 - e2 * phi.sin() * phi.sin()).sqrt();
        latitude = (z + WGS84_A_KM * c * e2 * phi.sin()).atan2(r);
        if (latitude - phi).abs() < 1e-10 {
            break;
        }
    }
    let height_km = r / latitude.cos() - WGS84_A_KM * c;

    GeodeticPoint {
        latitude_deg: latitude.to_degrees(),
        longitude_deg: longitude.to_degrees(),
        height_km,
    }
}

/// Wrap an angle to (-PI, PI].
fn wrap_neg_pos_pi(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU);
    wrapped - PI
}
