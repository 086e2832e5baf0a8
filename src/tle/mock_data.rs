//! Known-good TLE fixtures for tests.

#[cfg(test)]
pub const ISS_LINE1: &str =
    "1 25544U 98067A   24226.56250000  .00007211  00000-0  13379-3 0  9991";
#[cfg(test)]
pub const ISS_LINE2: &str =
    "2 25544  51.6422 266.4643 0007888 121.4429 238.6624 15.49494792423450";

// Vanguard 1, the canonical SGP4 verification object.
#[cfg(test)]
pub const VANGUARD_LINE1: &str =
    "1 00005U 58002B   00179.78495062  .00000023  00000-3  28098-4 0  4756";
#[cfg(test)]
pub const VANGUARD_LINE2: &str =
    "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667";
