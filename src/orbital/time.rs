//! Simulation clock driving propagation and track sampling.

use bevy::prelude::*;
use chrono::{DateTime, Duration, Utc};

/// Current simulated UTC plus a speed-up factor. Defaults to wall clock at 1x.
#[derive(Resource)]
pub struct SimulationTime {
    pub current_utc: DateTime<Utc>,
    pub time_scale: f32,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self {
            current_utc: Utc::now(),
            time_scale: 1.0,
        }
    }
}

impl SimulationTime {
    /// Snap back to wall clock at 1x.
    pub fn reset_to_now(&mut self) {
        self.current_utc = Utc::now();
        self.time_scale = 1.0;
    }
}

/// Advance the simulated clock by the scaled frame delta.
pub fn advance_simulation_clock(time: Res<Time>, mut sim_time: ResMut<SimulationTime>) {
    let scaled_secs = (time.delta_secs_f64() * sim_time.time_scale as f64).max(0.0);
    let nanos = (scaled_secs * 1.0e9).round() as i64;
    if nanos != 0 {
        sim_time.current_utc = sim_time.current_utc + Duration::nanoseconds(nanos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tracks_wall_clock() {
        let sim_time = SimulationTime::default();
        assert_eq!(sim_time.time_scale, 1.0);
        assert!((Utc::now() - sim_time.current_utc).num_seconds().abs() < 5);
    }

    #[test]
    fn reset_restores_unit_scale() {
        let mut sim_time = SimulationTime {
            current_utc: Utc::now() - Duration::hours(2),
            time_scale: 250.0,
        };
        sim_time.reset_to_now();
        assert_eq!(sim_time.time_scale, 1.0);
        assert!((Utc::now() - sim_time.current_utc).num_seconds().abs() < 5);
    }
}
