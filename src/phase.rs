use derive_more::Display;
#[cfg(not(any(test, feature = "std")))]
use micromath::F32Ext;
use serde::Serialize;

use crate::types::{EngineState, LandingGear, Sensors};

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightPhase {
    #[display(fmt = "PREFLIGHT")]
    Preflight,
    #[display(fmt = "TAXI")]
    Taxi,
    #[display(fmt = "TAKEOFF")]
    Takeoff,
    #[display(fmt = "CLIMB")]
    Climb,
    #[display(fmt = "CRUISE")]
    Cruise,
    #[display(fmt = "DESCENT")]
    Descent,
    #[display(fmt = "APPROACH")]
    Approach,
    #[display(fmt = "LANDING")]
    Landing,
    #[display(fmt = "ROLLOUT")]
    Rollout,
}

impl Default for FlightPhase {
    fn default() -> Self {
        Self::Preflight
    }
}

const ROTATION_SPEED: f32 = 80.0;
const CLIMB_RATE: f32 = 500.0;
const TERMINAL_ALTITUDE: f32 = 3000.0;
const CRUISE_ALTITUDE: f32 = 10000.0;

pub fn detect(sensors: &Sensors, gear: &LandingGear, engines: &EngineState) -> FlightPhase {
    let on_ground = gear.weight_on_wheels;
    let running = engines.running_count() > 0;
    let (ias, altitude, vs) = (sensors.ias_knots, sensors.altitude_ft, sensors.vs_fpm);
    let initial_climb = altitude < TERMINAL_ALTITUDE && vs > CLIMB_RATE;

    if on_ground && !running {
        FlightPhase::Preflight
    } else if on_ground && ias < ROTATION_SPEED {
        FlightPhase::Taxi
    } else if (on_ground || initial_climb) && ias >= ROTATION_SPEED {
        FlightPhase::Takeoff
    } else if vs > CLIMB_RATE && altitude >= TERMINAL_ALTITUDE {
        FlightPhase::Climb
    } else if vs.abs() <= CLIMB_RATE && altitude > CRUISE_ALTITUDE {
        FlightPhase::Cruise
    } else if vs < -CLIMB_RATE && altitude > CRUISE_ALTITUDE {
        FlightPhase::Descent
    } else if vs < -CLIMB_RATE && altitude < TERMINAL_ALTITUDE && !on_ground {
        FlightPhase::Approach
    } else if on_ground && ias >= ROTATION_SPEED {
        FlightPhase::Rollout
    } else {
        FlightPhase::Cruise
    }
}

#[cfg(test)]
mod test {
    use crate::types::{EngineState, LandingGear, Sensors};

    use super::{detect, FlightPhase};

    fn phase(ias: f32, altitude: f32, vs: f32, on_ground: bool) -> FlightPhase {
        let sensors = Sensors { ias_knots: ias, altitude_ft: altitude, vs_fpm: vs, ..Default::default() };
        let gear = LandingGear { weight_on_wheels: on_ground, ..Default::default() };
        detect(&sensors, &gear, &EngineState::default())
    }

    #[test]
    fn test_ground_phases() {
        let gear = LandingGear { weight_on_wheels: true, ..Default::default() };
        let parked = Sensors { ias_knots: 0.0, altitude_ft: 0.0, ..Default::default() };
        let engines = EngineState { engine1_running: false, engine2_running: false, ..Default::default() };
        assert_eq!(detect(&parked, &gear, &engines), FlightPhase::Preflight);

        assert_eq!(phase(20.0, 0.0, 0.0, true), FlightPhase::Taxi);
        assert_eq!(phase(120.0, 0.0, 0.0, true), FlightPhase::Takeoff);
    }

    #[test]
    fn test_airborne_phases() {
        assert_eq!(phase(160.0, 1500.0, 1500.0, false), FlightPhase::Takeoff);
        assert_eq!(phase(280.0, 8000.0, 2000.0, false), FlightPhase::Climb);
        assert_eq!(phase(450.0, 37000.0, 100.0, false), FlightPhase::Cruise);
        assert_eq!(phase(300.0, 20000.0, -1500.0, false), FlightPhase::Descent);
        assert_eq!(phase(150.0, 1500.0, -700.0, false), FlightPhase::Approach);
    }

    #[test]
    fn test_fallback_to_cruise() {
        // level between terminal area and cruise altitude
        assert_eq!(phase(250.0, 5000.0, 0.0, false), FlightPhase::Cruise);
        // descending below 10000 ft but above the terminal area
        assert_eq!(phase(250.0, 6000.0, -1200.0, false), FlightPhase::Cruise);
        // slow level flight low down
        assert_eq!(phase(140.0, 1000.0, 0.0, false), FlightPhase::Cruise);
        assert_eq!(FlightPhase::Cruise.to_string(), "CRUISE");
    }
}
