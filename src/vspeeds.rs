use serde::{Deserialize, Serialize};

use crate::types::{FlapsPosition, GearPosition, LandingGear, Sensors};

const GREEN_DOT_MARGIN: f32 = 30.0;
const PITCH_TOLERANCE: f32 = 2.0;
const THRUST_TOLERANCE: f32 = 0.1;

// Crude configuration guess from airspeed alone
pub fn estimate_flaps(ias_knots: f32) -> FlapsPosition {
    match ias_knots < 180.0 {
        true => FlapsPosition::Conf3,
        false => FlapsPosition::Retracted,
    }
}

pub fn vls(flaps: FlapsPosition) -> f32 {
    match flaps {
        FlapsPosition::Retracted => 115.0,
        FlapsPosition::Conf1 => 105.0,
        FlapsPosition::Conf2 => 95.0,
        FlapsPosition::Conf3 => 85.0,
        FlapsPosition::ConfFull => 80.0,
    }
}

pub fn vmax(flaps: FlapsPosition, gear: GearPosition, altitude_ft: f32) -> f32 {
    if gear == GearPosition::Down {
        220.0
    } else if flaps != FlapsPosition::Retracted {
        250.0
    } else if altitude_ft < 10000.0 {
        250.0
    } else {
        320.0
    }
}

/// Reference speeds in knots. V1, VR, V2 and VAPP are entered by the crew, never computed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VSpeeds {
    pub v1: f32,
    pub vr: f32,
    pub v2: f32,
    pub vapp: f32,
    pub vls: f32,
    pub vmax: f32,
    pub green_dot: f32,
    pub display_takeoff_speeds: bool,
    pub display_approach_speeds: bool,
}

impl VSpeeds {
    pub fn compute(&mut self, sensors: &Sensors, flaps: FlapsPosition, gear: &LandingGear) {
        self.vls = vls(flaps);
        self.vmax = vmax(flaps, gear.position, sensors.altitude_ft);
        self.green_dot = self.vls + GREEN_DOT_MARGIN;
    }

    pub fn set_takeoff(&mut self, v1: f32, vr: f32, v2: f32) {
        self.v1 = v1;
        self.vr = vr;
        self.v2 = v2;
        self.display_takeoff_speeds = true;
    }

    pub fn set_approach(&mut self, vapp: f32) {
        self.vapp = vapp;
        self.display_approach_speeds = true;
    }
}

/// Backup speed scale, pitch and thrust targets flown when airspeed is unreliable
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BussData {
    pub active: bool,
    pub target_pitch_min: f32,
    pub target_pitch_max: f32,
    pub target_thrust_min: f32,
    pub target_thrust_max: f32,
    pub pitch_too_low: bool,
    pub pitch_too_high: bool,
    pub thrust_too_low: bool,
    pub thrust_too_high: bool,
}

impl BussData {
    pub fn update(
        &mut self,
        active: bool,
        sensors: &Sensors,
        flaps: FlapsPosition,
        gear: &LandingGear,
        thrust: f32,
    ) {
        if !active {
            *self = Self::default();
            return;
        }

        let clean = flaps == FlapsPosition::Retracted && gear.position == GearPosition::Up;
        let (pitch, thrust_band) = if clean && sensors.altitude_ft > 15000.0 {
            ((2.0, 5.0), (0.65, 0.85))
        } else if clean {
            ((5.0, 12.0), (0.85, 0.95))
        } else if gear.position == GearPosition::Down {
            ((2.0, 7.0), (0.50, 0.70))
        } else {
            ((3.0, 8.0), (0.55, 0.75))
        };

        self.active = true;
        self.target_pitch_min = pitch.0;
        self.target_pitch_max = pitch.1;
        self.target_thrust_min = thrust_band.0;
        self.target_thrust_max = thrust_band.1;
        self.pitch_too_low = sensors.pitch_deg < pitch.0 - PITCH_TOLERANCE;
        self.pitch_too_high = sensors.pitch_deg > pitch.1 + PITCH_TOLERANCE;
        self.thrust_too_low = thrust < thrust_band.0 - THRUST_TOLERANCE;
        self.thrust_too_high = thrust > thrust_band.1 + THRUST_TOLERANCE;
    }
}
