use core::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::aircraft::{EngineState, GearPosition, LandingGear};
use super::autopilot::AutopilotState;
use super::control::PilotInput;
use super::sensor::Sensors;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartupScenario {
    #[display(fmt = "ground")]
    GroundParked,
    #[display(fmt = "cruise-10000ft")]
    Cruise10000ft,
    #[display(fmt = "cruise-37000ft")]
    Cruise37000ft,
}

impl Default for StartupScenario {
    fn default() -> Self {
        Self::Cruise10000ft
    }
}

impl FromStr for StartupScenario {
    type Err = ();

    fn from_str(string: &str) -> Result<Self, ()> {
        match string {
            "ground" => Ok(Self::GroundParked),
            "cruise-10000ft" => Ok(Self::Cruise10000ft),
            "cruise-37000ft" => Ok(Self::Cruise37000ft),
            _ => Err(()),
        }
    }
}

struct Preset {
    ias: f32,
    aoa: f32,
    altitude: f32,
    mach: f32,
    tat: f32,
    thrust: f32,
    gear: GearPosition,
    on_ground: bool,
    engines_running: bool,
}

impl StartupScenario {
    fn preset(self) -> Preset {
        match self {
            Self::GroundParked => Preset {
                ias: 0.0,
                aoa: 0.0,
                altitude: 0.0,
                mach: 0.0,
                tat: 15.0,
                thrust: 0.0,
                gear: GearPosition::Down,
                on_ground: true,
                engines_running: false,
            },
            Self::Cruise10000ft => Preset {
                ias: 250.0,
                aoa: 3.0,
                altitude: 10000.0,
                mach: 0.45,
                tat: -10.0,
                thrust: 0.60,
                gear: GearPosition::Up,
                on_ground: false,
                engines_running: true,
            },
            Self::Cruise37000ft => Preset {
                ias: 280.0,
                aoa: 2.0,
                altitude: 37000.0,
                mach: 0.78,
                tat: -54.0,
                thrust: 0.75,
                gear: GearPosition::Up,
                on_ground: false,
                engines_running: true,
            },
        }
    }

    pub fn apply(
        self,
        sensors: &mut Sensors,
        pilot: &mut PilotInput,
        autopilot: &mut AutopilotState,
        gear: &mut LandingGear,
        engines: &mut EngineState,
    ) {
        let preset = self.preset();
        *sensors = Sensors {
            ias_knots: preset.ias,
            aoa_deg: preset.aoa,
            nz: 1.0,
            altitude_ft: preset.altitude,
            vs_fpm: 0.0,
            mach: preset.mach,
            tat_c: preset.tat,
            pitch_deg: 0.0,
            roll_deg: 0.0,
            heading_deg: 0.0,
            ..*sensors
        };
        *pilot = PilotInput { pitch: 0.0, roll: 0.0, thrust: preset.thrust };
        autopilot.target_alt_ft = preset.altitude;
        autopilot.target_spd_knots = preset.ias;
        gear.position = preset.gear;
        gear.target_position = preset.gear;
        gear.transit_timer = 0.0;
        gear.weight_on_wheels = preset.on_ground;
        engines.engine1_running = preset.engines_running;
        engines.engine2_running = preset.engines_running;
    }
}
