use serde::{Deserialize, Serialize};

use crate::config::pathset::{Error, Path, PathSet, Value};

macro_rules! faults {
    ($($(#[$attr:meta])* $field:ident: $name:literal),+ $(,)?) => {
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub struct Faults {
            $($(#[$attr])* pub $field: bool),+
        }

        impl Faults {
            pub const NAMES: &'static [&'static str] = &[$($name),+];

            pub fn active(&self) -> impl Iterator<Item = &'static str> {
                let flags = [$(($name, self.$field)),+];
                flags.into_iter().filter_map(|(name, failed)| if failed { Some(name) } else { None })
            }
        }

        impl PathSet for Faults {
            fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
                match path.str()? {
                    $($name => self.$field = value.parse_or(true)?,)+
                    _ => return Err(Error::UnknownPath),
                }
                Ok(())
            }
        }
    };
}

faults! {
    adr1_fail: "adr1-fail",
    elac1_fail: "elac1-fail",
    elac2_fail: "elac2-fail",
    sec1_fail: "sec1-fail",
    elevator_jam: "elevator-jam",
    aileron_jam: "aileron-jam",
    overspeed_sensor_bad: "overspeed-sensor-bad",
    alpha_floor_fail: "alpha-floor-fail",
    trim_runaway: "trim-runaway",
    green_hyd_fail: "green-hyd-fail",
    blue_hyd_fail: "blue-hyd-fail",
    yellow_hyd_fail: "yellow-hyd-fail",

    /// Loss of every bus
    total_electrical_fail: "total-electrical-fail",
    /// Single AC bus
    partial_electrical_fail: "partial-electrical-fail",
    /// Unreliable airspeed
    pitot_blocked: "pitot-blocked",

    eng1_n1_sensor_fail: "eng1-n1-sensor-fail",
    eng1_n2_sensor_fail: "eng1-n2-sensor-fail",
    eng1_egt_sensor_fail: "eng1-egt-sensor-fail",
    eng2_n1_sensor_fail: "eng2-n1-sensor-fail",
    eng2_n2_sensor_fail: "eng2-n2-sensor-fail",
    eng2_egt_sensor_fail: "eng2-egt-sensor-fail",

    eng1_vibration_high: "eng1-vibration-high",
    eng2_vibration_high: "eng2-vibration-high",
    eng1_oil_pressure_low: "eng1-oil-pressure-low",
    eng2_oil_pressure_low: "eng2-oil-pressure-low",
    eng1_compressor_stall: "eng1-compressor-stall",
    eng2_compressor_stall: "eng2-compressor-stall",

    gen1_fail: "gen1-fail",
    gen2_fail: "gen2-fail",
    apu_gen_fail: "apu-gen-fail",
    bat1_fail: "bat1-fail",
    bat2_fail: "bat2-fail",
    ac_bus1_fail: "ac-bus1-fail",
    ac_bus2_fail: "ac-bus2-fail",
    rat_deployed: "rat-deployed",
    rat_fault: "rat-fault",

    green_eng1_pump_fail: "green-eng1-pump-fail",
    blue_elec_pump_fail: "blue-elec-pump-fail",
    yellow_eng1_pump_fail: "yellow-eng1-pump-fail",
    green_reservoir_low: "green-reservoir-low",
    blue_reservoir_low: "blue-reservoir-low",
    yellow_reservoir_low: "yellow-reservoir-low",

    elevator_left_actuator_fail: "elevator-left-actuator-fail",
    elevator_right_actuator_fail: "elevator-right-actuator-fail",
    aileron_left_actuator_fail: "aileron-left-actuator-fail",
    aileron_right_actuator_fail: "aileron-right-actuator-fail",
}
