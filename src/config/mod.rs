pub mod pathset;

use serde::{Deserialize, Serialize};

use pathset::{Error, Path, PathSet, Value};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Actuators {
    pub elevator_max: f32,
    pub aileron_max: f32,
    pub response_hz: f32,
    pub direct_response_hz: f32,
}

impl Default for Actuators {
    fn default() -> Self {
        Self { elevator_max: 25.0, aileron_max: 20.0, response_hz: 8.0, direct_response_hz: 12.0 }
    }
}

impl PathSet for Actuators {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "elevator-max" => self.elevator_max = value.parse()?,
            "aileron-max" => self.aileron_max = value.parse()?,
            "response-hz" => self.response_hz = value.parse()?,
            "direct-response-hz" => self.direct_response_hz = value.parse()?,
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Envelop {
    pub alpha_prot: f32,
    pub alpha_prot_exit: f32,
    pub alpha_prot_speed: f32,
    pub alpha_max: f32,
    pub alpha_floor: f32,
    pub alpha_floor_exit: f32,
    pub alpha_floor_speed: f32,
    pub max_bank: f32,
    pub vmo: f32,
    pub mmo: f32,
}

impl Default for Envelop {
    fn default() -> Self {
        Self {
            alpha_prot: 11.0,
            alpha_prot_exit: 9.0,
            alpha_prot_speed: 200.0,
            alpha_max: 15.0,
            alpha_floor: 14.0,
            alpha_floor_exit: 12.5,
            alpha_floor_speed: 160.0,
            max_bank: 67.0,
            vmo: 340.0,
            mmo: 0.82,
        }
    }
}

impl PathSet for Envelop {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "alpha-prot" => self.alpha_prot = value.parse()?,
            "alpha-prot-exit" => self.alpha_prot_exit = value.parse()?,
            "alpha-prot-speed" => self.alpha_prot_speed = value.parse()?,
            "alpha-max" => self.alpha_max = value.parse()?,
            "alpha-floor" => self.alpha_floor = value.parse()?,
            "alpha-floor-exit" => self.alpha_floor_exit = value.parse()?,
            "alpha-floor-speed" => self.alpha_floor_speed = value.parse()?,
            "max-bank" => self.max_bank = value.parse()?,
            "vmo" => self.vmo = value.parse()?,
            "mmo" => self.mmo = value.parse()?,
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Autopilot {
    pub max_bank: f32,
    pub heading_gain: f32,
    pub bank_gain: f32,
    pub altitude_gain: f32,
    pub max_vertical_speed: f32,
    pub altitude_pitch_gain: f32,
    pub vertical_speed_pitch_gain: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            max_bank: 25.0,
            heading_gain: 0.5,
            bank_gain: 0.04,
            altitude_gain: 2.0,
            max_vertical_speed: 2000.0,
            altitude_pitch_gain: 0.0004,
            vertical_speed_pitch_gain: 0.0008,
        }
    }
}

impl PathSet for Autopilot {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "max-bank" => self.max_bank = value.parse()?,
            "heading-gain" => self.heading_gain = value.parse()?,
            "bank-gain" => self.bank_gain = value.parse()?,
            "altitude-gain" => self.altitude_gain = value.parse()?,
            "max-vertical-speed" => self.max_vertical_speed = value.parse()?,
            "altitude-pitch-gain" => self.altitude_pitch_gain = value.parse()?,
            "vertical-speed-pitch-gain" => self.vertical_speed_pitch_gain = value.parse()?,
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Autothrust {
    pub kp: f32,
    pub ki: f32,
    pub i_limit: f32,
}

impl Default for Autothrust {
    fn default() -> Self {
        Self { kp: 0.006, ki: 0.001, i_limit: 0.3 }
    }
}

impl PathSet for Autothrust {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "kp" => self.kp = value.parse()?,
            "ki" => self.ki = value.parse()?,
            "i-limit" => self.i_limit = value.parse()?,
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VSpeeds {
    // Feed the real flap lever instead of estimating the configuration from airspeed
    pub use_flap_lever: bool,
}

impl PathSet for VSpeeds {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "use-flap-lever" => self.use_flap_lever = value.parse_or(true)?,
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub actuators: Actuators,
    pub envelop: Envelop,
    pub autopilot: Autopilot,
    pub autothrust: Autothrust,
    pub vspeeds: VSpeeds,
}

impl PathSet for Config {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "actuators" => self.actuators.set(path, value),
            "envelop" => self.envelop.set(path, value),
            "autopilot" => self.autopilot.set(path, value),
            "autothrust" => self.autothrust.set(path, value),
            "vspeeds" => self.vspeeds.set(path, value),
            _ => Err(Error::UnknownPath),
        }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_set_nested_path() {
        use super::pathset::{Error, PathSet};
        use super::Config;

        let mut config = Config::default();
        assert_eq!(config.assign("envelop.alpha-max=16.5"), Ok(()));
        assert_eq!(config.envelop.alpha_max, 16.5);
        assert_eq!(config.assign("actuators.direct-response-hz=10"), Ok(()));
        assert_eq!(config.actuators.direct_response_hz, 10.0);
        assert_eq!(config.assign("vspeeds.use-flap-lever"), Ok(()));
        assert!(config.vspeeds.use_flap_lever);

        assert_eq!(config.assign("envelop.alpha-min=1"), Err(Error::UnknownPath));
        assert_eq!(config.assign("fcs.pids=1"), Err(Error::UnknownPath));
        assert_eq!(config.assign("autothrust.kp=x"), Err(Error::InvalidValue));
    }

    #[test]
    fn test_serialize_kebab_case() {
        use super::Config;

        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["envelop"]["alpha-floor-exit"], 12.5);
        assert_eq!(json["actuators"]["elevator-max"], 25.0);
        assert_eq!(json["vspeeds"]["use-flap-lever"], false);
    }
}
