use pid::Pid;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::types::AutopilotState;

const NEUTRAL_THRUST: f32 = 0.5;
const OUTPUT_LIMIT: f32 = 100.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThrustMode {
    Manual,
    AlphaFloor,
    Autothrust,
}

impl ThrustMode {
    // Autothrust > alpha floor TOGA > levers
    pub fn select(autopilot: &AutopilotState, alpha_floor: bool) -> Self {
        if autopilot.autothrust_engaged() {
            Self::Autothrust
        } else if alpha_floor {
            Self::AlphaFloor
        } else {
            Self::Manual
        }
    }
}

pub struct Autothrust {
    config: config::Autothrust,
    pid: Pid<f32>,
    integral: f32,
}

impl Autothrust {
    fn pid(config: &config::Autothrust) -> Pid<f32> {
        let (limit, i_limit) = (OUTPUT_LIMIT, config.i_limit);
        Pid::new(config.kp, config.ki, 0.0, limit, i_limit, limit, limit, 0.0)
    }

    pub fn new(config: config::Autothrust) -> Self {
        Self { pid: Self::pid(&config), config, integral: 0.0 }
    }

    pub fn reset(&mut self) {
        self.pid = Self::pid(&self.config);
        self.integral = 0.0;
    }

    pub fn integral(&self) -> f32 {
        self.integral
    }

    // Speed error drives a thrust demand in [0, 1] around a neutral setting
    pub fn command(&mut self, target_speed: f32, speed: f32, dt: f32) -> f32 {
        self.pid.setpoint = target_speed;
        self.pid.ki = self.config.ki * dt;
        let output = self.pid.next_control_output(speed);
        self.integral = output.i;
        (NEUTRAL_THRUST + output.p + output.i).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_thrust_mode_priority() {
        use super::ThrustMode;
        use crate::types::AutopilotState;

        let mut autopilot = AutopilotState::default();
        assert_eq!(ThrustMode::select(&autopilot, false), ThrustMode::Manual);
        assert_eq!(ThrustMode::select(&autopilot, true), ThrustMode::AlphaFloor);
        autopilot.autothrust = true;
        assert_eq!(ThrustMode::select(&autopilot, true), ThrustMode::AlphaFloor);
        autopilot.spd_mode = true;
        assert_eq!(ThrustMode::select(&autopilot, true), ThrustMode::Autothrust);
    }

    #[test]
    fn test_proportional_and_integral() {
        use super::Autothrust;

        let mut autothrust = Autothrust::new(Default::default());
        // 10 kt slow: 0.5 + 0.06 + 0.01 x 1s
        let thrust = autothrust.command(260.0, 250.0, 1.0);
        assert!((thrust - 0.57).abs() < 1e-5);

        for _ in 0..100 {
            autothrust.command(350.0, 250.0, 1.0);
        }
        assert!((autothrust.integral() - 0.3).abs() < 1e-5);
        assert_eq!(autothrust.command(350.0, 250.0, 1.0), 1.0);

        autothrust.reset();
        assert_eq!(autothrust.integral(), 0.0);
        assert!((autothrust.command(250.0, 260.0, 0.0) - 0.44).abs() < 1e-5);
    }
}
