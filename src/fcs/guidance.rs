use crate::algorithm::angle_error;
use crate::config;
use crate::types::{AutopilotState, Axes, LateralMode, Sensors, VerticalMode};

pub struct Guidance {
    config: config::Autopilot,
}

impl Guidance {
    pub fn new(config: config::Autopilot) -> Self {
        Self { config }
    }

    fn roll(&self, target_heading: f32, sensors: &Sensors) -> f32 {
        let max_bank = self.config.max_bank;
        let heading_error = angle_error(target_heading, sensors.heading_deg);
        let target_bank = (heading_error * self.config.heading_gain).clamp(-max_bank, max_bank);
        ((target_bank - sensors.roll_deg) * self.config.bank_gain).clamp(-1.0, 1.0)
    }

    fn pitch_for_altitude(&self, target_altitude: f32, sensors: &Sensors) -> f32 {
        let max_vs = self.config.max_vertical_speed;
        let target_vs = ((target_altitude - sensors.altitude_ft) * self.config.altitude_gain)
            .clamp(-max_vs, max_vs);
        ((target_vs - sensors.vs_fpm) * self.config.altitude_pitch_gain).clamp(-1.0, 1.0)
    }

    fn pitch_for_vertical_speed(&self, target_vs: f32, sensors: &Sensors) -> f32 {
        ((target_vs - sensors.vs_fpm) * self.config.vertical_speed_pitch_gain).clamp(-1.0, 1.0)
    }

    // Engaged modes replace the stick on their axis
    pub fn command(&self, input: Axes, autopilot: &AutopilotState, sensors: &Sensors) -> Axes {
        let mut output = input;
        if autopilot.lateral_mode() == LateralMode::Heading {
            output.x = self.roll(autopilot.target_hdg_deg, sensors);
        }
        output.y = match autopilot.vertical_mode() {
            VerticalMode::Altitude => self.pitch_for_altitude(autopilot.target_alt_ft, sensors),
            VerticalMode::VerticalSpeed => {
                self.pitch_for_vertical_speed(autopilot.target_vs_fpm, sensors)
            }
            VerticalMode::Manual => input.y,
        };
        output
    }
}
