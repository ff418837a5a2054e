use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LateralMode {
    Manual,
    Heading,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalMode {
    Manual,
    VerticalSpeed,
    Altitude,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutopilotState {
    pub spd_mode: bool,
    pub hdg_mode: bool,
    pub alt_mode: bool,
    pub vs_mode: bool,
    pub autothrust: bool,

    pub target_spd_knots: f32,
    pub target_hdg_deg: f32,
    pub target_alt_ft: f32,
    pub target_vs_fpm: f32,

    pub was_active_last_frame: bool,
}

impl Default for AutopilotState {
    fn default() -> Self {
        Self {
            spd_mode: false,
            hdg_mode: false,
            alt_mode: false,
            vs_mode: false,
            autothrust: false,
            target_spd_knots: 250.0,
            target_hdg_deg: 0.0,
            target_alt_ft: 10000.0,
            target_vs_fpm: 0.0,
            was_active_last_frame: false,
        }
    }
}

impl AutopilotState {
    pub fn engaged(&self) -> bool {
        self.spd_mode || self.hdg_mode || self.alt_mode || self.vs_mode
    }

    pub fn lateral_mode(&self) -> LateralMode {
        match self.hdg_mode {
            true => LateralMode::Heading,
            false => LateralMode::Manual,
        }
    }

    // Altitude hold wins over vertical speed when both are selected
    pub fn vertical_mode(&self) -> VerticalMode {
        if self.alt_mode {
            VerticalMode::Altitude
        } else if self.vs_mode {
            VerticalMode::VerticalSpeed
        } else {
            VerticalMode::Manual
        }
    }

    pub fn autothrust_engaged(&self) -> bool {
        self.autothrust && self.spd_mode
    }

    // Consumes the previous frame's state, returns true on the disconnect edge
    pub fn detect_disconnect(&mut self) -> bool {
        let active = self.engaged();
        let disconnected = self.was_active_last_frame && !active;
        self.was_active_last_frame = active;
        disconnected
    }

    /// Selects modes from a comma separated list such as `spd,alt,athr`
    pub fn engage(&mut self, modes: &str) -> Result<(), ()> {
        for mode in modes.split(',').map(|m| m.trim()).filter(|m| !m.is_empty()) {
            match mode {
                "spd" => self.spd_mode = true,
                "hdg" => self.hdg_mode = true,
                "alt" => self.alt_mode = true,
                "vs" => self.vs_mode = true,
                "athr" => self.autothrust = true,
                _ => return Err(()),
            }
        }
        Ok(())
    }
}
