use super::law::ControlLaw;
use crate::algorithm::approach;
use crate::config;
use crate::types::{Axes, Surfaces};

pub struct Actuators {
    config: config::Actuators,
    surfaces: Surfaces,
}

impl Actuators {
    pub fn new(config: config::Actuators) -> Self {
        Self { config, surfaces: Surfaces::default() }
    }

    pub fn surfaces(&self) -> Surfaces {
        self.surfaces
    }

    // Maximum deflection per axis, rudder is not driven
    pub fn limits(&self) -> Axes {
        Axes::new(self.config.aileron_max, self.config.elevator_max, 0.0)
    }

    pub fn response_hz(&self, law: ControlLaw) -> f32 {
        match law {
            ControlLaw::Direct => self.config.direct_response_hz,
            _ => self.config.response_hz,
        }
    }

    // Command in degrees, returns the new positions
    pub fn drive(&mut self, command: Axes, law: ControlLaw, dt: f32) -> Surfaces {
        let rate = self.response_hz(law);
        let limits = self.limits();
        let current = self.surfaces.axes();
        let position = current.zip_zip_map(&command, &limits, |value, target, limit| {
            approach(value, target, rate, dt).clamp(-limit, limit)
        });
        self.surfaces = Surfaces::from(position);
        self.surfaces
    }
}
