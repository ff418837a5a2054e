use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// x: roll, y: pitch, z: yaw
pub type Axes = Vector3<f32>;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PilotInput {
    pub pitch: f32,  // stick, -1..1
    pub roll: f32,   // stick, -1..1
    pub thrust: f32, // levers, 0 idle, 0.5 climb, 1 TOGA
}

impl Default for PilotInput {
    fn default() -> Self {
        Self { pitch: 0.0, roll: 0.0, thrust: 0.5 }
    }
}

impl PilotInput {
    pub fn axes(&self) -> Axes {
        Axes::new(self.roll, self.pitch, 0.0)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Surfaces {
    pub elevator_deg: f32,
    pub aileron_deg: f32,
    pub rudder_deg: f32,
}

impl Surfaces {
    pub fn axes(&self) -> Axes {
        Axes::new(self.aileron_deg, self.elevator_deg, self.rudder_deg)
    }
}

impl From<Axes> for Surfaces {
    fn from(axes: Axes) -> Self {
        Self { elevator_deg: axes.y, aileron_deg: axes.x, rudder_deg: axes.z }
    }
}
