use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sensors {
    pub ias_knots: f32,
    pub aoa_deg: f32,
    pub nz: f32,
    pub altitude_ft: f32,
    pub vs_fpm: f32,
    pub mach: f32,
    pub tat_c: f32,
    pub pitch_deg: f32,
    pub roll_deg: f32,
    pub heading_deg: f32, // magnetic, [0, 360)

    // Low-pass filtered flap effects, a lever change must not step the dynamics
    pub smoothed_flaps_lift_bonus: f32,
    pub smoothed_flaps_drag_mult: f32,
}

impl Default for Sensors {
    fn default() -> Self {
        Self {
            ias_knots: 250.0,
            aoa_deg: 3.0,
            nz: 1.0,
            altitude_ft: 10000.0,
            vs_fpm: 0.0,
            mach: 0.45,
            tat_c: -10.0,
            pitch_deg: 0.0,
            roll_deg: 0.0,
            heading_deg: 0.0,
            smoothed_flaps_lift_bonus: 0.0,
            smoothed_flaps_drag_mult: 1.0,
        }
    }
}
