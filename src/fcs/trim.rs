use crate::algorithm::approach;
use crate::types::aircraft::{TRIM_MAX, TRIM_MIN};
use crate::types::{AutopilotState, TrimSystem, VerticalMode};

const RUNAWAY_RATE: f32 = 0.5; // deg/s
const AUTO_TRIM_RATE: f32 = 0.3;
const AUTO_TRIM_GAIN: f32 = -2.0;

#[derive(Default)]
pub struct PitchTrim {
    runaway: bool,
}

impl PitchTrim {
    pub fn update(
        &mut self,
        trim: &mut TrimSystem,
        runaway: bool,
        autopilot: &AutopilotState,
        pitch_command: f32,
        dt: f32,
    ) {
        if runaway && !self.runaway {
            warn!("Pitch trim runaway from {:.1} deg", trim.pitch_trim_deg);
        }
        self.runaway = runaway;

        if runaway {
            trim.auto_trim = false;
            trim.set(trim.pitch_trim_deg + RUNAWAY_RATE * dt);
            return;
        }

        if trim.auto_trim && autopilot.vertical_mode() != VerticalMode::Manual {
            let target = pitch_command * AUTO_TRIM_GAIN;
            let degrees = approach(trim.pitch_trim_deg, target, AUTO_TRIM_RATE, dt);
            trim.pitch_trim_deg = degrees.clamp(TRIM_MIN, TRIM_MAX);
        }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_runaway() {
        use super::PitchTrim;
        use crate::types::{AutopilotState, TrimSystem};

        let mut pitch_trim = PitchTrim::default();
        let autopilot = AutopilotState::default();

        let mut trim = TrimSystem { pitch_trim_deg: -6.0, auto_trim: true };
        for _ in 0..1000 {
            pitch_trim.update(&mut trim, true, &autopilot, 0.0, 0.01);
        }
        assert!((trim.pitch_trim_deg - -1.0).abs() < 1e-3);
        assert!(!trim.auto_trim);

        // stops at the upper trim stop
        let mut trim = TrimSystem { pitch_trim_deg: 2.0, auto_trim: true };
        for _ in 0..1000 {
            pitch_trim.update(&mut trim, true, &autopilot, 0.0, 0.01);
        }
        assert_eq!(trim.pitch_trim_deg, 4.0);
    }

    #[test]
    fn test_auto_trim_needs_vertical_mode() {
        use super::PitchTrim;
        use crate::types::{AutopilotState, TrimSystem};

        let mut pitch_trim = PitchTrim::default();
        let mut autopilot = AutopilotState::default();
        let mut trim = TrimSystem::default();

        pitch_trim.update(&mut trim, false, &autopilot, 0.5, 1.0);
        assert_eq!(trim.pitch_trim_deg, 0.0);

        autopilot.alt_mode = true;
        for _ in 0..600 {
            pitch_trim.update(&mut trim, false, &autopilot, 0.5, 0.1);
        }
        assert!((trim.pitch_trim_deg - -1.0).abs() < 1e-3);

        trim.auto_trim = false;
        pitch_trim.update(&mut trim, false, &autopilot, -1.0, 1.0);
        assert!((trim.pitch_trim_deg - -1.0).abs() < 1e-3);
    }
}
