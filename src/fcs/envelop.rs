#[cfg(not(any(test, feature = "std")))]
use micromath::F32Ext;

use super::law::ControlLaw;
use crate::algorithm::{Hysteresis, LPF};
use crate::config;
use crate::types::{Axes, Sensors};

const PROTECTION_RATE: f32 = 5.0;
const BANK_GAIN: f32 = 0.05;
const MAX_NOSE_UP_WITH_PROTECTION: f32 = 0.2;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Protections {
    pub alpha_prot: bool,
    pub alpha_floor: bool,
    pub high_speed: bool,
}

pub struct Envelop {
    config: config::Envelop,
    alpha_prot: Hysteresis,
    alpha_floor: Hysteresis,
    strength: LPF,
}

impl Envelop {
    pub fn new(config: config::Envelop) -> Self {
        Self {
            config,
            alpha_prot: Hysteresis::new(config.alpha_prot, config.alpha_prot_exit),
            alpha_floor: Hysteresis::new(config.alpha_floor, config.alpha_floor_exit),
            strength: LPF::new(PROTECTION_RATE),
        }
    }

    pub fn protect(&mut self, law: ControlLaw, sensors: &Sensors, alpha_floor_fail: bool) -> Protections {
        let alpha_prot = if law == ControlLaw::Normal && sensors.ias_knots < self.config.alpha_prot_speed {
            self.alpha_prot.update(sensors.aoa_deg)
        } else {
            self.alpha_prot.reset();
            false
        };

        let alpha_floor = if !alpha_floor_fail && sensors.ias_knots < self.config.alpha_floor_speed {
            self.alpha_floor.update(sensors.aoa_deg)
        } else {
            self.alpha_floor.reset();
            false
        };

        let high_speed = sensors.ias_knots > self.config.vmo || sensors.mach > self.config.mmo;
        Protections { alpha_prot, alpha_floor, high_speed }
    }

    pub fn protection_strength(&self) -> f32 {
        self.strength.value()
    }

    fn limit_alpha(&mut self, pitch: f32, aoa: f32, dt: f32) -> f32 {
        let (alpha_prot, alpha_max) = (self.config.alpha_prot, self.config.alpha_max);
        if !self.alpha_prot.engaged() {
            self.strength.filter(0.0, dt);
            return pitch;
        }

        let target = ((aoa - alpha_prot) / (alpha_max - alpha_prot)).clamp(0.0, 1.0);
        let strength = self.strength.filter(target, dt);

        let mut pitch = pitch;
        if pitch > 0.0 {
            pitch *= 1.0 - (0.4 + strength * 0.6);
        }
        pitch += (-0.2 - strength * 0.5) * strength;

        if aoa >= alpha_max {
            -1.0
        } else if strength > 0.1 {
            pitch.clamp(-1.0, MAX_NOSE_UP_WITH_PROTECTION)
        } else {
            pitch
        }
    }

    fn limit_bank(&self, roll: f32, bank: f32) -> f32 {
        let max_bank = self.config.max_bank;
        if bank.abs() <= max_bank {
            return roll;
        }
        let error = max_bank.copysign(bank) - bank;
        (error * BANK_GAIN).clamp(-1.0, 1.0)
    }

    pub fn restrict(
        &mut self,
        input: Axes,
        law: ControlLaw,
        sensors: &Sensors,
        on_ground: bool,
        dt: f32,
    ) -> Axes {
        if law != ControlLaw::Normal || on_ground {
            self.strength.reset();
            return input;
        }

        let mut output = input;
        output.y = self.limit_alpha(input.y, sensors.aoa_deg, dt);
        output.x = self.limit_bank(input.x, sensors.roll_deg);
        output
    }
}

#[cfg(test)]
mod test {
    use crate::types::Sensors;

    fn slow(aoa: f32) -> Sensors {
        Sensors { ias_knots: 150.0, aoa_deg: aoa, ..Default::default() }
    }

    #[test]
    fn test_alpha_prot_hysteresis() {
        use super::Envelop;
        use crate::fcs::law::ControlLaw;

        let mut envelop = Envelop::new(Default::default());
        let engaged: Vec<bool> = [10.0, 11.5, 10.5, 9.5, 8.5]
            .iter()
            .map(|&aoa| envelop.protect(ControlLaw::Normal, &slow(aoa), false).alpha_prot)
            .collect();
        assert_eq!(engaged, vec![false, true, true, true, false]);

        // forced off outside normal law, and does not come back by itself
        envelop.protect(ControlLaw::Normal, &slow(12.0), false);
        assert!(!envelop.protect(ControlLaw::Alternate, &slow(12.0), false).alpha_prot);
        assert!(!envelop.protect(ControlLaw::Normal, &slow(10.0), false).alpha_prot);

        let fast = Sensors { ias_knots: 210.0, aoa_deg: 12.0, ..Default::default() };
        assert!(!envelop.protect(ControlLaw::Normal, &fast, false).alpha_prot);
    }

    #[test]
    fn test_alpha_floor() {
        use super::Envelop;
        use crate::fcs::law::ControlLaw;

        let mut envelop = Envelop::new(Default::default());
        assert!(envelop.protect(ControlLaw::Direct, &slow(14.5), false).alpha_floor);
        assert!(envelop.protect(ControlLaw::Direct, &slow(13.0), false).alpha_floor);
        assert!(!envelop.protect(ControlLaw::Direct, &slow(12.0), false).alpha_floor);
        assert!(!envelop.protect(ControlLaw::Direct, &slow(14.5), true).alpha_floor);
    }

    #[test]
    fn test_high_speed() {
        use super::Envelop;
        use crate::fcs::law::ControlLaw;

        let mut envelop = Envelop::new(Default::default());
        let sensors = Sensors { ias_knots: 345.0, mach: 0.6, ..Default::default() };
        assert!(envelop.protect(ControlLaw::Normal, &sensors, false).high_speed);
        let sensors = Sensors { ias_knots: 280.0, mach: 0.83, ..Default::default() };
        assert!(envelop.protect(ControlLaw::Normal, &sensors, false).high_speed);
        let sensors = Sensors { ias_knots: 340.0, mach: 0.82, ..Default::default() };
        assert!(!envelop.protect(ControlLaw::Normal, &sensors, false).high_speed);
    }

    #[test]
    fn test_alpha_max_forces_nose_down() {
        use super::Envelop;
        use crate::fcs::law::ControlLaw;
        use crate::types::Axes;

        let mut envelop = Envelop::new(Default::default());
        let sensors = slow(16.0);
        envelop.protect(ControlLaw::Normal, &sensors, false);
        for &stick in &[1.0, 0.0, -0.5] {
            let input = Axes::new(0.0, stick, 0.0);
            let output = envelop.restrict(input, ControlLaw::Normal, &sensors, false, 1.0 / 60.0);
            assert_eq!(output.y, -1.0);
        }
    }

    #[test]
    fn test_alpha_prot_attenuates_nose_up() {
        use super::Envelop;
        use crate::fcs::law::ControlLaw;
        use crate::types::Axes;

        let mut envelop = Envelop::new(Default::default());
        let sensors = slow(14.0);
        envelop.protect(ControlLaw::Normal, &sensors, false);
        let mut output = Axes::zeros();
        for _ in 0..120 {
            output = envelop.restrict(Axes::new(0.0, 1.0, 0.0), ControlLaw::Normal, &sensors, false, 1.0 / 60.0);
        }
        assert!(envelop.protection_strength() > 0.7);
        assert!(output.y <= 0.2);

        // on ground the blending is bypassed and reset
        let output = envelop.restrict(Axes::new(0.0, 1.0, 0.0), ControlLaw::Normal, &sensors, true, 1.0 / 60.0);
        assert_eq!(output.y, 1.0);
        assert_eq!(envelop.protection_strength(), 0.0);
    }

    #[test]
    fn test_bank_protection() {
        use super::Envelop;
        use crate::fcs::law::ControlLaw;
        use crate::types::Axes;

        let mut envelop = Envelop::new(Default::default());
        let input = Axes::new(1.0, 0.0, 0.0);

        let sensors = Sensors { roll_deg: 60.0, ..Default::default() };
        let output = envelop.restrict(input, ControlLaw::Normal, &sensors, false, 0.01);
        assert_eq!(output.x, 1.0);

        let sensors = Sensors { roll_deg: 77.0, ..Default::default() };
        let output = envelop.restrict(input, ControlLaw::Normal, &sensors, false, 0.01);
        assert!((output.x + 0.5).abs() < 1e-5);

        let sensors = Sensors { roll_deg: -90.0, ..Default::default() };
        let output = envelop.restrict(input, ControlLaw::Normal, &sensors, false, 0.01);
        assert_eq!(output.x, 1.0);

        // no protection in alternate law
        let output = envelop.restrict(input, ControlLaw::Alternate, &sensors, false, 0.01);
        assert_eq!(output.x, 1.0);
    }
}
