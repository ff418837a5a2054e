// Engages strictly above `engage`, releases strictly below `disengage`
#[derive(Copy, Clone, Debug)]
pub struct Hysteresis {
    engage: f32,
    disengage: f32,
    engaged: bool,
}

impl Hysteresis {
    pub fn new(engage: f32, disengage: f32) -> Self {
        Self { engage, disengage, engaged: false }
    }

    pub fn update(&mut self, value: f32) -> bool {
        if !self.engaged && value > self.engage {
            self.engaged = true;
        } else if self.engaged && value < self.disengage {
            self.engaged = false;
        }
        self.engaged
    }

    pub fn reset(&mut self) {
        self.engaged = false;
    }

    pub fn engaged(&self) -> bool {
        self.engaged
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_hysteresis() {
        use super::Hysteresis;

        let mut hysteresis = Hysteresis::new(11.0, 9.0);
        assert!(!hysteresis.update(11.0));
        assert!(hysteresis.update(11.1));
        assert!(hysteresis.update(9.0));
        assert!(!hysteresis.update(8.9));
        assert!(!hysteresis.update(10.0));

        hysteresis.update(12.0);
        hysteresis.reset();
        assert!(!hysteresis.engaged());
    }
}
