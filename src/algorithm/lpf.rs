use super::{alpha, lerp};

#[derive(Copy, Clone, Debug, Default)]
pub struct LPF {
    rate: f32,
    value: f32,
}

impl LPF {
    pub fn new(rate: f32) -> Self {
        Self { rate, value: 0.0 }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn filter(&mut self, sample: f32, dt: f32) -> f32 {
        self.value = lerp(self.value, sample, alpha(self.rate, dt));
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}
