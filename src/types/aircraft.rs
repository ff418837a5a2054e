use core::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlapsPosition {
    #[display(fmt = "0")]
    Retracted,
    #[display(fmt = "1")]
    Conf1,
    #[display(fmt = "2")]
    Conf2,
    #[display(fmt = "3")]
    Conf3,
    #[display(fmt = "FULL")]
    ConfFull,
}

impl Default for FlapsPosition {
    fn default() -> Self {
        Self::Retracted
    }
}

impl FromStr for FlapsPosition {
    type Err = ();

    fn from_str(string: &str) -> Result<Self, ()> {
        match string {
            "0" | "retracted" => Ok(Self::Retracted),
            "1" => Ok(Self::Conf1),
            "2" => Ok(Self::Conf2),
            "3" => Ok(Self::Conf3),
            "full" | "FULL" => Ok(Self::ConfFull),
            _ => Err(()),
        }
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearPosition {
    #[display(fmt = "UP")]
    Up,
    #[display(fmt = "DOWN")]
    Down,
    #[display(fmt = "TRANSIT")]
    Transit,
}

pub const GEAR_TRANSIT_TIME: f32 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandingGear {
    pub position: GearPosition,
    pub target_position: GearPosition,
    pub weight_on_wheels: bool,
    pub transit_timer: f32,
}

impl Default for LandingGear {
    fn default() -> Self {
        Self {
            position: GearPosition::Down,
            target_position: GearPosition::Down,
            weight_on_wheels: false,
            transit_timer: 0.0,
        }
    }
}

impl LandingGear {
    /// Gear lever. Extension only starts from up-and-locked, retraction only from
    /// down-and-locked while airborne; returns whether a transit started.
    pub fn command(&mut self, target: GearPosition) -> bool {
        let start = match target {
            GearPosition::Down => self.position == GearPosition::Up,
            GearPosition::Up => self.position == GearPosition::Down && !self.weight_on_wheels,
            GearPosition::Transit => false,
        };
        if start {
            self.position = GearPosition::Transit;
            self.target_position = target;
            self.transit_timer = 0.0;
        }
        start
    }

    // Returns true on the tick the transit completes
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.position != GearPosition::Transit {
            return false;
        }
        self.transit_timer += dt;
        if self.transit_timer < GEAR_TRANSIT_TIME {
            return false;
        }
        self.transit_timer = 0.0;
        self.position = self.target_position;
        true
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Speedbrakes {
    pub position: f32, // 0 retracted, 1 fully extended
    pub armed: bool,
}

pub const TRIM_MIN: f32 = -13.5;
pub const TRIM_MAX: f32 = 4.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrimSystem {
    pub pitch_trim_deg: f32,
    pub auto_trim: bool,
}

impl Default for TrimSystem {
    fn default() -> Self {
        Self { pitch_trim_deg: 0.0, auto_trim: true }
    }
}

impl TrimSystem {
    // Manual trim wheel
    pub fn set(&mut self, degrees: f32) {
        self.pitch_trim_deg = degrees.clamp(TRIM_MIN, TRIM_MAX);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydraulicSystem {
    pub green_avail: bool,
    pub blue_avail: bool,
    pub yellow_avail: bool,
}

impl Default for HydraulicSystem {
    fn default() -> Self {
        Self { green_avail: true, blue_avail: true, yellow_avail: true }
    }
}

impl HydraulicSystem {
    pub fn any_available(&self) -> bool {
        self.green_avail || self.blue_avail || self.yellow_avail
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    pub engine1_running: bool,
    pub engine2_running: bool,
    pub engine1_fire: bool,
    pub engine2_fire: bool,
    pub engine1_squib_released: bool,
    pub engine2_squib_released: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            engine1_running: true,
            engine2_running: true,
            engine1_fire: false,
            engine2_fire: false,
            engine1_squib_released: false,
            engine2_squib_released: false,
        }
    }
}

impl EngineState {
    pub fn running_count(&self) -> usize {
        self.engine1_running as usize + self.engine2_running as usize
    }

    pub fn set_running(&mut self, engine: usize, running: bool) {
        match engine {
            1 => self.engine1_running = running,
            2 => self.engine2_running = running,
            _ => warn!("No such engine {}", engine),
        }
    }

    pub fn start(&mut self, engine: usize) {
        self.set_running(engine, true)
    }

    pub fn stop(&mut self, engine: usize) {
        self.set_running(engine, false)
    }

    /// Fires the extinguisher squib, which puts out a fire on that engine
    pub fn discharge_agent(&mut self, engine: usize) {
        match engine {
            1 => {
                self.engine1_squib_released = true;
                self.engine1_fire = false;
            }
            2 => {
                self.engine2_squib_released = true;
                self.engine2_fire = false;
            }
            _ => warn!("No such engine {}", engine),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct APUState {
    pub running: bool,
    pub fire: bool,
    pub squib_released: bool,
}

impl APUState {
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn discharge_agent(&mut self) {
        self.squib_released = true;
        self.fire = false;
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub wind_speed_knots: f32,
    pub wind_direction_deg: f32, // direction the wind is coming from
    pub turbulence_intensity: f32, // 0 none, 1 severe
    pub windshear_intensity: f32,  // 0 none, 1 severe
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineData {
    pub n1_percent: f32,
    pub n2_percent: f32,
    pub egt_c: f32,
    pub fuel_flow: f32, // kg/h per engine
}

impl Default for EngineData {
    fn default() -> Self {
        Self { n1_percent: 50.0, n2_percent: 75.0, egt_c: 450.0, fuel_flow: 1200.0 }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_gear_cycle() {
        use super::{GearPosition, LandingGear};

        let mut gear = LandingGear::default();
        assert!(gear.command(GearPosition::Up));
        assert_eq!(gear.position, GearPosition::Transit);
        assert_eq!(gear.target_position, GearPosition::Up);

        // lever ignored while in transit
        assert!(!gear.command(GearPosition::Down));

        for _ in 0..99 {
            assert!(!gear.advance(0.1));
        }
        assert!(gear.advance(0.1 + 1e-4));
        assert_eq!(gear.position, GearPosition::Up);

        assert!(gear.command(GearPosition::Down));
        assert!(gear.advance(10.0));
        assert_eq!(gear.position, GearPosition::Down);
    }

    #[test]
    fn test_gear_cannot_retract_on_ground() {
        use super::{GearPosition, LandingGear};

        let mut gear = LandingGear { weight_on_wheels: true, ..Default::default() };
        assert!(!gear.command(GearPosition::Up));
        assert_eq!(gear.position, GearPosition::Down);
    }

    #[test]
    fn test_discharge_agent() {
        use super::{APUState, EngineState};

        let mut engines = EngineState { engine2_fire: true, ..Default::default() };
        engines.discharge_agent(2);
        assert!(!engines.engine2_fire);
        assert!(engines.engine2_squib_released);
        assert!(!engines.engine1_squib_released);

        engines.stop(1);
        assert_eq!(engines.running_count(), 1);
        engines.start(3);
        assert_eq!(engines.running_count(), 1);

        let mut apu = APUState::default();
        apu.start();
        apu.fire = true;
        apu.discharge_agent();
        assert!(!apu.fire && apu.squib_released && apu.running);
    }

    #[test]
    fn test_flaps_from_str() {
        use super::FlapsPosition;

        assert_eq!("full".parse(), Ok(FlapsPosition::ConfFull));
        assert_eq!("2".parse(), Ok(FlapsPosition::Conf2));
        assert_eq!("5".parse::<FlapsPosition>(), Err(()));
        assert_eq!(FlapsPosition::ConfFull.to_string(), "FULL");
    }
}
