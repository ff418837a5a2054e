pub mod autothrust;
pub mod engine;

#[cfg(not(any(test, feature = "std")))]
use micromath::F32Ext;

use crate::algorithm::{approach, wrap_heading};
use crate::config::Config;
use crate::types::{
    AutopilotState, EngineData, EngineState, Faults, FlapsPosition, GearPosition, LandingGear,
    PilotInput, Sensors, Speedbrakes, Surfaces, Weather,
};

use autothrust::{Autothrust, ThrustMode};

const MAX_ALTITUDE: f32 = 45000.0;
const MAX_SPEED: f32 = 380.0;
const WINDSHEAR_CEILING: f32 = 1500.0;

const FLAPS_RATE: f32 = 0.5;
const VERTICAL_SPEED_RATE: f32 = 2.0;
const AOA_RATE: f32 = 3.0;
const TEMPERATURE_RATE: f32 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlapEffect {
    pub drag: f32,
    pub lift: f32,
    pub stall_speed_reduction: f32,
}

impl From<FlapsPosition> for FlapEffect {
    fn from(flaps: FlapsPosition) -> Self {
        let (drag, lift, stall_speed_reduction) = match flaps {
            FlapsPosition::Retracted => (1.0, 0.0, 0.0),
            FlapsPosition::Conf1 => (1.15, 3.0, 15.0),
            FlapsPosition::Conf2 => (1.35, 6.0, 30.0),
            FlapsPosition::Conf3 => (1.60, 9.0, 45.0),
            FlapsPosition::ConfFull => (2.0, 12.0, 60.0),
        };
        Self { drag, lift, stall_speed_reduction }
    }
}

// Deterministic stand-ins for atmospheric noise, driven by simulated time
struct Disturbance {
    pitch: f32,
    roll: f32,
    speed: f32,
    windshear: f32,
}

impl Disturbance {
    fn at(time: f32, weather: &Weather, altitude: f32) -> Self {
        let turbulence = weather.turbulence_intensity;
        let windshear = match altitude < WINDSHEAR_CEILING {
            true => weather.windshear_intensity * (time * 2.0).sin() * 15.0,
            false => 0.0,
        };
        Self {
            pitch: turbulence * (time * 7.3).cos() * 8.0,
            roll: turbulence * (time * 9.1).sin() * 10.0,
            speed: turbulence * (time * 6.1).sin() * 2.0,
            windshear,
        }
    }
}

pub struct DynamicsInput<'a> {
    pub pilot: &'a PilotInput,
    pub flaps: FlapsPosition,
    pub autopilot: &'a AutopilotState,
    pub speedbrakes: &'a Speedbrakes,
    pub weather: &'a Weather,
    pub engines: &'a EngineState,
    pub faults: &'a Faults,
    pub surfaces: Surfaces,
    pub alpha_floor: bool,
}

pub struct FlightDynamics {
    autothrust: Autothrust,
    thrust_mode: ThrustMode,
    thrust: f32,
    engine_data: EngineData,
}

impl FlightDynamics {
    pub fn new(config: &Config) -> Self {
        Self {
            autothrust: Autothrust::new(config.autothrust),
            thrust_mode: ThrustMode::Manual,
            thrust: 0.0,
            engine_data: EngineData::default(),
        }
    }

    pub fn engine_data(&self) -> EngineData {
        self.engine_data
    }

    pub fn thrust_mode(&self) -> ThrustMode {
        self.thrust_mode
    }

    // Effective thrust of the last step after engine losses
    pub fn thrust(&self) -> f32 {
        self.thrust
    }

    fn effective_thrust(&mut self, input: &DynamicsInput, ias: f32, dt: f32) -> f32 {
        let mode = ThrustMode::select(input.autopilot, input.alpha_floor);
        if mode != self.thrust_mode {
            debug!("Thrust mode {:?} -> {:?}", self.thrust_mode, mode);
            self.thrust_mode = mode;
        }
        if mode != ThrustMode::Autothrust {
            self.autothrust.reset();
        }
        let demand = match mode {
            ThrustMode::Autothrust => {
                self.autothrust.command(input.autopilot.target_spd_knots, ias, dt)
            }
            ThrustMode::AlphaFloor => 1.0,
            ThrustMode::Manual => input.pilot.thrust,
        };
        demand * engine::thrust_multiplier(input.engines, input.faults)
    }

    pub fn update(
        &mut self,
        input: &DynamicsInput,
        sensors: &mut Sensors,
        gear: &mut LandingGear,
        time: f32,
        dt: f32,
    ) {
        if gear.advance(dt) {
            info!("Landing gear {}", gear.position);
        }
        gear.weight_on_wheels = sensors.altitude_ft <= 0.0 && sensors.ias_knots < 80.0;

        let thrust = self.effective_thrust(input, sensors.ias_knots, dt);
        self.thrust = thrust;

        let flaps = FlapEffect::from(input.flaps);
        sensors.smoothed_flaps_lift_bonus =
            approach(sensors.smoothed_flaps_lift_bonus, flaps.lift, FLAPS_RATE, dt);
        sensors.smoothed_flaps_drag_mult =
            approach(sensors.smoothed_flaps_drag_mult, flaps.drag, FLAPS_RATE, dt);

        let disturbance = Disturbance::at(time, input.weather, sensors.altitude_ft);
        let asymmetry = engine::asymmetry(input.engines) * thrust;

        let pitch_rate = input.surfaces.elevator_deg * 2.0 + disturbance.pitch + disturbance.windshear;
        sensors.pitch_deg = (sensors.pitch_deg + pitch_rate * dt).clamp(-30.0, 30.0);

        let roll_rate = input.surfaces.aileron_deg * 3.0 + asymmetry * 5.0 + disturbance.roll;
        sensors.roll_deg = (sensors.roll_deg + roll_rate * dt).clamp(-90.0, 90.0);

        let turn_rate = sensors.roll_deg.to_radians().sin() * 6.0 + asymmetry * 3.0;
        sensors.heading_deg = wrap_heading(sensors.heading_deg + turn_rate * dt);

        let target_vs = sensors.pitch_deg * 200.0;
        sensors.vs_fpm = approach(sensors.vs_fpm, target_vs, VERTICAL_SPEED_RATE, dt);
        sensors.altitude_ft = (sensors.altitude_ft + sensors.vs_fpm * dt / 60.0).clamp(0.0, MAX_ALTITUDE);

        let ias = sensors.ias_knots;
        let mut drag = (ias / 280.0) * (ias / 280.0) * 4.5 * sensors.smoothed_flaps_drag_mult;
        drag += input.speedbrakes.position * 3.0 * ias / 200.0;
        drag += match gear.position {
            GearPosition::Down => 2.5 * ias / 200.0,
            GearPosition::Transit => 1.25 * ias / 200.0,
            GearPosition::Up => 0.0,
        };
        let induced_drag = match sensors.aoa_deg > 5.0 {
            true => ((sensors.aoa_deg - 5.0) / 10.0) * ((sensors.aoa_deg - 5.0) / 10.0) * 2.0,
            false => 0.0,
        };
        let gravity = -sensors.pitch_deg * 0.12;
        let wind_angle = (input.weather.wind_direction_deg - sensors.heading_deg).to_radians();
        let headwind = input.weather.wind_speed_knots * wind_angle.cos() * 0.015;
        let acceleration = thrust * 6.0 - drag - induced_drag + gravity + headwind + disturbance.speed;
        sensors.ias_knots = (ias + acceleration * dt).clamp(0.0, MAX_SPEED);

        let density = (1.0 - sensors.altitude_ft / 100000.0).clamp(0.5, 1.0);
        sensors.mach = (sensors.ias_knots / 600.0 / density).clamp(0.0, 0.95);

        let speed_factor = ((250.0 - sensors.ias_knots) / 150.0).clamp(-1.0, 1.0);
        let target_aoa =
            sensors.pitch_deg * 0.4 + speed_factor * 8.0 + sensors.smoothed_flaps_lift_bonus;
        sensors.aoa_deg = approach(sensors.aoa_deg, target_aoa, AOA_RATE, dt).clamp(-5.0, 25.0);

        let isa = 15.0 - sensors.altitude_ft / 1000.0 * 2.0;
        sensors.tat_c = approach(sensors.tat_c, isa, TEMPERATURE_RATE, dt);

        let nz = 1.0 + pitch_rate.abs() * 0.01 + sensors.roll_deg.abs() * 0.005;
        sensors.nz = nz.clamp(-1.0, 3.0);

        engine::spool(&mut self.engine_data, input.engines, input.pilot.thrust, dt);
    }
}

#[cfg(test)]
mod test {
    use crate::types::{
        AutopilotState, EngineState, Faults, FlapsPosition, GearPosition, LandingGear, PilotInput,
        Sensors, Speedbrakes, Surfaces, Weather,
    };

    use super::{DynamicsInput, FlightDynamics};

    struct Bench {
        dynamics: FlightDynamics,
        pilot: PilotInput,
        flaps: FlapsPosition,
        autopilot: AutopilotState,
        speedbrakes: Speedbrakes,
        weather: Weather,
        engines: EngineState,
        faults: Faults,
        surfaces: Surfaces,
        sensors: Sensors,
        gear: LandingGear,
        alpha_floor: bool,
        time: f32,
    }

    impl Bench {
        fn cruise() -> Self {
            Self {
                dynamics: FlightDynamics::new(&Default::default()),
                pilot: PilotInput { pitch: 0.0, roll: 0.0, thrust: 0.6 },
                flaps: FlapsPosition::Retracted,
                autopilot: AutopilotState::default(),
                speedbrakes: Speedbrakes::default(),
                weather: Weather::default(),
                engines: EngineState::default(),
                faults: Faults::default(),
                surfaces: Surfaces::default(),
                sensors: Sensors::default(),
                gear: LandingGear {
                    position: GearPosition::Up,
                    target_position: GearPosition::Up,
                    ..Default::default()
                },
                alpha_floor: false,
                time: 0.0,
            }
        }

        fn run(&mut self, seconds: f32) {
            let dt = 1.0 / 60.0;
            for _ in 0..(seconds / dt) as usize {
                let input = DynamicsInput {
                    pilot: &self.pilot,
                    flaps: self.flaps,
                    autopilot: &self.autopilot,
                    speedbrakes: &self.speedbrakes,
                    weather: &self.weather,
                    engines: &self.engines,
                    faults: &self.faults,
                    surfaces: self.surfaces,
                    alpha_floor: self.alpha_floor,
                };
                self.time += dt;
                self.dynamics.update(&input, &mut self.sensors, &mut self.gear, self.time, dt);
            }
        }
    }

    #[test]
    fn test_balanced_cruise() {
        let mut bench = Bench::cruise();
        bench.run(60.0);
        let sensors = bench.sensors;
        assert!((sensors.ias_knots - 250.0).abs() < 5.0);
        assert!((sensors.altitude_ft - 10000.0).abs() < 50.0);
        assert!(sensors.heading_deg < 0.5 || sensors.heading_deg > 359.5);
        assert!(sensors.nz >= -1.0 && sensors.nz <= 3.0);
    }

    #[test]
    fn test_gear_transit() {
        let mut bench = Bench::cruise();
        assert!(bench.gear.command(GearPosition::Down));
        bench.run(5.0);
        assert_eq!(bench.gear.position, GearPosition::Transit);
        bench.run(5.1);
        assert_eq!(bench.gear.position, GearPosition::Down);
        assert!(!bench.gear.weight_on_wheels);
    }

    #[test]
    fn test_weight_on_wheels() {
        let mut bench = Bench::cruise();
        bench.sensors = Sensors { ias_knots: 0.0, altitude_ft: 0.0, aoa_deg: 0.0, ..Default::default() };
        bench.pilot.thrust = 0.0;
        bench.run(0.1);
        assert!(bench.gear.weight_on_wheels);
    }

    #[test]
    fn test_autothrust_holds_speed() {
        use super::autothrust::ThrustMode;

        let mut bench = Bench::cruise();
        bench.autopilot.spd_mode = true;
        bench.autopilot.autothrust = true;
        bench.autopilot.target_spd_knots = 270.0;
        bench.run(180.0);
        assert_eq!(bench.dynamics.thrust_mode(), ThrustMode::Autothrust);
        assert!((bench.sensors.ias_knots - 270.0).abs() < 5.0);

        // levers take over again once disengaged
        bench.autopilot.autothrust = false;
        bench.run(0.1);
        assert_eq!(bench.dynamics.thrust_mode(), ThrustMode::Manual);
        assert!((bench.dynamics.thrust() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_engine_faults_reduce_thrust() {
        let mut bench = Bench::cruise();
        bench.faults.eng1_compressor_stall = true;
        bench.run(0.1);
        assert!((bench.dynamics.thrust() - 0.3).abs() < 1e-6);

        let mut bench = Bench::cruise();
        bench.engines.engine2_running = false;
        bench.run(2.0);
        // remaining left engine rolls the aircraft right
        assert!(bench.sensors.roll_deg > 0.0);
        assert!((bench.dynamics.thrust() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_flaps_are_smoothed() {
        let mut bench = Bench::cruise();
        bench.flaps = FlapsPosition::ConfFull;
        bench.run(1.0 / 60.0);
        assert!(bench.sensors.smoothed_flaps_lift_bonus < 1.0);
        bench.run(20.0);
        assert!((bench.sensors.smoothed_flaps_lift_bonus - 12.0).abs() < 0.01);
        assert!((bench.sensors.smoothed_flaps_drag_mult - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_gear_drag() {
        let speed_after = |position| {
            let mut bench = Bench::cruise();
            bench.gear.position = position;
            bench.run(2.0);
            bench.sensors.ias_knots
        };
        let (up, transit, down) =
            (speed_after(GearPosition::Up), speed_after(GearPosition::Transit), speed_after(GearPosition::Down));
        assert!(up > transit && transit > down);
        // transit drag is half of the extended drag
        let (half, full) = (up - transit, up - down);
        assert!((half / full - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_speedbrake_drag() {
        let speed_after = |position| {
            let mut bench = Bench::cruise();
            bench.speedbrakes.position = position;
            bench.run(2.0);
            bench.sensors.ias_knots
        };
        let (retracted, half, full) = (speed_after(0.0), speed_after(0.5), speed_after(1.0));
        assert!(retracted > half && half > full);
    }

    #[test]
    fn test_induced_drag_above_5_degrees() {
        let speed_after = |aoa| {
            let mut bench = Bench::cruise();
            bench.sensors.aoa_deg = aoa;
            bench.run(1.0 / 60.0);
            bench.sensors.ias_knots
        };
        assert_eq!(speed_after(3.0), speed_after(4.9));
        assert!(speed_after(12.0) < speed_after(3.0));
    }

    #[test]
    fn test_headwind_follows_heading() {
        let speed_after = |wind_speed, direction| {
            let mut bench = Bench::cruise();
            bench.weather.wind_speed_knots = wind_speed;
            bench.weather.wind_direction_deg = direction;
            bench.run(1.0 / 60.0);
            bench.sensors.ias_knots
        };
        let calm = speed_after(0.0, 0.0);
        assert!(speed_after(40.0, 0.0) > calm);
        assert!(speed_after(40.0, 180.0) < calm);
        assert!((speed_after(40.0, 90.0) - calm).abs() < 1e-4);
    }

    #[test]
    fn test_windshear_only_below_1500ft() {
        let pitch_after = |altitude| {
            let mut bench = Bench::cruise();
            bench.weather.windshear_intensity = 1.0;
            bench.sensors.altitude_ft = altitude;
            bench.run(1.0);
            bench.sensors.pitch_deg
        };
        assert!(pitch_after(1400.0) > 0.1);
        assert_eq!(pitch_after(1600.0), 0.0);
    }

    #[test]
    fn test_alpha_floor_commands_toga() {
        use super::autothrust::ThrustMode;

        let mut bench = Bench::cruise();
        bench.pilot.thrust = 0.0;
        bench.alpha_floor = true;
        bench.run(0.1);
        assert_eq!(bench.dynamics.thrust_mode(), ThrustMode::AlphaFloor);
        assert_eq!(bench.dynamics.thrust(), 1.0);

        bench.alpha_floor = false;
        bench.run(0.1);
        assert_eq!(bench.dynamics.thrust(), 0.0);
    }

    #[test]
    fn test_turbulence_is_deterministic() {
        let mut a = Bench::cruise();
        let mut b = Bench::cruise();
        a.weather.turbulence_intensity = 0.8;
        b.weather.turbulence_intensity = 0.8;
        a.run(10.0);
        b.run(10.0);
        assert_eq!(a.sensors, b.sensors);
    }
}
