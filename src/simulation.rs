use fugit::NanosDurationU64 as Duration;
use serde::Serialize;

use crate::alert::{Alert, AlertManager};
use crate::config::Config;
use crate::dynamics::autothrust::ThrustMode;
use crate::dynamics::{DynamicsInput, FlightDynamics};
use crate::fcs::law::FlightControlStatus;
use crate::fcs::{FlightControl, FlightControlInput};
use crate::gpws::Gpws;
use crate::phase::{self, FlightPhase};
use crate::types::{
    APUState, AutopilotState, EngineData, EngineState, Faults, FlapsPosition, HydraulicSystem,
    LandingGear, PilotInput, Sensors, Speedbrakes, StartupScenario, Surfaces, TrimSystem, Weather,
};
use crate::vspeeds::{BussData, VSpeeds};

const MAX_STEP: f32 = 0.05;

/// Owns every piece of aircraft state. Inputs are plain public fields written
/// between steps; each tick runs control laws, dynamics, then GPWS.
pub struct Simulation {
    pub config: Config,
    pub pilot: PilotInput,
    pub sensors: Sensors,
    pub faults: Faults,
    pub autopilot: AutopilotState,
    pub weather: Weather,
    pub flaps: FlapsPosition,
    pub gear: LandingGear,
    pub speedbrakes: Speedbrakes,
    pub engines: EngineState,
    pub apu: APUState,
    pub trim: TrimSystem,
    pub hydraulics: HydraulicSystem,
    pub alerts: AlertManager,
    /// Sensors are written directly and the dynamics are frozen
    pub manual_sensor_override: bool,

    pub fcs: FlightControl,
    pub dynamics: FlightDynamics,
    pub gpws: Gpws,
    pub phase: FlightPhase,
    pub time: f32,
}

#[derive(Clone, Debug, Serialize)]
pub struct Telemetry<'a> {
    pub time: f32,
    pub sensors: Sensors,
    pub surfaces: Surfaces,
    pub status: FlightControlStatus,
    pub thrust_mode: ThrustMode,
    pub engines: EngineData,
    pub gear: LandingGear,
    pub trim: TrimSystem,
    pub gpws: &'static str,
    pub vspeeds: VSpeeds,
    pub buss: BussData,
    pub phase: FlightPhase,
    pub master_warning: bool,
    pub master_caution: bool,
    pub alerts: &'a [Alert],
}

impl Simulation {
    pub fn new(scenario: StartupScenario, config: Config) -> Self {
        let mut simulation = Self {
            config,
            pilot: PilotInput::default(),
            sensors: Sensors::default(),
            faults: Faults::default(),
            autopilot: AutopilotState::default(),
            weather: Weather::default(),
            flaps: FlapsPosition::default(),
            gear: LandingGear::default(),
            speedbrakes: Speedbrakes::default(),
            engines: EngineState::default(),
            apu: APUState::default(),
            trim: TrimSystem::default(),
            hydraulics: HydraulicSystem::default(),
            alerts: AlertManager::default(),
            manual_sensor_override: false,
            fcs: FlightControl::new(&config),
            dynamics: FlightDynamics::new(&config),
            gpws: Gpws::default(),
            phase: FlightPhase::default(),
            time: 0.0,
        };
        simulation.apply_scenario(scenario);
        simulation
    }

    pub fn apply_scenario(&mut self, scenario: StartupScenario) {
        info!("Applying startup scenario {}", scenario);
        scenario.apply(
            &mut self.sensors,
            &mut self.pilot,
            &mut self.autopilot,
            &mut self.gear,
            &mut self.engines,
        );
        self.phase = phase::detect(&self.sensors, &self.gear, &self.engines);
    }

    pub fn step(&mut self, interval: Duration) {
        let mut dt = interval.to_nanos() as f32 / 1_000_000_000.0;
        if dt > MAX_STEP {
            trace!("Step of {}s clamped to {}s", dt, MAX_STEP);
            dt = MAX_STEP;
        }
        self.time += dt;

        let input = FlightControlInput {
            pilot: &self.pilot,
            sensors: &self.sensors,
            faults: &self.faults,
            gear: &self.gear,
            engines: &self.engines,
            apu: &self.apu,
            flaps: self.flaps,
        };
        self.fcs.update(
            &input,
            dt,
            &mut self.alerts,
            &mut self.autopilot,
            &mut self.trim,
            &mut self.hydraulics,
        );

        if !self.manual_sensor_override {
            let input = DynamicsInput {
                pilot: &self.pilot,
                flaps: self.flaps,
                autopilot: &self.autopilot,
                speedbrakes: &self.speedbrakes,
                weather: &self.weather,
                engines: &self.engines,
                faults: &self.faults,
                surfaces: self.fcs.surfaces(),
                alpha_floor: self.fcs.status().alpha_floor,
            };
            self.dynamics.update(&input, &mut self.sensors, &mut self.gear, self.time, dt);
        }

        self.gpws.update(&self.sensors, &self.gear, &self.weather, dt);

        let phase = phase::detect(&self.sensors, &self.gear, &self.engines);
        if phase != self.phase {
            debug!("Flight phase {} -> {}", self.phase, phase);
            self.phase = phase;
        }
    }

    pub fn telemetry(&self) -> Telemetry<'_> {
        Telemetry {
            time: self.time,
            sensors: self.sensors,
            surfaces: self.fcs.surfaces(),
            status: self.fcs.status(),
            thrust_mode: self.dynamics.thrust_mode(),
            engines: self.dynamics.engine_data(),
            gear: self.gear,
            trim: self.trim,
            gpws: self.gpws.callout(),
            vspeeds: self.fcs.vspeeds(),
            buss: self.fcs.buss(),
            phase: self.phase,
            master_warning: self.alerts.master_warning_on(),
            master_caution: self.alerts.master_caution_on(),
            alerts: self.alerts.all(),
        }
    }
}
