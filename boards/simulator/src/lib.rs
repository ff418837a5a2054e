#[macro_use]
extern crate log;
extern crate prim_flight;

use std::io::Write;

use fugit::NanosDurationU64 as Duration;
use prim_flight::config::pathset::PathSet;
use prim_flight::config::Config;
use prim_flight::types::{FlapsPosition, StartupScenario};
use prim_flight::Simulation;

pub struct Options {
    pub scenario: StartupScenario,
    pub duration: f32, // seconds
    pub rate: u32,     // steps per second
    pub report: f32,   // seconds between telemetry lines
    pub faults: Vec<String>,
    pub autopilot: Option<String>,
    pub settings: Vec<String>,
    pub flaps: Option<FlapsPosition>,
    pub thrust: Option<f32>,
    pub pitch: Option<f32>,
    pub roll: Option<f32>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scenario: StartupScenario::default(),
            duration: 60.0,
            rate: 60,
            report: 1.0,
            faults: Vec::new(),
            autopilot: None,
            settings: Vec::new(),
            flaps: None,
            thrust: None,
            pitch: None,
            roll: None,
        }
    }
}

pub struct Session {
    simulation: Simulation,
    steps: usize,
    report_every: usize,
    interval: Duration,
}

impl Session {
    pub fn new(options: &Options) -> Result<Self, String> {
        if options.rate == 0 {
            return Err("Rate must be positive".to_string());
        }
        let mut config = Config::default();
        for setting in options.settings.iter() {
            config.assign(setting).map_err(|e| format!("Set {} failed: {}", setting, e))?;
        }

        let mut simulation = Simulation::new(options.scenario, config);
        for fault in options.faults.iter() {
            simulation.faults.assign(fault).map_err(|e| format!("Fault {}: {}", fault, e))?;
        }
        if let Some(modes) = options.autopilot.as_ref() {
            simulation.autopilot.engage(modes).map_err(|_| format!("Unknown AP modes {}", modes))?;
        }
        if let Some(flaps) = options.flaps {
            simulation.flaps = flaps;
        }
        if let Some(thrust) = options.thrust {
            simulation.pilot.thrust = thrust.clamp(0.0, 1.0);
        }
        if let Some(pitch) = options.pitch {
            simulation.pilot.pitch = pitch.clamp(-1.0, 1.0);
        }
        if let Some(roll) = options.roll {
            simulation.pilot.roll = roll.clamp(-1.0, 1.0);
        }

        let rate = options.rate as f32;
        Ok(Self {
            simulation,
            steps: (options.duration * rate).round() as usize,
            report_every: ((options.report * rate).round() as usize).max(1),
            interval: Duration::nanos(1_000_000_000 / options.rate as u64),
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Runs to completion, writing one JSON telemetry line per report period
    pub fn run<W: Write>(&mut self, output: &mut W) -> Result<usize, String> {
        info!("Running {} steps, reporting every {}", self.steps, self.report_every);
        let mut lines = 0;
        for step in 1..=self.steps {
            self.simulation.step(self.interval);
            if step % self.report_every != 0 {
                continue;
            }
            let telemetry = self.simulation.telemetry();
            serde_json::to_writer(&mut *output, &telemetry).map_err(|e| e.to_string())?;
            writeln!(output).map_err(|e| e.to_string())?;
            lines += 1;
        }
        Ok(lines)
    }
}
