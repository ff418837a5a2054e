pub mod actuator;
pub mod envelop;
pub mod guidance;
pub mod law;
pub mod trim;

use crate::alert::catalogue::{self, AlertContext};
use crate::alert::AlertManager;
use crate::config::Config;
use crate::types::{
    APUState, AutopilotState, Axes, EngineState, Faults, FlapsPosition, HydraulicSystem,
    LandingGear, PilotInput, Sensors, Surfaces, TrimSystem,
};
use crate::vspeeds::{self, BussData, VSpeeds};

use law::{ControlLaw, FlightControlStatus};

const ALPHA_FLOOR_PITCH: f32 = 0.4;

pub struct FlightControlInput<'a> {
    pub pilot: &'a PilotInput,
    pub sensors: &'a Sensors,
    pub faults: &'a Faults,
    pub gear: &'a LandingGear,
    pub engines: &'a EngineState,
    pub apu: &'a APUState,
    pub flaps: FlapsPosition,
}

pub struct FlightControl {
    use_flap_lever: bool,
    envelop: envelop::Envelop,
    guidance: guidance::Guidance,
    trim: trim::PitchTrim,
    actuators: actuator::Actuators,

    status: FlightControlStatus,
    pitch_command: f32,
    commands: Surfaces,
    vspeeds: VSpeeds,
    buss: BussData,
}

impl FlightControl {
    pub fn new(config: &Config) -> Self {
        Self {
            use_flap_lever: config.vspeeds.use_flap_lever,
            envelop: envelop::Envelop::new(config.envelop),
            guidance: guidance::Guidance::new(config.autopilot),
            trim: trim::PitchTrim::default(),
            actuators: actuator::Actuators::new(config.actuators),
            status: FlightControlStatus::default(),
            pitch_command: 0.0,
            commands: Surfaces::default(),
            vspeeds: VSpeeds::default(),
            buss: BussData::default(),
        }
    }

    pub fn status(&self) -> FlightControlStatus {
        self.status
    }

    pub fn surfaces(&self) -> Surfaces {
        self.actuators.surfaces()
    }

    // Commanded deflections before actuator lag
    pub fn commands(&self) -> Surfaces {
        self.commands
    }

    // Protected pitch demand before alpha floor, trim and authority
    pub fn pitch_command(&self) -> f32 {
        self.pitch_command
    }

    pub fn protection_strength(&self) -> f32 {
        self.envelop.protection_strength()
    }

    pub fn vspeeds(&self) -> VSpeeds {
        self.vspeeds
    }

    pub fn vspeeds_mut(&mut self) -> &mut VSpeeds {
        &mut self.vspeeds
    }

    pub fn buss(&self) -> BussData {
        self.buss
    }

    fn update_status(&mut self, faults: &Faults, hydraulics: &HydraulicSystem, sensors: &Sensors) {
        let hydraulics_ok = hydraulics.any_available();
        let law = ControlLaw::select(faults);
        if law != self.status.law {
            info!("Control law {} -> {}", self.status.law, law);
        }

        let protections = self.envelop.protect(law, sensors, faults.alpha_floor_fail);
        if protections.alpha_prot && !self.status.alpha_prot {
            info!("Alpha protection engaged at {:.1} deg", sensors.aoa_deg);
        }
        if protections.alpha_floor && !self.status.alpha_floor {
            info!("Alpha floor engaged at {:.1} deg", sensors.aoa_deg);
        }

        self.status = FlightControlStatus {
            law,
            elac1_avail: !faults.elac1_fail && hydraulics_ok,
            elac2_avail: !faults.elac2_fail && hydraulics_ok,
            sec1_avail: !faults.sec1_fail && hydraulics_ok,
            sec2_avail: true,
            sec3_avail: true,
            alpha_prot: protections.alpha_prot,
            alpha_floor: protections.alpha_floor,
            high_speed_prot: protections.high_speed,
        };
    }

    pub fn update(
        &mut self,
        input: &FlightControlInput,
        dt: f32,
        alerts: &mut AlertManager,
        autopilot: &mut AutopilotState,
        trim: &mut TrimSystem,
        hydraulics: &mut HydraulicSystem,
    ) {
        let (sensors, faults, gear) = (input.sensors, input.faults, input.gear);

        hydraulics.green_avail = !faults.green_hyd_fail;
        hydraulics.blue_avail = !faults.blue_hyd_fail;
        hydraulics.yellow_avail = !faults.yellow_hyd_fail;

        self.update_status(faults, hydraulics, sensors);
        let law = self.status.law;

        let flaps = match self.use_flap_lever {
            true => input.flaps,
            false => vspeeds::estimate_flaps(sensors.ias_knots),
        };
        self.vspeeds.compute(sensors, flaps, gear);
        let buss_active = faults.pitot_blocked || faults.adr1_fail;
        self.buss.update(buss_active, sensors, flaps, gear, input.pilot.thrust);

        let ap_just_disconnected = autopilot.detect_disconnect();
        if ap_just_disconnected {
            warn!("Autopilot disconnected");
        }

        let context = AlertContext {
            sensors,
            faults,
            status: &self.status,
            gear,
            engines: input.engines,
            apu: input.apu,
            ap_just_disconnected,
        };
        catalogue::publish(alerts, &context);

        let mut axes = self.guidance.command(input.pilot.axes(), autopilot, sensors);
        axes = self.envelop.restrict(axes, law, sensors, gear.weight_on_wheels, dt);
        self.pitch_command = axes.y;

        // auto-trim follows the stick, not the guidance demand
        self.trim.update(trim, faults.trim_runaway, autopilot, input.pilot.pitch, dt);

        let limits = self.actuators.limits();
        if self.status.alpha_floor {
            axes.y += ALPHA_FLOOR_PITCH;
        }
        axes.y += trim.pitch_trim_deg / limits.y;
        let mut command: Axes = axes.component_mul(&limits).component_mul(&law.authority());

        let surfaces = self.actuators.surfaces();
        if faults.elevator_jam {
            command.y = surfaces.elevator_deg;
        }
        if faults.aileron_jam {
            command.x = surfaces.aileron_deg;
        }
        self.commands = Surfaces::from(command);
        self.actuators.drive(command, law, dt);
    }
}
