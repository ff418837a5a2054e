use super::{AlertLevel, AlertManager};
use crate::fcs::law::{ControlLaw, FlightControlStatus};
use crate::types::{APUState, EngineState, Faults, GearPosition, LandingGear, Sensors};

use AlertLevel::{Caution, Memo, Warning};

pub struct AlertContext<'a> {
    pub sensors: &'a Sensors,
    pub faults: &'a Faults,
    pub status: &'a FlightControlStatus,
    pub gear: &'a LandingGear,
    pub engines: &'a EngineState,
    pub apu: &'a APUState,
    pub ap_just_disconnected: bool,
}

pub struct AlertDefinition {
    pub id: u16,
    pub level: AlertLevel,
    pub text: &'static str,
    pub condition: fn(&AlertContext) -> bool,
    pub latch: bool,
    pub actions: &'static [&'static str],
}

pub const NORMAL_ID: u16 = 900;

const LAND_ASAP: &str = "* LAND ASAP";
const FLT_CTL_LIMITED: &[&str] = &["* FLT CTL .......... LIMITED", LAND_ASAP];

macro_rules! alert {
    ($id:literal, $level:ident, $text:literal, |$ctx:ident| $condition:expr) => {
        alert!(@define $id, $level, $text, |$ctx| $condition, false, &[])
    };
    ($id:literal, $level:ident, $text:literal, |$ctx:ident| $condition:expr, latch, [$($action:expr),*]) => {
        alert!(@define $id, $level, $text, |$ctx| $condition, true, &[$($action),*])
    };
    ($id:literal, $level:ident, $text:literal, |$ctx:ident| $condition:expr, latch, $actions:expr) => {
        alert!(@define $id, $level, $text, |$ctx| $condition, true, $actions)
    };
    (@define $id:literal, $level:ident, $text:literal, |$ctx:ident| $condition:expr, $latch:expr, $actions:expr) => {
        AlertDefinition {
            id: $id,
            level: $level,
            text: $text,
            condition: |$ctx| $condition,
            latch: $latch,
            actions: $actions,
        }
    };
}

#[rustfmt::skip]
pub static CATALOGUE: &[AlertDefinition] = &[
    alert!(100, Caution, "ADR 1 FAULT", |c| c.faults.adr1_fail, latch, [
        "* ADR 1 ............ OFF",
        "* ATT HDG ........... CHECK",
        "* USE ADR 2 OR 3"
    ]),

    alert!(200, Warning, "OVERSPEED", |c| !c.faults.overspeed_sensor_bad && c.sensors.ias_knots > 330.0),
    alert!(210, Caution, "SPD SENS FAULT", |c| c.faults.overspeed_sensor_bad, latch, [
        "* REDUCE SPEED",
        "* SPD LIM ........... 320 / .82",
        "* MONITOR ALTITUDE"
    ]),
    alert!(300, Warning, "STALL", |c| {
        !c.faults.adr1_fail && c.sensors.ias_knots < 140.0 && c.sensors.aoa_deg > 12.0
    }),
    alert!(310, Warning, "PULL UP", |c| {
        !c.faults.adr1_fail && c.sensors.altitude_ft < 2500.0 && c.sensors.vs_fpm < -1500.0
    }),

    alert!(400, Caution, "ELAC 1 FAULT", |c| c.faults.elac1_fail, latch, FLT_CTL_LIMITED),
    alert!(401, Caution, "ELAC 2 FAULT", |c| c.faults.elac2_fail, latch, FLT_CTL_LIMITED),
    alert!(402, Caution, "SEC 1 FAULT", |c| c.faults.sec1_fail, latch, [
        "* FLT CTL .......... DEGRADED"
    ]),
    alert!(410, Memo, "ALTN LAW", |c| c.status.law == ControlLaw::Alternate),
    alert!(411, Warning, "DIRECT LAW", |c| c.status.law == ControlLaw::Direct),
    alert!(420, Caution, "GREEN HYD FAULT", |c| c.faults.green_hyd_fail, latch, [
        "* GREEN HYD ......... OFF", LAND_ASAP
    ]),
    alert!(421, Caution, "BLUE HYD FAULT", |c| c.faults.blue_hyd_fail, latch, [
        "* BLUE HYD .......... OFF", LAND_ASAP
    ]),
    alert!(422, Caution, "YELLOW HYD FAULT", |c| c.faults.yellow_hyd_fail, latch, [
        "* YELLOW HYD ........ OFF", LAND_ASAP
    ]),

    alert!(430, Warning, "ENG 1 FAIL", |c| !c.engines.engine1_running && c.engines.engine2_running, latch, [
        "* ENG 1 ............. OFF",
        LAND_ASAP,
        "* USE SINGLE ENGINE PROCEDURES"
    ]),
    alert!(431, Warning, "ENG 2 FAIL", |c| !c.engines.engine2_running && c.engines.engine1_running, latch, [
        "* ENG 2 ............. OFF",
        LAND_ASAP,
        "* USE SINGLE ENGINE PROCEDURES"
    ]),
    alert!(432, Warning, "DUAL ENG FAIL", |c| c.engines.running_count() == 0, latch, [
        "* ENG 1 ............. OFF",
        "* ENG 2 ............. OFF",
        "* RAM AIR TURBINE ... DEPLOY",
        "* EMERGENCY DESCENT"
    ]),
    alert!(433, Warning, "ENG 1 FIRE", |c| c.engines.engine1_fire, latch, [
        "* ENG 1 MASTER ..... OFF",
        "* ENG 1 FIRE HANDLE . PULL",
        "* IF FIRE PERSISTS:",
        "  * ENG 1 AGENT 1 ... DISCH",
        "  * WAIT 30 SEC",
        "  * ENG 1 AGENT 2 ... DISCH"
    ]),
    alert!(434, Warning, "ENG 2 FIRE", |c| c.engines.engine2_fire, latch, [
        "* ENG 2 MASTER ..... OFF",
        "* ENG 2 FIRE HANDLE . PULL",
        "* IF FIRE PERSISTS:",
        "  * ENG 2 AGENT 1 ... DISCH",
        "  * WAIT 30 SEC",
        "  * ENG 2 AGENT 2 ... DISCH"
    ]),
    alert!(435, Warning, "APU FIRE", |c| c.apu.fire, latch, [
        "* APU FIRE HANDLE ... PULL",
        "* APU AGENT ......... DISCH"
    ]),
    alert!(436, Memo, "APU AVAIL", |c| c.apu.running && !c.apu.fire),

    alert!(500, Warning, "ELEV JAM", |c| c.faults.elevator_jam, latch, [
        "* AP ............... OFF",
        "* USE MANUAL PITCH TRIM",
        LAND_ASAP
    ]),
    alert!(510, Warning, "AIL JAM", |c| c.faults.aileron_jam, latch, [
        "* AP ............... OFF",
        "* USE RUDDER FOR LATERAL CTRL",
        LAND_ASAP
    ]),

    alert!(600, Caution, "ALPHA FLOOR INOP", |c| c.faults.alpha_floor_fail, latch, []),
    alert!(610, Warning, "PITCH TRIM RUNAWAY", |c| c.faults.trim_runaway, latch, [
        "* PITCH TRIM ........ OFF",
        "* USE MAN PITCH TRIM",
        "* STAB JAM PROC ..... APPLY"
    ]),
    alert!(620, Caution, "L/G DISAGREE", |c| c.gear.position == GearPosition::Transit),
    alert!(621, Warning, "L/G NOT DOWN", |c| {
        !c.gear.weight_on_wheels
            && c.gear.position != GearPosition::Down
            && c.sensors.altitude_ft < 2000.0
    }),

    alert!(700, Memo, "ALPHA PROT", |c| c.status.alpha_prot),
    alert!(710, Memo, "ALPHA FLOOR ACTIVE", |c| c.status.alpha_floor),

    alert!(800, Warning, "AP OFF", |c| c.ap_just_disconnected, latch, []),
    alert!(810, Warning, "ELEC EMER CONFIG", |c| c.faults.total_electrical_fail, latch, [
        "* ALL BUSES ........ OFF",
        "* EMER GEN ......... ON",
        "* SHED ALL NON-ESS LOADS",
        LAND_ASAP
    ]),
    alert!(811, Caution, "ELEC AC BUS FAULT", |c| {
        c.faults.partial_electrical_fail && !c.faults.total_electrical_fail
    }, latch, [
        "* AC BUS 1 ......... OFF",
        "* GEN 1 ............ CHECK",
        "* SHED NON-ESS LOADS"
    ]),
    alert!(820, Caution, "NAV ADR DISAGREE", |c| c.faults.pitot_blocked, latch, [
        "* SPD .............. UNRELIABLE",
        "* ALT .............. UNRELIABLE",
        "* USE BUSS GUIDANCE",
        "* PITCH & POWER AS PER BUSS",
        "* STANDBY INSTRUMENTS ... CHECK"
    ]),

    // Shares its id with the NORMAL memo published after the table
    alert!(900, Caution, "ENG 1 N1 FAULT", |c| c.faults.eng1_n1_sensor_fail, latch, [
        "* ENG 1 N1 ......... UNRELIABLE",
        "* MONITOR ENG 1 PERFORMANCE"
    ]),
    alert!(901, Caution, "ENG 1 VIBRATION", |c| c.faults.eng1_vibration_high, latch, [
        "* ENG 1 ............ MONITOR",
        "* IF ABNORMAL: ENG 1 ... SHUT DOWN",
        "* MAX THRUST ........ REDUCED"
    ]),
    alert!(902, Warning, "ENG 1 OIL LO PR", |c| c.faults.eng1_oil_pressure_low, latch, [
        "* ENG 1 ............ SHUT DOWN",
        LAND_ASAP
    ]),
    alert!(903, Warning, "ENG 1 STALL", |c| c.faults.eng1_compressor_stall, latch, [
        "* ENG 1 THR LEVER ... IDLE",
        "  THEN ADVANCE SLOWLY",
        "* IF STALL PERSISTS:",
        "  ENG 1 ............ SHUT DOWN"
    ]),

    alert!(950, Caution, "GEN 1 FAULT", |c| c.faults.gen1_fail, latch, [
        "* GEN 1 ............. OFF",
        "* APU START ......... CONSIDER",
        "* SHED NON-ESS LOADS"
    ]),
    alert!(951, Caution, "GEN 2 FAULT", |c| c.faults.gen2_fail, latch, [
        "* GEN 2 ............. OFF",
        "* APU START ......... CONSIDER"
    ]),
    alert!(952, Warning, "ELEC EMER CONFIG", |c| {
        c.faults.gen1_fail && c.faults.gen2_fail && !c.apu.running
    }, latch, [
        "* RAT DEPLOYED",
        "* EMERGENCY ELECTRICAL ONLY",
        LAND_ASAP
    ]),
    alert!(953, Caution, "BAT 1 FAULT", |c| c.faults.bat1_fail, latch, [
        "* BAT 1 ............. OFF",
        "* BAT 2 ............. MONITOR"
    ]),

    alert!(970, Caution, "GREEN ENG 1 PUMP", |c| c.faults.green_eng1_pump_fail, latch, [
        "* GREEN ENG 1 PUMP .. OFF",
        "* GREEN PRESSURE .... CHECK"
    ]),
    alert!(971, Caution, "BLUE ELEC PUMP", |c| c.faults.blue_elec_pump_fail, latch, [
        "* BLUE ELEC PUMP .... OFF",
        "* BLUE PRESSURE ..... CHECK"
    ]),
    alert!(972, Caution, "GREEN RSVR LO", |c| c.faults.green_reservoir_low, latch, [
        "* GREEN RSVR ........ LOW",
        "* CHECK FOR LEAK",
        "* FLT CTRL .......... DEGRADED"
    ]),
    alert!(990, Caution, "ELEV L ACT FAULT", |c| c.faults.elevator_left_actuator_fail, latch, [
        "* ELEVATOR LEFT ..... FAILED",
        "* FLT CTRL .......... DEGRADED",
        LAND_ASAP
    ]),
];

/// Evaluates every definition once, in table order, then the NORMAL memo.
pub fn publish(alerts: &mut AlertManager, context: &AlertContext) {
    for definition in CATALOGUE.iter() {
        let active = (definition.condition)(context);
        let edge = alerts.set(
            definition.id,
            definition.level,
            definition.text,
            active,
            definition.latch,
            definition.actions,
        );
        if edge.became_active {
            match definition.level {
                Warning => warn!("{} {}", definition.level, definition.text),
                _ => debug!("{} {}", definition.level, definition.text),
            }
        }
    }

    let any_non_memo = alerts.all().iter().any(|a| a.shown() && a.level != Memo);
    alerts.set(NORMAL_ID, Memo, "NORMAL", !any_non_memo, false, &[]);
}
