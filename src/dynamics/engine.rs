use crate::algorithm::{alpha, lerp};
use crate::types::{EngineData, EngineState, Faults};

const SPOOL_RATE: f32 = 1.5;
const SINGLE_ENGINE_EGT_PENALTY: f32 = 50.0;
const VIBRATION_THRUST: f32 = 0.85;
const COMPRESSOR_STALL_THRUST: f32 = 0.5;

pub fn thrust_multiplier(engines: &EngineState, faults: &Faults) -> f32 {
    let running = match engines.running_count() {
        0 => 0.0,
        1 => 0.5,
        _ => 1.0,
    };
    let mut multiplier = running;
    if faults.eng1_vibration_high || faults.eng2_vibration_high {
        multiplier *= VIBRATION_THRUST;
    }
    if faults.eng1_compressor_stall || faults.eng2_compressor_stall {
        multiplier *= COMPRESSOR_STALL_THRUST;
    }
    multiplier
}

// Positive when only the left engine is running, rolling and yawing the aircraft right
pub fn asymmetry(engines: &EngineState) -> f32 {
    match (engines.engine1_running, engines.engine2_running) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

fn target(engines: &EngineState, lever: f32) -> EngineData {
    if engines.running_count() == 0 {
        return EngineData { n1_percent: 0.0, n2_percent: 0.0, egt_c: 0.0, fuel_flow: 0.0 };
    }
    let mut egt = 300.0 + lever * 600.0;
    if engines.running_count() == 1 {
        egt += SINGLE_ENGINE_EGT_PENALTY;
    }
    EngineData {
        n1_percent: 20.0 + lever * 80.0,
        n2_percent: 50.0 + lever * 50.0,
        egt_c: egt,
        fuel_flow: 300.0 + lever * 2700.0,
    }
}

// Spools toward the lever position, fuel flow settles at half the rate
pub fn spool(data: &mut EngineData, engines: &EngineState, lever: f32, dt: f32) {
    let target = target(engines, lever);
    let blend = alpha(SPOOL_RATE, dt);
    data.n1_percent = lerp(data.n1_percent, target.n1_percent, blend);
    data.n2_percent = lerp(data.n2_percent, target.n2_percent, blend);
    data.egt_c = lerp(data.egt_c, target.egt_c, blend);
    data.fuel_flow = lerp(data.fuel_flow, target.fuel_flow, blend * 0.5);
}

#[cfg(test)]
mod test {
    #[test]
    fn test_thrust_multiplier() {
        use super::thrust_multiplier;
        use crate::types::{EngineState, Faults};

        let mut engines = EngineState::default();
        let mut faults = Faults::default();
        assert_eq!(thrust_multiplier(&engines, &faults), 1.0);
        faults.eng2_vibration_high = true;
        assert_eq!(thrust_multiplier(&engines, &faults), 0.85);
        faults.eng1_compressor_stall = true;
        assert!((thrust_multiplier(&engines, &faults) - 0.425).abs() < 1e-6);

        engines.engine1_running = false;
        let faults = Faults::default();
        assert_eq!(thrust_multiplier(&engines, &faults), 0.5);
        engines.engine2_running = false;
        assert_eq!(thrust_multiplier(&engines, &faults), 0.0);
    }

    #[test]
    fn test_spool() {
        use super::spool;
        use crate::types::{EngineData, EngineState};

        let mut data = EngineData::default();
        let engines = EngineState::default();
        for _ in 0..1200 {
            spool(&mut data, &engines, 1.0, 1.0 / 60.0);
        }
        assert!((data.n1_percent - 100.0).abs() < 0.01);
        assert!((data.egt_c - 900.0).abs() < 0.1);
        assert!((data.fuel_flow - 3000.0).abs() < 1.0);

        let single = EngineState { engine2_running: false, ..Default::default() };
        for _ in 0..1200 {
            spool(&mut data, &single, 1.0, 1.0 / 60.0);
        }
        assert!((data.egt_c - 950.0).abs() < 0.1);

        let shutdown = EngineState { engine1_running: false, engine2_running: false, ..Default::default() };
        let mut previous = data.n1_percent;
        for _ in 0..60 {
            spool(&mut data, &shutdown, 1.0, 1.0 / 60.0);
            assert!(data.n1_percent < previous);
            previous = data.n1_percent;
        }
    }
}
