pub mod aircraft;
pub mod autopilot;
pub mod control;
pub mod fault;
pub mod scenario;
pub mod sensor;

pub use aircraft::{
    APUState, EngineData, EngineState, FlapsPosition, GearPosition, HydraulicSystem, LandingGear,
    Speedbrakes, TrimSystem, Weather,
};
pub use autopilot::{AutopilotState, LateralMode, VerticalMode};
pub use control::{Axes, PilotInput, Surfaces};
pub use fault::Faults;
pub use scenario::StartupScenario;
pub use sensor::Sensors;
