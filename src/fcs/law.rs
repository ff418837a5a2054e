use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::types::{Axes, Faults};

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlLaw {
    #[display(fmt = "NORMAL")]
    Normal,
    #[display(fmt = "ALTERNATE")]
    Alternate,
    #[display(fmt = "DIRECT")]
    Direct,
}

impl Default for ControlLaw {
    fn default() -> Self {
        Self::Normal
    }
}

impl ControlLaw {
    // Direct > Alternate > Normal, nothing else matters
    pub fn select(faults: &Faults) -> Self {
        if faults.elac1_fail && faults.elac2_fail {
            Self::Direct
        } else if faults.elac1_fail || faults.elac2_fail || faults.sec1_fail {
            Self::Alternate
        } else {
            Self::Normal
        }
    }

    // Surface authority per axis, x aileron and y elevator
    pub fn authority(self) -> Axes {
        match self {
            Self::Normal => Axes::new(1.0, 1.0, 0.0),
            Self::Alternate => Axes::new(0.70, 0.65, 0.0),
            Self::Direct => Axes::new(0.50, 0.45, 0.0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightControlStatus {
    pub law: ControlLaw,
    pub elac1_avail: bool,
    pub elac2_avail: bool,
    pub sec1_avail: bool,
    pub sec2_avail: bool,
    pub sec3_avail: bool,
    pub alpha_prot: bool,
    pub alpha_floor: bool,
    pub high_speed_prot: bool,
}

impl Default for FlightControlStatus {
    fn default() -> Self {
        Self {
            law: ControlLaw::Normal,
            elac1_avail: true,
            elac2_avail: true,
            sec1_avail: true,
            sec2_avail: true,
            sec3_avail: true,
            alpha_prot: false,
            alpha_floor: false,
            high_speed_prot: false,
        }
    }
}
