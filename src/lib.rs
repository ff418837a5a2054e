#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
extern crate log;

pub mod alert;
pub mod algorithm;
pub mod config;
pub mod dynamics;
pub mod fcs;
pub mod gpws;
pub mod phase;
pub mod simulation;
pub mod types;
pub mod vspeeds;

pub use simulation::Simulation;
