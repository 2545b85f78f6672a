//! bsim-runner-core - launch-command composition for BabbleSim simulation runs
//!
//! This crate provides functionality to:
//! - Describe the processes of one simulation run (one phy, one or more devices)
//! - Resolve device indices along a fixed-order runner pipeline
//! - Generate the exact argument vector and working directory each simulation
//!   binary must be launched with
pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod runners;

// Re-export commonly used types
pub use command::LaunchCommand;
pub use config::{DeviceConfig, PhyConfig, SimManifest};
pub use context::{LaunchContext, ResolvedLaunch};
pub use error::{Error, Result};
pub use pipeline::{NO_DEVICE_SLOT, Pipeline};
pub use runners::RunnerKind;
