//! Runner identities for the processes of a simulation run

use std::fmt;

use crate::error::{Error, Result};

/// The runner variants that can participate in a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunnerKind {
    /// An arbitrary BabbleSim device application
    Device,
    /// The 2G4 radio physical layer coordinator
    Phy,
    /// A device running a full Zephyr image
    Zephyr,
}

impl RunnerKind {
    /// Identity string used for registration and manifest lookup.
    ///
    /// These tokens are a stable external contract; any configuration that
    /// references a runner by name must use them verbatim.
    pub fn name(&self) -> &'static str {
        match self {
            RunnerKind::Device => "bsim_device",
            RunnerKind::Phy => "bsim_phy",
            RunnerKind::Zephyr => "bsim_zephyr",
        }
    }

    /// Look up a runner by its registered name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "bsim_device" => Ok(RunnerKind::Device),
            "bsim_phy" => Ok(RunnerKind::Phy),
            "bsim_zephyr" => Ok(RunnerKind::Zephyr),
            other => Err(Error::UnknownRunner(other.to_string())),
        }
    }

    /// All registered runners, in registration order
    pub fn all() -> [RunnerKind; 3] {
        [RunnerKind::Phy, RunnerKind::Device, RunnerKind::Zephyr]
    }

    /// Whether this runner launches a device process (as opposed to the phy)
    pub fn is_device(&self) -> bool {
        matches!(self, RunnerKind::Device | RunnerKind::Zephyr)
    }
}

impl fmt::Display for RunnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_strings_are_stable() {
        assert_eq!(RunnerKind::Device.name(), "bsim_device");
        assert_eq!(RunnerKind::Phy.name(), "bsim_phy");
        assert_eq!(RunnerKind::Zephyr.name(), "bsim_zephyr");
    }

    #[test]
    fn from_name_round_trips_every_runner() {
        for kind in RunnerKind::all() {
            assert_eq!(RunnerKind::from_name(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn from_name_rejects_unknown_runner() {
        match RunnerKind::from_name("bsim_bogus") {
            Err(Error::UnknownRunner(name)) => assert_eq!(name, "bsim_bogus"),
            other => panic!("Expected UnknownRunner, got {other:?}"),
        }
    }

    #[test]
    fn phy_is_not_a_device_runner() {
        assert!(!RunnerKind::Phy.is_device());
        assert!(RunnerKind::Device.is_device());
        assert!(RunnerKind::Zephyr.is_device());
    }
}
