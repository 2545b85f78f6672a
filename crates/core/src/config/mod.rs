//! Simulation manifest: the configuration describing one simulation run

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::LaunchContext;
use crate::error::{Error, Result};
use crate::pipeline::Pipeline;
use crate::runners::RunnerKind;

/// Phy process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhyConfig {
    /// Path to the phy binary (e.g. `bs_2G4_phy_v1`)
    pub exe: PathBuf,
    /// Extra arguments forwarded verbatim
    #[serde(default)]
    pub args: Vec<String>,
    /// Explicit device slot; left unset, the phy takes the sentinel slot
    #[serde(default)]
    pub index: Option<i64>,
}

/// One device process of the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Registered runner name; defaults to `bsim_device`
    #[serde(default)]
    pub runner: Option<String>,
    /// Path to the device binary
    pub exe: PathBuf,
    /// Extra arguments forwarded verbatim
    #[serde(default)]
    pub args: Vec<String>,
    /// Domain name this device contributes to the run
    #[serde(default)]
    pub domain: Option<String>,
    /// Explicit device slot override
    #[serde(default)]
    pub index: Option<i64>,
}

impl DeviceConfig {
    fn runner_kind(&self) -> Result<RunnerKind> {
        match &self.runner {
            Some(name) => RunnerKind::from_name(name),
            None => Ok(RunnerKind::Device),
        }
    }
}

/// Description of one simulation run: one phy process and the devices it
/// coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimManifest {
    /// Identifier shared by every process of the run
    pub sim_id: String,
    /// Simulated duration in microseconds; absent means run until terminated
    #[serde(default)]
    pub sim_length: Option<u64>,
    pub phy: PhyConfig,
    #[serde(default, rename = "device")]
    pub devices: Vec<DeviceConfig>,
}

impl SimManifest {
    /// Load a manifest from a JSON file. The CLI's TOML manifests go
    /// through `toml::from_str` instead; both deserialize into this type.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest: Self = serde_json::from_str(&content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check manifest-level invariants
    pub fn validate(&self) -> Result<()> {
        if self.sim_id.is_empty() {
            return Err(Error::ManifestError("sim_id must not be empty".to_string()));
        }
        if self.devices.is_empty() {
            return Err(Error::ManifestError(
                "at least one device is required".to_string(),
            ));
        }
        for device in &self.devices {
            let kind = device.runner_kind()?;
            if !kind.is_device() {
                return Err(Error::ManifestError(format!(
                    "{kind} is not a device runner"
                )));
            }
        }
        Ok(())
    }

    /// Every domain of the run, the phy's own first
    fn domains(&self) -> Vec<String> {
        let mut domains = vec!["phy".to_string()];
        for (position, device) in self.devices.iter().enumerate() {
            domains.push(
                device
                    .domain
                    .clone()
                    .unwrap_or_else(|| format!("dev_{position}")),
            );
        }
        domains
    }

    /// Build the runner pipeline for this manifest: phy first, then the
    /// devices in declaration order
    pub fn to_pipeline(&self) -> Result<Pipeline> {
        self.validate()?;

        let domains = self.domains();
        let mut pipeline = Pipeline::new();

        let mut phy = LaunchContext::new(&self.sim_id, &self.phy.exe)
            .with_domains(domains.clone())
            .with_extra_args(self.phy.args.clone());
        if let Some(length) = self.sim_length {
            phy = phy.with_sim_length(length);
        }
        if let Some(index) = self.phy.index {
            phy = phy.with_device_index(index);
        }
        pipeline.push(RunnerKind::Phy, phy);

        for device in &self.devices {
            let mut context = LaunchContext::new(&self.sim_id, &device.exe)
                .with_domains(domains.clone())
                .with_extra_args(device.args.clone());
            if let Some(index) = device.index {
                context = context.with_device_index(index);
            }
            pipeline.push(device.runner_kind()?, context);
        }

        debug!(entries = pipeline.len(), "built pipeline from manifest");
        Ok(pipeline)
    }
}
