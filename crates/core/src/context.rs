//! Per-runner launch state threaded through the pipeline

use std::path::{Path, PathBuf};

use crate::runners::RunnerKind;

/// State for one process of a simulation run, before its device index has
/// been resolved.
///
/// Owned by exactly one pipeline entry. `sim_id`, `domains_all`, `sim_length`
/// and `extra_args` are fixed at construction; `device_index` starts unset
/// unless an explicit slot was configured.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    /// Identifier shared by every process in one simulation run
    pub sim_id: String,
    /// Device slot; unset until resolved by the pipeline
    pub device_index: Option<i64>,
    /// Every domain participating in the run, the phy included
    pub domains_all: Vec<String>,
    /// Requested simulated duration in microseconds, if bounded
    pub sim_length: Option<u64>,
    /// Opaque arguments forwarded verbatim after the generated flags
    pub extra_args: Vec<String>,
    /// Resolved path of the binary to execute
    pub exe_file: PathBuf,
}

impl LaunchContext {
    pub fn new(sim_id: impl Into<String>, exe_file: impl Into<PathBuf>) -> Self {
        Self {
            sim_id: sim_id.into(),
            device_index: None,
            domains_all: Vec::new(),
            sim_length: None,
            extra_args: Vec::new(),
            exe_file: exe_file.into(),
        }
    }

    /// Pin this process to an explicit device slot
    pub fn with_device_index(mut self, index: i64) -> Self {
        self.device_index = Some(index);
        self
    }

    pub fn with_domains(mut self, domains: Vec<String>) -> Self {
        self.domains_all = domains;
        self
    }

    pub fn with_sim_length(mut self, length: u64) -> Self {
        self.sim_length = Some(length);
        self
    }

    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }
}

/// A launch whose device index has been resolved; input to command
/// composition and read-only from here on.
#[derive(Debug, Clone)]
pub struct ResolvedLaunch {
    pub kind: RunnerKind,
    pub sim_id: String,
    /// Non-negative slot, or [`crate::pipeline::NO_DEVICE_SLOT`] for a phy
    /// with no explicit slot
    pub device_index: i64,
    pub domains_all: Vec<String>,
    pub sim_length: Option<u64>,
    pub extra_args: Vec<String>,
    pub exe_file: PathBuf,
}

impl ResolvedLaunch {
    /// Directory the process must be started from. The simulation binaries
    /// link their shared libraries with relative paths, so they only run
    /// correctly from their own directory.
    pub fn working_dir(&self) -> PathBuf {
        self.exe_file
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf()
    }
}
