//! Fixed-order runner pipeline for one simulation run

use tracing::debug;

use crate::command::LaunchCommand;
use crate::context::{LaunchContext, ResolvedLaunch};
use crate::error::Result;
use crate::runners::{self, RunnerKind};

/// Sentinel device index meaning "no explicit device slot", used by a phy
/// process when no predecessor or explicit configuration assigned one.
pub const NO_DEVICE_SLOT: i64 = -1;

/// Ordered sequence of runner entries, conventionally phy first, then the
/// devices in declaration order.
///
/// Resolution is strictly sequential: each entry reads the already-resolved
/// index of the entry immediately before it, never an earlier one. No entry
/// is composed before its index has been resolved.
#[derive(Debug, Default)]
pub struct Pipeline {
    entries: Vec<(RunnerKind, LaunchContext)>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: RunnerKind, context: LaunchContext) {
        self.entries.push((kind, context));
    }

    pub fn with_entry(mut self, kind: RunnerKind, context: LaunchContext) -> Self {
        self.push(kind, context);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve every entry's device index, in pipeline order.
    ///
    /// Only a phy entry may come out of propagation unresolved; it then
    /// takes [`NO_DEVICE_SLOT`] so that later entries still observe a
    /// resolved predecessor.
    pub fn resolve(&self) -> Result<Vec<ResolvedLaunch>> {
        let mut resolved = Vec::with_capacity(self.entries.len());
        let mut previous: Option<i64> = None;

        for (kind, context) in &self.entries {
            let index = runners::resolve_index(*kind, context.device_index, previous)?
                .unwrap_or(NO_DEVICE_SLOT);
            debug!(runner = kind.name(), index, "resolved device index");
            previous = Some(index);
            resolved.push(ResolvedLaunch {
                kind: *kind,
                sim_id: context.sim_id.clone(),
                device_index: index,
                domains_all: context.domains_all.clone(),
                sim_length: context.sim_length,
                extra_args: context.extra_args.clone(),
                exe_file: context.exe_file.clone(),
            });
        }

        Ok(resolved)
    }

    /// Resolve indices and compose the launch command for every entry
    pub fn compose(&self) -> Result<Vec<LaunchCommand>> {
        self.resolve()?.iter().map(runners::compose).collect()
    }
}
