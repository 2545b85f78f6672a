//! Argument-vector composition for each runner variant

use tracing::debug;

use super::RunnerKind;
use crate::command::LaunchCommand;
use crate::context::ResolvedLaunch;
use crate::error::{Error, Result};

/// Compose the argument vector and working directory for one resolved launch.
///
/// Flag order is significant: the simulation binaries parse their flags
/// positionally and do not re-sort them.
pub fn compose(launch: &ResolvedLaunch) -> Result<LaunchCommand> {
    let mut args = vec![
        launch.exe_file.display().to_string(),
        format!("-s={}", launch.sim_id),
    ];

    match launch.kind {
        // The Zephyr variant shares the device command body; it differs only
        // by identity and the binary it selects. Zephyr-specific flags would
        // get their own arm here.
        RunnerKind::Device | RunnerKind::Zephyr => {
            args.push(format!("-d={}", launch.device_index));
            args.extend(launch.extra_args.iter().cloned());
        }
        RunnerKind::Phy => {
            if launch.domains_all.is_empty() {
                return Err(Error::EmptyDomains);
            }
            args.extend(launch.extra_args.iter().cloned());
            if let Some(length) = launch.sim_length {
                args.push(format!("-sim_length={length}"));
            }
            // The phy is told the number of device domains, excluding itself
            args.push(format!("-D={}", launch.domains_all.len() - 1));
        }
    }

    debug!(runner = launch.kind.name(), "composed {} argument(s)", args.len());

    Ok(LaunchCommand::new(args).with_working_dir(launch.working_dir()))
}
