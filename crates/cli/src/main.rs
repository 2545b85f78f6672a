use std::fs;
use std::path::{Path, PathBuf};
use std::process::Child;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use bsim_runner_core::{LaunchCommand, RunnerKind, SimManifest};

/// Compose and launch BabbleSim simulation runs
#[derive(Parser)]
#[command(name = "bsim-runner", version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the launch commands for a simulation manifest
    Compose {
        /// Path to the simulation manifest (TOML)
        manifest: PathBuf,

        /// Emit the commands as JSON
        #[arg(short = 'j', long = "json")]
        json: bool,
    },
    /// Launch every process of a simulation run and wait for completion
    Run {
        /// Path to the simulation manifest (TOML)
        manifest: PathBuf,

        /// Show the commands without executing them
        #[arg(short = 'd', long = "dry-run")]
        dry_run: bool,
    },
    /// List the registered runner names
    Runners,
}

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Compose { manifest, json } => compose_command(&manifest, json),
        Commands::Run { manifest, dry_run } => run_command(&manifest, dry_run),
        Commands::Runners => runners_command(),
    }
}

fn load_manifest(path: &Path) -> Result<SimManifest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    let manifest: SimManifest = toml::from_str(&content)
        .with_context(|| format!("failed to parse manifest {}", path.display()))?;
    manifest.validate()?;
    Ok(manifest)
}

fn compose_commands(path: &Path) -> Result<Vec<LaunchCommand>> {
    let manifest = load_manifest(path)?;
    let commands = manifest.to_pipeline()?.compose()?;
    debug!(count = commands.len(), "composed launch commands");
    Ok(commands)
}

fn print_commands(commands: &[LaunchCommand]) {
    for command in commands {
        match &command.working_dir {
            Some(dir) => println!("cd {} && {}", dir.display(), command.to_shell_command()),
            None => println!("{}", command.to_shell_command()),
        }
    }
}

fn compose_command(path: &Path, json: bool) -> Result<()> {
    let commands = compose_commands(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&commands)?);
    } else {
        print_commands(&commands);
    }
    Ok(())
}

fn run_command(path: &Path, dry_run: bool) -> Result<()> {
    let commands = compose_commands(path)?;

    if dry_run {
        print_commands(&commands);
        return Ok(());
    }

    info!(count = commands.len(), "launching simulation processes");
    let children = spawn_all(&commands)?;

    let mut failed = false;
    for (command, mut child) in children {
        let status = child
            .wait()
            .with_context(|| format!("failed to wait for {}", command.to_shell_command()))?;
        if !status.success() {
            warn!(%status, "process failed: {}", command.to_shell_command());
            failed = true;
        }
    }

    if failed {
        bail!("one or more simulation processes failed");
    }
    Ok(())
}

/// Spawn every command of the run, in pipeline order.
///
/// If any spawn fails, the processes started so far are killed and reaped
/// before the error is returned; a failed launch must not leave a stray
/// phy or device holding the sim id.
fn spawn_all(commands: &[LaunchCommand]) -> Result<Vec<(&LaunchCommand, Child)>> {
    let mut children = Vec::with_capacity(commands.len());
    for command in commands {
        match command.spawn() {
            Ok(child) => children.push((command, child)),
            Err(err) => {
                for (started, mut child) in children {
                    warn!("killing already-started process: {}", started.to_shell_command());
                    let _ = child.kill();
                    let _ = child.wait();
                }
                return Err(err)
                    .with_context(|| format!("failed to spawn {}", command.to_shell_command()));
            }
        }
    }
    Ok(children)
}

fn runners_command() -> Result<()> {
    for kind in RunnerKind::all() {
        println!("{}", kind.name());
    }
    Ok(())
}
