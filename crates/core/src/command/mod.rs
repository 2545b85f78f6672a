//! The launch command handed to the external process launcher

use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus};

use serde::Serialize;

/// A fully composed launch command: an argument vector plus the directory
/// the process must be started from.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchCommand {
    /// Full argument vector; the first element is the executable
    pub args: Vec<String>,
    /// Working directory override for the process launcher
    pub working_dir: Option<PathBuf>,
}

impl LaunchCommand {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Get the command as a shell string
    pub fn to_shell_command(&self) -> String {
        let mut cmd = String::new();
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                cmd.push(' ');
            }
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    /// Spawn the process without waiting for it
    pub fn spawn(&self) -> io::Result<Child> {
        self.command()?.spawn()
    }

    /// Run the process to completion
    pub fn execute(&self) -> io::Result<ExitStatus> {
        self.command()?.status()
    }

    fn command(&self) -> io::Result<Command> {
        let (program, rest) = self.args.split_first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty argument vector")
        })?;
        let mut command = Command::new(program);
        command.args(rest);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_command_joins_args_with_spaces() {
        let command = LaunchCommand::new(vec![
            "/opt/bsim/bin/bs_2G4_phy_v1".to_string(),
            "-s=trial".to_string(),
            "-D=2".to_string(),
        ]);
        assert_eq!(
            command.to_shell_command(),
            "/opt/bsim/bin/bs_2G4_phy_v1 -s=trial -D=2"
        );
    }

    #[test]
    fn shell_command_quotes_args_with_spaces() {
        let command = LaunchCommand::new(vec![
            "exe".to_string(),
            "-uid=trial run".to_string(),
        ]);
        assert_eq!(command.to_shell_command(), "exe '-uid=trial run'");
    }

    #[test]
    fn spawn_rejects_empty_argument_vector() {
        let command = LaunchCommand::new(vec![]);
        assert!(command.spawn().is_err());
    }
}
