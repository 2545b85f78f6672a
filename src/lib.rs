//! Workspace facade re-exporting the core API, used by the workspace-level
//! integration tests.
pub use bsim_runner_core::*;
