//! Workspace-level integration tests for xcbuild-runner live in `tests/`.
pub use xcbuild_runner_core::*;
