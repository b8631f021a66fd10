//! The "run an external command" port.
//!
//! The diagnostics service only talks to this trait, so tests can hand it a
//! fake runner with canned outputs instead of spawning real processes.

use std::io;

use async_trait::async_trait;

/// Everything a finished process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` to completion and captures both streams.
    ///
    /// An `Err` means the process never started. A missing executable must be
    /// reported with [`io::ErrorKind::NotFound`].
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}
