use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use netkit_common::process::{CommandOutput, CommandRunner};
use tokio::process::Command;
use tracing::debug;

/// Runs commands on the host through `tokio::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        debug!(program, ?args, "spawning command");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        debug!(
            program,
            status = ?output.status.code(),
            stdout_len = output.stdout.len(),
            "command finished"
        );

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
