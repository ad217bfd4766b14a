use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {code}")]
    Failed { command: String, code: i32 },

    #[error("`{command}` was terminated by a signal")]
    Killed { command: String },
}

/// Run a fully-formed shell command, streaming its output straight to this
/// process's stdout/stderr. Any non-zero exit is an error; the caller decides
/// whether that aborts the run.
pub fn run_shell(command: &str) -> Result<(), CommandError> {
    tracing::debug!("Running: {}", command);

    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .status()
        .map_err(|source| CommandError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if status.success() {
        return Ok(());
    }

    match status.code() {
        Some(code) => Err(CommandError::Failed {
            command: command.to_string(),
            code,
        }),
        None => Err(CommandError::Killed {
            command: command.to_string(),
        }),
    }
}
