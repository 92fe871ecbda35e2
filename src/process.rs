//! Wrappers around `std::process::Command` that log the command line the way
//! CI logs expect (`+ program args`) and capture the child's output

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error(
        "`{command}` failed: {status}\n---stdout:\n{stdout}\n---stderr:\n{stderr}"
    )]
    Failed {
        command: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
}

/// `program arg1 arg2 ...` for log lines and error messages
fn format_command(command: &Command) -> String {
    let mut formatted = command.get_program().to_string_lossy().to_string();
    for arg in command.get_args() {
        formatted.push(' ');
        formatted.push_str(&arg.to_string_lossy());
    }
    formatted
}

fn run(command: &mut Command) -> Result<(String, String), ProcessError> {
    let formatted = format_command(command);
    info!("+ {}", formatted);
    let output = command
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ProcessError::Spawn {
            command: formatted.clone(),
            source,
        })?;
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    if !output.status.success() {
        return Err(ProcessError::Failed {
            command: formatted,
            status: output.status,
            stdout,
            stderr,
        });
    }
    Ok((stdout, stderr))
}

/// Runs the command to completion, discarding its output on success
pub fn check_call(command: &mut Command) -> Result<(), ProcessError> {
    let (stdout, stderr) = run(command)?;
    debug!("---stdout:\n{}\n---stderr:\n{}", stdout, stderr);
    Ok(())
}

/// Runs the command to completion and returns its stdout
pub fn check_output(command: &mut Command) -> Result<String, ProcessError> {
    let (stdout, stderr) = run(command)?;
    debug!("---stderr:\n{}", stderr);
    Ok(stdout)
}
