//! External command execution helpers

use log::error;
use std::process::{Command, Output};

use crate::error::{Result, SplitError};
use crate::logging;

/// Execute a simple command and return the output
pub fn run_command(cmd: &mut Command) -> Result<Output> {
    logging::log_command(cmd);

    let output = cmd.output().map_err(|e| {
        error!("Failed to execute command: {}", e);
        SplitError::CommandExecution(format!("Failed to execute command: {}", e))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!(
            "Command failed with exit code {}: {}",
            output.status.code().unwrap_or(-1),
            stderr
        );

        return Err(SplitError::CommandExecution(format!(
            "Command failed with exit code {}: {}",
            output.status.code().unwrap_or(-1),
            stderr
        )));
    }

    Ok(output)
}

/// Check whether an external tool is runnable by asking for its version
pub fn is_tool_available(tool: &str) -> bool {
    Command::new(tool)
        .arg("-version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_captures_stdout() {
        let mut cmd = Command::new("echo");
        cmd.arg("hello");

        let output = run_command(&mut cmd).unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    }

    #[test]
    fn test_run_command_nonzero_exit() {
        let mut cmd = Command::new("false");

        let result = run_command(&mut cmd);
        assert!(matches!(result, Err(SplitError::CommandExecution(_))));
    }

    #[test]
    fn test_run_command_missing_binary() {
        let mut cmd = Command::new("episplit-test-no-such-binary");

        let result = run_command(&mut cmd);
        assert!(matches!(result, Err(SplitError::CommandExecution(_))));
    }

    #[test]
    fn test_is_tool_available_missing_binary() {
        assert!(!is_tool_available("episplit-test-no-such-binary"));
    }
}
