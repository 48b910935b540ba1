/// Contains the environment context and global config
pub mod configs;
/// Contains the logger
pub mod log;

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use crate::errors::{BuildError, BuildResult, ToolStatus};
use log::{log, LogLevel};

/// Runs an external tool, treating an uninstalled tool as a skip.
/// # Arguments
/// * `tool` - Name of the executable
/// * `args` - Command line arguments
/// * `working_dir` - Directory to run the tool in
pub fn run_tool(tool: &str, args: &[&str], working_dir: &Path) -> BuildResult<ToolStatus> {
    run_tool_captured(tool, args, working_dir).map(|(status, _)| status)
}

/// Runs an external tool and captures its combined output.
///
/// Returns `ToolStatus::Missing` when the executable is not installed, a
/// `BuildError::Tool` when it runs and fails.
pub fn run_tool_captured(
    tool: &str,
    args: &[&str],
    working_dir: &Path,
) -> BuildResult<(ToolStatus, String)> {
    log(
        LogLevel::Info,
        &format!("{} {}", tool, args.join(" ")),
    );
    let output = match Command::new(tool).args(args).current_dir(working_dir).output() {
        Ok(output) => output,
        Err(why) if why.kind() == ErrorKind::NotFound => {
            log(
                LogLevel::Warn,
                &format!("{} not found, skipping", tool),
            );
            return Ok((ToolStatus::Missing, String::new()));
        }
        Err(why) => return Err(BuildError::io(working_dir, why)),
    };
    let mut text = String::from_utf8_lossy(&output.stdout).to_string();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    if !output.status.success() {
        let code = output.status.code().unwrap_or(1);
        log(
            LogLevel::Error,
            &format!("{} failed, look in the log for the error", tool),
        );
        log(LogLevel::Debug, &text);
        return Err(BuildError::Tool {
            tool: tool.to_string(),
            code,
        });
    }
    Ok((ToolStatus::Ran, text))
}

/// Runs a query command and returns its stdout, or `None` when the tool
/// is absent or unhappy. Nothing is logged, callers have a fallback.
pub fn query_tool(tool: &str, args: &[&str], working_dir: &Path) -> Option<String> {
    let output = Command::new(tool)
        .args(args)
        .current_dir(working_dir)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_tool_is_a_skip() {
        let status = run_tool(
            "burgerbuild-no-such-tool",
            &[],
            &PathBuf::from("."),
        )
        .unwrap();
        assert_eq!(status, ToolStatus::Missing);
    }

    #[test]
    fn failing_tool_reports_exit_code() {
        // `false` exits 1 on every unix host.
        #[cfg(unix)]
        {
            let err = run_tool("false", &[], &PathBuf::from(".")).unwrap_err();
            assert_eq!(err.exit_code(), 1);
        }
    }
}
