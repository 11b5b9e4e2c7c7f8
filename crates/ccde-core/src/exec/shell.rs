use std::process::Command;

use tracing::debug;

use super::errors::ExecError;
use super::traits::{CommandOutput, CommandRunner};

/// Environment applied to every shell so startup commands stay out of history.
const HISTORY_ENV: [(&str, &str); 2] = [
    ("HISTCONTROL", "ignorespace:ignoredups"),
    ("HISTFILE", "/dev/null"),
];

/// Runs commands with `sh -c`, inheriting the caller's environment.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::with_shell("sh")
    }

    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    fn command(&self, command: &str) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command).envs(HISTORY_ENV);
        cmd
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandOutput, ExecError> {
        debug!(
            event = "core.exec.shell_started",
            shell = %self.shell,
            command = command
        );

        let output = self
            .command(command)
            .output()
            .map_err(|source| ExecError::SpawnFailed {
                command: command.to_string(),
                source,
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(
            event = "core.exec.shell_completed",
            command = command,
            code = ?result.code
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_env_is_set() {
        let runner = ShellRunner::new();
        let cmd = runner.command("true");
        let envs: Vec<_> = cmd
            .get_envs()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.map(|v| v.to_string_lossy().into_owned()),
                )
            })
            .collect();
        assert!(envs.contains(&(
            "HISTCONTROL".to_string(),
            Some("ignorespace:ignoredups".to_string())
        )));
        assert!(envs.contains(&("HISTFILE".to_string(), Some("/dev/null".to_string()))));
        assert_eq!(cmd.get_program(), "sh");
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_through_shell() {
        let output = ShellRunner::new()
            .run("echo \"$HISTFILE\"; echo oops >&2; exit 3")
            .unwrap();
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout.trim(), "/dev/null");
        assert_eq!(output.stderr.trim(), "oops");
        assert!(!output.success());
    }

    #[test]
    fn test_missing_shell_is_spawn_error() {
        let result = ShellRunner::with_shell("/nonexistent/ccde-shell").run("true");
        assert!(matches!(result, Err(ExecError::SpawnFailed { .. })));
    }
}
