use crate::errors::CcdeError;

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("Failed to spawn shell for '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed with exit code {}: {command}{}", display_code(*code), display_stderr(stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn display_code(code: Option<i32>) -> String {
    code.map_or_else(|| "unknown (terminated by signal)".to_string(), |c| c.to_string())
}

fn display_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}")
    }
}

impl CcdeError for ExecError {
    fn error_code(&self) -> &'static str {
        match self {
            ExecError::SpawnFailed { .. } => "EXEC_SPAWN_FAILED",
            ExecError::CommandFailed { .. } => "EXEC_COMMAND_FAILED",
        }
    }
}
