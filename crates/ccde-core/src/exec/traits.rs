use super::errors::ExecError;

/// Exit status and captured output of one shell command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs one shell command line to completion.
///
/// A non-zero exit is reported through [`CommandOutput::code`], not as an
/// error; `Err` means the command could not be run at all.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<CommandOutput, ExecError>;
}
