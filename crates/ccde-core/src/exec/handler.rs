use tracing::{error, info};

use crate::layout::{CompiledCommand, to_batch_command};

use super::errors::ExecError;
use super::traits::{CommandOutput, CommandRunner};

/// Run compiled commands one at a time, stopping at the first failure.
///
/// # Errors
///
/// Returns the runner's error if a command cannot be started, and
/// `ExecError::CommandFailed` for the first command that exits non-zero.
/// Commands after the failing one are not run.
pub fn execute_commands<R: CommandRunner + ?Sized>(
    runner: &R,
    commands: &[CompiledCommand],
) -> Result<(), ExecError> {
    info!(event = "core.exec.execute_started", commands = commands.len());

    for (position, command) in commands.iter().enumerate() {
        info!(
            event = "core.exec.command_started",
            position = position,
            description = %command.description
        );
        run_checked(runner, &command.text)?;
    }

    info!(event = "core.exec.execute_completed", commands = commands.len());
    Ok(())
}

/// Run compiled commands as a single batched `tmux` invocation.
///
/// An empty command list runs nothing.
pub fn execute_batch<R: CommandRunner + ?Sized>(
    runner: &R,
    commands: &[CompiledCommand],
) -> Result<(), ExecError> {
    let batch = to_batch_command(commands);
    if batch.is_empty() {
        return Ok(());
    }

    info!(event = "core.exec.batch_started", commands = commands.len());
    run_checked(runner, &batch)?;
    info!(event = "core.exec.batch_completed");
    Ok(())
}

fn run_checked<R: CommandRunner + ?Sized>(
    runner: &R,
    command: &str,
) -> Result<CommandOutput, ExecError> {
    let output = runner.run(command)?;
    if output.success() {
        return Ok(output);
    }

    error!(
        event = "core.exec.command_failed",
        command = command,
        code = ?output.code,
        stderr = %output.stderr.trim()
    );
    Err(ExecError::CommandFailed {
        command: command.to_string(),
        code: output.code,
        stderr: output.stderr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every command and fails the ones containing `fail_on`.
    #[derive(Default)]
    struct RecordingRunner {
        seen: RefCell<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &str) -> Result<CommandOutput, ExecError> {
            self.seen.borrow_mut().push(command.to_string());
            let failed = self.fail_on.is_some_and(|needle| command.contains(needle));
            Ok(CommandOutput {
                code: Some(if failed { 1 } else { 0 }),
                stdout: String::new(),
                stderr: if failed {
                    "can't find pane".to_string()
                } else {
                    String::new()
                },
            })
        }
    }

    fn commands() -> Vec<CompiledCommand> {
        vec![
            CompiledCommand::new("tmux new-window", "Create new window"),
            CompiledCommand::new("tmux select-pane -t 1", "Select pane 1"),
            CompiledCommand::new("tmux send-keys \"vim\" Enter", "Run: vim"),
        ]
    }

    #[test]
    fn test_runs_each_command_in_order() {
        let runner = RecordingRunner::default();
        execute_commands(&runner, &commands()).unwrap();
        assert_eq!(
            *runner.seen.borrow(),
            vec![
                "tmux new-window",
                "tmux select-pane -t 1",
                "tmux send-keys \"vim\" Enter",
            ]
        );
    }

    #[test]
    fn test_stops_at_first_failure() {
        let runner = RecordingRunner {
            fail_on: Some("select-pane"),
            ..Default::default()
        };
        match execute_commands(&runner, &commands()) {
            Err(ExecError::CommandFailed {
                command,
                code,
                stderr,
            }) => {
                assert_eq!(command, "tmux select-pane -t 1");
                assert_eq!(code, Some(1));
                assert_eq!(stderr, "can't find pane");
            }
            other => panic!("expected command failure, got {other:?}"),
        }
        assert_eq!(runner.seen.borrow().len(), 2);
    }

    #[test]
    fn test_batch_runs_once() {
        let runner = RecordingRunner::default();
        execute_batch(&runner, &commands()).unwrap();
        assert_eq!(
            *runner.seen.borrow(),
            vec!["tmux new-window \\; select-pane -t 1 \\; send-keys -t 1 \"vim\" Enter"]
        );
    }

    #[test]
    fn test_empty_batch_runs_nothing() {
        let runner = RecordingRunner::default();
        execute_batch(&runner, &[]).unwrap();
        assert!(runner.seen.borrow().is_empty());
    }

    #[test]
    fn test_runner_as_trait_object() {
        let runner = RecordingRunner::default();
        let dyn_runner: &dyn CommandRunner = &runner;
        execute_commands(dyn_runner, &commands()[..1]).unwrap();
        assert_eq!(runner.seen.borrow().len(), 1);
    }
}
