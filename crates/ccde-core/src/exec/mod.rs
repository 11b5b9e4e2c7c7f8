pub mod errors;
pub mod handler;
pub mod shell;
pub mod traits;

// Re-export public API
pub use errors::ExecError;
pub use handler::{execute_batch, execute_commands};
pub use shell::ShellRunner;
pub use traits::{CommandOutput, CommandRunner};
