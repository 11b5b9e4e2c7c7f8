//! ccde-core: compile declarative tmux layouts into tmux commands
//!
//! A layout file describes one tmux window as a tree of horizontal and
//! vertical splits. This library validates that tree, compiles it into the
//! ordered tmux commands that rebuild it, and optionally runs them.
//!
//! # Main Entry Points
//!
//! - [`loading`] - Read YAML/JSON layout files into a [`LayoutSpec`]
//! - [`layout`] - Validate and compile layouts
//! - [`exec`] - Run compiled commands through a shell
//! - [`config`] - The user's default layout

pub mod config;
pub mod errors;
pub mod events;
pub mod exec;
pub mod layout;
pub mod loading;
pub mod logging;

pub use ccde_paths::{CcdePaths, PathError};
pub use config::{ConfigError, load_default_layout, load_default_layout_from};
pub use errors::{CcdeError, CcdeResult};
pub use exec::{
    CommandOutput, CommandRunner, ExecError, ShellRunner, execute_batch, execute_commands,
};
pub use layout::{
    CompiledCommand, ContainerSpec, LayoutError, LayoutNode, LayoutSpec, PaneSpec,
    SplitDirection, commands_to_string, compile, to_batch_command, validate_layout,
};
pub use loading::{LayoutFormat, LoadError, parse_layout_file, parse_layout_str};

// Re-export logging initialization
pub use logging::init_logging;
