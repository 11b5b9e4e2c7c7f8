pub mod batch;
pub mod compiler;
pub mod errors;
pub mod ratio;
pub mod raw;
pub mod tmux;
pub mod types;
pub mod validation;

// Re-export public API
pub use batch::to_batch_command;
pub use compiler::{commands_to_string, compile, find_focused_pane};
pub use errors::LayoutError;
pub use raw::{parse_layout, validate_document};
pub use types::{CompiledCommand, ContainerSpec, LayoutNode, LayoutSpec, PaneSpec, SplitDirection};
pub use validation::validate_layout;
