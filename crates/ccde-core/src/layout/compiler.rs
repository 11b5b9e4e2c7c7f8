//! Layout tree to tmux command compilation.
//!
//! Panes are addressed by index, assigned from 1 in a single depth-first,
//! left-to-right walk. Every container first gets all of its splits, so by the
//! time its children are visited the panes they address already exist.

use tracing::{debug, info};

use super::errors::LayoutError;
use super::ratio::split_percentages;
use super::tmux::{
    COMMAND_SEPARATOR, CURRENT_PANE_PATH, NewWindowArgs, SplitWindowArgs, TmuxCommand,
};
use super::types::{CompiledCommand, ContainerSpec, LayoutNode, LayoutSpec};
use super::validation::{ROOT_PATH, check_ratio_length, child_path};

/// Compile a layout into the ordered tmux commands that rebuild it.
///
/// `working_directory` is passed to the new window and every split; without it
/// tmux's `#{pane_current_path}` is used. `window_name` names the new window.
///
/// # Errors
///
/// Returns `LayoutError::RatioLengthMismatch` naming the first container
/// whose ratio length differs from its children.
pub fn compile(
    layout: &LayoutSpec,
    working_directory: Option<&str>,
    window_name: Option<&str>,
) -> Result<Vec<CompiledCommand>, LayoutError> {
    info!(
        event = "core.layout.compile_started",
        name = ?layout.name,
        panes = layout.pane_count(),
        working_directory = ?working_directory,
        window_name = ?window_name
    );

    let root = &layout.layout;
    let start_directory = working_directory.unwrap_or(CURRENT_PANE_PATH);
    let mut emitter = Emitter::new(start_directory);

    emitter.push(
        TmuxCommand::NewWindow(NewWindowArgs {
            name: window_name,
            start_directory,
        }),
        "Create new window",
    );

    // The new window is already the root's start pane, no select needed.
    check_ratio_length(root, ROOT_PATH)?;
    emitter.splits(root);
    let next_index = emitter.children(root, ROOT_PATH, 1)?;

    if let Some(title) = find_focused_pane(root) {
        emitter.push(
            TmuxCommand::FocusPaneByTitle { title },
            format!("Focus on pane with title: {title}"),
        );
    }

    info!(
        event = "core.layout.compile_completed",
        commands = emitter.commands.len(),
        panes = next_index - 1
    );

    Ok(emitter.commands)
}

/// Join command texts into one tmux command line.
pub fn commands_to_string(commands: &[CompiledCommand]) -> String {
    commands
        .iter()
        .map(|command| command.text.as_str())
        .collect::<Vec<_>>()
        .join(COMMAND_SEPARATOR)
}

/// Title of the first focused pane, in pre-order, that has a non-empty name.
///
/// Focused containers and unnamed focused panes are skipped.
pub fn find_focused_pane(container: &ContainerSpec) -> Option<&str> {
    container.panes.iter().find_map(|node| match node {
        LayoutNode::Pane(pane) if pane.focus => pane.title(),
        LayoutNode::Pane(_) => None,
        LayoutNode::Container(child) => find_focused_pane(child),
    })
}

struct Emitter<'a> {
    start_directory: &'a str,
    commands: Vec<CompiledCommand>,
}

impl<'a> Emitter<'a> {
    fn new(start_directory: &'a str) -> Self {
        Self {
            start_directory,
            commands: Vec::new(),
        }
    }

    fn push(&mut self, command: TmuxCommand<'_>, description: impl Into<String>) {
        self.commands
            .push(CompiledCommand::new(command.to_string(), description));
    }

    /// Emit the `n - 1` splits of `container`, starting from its first pane.
    fn splits(&mut self, container: &ContainerSpec) {
        let percents = split_percentages(container.ratio.as_deref(), container.panes.len());
        for (split, percent) in percents.into_iter().enumerate() {
            debug!(
                event = "core.layout.split_computed",
                direction = %container.direction,
                split = split + 1,
                percent = %percent
            );
            self.push(
                TmuxCommand::SplitWindow(SplitWindowArgs {
                    direction: container.direction,
                    percent,
                    start_directory: self.start_directory,
                }),
                format!("Split {} for pane {}", container.direction, split + 2),
            );
        }
    }

    /// Configure the children of `container`, whose first pane is `index`.
    ///
    /// Returns the index of the first pane after this container.
    fn children(
        &mut self,
        container: &ContainerSpec,
        path: &str,
        mut index: usize,
    ) -> Result<usize, LayoutError> {
        for (position, node) in container.panes.iter().enumerate() {
            match node {
                LayoutNode::Pane(pane) => {
                    self.push(
                        TmuxCommand::SelectPane { target: index },
                        format!("Select pane {index}"),
                    );
                    if let Some(title) = pane.title() {
                        self.push(
                            TmuxCommand::SetPaneTitle { title },
                            format!("Set title: {title}"),
                        );
                    }
                    if let Some(keys) = pane.startup_command() {
                        self.push(TmuxCommand::SendKeys { keys }, format!("Run: {keys}"));
                    }
                    index += 1;
                }
                LayoutNode::Container(child) => {
                    let nested_path = child_path(path, position);
                    check_ratio_length(child, &nested_path)?;
                    self.push(
                        TmuxCommand::SelectPane { target: index },
                        format!("Navigate to container start pane {index}"),
                    );
                    self.splits(child);
                    index = self.children(child, &nested_path, index)?;
                }
            }
        }
        Ok(index)
    }
}
