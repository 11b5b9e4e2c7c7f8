//! tmux command vocabulary used by the layout compiler.
//!
//! Values are wrapped in double quotes without escaping. A name or command
//! containing `"` produces a malformed command; callers own that input.

use std::fmt;

use super::ratio::SplitPercent;
use super::types::SplitDirection;

/// Separator tmux accepts between commands on one command line.
pub const COMMAND_SEPARATOR: &str = " \\; ";

/// Placeholder tmux expands to the active pane's working directory.
pub const CURRENT_PANE_PATH: &str = "#{pane_current_path}";

#[derive(Debug)]
pub enum TmuxCommand<'a> {
    NewWindow(NewWindowArgs<'a>),
    SplitWindow(SplitWindowArgs<'a>),
    SelectPane { target: usize },
    SetPaneTitle { title: &'a str },
    SendKeys { keys: &'a str },
    FocusPaneByTitle { title: &'a str },
}

#[derive(Debug)]
pub struct NewWindowArgs<'a> {
    pub name: Option<&'a str>,
    pub start_directory: &'a str,
}

#[derive(Debug)]
pub struct SplitWindowArgs<'a> {
    pub direction: SplitDirection,
    pub percent: SplitPercent,
    pub start_directory: &'a str,
}

impl fmt::Display for TmuxCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TmuxCommand::NewWindow(args) => {
                f.write_str("tmux new-window")?;
                if let Some(name) = args.name {
                    write!(f, " -n \"{name}\"")?;
                }
                write!(f, " -c \"{}\"", args.start_directory)
            }
            TmuxCommand::SplitWindow(args) => write!(
                f,
                "tmux split-window {} -p {} -c \"{}\"",
                args.direction.split_flag(),
                args.percent,
                args.start_directory
            ),
            TmuxCommand::SelectPane { target } => write!(f, "tmux select-pane -t {target}"),
            TmuxCommand::SetPaneTitle { title } => write!(f, "tmux select-pane -T \"{title}\""),
            TmuxCommand::SendKeys { keys } => write!(f, "tmux send-keys \"{keys}\" Enter"),
            // Resolved by tmux at execution time: print the index of the pane
            // whose title matches, drop the blank lines for the others, take
            // the first hit.
            TmuxCommand::FocusPaneByTitle { title } => write!(
                f,
                "tmux select-pane -t \"$(tmux list-panes -F '#{{?#{{==:#{{pane_title}},{title}}},#{{pane_index}},}}' | grep -v '^$' | head -1)\""
            ),
        }
    }
}
