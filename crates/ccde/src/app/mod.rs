mod global;
mod layout;

#[cfg(test)]
mod tests;

use clap::Command;

pub fn build_cli() -> Command {
    layout::layout_args(global::root_command())
}
