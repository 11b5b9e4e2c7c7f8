use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("ccde")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile declarative tmux layouts into tmux commands")
        .long_about("ccde reads a YAML or JSON layout describing one tmux window (nested horizontal and vertical splits, size ratios, pane titles, startup commands and a focus target) and prints the tmux commands that build it, or runs them with --execute.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
}
