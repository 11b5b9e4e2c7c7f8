use clap::{Arg, ArgAction, Command};

/// Arguments selecting, compiling and running a layout.
pub fn layout_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("layout-file")
                .help("Layout file (.yaml, .yml or .json)")
                .index(1),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Layout file, same as the positional argument")
                .conflicts_with("layout-file"),
        )
        .arg(
            Arg::new("default")
                .long("default")
                .help("Use the default layout (~/.config/ccde/default.yml)")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["layout-file", "file"]),
        )
        .arg(
            Arg::new("execute")
                .short('e')
                .long("execute")
                .help("Run the generated tmux commands instead of printing them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("batch")
                .long("batch")
                .help("With --execute, run everything as one tmux invocation")
                .action(ArgAction::SetTrue)
                .requires("execute"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the generated commands as JSON")
                .action(ArgAction::SetTrue)
                .conflicts_with("execute"),
        )
        .arg(
            Arg::new("cwd")
                .short('c')
                .long("cwd")
                .value_name("DIR")
                .help("Working directory for the new window and every split (default: current pane's directory)"),
        )
        .arg(
            Arg::new("window-name")
                .short('n')
                .long("window-name")
                .value_name("NAME")
                .help("Name for the new tmux window"),
        )
}
