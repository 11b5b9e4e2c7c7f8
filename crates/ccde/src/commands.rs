use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info};

use ccde_core::events;
use ccde_core::{
    CcdePaths, CompiledCommand, LayoutSpec, ShellRunner, commands_to_string, compile,
    execute_batch, execute_commands, load_default_layout_from, parse_layout_file,
};

use crate::color;

#[derive(serde::Serialize)]
struct CompileResponse<'a> {
    name: Option<&'a str>,
    command: String,
    commands: &'a [CompiledCommand],
}

/// Where the layout came from, for messages and the execute hint.
enum LayoutSource {
    File(String),
    Default,
}

impl LayoutSource {
    fn execute_hint(&self) -> String {
        match self {
            LayoutSource::File(path) => format!("ccde -e {path}"),
            LayoutSource::Default => "ccde --default -e".to_string(),
        }
    }
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let (layout, source) = load_layout(matches)?;

    let working_directory = matches.get_one::<String>("cwd").map(String::as_str);
    let window_name = matches.get_one::<String>("window-name").map(String::as_str);

    let commands = match compile(&layout, working_directory, window_name) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("{}", color::error(&format!("❌ Failed to compile layout: {}", e)));
            error!(event = "cli.compile_failed", error = %e);
            events::log_ccde_error(&e);
            return Err(e.into());
        }
    };

    if matches.get_flag("execute") {
        return handle_execute(&layout, &commands, matches.get_flag("batch"));
    }

    if matches.get_flag("json") {
        let response = CompileResponse {
            name: layout.name.as_deref(),
            command: commands_to_string(&commands),
            commands: &commands,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", color::bold("Generated tmux command:"));
        println!("{}", commands_to_string(&commands));
        println!();
        println!("{}", color::muted("To execute this layout, run:"));
        println!("{}", source.execute_hint());
    }

    info!(event = "cli.run_completed", commands = commands.len());
    Ok(())
}

fn load_layout(
    matches: &ArgMatches,
) -> Result<(LayoutSpec, LayoutSource), Box<dyn std::error::Error>> {
    let file = matches
        .get_one::<String>("layout-file")
        .or_else(|| matches.get_one::<String>("file"));

    if let Some(file) = file {
        info!(event = "cli.layout_load_started", file = %file);
        return match parse_layout_file(Path::new(file)) {
            Ok(layout) => Ok((layout, LayoutSource::File(file.clone()))),
            Err(e) => {
                eprintln!("{}", color::error(&format!("❌ {}", e)));
                error!(event = "cli.layout_load_failed", file = %file, error = %e);
                events::log_ccde_error(&e);
                Err(e.into())
            }
        };
    }

    if matches.get_flag("default") {
        return load_default();
    }

    eprintln!("{}", color::error("❌ Layout file is required"));
    eprintln!("{}", color::hint("   Use --help for usage information"));
    error!(event = "cli.layout_file_missing");
    Err("Layout file is required".into())
}

fn load_default() -> Result<(LayoutSpec, LayoutSource), Box<dyn std::error::Error>> {
    let paths = match CcdePaths::resolve() {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("{}", color::error(&format!("❌ {}", e)));
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    match load_default_layout_from(&paths) {
        Ok(Some(layout)) => Ok((layout, LayoutSource::Default)),
        Ok(None) => {
            let path = paths.default_layout();
            eprintln!(
                "{}",
                color::error(&format!("❌ No default layout found at {}", path.display()))
            );
            eprintln!(
                "{}",
                color::hint("   Create it or pass a layout file explicitly.")
            );
            error!(event = "cli.default_layout_missing", path = %path.display());
            Err(format!("No default layout found at {}", path.display()).into())
        }
        Err(e) => {
            eprintln!("{}", color::error(&format!("❌ {}", e)));
            error!(event = "cli.default_layout_failed", error = %e);
            events::log_ccde_error(&e);
            Err(e.into())
        }
    }
}

fn handle_execute(
    layout: &LayoutSpec,
    commands: &[CompiledCommand],
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = layout.name.as_deref().unwrap_or("Unnamed");
    println!("Executing layout: {}", color::ice(name));

    info!(
        event = "cli.execute_started",
        layout = name,
        commands = commands.len(),
        batch = batch
    );

    let runner = ShellRunner::new();
    let result = if batch {
        execute_batch(&runner, commands)
    } else {
        execute_commands(&runner, commands)
    };

    match result {
        Ok(()) => {
            println!("{}", color::aurora("✅ Layout created"));
            info!(event = "cli.execute_completed", layout = name);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", color::error("❌ Failed to execute tmux commands"));
            eprintln!("{}", color::hint(&format!("   {}", e)));
            error!(event = "cli.execute_failed", layout = name, error = %e);
            events::log_ccde_error(&e);
            Err(e.into())
        }
    }
}
