//! Rendering compiled commands as one `tmux` invocation.
//!
//! Inside a single invocation every command runs against tmux's current
//! target, so `send-keys` gets an explicit `-t <pane>` copied from the closest
//! preceding `select-pane -t <pane>`.

use std::sync::LazyLock;

use regex::Regex;

use super::tmux::COMMAND_SEPARATOR;
use super::types::CompiledCommand;

static SELECT_PANE_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"select-pane -t (\d+)").expect("select-pane target regex is valid")
});

const TMUX_PREFIX: &str = "tmux ";
const SEND_KEYS: &str = "send-keys";
const DEFAULT_TARGET: &str = "1";

/// Join `commands` into a single `tmux a \; b \; ...` command line.
///
/// Returns an empty string for an empty command list.
pub fn to_batch_command(commands: &[CompiledCommand]) -> String {
    if commands.is_empty() {
        return String::new();
    }

    let mut target: Option<&str> = None;
    let mut pieces = Vec::with_capacity(commands.len());

    for command in commands {
        let text = command.text.as_str();
        let body = text.strip_prefix(TMUX_PREFIX).unwrap_or(text);

        if body.starts_with(SEND_KEYS) {
            let pane = target.unwrap_or(DEFAULT_TARGET);
            pieces.push(body.replacen(SEND_KEYS, &format!("{SEND_KEYS} -t {pane}"), 1));
            continue;
        }

        // Title commands share the select-pane verb but never move the target.
        if !body.contains("-T")
            && let Some(captures) = SELECT_PANE_TARGET.captures(body)
            && let Some(pane) = captures.get(1)
        {
            target = Some(pane.as_str());
        }
        pieces.push(body.to_string());
    }

    format!("{TMUX_PREFIX}{}", pieces.join(COMMAND_SEPARATOR))
}
