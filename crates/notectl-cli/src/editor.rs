//! Interactive input support
//!
//! Opens $EDITOR for composing note text and prompts for confirmation.

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::Command;

/// Editor used when $EDITOR and $VISUAL are both unset
const DEFAULT_EDITOR: &str = "vi";

/// Compose text in the user's preferred editor
///
/// Creates a temp file, opens the editor on it, and reads the contents
/// back once the editor closes. The temp file is removed on every exit
/// path, including editor failure.
pub fn capture_text() -> Result<String> {
    let editor = find_editor()?;

    // NamedTempFile deletes the file when dropped
    let file = tempfile::Builder::new()
        .prefix("notectl_")
        .suffix(".txt")
        .tempfile()
        .context("Failed to create temp file")?;

    let status = Command::new(&editor)
        .arg(file.path())
        .status()
        .with_context(|| format!("Failed to run editor: {}", editor))?;

    if !status.success() {
        bail!(
            "Editor '{}' exited with non-zero status. Check that your editor is configured correctly.",
            editor
        );
    }

    let content = fs::read_to_string(file.path())
        .with_context(|| format!("Failed to read edited file: {:?}", file.path()))?;

    Ok(content)
}

/// Find the user's preferred editor
fn find_editor() -> Result<String> {
    // Check environment variables
    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(visual) = env::var("VISUAL") {
        if !visual.is_empty() {
            return Ok(visual);
        }
    }

    if command_exists(DEFAULT_EDITOR) {
        return Ok(DEFAULT_EDITOR.to_string());
    }

    bail!(
        "No editor found. Set $EDITOR environment variable.\n\
         Example: export EDITOR=nano"
    )
}

/// Check if a command exists in PATH
fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Prompt for a y/n confirmation
///
/// Returns true only on an explicit `y` or `yes`.
/// In non-interactive mode (no TTY), returns false.
pub fn confirm(prompt: &str) -> Result<bool> {
    // Check if stdin is a TTY
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }

    print!("{} [y/n] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
