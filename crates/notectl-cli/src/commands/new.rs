//! `notectl new` handler

use anyhow::{bail, Context, Result};

use notectl_core::{Note, NoteStore};

use crate::editor::capture_text;
use crate::output::Output;
use crate::NewOptions;

/// Save a new note
pub fn run(store: &NoteStore, options: NewOptions, output: &Output) -> Result<()> {
    let text = resolve_text(&options)?;
    let note = Note::new(text, options.tags);

    output.message(&note.summary());

    let id = store.insert(&note).context("Failed to save note")?;
    output.success(&format!("Saved note {}", id));

    if output.is_quiet() {
        println!("{}", id);
    }

    Ok(())
}

/// Decide where the note text comes from
///
/// The editor opens when explicitly requested with -e, or when no text was
/// given at all. Tags alone are not enough to save a note.
fn resolve_text(options: &NewOptions) -> Result<String> {
    if options.editor {
        return capture_text();
    }

    if let Some(text) = &options.note {
        return Ok(text.clone());
    }

    if !options.text.is_empty() {
        return Ok(options.text.join(" "));
    }

    if !options.tags.is_empty() {
        bail!("No note text given. Pass -n <text>, free-form text, or -e to open an editor.");
    }

    capture_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(note: Option<&str>, text: &[&str], tags: &[&str]) -> NewOptions {
        NewOptions {
            note: note.map(str::to_string),
            editor: false,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            text: text.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_note_option_wins() {
        let resolved = resolve_text(&options(Some("from flag"), &["ignored"], &[])).unwrap();
        assert_eq!(resolved, "from flag");
    }

    #[test]
    fn test_trailing_text_joined_with_spaces() {
        let resolved = resolve_text(&options(None, &["remember", "the", "milk"], &[])).unwrap();
        assert_eq!(resolved, "remember the milk");
    }

    #[test]
    fn test_tags_alone_is_a_usage_error() {
        assert!(resolve_text(&options(None, &[], &["work"])).is_err());
    }
}
