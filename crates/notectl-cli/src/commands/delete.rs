//! `notectl delete` handler
//!
//! Only bulk deletion is supported; there is no per-note delete.

use anyhow::{bail, Context, Result};

use notectl_core::NoteStore;

use crate::editor::confirm;
use crate::output::Output;
use crate::DeleteOptions;

/// Delete every stored note, after interactive confirmation
pub fn run(store: &NoteStore, options: DeleteOptions, output: &Output) -> Result<()> {
    if !options.all {
        bail!("Nothing to delete. Pass --all to delete every note.");
    }

    let count = store.count().context("Failed to count notes")?;

    // Without a TTY there is no confirmation, and nothing is deleted
    if !confirm(&format!("Delete all {} note(s)?", count))? {
        output.message("Cancelled.");
        return Ok(());
    }

    store.delete_all().context("Failed to delete notes")?;
    output.success(&format!("Deleted {} note(s)", count));

    Ok(())
}
