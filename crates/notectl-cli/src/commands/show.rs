//! `notectl show` handler

use anyhow::{Context, Result};

use notectl_core::{DateStyle, NoteFilter, NoteStore};

use crate::output::Output;
use crate::ShowOptions;

/// List notes matching exactly one filter
pub fn run(store: &NoteStore, options: ShowOptions, output: &Output) -> Result<()> {
    let style = if options.usa {
        DateStyle::MonthFirst
    } else {
        DateStyle::DayFirst
    };

    let filter = NoteFilter::from_show_args(
        options.all,
        options.id,
        options.day,
        options.month,
        options.year,
        options.date.as_deref(),
        style,
    )?;

    let records = store.select(&filter).context("Failed to query notes")?;
    output.print_records(&records);

    Ok(())
}
