//! notectl CLI
//!
//! Command-line interface for notectl - timestamped, tagged notes in a
//! local SQLite database.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use notectl_core::{Config, NoteStore};

mod commands;
mod editor;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "notectl")]
#[command(about = "notectl - timestamped, tagged notes from the command line")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a new note
    New(NewOptions),
    /// Show saved notes
    Show(ShowOptions),
    /// Delete notes
    Delete(DeleteOptions),
}

/// Options for `notectl new`
#[derive(Args)]
pub struct NewOptions {
    /// Note text
    #[arg(short = 'n', long = "note")]
    pub note: Option<String>,

    /// Compose the note in a text editor
    #[arg(short = 'e', long = "editor")]
    pub editor: bool,

    /// Comma-delimited list of tags
    #[arg(short = 't', long = "tags", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Free-form note text (joined with spaces)
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,
}

/// Options for `notectl show`
#[derive(Args)]
pub struct ShowOptions {
    /// Show all notes
    #[arg(long)]
    pub all: bool,

    /// Show the note with this id
    #[arg(short = 'i', long = "id")]
    pub id: Option<i64>,

    /// Show notes from this day of the current month and year
    #[arg(long)]
    pub day: Option<u32>,

    /// Show notes from this month of the current year
    #[arg(long)]
    pub month: Option<u32>,

    /// Show notes from this year
    #[arg(long)]
    pub year: Option<i32>,

    /// Show notes from an exact date, <d>/<m>/<y>
    #[arg(long)]
    pub date: Option<String>,

    /// Interpret --date as <m>/<d>/<y>
    #[arg(long)]
    pub usa: bool,
}

/// Options for `notectl delete`
#[derive(Args)]
pub struct DeleteOptions {
    /// Delete all notes
    #[arg(long)]
    pub all: bool,
}

fn main() -> Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(if err.use_stderr() { 1 } else { 0 });
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    let config = Config::load()?;
    debug!(path = %config.database_path().display(), "using notes database");
    let store = NoteStore::open(&config)?;

    match command {
        Commands::New(options) => commands::new::run(&store, options, &output),
        Commands::Show(options) => commands::show::run(&store, options, &output),
        Commands::Delete(options) => commands::delete::run(&store, options, &output),
    }
}
