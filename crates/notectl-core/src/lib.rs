//! notectl Core Library
//!
//! This crate provides the core functionality for notectl, a command-line
//! utility that keeps timestamped, tagged notes in a local SQLite database.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let store = NoteStore::open(&config)?;
//!
//! // Save a note
//! let note = Note::new("remember the milk", vec!["errands".into()]);
//! let id = store.insert(&note)?;
//!
//! // Query notes
//! let records = store.select(&NoteFilter::All)?;
//! ```
//!
//! # Modules
//!
//! - `models`: the note data structures
//! - `query`: show-filter resolution and date parsing
//! - `storage`: SQLite persistence
//! - `config`: application configuration

pub mod config;
pub mod models;
pub mod query;
pub mod storage;

pub use config::Config;
pub use models::{Note, NoteRecord, DEFAULT_TAG};
pub use query::{parse_date, DateStyle, NoteFilter, QueryError};
pub use storage::{NoteStore, StorageError, StorageResult};
