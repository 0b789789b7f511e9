//! Note persistence
//!
//! - `schema`: table definition and idempotent initialization
//! - `store`: the `NoteStore` handle with insert/select/delete operations
//! - `error`: typed storage errors

pub mod error;
pub mod schema;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use store::NoteStore;
