//! SQLite schema for the notes table
//!
//! Day, month, and year are stored alongside the unix timestamp on purpose:
//! the redundant integer columns make the date filters plain equality
//! comparisons instead of timestamp range arithmetic.

use rusqlite::{Connection, Result};

/// Initialize the database schema
///
/// Idempotent: safe to call on every open.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Notes table. AUTOINCREMENT keeps ids monotonic and never reused
        -- for the life of the table; a drop/recreate restarts the sequence.
        CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            day INTEGER NOT NULL,
            month INTEGER NOT NULL,
            year INTEGER NOT NULL,
            timestamp INTEGER NOT NULL,
            text TEXT NOT NULL,
            tags TEXT NOT NULL
        );

        -- Date filters query these columns with equality
        CREATE INDEX IF NOT EXISTS idx_notes_date ON notes(year, month, day);
        "#,
    )
}

/// Drop the notes table and its index
pub fn drop_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP INDEX IF EXISTS idx_notes_date;
        DROP TABLE IF EXISTS notes;
        "#,
    )
}
