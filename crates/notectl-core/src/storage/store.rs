//! SQLite-backed note storage
//!
//! One connection per invocation, opened against the configured database
//! file and closed when the store is dropped. The schema is ensured on
//! every open.

use chrono::{Datelike, Local, NaiveDate, TimeZone};
use rusqlite::{params, Connection, Row, ToSql};
use tracing::debug;

use crate::config::Config;
use crate::models::{Note, NoteRecord};
use crate::query::NoteFilter;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::schema::{drop_schema, init_schema};

// The derived day/month/year columns are filter-only; records are rebuilt
// from the timestamp
const SELECT_COLUMNS: &str = "id, timestamp, text, tags";

/// Handle to the notes database
pub struct NoteStore {
    conn: Connection,
}

impl NoteStore {
    /// Open or create the database at the configured path
    ///
    /// Fails with `StorageError::Unavailable` when the file cannot be
    /// opened or created.
    pub fn open(config: &Config) -> StorageResult<Self> {
        let path = config.database_path();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path).map_err(|source| StorageError::Unavailable {
            path: path.clone(),
            source,
        })?;

        init_schema(&conn)?;
        debug!(path = %path.display(), "opened notes database");
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Insert one note, returning the id SQLite assigned to it
    pub fn insert(&self, note: &Note) -> StorageResult<i64> {
        self.conn.execute(
            "INSERT INTO notes (day, month, year, timestamp, text, tags)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                note.day(),
                note.month(),
                note.year(),
                note.unix_timestamp(),
                note.text,
                note.tags_joined(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "inserted note");
        Ok(id)
    }

    /// Select notes matching `filter`, relative dates resolved against today
    pub fn select(&self, filter: &NoteFilter) -> StorageResult<Vec<NoteRecord>> {
        self.select_as_of(filter, Local::now().date_naive())
    }

    /// Select notes matching `filter`
    ///
    /// `today` anchors the relative filters: `ByDay` is constrained to
    /// today's month and year, `ByMonth` to today's year. Rows come back in
    /// id order, which is insertion order.
    pub fn select_as_of(
        &self,
        filter: &NoteFilter,
        today: NaiveDate,
    ) -> StorageResult<Vec<NoteRecord>> {
        match filter {
            NoteFilter::All => self.query_rows(
                &format!("SELECT {SELECT_COLUMNS} FROM notes ORDER BY id"),
                &[],
            ),
            NoteFilter::ById(id) => self.query_rows(
                &format!("SELECT {SELECT_COLUMNS} FROM notes WHERE id = ?1"),
                &[id],
            ),
            NoteFilter::ByDay(day) => self.query_rows(
                &format!(
                    "SELECT {SELECT_COLUMNS} FROM notes
                     WHERE day = ?1 AND month = ?2 AND year = ?3 ORDER BY id"
                ),
                &[day, &today.month(), &today.year()],
            ),
            NoteFilter::ByMonth(month) => self.query_rows(
                &format!(
                    "SELECT {SELECT_COLUMNS} FROM notes
                     WHERE month = ?1 AND year = ?2 ORDER BY id"
                ),
                &[month, &today.year()],
            ),
            NoteFilter::ByYear(year) => self.query_rows(
                &format!("SELECT {SELECT_COLUMNS} FROM notes WHERE year = ?1 ORDER BY id"),
                &[year],
            ),
            NoteFilter::ByDate { day, month, year } => self.query_rows(
                &format!(
                    "SELECT {SELECT_COLUMNS} FROM notes
                     WHERE day = ?1 AND month = ?2 AND year = ?3 ORDER BY id"
                ),
                &[day, month, year],
            ),
        }
    }

    /// Number of stored notes
    pub fn count(&self) -> StorageResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Destroy all notes by dropping and recreating the table
    ///
    /// Recreating the table restarts the id sequence.
    pub fn delete_all(&self) -> StorageResult<()> {
        drop_schema(&self.conn)?;
        init_schema(&self.conn)?;
        debug!("dropped and recreated notes table");
        Ok(())
    }

    fn query_rows(&self, sql: &str, args: &[&dyn ToSql]) -> StorageResult<Vec<NoteRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(args, row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

/// Rebuild a `NoteRecord` from a row of the notes table
fn row_to_record(row: &Row) -> rusqlite::Result<NoteRecord> {
    let id: i64 = row.get(0)?;
    let timestamp: i64 = row.get(1)?;
    let text: String = row.get(2)?;
    let tags: String = row.get(3)?;

    let created_at = Local
        .timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Integer,
                Box::from(format!("timestamp {} out of range", timestamp)),
            )
        })?;

    let tags = tags.split(',').map(str::to_string).collect();
    Ok(NoteRecord {
        id,
        note: Note::at(created_at, text, tags),
    })
}
