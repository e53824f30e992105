//! Direct-SQL fixture setup against the API's backing store.
//!
//! Tests insert the rows they need before driving the API and remove them
//! afterwards, so GET/filter/update/delete behavior is validated
//! independently of the API's own creation path. One connection is opened per
//! call and released when the call returns; there is no pooling and no
//! transaction spanning calls.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::types::ToSqlOutput;
use rusqlite::{Connection, ToSql};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Layout timestamp columns are written with.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),
}

/// A typed column value for a fixture row.
///
/// Covers the column kinds the suite's tables use: text, boolean and
/// timestamp. Dates are normalized to timestamp precision (midnight).
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureValue {
    Text(String),
    Bool(bool),
    Timestamp(NaiveDateTime),
}

impl From<&str> for FixtureValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FixtureValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FixtureValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDateTime> for FixtureValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}

impl From<NaiveDate> for FixtureValue {
    fn from(value: NaiveDate) -> Self {
        Self::Timestamp(value.and_time(NaiveTime::MIN))
    }
}

impl ToSql for FixtureValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            FixtureValue::Text(value) => value.to_sql(),
            FixtureValue::Bool(value) => value.to_sql(),
            FixtureValue::Timestamp(value) => Ok(ToSqlOutput::from(
                value.format(TIMESTAMP_FORMAT).to_string(),
            )),
        }
    }
}

/// Inserts and deletes rows directly in the backing store.
pub struct FixtureStore {
    db_path: PathBuf,
}

impl FixtureStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Inserts one row and returns the generated primary key.
    ///
    /// Builds a parameterized INSERT over the ordered column list. A failed
    /// insert propagates; the calling test treats it as a setup failure.
    pub fn insert(
        &self,
        table: &str,
        columns: &[(&str, FixtureValue)],
    ) -> Result<i64, FixtureError> {
        let connection = Connection::open(&self.db_path)?;
        let column_names = columns
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=columns.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("INSERT INTO {table} ({column_names}) VALUES ({placeholders})");
        let params = columns
            .iter()
            .map(|(_, value)| value as &dyn ToSql)
            .collect::<Vec<_>>();
        connection.execute(&sql, params.as_slice())?;
        let id = connection.last_insert_rowid();
        debug!("Inserted {table} row with id {id}");
        Ok(id)
    }

    /// Deletes one row by primary key.
    ///
    /// Returns whether exactly one row was removed. Deleting an already-gone
    /// row returns `Ok(false)`, never an error.
    pub fn delete(&self, table: &str, id: i64) -> Result<bool, FixtureError> {
        let connection = Connection::open(&self.db_path)?;
        let sql = format!("DELETE FROM {table} WHERE id = ?1");
        let deleted = connection.execute(&sql, [id])?;
        debug!("Deleted {deleted} row(s) from {table} for id {id}");
        Ok(deleted == 1)
    }

    // ========================================================================
    // Entity conveniences - the single typed path for test data setup
    // ========================================================================

    pub fn insert_task(
        &self,
        title: &str,
        description: &str,
        due_date: NaiveDateTime,
        completed: bool,
    ) -> Result<i64, FixtureError> {
        self.insert(
            "task",
            &[
                ("title", title.into()),
                ("description", description.into()),
                ("due_date", due_date.into()),
                ("completed", completed.into()),
            ],
        )
    }

    pub fn delete_task(&self, id: i64) -> Result<bool, FixtureError> {
        self.delete("task", id)
    }

    pub fn insert_province(&self, name: &str, abbreviation: &str) -> Result<i64, FixtureError> {
        self.insert(
            "province",
            &[("name", name.into()), ("abbreviation", abbreviation.into())],
        )
    }

    pub fn delete_province(&self, id: i64) -> Result<bool, FixtureError> {
        self.delete("province", id)
    }

    /// The user table is named "usserr" in the backing schema.
    pub fn insert_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        dt_create: NaiveDateTime,
        dt_update: NaiveDateTime,
    ) -> Result<i64, FixtureError> {
        self.insert(
            "usserr",
            &[
                ("name", name.into()),
                ("email", email.into()),
                ("password", password_hash.into()),
                ("dt_create", dt_create.into()),
                ("dt_update", dt_update.into()),
            ],
        )
    }

    pub fn delete_user(&self, id: i64) -> Result<bool, FixtureError> {
        self.delete("usserr", id)
    }
}
