use crate::backend::RowSource;
use header_filter_core::{FilterSource, SourceError, SqlValue};
use itertools::Itertools;
use log::{debug, trace};
use rusqlite::types::Value;
use rusqlite::Connection;
use std::collections::HashMap;

/// Filter source backed by one SQLite table.
pub struct SqliteSource {
    conn: Connection,
    table: String,
    filter: String,
    icons: HashMap<(String, String), String>,
}

impl SqliteSource {
    pub fn new(conn: Connection, table: impl AsRef<str>) -> Self {
        SqliteSource {
            conn,
            table: table.as_ref().to_string(),
            filter: String::new(),
            icons: HashMap::new(),
        }
    }

    pub fn open_in_memory(table: impl AsRef<str>) -> rusqlite::Result<Self> {
        Ok(Self::new(Connection::open_in_memory()?, table))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Register a reference icon shown next to `value` in the filter menu of `column`.
    pub fn set_icon(
        &mut self,
        column: impl AsRef<str>,
        value: impl AsRef<str>,
        icon: impl AsRef<str>,
    ) {
        self.icons.insert(
            (column.as_ref().to_string(), value.as_ref().to_string()),
            icon.as_ref().to_string(),
        );
    }

    fn select(&self, what: &str, predicate: &str) -> String {
        let mut sql = format!("SELECT {what} FROM {}", self.table);
        if !predicate.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(predicate);
        }
        sql
    }
}

fn query_error(sql: &str) -> impl Fn(rusqlite::Error) -> SourceError + '_ {
    move |e| SourceError::Query(format!("{sql}: {e}"))
}

fn to_sql_value(value: Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Integer(i) => SqlValue::Integer(i),
        Value::Real(r) => SqlValue::Real(r),
        Value::Text(s) => SqlValue::Text(s),
        Value::Blob(b) => SqlValue::Text(String::from_utf8_lossy(&b).into_owned()),
    }
}

impl FilterSource for SqliteSource {
    fn distinct_values(&self, column: &str, predicate: &str) -> Result<Vec<SqlValue>, SourceError> {
        let sql = self.select(&format!("DISTINCT {column}"), predicate);
        trace!("{sql}");
        let mut stmt = self.conn.prepare(&sql).map_err(query_error(&sql))?;
        let values = stmt
            .query_map([], |row| row.get::<_, Value>(0))
            .map_err(query_error(&sql))?
            .map_ok(to_sql_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(query_error(&sql))?;
        Ok(values)
    }

    fn exists(&self, predicate: &str) -> Result<bool, SourceError> {
        let sql = format!("{} LIMIT 1", self.select("1", predicate));
        trace!("{sql}");
        let mut stmt = self.conn.prepare(&sql).map_err(query_error(&sql))?;
        stmt.exists([]).map_err(query_error(&sql))
    }

    fn apply_filter(&mut self, predicate: &str) {
        debug!("{}: row filter {predicate:?}", self.table);
        self.filter = predicate.to_string();
    }

    fn lookup_icon(&self, column: &str, value: &str) -> Option<String> {
        self.icons
            .get(&(column.to_string(), value.to_string()))
            .cloned()
    }
}

impl RowSource for SqliteSource {
    fn installed_filter(&self) -> &str {
        &self.filter
    }

    fn rows(&self, columns: &[&str]) -> Result<Vec<Vec<String>>, SourceError> {
        if columns.is_empty() {
            return Ok(vec![]);
        }
        let sql = format!(
            "{} ORDER BY rowid",
            self.select(&columns.iter().join(", "), &self.filter)
        );
        trace!("{sql}");
        let mut stmt = self.conn.prepare(&sql).map_err(query_error(&sql))?;
        let rows = stmt
            .query_map([], |row| {
                (0..columns.len())
                    .map(|idx| row.get::<_, Value>(idx).map(|v| to_sql_value(v).to_string()))
                    .collect::<rusqlite::Result<Vec<_>>>()
            })
            .map_err(query_error(&sql))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(query_error(&sql))?;
        Ok(rows)
    }

    fn row_count(&self) -> Result<usize, SourceError> {
        let sql = self.select("COUNT(*)", &self.filter);
        self.conn
            .query_row(&sql, [], |row| row.get::<_, i64>(0))
            .map(|count| count as usize)
            .map_err(query_error(&sql))
    }
}
