//! SQL client for data checks behind the UI under test.
//!
//! Built on the `sqlx` Any driver so a suite can point at whatever engine
//! backs the environment (the connection URL decides). Rows come back as
//! ordered column/value pairs rather than typed structs; validation code
//! picks out the columns it cares about.

use std::sync::Once;

use serde_json::Value;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::{AnyPool, Column, Row};
use tracing::{debug, error, info};

use crate::error::Result;

static DRIVERS: Once = Once::new();

/// One bind parameter for a parameterized statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Int(v)
    }
}

impl From<i32> for SqlParam {
    fn from(v: i32) -> Self {
        SqlParam::Int(v as i64)
    }
}

impl From<f64> for SqlParam {
    fn from(v: f64) -> Self {
        SqlParam::Float(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}

impl From<bool> for SqlParam {
    fn from(v: bool) -> Self {
        SqlParam::Bool(v)
    }
}

/// One result row, columns in select-list order.
#[derive(Debug, Clone)]
pub struct DbRow {
    columns: Vec<(String, Value)>,
}

impl DbRow {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value)
    }

    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_str)
    }

    pub fn get_i64(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(Value::as_i64)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Pooled connection to the environment's database.
#[derive(Debug, Clone)]
pub struct DbClient {
    pool: AnyPool,
}

impl DbClient {
    /// Connects to the database named by the URL. A connection failure is
    /// fatal; data checks cannot run without it.
    pub async fn connect(url: &str) -> Result<Self> {
        DRIVERS.call_once(sqlx::any::install_default_drivers);
        // One connection keeps in-memory engines coherent across queries.
        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .inspect_err(|err| error!(error = %err, "database connection failed"))?;
        info!("database connection established");
        Ok(DbClient { pool })
    }

    /// Runs a parameterized select and returns all rows.
    pub async fn query(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<DbRow>> {
        debug!(sql, params = params.len(), "db query");
        let rows = bind_params(sqlx::query(sql), params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(to_db_row).collect())
    }

    /// First column of the first row, or `None` on an empty result.
    pub async fn scalar(&self, sql: &str, params: &[SqlParam]) -> Result<Option<Value>> {
        let rows = self.query(sql, params).await?;
        Ok(rows
            .into_iter()
            .next()
            .and_then(|row| row.columns.into_iter().next())
            .map(|(_, value)| value))
    }

    /// Runs a parameterized statement and returns the affected row count.
    pub async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<u64> {
        debug!(sql, params = params.len(), "db execute");
        let result = bind_params(sqlx::query(sql), params)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn bind_params<'q>(
    query: sqlx::query::Query<'q, sqlx::Any, sqlx::any::AnyArguments<'q>>,
    params: &[SqlParam],
) -> sqlx::query::Query<'q, sqlx::Any, sqlx::any::AnyArguments<'q>> {
    params.iter().fold(query, |query, param| match param {
        SqlParam::Int(v) => query.bind(*v),
        SqlParam::Float(v) => query.bind(*v),
        SqlParam::Text(v) => query.bind(v.clone()),
        SqlParam::Bool(v) => query.bind(*v),
        SqlParam::Null => query.bind(None::<String>),
    })
}

fn to_db_row(row: &AnyRow) -> DbRow {
    let columns = row
        .columns()
        .iter()
        .map(|column| (column.name().to_string(), row_value(row, column.ordinal())))
        .collect();
    DbRow { columns }
}

// The Any driver exposes no uniform type info, so decode by trial.
fn row_value(row: &AnyRow, index: usize) -> Value {
    if let Ok(v) = row.try_get::<Option<i64>, _>(index) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(index) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<bool>, _>(index) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(index) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    Value::Null
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn seeded_client() -> DbClient {
        let db = DbClient::connect("sqlite::memory:").await.unwrap();
        db.execute(
            "CREATE TABLE plans (id INTEGER PRIMARY KEY, name TEXT, created_by TEXT)",
            &[],
        )
        .await
        .unwrap();
        db.execute(
            "INSERT INTO plans (id, name, created_by) VALUES (?, ?, ?), (?, ?, ?)",
            &[
                1.into(),
                "Q3 rollout".into(),
                "neaq5h".into(),
                2.into(),
                "Q4 rollout".into(),
                "other".into(),
            ],
        )
        .await
        .unwrap();
        db
    }

    #[tokio::test]
    async fn query_returns_ordered_columns() {
        let db = seeded_client().await;
        let rows = db
            .query(
                "SELECT id, name FROM plans WHERE created_by = ? ORDER BY id",
                &["neaq5h".into()],
            )
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        let columns: Vec<&str> = rows[0].iter().map(|(name, _)| name).collect();
        assert_eq!(columns, ["id", "name"]);
        assert_eq!(rows[0].get_i64("id"), Some(1));
        assert_eq!(rows[0].get_str("name"), Some("Q3 rollout"));
        db.close().await;
    }

    #[tokio::test]
    async fn scalar_returns_first_value_or_none() {
        let db = seeded_client().await;
        let count = db.scalar("SELECT COUNT(*) FROM plans", &[]).await.unwrap();
        assert_eq!(count, Some(json!(2)));
        let none = db
            .scalar("SELECT id FROM plans WHERE id = ?", &[99.into()])
            .await
            .unwrap();
        assert_eq!(none, None);
        db.close().await;
    }

    #[tokio::test]
    async fn execute_reports_affected_rows() {
        let db = seeded_client().await;
        let affected = db
            .execute(
                "UPDATE plans SET created_by = ? WHERE created_by = ?",
                &["qa".into(), "other".into()],
            )
            .await
            .unwrap();
        assert_eq!(affected, 1);
        db.close().await;
    }

    #[tokio::test]
    async fn column_lookup_is_case_insensitive() {
        let db = seeded_client().await;
        let rows = db.query("SELECT name FROM plans WHERE id = 1", &[]).await.unwrap();
        assert_eq!(rows[0].get_str("NAME"), Some("Q3 rollout"));
        db.close().await;
    }
}
