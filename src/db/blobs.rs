// src/db/blobs.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub fn get_blob(conn: &Connection, key: &str) -> Result<Option<String>, ServerError> {
    conn.query_row(
        "select value from kv_blobs where key = ?",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("blob read failed: {e}")))
}

/// Overwrite the value stored under `key`.
pub fn put_blob(conn: &Connection, key: &str, value: &str, now: i64) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into kv_blobs (key, value, updated_at)
        values (?, ?, ?)
        on conflict(key) do update set value = excluded.value, updated_at = excluded.updated_at
        "#,
        params![key, value, now],
    )
    .map_err(|e| ServerError::DbError(format!("blob write failed: {e}")))?;
    Ok(())
}
