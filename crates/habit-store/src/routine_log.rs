//! Routine log persistence.

use sqlx::SqliteConnection;

use crate::Result;

/// Insert a routine log row referencing a previously inserted habit log.
pub async fn insert_routine_log(
    conn: &mut SqliteConnection,
    log_id: i64,
    routine_id: i64,
    completed: bool,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO routine_logs (log_id, routine_id, completed)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(log_id)
    .bind(routine_id)
    .bind(completed)
    .execute(&mut *conn)
    .await?;

    Ok(())
}
