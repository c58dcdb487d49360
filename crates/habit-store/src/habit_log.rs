//! Habit log persistence.

use sqlx::SqliteConnection;

use crate::Result;

/// Insert a habit log row and return its generated id.
///
/// The log timestamp is assigned by the database. The returned id comes from
/// the connection's last-insert-rowid, so this must run on the same
/// connection as the insert.
pub async fn insert_habit_log(
    conn: &mut SqliteConnection,
    habit_id: i64,
    cue_status: &str,
    reward_status: &str,
    crave_points: i64,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO habit_logs (habit_id, cue_status, reward_status, crave_points)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(habit_id)
    .bind(cue_status)
    .bind(reward_status)
    .bind(crave_points)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}
