//! Habit queries.

use sqlx::SqliteConnection;

use crate::models::Habit;
use crate::Result;

/// List all habits in the user's database.
pub async fn list_habits(conn: &mut SqliteConnection) -> Result<Vec<Habit>> {
    let habits = sqlx::query_as::<_, Habit>(
        r#"
        SELECT id, name, cue
        FROM habits
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(habits)
}

/// Get the cue for a habit.
///
/// Returns `None` both when the habit does not exist and when its cue is
/// unset.
pub async fn get_cue(conn: &mut SqliteConnection, habit_id: i64) -> Result<Option<String>> {
    let cue = sqlx::query_scalar::<_, Option<String>>(
        r#"
        SELECT cue
        FROM habits
        WHERE id = ?
        "#,
    )
    .bind(habit_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(cue.flatten())
}
