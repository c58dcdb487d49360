//! Routine queries.

use sqlx::SqliteConnection;

use crate::models::Routine;
use crate::Result;

/// List the routines belonging to a habit.
///
/// An unknown habit id yields an empty list, not an error.
pub async fn list_for_habit(
    conn: &mut SqliteConnection,
    habit_id: i64,
) -> Result<Vec<Routine>> {
    let routines = sqlx::query_as::<_, Routine>(
        r#"
        SELECT id, name, habit_id
        FROM routines
        WHERE habit_id = ?
        "#,
    )
    .bind(habit_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(routines)
}
