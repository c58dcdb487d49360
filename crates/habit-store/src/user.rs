//! User lookup in the global database.

use sqlx::SqliteConnection;

use crate::Result;

/// Look up the application username for a Telegram id.
///
/// Returns `None` if the id has no mapping in `telegram_users`.
pub async fn lookup_username(
    conn: &mut SqliteConnection,
    telegram_id: i64,
) -> Result<Option<String>> {
    let username = sqlx::query_scalar::<_, String>(
        r#"
        SELECT username
        FROM telegram_users
        WHERE telegram_id = ?
        "#,
    )
    .bind(telegram_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(username)
}
