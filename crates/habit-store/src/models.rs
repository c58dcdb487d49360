//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tracked habit in a user's database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Habit {
    /// Habit id, assigned by the store.
    pub id: i64,
    /// Display name (e.g., "Exercise").
    pub name: String,
    /// Optional cue that triggers the habit (e.g., "After waking up").
    pub cue: Option<String>,
}

/// A routine step belonging to a habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Routine {
    /// Routine id, assigned by the store.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Id of the habit this routine belongs to.
    pub habit_id: i64,
}
