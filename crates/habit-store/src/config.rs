//! Configuration for the habit store.

use std::env;
use std::path::PathBuf;

/// Default directory holding the database files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default name of the global database.
pub const DEFAULT_GLOBAL_DB: &str = "HabitTracker_Global";

/// Prefix joined to a username to form that user's database name.
pub const USER_DB_PREFIX: &str = "HabitTracker";

/// Configuration for the habit store.
///
/// Every database is a SQLite file inside `data_dir`: the global database at
/// `<data_dir>/<global_db>.db` and one database per user at
/// `<data_dir>/HabitTracker_<username>.db`.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory containing the database files.
    pub data_dir: PathBuf,

    /// Name of the global database (without extension).
    pub global_db: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            global_db: DEFAULT_GLOBAL_DB.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HABIT_DATA_DIR` - directory holding the database files (default: data)
    /// - `HABIT_GLOBAL_DB` - global database name (default: HabitTracker_Global)
    pub fn from_env() -> Self {
        let data_dir = env::var("HABIT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let global_db =
            env::var("HABIT_GLOBAL_DB").unwrap_or_else(|_| DEFAULT_GLOBAL_DB.to_string());

        Self {
            data_dir,
            global_db,
        }
    }

    /// Create a new configuration with the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Set the global database name.
    pub fn with_global_db(mut self, global_db: impl Into<String>) -> Self {
        self.global_db = global_db.into();
        self
    }

    /// Path of the global database file.
    pub fn global_db_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.db", self.global_db))
    }

    /// Path of a user's database file.
    ///
    /// The caller must have validated `username` first; see
    /// [`crate::validation::validate_username`].
    pub fn user_db_path(&self, username: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}_{}.db", USER_DB_PREFIX, username))
    }
}
