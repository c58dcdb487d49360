//! Per-user database sessions.

use std::path::Path;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};

use crate::config::StoreConfig;
use crate::error::{DatabaseError, Result};
use crate::models::{Habit, Routine};
use crate::validation::validate_username;
use crate::{habit, habit_log, routine, routine_log, user};

/// A live session against one user's habit database.
///
/// Opening a session resolves the Telegram id to an application username in
/// the global database, then connects to that user's dedicated database. The
/// session exclusively owns both connections until [`UserSession::close`]
/// consumes it; all queries and inserts run on the user connection.
#[derive(Debug)]
pub struct UserSession {
    telegram_id: i64,
    username: String,
    global: SqliteConnection,
    user: SqliteConnection,
}

impl UserSession {
    /// Open a session for the given Telegram id.
    ///
    /// `telegram_id` is the raw identifier as received from the messaging
    /// platform; it must parse as an integer.
    ///
    /// # Errors
    ///
    /// - [`DatabaseError::InvalidTelegramId`] if the id is not numeric.
    /// - [`DatabaseError::Connection`] if either database cannot be opened.
    /// - [`DatabaseError::UserNotRegistered`] if the id has no username
    ///   mapping; the user database is never touched in that case.
    /// - [`DatabaseError::InvalidUsername`] if the stored username cannot be
    ///   used as a database name.
    ///
    /// On every failure path after the global database was opened, its
    /// connection is closed before the error returns.
    pub async fn open(config: &StoreConfig, telegram_id: &str) -> Result<Self> {
        let telegram_id: i64 = telegram_id
            .trim()
            .parse()
            .map_err(|_| DatabaseError::InvalidTelegramId(telegram_id.to_string()))?;

        let mut global = connect(&config.global_db_path()).await?;

        match Self::resolve_user(config, telegram_id, &mut global).await {
            Ok((username, user)) => {
                tracing::info!(
                    "Opened session for telegram id {} (user '{}')",
                    telegram_id,
                    username
                );
                Ok(Self {
                    telegram_id,
                    username,
                    global,
                    user,
                })
            }
            Err(e) => {
                let _ = global.close().await;
                Err(e)
            }
        }
    }

    /// Resolve the username and connect to the user database.
    async fn resolve_user(
        config: &StoreConfig,
        telegram_id: i64,
        global: &mut SqliteConnection,
    ) -> Result<(String, SqliteConnection)> {
        let Some(username) = user::lookup_username(global, telegram_id).await? else {
            tracing::debug!("No user found for telegram id {}", telegram_id);
            return Err(DatabaseError::UserNotRegistered { telegram_id });
        };
        tracing::debug!(
            "Found username '{}' for telegram id {}",
            username,
            telegram_id
        );

        validate_username(&username)?;

        let user = connect(&config.user_db_path(&username)).await?;

        Ok((username, user))
    }

    /// The Telegram id this session is bound to.
    pub fn telegram_id(&self) -> i64 {
        self.telegram_id
    }

    /// The resolved application username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// List all habits in the user's database.
    pub async fn habits(&mut self) -> Result<Vec<Habit>> {
        habit::list_habits(&mut self.user).await
    }

    /// List the routines belonging to a habit.
    pub async fn routines_for_habit(&mut self, habit_id: i64) -> Result<Vec<Routine>> {
        routine::list_for_habit(&mut self.user, habit_id).await
    }

    /// Get the cue for a habit, if any.
    pub async fn habit_cue(&mut self, habit_id: i64) -> Result<Option<String>> {
        habit::get_cue(&mut self.user, habit_id).await
    }

    /// Record a habit occurrence and return the new log id.
    ///
    /// The timestamp is assigned by the database. The returned id can be
    /// passed to [`UserSession::insert_routine_log`].
    pub async fn insert_habit_log(
        &mut self,
        habit_id: i64,
        cue_status: &str,
        reward_status: &str,
        crave_points: i64,
    ) -> Result<i64> {
        habit_log::insert_habit_log(
            &mut self.user,
            habit_id,
            cue_status,
            reward_status,
            crave_points,
        )
        .await
    }

    /// Record a routine outcome against a habit log.
    pub async fn insert_routine_log(
        &mut self,
        log_id: i64,
        routine_id: i64,
        completed: bool,
    ) -> Result<()> {
        routine_log::insert_routine_log(&mut self.user, log_id, routine_id, completed).await
    }

    /// Close the session, releasing the user connection and then the global
    /// connection.
    ///
    /// Consumes the session, so calling methods after close (or closing
    /// twice) does not compile.
    pub async fn close(self) -> Result<()> {
        self.user.close().await?;
        self.global.close().await?;
        Ok(())
    }
}

/// Open a dedicated connection to a database file.
///
/// The file must already exist; these databases are provisioned externally,
/// so a missing file is a connection error rather than a fresh empty store.
async fn connect(path: &Path) -> Result<SqliteConnection> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .foreign_keys(true);

    options
        .connect()
        .await
        .map_err(|e| DatabaseError::Connection {
            db: path.display().to_string(),
            source: e,
        })
}
