//! SQLite persistence layer for the Smart Habit Analyzer bot.
//!
//! Every registered user has a dedicated database named
//! `HabitTracker_<username>`; a shared global database maps Telegram ids to
//! usernames. A [`UserSession`] resolves one Telegram id to its user
//! database and exposes the habit, routine, and log operations the bot
//! needs, using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use habit_store::{StoreConfig, UserSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::from_env();
//!
//!     // Resolve the Telegram id and open the user's database.
//!     let mut session = UserSession::open(&config, "12345").await?;
//!
//!     for habit in session.habits().await? {
//!         println!("{}: {}", habit.id, habit.name);
//!     }
//!
//!     // Record an occurrence and a routine outcome against it.
//!     let log_id = session.insert_habit_log(1, "yes", "yes", 3).await?;
//!     session.insert_routine_log(log_id, 10, true).await?;
//!
//!     session.close().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod validation;
pub mod user;
pub mod habit;
pub mod routine;
pub mod habit_log;
pub mod routine_log;
pub mod session;

pub use config::StoreConfig;
pub use error::{DatabaseError, Result};
pub use models::{Habit, Routine};
pub use session::UserSession;
pub use validation::ValidationError;
