//! Lyric Quiz Web Backend Library
//!
//! This library powers a small trivia game: a player signs in with Spotify, the
//! server reads their top artists, and an OpenAI-compatible chat-completion API
//! writes a lyric in the style of one of them. The player has to guess which
//! artist the lyric imitates.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers and the JSON error contract
//! - `config` - Configuration management and environment variables
//! - `errors` - Error types for upstream calls, configuration and the game
//! - `game` - Round sampling over an injectable random source
//! - `openai` - Chat-completion client used to generate lyrics
//! - `server` - Router assembly and the HTTP listener
//! - `session` - Cookie-bound session store
//! - `spotify` - Spotify OAuth and Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use lyricquiz::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> lyricquiz::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     server::start_api_server(settings, false).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod game;
pub mod openai;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// cross await points in async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Each line is prefixed with the current UTC time so request logs from the
/// server can be lined up with upstream events.
///
/// # Example
///
/// ```
/// info!("Server is running on http://localhost:{}", port);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "o".blue().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Login completed for session {}", short_id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "✓".green().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used while the server is starting up. Request handlers never call it;
/// a failing request is logged with [`warning!`] and answered with an error
/// response instead.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}: {}", addr, e);
/// // Program exits here with status 1
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "!".red().bold(),
      std::format_args!($($arg)*)
    );
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, including every failed request together with
/// the upstream error detail.
///
/// # Example
///
/// ```
/// warning!("Error fetching top artists: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "!".yellow().bold(),
      std::format_args!($($arg)*)
    );
  })
}
