//! Moodtune Library
//!
//! This library turns a free-text mood into a short list of Spotify tracks. A
//! hosted language model derives a Bollywood-leaning search keyword from the
//! user's message, the keyword is sanitized, and the Spotify Web API is searched
//! with a client-credentials token. The result is served over a small HTTP API
//! consumed by a browser front-end, or printed from the command line.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the recommendation and health endpoints
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Crate error type
//! - `llm` - Chat-completion client and keyword derivation
//! - `management` - Shared application state, token cache and the pipeline
//! - `server` - HTTP server and router
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use moodtune::{config, management::{self, AppState}};
//!
//! #[tokio::main]
//! async fn main() -> moodtune::Res<()> {
//!     config::load_env().await?;
//!     let state = AppState::new(config::Settings::from_env()?)?;
//!     let response = management::recommend(&state, "I feel heartbroken").await;
//!     println!("{}", response.keyword);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// A convenient Result type alias for operations that may fail.
///
/// Used for top-level plumbing in the binary and the server bootstrap, where
/// errors of several origins (address parsing, socket binding, configuration)
/// are only reported and never matched on. Library code returns
/// [`Result`] with the typed [`Error`] instead.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("LLM keyword: {}", keyword);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only used for fatal startup
/// errors; request handling never calls it.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator. Used wherever
/// a failure is captured and replaced by a fallback value, so the diagnostic
/// detail is not lost.
///
/// # Example
///
/// ```
/// warning!("Spotify search failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
