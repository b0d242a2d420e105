use thiserror::Error;

/// Centralized error types for the application
///
/// Everything that can fail while handling an update or starting the bot is
/// converted into this enum. Validation problems with user input are *not*
/// errors: the conversation answers them with a re-prompt instead.
///
/// # Example
///
/// ```no_run
/// use regbot::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors (delivery failures are never retried)
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Startup configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A submission reached the forwarder in a state the flow should never produce
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Configuration errors raised while reading the environment at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            var,
            reason: reason.into(),
        }
    }
}
