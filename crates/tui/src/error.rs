use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("terminal error: {0}")]
    Terminal(String),
    #[error("invalid timezone: {0}")]
    Timezone(String),
    #[error("invalid date format: {0}")]
    DateFormat(String),
    #[error("logging error: {0}")]
    Logging(String),
}
