use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown timeframe: {0}")]
    UnknownTimeframe(String),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, StatsError>;
