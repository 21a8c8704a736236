use thiserror::Error;

pub type McResult<T> = Result<T, McError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum McError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value for {what} must be strictly positive, got {value}")]
    NotPositive { what: &'static str, value: f64 },
}
