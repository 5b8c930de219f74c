use thiserror::Error;

pub type WbResult<T> = Result<T, WbError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WbError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
