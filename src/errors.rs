use thiserror::Error;

/// Errors from the host-side text surface (assignments and probes).
///
/// The bag itself never fails; these only come from turning text into entries.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("parse error: {0}")]
    Parse(String),

    /// Literal that has no scalar representation (null, array, object).
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    #[error("unknown type `{0}` (expected i64, f64, bool or string)")]
    UnknownType(String),
}

pub type Result<T> = std::result::Result<T, OptionsError>;
