//! Crate-wide error type.
//!
//! Every failure carries a process exit code so the binary can map errors
//! directly to `ExitCode`:
//!
//! - 2: usage / configuration problems (unknown lottery, bad flags)
//! - 3: data problems (schema mismatch, unparseable rows)
//! - 4: computation / external failures (ephemeris range, network, I/O)

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Lottery identifier not present in the schema registry.
    UnknownLottery { id: String },
    /// Raw row width does not match the configured layout.
    SchemaMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A date field does not conform to the layout's date format.
    DateParse { value: String, format: String },
    /// Numeric value outside the bucketer's fixed domain.
    UnresolvedBucket { value: f64 },
    /// Ephemeris oracle failure (e.g. date outside the validity window).
    Oracle { message: String },
    /// Network retrieval failure.
    Fetch { message: String },
    /// Local I/O or serialization failure.
    Io { message: String },
    /// Invalid configuration that clap cannot catch (e.g. zero sample rows).
    Config { message: String },
}

impl AppError {
    pub fn oracle(message: impl Into<String>) -> Self {
        AppError::Oracle {
            message: message.into(),
        }
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        AppError::Fetch {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        AppError::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        AppError::Config {
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::UnknownLottery { .. } | AppError::Config { .. } => 2,
            AppError::SchemaMismatch { .. } | AppError::DateParse { .. } => 3,
            AppError::UnresolvedBucket { .. }
            | AppError::Oracle { .. }
            | AppError::Fetch { .. }
            | AppError::Io { .. } => 4,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnknownLottery { id } => {
                write!(
                    f,
                    "Unknown lottery '{id}'. Known: lotto, lotto_plus, eurojackpot, minilotto, multi."
                )
            }
            AppError::SchemaMismatch {
                line,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Schema mismatch at line {line}: expected {expected} fields, found {found}."
                )
            }
            AppError::DateParse { value, format } => {
                write!(f, "Invalid date '{value}' (expected format '{format}').")
            }
            AppError::UnresolvedBucket { value } => {
                write!(f, "Value {value} falls outside the bucket domain [0, 100).")
            }
            AppError::Oracle { message } => write!(f, "Ephemeris error: {message}"),
            AppError::Fetch { message } => write!(f, "Fetch failed: {message}"),
            AppError::Io { message } => write!(f, "{message}"),
            AppError::Config { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for AppError {}
