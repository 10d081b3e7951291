// error.rs

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HISTSIZE must be a non-negative integer, got {value:?}")]
    InvalidHistorySize {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
