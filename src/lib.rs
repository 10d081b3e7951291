// lib.rs

pub mod config;
pub mod error;
pub mod history;
pub mod util;

pub use config::ShellConfig;
pub use error::ConfigError;
pub use history::{HistoryBuffer, Mode};
