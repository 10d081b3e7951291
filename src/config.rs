// config.rs

use crate::error::ConfigError;

pub const DEFAULT_HISTORY_SIZE: usize = 100;
pub const DEFAULT_PROMPT: &str = "$ ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Number of lines kept for up/down navigation. Zero disables history.
    pub history_size: usize,
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ShellConfig {
    /// Reads `HISTSIZE` and `SHELL_PROMPT`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup("HISTSIZE") {
            config.history_size = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidHistorySize { value, source })?;
        }
        if let Some(prompt) = lookup("SHELL_PROMPT") {
            config.prompt = prompt;
        }
        log::debug!("config: history_size={} prompt={:?}", config.history_size, config.prompt);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ShellConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.history_size, 100);
        assert_eq!(config.prompt, "$ ");
    }

    #[test]
    fn reads_size_and_prompt() {
        let config =
            ShellConfig::from_lookup(lookup(&[("HISTSIZE", " 25 "), ("SHELL_PROMPT", "> ")]))
                .unwrap();
        assert_eq!(config.history_size, 25);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn zero_size_is_allowed() {
        let config = ShellConfig::from_lookup(lookup(&[("HISTSIZE", "0")])).unwrap();
        assert_eq!(config.history_size, 0);
    }

    #[test]
    fn rejects_bad_size() {
        let err = ShellConfig::from_lookup(lookup(&[("HISTSIZE", "-3")])).unwrap_err();
        let ConfigError::InvalidHistorySize { value, .. } = &err;
        assert_eq!(value, "-3");
        assert!(err.to_string().contains("HISTSIZE"));
    }
}
