use std::{env, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    reading::DEFAULT_WORDS_PER_MINUTE,
    vectorizer::search::SearchMode,
};

pub const ENV_PAGE_SIZE: &str = "NEWS_RANK_PAGE_SIZE";
pub const ENV_WORDS_PER_MINUTE: &str = "NEWS_RANK_WPM";
pub const ENV_MODE: &str = "NEWS_RANK_MODE";

/// Settings shared by the CLI and embedding applications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many articles of a fetched page are considered
    pub page_size: usize,
    /// Reading speed for reading-time estimates
    pub words_per_minute: u32,
    pub mode: SearchMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 30,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            mode: SearchMode::Text,
        }
    }
}

impl Config {
    /// Defaults overridden by `NEWS_RANK_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = lookup(ENV_PAGE_SIZE) {
            config.page_size = parse_value(ENV_PAGE_SIZE, &v)?;
        }
        if let Some(v) = lookup(ENV_WORDS_PER_MINUTE) {
            config.words_per_minute = parse_value(ENV_WORDS_PER_MINUTE, &v)?;
        }
        if let Some(v) = lookup(ENV_MODE) {
            config.mode = v.parse()?;
        }
        Ok(config)
    }
}

fn parse_value<T>(key: &'static str, value: &str) -> Result<T>
where
    T: FromStr,
{
    value.trim().parse().map_err(|_| Error::Config {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, 30);
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.mode, SearchMode::Text);
    }

    #[test]
    fn overrides_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_PAGE_SIZE, "10"),
            (ENV_WORDS_PER_MINUTE, " 250 "),
            (ENV_MODE, "semantic"),
        ]))
        .unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.words_per_minute, 250);
        assert_eq!(config.mode, SearchMode::Semantic);
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, "many")])).unwrap_err();
        assert!(matches!(err, Error::Config { key: ENV_PAGE_SIZE, .. }));
        let err = Config::from_lookup(lookup_from(&[(ENV_MODE, "fuzzy")])).unwrap_err();
        assert!(matches!(err, Error::UnknownMode(_)));
    }

    #[test]
    fn partial_json_config_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"mode": "semantic"}"#).unwrap();
        assert_eq!(config.mode, SearchMode::Semantic);
        assert_eq!(config.page_size, 30);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: Config =
            serde_json::from_str(r#"{"page_size": 5, "default_query": "latest"}"#).unwrap();
        assert_eq!(config, Config { page_size: 5, ..Config::default() });
    }
}
