use anyhow::{anyhow, Context, Result};
use simplelog::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub seed_courses: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { log_level: LevelFilter::Info, seed_courses: true }
    }
}

impl Config {
    // Reads YAGG_LOG_LEVEL and YAGG_SEED_COURSES, falling back to defaults when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(level) = lookup("YAGG_LOG_LEVEL") {
            config.log_level = level
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| anyhow!("unknown level {:?}", level))
                .context("Invalid YAGG_LOG_LEVEL")?;
        }

        if let Some(seed) = lookup("YAGG_SEED_COURSES") {
            config.seed_courses = parse_flag(&seed).context("Invalid YAGG_SEED_COURSES")?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(anyhow!("expected true or false, got {:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(from_pairs(&[]).unwrap(), Config::default());
    }

    #[test]
    fn reads_level_and_seed_flag() {
        let config = from_pairs(&[("YAGG_LOG_LEVEL", "debug"), ("YAGG_SEED_COURSES", "0")]).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(!config.seed_courses);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(from_pairs(&[("YAGG_LOG_LEVEL", "loud")]).is_err());
        let err = from_pairs(&[("YAGG_SEED_COURSES", "maybe")]).unwrap_err();
        assert!(format!("{:#}", err).contains("YAGG_SEED_COURSES"));
    }
}
