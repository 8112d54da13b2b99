use anyhow::{Context, Result, bail};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    /// JSON feed used to seed an empty employee store at start-up.
    pub seed_file: Option<PathBuf>,
    pub log_dir: String,

    // Rate limiting
    pub rate_per_min: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rate_per_min: u32 = lookup("RATE_PER_MIN")
            .unwrap_or_else(|| "1000".to_string())
            .parse()
            .context("RATE_PER_MIN must be a positive integer")?;
        if rate_per_min == 0 {
            bail!("RATE_PER_MIN must be greater than zero");
        }

        Ok(Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            api_prefix: lookup("API_PREFIX").unwrap_or_else(|| "/api".to_string()),
            seed_file: lookup("SEED_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            rate_per_min,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.server_addr, "127.0.0.1:8080");
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.seed_file, None);
        assert_eq!(config.log_dir, "logs");
        assert_eq!(config.rate_per_min, 1000);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_ADDR", "0.0.0.0:9000"),
            ("SEED_FILE", "demos/seed_employees.json"),
            ("RATE_PER_MIN", "60"),
        ]))
        .unwrap();

        assert_eq!(config.server_addr, "0.0.0.0:9000");
        assert_eq!(config.seed_file, Some(PathBuf::from("demos/seed_employees.json")));
        assert_eq!(config.rate_per_min, 60);
    }

    #[test]
    fn zero_or_garbage_rate_is_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("RATE_PER_MIN", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("RATE_PER_MIN", "lots")])).is_err());
    }
}
