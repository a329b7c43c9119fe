use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{0}` must be set")]
    Missing(&'static str),

    #[error("`{name}` has an invalid value `{value}`")]
    Invalid { name: &'static str, value: String },
}

/// Server settings read from the environment (and `.env`, when present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Apply pending migrations before serving
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the settings from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = lookup("BIND_ADDR")
            .filter(|addr| !addr.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            None => true,
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "RUN_MIGRATIONS",
                value,
            })?,
        };

        Ok(Self {
            database_url,
            bind_addr,
            run_migrations,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
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
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.run_migrations);
    }

    #[test]
    fn test_database_url_is_required() {
        assert_eq!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("DATABASE_URL", "")])),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/school"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("RUN_MIGRATIONS", "off"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_invalid_migration_flag() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("RUN_MIGRATIONS", "sometimes"),
        ]))
        .unwrap_err();

        assert_eq!(err.to_string(), "`RUN_MIGRATIONS` has an invalid value `sometimes`");
    }
}
