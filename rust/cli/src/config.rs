use serde::{Deserialize, Serialize};
use std::fs;

use pineapple_engine::game::{MAX_PLAYERS, MIN_PLAYERS};

pub const CONFIG_ENV: &str = "PINEAPPLE_CONFIG";
pub const SEED_ENV: &str = "PINEAPPLE_SEED";
pub const PLAYERS_ENV: &str = "PINEAPPLE_PLAYERS";
pub const LOG_DIR_ENV: &str = "PINEAPPLE_LOG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: u8,
    pub seed: Option<u64>,
    /// Directory where `score` appends game records (`games.jsonl`), if set
    pub log_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub seed: ValueSource,
    pub log_dir: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            seed: ValueSource::Default,
            log_dir: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 2,
            seed: None,
            log_dir: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.log_dir {
            cfg.log_dir = Some(v);
            sources.log_dir = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var(PLAYERS_ENV)
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid players: {}", players)))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(dir) = std::env::var(LOG_DIR_ENV)
        && !dir.is_empty()
    {
        cfg.log_dir = Some(dir);
        sources.log_dir = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<u8>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_dir: Option<String>,
}

pub fn validate_players(players: u8) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&usize::from(players)) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be {}-{}, got {}",
            MIN_PLAYERS, MAX_PLAYERS, players
        )));
    }
    Ok(())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_players(cfg.players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [CONFIG_ENV, SEED_ENV, PLAYERS_ENV, LOG_DIR_ENV] {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.players, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pineapple.toml");
        fs::write(&path, "players = 3\nseed = 9\nlog_dir = \"logs\"\n").unwrap();
        unsafe {
            std::env::set_var(CONFIG_ENV, &path);
            std::env::set_var(SEED_ENV, "11");
        }
        let resolved = load_with_sources().unwrap();
        clear_env();

        assert_eq!(resolved.config.players, 3);
        assert_eq!(resolved.sources.players, ValueSource::File);
        assert_eq!(resolved.config.seed, Some(11));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.config.log_dir.as_deref(), Some("logs"));
    }

    #[test]
    #[serial]
    fn out_of_range_player_count_is_rejected() {
        clear_env();
        unsafe {
            std::env::set_var(PLAYERS_ENV, "5");
        }
        let result = load();
        clear_env();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
