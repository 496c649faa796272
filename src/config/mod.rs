use crate::core::layout::LayoutConfig;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_category")]
    pub default_category: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_day_start")]
    pub day_start_hour: u32,
    #[serde(default = "default_day_end")]
    pub day_end_hour: u32,
    #[serde(default = "default_hour_height")]
    pub hour_height: f64,
    #[serde(default = "default_min_block_height")]
    pub min_block_height: f64,
    #[serde(default = "default_block_margin")]
    pub block_margin: f64,
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: u64,
}

fn default_category() -> String {
    "work".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_day_start() -> u32 {
    6
}
fn default_day_end() -> u32 {
    23
}
fn default_hour_height() -> f64 {
    80.0
}
fn default_min_block_height() -> f64 {
    50.0
}
fn default_block_margin() -> f64 {
    8.0
}
fn default_tick_seconds() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    fn with_database(database: String) -> Self {
        Self {
            database,
            default_category: default_category(),
            log_level: default_log_level(),
            day_start_hour: default_day_start(),
            day_end_hour: default_day_end(),
            hour_height: default_hour_height(),
            min_block_height: default_min_block_height(),
            block_margin: default_block_margin(),
            tick_seconds: default_tick_seconds(),
        }
    }

    /// Return the configuration directory (`~/.zenplan`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".zenplan")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("zenplan.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("zenplan.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Geometry used by the day timeline.
    pub fn layout(&self) -> LayoutConfig {
        let first_hour = self.day_start_hour.min(23);
        LayoutConfig {
            hour_height: self.hour_height,
            min_block_height: self.min_block_height,
            first_hour,
            last_hour: self.day_end_hour.clamp(first_hour, 23),
            block_margin: self.block_margin,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_seconds.max(1))
    }

    /// Prepare the config directory, write the config file (unless
    /// `is_test`) and return the database path to initialize.
    /// Relative database names live under the config directory, wherever
    /// the command is run from. `:memory:` is passed through untouched.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = PathBuf::from(name);
        if p.is_absolute() || name == ":memory:" {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        if !is_test {
            Self::with_database(db_path.to_string_lossy().to_string()).save()?;
        }

        Ok(db_path)
    }
}
