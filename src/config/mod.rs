use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of history rows per page, matching the original UI.
fn default_entries_per_page() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the bundled XML snapshot read at startup.
    pub baseline: String,
    /// Path of the overlay blob rewritten after every mutation.
    pub overlay: String,
    /// Path of the session state (current user + generated numbers).
    pub session: String,
    #[serde(default = "default_entries_per_page")]
    pub entries_per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_data_dir(&Self::data_dir())
    }
}

impl Config {
    /// Standard data/config directory, in the user's home.
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".kitledger")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::data_dir().join("kitledger.conf")
    }

    /// Derive all store paths from one directory. Used both for the
    /// defaults and for the global `--data-dir` override.
    pub fn for_data_dir(dir: &Path) -> Self {
        Self {
            baseline: dir.join("users.xml").to_string_lossy().to_string(),
            overlay: dir.join("overlay.json").to_string_lossy().to_string(),
            session: dir.join("session.json").to_string_lossy().to_string(),
            entries_per_page: default_entries_per_page(),
        }
    }

    /// Load configuration from file, or return defaults if it is
    /// missing or unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let path = Self::config_file();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(&path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Materialize the data directory, the config file and an empty
    /// baseline document, leaving any existing files untouched.
    pub fn init_all(data_dir: Option<&str>) -> AppResult<Config> {
        let dir = match data_dir {
            Some(d) => PathBuf::from(d),
            None => Self::data_dir(),
        };
        fs::create_dir_all(&dir)?;

        let config = Config::for_data_dir(&dir);
        // only persist the config file for the default location; an
        // explicit --data-dir is an ephemeral override
        if data_dir.is_none() && !Self::config_file().exists() {
            config.save()?;
        }

        let baseline = Path::new(&config.baseline);
        if !baseline.exists() {
            fs::write(baseline, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<users>\n</users>\n")?;
        }

        Ok(config)
    }
}
