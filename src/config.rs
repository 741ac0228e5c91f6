// src/config.rs
use crate::constants;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;

fn default_refresh_interval() -> u64 {
    constants::DEFAULT_REFRESH_INTERVAL_SECONDS
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_line_budget() -> usize {
    constants::display::DEFAULT_LINE_BUDGET
}

fn default_char_width() -> usize {
    constants::display::DEFAULT_CHAR_WIDTH
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// URL of the score feed endpoint (GET, JSON body with a `games` array)
    pub endpoint_url: String,
    /// Seconds between fetch cycles
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
    /// Bound on a single fetch, in seconds
    #[serde(default = "default_http_timeout")]
    pub fetch_timeout_seconds: u64,
    /// Maximum lines the attached display can show
    #[serde(default = "default_line_budget")]
    pub line_budget: usize,
    /// Maximum characters per display line
    #[serde(default = "default_char_width")]
    pub char_width: usize,
    /// Optional custom log file location
    #[serde(default)]
    pub log_file_path: Option<String>,
}

impl Config {
    /// Loads the configuration from the default location, prompting for the
    /// endpoint URL and persisting it when no config file exists yet.
    pub async fn load() -> Result<Self, AppError> {
        let config_path = Config::get_config_path();

        if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await
        } else {
            print!("Please enter the scoreboard endpoint URL: ");
            io::stdout().flush()?;
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            let config = Config {
                endpoint_url: input.trim().to_string(),
                refresh_interval_seconds: default_refresh_interval(),
                fetch_timeout_seconds: default_http_timeout(),
                line_budget: default_line_budget(),
                char_width: default_char_width(),
                log_file_path: None,
            };
            config.validate()?;

            config.save().await?;
            Ok(config)
        }
    }

    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the pipeline cannot run with: a missing
    /// endpoint, or display geometry that cannot hold a single line.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.endpoint_url.trim().is_empty() {
            return Err(AppError::config_error("endpoint URL must not be empty"));
        }
        if self.line_budget == 0 {
            return Err(AppError::config_error("line_budget must be at least 1"));
        }
        if self.char_width == 0 {
            return Err(AppError::config_error("char_width must be at least 1"));
        }
        Ok(())
    }

    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&Config::get_config_path()).await
    }

    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path)
            .parent()
            .ok_or_else(|| AppError::config_error("config path has no parent directory"))?;

        if !config_dir.exists() {
            tokio::fs::create_dir_all(config_dir).await?;
        }

        // Ensure the endpoint has an explicit scheme
        let endpoint_url = if self.endpoint_url.starts_with("http://")
            || self.endpoint_url.starts_with("https://")
        {
            self.endpoint_url.clone()
        } else {
            format!("https://{}", self.endpoint_url)
        };

        let content = toml::to_string_pretty(&Config {
            endpoint_url,
            ..self.clone()
        })?;
        tokio::fs::write(path, content).await?;

        Ok(())
    }

    pub fn get_config_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("nba_scoreboard")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }

    pub fn get_log_dir_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("nba_scoreboard")
            .join("logs")
            .to_string_lossy()
            .to_string()
    }

    /// Prints the current configuration, or a pointer to where it would live.
    pub async fn display() -> Result<(), AppError> {
        let config_path = Config::get_config_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Endpoint URL:");
            println!("{}", config.endpoint_url);
            println!("Refresh interval: {}s", config.refresh_interval_seconds);
            println!("Fetch timeout: {}s", config.fetch_timeout_seconds);
            println!(
                "Display: {} lines x {} chars",
                config.line_budget, config.char_width
            );
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }
}
