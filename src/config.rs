use serde::Deserialize;

use crate::utils::CinedashResult;

impl Config {

    pub fn init(path_override: Option<&str>) -> CinedashResult<Self> {
        // get config toml path from cli, then env, with default
        let config_path = path_override
            .map(str::to_string)
            .or_else(|| std::env::var("CINEDASH_CONFIG_PATH").ok())
            .unwrap_or_else(|| String::from("./config.toml"));

        let config = config::Config::builder()
            // Add in config toml, if present
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment (with a prefix of CINEDASH)
            .add_source(config::Environment::with_prefix("CINEDASH").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    pub tmdb: TmdbConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub enable_reqwest_logging: bool,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            enable_reqwest_logging: false,
        }
    }
}

fn default_log_level() -> String { "info".to_string() }

// ===============================================================================
// TMDB
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sort order passed to `/discover/movie`.
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    /// Root of the image CDN, without the size segment.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_poster_size")]
    pub poster_size: String,
}

fn default_base_url() -> String { "https://api.themoviedb.org/3".to_string() }
fn default_sort_by() -> String { "popularity.desc".to_string() }
fn default_image_base_url() -> String { "https://image.tmdb.org/t/p".to_string() }
fn default_poster_size() -> String { "w200".to_string() }
