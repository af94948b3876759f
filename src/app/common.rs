use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::core::dashboard::Dashboard;
use crate::core::filter::GenreSelector;

pub fn init_logging(config: &crate::config::Config) {
    tracing_subscriber::fmt()
        .with_env_filter(build_log_filter(&config.logs))
        .with_writer(std::io::stderr)
        .init();
}

fn build_log_filter(logs: &crate::config::LogsConfig) -> EnvFilter {
    let mut directives = logs.level.clone();
    if !logs.enable_reqwest_logging {
        directives.push_str(",reqwest=off,hyper=off,hyper_util=off,rustls=off");
    }
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Apply a user-supplied genre to the dashboard. Unknown names leave the
/// genre filter as it was and return false.
pub fn apply_genre_selector(dashboard: &mut Dashboard, selector: &GenreSelector) -> bool {
    match selector.resolve(dashboard.genres()) {
        Ok(genre) => {
            dashboard.set_genre(genre);
            true
        }
        Err(name) => {
            warn!("Unknown genre '{}', genre filter unchanged", name);
            false
        }
    }
}
