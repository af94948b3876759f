use tracing::{error, info};

use crate::core::catalog::CatalogSource;

use super::Dashboard;

/// Fetch movies and genres concurrently and store whichever succeed.
/// A failed fetch is logged and leaves its part of the state untouched.
pub async fn load(dashboard: &mut Dashboard, source: &dyn CatalogSource) {
    let (movies, genres) = tokio::join!(source.discover_movies(), source.list_genres());

    match movies {
        Ok(movies) => {
            info!("Fetched {} movies", movies.len());
            dashboard.set_movies(movies);
        }
        Err(e) => error!("Error fetching movie data: {e}"),
    }

    match genres {
        Ok(genres) => {
            info!("Fetched {} genres", genres.len());
            dashboard.set_genres(genres);
        }
        Err(e) => error!("Error fetching genre data: {e}"),
    }
}
