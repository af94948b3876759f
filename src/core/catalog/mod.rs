pub mod tmdb;

use async_trait::async_trait;

use crate::models::{Genre, Movie};
use crate::utils::CinedashResult;

pub use tmdb::TmdbClient;

/// Read side of a movie catalog. The dashboard loads from one of these.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Movies in the catalog's discovery order.
    async fn discover_movies(&self) -> CinedashResult<Vec<Movie>>;

    async fn list_genres(&self) -> CinedashResult<Vec<Genre>>;
}
