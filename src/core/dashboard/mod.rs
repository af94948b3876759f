pub mod loader;

use crate::core::filter::{compute_stats, filter_movies, DerivedStats, FilterCriteria};
use crate::models::{Genre, GenreId, Movie};

pub use loader::load;

/// All dashboard state. Derived fields are only written by `recompute`,
/// which every setter calls.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    criteria: FilterCriteria,
    filtered: Vec<Movie>,
    stats: DerivedStats,
}

impl Dashboard {
    pub fn new(criteria: FilterCriteria) -> Self {
        let mut dashboard = Self { criteria, ..Default::default() };
        dashboard.recompute();
        dashboard
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered(&self) -> &[Movie] {
        &self.filtered
    }

    pub fn stats(&self) -> DerivedStats {
        self.stats
    }

    pub fn genre_name(&self, id: GenreId) -> Option<&str> {
        self.genres.iter().find(|g| g.id == id).map(|g| g.name.as_str())
    }

    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.recompute();
    }

    /// The taxonomy is display-only, so no recompute.
    pub fn set_genres(&mut self, genres: Vec<Genre>) {
        self.genres = genres;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.recompute();
    }

    pub fn set_genre(&mut self, genre: Option<GenreId>) {
        self.criteria.selected_genre = genre;
        self.recompute();
    }

    pub fn set_year(&mut self, year: Option<&str>) {
        self.criteria.set_year(year);
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = filter_movies(&self.movies, &self.criteria);
        self.stats = compute_stats(&self.filtered);
    }
}
