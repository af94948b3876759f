use crate::models::Movie;

/// Aggregates over the filtered list. Recomputed, never edited in place.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedStats {
    pub total_movies: usize,
    /// Mean `vote_average`, rounded to one decimal. `0.0` for an empty list.
    pub average_rating: f64,
}

pub fn compute_stats(movies: &[Movie]) -> DerivedStats {
    let total_movies = movies.len();
    if total_movies == 0 {
        return DerivedStats::default();
    }

    let sum: f64 = movies.iter().map(|m| m.vote_average).sum();
    DerivedStats {
        total_movies,
        average_rating: round_one_decimal(sum / total_movies as f64),
    }
}

/// Rounds the exact stored value, like `{:.1}` does. 7.0499.. gives 7.0.
fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::pipeline::tests::{dune_and_cars, movie};
    use crate::core::filter::{filter_movies, FilterCriteria};

    #[test]
    fn search_scenario() {
        let criteria = FilterCriteria { search_term: "du".into(), ..Default::default() };
        let filtered = filter_movies(&dune_and_cars(), &criteria);
        let stats = compute_stats(&filtered);
        assert_eq!(stats.total_movies, 1);
        assert_eq!(stats.average_rating, 8.0);
    }

    #[test]
    fn year_scenario() {
        let criteria = FilterCriteria { selected_year: Some("2006".into()), ..Default::default() };
        let filtered = filter_movies(&dune_and_cars(), &criteria);
        assert_eq!(filtered[0].title, "Cars");
        let stats = compute_stats(&filtered);
        assert_eq!(stats.total_movies, 1);
        assert_eq!(stats.average_rating, 6.0);
    }

    #[test]
    fn rounding_uses_the_stored_mean() {
        let movies = vec![movie(1, "A", 7.0, None, &[]), movie(2, "B", 7.1, None, &[])];
        // (7.0 + 7.1) / 2 is stored just below 7.05
        assert_eq!(compute_stats(&movies).average_rating, 7.0);
    }

    #[test]
    fn no_match_reports_zero() {
        let criteria = FilterCriteria { search_term: "zz".into(), ..Default::default() };
        let filtered = filter_movies(&dune_and_cars(), &criteria);
        let stats = compute_stats(&filtered);
        assert_eq!(stats, DerivedStats { total_movies: 0, average_rating: 0.0 });
        assert!(!stats.average_rating.is_nan());
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let movies = vec![
            movie(1, "A", 7.0, None, &[]),
            movie(2, "B", 8.0, None, &[]),
            movie(3, "C", 8.0, None, &[]),
        ];
        // 23 / 3 = 7.666..
        assert_eq!(compute_stats(&movies).average_rating, 7.7);

        let movies = vec![movie(1, "A", 6.0, None, &[]), movie(2, "B", 8.0, None, &[])];
        let stats = compute_stats(&movies);
        assert_eq!(stats.total_movies, movies.len());
        assert_eq!(stats.average_rating, 7.0);
    }
}
