use crate::models::Movie;

use super::FilterCriteria;

/// Apply title, genre and year filters, in that order.
pub fn filter_movies(movies: &[Movie], criteria: &FilterCriteria) -> Vec<Movie> {
    let needle = criteria.search_term.to_lowercase();

    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .filter(|m| match criteria.selected_genre {
            Some(genre) => m.genre_ids.contains(&genre),
            None => true,
        })
        .filter(|m| match criteria.selected_year.as_deref() {
            Some(year) => m
                .release_date
                .as_deref()
                .is_some_and(|date| date.contains(year)),
            None => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn movie(id: u64, title: &str, rating: f64, date: Option<&str>, genres: &[u64]) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            vote_average: rating,
            release_date: date.map(str::to_string),
            genre_ids: genres.to_vec(),
            poster_path: None,
        }
    }

    pub(crate) fn dune_and_cars() -> Vec<Movie> {
        vec![
            movie(1, "Dune", 8.0, Some("2021-10-01"), &[1]),
            movie(2, "Cars", 6.0, Some("2006-06-09"), &[2]),
        ]
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn empty_criteria_keeps_everything() {
        let raw = dune_and_cars();
        assert_eq!(filter_movies(&raw, &FilterCriteria::default()), raw);
    }

    #[test]
    fn search_is_case_insensitive() {
        let raw = dune_and_cars();
        let criteria = FilterCriteria { search_term: "du".into(), ..Default::default() };
        assert_eq!(titles(&filter_movies(&raw, &criteria)), vec!["Dune"]);

        let criteria = FilterCriteria { search_term: "CAR".into(), ..Default::default() };
        assert_eq!(titles(&filter_movies(&raw, &criteria)), vec!["Cars"]);
    }

    #[test]
    fn genre_and_year_filters() {
        let raw = dune_and_cars();

        let by_genre = FilterCriteria { selected_genre: Some(2), ..Default::default() };
        assert_eq!(titles(&filter_movies(&raw, &by_genre)), vec!["Cars"]);

        let by_year = FilterCriteria { selected_year: Some("2006".into()), ..Default::default() };
        assert_eq!(titles(&filter_movies(&raw, &by_year)), vec!["Cars"]);
    }

    #[test]
    fn filters_are_conjunctive() {
        let raw = dune_and_cars();
        let criteria = FilterCriteria {
            search_term: "dune".into(),
            selected_genre: Some(1),
            selected_year: Some("2006".into()),
        };
        assert!(filter_movies(&raw, &criteria).is_empty());
    }

    #[test]
    fn missing_release_date_fails_year_filter() {
        let raw = vec![
            movie(1, "Announced", 0.0, None, &[1]),
            movie(2, "Released", 7.0, Some("2024-03-01"), &[1]),
        ];
        let criteria = FilterCriteria { selected_year: Some("20".into()), ..Default::default() };
        assert_eq!(titles(&filter_movies(&raw, &criteria)), vec!["Released"]);

        // no year: the undated movie stays
        assert_eq!(filter_movies(&raw, &FilterCriteria::default()).len(), 2);
    }

    #[test]
    fn result_is_an_ordered_subset() {
        let raw = vec![
            movie(1, "Alien", 8.4, Some("1979-05-25"), &[27, 878]),
            movie(2, "Aliens", 7.9, Some("1986-07-18"), &[28, 878]),
            movie(3, "Amelie", 7.9, Some("2001-04-25"), &[35]),
            movie(4, "Alien 3", 6.4, Some("1992-05-22"), &[27, 878]),
        ];
        let inputs = [
            FilterCriteria { search_term: "alien".into(), ..Default::default() },
            FilterCriteria { selected_genre: Some(878), ..Default::default() },
            FilterCriteria { selected_year: Some("19".into()), ..Default::default() },
            FilterCriteria { search_term: "x".into(), ..Default::default() },
        ];

        for criteria in &inputs {
            let filtered = filter_movies(&raw, criteria);
            assert!(filtered.len() <= raw.len());
            let mut cursor = raw.iter();
            for m in &filtered {
                assert!(cursor.any(|r| r == m), "{} out of order or not in raw list", m.title);
            }
        }
    }
}
