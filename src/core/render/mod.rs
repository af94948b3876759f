use std::fmt::Write;

use crate::config::TmdbConfig;
use crate::core::dashboard::Dashboard;
use crate::models::Movie;

const PLACEHOLDER: &str = "N/A";

/// Where poster images are served from.
#[derive(Debug, Clone)]
pub struct PosterCdn {
    pub base_url: String,
    pub size: String,
}

impl PosterCdn {
    pub fn from_config(cfg: &TmdbConfig) -> Self {
        Self {
            base_url: cfg.image_base_url.trim_end_matches('/').to_string(),
            size: cfg.poster_size.clone(),
        }
    }

    pub fn poster_url(&self, poster_path: Option<&str>) -> Option<String> {
        poster_path.map(|p| format!("{}/{}{}", self.base_url, self.size, p))
    }
}

pub fn render_dashboard(dash: &Dashboard, cdn: &PosterCdn) -> String {
    let mut out = String::new();
    let criteria = dash.criteria();
    let stats = dash.stats();

    let genre_label = match criteria.selected_genre {
        None => "All Genres".to_string(),
        Some(id) => dash
            .genre_name(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{id}")),
    };

    let _ = writeln!(out, "Movie Dashboard");
    let _ = writeln!(out, "===============");
    let _ = writeln!(
        out,
        "Search: \"{}\" | Genre: {} | Year: {}",
        criteria.search_term,
        genre_label,
        criteria.selected_year.as_deref().unwrap_or("any")
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Movies: {}", stats.total_movies);
    let _ = writeln!(out, "Average Rating: {:.1}", stats.average_rating);
    let _ = writeln!(out);

    if dash.filtered().is_empty() {
        let _ = writeln!(out, "No movies found");
        return out;
    }

    for movie in dash.filtered() {
        render_card(&mut out, movie, dash, cdn);
    }
    out
}

fn render_card(out: &mut String, movie: &Movie, dash: &Dashboard, cdn: &PosterCdn) {
    let genres = movie
        .genre_ids
        .iter()
        .filter_map(|id| dash.genre_name(*id))
        .collect::<Vec<_>>();

    let _ = writeln!(out, "[{}] {}", movie.id, movie.title);
    let _ = writeln!(
        out,
        "  Poster: {}",
        cdn.poster_url(movie.poster_path.as_deref())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    );
    let _ = writeln!(out, "  Rating: {}", movie.vote_average);
    let _ = writeln!(
        out,
        "  Release Date: {}",
        movie.release_date.as_deref().unwrap_or(PLACEHOLDER)
    );
    if !genres.is_empty() {
        let _ = writeln!(out, "  Genres: {}", genres.join(", "));
    }
    let _ = writeln!(out);
}

/// The genre dropdown as a list, with the active entry marked.
pub fn render_genre_options(dash: &Dashboard) -> String {
    let selected = dash.criteria().selected_genre;
    let mark = |active: bool| if active { '*' } else { ' ' };

    let mut out = String::new();
    let _ = writeln!(out, "{} all  All Genres", mark(selected.is_none()));
    for genre in dash.genres() {
        let _ = writeln!(
            out,
            "{} {:<4} {}",
            mark(selected == Some(genre.id)),
            genre.id,
            genre.name
        );
    }
    out
}
