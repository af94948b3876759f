use serde::{Deserialize, Deserializer};

pub type MovieId = u64;
pub type GenreId = u64;

/// A movie record as returned by `/discover/movie`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub vote_average: f64,
    /// ISO date (`YYYY-MM-DD`). TMDB sends `""` for unknown dates.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub results: Vec<Movie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreListResponse {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
