use crate::models::{Genre, GenreId};

/// User-controlled filter inputs. All set filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the title. Empty matches everything.
    pub search_term: String,
    pub selected_genre: Option<GenreId>,
    /// Substring of the release date, usually a four digit year.
    pub selected_year: Option<String>,
}

impl FilterCriteria {
    pub fn set_year(&mut self, year: Option<&str>) {
        self.selected_year = year
            .map(str::trim)
            .filter(|y| !y.is_empty())
            .map(str::to_string);
    }
}

/// How a genre was named by the user, before the taxonomy is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreSelector {
    All,
    Id(GenreId),
    Name(String),
}

impl GenreSelector {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("all") {
            return GenreSelector::All;
        }
        match input.parse::<GenreId>() {
            Ok(id) => GenreSelector::Id(id),
            Err(_) => GenreSelector::Name(input.to_string()),
        }
    }

    /// Resolve against the taxonomy. `Ok(None)` means no genre filter.
    /// Ids are accepted as-is even when the taxonomy has not loaded.
    pub fn resolve(&self, genres: &[Genre]) -> Result<Option<GenreId>, String> {
        match self {
            GenreSelector::All => Ok(None),
            GenreSelector::Id(id) => Ok(Some(*id)),
            GenreSelector::Name(name) => genres
                .iter()
                .find(|g| g.name.eq_ignore_ascii_case(name))
                .map(|g| Some(g.id))
                .ok_or_else(|| name.clone()),
        }
    }
}
