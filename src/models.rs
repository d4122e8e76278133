//! Domain models passed between the catalog, the filter functions and the TUI.
//! These stay plain data holders; presentation and filtering live elsewhere.

use std::fmt;

/// Stable identifier of a movie. Cards are keyed by it and poster state is
/// tracked per id, so it must stay unique across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(pub u32);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of the movie catalog. Records are built once when the catalog is
/// first touched and never mutated afterwards.
pub struct MovieRecord {
    /// Render identity key.
    pub id: MovieId,
    /// Title displayed on the card and matched by the search box.
    pub title: String,
    /// Category label. The set is open-ended; the genre control derives its
    /// options from whatever values appear here.
    pub genre: String,
    /// Four-digit release year.
    pub release_year: u16,
    /// External poster image URI. Not validated; a broken link is handled by
    /// the poster fallback instead.
    pub poster_url: String,
}

impl MovieRecord {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        genre: impl Into<String>,
        release_year: u16,
        poster_url: impl Into<String>,
    ) -> Self {
        Self {
            id: MovieId(id),
            title: title.into(),
            genre: genre.into(),
            release_year,
            poster_url: poster_url.into(),
        }
    }

    /// Alternate text describing the poster, shown inside the card.
    pub fn poster_alt(&self) -> String {
        format!("{} poster", self.title)
    }
}

impl fmt::Display for MovieRecord {
    /// `Title (Year)`, used by status messages and log lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.release_year)
    }
}
