//! Pure search and genre filtering over the catalog.

use std::collections::HashSet;
use std::fmt;

use crate::models::MovieRecord;

/// Label of the "no genre restriction" option.
pub const ALL_GENRES: &str = "All";

/// Current genre filter value: the `All` sentinel or one exact genre string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreSelector {
    #[default]
    All,
    Genre(String),
}

impl GenreSelector {
    /// Map an option label (as produced by [`genre_options`]) back to a selector.
    pub fn from_option(label: &str) -> Self {
        if label == ALL_GENRES {
            GenreSelector::All
        } else {
            GenreSelector::Genre(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GenreSelector::All => ALL_GENRES,
            GenreSelector::Genre(genre) => genre,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, GenreSelector::All)
    }
}

impl fmt::Display for GenreSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive substring match on the title. An empty search matches
/// everything; whitespace is matched literally.
pub fn matches_search(movie: &MovieRecord, search: &str) -> bool {
    movie.title.to_lowercase().contains(&search.to_lowercase())
}

/// Exact, case-sensitive genre match unless the selector is `All`.
pub fn matches_genre(movie: &MovieRecord, genre: &GenreSelector) -> bool {
    match genre {
        GenreSelector::All => true,
        GenreSelector::Genre(wanted) => movie.genre == *wanted,
    }
}

/// Return the records matching both the search text and the genre selector,
/// in catalog order.
pub fn filter_movies<'a>(
    movies: &'a [MovieRecord],
    search: &str,
    genre: &GenreSelector,
) -> Vec<&'a MovieRecord> {
    movies
        .iter()
        .filter(|movie| matches_search(movie, search) && matches_genre(movie, genre))
        .collect()
}

/// `"All"` followed by every distinct genre in order of first occurrence.
pub fn genre_options(movies: &[MovieRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL_GENRES.to_string()];
    for movie in movies {
        // A genre literally named "All" would duplicate the sentinel option.
        if movie.genre != ALL_GENRES && seen.insert(movie.genre.as_str()) {
            options.push(movie.genre.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::catalog::catalog;

    fn titles<'a>(movies: &[&'a MovieRecord]) -> Vec<&'a str> {
        movies.iter().copied().map(|movie| movie.title.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let result = filter_movies(catalog(), "inter", &GenreSelector::All);
        assert_eq!(titles(&result), vec!["Interstellar"]);

        let result = filter_movies(catalog(), "INCEP", &GenreSelector::All);
        assert_eq!(titles(&result), vec!["Inception"]);
    }

    #[test]
    fn genre_keeps_catalog_order() {
        let comedy = GenreSelector::Genre("Comedy".into());
        let result = filter_movies(catalog(), "", &comedy);
        assert_eq!(titles(&result), vec!["The Grand Budapest Hotel", "Knives Out"]);
    }

    #[test]
    fn genre_is_case_sensitive() {
        let lower = GenreSelector::Genre("comedy".into());
        assert!(filter_movies(catalog(), "", &lower).is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_movies(catalog(), "zzz", &GenreSelector::All).is_empty());
        let drama = GenreSelector::Genre("Drama".into());
        assert!(filter_movies(catalog(), "zzz", &drama).is_empty());
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        // "Joker" has no space, "The Dark Knight" does.
        let result = filter_movies(catalog(), " ", &GenreSelector::All);
        assert!(result.iter().all(|movie| movie.title.contains(' ')));
        assert!(!titles(&result).contains(&"Joker"));
    }

    #[test]
    fn search_and_genre_combine() {
        let action = GenreSelector::Genre("Action".into());
        let result = filter_movies(catalog(), "the", &action);
        assert_eq!(titles(&result), vec!["The Dark Knight"]);
    }

    #[test]
    fn options_for_catalog() {
        assert_eq!(
            genre_options(catalog()),
            vec!["All", "Sci-Fi", "Action", "Drama", "Comedy"]
        );
    }

    #[test]
    fn options_for_empty_catalog() {
        assert_eq!(genre_options(&[]), vec!["All"]);
    }

    #[test]
    fn literal_all_genre_is_not_duplicated() {
        let movies = vec![
            MovieRecord::new(1, "A", "All", 2000, "x"),
            MovieRecord::new(2, "B", "Drama", 2001, "y"),
        ];
        assert_eq!(genre_options(&movies), vec!["All", "Drama"]);
    }

    #[test]
    fn selector_round_trips_labels() {
        assert_eq!(GenreSelector::from_option("All"), GenreSelector::All);
        assert_eq!(
            GenreSelector::from_option("Drama"),
            GenreSelector::Genre("Drama".into())
        );
        assert_eq!(GenreSelector::Genre("Drama".into()).to_string(), "Drama");
        assert!(GenreSelector::default().is_all());
    }

    fn arb_movies() -> impl Strategy<Value = Vec<MovieRecord>> {
        let genre = prop::sample::select(vec!["Sci-Fi", "Action", "Drama", "Comedy", "drama"]);
        prop::collection::vec(("[a-zA-Z ]{1,12}", genre, 1900u16..2030), 0..24).prop_map(
            |rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(idx, (title, genre, year))| {
                        MovieRecord::new(idx as u32, title, genre, year, "https://example.com/p.jpg")
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn all_selector_is_a_title_filter(movies in arb_movies(), search in "[a-zA-Z ]{0,3}") {
            let expected: Vec<&MovieRecord> = movies
                .iter()
                .filter(|movie| movie.title.to_lowercase().contains(&search.to_lowercase()))
                .collect();
            prop_assert_eq!(filter_movies(&movies, &search, &GenreSelector::All), expected);
        }

        #[test]
        fn genre_only_filter(movies in arb_movies(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!movies.is_empty());
            let genre = movies[pick.index(movies.len())].genre.clone();
            let expected: Vec<&MovieRecord> =
                movies.iter().filter(|movie| movie.genre == genre).collect();
            let result = filter_movies(&movies, "", &GenreSelector::Genre(genre));
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn empty_search_with_all_is_identity(movies in arb_movies()) {
            let result = filter_movies(&movies, "", &GenreSelector::All);
            let expected: Vec<&MovieRecord> = movies.iter().collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn options_are_all_plus_distinct_genres(movies in arb_movies()) {
            let options = genre_options(&movies);
            prop_assert_eq!(options[0].as_str(), ALL_GENRES);
            let rest = &options[1..];
            let distinct: HashSet<&str> = movies.iter().map(|m| m.genre.as_str()).collect();
            prop_assert_eq!(rest.len(), distinct.len());
            for genre in distinct {
                prop_assert_eq!(rest.iter().filter(|o| o.as_str() == genre).count(), 1);
            }
        }
    }
}
