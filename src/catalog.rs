//! The built-in movie catalog. The data is compiled into the binary and
//! materialised once per process on first access; there is no API to change it.

use std::sync::OnceLock;

use crate::models::MovieRecord;

const TMDB_POSTER_BASE: &str = "https://image.tmdb.org/t/p/w600_and_h900_bestv2";

static CATALOG: OnceLock<Vec<MovieRecord>> = OnceLock::new();

/// Return the full catalog in its listed order.
pub fn catalog() -> &'static [MovieRecord] {
    CATALOG.get_or_init(seed_movies)
}

fn poster(path: &str) -> String {
    format!("{TMDB_POSTER_BASE}/{path}")
}

fn seed_movies() -> Vec<MovieRecord> {
    vec![
        MovieRecord::new(1, "Inception", "Sci-Fi", 2010, poster("oYuLEt3zVCKq27gApcjBJU3GZp.jpg")),
        MovieRecord::new(2, "The Dark Knight", "Action", 2008, poster("qJ2tW6WMUDux911r6m7haRef0WH.jpg")),
        MovieRecord::new(3, "Parasite", "Drama", 2019, poster("7IiTTgloJzvGI1TAYymCfbfl3vT.jpg")),
        MovieRecord::new(
            4,
            "The Grand Budapest Hotel",
            "Comedy",
            2014,
            poster("eWdyYQreja6JGCzqHWXpWHDrrPo.jpg"),
        ),
        MovieRecord::new(5, "Interstellar", "Sci-Fi", 2014, poster("gEU2QniE6E77NI6lCU6MxlNBvIx.jpg")),
        MovieRecord::new(
            6,
            "Mad Max: Fury Road",
            "Action",
            2015,
            poster("8tZYtuWezp8JbcsvHYO0O46tFbo.jpg"),
        ),
        MovieRecord::new(7, "Joker", "Drama", 2019, poster("udDclJoHjfjb8Ekgsd4FDteOkCU.jpg")),
        MovieRecord::new(8, "Knives Out", "Comedy", 2019, poster("pThyQovXQrw2m0s9x82twY4l0aL.jpg")),
    ]
}
