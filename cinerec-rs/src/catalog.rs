//! Fixed in-memory movie catalog
//!
//! The catalog is synthesized from three parallel source arrays by index
//! arithmetic. Entry `i` takes `TITLES[i % 96]`, `Genre::ALL[i % 10]` and
//! `RATINGS[i % 25]`; titles get a `(k)` suffix with `k = i / 96 + 1` so that
//! reused titles stay distinct.
//!
//! Built once at startup and shared read-only through `AppState`.

use crate::movie::{Genre, Movie};

/// Number of entries in the standard catalog
pub const CATALOG_SIZE: usize = 100;

/// Id of the first entry; ids run contiguously from here
pub const FIRST_ID: i64 = 201;

const BASE_YEAR: i32 = 1990;
const YEAR_CYCLE: usize = 35;
const POSTER_BASE_URL: &str = "https://via.placeholder.com/400x600?text=";

/// Canonical ratings, descending
pub const RATINGS: [f64; 25] = [
    9.3, 9.2, 9.0, 8.9, 8.8, 8.7, 8.6, 8.5, 8.4, 8.3, 8.2, 8.1, 8.0, 7.9, 7.8, 7.7, 7.6, 7.5, 7.4,
    7.3, 7.2, 7.1, 7.0, 6.9, 6.8,
];

const TITLES: [&str; 96] = [
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "Pulp Fiction",
    "Forrest Gump",
    "Inception",
    "The Matrix",
    "Interstellar",
    "The Lord of the Rings",
    "Fight Club",
    "Spirited Away",
    "Parasite",
    "Gladiator",
    "The Silence of the Lambs",
    "Se7en",
    "The Usual Suspects",
    "Schindler's List",
    "Saving Private Ryan",
    "Jurassic Park",
    "Titanic",
    "Avatar",
    "The Avengers",
    "The Lion King",
    "Toy Story",
    "The Shining",
    "The Exorcist",
    "Jaws",
    "Aliens",
    "The Terminator",
    "Predator",
    "Die Hard",
    "Lethal Weapon",
    "Total Recall",
    "RoboCop",
    "The Fifth Element",
    "Blade Runner",
    "2001: A Space Odyssey",
    "Back to the Future",
    "Ghostbusters",
    "Singin' in the Rain",
    "Some Like It Hot",
    "It's a Wonderful Life",
    "Casablanca",
    "Citizen Kane",
    "Gone with the Wind",
    "The Godfather Part II",
    "The Godfather Part III",
    "Once Upon a Time in the West",
    "The Good, the Bad and the Ugly",
    "A Fistful of Dollars",
    "Rear Window",
    "Vertigo",
    "Psycho",
    "M",
    "Nosferatu",
    "Metropolis",
    "The Cabinet of Dr. Caligari",
    "Citizen X",
    "In the Mood for Love",
    "Amélie",
    "Pan's Labyrinth",
    "The Shape of Water",
    "Moonlight",
    "Whiplash",
    "La La Land",
    "Manchester by the Sea",
    "Hidden Figures",
    "The Help",
    "12 Years a Slave",
    "Lincoln",
    "Dunkirk",
    "Tenet",
    "Oppenheimer",
    "The Irishman",
    "Once Upon a Time in Hollywood",
    "Knives Out",
    "The Lighthouse",
    "Black Panther",
    "Aquaman",
    "Wonder Woman",
    "Ready Player One",
    "Blade Runner 2049",
    "Arrival",
    "Ex Machina",
    "Annihilation",
    "Dune",
    "The Matrix Resurrections",
    "The Wandering Earth",
    "Three-Body",
    "Godzilla vs. Kong",
    "Red Notice",
    "Free Guy",
    "Army of the Dead",
    "Death on the Nile",
    "Everything Everywhere All at Once",
    "Top Gun: Maverick",
];

/// Immutable, ordered collection of movies
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Build the standard 100-entry catalog
    pub fn standard() -> Self {
        Self {
            movies: (0..CATALOG_SIZE).map(synthesize).collect(),
        }
    }

    /// Wrap an arbitrary list of movies, preserving its order
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Entries in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn synthesize(i: usize) -> Movie {
    let id = FIRST_ID + i as i64;
    let base_title = TITLES[i % TITLES.len()];

    Movie {
        id,
        title: format!("{} ({})", base_title, i / TITLES.len() + 1),
        year: BASE_YEAR + (i % YEAR_CYCLE) as i32,
        genre: Genre::ALL[i % Genre::ALL.len()],
        rating: RATINGS[i % RATINGS.len()],
        description: format!("Description of movie {}", id),
        poster: format!("{}{}", POSTER_BASE_URL, base_title),
    }
}
