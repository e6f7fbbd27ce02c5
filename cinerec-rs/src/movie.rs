//! Movie records and the genre enumeration

use serde::Serialize;
use std::fmt;

/// Closed set of genres a catalog entry can carry
///
/// Serialized by display label, so `SciFi` appears as `"Sci-Fi"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Genre {
    Action,
    Drama,
    Crime,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Fantasy,
    Animation,
    Thriller,
    Comedy,
    Romance,
    Horror,
}

impl Genre {
    /// All genres in catalog cycling order
    pub const ALL: [Genre; 10] = [
        Genre::Action,
        Genre::Drama,
        Genre::Crime,
        Genre::SciFi,
        Genre::Fantasy,
        Genre::Animation,
        Genre::Thriller,
        Genre::Comedy,
        Genre::Romance,
        Genre::Horror,
    ];

    /// Display label, identical to the serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Drama => "Drama",
            Genre::Crime => "Crime",
            Genre::SciFi => "Sci-Fi",
            Genre::Fantasy => "Fantasy",
            Genre::Animation => "Animation",
            Genre::Thriller => "Thriller",
            Genre::Comedy => "Comedy",
            Genre::Romance => "Romance",
            Genre::Horror => "Horror",
        }
    }

    /// Case-insensitive comparison against a query string
    pub fn matches(self, query: &str) -> bool {
        eq_ignore_case(self.as_str(), query)
    }
}

/// Char-by-char case-insensitive equality
///
/// Two chars are equal if they are identical, if their uppercase forms are,
/// or if the lowercase forms of those uppercase forms are. So `"actıon"`
/// (dotless i) and `"ſci-fi"` (long s) match `Action` and `Sci-Fi`. Strings
/// of different char counts never match.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_eq_ignore_case(x, y))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (ua, ub) = (simple_upper(a), simple_upper(b));
    ua == ub || simple_lower(ua) == simple_lower(ub)
}

/// Single-char uppercase mapping; chars whose uppercase expands stay as is
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Single-char lowercase mapping; chars whose lowercase expands stay as is
fn simple_lower(c: char) -> char {
    // Only char with a multi-char full lowercase; its simple mapping is 'i'
    if c == '\u{130}' {
        return 'i';
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry
///
/// Built once by [`crate::catalog::Catalog`] and only ever handed out by
/// shared reference afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub genre: Genre,
    pub rating: f64,
    pub description: String,
    pub poster: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_genre_matches_ignores_case() {
        assert!(Genre::Action.matches("Action"));
        assert!(Genre::Action.matches("action"));
        assert!(Genre::Action.matches("ACTION"));
        assert!(Genre::SciFi.matches("sci-fi"));
        assert!(!Genre::SciFi.matches("scifi"));
        assert!(!Genre::Drama.matches(""));
        assert!(!Genre::Drama.matches(" Drama"));
    }

    #[test]
    fn test_genre_matches_unicode_case_variants() {
        // Dotless i and long s uppercase to ASCII I and S
        assert!(Genre::Action.matches("actıon"));
        assert!(Genre::Action.matches("ACTıON"));
        assert!(Genre::SciFi.matches("ſci-fi"));
        assert!(Genre::Horror.matches("HORROR"));
        // Dotted capital I lowercases to i
        assert!(Genre::Thriller.matches("THRİLLER"));
        assert!(!Genre::Action.matches("actiön"));
    }

    #[test]
    fn test_eq_ignore_case_requires_same_length() {
        assert!(eq_ignore_case("", ""));
        assert!(!eq_ignore_case("Action", "Actions"));
        // Full uppercase of ß is "SS", which must not match two chars
        assert!(!eq_ignore_case("ß", "SS"));
        assert!(eq_ignore_case("straße", "STRAßE"));
    }

    #[test]
    fn test_genre_serializes_as_label() {
        assert_eq!(serde_json::to_value(Genre::SciFi).unwrap(), json!("Sci-Fi"));
        assert_eq!(serde_json::to_value(Genre::Horror).unwrap(), json!("Horror"));
    }

    #[test]
    fn test_display_matches_serialized_label() {
        for genre in Genre::ALL {
            let serialized = serde_json::to_value(genre).unwrap();
            assert_eq!(serialized, json!(genre.to_string()));
        }
    }

    #[test]
    fn test_movie_serializes_all_fields() {
        let movie = Movie {
            id: 201,
            title: "Jaws (1)".to_string(),
            year: 1990,
            genre: Genre::Thriller,
            rating: 8.5,
            description: "Description of movie 201".to_string(),
            poster: "https://via.placeholder.com/400x600?text=Jaws".to_string(),
        };

        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 201,
                "title": "Jaws (1)",
                "year": 1990,
                "genre": "Thriller",
                "rating": 8.5,
                "description": "Description of movie 201",
                "poster": "https://via.placeholder.com/400x600?text=Jaws",
            })
        );
    }
}
