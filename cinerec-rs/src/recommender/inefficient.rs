//! Baseline recommender
//!
//! Hot spots, all intentional:
//! 1. three full copies of the catalog, concatenated (300 entries for 100)
//! 2. filtering over the tripled list
//! 3. a title sort whose order only survives as the rating tie-break
//! 4. a second, rating sort over the same list
//! 5. an element-by-element copy for the truncated result
//!
//! Every match sits in the sorted list three times in a row, so any window
//! longer than one yields repeated entries.

use super::{max_results, Recommender};
use crate::catalog::Catalog;
use crate::movie::Movie;

/// Triplicate, filter, sort by title, sort by rating, truncate
#[derive(Debug, Clone, Copy, Default)]
pub struct InefficientRecommender;

impl Recommender for InefficientRecommender {
    fn name(&self) -> &'static str {
        "inefficient"
    }

    fn recommend<'a>(&self, catalog: &'a Catalog, genre: &str, limit: i64) -> Vec<&'a Movie> {
        let copy1: Vec<&Movie> = catalog.movies().iter().collect();
        let copy2: Vec<&Movie> = catalog.movies().iter().collect();
        let copy3: Vec<&Movie> = catalog.movies().iter().collect();

        let mut merged: Vec<&Movie> = Vec::new();
        merged.extend(copy1);
        merged.extend(copy2);
        merged.extend(copy3);

        let mut filtered: Vec<&Movie> = Vec::new();
        for movie in merged {
            if movie.genre.matches(genre) {
                filtered.push(movie);
            }
        }

        // Both sorts are stable: the second keeps title order among equal ratings
        filtered.sort_by(|a, b| a.title.cmp(&b.title));
        filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating));

        let mut result = Vec::new();
        for movie in filtered.iter().take(max_results(limit)) {
            result.push(*movie);
        }
        result
    }
}
