//! Single-pass recommender

use super::{max_results, Recommender};
use crate::catalog::Catalog;
use crate::movie::Movie;

/// Filter once, stable sort by rating, truncate
///
/// Equal ratings keep catalog order. No entry is ever repeated.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizedRecommender;

impl Recommender for OptimizedRecommender {
    fn name(&self) -> &'static str {
        "optimized"
    }

    fn recommend<'a>(&self, catalog: &'a Catalog, genre: &str, limit: i64) -> Vec<&'a Movie> {
        let mut matches: Vec<&Movie> = catalog
            .movies()
            .iter()
            .filter(|m| m.genre.matches(genre))
            .collect();

        matches.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        matches.truncate(max_results(limit));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(movies: &[&Movie]) -> Vec<i64> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_action_full_order() {
        let catalog = Catalog::standard();
        let result = OptimizedRecommender.recommend(&catalog, "Action", 10);
        assert_eq!(
            ids(&result),
            vec![201, 251, 231, 281, 211, 261, 241, 291, 221, 271]
        );
    }

    #[test]
    fn test_rating_ties_keep_catalog_order() {
        let catalog = Catalog::standard();
        let result = OptimizedRecommender.recommend(&catalog, "Drama", 4);
        assert_eq!(ids(&result), vec![202, 252, 232, 282]);
        assert_eq!(result[0].rating, result[1].rating);
    }

    #[test]
    fn test_limit_beyond_matches_returns_all() {
        let catalog = Catalog::standard();
        let result = OptimizedRecommender.recommend(&catalog, "Romance", 500);
        assert_eq!(result.len(), 10);
    }

    #[test]
    fn test_non_positive_limit_is_empty() {
        let catalog = Catalog::standard();
        assert!(OptimizedRecommender.recommend(&catalog, "Action", 0).is_empty());
        assert!(OptimizedRecommender.recommend(&catalog, "Action", i64::MIN).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_movies(Vec::new());
        assert!(OptimizedRecommender.recommend(&catalog, "Action", 5).is_empty());
    }
}
