//! Top-N-by-genre recommendation strategies
//!
//! Two strategies sit behind the [`Recommender`] trait and are selected with
//! [`Mode`]:
//!
//! - [`InefficientRecommender`]: triplicates the catalog and sorts twice. Kept
//!   deliberately wasteful as the baseline for comparison.
//! - [`OptimizedRecommender`]: one filter, one stable sort, one truncation.
//!
//! The two are not interchangeable. The baseline sees every match three times,
//! so its result repeats entries, and it breaks rating ties by title where the
//! optimized pass keeps catalog order.

mod inefficient;
mod optimized;

pub use inefficient::InefficientRecommender;
pub use optimized::OptimizedRecommender;

use cinerec_common::Timed;
use tracing::info;

use crate::catalog::Catalog;
use crate::movie::Movie;

/// A recommendation strategy over an immutable catalog
pub trait Recommender: Send + Sync {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Movies whose genre matches `genre` case-insensitively, best rated
    /// first, at most `limit` of them. `limit <= 0` yields nothing.
    fn recommend<'a>(&self, catalog: &'a Catalog, genre: &str, limit: i64) -> Vec<&'a Movie>;

    /// [`Recommender::recommend`] with the elapsed time and allocation of the
    /// call attached
    fn recommend_timed<'a>(
        &self,
        catalog: &'a Catalog,
        genre: &str,
        limit: i64,
    ) -> Timed<Vec<&'a Movie>> {
        let timed = Timed::measure(|| self.recommend(catalog, genre, limit));
        info!(
            "{}: Processed {} movies in {:.2} ms, allocated {} bytes",
            self.name().to_uppercase(),
            timed.value.len(),
            timed.elapsed_ms(),
            timed.allocated_bytes
        );
        timed
    }
}

/// Strategy selector carried by the `mode` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Inefficient,
    #[default]
    Optimized,
}

impl Mode {
    /// Map a raw `mode` value to a strategy
    ///
    /// Only the exact string `"inefficient"` selects the baseline. Anything
    /// else, including an absent or unknown value, selects the optimized pass.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("inefficient") => Mode::Inefficient,
            _ => Mode::Optimized,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Inefficient => "inefficient",
            Mode::Optimized => "optimized",
        }
    }

    /// The strategy this mode dispatches to
    pub fn recommender(self) -> &'static dyn Recommender {
        match self {
            Mode::Inefficient => &InefficientRecommender,
            Mode::Optimized => &OptimizedRecommender,
        }
    }
}

/// Number of results a `limit` admits
fn max_results(limit: i64) -> usize {
    if limit <= 0 {
        0
    } else {
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}
