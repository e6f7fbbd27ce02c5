//! Per-strategy latency ledger
//!
//! Every `/recommendations` call records its elapsed time and heap allocation
//! against the strategy that served it. The ledger only keeps running
//! aggregates, so its size does not grow with traffic.

use chrono::{DateTime, Utc};
use cinerec_common::timing::{round1, round2};
use serde::Serialize;

use crate::recommender::Mode;

/// Running aggregates for one strategy
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VariantStats {
    pub calls: u64,
    pub total_time_ms: f64,
    pub min_time_ms: Option<f64>,
    pub max_time_ms: Option<f64>,
    pub total_allocations_mb: f64,
}

impl VariantStats {
    fn record(&mut self, elapsed_ms: f64, allocated_mb: f64) {
        self.calls += 1;
        self.total_allocations_mb += allocated_mb;
        self.total_time_ms += elapsed_ms;
        self.min_time_ms = Some(self.min_time_ms.map_or(elapsed_ms, |m| m.min(elapsed_ms)));
        self.max_time_ms = Some(self.max_time_ms.map_or(elapsed_ms, |m| m.max(elapsed_ms)));
    }

    /// Mean elapsed time, 0 with no samples
    pub fn average_ms(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.total_time_ms / self.calls as f64
        }
    }

    fn report(&self) -> VariantReport {
        VariantReport {
            calls: self.calls,
            avg_response_time_ms: round2(self.average_ms()),
            min_time_ms: round2(self.min_time_ms.unwrap_or(0.0)),
            max_time_ms: round2(self.max_time_ms.unwrap_or(0.0)),
            total_time_ms: round2(self.total_time_ms),
            total_allocations_mb: round2(self.total_allocations_mb),
        }
    }
}

/// Aggregates for both strategies
#[derive(Debug, Clone, Default)]
pub struct ProfilingLedger {
    inefficient: VariantStats,
    optimized: VariantStats,
}

impl ProfilingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, mode: Mode, elapsed_ms: f64, allocated_mb: f64) {
        self.stats_mut(mode).record(elapsed_ms, allocated_mb);
    }

    pub fn stats(&self, mode: Mode) -> &VariantStats {
        match mode {
            Mode::Inefficient => &self.inefficient,
            Mode::Optimized => &self.optimized,
        }
    }

    fn stats_mut(&mut self, mode: Mode) -> &mut VariantStats {
        match mode {
            Mode::Inefficient => &mut self.inefficient,
            Mode::Optimized => &mut self.optimized,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Relative speedup of the optimized strategy, in percent
    ///
    /// 0 until the baseline has a non-zero average.
    pub fn improvement_percent(&self) -> f64 {
        let baseline = self.inefficient.average_ms();
        if baseline > 0.0 {
            (baseline - self.optimized.average_ms()) / baseline * 100.0
        } else {
            0.0
        }
    }

    /// How many times faster the optimized strategy ran on average
    ///
    /// 0 until the optimized strategy has a non-zero average; the divisor is
    /// floored at 0.001 ms.
    pub fn estimated_speedup(&self) -> f64 {
        let optimized = self.optimized.average_ms();
        if optimized > 0.0 {
            self.inefficient.average_ms() / optimized.max(0.001)
        } else {
            0.0
        }
    }

    pub fn report(&self, timestamp: DateTime<Utc>) -> ProfilingReport {
        ProfilingReport {
            summary: ReportSummary {
                timestamp,
                profiling_enabled: true,
            },
            inefficient: self.inefficient.report(),
            optimized: self.optimized.report(),
            improvement: Improvement {
                response_time_improvement_percent: round1(self.improvement_percent()),
                estimated_speedup: round1(self.estimated_speedup()),
            },
        }
    }
}

/// Body of `GET /profiling-report`
#[derive(Debug, Clone, Serialize)]
pub struct ProfilingReport {
    pub summary: ReportSummary,
    pub inefficient: VariantReport,
    pub optimized: VariantReport,
    pub improvement: Improvement,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub timestamp: DateTime<Utc>,
    pub profiling_enabled: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VariantReport {
    pub calls: u64,
    pub avg_response_time_ms: f64,
    pub min_time_ms: f64,
    pub max_time_ms: f64,
    pub total_time_ms: f64,
    pub total_allocations_mb: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Improvement {
    pub response_time_improvement_percent: f64,
    pub estimated_speedup: f64,
}
