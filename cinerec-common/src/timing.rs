//! Elapsed-time helpers
//!
//! Measurements use the monotonic clock and are purely descriptive: nothing
//! here can fail or alter the measured computation.

use std::time::{Duration, Instant};

use crate::alloc::{bytes_to_mb, thread_allocated_bytes};

/// A computed value together with the time and heap traffic it took
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
    /// Bytes allocated by the computing thread, 0 unless the process runs on
    /// [`crate::alloc::CountingAllocator`]
    pub allocated_bytes: u64,
}

impl<T> Timed<T> {
    /// Run `f` and record its wall-clock duration and allocations
    pub fn measure(f: impl FnOnce() -> T) -> Self {
        let allocated_before = thread_allocated_bytes();
        let start = Instant::now();
        let value = f();
        let elapsed = start.elapsed();
        Self {
            value,
            elapsed,
            allocated_bytes: thread_allocated_bytes().saturating_sub(allocated_before),
        }
    }

    /// Elapsed time in fractional milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        duration_to_ms(self.elapsed)
    }

    pub fn allocated_mb(&self) -> f64 {
        bytes_to_mb(self.allocated_bytes)
    }
}

/// Convert a duration to fractional milliseconds
pub fn duration_to_ms(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// Round to two decimal places for reporting
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place for reporting
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_returns_value() {
        let timed = Timed::measure(|| 6 * 7);
        assert_eq!(timed.value, 42);
        assert!(timed.elapsed_ms() >= 0.0);
    }

    #[test]
    fn test_measure_captures_sleep() {
        let timed = Timed::measure(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(timed.elapsed >= Duration::from_millis(5));
        assert!(timed.elapsed_ms() >= 5.0);
    }

    #[test]
    fn test_duration_to_ms_fractional() {
        assert_eq!(duration_to_ms(Duration::from_micros(1500)), 1.5);
        assert_eq!(duration_to_ms(Duration::ZERO), 0.0);
        assert_eq!(duration_to_ms(Duration::from_secs(2)), 2000.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(1.235001), 1.24);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(-3.14159), -3.14);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(42.857), 42.9);
        assert_eq!(round1(75.0), 75.0);
        assert_eq!(round1(-1.26), -1.3);
    }

    #[test]
    fn test_measure_without_counting_allocator() {
        // Unit tests run on the plain system allocator
        let timed = Timed::measure(|| vec![1u8; 64]);
        assert_eq!(timed.allocated_bytes, 0);
        assert_eq!(timed.allocated_mb(), 0.0);
    }
}
