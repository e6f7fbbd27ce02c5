//! Allocation accounting with the counting allocator installed

use cinerec_common::alloc::{bytes_to_mb, thread_allocated_bytes, CountingAllocator};
use cinerec_common::Timed;

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[test]
fn test_counts_allocations_on_current_thread() {
    let before = thread_allocated_bytes();
    let buffer: Vec<u64> = Vec::with_capacity(1024);
    let after = thread_allocated_bytes();

    assert!(after - before >= 8 * 1024);
    drop(buffer);

    // Frees are not subtracted
    assert!(thread_allocated_bytes() >= after);
}

#[test]
fn test_other_threads_do_not_count() {
    let before = thread_allocated_bytes();
    std::thread::spawn(|| {
        let _big: Vec<u8> = vec![0; 1 << 20];
    })
    .join()
    .unwrap();
    let delta = thread_allocated_bytes() - before;

    // Spawning allocates a little on this thread, never the 1 MiB buffer
    assert!(delta < 1 << 20);
}

#[test]
fn test_measure_reports_allocated_bytes() {
    let timed = Timed::measure(|| vec![0u8; 4096]);
    assert_eq!(timed.value.len(), 4096);
    assert!(timed.allocated_bytes >= 4096);
    assert!(timed.allocated_mb() > 0.0);

    let idle = Timed::measure(|| 1 + 1);
    assert_eq!(idle.allocated_bytes, 0);
}

#[test]
fn test_bytes_to_mb() {
    assert_eq!(bytes_to_mb(0), 0.0);
    assert_eq!(bytes_to_mb(1024 * 1024), 1.0);
    assert_eq!(bytes_to_mb(512 * 1024), 0.5);
}
