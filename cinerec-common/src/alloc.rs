//! Per-thread heap allocation accounting
//!
//! [`CountingAllocator`] wraps the system allocator and adds every requested
//! byte to a counter owned by the allocating thread. Binaries opt in with
//! `#[global_allocator]`; without it the counter stays at zero.
//!
//! Reallocations count only their growth, so a `Vec` doubling from 8 to 16
//! bytes adds 8. Frees are not subtracted: the counter measures allocation
//! traffic, not live heap size.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static ALLOCATED: Cell<u64> = const { Cell::new(0) };
}

/// System allocator that tallies allocated bytes per thread
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingAllocator;

fn add(bytes: usize) {
    // try_with: the slot is gone during thread teardown
    let _ = ALLOCATED.try_with(|count| count.set(count.get().wrapping_add(bytes as u64)));
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            add(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            add(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            add(new_size.saturating_sub(layout.size()));
        }
        new_ptr
    }
}

/// Bytes allocated by the current thread so far
pub fn thread_allocated_bytes() -> u64 {
    ALLOCATED.try_with(Cell::get).unwrap_or(0)
}

/// Convert a byte count to mebibytes
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
