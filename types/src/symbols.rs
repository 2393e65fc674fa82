//! Unmangled symbols for debuggers that resolve names from the ELF symbol
//! table.
//!
//! `b test_func` / `b counter_test` break once per iteration. `TRACEE_INDEX`
//! and `TRACEE_COUNT` are word-sized objects a debugger can read or poke with
//! a single `PTRACE_PEEKDATA` / `PTRACE_POKEDATA`. The counter keeps its own
//! state; these only mirror it.

use std::hint::black_box;
use std::sync::atomic::{AtomicU64, Ordering};

/// Loop index of the iteration in progress.
#[unsafe(no_mangle)]
pub static TRACEE_INDEX: AtomicU64 = AtomicU64::new(0);

/// Count of the most recent `Counter::test` call.
#[unsafe(no_mangle)]
pub static TRACEE_COUNT: AtomicU64 = AtomicU64::new(0);

/// Entered once per iteration, before `func is {index}` is printed.
#[unsafe(no_mangle)]
#[inline(never)]
pub extern "C" fn test_func(index: u32) {
    TRACEE_INDEX.store(u64::from(black_box(index)), Ordering::SeqCst);
}

/// Entered from every `Counter::test`, after the count is bumped.
#[unsafe(no_mangle)]
#[inline(never)]
pub extern "C" fn counter_test(index: u32, count: u32) {
    let _ = black_box(index);
    TRACEE_COUNT.store(u64::from(black_box(count)), Ordering::SeqCst);
}
