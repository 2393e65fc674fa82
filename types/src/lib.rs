//! Core domain types for tracee.
//!
//! This crate holds the pieces every layer agrees on: which historical
//! revision a run reproduces, the counter entity whose lifetime the tracer
//! observes, and the fixed lines the program prints.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod counter;
mod revision;
pub mod symbols;

pub use counter::{Counter, DropReport};
pub use revision::{ParseRevisionError, Revision};

// ============================================================================
// Output lines
// ============================================================================

/// A `&'static str` guaranteed non-empty at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonEmptyStaticStr(&'static str);

impl NonEmptyStaticStr {
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        assert!(!value.is_empty(), "NonEmptyStaticStr must not be empty");
        Self(value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for NonEmptyStaticStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Printed once before the loop.
pub const START_BANNER: NonEmptyStaticStr = NonEmptyStaticStr::new("child process start");
/// Printed once after the loop (and after the reporter, when it runs).
pub const END_BANNER: NonEmptyStaticStr = NonEmptyStaticStr::new("child process end");

/// Iterations per run. Every revision loops over `0..LOOP_ITERATIONS`.
pub const LOOP_ITERATIONS: u32 = 10;

/// Line printed by the free reporting function.
#[must_use]
pub fn func_line(index: u32) -> String {
    format!("func is {index}")
}

/// Line printed by [`Counter::test`].
#[must_use]
pub fn test_line(index: u32) -> String {
    format!("test is {index}")
}

/// Line printed when a [`Counter`] with [`DropReport::HexCount`] is dropped.
#[must_use]
pub fn destructor_line(count: u32) -> String {
    format!("destructor: {count:#x}")
}
