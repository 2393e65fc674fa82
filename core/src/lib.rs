//! Driver logic for tracee.
//!
//! The driver prints a start banner, runs ten iterations of
//! `func is i` / `test is i` with a pause after each, optionally hands the
//! sink to an external [`Reporter`], and prints an end banner. The
//! [`Counter`](tracee_types::Counter) it reports through is owned by the
//! caller, so its drop-time line lands after the end banner.

mod driver;
pub mod reporter;
pub mod sleeper;

pub use driver::{Driver, DriverError, RunSummary, report_func};
pub use reporter::{FnReporter, MessageReporter, NoopReporter, Reporter};
pub use sleeper::{RecordingSleeper, Sleeper, ThreadSleeper};
