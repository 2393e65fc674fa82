use std::io::{self, Write};

use crate::{Revision, destructor_line, symbols, test_line};

/// What a [`Counter`] writes when it goes out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropReport {
    /// Nothing.
    #[default]
    Silent,
    /// `destructor: 0x{count}` with the count in lowercase hex.
    HexCount,
}

/// The counter entity the driver reports through.
///
/// Owns its own output handle so the end-of-life line can be written from
/// `Drop`, after the driver has finished with the shared sink. Drop runs on
/// early return and unwinding too, so a tracer always sees the final count.
#[derive(Debug)]
pub struct Counter<W: Write> {
    count: u32,
    tracking: bool,
    drop_report: DropReport,
    out: W,
}

impl<W: Write> Counter<W> {
    /// A tracking counter that stays silent on drop.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            count: 0,
            tracking: true,
            drop_report: DropReport::Silent,
            out,
        }
    }

    /// A counter configured the way `revision` built it.
    #[must_use]
    pub fn for_revision(out: W, revision: Revision) -> Self {
        Self {
            count: 0,
            tracking: revision.tracks_count(),
            drop_report: revision.drop_report(),
            out,
        }
    }

    #[must_use]
    pub fn with_drop_report(mut self, drop_report: DropReport) -> Self {
        self.drop_report = drop_report;
        self
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn drop_report(&self) -> DropReport {
        self.drop_report
    }

    /// Print `test is {index}` and bump the count.
    pub fn test(&mut self, index: u32) -> io::Result<()> {
        if self.tracking {
            self.count = self.count.saturating_add(1);
        }
        symbols::counter_test(index, self.count);
        writeln!(self.out, "{}", test_line(index))?;
        self.out.flush()
    }
}

impl<W: Write> Drop for Counter<W> {
    fn drop(&mut self) {
        if self.drop_report != DropReport::HexCount {
            return;
        }
        let line = destructor_line(self.count);
        let result = writeln!(self.out, "{line}").and_then(|()| self.out.flush());
        if let Err(err) = result {
            tracing::error!(count = self.count, "Failed to write destructor line: {err}");
        }
    }
}
