use std::io::{self, Write};
use std::time::Duration;

use thiserror::Error;
use tracee_config::RunSettings;
use tracee_types::{
    Counter, END_BANNER, LOOP_ITERATIONS, Revision, START_BANNER, func_line, symbols,
};

use crate::reporter::{MessageReporter, NoopReporter, Reporter};
use crate::sleeper::{Sleeper, ThreadSleeper};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to write {line}: {source}")]
    Write {
        line: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("external reporter failed: {0}")]
    Reporter(#[source] io::Error),
}

impl DriverError {
    fn write(line: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::Write { line, source }
    }
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub revision: Revision,
    pub iterations: u32,
    pub final_count: u32,
    pub reporter_called: bool,
}

/// Print `func is {index}`, passing through the `test_func` symbol first.
pub fn report_func<W: Write + ?Sized>(out: &mut W, index: u32) -> io::Result<()> {
    symbols::test_func(index);
    writeln!(out, "{}", func_line(index))?;
    out.flush()
}

fn write_banner<W: Write + ?Sized>(out: &mut W, banner: &str) -> io::Result<()> {
    writeln!(out, "{banner}")?;
    out.flush()
}

/// Sequences one run of the demo.
pub struct Driver<R = NoopReporter, S = ThreadSleeper> {
    revision: Revision,
    delay: Duration,
    reporter: R,
    sleeper: S,
}

impl Driver {
    /// A driver with the revision's delay, a silent reporter, and real sleeps.
    #[must_use]
    pub fn new(revision: Revision) -> Self {
        Self {
            revision,
            delay: revision.delay(),
            reporter: NoopReporter,
            sleeper: ThreadSleeper,
        }
    }

    /// A driver built from resolved settings. The reporter prints the
    /// configured message, or nothing when none is set.
    #[must_use]
    pub fn from_settings(settings: &RunSettings) -> Driver<Box<dyn Reporter>, ThreadSleeper> {
        let reporter: Box<dyn Reporter> = match &settings.reporter_message {
            Some(message) => Box::new(MessageReporter::new(message.clone())),
            None => Box::new(NoopReporter),
        };
        Driver::new(settings.revision)
            .with_delay(settings.delay)
            .with_reporter(reporter)
    }
}

impl<R: Reporter, S: Sleeper> Driver<R, S> {
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_reporter<R2: Reporter>(self, reporter: R2) -> Driver<R2, S> {
        Driver {
            revision: self.revision,
            delay: self.delay,
            reporter,
            sleeper: self.sleeper,
        }
    }

    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> Driver<R, S2> {
        Driver {
            revision: self.revision,
            delay: self.delay,
            reporter: self.reporter,
            sleeper,
        }
    }

    #[must_use]
    pub fn revision(&self) -> Revision {
        self.revision
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run the loop, writing driver lines to `out` and reporting through
    /// `counter`. The counter is left alive; dropping it afterwards emits its
    /// end-of-life line (if any) after the end banner.
    pub fn run<W, C>(
        &mut self,
        out: &mut W,
        counter: &mut Counter<C>,
    ) -> Result<RunSummary, DriverError>
    where
        W: Write,
        C: Write,
    {
        let span = tracing::info_span!("run", revision = %self.revision);
        let _enter = span.enter();
        let delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX);
        tracing::info!(delay_ms, "Starting demo loop");

        write_banner(out, START_BANNER.as_str()).map_err(DriverError::write("start banner"))?;

        for index in 0..LOOP_ITERATIONS {
            report_func(out, index).map_err(DriverError::write("func line"))?;
            counter.test(index).map_err(DriverError::write("test line"))?;
            tracing::debug!(index, count = counter.count(), "Iteration done");
            self.sleeper.sleep(self.delay);
        }

        let reporter_called = self.revision.calls_reporter();
        if reporter_called {
            self.reporter.report(out).map_err(DriverError::Reporter)?;
            out.flush().map_err(DriverError::Reporter)?;
            tracing::debug!("External reporter returned");
        }

        write_banner(out, END_BANNER.as_str()).map_err(DriverError::write("end banner"))?;

        let summary = RunSummary {
            revision: self.revision,
            iterations: LOOP_ITERATIONS,
            final_count: counter.count(),
            reporter_called,
        };
        tracing::info!(
            iterations = summary.iterations,
            final_count = summary.final_count,
            "Demo loop finished"
        );
        Ok(summary)
    }
}
