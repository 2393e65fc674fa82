//! The external reporter called once after the loop.
//!
//! The demo's reporter is a routine the driver only knows by signature: no
//! arguments, no return value. Here that contract is a trait chosen when the
//! driver is composed, handed the output sink so whatever it prints lands in
//! order with the driver's own lines.

use std::io::{self, Write};

pub trait Reporter {
    fn report(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

/// Prints nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Prints one fixed line.
#[derive(Debug, Clone)]
pub struct MessageReporter {
    message: String,
}

impl MessageReporter {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Reporter for MessageReporter {
    fn report(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.message)
    }
}

/// A plain function pointer, the closest thing to a symbol resolved at link time.
#[derive(Debug, Clone, Copy)]
pub struct FnReporter(pub fn(&mut dyn Write) -> io::Result<()>);

impl Reporter for FnReporter {
    fn report(&mut self, out: &mut dyn Write) -> io::Result<()> {
        (self.0)(out)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, out: &mut dyn Write) -> io::Result<()> {
        (**self).report(out)
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, out: &mut dyn Write) -> io::Result<()> {
        (**self).report(out)
    }
}
