use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::DropReport;

/// Which of the three historical builds of the demo a run reproduces.
///
/// The revisions differ only in delay, whether the external reporter is
/// called, and what the counter does at end of life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    /// One-second delay, no reporter, untracked counter.
    Initial,
    /// 100ms delay, reporter called, hex count printed when the counter drops.
    Linked,
    /// Same observable behavior as `Linked`. Kept as its own name so a
    /// config can pin the latest build.
    #[default]
    Final,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown revision `{0}` (expected initial, linked, or final)")]
pub struct ParseRevisionError(pub String);

impl Revision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Linked => "linked",
            Self::Final => "final",
        }
    }

    /// Pause after each loop iteration.
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            Self::Initial => Duration::from_secs(1),
            Self::Linked | Self::Final => Duration::from_millis(100),
        }
    }

    #[must_use]
    pub const fn calls_reporter(self) -> bool {
        !matches!(self, Self::Initial)
    }

    #[must_use]
    pub const fn tracks_count(self) -> bool {
        !matches!(self, Self::Initial)
    }

    #[must_use]
    pub const fn drop_report(self) -> DropReport {
        match self {
            Self::Initial => DropReport::Silent,
            Self::Linked | Self::Final => DropReport::HexCount,
        }
    }

    #[must_use]
    pub fn all() -> &'static [Revision] {
        &[Self::Initial, Self::Linked, Self::Final]
    }
}

impl FromStr for Revision {
    type Err = ParseRevisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "initial" => Ok(Self::Initial),
            "linked" => Ok(Self::Linked),
            "final" => Ok(Self::Final),
            _ => Err(ParseRevisionError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
