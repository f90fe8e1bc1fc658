use std::fmt;

use log::{error, info, warn};

pub fn update(file: &str, stage: Stage) {
    match stage {
        Stage::Fail(err) => error!("{}: {}: {:#}", file, stage, err),
        Stage::Skipped | Stage::Rejected => warn!("{}: {}", file, stage),
        other => info!("{}: {}", file, other),
    }
}

pub enum Stage<'a> {
    Matched(&'static str),
    Renamed(&'a str),
    Hashed,
    Submitted,
    Rejected,
    Persisted,
    Skipped,
    Fail(&'a anyhow::Error),
}

impl<'a> fmt::Display for Stage<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched(kind) => write!(f, "Matched by {}", kind),
            Self::Renamed(to) => write!(f, "Renamed to {}", to),
            Self::Hashed => f.write_str("Hashed"),
            Self::Submitted => f.write_str("Submitted"),
            Self::Rejected => f.write_str("Rejected by catalog"),
            Self::Persisted => f.write_str("Persisted"),
            Self::Skipped => f.write_str("Skipped"),
            Self::Fail(_) => f.write_str("Fail"),
        }
    }
}
