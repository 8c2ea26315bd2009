//! The boundary between a [`Test`](crate::Test) and whatever runs it.

pub mod context;
pub mod recording;

pub use context::TestContext;
pub use recording::{RecordingHost, Report};

use std::fmt;
use std::panic::Location;
use std::path::Path;

pub trait Host {
    /// Records a failure and lets the current test keep running.
    fn report_error(&self, message: &str);

    /// Records a failure and stops the current test.
    fn report_fatal(&self, message: &str);

    fn is_verbose(&self) -> bool;

    /// Name of the group of tests currently executing.
    fn group_name(&self) -> String;

    /// Whether new tests start in assert mode.
    fn fails_fast(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub fn from_location(location: &'static Location<'static>) -> Self {
        let file = Path::new(location.file())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(location.file());
        Self {
            file,
            line: location.line(),
        }
    }

    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
