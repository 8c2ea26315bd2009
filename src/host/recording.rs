use crate::host::Host;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Error(String),
    Fatal(String),
}

impl Report {
    pub fn message(&self) -> &str {
        match self {
            Report::Error(message) | Report::Fatal(message) => message,
        }
    }
}

/// A host that keeps every report instead of failing the surrounding test.
///
/// Useful when the code under test is itself built on [`Test`](crate::Test).
#[derive(Debug, Default)]
pub struct RecordingHost {
    reports: RefCell<Vec<Report>>,
    verbose: bool,
    group: String,
}

impl RecordingHost {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            reports: RefCell::new(Vec::new()),
            verbose: false,
            group: group.into(),
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .filter_map(|report| match report {
                Report::Error(message) => Some(message.clone()),
                Report::Fatal(_) => None,
            })
            .collect()
    }

    pub fn fatals(&self) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .filter_map(|report| match report {
                Report::Fatal(message) => Some(message.clone()),
                Report::Error(_) => None,
            })
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

impl Host for RecordingHost {
    fn report_error(&self, message: &str) {
        self.reports
            .borrow_mut()
            .push(Report::Error(message.to_string()));
    }

    fn report_fatal(&self, message: &str) {
        self.reports
            .borrow_mut()
            .push(Report::Fatal(message.to_string()));
    }

    fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn group_name(&self) -> String {
        self.group.clone()
    }
}
