use crate::host::Host;
use crate::options::Options;
use owo_colors::OwoColorize;
use std::cell::RefCell;

/// Host for Rust's built-in test harness.
///
/// Errors are printed as they happen and collected; when the context is
/// dropped at the end of the test function it panics with all of them, so a
/// failing assertion does not stop the assertions after it. Fatal reports
/// panic right away.
#[derive(Debug)]
pub struct TestContext {
    options: Options,
    group: String,
    errors: RefCell<Vec<String>>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_options(Options::from_env())
    }

    pub fn with_options(options: Options) -> Self {
        // libtest runs each test on a thread named after it
        let group = std::thread::current()
            .name()
            .unwrap_or("main")
            .to_string();
        Self {
            options,
            group,
            errors: RefCell::new(Vec::new()),
        }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn failed(&self) -> bool {
        !self.errors.borrow().is_empty()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TestContext {
    fn report_error(&self, message: &str) {
        eprintln!("{} {}", "FAIL".red(), message);
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_fatal(&self, message: &str) {
        let mut errors = self.errors.borrow_mut();
        errors.push(message.to_string());
        let summary = errors.join("\n");
        drop(errors);
        panic!("{}", summary);
    }

    fn is_verbose(&self) -> bool {
        self.options.verbose
    }

    fn group_name(&self) -> String {
        self.group.clone()
    }

    fn fails_fast(&self) -> bool {
        self.options.fail_fast
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        let errors = self.errors.get_mut();
        if !errors.is_empty() {
            panic!("{}", errors.join("\n"));
        }
    }
}
