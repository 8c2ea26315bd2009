pub mod comparison;
pub mod headers;
pub mod host;
pub mod lifecycle;
pub mod logging;
pub mod options;
pub mod runner;

pub use comparison::{compare, normalize, Comparable, NormalizeError, Value};
pub use host::{CallSite, Host, RecordingHost, Report, TestContext};
pub use lifecycle::{Action, Status, Test, TestResult, UsageError};
pub use logging::init_logging;
pub use options::Options;
pub use runner::{run, Case, Summary};
