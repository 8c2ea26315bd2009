pub mod action;
pub mod errors;
pub mod status;

pub use action::Action;
pub use errors::UsageError;
pub use status::{Status, TestResult};
pub use test::Test;
