pub mod batch;
pub mod reporter;

pub use batch::{run, Case, CaseReport, Summary};
