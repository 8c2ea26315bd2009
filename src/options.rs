#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Print passing tests and group headers.
    pub verbose: bool,
    /// Mark every test as assert mode, so failures abort the running test.
    pub fail_fast: bool,
}

pub const VERBOSE_ENV: &str = "SIMPLY_VERBOSE";
pub const FAIL_FAST_ENV: &str = "SIMPLY_FAIL_FAST";

impl Options {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            verbose: lookup(VERBOSE_ENV).is_some_and(|v| parse_flag(&v)),
            fail_fast: lookup(FAIL_FAST_ENV).is_some_and(|v| parse_flag(&v)),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
