use crate::comparison::Value;
use crate::host::Host;
use crate::lifecycle::{Status, Test};
use serde::Serialize;

type PreHook = Box<dyn FnOnce(&Case) -> anyhow::Result<()>>;

enum Target {
    Ready(Value),
    Deferred(Box<dyn FnOnce() -> Value>),
}

/// One row of a table-driven test.
pub struct Case {
    pub message: String,
    target: Target,
    expected: Value,
    pre_hook: Option<PreHook>,
}

impl Case {
    pub fn new(
        message: impl Into<String>,
        target: impl Into<Value>,
        expected: impl Into<Value>,
    ) -> Self {
        Self {
            message: message.into(),
            target: Target::Ready(target.into()),
            expected: expected.into(),
            pre_hook: None,
        }
    }

    /// The target is produced after the pre-hook has run.
    pub fn deferred<F, V>(message: impl Into<String>, target: F, expected: impl Into<Value>) -> Self
    where
        F: FnOnce() -> V + 'static,
        V: Into<Value>,
    {
        Self {
            message: message.into(),
            target: Target::Deferred(Box::new(move || target().into())),
            expected: expected.into(),
            pre_hook: None,
        }
    }

    pub fn with_pre_hook<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&Case) -> anyhow::Result<()> + 'static,
    {
        self.pre_hook = Some(Box::new(hook));
        self
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }

    pub fn has_pre_hook(&self) -> bool {
        self.pre_hook.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub message: String,
    pub status: Status,
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub cases: Vec<CaseReport>,
}

impl Summary {
    pub fn from_cases(cases: Vec<CaseReport>) -> Self {
        let passed = cases.iter().filter(|c| c.status == Status::Passed).count();
        Self {
            total: cases.len(),
            passed,
            failed: cases.len() - passed,
            cases,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn to_json(&self) -> String {
        crate::runner::reporter::format_summary_json(self)
    }
}

/// Runs every case in order: pre-hook first, then target, comparison and
/// validation through `host`.
pub fn run(host: &dyn Host, cases: Vec<Case>) -> Summary {
    let mut reports = Vec::with_capacity(cases.len());

    for mut case in cases {
        if let Some(hook) = case.pre_hook.take() {
            if let Err(e) = hook(&case) {
                let output = format!("Error :: {} - [Pre-Hook] - {:#}", case.message, e);
                tracing::warn!(case = %case.message, "pre-hook failed: {:#}", e);
                host.report_error(&output);
                reports.push(CaseReport {
                    message: case.message,
                    status: Status::Failed,
                    output,
                });
                continue;
            }
        }

        let Case {
            message,
            target,
            expected,
            ..
        } = case;
        let target = match target {
            Target::Ready(value) => value,
            Target::Deferred(produce) => produce(),
        };

        let mut test = Test::new(host, message.as_str());
        let result = test.target(target).equals(expected).validate();
        reports.push(CaseReport {
            message,
            status: result.status,
            output: result.output.clone(),
        });
    }

    let summary = Summary::from_cases(reports);
    tracing::debug!(
        total = summary.total,
        failed = summary.failed,
        "batch finished"
    );
    if host.is_verbose() {
        println!("{}", crate::runner::reporter::format_summary(&summary));
    }
    summary
}
