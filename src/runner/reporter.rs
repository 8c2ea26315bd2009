use crate::host::CallSite;
use crate::runner::batch::Summary;
use owo_colors::OwoColorize;

pub fn print_group_header(group: &str) {
    println!("{} {}", "===".dimmed(), group.bold());
}

pub fn print_pass(site: &CallSite, message: &str) {
    println!("    {} {}", format!("{}:", site).dimmed(), message.green());
}

pub fn format_summary(summary: &Summary) -> String {
    let cases_text = if summary.total == 1 { "case" } else { "cases" };
    if summary.failed == 0 {
        format!(
            "{} Passed {}/{} {}",
            "✓".green(),
            summary.passed,
            summary.total,
            cases_text
        )
    } else {
        format!(
            "{} Failed {}/{} {}",
            "✗".red(),
            summary.failed,
            summary.total,
            cases_text
        )
    }
}

pub fn format_summary_json(summary: &Summary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
        let escaped = serde_json::to_string(&e.to_string())
            .unwrap_or_else(|_| "\"serialization error\"".to_string());
        format!("{{\"error\": {}}}", escaped)
    })
}
