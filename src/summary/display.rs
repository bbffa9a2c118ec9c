//! Console rendering for report summaries

use super::ReportSummary;
use crate::compare::Status;
use crate::fmt::{CHECKMARK, CROSSMARK, WARNING};
use console::{style, StyledObject};

fn styled_status(status: Status) -> StyledObject<&'static str> {
    match status {
        Status::Pass => style(status.as_str()).green(),
        Status::Warn => style(status.as_str()).yellow(),
        Status::Fail => style(status.as_str()).red().bold(),
    }
}

/// Print a summary to stdout with colored statuses
pub fn print_summary(summary: &ReportSummary) {
    let icon = match summary.status {
        Status::Pass => CHECKMARK,
        Status::Warn => WARNING,
        Status::Fail => CROSSMARK,
    };

    println!("{}Overall status: {}", icon, styled_status(summary.status));

    // Skip the plain status line; the rest carries no color
    let lines = summary.lines();
    for line in lines.iter().skip(1) {
        println!("{}", line);
    }

    if summary.offenders.is_empty() {
        println!("  {}", style("none").dim());
    }
}
