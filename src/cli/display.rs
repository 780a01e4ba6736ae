//! Terminal display for draws and diagnostics
//!
//! The selected administrator's list goes to stdout; warnings, headers for
//! diagnostics and other status lines go to stderr.

use colored::Colorize;

use crate::doctor::{DiagnosticReport, Severity};
use crate::draw::Assignment;
use crate::error::DrawError;

const RULE_WIDTH: usize = 40;

/// Header line naming the administrator
#[must_use]
pub fn assignments_header(admin: &str) -> String {
    format!("ASSIGNMENTS FOR {} TO DISTRIBUTE:", admin.to_uppercase())
}

/// One line per pairing, `giver → receiver`
#[must_use]
pub fn assignment_lines(assignments: &[Assignment]) -> Vec<String> {
    assignments.iter().map(ToString::to_string).collect()
}

/// Print the list `admin` should hand out
pub fn print_assignments(admin: &str, assignments: &[Assignment]) {
    let rule = "=".repeat(RULE_WIDTH);

    println!("\n{}", rule.dimmed());
    println!("{}", assignments_header(admin).bold().green());
    println!("{}", rule.dimmed());
    for line in assignment_lines(assignments) {
        println!("{line}");
    }
    println!("\n{}", rule.dimmed());
    println!("Distribute these assignments to the people listed.");
    println!("{}", "You won't see your own Secret Santa assignment!".bold());
}

/// Where the pairings neither distributing administrator may see end up
#[must_use]
pub fn withheld_notice(count: usize, reserve: Option<&str>) -> Option<String> {
    if count == 0 {
        return None;
    }
    let route = match reserve {
        Some(name) => format!("{name} hands those out: run santa again and select {name}."),
        None => "Each giver's own pairing is shown to them below their list.".to_string(),
    };
    Some(format!(
        "{count} pairing(s) involve both admins and are not in either list. {route}"
    ))
}

/// Warn about pairings neither administrator may hand out
pub fn print_withheld(count: usize, reserve: Option<&str>) {
    if let Some(notice) = withheld_notice(count, reserve) {
        eprintln!("  {} {notice}", "⚠".yellow().bold());
    }
}

/// Print withheld pairings the selected administrator gives themselves
pub fn print_own_assignments(assignments: &[&Assignment]) {
    if assignments.is_empty() {
        return;
    }
    println!("\n{}", "YOUR OWN ASSIGNMENT:".bold().yellow());
    for edge in assignments {
        println!("{edge}");
    }
}

/// Print a notice that the default seed replaced unusable input
pub fn print_seed_defaulted(input: &str, seed: i64) {
    eprintln!(
        "{} Invalid seed '{input}'. Using default seed {seed}",
        "⚠".yellow().bold()
    );
}

/// Print the soft failure when no cycle was found
pub fn print_no_cycle(attempts: u32) {
    eprintln!(
        "{} Could not find a valid assignment after {attempts} attempts.",
        "✗".red().bold()
    );
    eprintln!("  Try adjusting the banlist, or run with --check to diagnose it.");
}

/// Print a draw error that ends the run without a list
pub fn print_soft_failure(err: &DrawError) {
    match err {
        DrawError::NoCycleFound { attempts } => print_no_cycle(*attempts),
        other => eprintln!("{} {other}", "✗".red().bold()),
    }
}

/// Print a diagnostic report to stderr
pub fn render_diagnostic_report(report: &DiagnosticReport) {
    if report.is_clean() {
        eprintln!("{} No problems found.", "✓".green().bold());
        return;
    }

    for finding in &report.findings {
        let tag = match finding.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue().bold(),
        };
        eprintln!("{tag}[{}]: {}", finding.code, finding.message);
        if let Some(suggestion) = &finding.suggestion {
            eprintln!("  {} {suggestion}", "→".dimmed());
        }
    }

    eprintln!(
        "\n{} error(s), {} warning(s), {} info",
        report.error_count(),
        report.warning_count(),
        report.info_count()
    );
}
