//! Santa doctor: feasibility checks for an exchange
//!
//! Inspects the roster and banlist without running the search and reports
//! problems that make a draw impossible or weak. Returns a structured report
//! with categories: errors (no draw possible), warnings (draw possible but
//! predictable), info (worth knowing).

use crate::draw::Banlist;
use crate::roster::Roster;

/// Severity level for a diagnostic finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    /// Must fix: no draw can succeed
    Error,
    /// Should fix: the draw works but leaks information
    Warning,
    /// Informational
    Info,
}

/// A single diagnostic finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Severity of the finding
    pub severity: Severity,
    /// Short code for the finding (e.g., "S003")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Suggested fix (optional)
    pub suggestion: Option<String>,
}

/// Diagnostic report from `santa --check`
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    /// All findings, in order of severity (errors first)
    pub findings: Vec<Finding>,
}

impl DiagnosticReport {
    /// Returns true if the report has no findings at all
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns the number of errors
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(&Severity::Error)
    }

    /// Returns the number of warnings
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(&Severity::Warning)
    }

    /// Returns the number of info items
    #[must_use]
    pub fn info_count(&self) -> usize {
        self.count(&Severity::Info)
    }

    fn count(&self, severity: &Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| &f.severity == severity)
            .count()
    }
}

/// Run all diagnostic checks and return a report.
#[must_use]
pub fn diagnose(roster: &Roster, banlist: &Banlist) -> DiagnosticReport {
    let mut findings = Vec::new();

    check_roster_size(roster, &mut findings);
    check_reachability(&roster.participants, banlist, &mut findings);
    check_admins(roster, &mut findings);

    findings.sort_by_key(|f| match f.severity {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    });

    DiagnosticReport { findings }
}

/// S001 / S002: enough participants and administrators
fn check_roster_size(roster: &Roster, findings: &mut Vec<Finding>) {
    if roster.participants.len() < 2 {
        findings.push(Finding {
            severity: Severity::Error,
            code: "S001".to_string(),
            message: format!(
                "Only {} participant(s); a gift cycle needs at least 2",
                roster.participants.len()
            ),
            suggestion: Some("Add more names to the participant list".to_string()),
        });
    }

    if roster.admins.len() < 2 {
        findings.push(Finding {
            severity: Severity::Error,
            code: "S002".to_string(),
            message: format!(
                "Only {} admin(s); assignments are split between 2",
                roster.admins.len()
            ),
            suggestion: Some("Add a second name to the admin list".to_string()),
        });
    }
}

/// S003 / S004 / S005: everyone can give and receive
fn check_reachability(participants: &[String], banlist: &Banlist, findings: &mut Vec<Finding>) {
    if participants.len() < 2 {
        return;
    }

    for person in participants {
        let receivers: Vec<&str> = participants
            .iter()
            .filter(|other| banlist.can_give_to(person, other))
            .map(String::as_str)
            .collect();
        let givers = participants
            .iter()
            .filter(|other| banlist.can_give_to(other, person))
            .count();

        match receivers.as_slice() {
            [] => findings.push(Finding {
                severity: Severity::Error,
                code: "S003".to_string(),
                message: format!("'{person}' is banned from giving to everyone"),
                suggestion: Some(format!(
                    "Remove some banlist entries for '{person}' (excluded: {})",
                    banlist.excluded(person).collect::<Vec<_>>().join(", ")
                )),
            }),
            [only] => findings.push(Finding {
                severity: Severity::Warning,
                code: "S005".to_string(),
                message: format!("'{person}' can only give to '{only}'"),
                suggestion: Some(
                    "Anyone who knows the banlist can work out this pairing".to_string(),
                ),
            }),
            _ => {}
        }

        if givers == 0 {
            findings.push(Finding {
                severity: Severity::Error,
                code: "S004".to_string(),
                message: format!("Nobody is allowed to give to '{person}'"),
                suggestion: Some(format!("Remove '{person}' from some banlist entries")),
            });
        }
    }
}

/// S006 / S007: administrator placement
fn check_admins(roster: &Roster, findings: &mut Vec<Finding>) {
    for admin in roster.admins.iter().take(2) {
        if !roster.participants.contains(admin) {
            findings.push(Finding {
                severity: Severity::Info,
                code: "S006".to_string(),
                message: format!("Admin '{admin}' is not a participant"),
                suggestion: None,
            });
        }
    }

    let both_admins_participate = roster
        .admins
        .iter()
        .take(2)
        .all(|admin| roster.participants.contains(admin));
    if roster.participants.len() == 2 && roster.admins.len() >= 2 && both_admins_participate {
        findings.push(Finding {
            severity: Severity::Warning,
            code: "S007".to_string(),
            message: "The only two participants are both admins; every pairing involves both"
                .to_string(),
            suggestion: Some(
                "Add a third admin to hand out withheld pairings, or each giver sees their own"
                    .to_string(),
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(participants: &[&str], admins: &[&str]) -> Roster {
        Roster::new(
            participants.iter().map(ToString::to_string).collect(),
            admins.iter().map(ToString::to_string).collect(),
        )
        .unwrap()
    }

    fn codes(report: &DiagnosticReport) -> Vec<&str> {
        report.findings.iter().map(|f| f.code.as_str()).collect()
    }

    #[test]
    fn test_clean_report_with_no_issues() {
        let report = diagnose(&roster(&["Ann", "Bob", "Cat"], &["Ann", "Bob"]), &Banlist::new());
        assert!(report.is_clean());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 0);
        assert_eq!(report.info_count(), 0);
    }

    #[test]
    fn test_s001_too_few_participants() {
        let report = diagnose(&roster(&["Ann"], &["Ann", "Bob"]), &Banlist::new());
        assert!(codes(&report).contains(&"S001"));
        assert!(report.error_count() >= 1);
    }

    #[test]
    fn test_s002_too_few_admins() {
        let report = diagnose(&roster(&["Ann", "Bob", "Cat"], &["Ann"]), &Banlist::new());
        assert_eq!(codes(&report), vec!["S002"]);
    }

    #[test]
    fn test_s003_banned_from_everyone() {
        let banlist: Banlist = [("Ann", "Bob"), ("Ann", "Cat")].into_iter().collect();
        let report = diagnose(&roster(&["Ann", "Bob", "Cat"], &["Ann", "Bob"]), &banlist);

        let finding = &report.findings[0];
        assert_eq!(finding.code, "S003");
        assert_eq!(finding.severity, Severity::Error);
        assert!(finding.message.contains("'Ann'"));
        assert_eq!(
            finding.suggestion.as_deref(),
            Some("Remove some banlist entries for 'Ann' (excluded: Bob, Cat)")
        );
    }

    #[test]
    fn test_s004_nobody_gives_to() {
        let banlist: Banlist = [("Ann", "Cat"), ("Bob", "Cat")].into_iter().collect();
        let report = diagnose(&roster(&["Ann", "Bob", "Cat"], &["Ann", "Bob"]), &banlist);

        assert!(report
            .findings
            .iter()
            .any(|f| f.code == "S004" && f.message.contains("'Cat'")));
    }

    #[test]
    fn test_s005_single_receiver_is_warning() {
        let banlist: Banlist = [("Ann", "Bob")].into_iter().collect();
        let report = diagnose(&roster(&["Ann", "Bob", "Cat"], &["Ann", "Bob"]), &banlist);

        assert_eq!(codes(&report), vec!["S005"]);
        assert_eq!(report.warning_count(), 1);
        assert!(report.findings[0].message.contains("'Cat'"));
    }

    #[test]
    fn test_s006_admin_outside_exchange() {
        let report = diagnose(
            &roster(&["Ann", "Bob", "Cat", "Dan"], &["Ann", "Zed"]),
            &Banlist::new(),
        );
        assert_eq!(codes(&report), vec!["S006"]);
        assert_eq!(report.info_count(), 1);
    }

    #[test]
    fn test_third_admin_is_ignored() {
        let report = diagnose(
            &roster(&["Ann", "Bob", "Cat"], &["Ann", "Bob", "Zed"]),
            &Banlist::new(),
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_s007_two_admin_pair() {
        let report = diagnose(&roster(&["Ann", "Bob"], &["Ann", "Bob"]), &Banlist::new());
        // Two people also each have a single receiver
        assert!(codes(&report).contains(&"S007"));
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn test_s007_needs_both_admins_in_the_pair() {
        let report = diagnose(&roster(&["Ann", "Bob"], &["Ann", "Zed"]), &Banlist::new());
        assert!(!codes(&report).contains(&"S007"));
        assert!(codes(&report).contains(&"S006"));
    }

    #[test]
    fn test_errors_sorted_first() {
        let banlist: Banlist = [("Ann", "Bob"), ("Ann", "Cat"), ("Bob", "Ann")]
            .into_iter()
            .collect();
        let report = diagnose(&roster(&["Ann", "Bob", "Cat"], &["Ann", "Zed"]), &banlist);

        let severities: Vec<&Severity> = report.findings.iter().map(|f| &f.severity).collect();
        let first_non_error = severities
            .iter()
            .position(|s| **s != Severity::Error)
            .unwrap_or(severities.len());
        assert!(severities[first_non_error..]
            .iter()
            .all(|s| **s != Severity::Error));
        assert_eq!(report.findings[0].severity, Severity::Error);
    }
}
