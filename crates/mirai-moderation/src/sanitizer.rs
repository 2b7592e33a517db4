//! Redaction of blocked spans

use regex::NoExpand;
use serde::{Deserialize, Serialize};

use crate::Moderator;

/// Upper bound on full passes over the blocked table
pub const MAX_SANITIZE_ROUNDS: usize = 8;

/// How often a blocked pattern was replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeReport {
    pub pattern: String,
    pub count: usize,
}

impl Moderator {
    /// Replace every blocked match with the placeholder.
    pub fn sanitize(&self, content: &str) -> String {
        self.sanitize_with_report(content).0
    }

    /// Sanitize and report per-pattern replacement counts.
    ///
    /// Patterns run in declared order, each on the previous pass's output.
    /// A replacement can complete a new match together with its neighbours,
    /// so the whole table is re-run until nothing blocked remains. Text that
    /// is still blocked after [`MAX_SANITIZE_ROUNDS`] collapses to a single
    /// placeholder. Warning patterns are left alone.
    pub fn sanitize_with_report(&self, content: &str) -> (String, Vec<SanitizeReport>) {
        let (result, reports, settled) = self.sanitize_rounds(content);

        if settled {
            return (result, reports);
        }

        tracing::warn!(
            rounds = MAX_SANITIZE_ROUNDS,
            "sanitize did not settle, replacing whole message"
        );
        (self.placeholder.clone(), reports)
    }

    /// Whether `content` sanitizes to clean text within the round limit
    pub(crate) fn sanitize_settles(&self, content: &str) -> bool {
        self.sanitize_rounds(content).2
    }

    fn sanitize_rounds(&self, content: &str) -> (String, Vec<SanitizeReport>, bool) {
        let mut result = content.to_string();
        let mut reports: Vec<SanitizeReport> = Vec::new();

        for _ in 0..MAX_SANITIZE_ROUNDS {
            if self.store.first_blocked(&result).is_none() {
                return (result, reports, true);
            }

            for pattern in self.store.blocked() {
                let count = pattern.regex().find_iter(&result).count();

                if count > 0 {
                    result = pattern
                        .regex()
                        .replace_all(&result, NoExpand(&self.placeholder))
                        .into_owned();

                    match reports.iter_mut().find(|r| r.pattern == pattern.as_str()) {
                        Some(report) => report.count += count,
                        None => reports.push(SanitizeReport {
                            pattern: pattern.as_str().to_string(),
                            count,
                        }),
                    }
                }
            }
        }

        let settled = self.store.first_blocked(&result).is_none();
        (result, reports, settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModerationSettings;

    #[test]
    fn test_threat_redaction() {
        let moderator = Moderator::new();
        let (sanitized, report) = moderator.sanitize_with_report("I will kill you, then kill them");

        assert_eq!(sanitized, "I will ***, then ***");
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].count, 2);
    }

    #[test]
    fn test_warnings_untouched() {
        let moderator = Moderator::new();
        let content = "you are so stupid and I hate this";
        assert_eq!(moderator.sanitize(content), content);
    }

    #[test]
    fn test_no_matches() {
        let moderator = Moderator::new();
        let (sanitized, report) = moderator.sanitize_with_report("Just a friendly chat");
        assert_eq!(sanitized, "Just a friendly chat");
        assert!(report.is_empty());
    }

    #[test]
    fn test_multiple_patterns_in_order() {
        let moderator = Moderator::new();
        let (sanitized, report) =
            moderator.sanitize_with_report("send nudes or I will stab you");

        assert_eq!(sanitized, "send *** or I will ***");
        assert_eq!(report.len(), 2);
        // Threat pattern is declared before the sexual-content one
        assert!(report[0].pattern.contains("murder"));
        assert!(report[1].pattern.contains("porn"));
    }

    #[test]
    fn test_placeholder_is_literal() {
        let moderator = Moderator::with_settings(&ModerationSettings {
            placeholder: "$1[removed]".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(moderator.sanitize("kill you"), "$1[removed]");
    }

    #[test]
    fn test_extra_blocked_pattern_sanitized() {
        let moderator = Moderator::with_settings(&ModerationSettings {
            extra_blocked: vec![r"(?i)\bspoiler\b".to_string()],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(moderator.sanitize("SPOILER: it ends"), "***: it ends");
    }

    #[test]
    fn test_placeholder_completing_earlier_pattern_is_rerun() {
        let moderator = Moderator::with_settings(&ModerationSettings {
            placeholder: "you".to_string(),
            ..Default::default()
        })
        .unwrap();

        // "porn" -> "you" turns the text into "kill you", caught on the next round
        let (sanitized, report) = moderator.sanitize_with_report("kill porn");
        assert_eq!(sanitized, "you");
        assert_eq!(report.len(), 2);
        assert!(report.iter().all(|r| r.count == 1));
    }

    #[test]
    fn test_repeated_rounds_merge_counts() {
        let moderator = Moderator::with_settings(&ModerationSettings {
            extra_blocked: vec![r"\*{4}".to_string()],
            ..Default::default()
        })
        .unwrap();

        let (sanitized, report) = moderator.sanitize_with_report("死ね死ね");
        assert_eq!(sanitized, "***");

        let stars = report.iter().find(|r| r.pattern == r"\*{4}").unwrap();
        assert_eq!(stars.count, 3);
    }

    #[test]
    fn test_unsettled_text_collapses_to_placeholder() {
        let moderator = Moderator::with_settings(&ModerationSettings {
            extra_blocked: vec![r"\*{4}".to_string()],
            ..Default::default()
        })
        .unwrap();

        // Each round only shrinks the run of stars by a quarter
        let long_run = "*".repeat(40);
        assert!(!moderator.sanitize_settles(&long_run));
        assert_eq!(moderator.sanitize(&long_run), "***");

        assert!(moderator.sanitize_settles(&"*".repeat(20)));
        assert_eq!(moderator.sanitize(&"*".repeat(20)), "***");
    }
}
