use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a piece of content was flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    BlockedContent,
    PotentiallyHarmful,
    ExcessiveCaps,
}

impl ViolationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCategory::BlockedContent => "blocked_content",
            ViolationCategory::PotentiallyHarmful => "potentially_harmful",
            ViolationCategory::ExcessiveCaps => "excessive_caps",
        }
    }
}

impl fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-way summary of a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Warned,
    Blocked,
}

/// Verdict for a single piece of chat text.
///
/// Field names serialize in camelCase so the JSON matches what the chat
/// input expects (`isAllowed`, `showWarning`, `message`, `violations`).
/// Build one through [`ModerationResult::clean`], [`ModerationResult::blocked`]
/// or [`ModerationResult::warned`]; these keep the invariants:
/// a blocked result never carries a warning, and `violations` is empty
/// exactly when the content is clean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationResult {
    pub is_allowed: bool,
    pub show_warning: bool,
    pub message: Option<String>,
    pub violations: Vec<ViolationCategory>,
}

impl ModerationResult {
    pub fn clean() -> Self {
        Self {
            is_allowed: true,
            show_warning: false,
            message: None,
            violations: Vec::new(),
        }
    }

    pub fn blocked(message: impl Into<String>) -> Self {
        Self {
            is_allowed: false,
            show_warning: false,
            message: Some(message.into()),
            violations: vec![ViolationCategory::BlockedContent],
        }
    }

    pub fn warned(category: ViolationCategory, message: impl Into<String>) -> Self {
        Self {
            is_allowed: true,
            show_warning: true,
            message: Some(message.into()),
            violations: vec![category],
        }
    }

    pub fn outcome(&self) -> Outcome {
        if !self.is_allowed {
            Outcome::Blocked
        } else if self.show_warning {
            Outcome::Warned
        } else {
            Outcome::Clean
        }
    }

    pub fn is_clean(&self) -> bool {
        self.outcome() == Outcome::Clean
    }
}

impl Default for ModerationResult {
    fn default() -> Self {
        Self::clean()
    }
}
