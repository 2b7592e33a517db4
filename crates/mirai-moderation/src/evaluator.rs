//! Blocked / warned / clean classification

use mirai_core::{ModerationResult, ViolationCategory};
use serde_json::Value;

use crate::Moderator;

pub const BLOCKED_MESSAGE: &str =
    "This message violates our community guidelines and cannot be sent.";
pub const WARNING_MESSAGE: &str =
    "This message may come across as hurtful. Consider rephrasing it before sending.";
pub const CAPS_MESSAGE: &str =
    "Lots of capital letters can read as shouting. Consider toning it down.";

impl Moderator {
    /// Classify `content`. First match wins: blocked patterns, then warning
    /// patterns, then the capitals heuristic. Never fails.
    pub fn evaluate(&self, content: &str) -> ModerationResult {
        if content.is_empty() {
            return ModerationResult::clean();
        }

        if let Some(pattern) = self.store.first_blocked(content) {
            tracing::debug!(pattern = pattern.as_str(), "content blocked");
            return ModerationResult::blocked(BLOCKED_MESSAGE);
        }

        if let Some(pattern) = self.store.first_warning(content) {
            tracing::debug!(pattern = pattern.as_str(), "content flagged");
            return ModerationResult::warned(ViolationCategory::PotentiallyHarmful, WARNING_MESSAGE);
        }

        if self.is_shouting(content) {
            tracing::debug!("content flagged for capitals");
            return ModerationResult::warned(ViolationCategory::ExcessiveCaps, CAPS_MESSAGE);
        }

        ModerationResult::clean()
    }

    /// Missing input resolves clean
    pub fn evaluate_opt(&self, content: Option<&str>) -> ModerationResult {
        match content {
            Some(text) => self.evaluate(text),
            None => ModerationResult::clean(),
        }
    }

    /// Only JSON strings are inspected; every other value resolves clean.
    /// Callers that need strict typing must validate before calling.
    pub fn evaluate_value(&self, value: &Value) -> ModerationResult {
        match value {
            Value::String(text) => self.evaluate(text),
            _ => ModerationResult::clean(),
        }
    }

    fn is_shouting(&self, content: &str) -> bool {
        let length = content.chars().count();
        if length <= self.min_caps_length {
            return false;
        }

        caps_ratio(content, length) > self.caps_ratio
    }
}

/// Uppercase letters over total characters
fn caps_ratio(content: &str, length: usize) -> f64 {
    let upper = content.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / length as f64
}
