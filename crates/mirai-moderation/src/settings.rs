use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_CAPS_LENGTH: usize = 10;
pub const DEFAULT_CAPS_RATIO: f64 = 0.7;
pub const DEFAULT_PLACEHOLDER: &str = "***";

/// Tunables for building a [`crate::Moderator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationSettings {
    /// Caps heuristic only runs when the text has more characters than this
    pub min_caps_length: usize,

    /// Uppercase share above which text counts as shouting
    pub caps_ratio: f64,

    /// Literal token written over blocked spans
    pub placeholder: String,

    /// Extra blocked patterns, checked after the built-in ones
    pub extra_blocked: Vec<String>,

    /// Extra warning patterns, checked after the built-in ones
    pub extra_warning: Vec<String>,
}

impl Default for ModerationSettings {
    fn default() -> Self {
        Self {
            min_caps_length: DEFAULT_MIN_CAPS_LENGTH,
            caps_ratio: DEFAULT_CAPS_RATIO,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            extra_blocked: Vec::new(),
            extra_warning: Vec::new(),
        }
    }
}
