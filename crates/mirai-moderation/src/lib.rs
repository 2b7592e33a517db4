//! Chat moderation for Re:MirAI
//!
//! Classifies user chat text as blocked, warned or clean and rewrites
//! blocked spans. The free functions ([`evaluate`], [`sanitize`],
//! [`is_allowed`]) use a process-wide moderator built from the default
//! settings; build a [`Moderator`] yourself to apply custom thresholds or
//! extra patterns.

pub mod evaluator;
pub mod patterns;
pub mod sanitizer;
pub mod settings;

use lazy_static::lazy_static;
use mirai_core::{Error, ModerationResult, Result};

pub use evaluator::{BLOCKED_MESSAGE, CAPS_MESSAGE, WARNING_MESSAGE};
pub use patterns::{Pattern, PatternStore};
pub use sanitizer::SanitizeReport;
pub use settings::ModerationSettings;

// Short messages every configured placeholder must sanitize cleanly
const VALIDATION_SAMPLES: &[&str] = &[
    "I will kill you",
    "kill porn",
    "send nudes or I will stab you",
    "kill kill you you",
    "死ね死ね",
    "殺す死ね消えろ",
    "nsfw nsfw nsfw",
];

lazy_static! {
    static ref DEFAULT_MODERATOR: Moderator = Moderator::new();
}

/// Pattern tables plus the thresholds used to apply them
#[derive(Debug, Clone)]
pub struct Moderator {
    store: PatternStore,
    min_caps_length: usize,
    caps_ratio: f64,
    placeholder: String,
}

impl Moderator {
    /// Built-in patterns with default thresholds
    pub fn new() -> Self {
        let settings = ModerationSettings::default();
        Self {
            store: PatternStore::builtin(),
            min_caps_length: settings.min_caps_length,
            caps_ratio: settings.caps_ratio,
            placeholder: settings.placeholder,
        }
    }

    pub fn with_settings(settings: &ModerationSettings) -> Result<Self> {
        if !(settings.caps_ratio > 0.0 && settings.caps_ratio <= 1.0) {
            return Err(Error::InvalidThreshold(format!(
                "caps_ratio must be in (0, 1], got {}",
                settings.caps_ratio
            )));
        }
        if settings.placeholder.is_empty() {
            return Err(Error::InvalidThreshold(
                "placeholder must not be empty".to_string(),
            ));
        }

        let store = PatternStore::with_extra(&settings.extra_blocked, &settings.extra_warning)?;

        if store.first_blocked(&settings.placeholder).is_some() {
            return Err(Error::UnsafePlaceholder(settings.placeholder.clone()));
        }

        let moderator = Self {
            store,
            min_caps_length: settings.min_caps_length,
            caps_ratio: settings.caps_ratio,
            placeholder: settings.placeholder.clone(),
        };

        // Placeholders must not keep re-forming blocked text on short messages
        let unsettled = moderator
            .validation_samples()
            .into_iter()
            .any(|sample| !moderator.sanitize_settles(&sample));
        if unsettled {
            return Err(Error::UnsafePlaceholder(settings.placeholder.clone()));
        }

        tracing::debug!(
            blocked = moderator.store.blocked().len(),
            warning = moderator.store.warning().len(),
            min_caps_length = settings.min_caps_length,
            caps_ratio = settings.caps_ratio,
            "built moderator"
        );

        Ok(moderator)
    }

    fn validation_samples(&self) -> Vec<String> {
        let p = &self.placeholder;
        let mut samples = vec![
            format!("{p}{p}"),
            format!("{p} {p}"),
            format!("{p}{p}{p}{p}"),
        ];
        samples.extend(VALIDATION_SAMPLES.iter().map(|s| s.to_string()));
        samples
    }

    pub fn patterns(&self) -> &PatternStore {
        &self.store
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_allowed(&self, content: &str) -> bool {
        self.evaluate(content).is_allowed
    }
}

impl Default for Moderator {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide moderator with the built-in tables
pub fn default_moderator() -> &'static Moderator {
    &DEFAULT_MODERATOR
}

pub fn evaluate(content: &str) -> ModerationResult {
    DEFAULT_MODERATOR.evaluate(content)
}

pub fn sanitize(content: &str) -> String {
    DEFAULT_MODERATOR.sanitize(content)
}

pub fn is_allowed(content: &str) -> bool {
    DEFAULT_MODERATOR.is_allowed(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_ratio() {
        let settings = ModerationSettings {
            caps_ratio: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            Moderator::with_settings(&settings),
            Err(Error::InvalidThreshold(_))
        ));

        let settings = ModerationSettings {
            caps_ratio: f64::NAN,
            ..Default::default()
        };
        assert!(Moderator::with_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_empty_placeholder() {
        let settings = ModerationSettings {
            placeholder: String::new(),
            ..Default::default()
        };
        assert!(Moderator::with_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_blocked_placeholder() {
        let settings = ModerationSettings {
            placeholder: "nsfw".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            Moderator::with_settings(&settings),
            Err(Error::UnsafePlaceholder(_))
        ));
    }

    #[test]
    fn test_accepts_placeholder_that_settles() {
        let settings = ModerationSettings {
            placeholder: "you".to_string(),
            extra_blocked: vec![r"\*{4}".to_string()],
            ..Default::default()
        };
        assert!(Moderator::with_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_placeholder_that_never_settles() {
        // "bbaa" is clean alone, but two side by side form "ab", and every
        // replacement of "ab" forms another one with the text after it
        let settings = ModerationSettings {
            placeholder: "bbaa".to_string(),
            extra_blocked: vec!["ab".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            Moderator::with_settings(&settings),
            Err(Error::UnsafePlaceholder(_))
        ));
    }

    #[test]
    fn test_default_settings_match_new() {
        let built = Moderator::with_settings(&ModerationSettings::default()).unwrap();
        let plain = Moderator::new();
        assert_eq!(built.placeholder(), plain.placeholder());
        assert_eq!(
            built.patterns().describe(),
            plain.patterns().describe()
        );
    }

    #[test]
    fn test_is_allowed_projection() {
        assert!(!is_allowed("I will kill you"));
        assert!(is_allowed("you are so stupid"));
        assert!(is_allowed("Hello, how are you?"));
    }
}
