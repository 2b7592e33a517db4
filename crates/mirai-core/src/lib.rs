//! Core domain models for Re:MirAI chat moderation
//!
//! This crate contains:
//! - The moderation verdict (`ModerationResult`) and its violation categories
//! - The error type shared by the moderation and config crates

pub mod error;
pub mod result;

pub use error::{Error, Result};
pub use result::{ModerationResult, Outcome, ViolationCategory};
