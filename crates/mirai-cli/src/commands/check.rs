use anyhow::{Context, Result};
use mirai_core::{ModerationResult, Outcome};
use mirai_moderation::Moderator;

/// Returns whether the content is allowed
pub async fn handle(
    moderator: &Moderator,
    text: Option<String>,
    json: bool,
    value: bool,
) -> Result<bool> {
    let input = super::read_input(text).await?;

    let result = if value {
        let parsed: serde_json::Value =
            serde_json::from_str(&input).context("input is not valid JSON")?;
        moderator.evaluate_value(&parsed)
    } else {
        moderator.evaluate(&input)
    };

    if !result.is_allowed {
        tracing::info!(violations = ?result.violations, "content blocked");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render(&result));
    }

    Ok(result.is_allowed)
}

fn render(result: &ModerationResult) -> String {
    let categories = result
        .violations
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let message = result.message.as_deref().unwrap_or_default();

    match result.outcome() {
        Outcome::Clean => "✓ Clean".to_string(),
        Outcome::Warned => format!("⚠ Warning ({}): {}", categories, message),
        Outcome::Blocked => format!("✗ Blocked ({}): {}", categories, message),
    }
}
