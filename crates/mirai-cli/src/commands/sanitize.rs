use anyhow::Result;
use mirai_moderation::{Moderator, SanitizeReport};

pub async fn handle(moderator: &Moderator, text: Option<String>, report: bool) -> Result<()> {
    let input = super::read_input(text).await?;
    let (sanitized, reports) = moderator.sanitize_with_report(&input);

    println!("{}", sanitized);

    if report {
        eprint!("{}", render_report(&reports));
    }

    Ok(())
}

fn render_report(reports: &[SanitizeReport]) -> String {
    if reports.is_empty() {
        return "No replacements.\n".to_string();
    }

    let mut out = String::from("Replacements:\n");
    for entry in reports {
        out.push_str(&format!("  {} ×{}\n", entry.pattern, entry.count));
    }
    out
}
