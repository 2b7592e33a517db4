use anyhow::Result;
use mirai_core::ViolationCategory;
use mirai_moderation::Moderator;

pub fn handle(moderator: &Moderator) -> Result<()> {
    print!("{}", render(moderator));
    Ok(())
}

fn render(moderator: &Moderator) -> String {
    let described = moderator.patterns().describe();
    let mut out = String::new();

    for category in [
        ViolationCategory::BlockedContent,
        ViolationCategory::PotentiallyHarmful,
    ] {
        let sources: Vec<_> = described
            .iter()
            .filter(|(c, _)| *c == category)
            .map(|(_, source)| source)
            .collect();

        out.push_str(&format!("{} ({}):\n", category, sources.len()));
        for source in sources {
            out.push_str(&format!("  {}\n", source));
        }
    }

    out.push_str(&format!("\nPlaceholder: {}\n", moderator.placeholder()));
    out
}
