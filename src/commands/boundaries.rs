//! Boundaries subcommand handler.
//!
//! Prints the analyzer output for a session: most recent boundary first,
//! with kind, label, timestamp, and how much of the transcript a cut there
//! would keep.

use anyhow::Result;

use ccprune::files::session;
use ccprune::theme::current_theme;
use ccprune::transcript;
use ccprune::Config;

pub fn handle(session_arg: &str, config: &Config) -> Result<()> {
    let theme = current_theme();
    let path = session::locate(session_arg, config.claude_dir.as_deref())?;
    let lines = session::read_lines(&path)?;
    let scan = transcript::analyze(&lines);

    if scan.boundaries.is_empty() {
        println!("{}", theme.secondary_text("No boundaries found."));
        return Ok(());
    }

    println!(
        "{}",
        theme.primary_text(&format!(
            "{} boundaries in {} lines ({} bytes):",
            scan.boundaries.len(),
            lines.len(),
            scan.total_bytes
        ))
    );
    for boundary in &scan.boundaries {
        let mut label = format!(
            "line {:>6}  [{}] {}",
            boundary.line_number,
            boundary.kind.label(),
            boundary.description
        );
        if let Some(timestamp) = &boundary.timestamp {
            label.push_str(&format!("  @ {}", timestamp));
        }
        println!(
            "{}  {}",
            theme.primary_text(&label),
            theme.secondary_text(&format!(
                "keeps {}% ({} bytes)",
                boundary.retention_percentage, boundary.character_count
            ))
        );
    }
    Ok(())
}
