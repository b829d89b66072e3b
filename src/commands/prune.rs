//! Prune command handler.
//!
//! Resolves the session file, picks a cut (either `--keep N` assistant turns
//! or an interactively chosen boundary), runs the pruning core, and writes
//! the result back behind a timestamped backup. `--dry-run` stops after
//! reporting the counters.

use anyhow::{bail, Context, Result};

use ccprune::files::{backup, session};
use ccprune::theme::current_theme;
use ccprune::transcript;
use ccprune::tui::pick_boundary;
use ccprune::Config;

pub fn handle(session_arg: &str, keep: Option<u32>, dry_run: bool, config: &Config) -> Result<()> {
    let theme = current_theme();
    let path = session::locate(session_arg, config.claude_dir.as_deref())?;
    let lines = session::read_lines(&path)?;

    if lines.is_empty() {
        bail!("Session file is empty: {}", path.display());
    }

    let keep = keep.or(config.prune.default_keep);
    let outcome = match keep {
        Some(count) => transcript::keep_recent_assistants(&lines, count),
        None => match choose_boundary(&lines)? {
            Some(cut) => transcript::keep_from_line(&lines, cut),
            None => {
                println!("{}", theme.secondary_text("Cancelled - nothing written."));
                return Ok(());
            }
        },
    };

    println!(
        "{}",
        theme.primary_text(&format!(
            "Keeping {} of {} messages ({} assistant turns, {} dropped)",
            outcome.kept,
            outcome.kept + outcome.dropped,
            outcome.assistant_count,
            outcome.dropped
        ))
    );

    if dry_run {
        println!("{}", theme.secondary_text("Dry run - no changes written."));
        return Ok(());
    }

    let backup_path = backup::create_backup(&path)
        .with_context(|| format!("Refusing to prune {} without a backup", path.display()))?;
    session::write_lines(&path, &outcome.lines)?;

    println!(
        "{}",
        theme.success_text(&format!(
            "Pruned {} -> {} lines.",
            lines.len(),
            outcome.lines.len()
        ))
    );
    println!(
        "{}",
        theme.secondary_text(&format!("Backup: {}", backup_path.display()))
    );
    Ok(())
}

/// Analyze the session and let the user pick a boundary. Returns the chosen
/// cut line, or `None` on cancellation.
fn choose_boundary(lines: &[String]) -> Result<Option<usize>> {
    let scan = transcript::analyze(lines);
    if scan.boundaries.is_empty() {
        bail!("No boundaries found in this session; re-run with --keep <n>");
    }
    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        bail!("Boundary selection needs a terminal; re-run with --keep <n>");
    }
    let picked = pick_boundary(&scan.boundaries)?;
    Ok(picked.map(|index| scan.boundaries[index].line_number))
}
