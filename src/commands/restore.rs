//! Restore subcommand handler.
//!
//! Puts the most recent `prune-backup` copy back in place of the session
//! file, after confirmation on a TTY.

use std::io::{self, Write};

use anyhow::{bail, Result};

use ccprune::files::{backup, session};
use ccprune::theme::current_theme;
use ccprune::Config;

pub fn handle(session_arg: &str, yes: bool, config: &Config) -> Result<()> {
    let theme = current_theme();
    let path = session::locate(session_arg, config.claude_dir.as_deref())?;

    let Some(latest) = backup::latest_backup(&path)? else {
        bail!(
            "No backup found for {} in {}",
            path.display(),
            backup::backup_dir_for(&path).display()
        );
    };

    let current_lines = session::read_lines(&path)?.len();
    let backup_lines = session::read_lines(&latest)?.len();
    println!(
        "{}",
        theme.primary_text(&format!(
            "Restoring {} ({} lines) from {} ({} lines)",
            path.display(),
            current_lines,
            latest.display(),
            backup_lines
        ))
    );

    if !yes && !confirmed("Overwrite the current session?")? {
        println!("{}", theme.secondary_text("No changes made."));
        return Ok(());
    }

    let restored = backup::restore_from_backup(&path)?;
    println!(
        "{}",
        theme.success_text(&format!("Restored from {}", restored.display()))
    );
    Ok(())
}

/// Ask for a yes/no answer on the terminal.
///
/// Anything but an explicit yes declines. Without a TTY there is nobody to
/// ask, so the answer is no and `--yes` is suggested instead.
fn confirmed(question: &str) -> Result<bool> {
    let theme = current_theme();
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Not a terminal; pass --yes to restore without a prompt")
        );
        return Ok(false);
    }

    print!("{} ", theme.primary_text(&format!("{} [y/N]", question)));
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
