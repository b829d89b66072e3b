//! Config subcommands handler.

use std::fs;
use std::process::Command;

use anyhow::{bail, Context, Result};

use ccprune::theme::current_theme;
use ccprune::Config;

/// Commented starter config written on first `config edit`.
const CONFIG_TEMPLATE: &str = "\
# ccprune configuration. Every setting is optional.

# theme = \"claude_code\"        # or \"classic\", \"ocean\"
# claude_dir = \"/path/to/.claude\"

[prune]
# default_keep = 20            # assistant turns kept when --keep is absent
";

/// Show the effective configuration and where each value comes from.
pub fn handle_show() -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;
    let config = Config::load()?;

    if path.exists() {
        println!("{}", theme.secondary_text(&format!("# {}", path.display())));
    } else {
        println!(
            "{}",
            theme.secondary_text(&format!("# {} (not created yet)", path.display()))
        );
    }

    let theme_value = match &config.theme {
        Some(name) => name.clone(),
        None => "claude_code (default)".to_string(),
    };
    let claude_dir_value = match &config.claude_dir {
        Some(dir) => dir.display().to_string(),
        None => "~/.claude (default)".to_string(),
    };
    let keep_value = match config.prune.default_keep {
        Some(keep) => keep.to_string(),
        None => "unset - boundary picker (default)".to_string(),
    };

    for (key, value) in [
        ("theme", theme_value),
        ("claude_dir", claude_dir_value),
        ("prune.default_keep", keep_value),
    ] {
        println!(
            "{} = {}",
            theme.accent_text(key),
            theme.primary_text(&value)
        );
    }
    Ok(())
}

/// Open the config file in `$EDITOR`, seeding a commented template on first
/// use, and re-validate the result.
pub fn handle_edit() -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;

    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to create config: {}", path.display()))?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", editor))?;
    if !status.success() {
        bail!("Editor '{}' exited with {}", editor, status);
    }

    // Surface mistakes now rather than on the next prune.
    let config = Config::load()?;
    match config.validate() {
        Ok(()) => println!("{}", theme.success_text("Config OK.")),
        Err(message) => println!(
            "{}",
            theme.error_text(&format!("Warning - config has a problem: {}", message))
        ),
    }
    Ok(())
}
