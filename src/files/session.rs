//! Locating and reading Claude Code session transcripts.
//!
//! Claude Code stores sessions under `~/.claude/projects/<slug>/`, one
//! directory per working directory, where `<slug>` is the absolute path with
//! every non-alphanumeric byte replaced by `-`. Each session is a
//! `<sessionId>.jsonl` file.

use std::fs;
use std::path::{Path, PathBuf};

/// Errors from the session-file subsystem.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Could not determine the working directory: {0}")]
    NoWorkingDir(std::io::Error),

    #[error("Failed to read session file: {0}")]
    Read(std::io::Error),

    #[error("Failed to write session file: {0}")]
    Write(std::io::Error),
}

/// Project directory slug for a working directory path.
///
/// Matches the scheme Claude Code itself uses: every byte outside
/// `[A-Za-z0-9]` becomes a hyphen.
pub fn project_slug(path: &Path) -> String {
    path.to_string_lossy()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// The `~/.claude` directory, honoring an override from config.
pub fn claude_dir(override_dir: Option<&Path>) -> Result<PathBuf, SessionError> {
    match override_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => dirs::home_dir()
            .map(|home| home.join(".claude"))
            .ok_or(SessionError::NoHomeDir),
    }
}

/// Resolve a session argument to a transcript path.
///
/// An argument that already points at a `.jsonl` file is used as-is;
/// otherwise it is treated as a session id inside the project directory for
/// the current working directory.
pub fn locate(session: &str, override_dir: Option<&Path>) -> Result<PathBuf, SessionError> {
    let direct = Path::new(session);
    if direct.extension().map(|ext| ext == "jsonl").unwrap_or(false) {
        return if direct.is_file() {
            Ok(direct.to_path_buf())
        } else {
            Err(SessionError::NotFound {
                path: direct.to_path_buf(),
            })
        };
    }

    let cwd = std::env::current_dir().map_err(SessionError::NoWorkingDir)?;
    let path = claude_dir(override_dir)?
        .join("projects")
        .join(project_slug(&cwd))
        .join(format!("{}.jsonl", session));

    if path.is_file() {
        Ok(path)
    } else {
        Err(SessionError::NotFound { path })
    }
}

/// Read a transcript into a line list.
///
/// Lines are split on CR/LF; empty lines are discarded. The pruning core
/// receives exactly this shape.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SessionError> {
    let content = fs::read_to_string(path).map_err(SessionError::Read)?;
    Ok(split_lines(&content))
}

/// Split transcript content into non-empty lines.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Write a line list back as a transcript: lines joined with `\n` plus a
/// single trailing newline.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), SessionError> {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).map_err(SessionError::Write)
}
