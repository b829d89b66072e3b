//! Timestamped backups of session transcripts.
//!
//! Before a pruned transcript replaces the original, the original is copied
//! to `prune-backup/<sessionId>.jsonl.<unix-ms>` next to the session file.
//! Restore picks the newest copy for a session and writes it back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;

/// Directory holding backups, sibling to the session files.
pub const BACKUP_DIR_NAME: &str = "prune-backup";

/// The backup directory for a session file.
pub fn backup_dir_for(session_path: &Path) -> PathBuf {
    session_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(BACKUP_DIR_NAME)
}

/// The backup path for a session file at a given unix-millisecond stamp.
pub fn backup_path_for(session_path: &Path, timestamp_ms: i64) -> PathBuf {
    let file_name = session_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "session.jsonl".to_string());
    backup_dir_for(session_path).join(format!("{}.{}", file_name, timestamp_ms))
}

/// Copy the session file into the backup directory, stamped with the current
/// time. Returns the backup path.
pub fn create_backup(session_path: &Path) -> Result<PathBuf> {
    let dir = backup_dir_for(session_path);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create backup directory: {}", dir.display()))?;

    let backup_path = backup_path_for(session_path, Utc::now().timestamp_millis());
    fs::copy(session_path, &backup_path).with_context(|| {
        format!(
            "Failed to back up {} to {}",
            session_path.display(),
            backup_path.display()
        )
    })?;
    Ok(backup_path)
}

/// All backups for a session, oldest first.
pub fn list_backups(session_path: &Path) -> Result<Vec<PathBuf>> {
    let dir = backup_dir_for(session_path);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let prefix = match session_path.file_name() {
        Some(name) => format!("{}.", name.to_string_lossy()),
        None => return Ok(Vec::new()),
    };

    let mut stamped: Vec<(i64, PathBuf)> = Vec::new();
    for entry in fs::read_dir(&dir)
        .with_context(|| format!("Failed to read backup directory: {}", dir.display()))?
    {
        let path = entry?.path();
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let Some(suffix) = file_name.strip_prefix(&prefix) else {
            continue;
        };
        if let Ok(stamp) = suffix.parse::<i64>() {
            stamped.push((stamp, path));
        }
    }

    stamped.sort_by_key(|(stamp, _)| *stamp);
    Ok(stamped.into_iter().map(|(_, path)| path).collect())
}

/// The most recent backup for a session, if any.
pub fn latest_backup(session_path: &Path) -> Result<Option<PathBuf>> {
    Ok(list_backups(session_path)?.pop())
}

/// Whether any backup exists for the session.
pub fn has_backup(session_path: &Path) -> bool {
    matches!(latest_backup(session_path), Ok(Some(_)))
}

/// Overwrite the session file with its most recent backup. Returns the
/// backup path that was restored.
pub fn restore_from_backup(session_path: &Path) -> Result<PathBuf> {
    let Some(backup_path) = latest_backup(session_path)? else {
        bail!(
            "No backup found for {} in {}",
            session_path.display(),
            backup_dir_for(session_path).display()
        );
    };
    fs::copy(&backup_path, session_path).with_context(|| {
        format!(
            "Failed to restore {} from {}",
            session_path.display(),
            backup_path.display()
        )
    })?;
    Ok(backup_path)
}
