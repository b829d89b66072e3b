//! Build script for ccprune - embeds the build date and git commit hash.
//!
//! Emits `CCPRUNE_BUILD_DATE` and `CCPRUNE_GIT_SHA` environment variables
//! for the version string. Both fall back to "unknown" outside a git
//! checkout or on systems without the expected tooling.

use std::process::Command;

/// Get the current date in YYYY-MM-DD format
fn get_build_date() -> String {
    // Use the date command for cross-platform compatibility
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}

/// Get the short commit hash of HEAD
fn get_git_sha() -> String {
    if let Ok(output) = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}

fn main() {
    println!("cargo:rustc-env=CCPRUNE_BUILD_DATE={}", get_build_date());
    println!("cargo:rustc-env=CCPRUNE_GIT_SHA={}", get_git_sha());
}
