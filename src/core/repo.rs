//! Repository root discovery through the git CLI.

use crate::utils::error::{AocError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// `git rev-parse --show-toplevel` from the current directory.
pub fn repo_root() -> Result<PathBuf> {
    repo_root_from(Path::new("."))
}

/// `git rev-parse --show-toplevel` run inside `dir`.
pub fn repo_root_from(dir: &Path) -> Result<PathBuf> {
    let output = Command::new("git")
        .current_dir(dir)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| AocError::RepoRootError {
            message: format!("Failed to run git in {}: {}", dir.display(), e),
        })?;

    if !output.status.success() {
        return Err(AocError::RepoRootError {
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let root = stdout.trim();
    if root.is_empty() {
        return Err(AocError::RepoRootError {
            message: "git returned an empty top-level path".to_string(),
        });
    }

    tracing::debug!("Repository root: {}", root);
    Ok(PathBuf::from(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_repo_root_error() {
        let result = repo_root_from(Path::new("/definitely/not/a/real/dir/aoc-fetch"));
        assert!(matches!(result, Err(AocError::RepoRootError { .. })));
    }
}
