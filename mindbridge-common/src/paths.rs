//! Centralized Path Definitions
//!
//! Where MindBridge looks for its catalog file.

use std::path::{Path, PathBuf};

/// File name of the catalog configuration
pub const CATALOG_FILE_NAME: &str = "mindbridge.toml";

/// Directory name under the user's config directory
pub const APP_DIR_NAME: &str = "mindbridge";

/// User-level paths
pub mod user {
    use std::path::PathBuf;

    /// Get the user's MindBridge config directory (~/.config/mindbridge)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(super::APP_DIR_NAME))
    }

    /// Get the user's catalog file path (~/.config/mindbridge/mindbridge.toml)
    pub fn catalog_path() -> Option<PathBuf> {
        config_dir().map(|p| p.join(super::CATALOG_FILE_NAME))
    }
}

/// Catalog path inside a given directory
pub fn catalog_in(dir: &Path) -> PathBuf {
    dir.join(CATALOG_FILE_NAME)
}

/// Candidate catalog locations in lookup order: `dir` first, then the user config dir
pub fn catalog_candidates(dir: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![catalog_in(dir)];
    if let Some(user_path) = user::catalog_path() {
        candidates.push(user_path);
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_catalog_comes_first() {
        let dir = Path::new("/tmp/project");
        let candidates = catalog_candidates(dir);
        assert_eq!(candidates[0], PathBuf::from("/tmp/project/mindbridge.toml"));
        if let Some(user_path) = user::catalog_path() {
            assert_eq!(candidates.last(), Some(&user_path));
            assert!(user_path.ends_with("mindbridge/mindbridge.toml"));
        }
    }
}
