//! MindBridge Configuration Parser
//!
//! Parses mindbridge.toml files into a [`Catalog`]. Every section is
//! optional: a missing `[session]`, `[[counselors]]` or `[[slots]]` keeps the
//! built-in data for that part.

use crate::catalog::Catalog;
use crate::paths;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

impl Catalog {
    /// Load a catalog from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))
    }

    /// Parse and validate a catalog from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(toml_str).context("Failed to parse mindbridge.toml")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load mindbridge.toml from the current directory
    pub fn from_current_dir() -> Result<Self> {
        let catalog_path = paths::catalog_in(&std::env::current_dir()?);

        if !catalog_path.exists() {
            anyhow::bail!(
                "No mindbridge.toml found in current directory.\n\
                 Run 'mindbridge init' to create one, or specify a path with --catalog"
            );
        }

        Self::from_file(&catalog_path)
    }

    /// Resolve the catalog to use
    ///
    /// An explicit path must exist. Otherwise the first existing candidate
    /// from [`paths::catalog_candidates`] wins, falling back to the built-in
    /// catalog. Returns the path that was loaded, if any.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        for candidate in paths::catalog_candidates(dir) {
            if candidate.exists() {
                tracing::debug!("Using catalog at {}", candidate.display());
                return Ok((Self::from_file(&candidate)?, Some(candidate)));
            }
        }

        tracing::debug!("No catalog file found, using built-in catalog");
        Ok((Self::builtin(), None))
    }
}

/// Generate a template mindbridge.toml file
pub fn generate_template() -> String {
    r#"# MindBridge Catalog
# Every section is optional. Leave one out to keep the built-in data.

[session]
duration_minutes = 50
format = "In-person or Video call"
# Booking references look like CM1A2B3C4D
reference_prefix = "CM"
support_contact = "Support: Contact support@example.com or call 123-456-7890"

# [[counselors]]
# id = "1"
# name = "Dr. Priya Sharma"
# title = "Licensed Clinical Psychologist"
# specialization = ["Academic Stress", "Anxiety Disorders"]
# institution = "University of Kashmir"
# experience = "8+ years"
# rating = 4.9
# total_sessions = 1247
# languages = ["English", "Hindi", "Kashmiri"]
# available_days = ["Monday", "Wednesday", "Friday"]
# avatar = "👩‍⚕️"

# [[slots]]
# id = "1"
# time = "9:00 AM"
# date = "2025-09-24"
# available = true
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_builtin() {
        let catalog = Catalog::from_toml("").unwrap();
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn test_template_parses_to_builtin() {
        let catalog = Catalog::from_toml(&generate_template()).unwrap();
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn test_parse_custom_catalog() {
        let toml = r#"
            [session]
            duration_minutes = 45
            reference_prefix = "MB"

            [[counselors]]
            id = "c1"
            name = "Dr. Ana Ruiz"
            title = "Counselor"
            institution = "North College"
            experience = "3+ years"
            rating = 4.5

            [[slots]]
            id = "s1"
            time = "1:00 PM"
            date = "2026-01-05"
            available = true
        "#;

        let catalog = Catalog::from_toml(toml).unwrap();
        assert_eq!(catalog.session.duration_minutes, 45);
        assert_eq!(catalog.session.reference_prefix, "MB");
        assert_eq!(catalog.session.format, "In-person or Video call"); // default
        assert_eq!(catalog.counselors.len(), 1);
        assert_eq!(catalog.counselors[0].short_name(), "Ana");
        assert!(catalog.counselors[0].languages.is_empty());
        assert_eq!(catalog.dates(), vec!["2026-01-05"]);
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let toml = r#"
            [[slots]]
            id = "1"
            time = "9:00 AM"
            date = "next tuesday"
            available = true
        "#;

        assert!(Catalog::from_toml(toml).is_err());
    }

    #[test]
    fn test_discover_prefers_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\nduration_minutes = 30").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let (catalog, path) = Catalog::discover(Some(file.path()), dir.path()).unwrap();
        assert_eq!(catalog.session.duration_minutes, 30);
        assert_eq!(path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_discover_reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(paths::CATALOG_FILE_NAME),
            "[session]\nreference_prefix = \"UX\"\n",
        )
        .unwrap();

        let (catalog, path) = Catalog::discover(None, dir.path()).unwrap();
        assert_eq!(catalog.session.reference_prefix, "UX");
        assert_eq!(path, Some(dir.path().join(paths::CATALOG_FILE_NAME)));
    }

    #[test]
    fn test_discover_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Catalog::discover(Some(&missing), dir.path()).is_err());
    }
}
