//! Participant and administrator name lists
//!
//! Name files hold one name per line. Surrounding whitespace is trimmed and
//! blank lines or `#` comments are skipped.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::RosterConfig;

/// Loaded participant and administrator names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Everyone taking part in the exchange
    pub participants: Vec<String>,
    /// Administrators, in file order; only the first two distribute
    pub admins: Vec<String>,
}

impl Roster {
    /// Build a roster from in-memory lists, rejecting duplicates
    pub fn new(participants: Vec<String>, admins: Vec<String>) -> Result<Self> {
        check_unique(&participants).context("in participant list")?;
        check_unique(&admins).context("in admin list")?;
        Ok(Self {
            participants,
            admins,
        })
    }

    /// Load the roster described by `config`, resolving file paths against `base_dir`
    pub fn load(config: &RosterConfig, base_dir: &Path) -> Result<Self> {
        let participants = match &config.participants {
            Some(inline) => clean(inline),
            None => read_names(base_dir.join(&config.participants_file))?,
        };
        let admins = match &config.admins {
            Some(inline) => clean(inline),
            None => read_names(base_dir.join(&config.admins_file))?,
        };
        Self::new(participants, admins)
    }
}

/// Read a name file
pub fn read_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read name list: {}", path.display()))?;
    Ok(parse_names(&content))
}

/// Parse name-list content
#[must_use]
pub fn parse_names(content: &str) -> Vec<String> {
    clean(content.lines())
}

fn clean<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|line| {
            let name = line.as_ref().trim();
            (!name.is_empty() && !name.starts_with('#')).then(|| name.to_string())
        })
        .collect()
}

fn check_unique(names: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            bail!("Duplicate name: '{name}'");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_parse_names_trims_and_skips() {
        let content = "Ann\n  Bob  \n\n# organizers below\nCat\r\n";
        assert_eq!(parse_names(content), vec!["Ann", "Bob", "Cat"]);
    }

    #[test]
    fn test_parse_names_empty() {
        assert!(parse_names("").is_empty());
        assert!(parse_names("\n\n  \n").is_empty());
    }

    #[test]
    fn test_new_rejects_duplicate_participant() {
        let err = Roster::new(
            vec!["Ann".to_string(), "Bob".to_string(), "Ann".to_string()],
            vec![],
        )
        .unwrap_err();
        let msg = format!("{err:?}");
        assert!(msg.contains("Duplicate name: 'Ann'"), "got: {msg}");
        assert!(msg.contains("participant list"), "got: {msg}");
    }

    #[test]
    fn test_new_rejects_duplicate_admin() {
        let err = Roster::new(
            vec!["Ann".to_string()],
            vec!["Bob".to_string(), "Bob".to_string()],
        )
        .unwrap_err();
        assert!(format!("{err:?}").contains("admin list"));
    }

    #[test]
    fn test_load_from_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("participantnames.txt"), "Ann\nBob\nCat\n").unwrap();
        std::fs::write(temp_dir.path().join("admins.txt"), "Ann\nBob\n").unwrap();

        let roster = Roster::load(&RosterConfig::default(), temp_dir.path()).unwrap();
        assert_eq!(roster.participants, vec!["Ann", "Bob", "Cat"]);
        assert_eq!(roster.admins, vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_load_inline_overrides_files() {
        let config = RosterConfig {
            participants_file: PathBuf::from("missing.txt"),
            admins_file: PathBuf::from("missing.txt"),
            participants: Some(vec![" Ann ".to_string(), "Bob".to_string()]),
            admins: Some(vec!["Ann".to_string(), String::new(), "Bob".to_string()]),
        };

        let roster = Roster::load(&config, Path::new("/nonexistent")).unwrap();
        assert_eq!(roster.participants, vec!["Ann", "Bob"]);
        assert_eq!(roster.admins, vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Roster::load(&RosterConfig::default(), temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read name list"));
    }
}
