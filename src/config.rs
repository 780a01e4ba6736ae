//! Exchange configuration parser
//!
//! Parses `santa.toml` into roster locations, search settings and the banlist.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::draw::{Banlist, CycleFinder, DEFAULT_MAX_ATTEMPTS};

/// Where participant and administrator names come from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Participant list, one name per line (relative to the config file)
    #[serde(default = "default_participants_file")]
    pub participants_file: PathBuf,
    /// Administrator list, one name per line (relative to the config file)
    #[serde(default = "default_admins_file")]
    pub admins_file: PathBuf,
    /// Inline participants; overrides `participants_file` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
    /// Inline administrators; overrides `admins_file` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admins: Option<Vec<String>>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            participants_file: default_participants_file(),
            admins_file: default_admins_file(),
            participants: None,
            admins: None,
        }
    }
}

fn default_participants_file() -> PathBuf {
    PathBuf::from("participantnames.txt")
}

fn default_admins_file() -> PathBuf {
    PathBuf::from("admins.txt")
}

/// Search settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Shuffled restarts before giving up (default: 1000)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Seed used when the entered seed is not an integer (default: 67)
    #[serde(default = "default_seed")]
    pub default_seed: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            default_seed: default_seed(),
        }
    }
}

const fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

const fn default_seed() -> i64 {
    67
}

/// Two people who may not give to each other in either direction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoupleConfig {
    /// The two partners
    pub pair: Vec<String>,
}

/// Top-level configuration parsed from santa.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SantaConfig {
    /// Roster sources
    #[serde(default)]
    pub roster: RosterConfig,
    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,
    /// Directed exclusions: giver → receivers they may not draw
    #[serde(default)]
    pub banlist: BTreeMap<String, Vec<String>>,
    /// Mutual exclusions
    #[serde(default, rename = "couple")]
    pub couples: Vec<CoupleConfig>,
}

impl SantaConfig {
    /// Parse a santa.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse santa.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse santa.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Build the banlist from directed rules and couples
    #[must_use]
    pub fn banlist(&self) -> Banlist {
        let mut banlist = Banlist::new();
        for (giver, receivers) in &self.banlist {
            for receiver in receivers {
                banlist.forbid(giver, receiver);
            }
        }
        for couple in &self.couples {
            if let [a, b] = couple.pair.as_slice() {
                banlist.forbid_both(a, b);
            }
        }
        banlist
    }

    /// Cycle finder using the configured attempt budget
    #[must_use]
    pub const fn finder(&self) -> CycleFinder {
        CycleFinder::with_max_attempts(self.search.max_attempts)
    }

    /// Check that every name in the banlist and couples is a known participant
    pub fn check_names<S: AsRef<str>>(&self, participants: &[S]) -> Result<()> {
        let known: HashSet<&str> = participants.iter().map(AsRef::as_ref).collect();
        for name in self.banlist().names() {
            if !known.contains(name) {
                bail!("Banlist references unknown participant '{name}'");
            }
        }
        Ok(())
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.search.max_attempts == 0 {
            bail!("search.max_attempts must be at least 1");
        }

        for (giver, receivers) in &self.banlist {
            if giver.trim().is_empty() {
                bail!("Banlist giver name cannot be empty");
            }
            if receivers.iter().any(|r| r.trim().is_empty()) {
                bail!("Banlist entry for '{giver}' contains an empty name");
            }
        }

        for couple in &self.couples {
            let [a, b] = couple.pair.as_slice() else {
                bail!(
                    "Couple must name exactly 2 people, got {}",
                    couple.pair.len()
                );
            };
            if a.trim().is_empty() || b.trim().is_empty() {
                bail!("Couple names cannot be empty");
            }
            if a == b {
                bail!("Couple pairs '{a}' with themselves");
            }
        }

        Ok(())
    }
}
