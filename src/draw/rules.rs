//! Exclusion rules
//!
//! A banlist maps each giver to the receivers they may not be assigned.
//! Rules are directed: forbidding Ann → Bob says nothing about Bob → Ann.

use std::collections::{BTreeMap, BTreeSet};

/// Directed giver → receiver exclusions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banlist {
    forbidden: BTreeMap<String, BTreeSet<String>>,
}

impl Banlist {
    /// Create an empty banlist (nobody is excluded from anybody)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbid `giver` from being assigned `receiver`
    pub fn forbid(&mut self, giver: &str, receiver: &str) {
        self.forbidden
            .entry(giver.to_string())
            .or_default()
            .insert(receiver.to_string());
    }

    /// Forbid the pairing in both directions (e.g. spouses)
    pub fn forbid_both(&mut self, a: &str, b: &str) {
        self.forbid(a, b);
        self.forbid(b, a);
    }

    /// Whether `giver` may be assigned `receiver`.
    ///
    /// A pair is forbidden iff giver and receiver are the same person, or
    /// the receiver is listed under the giver's exclusions.
    #[must_use]
    pub fn can_give_to(&self, giver: &str, receiver: &str) -> bool {
        if giver == receiver {
            return false;
        }
        !self
            .forbidden
            .get(giver)
            .is_some_and(|excluded| excluded.contains(receiver))
    }

    /// Receivers explicitly excluded for `giver`, in sorted order
    pub fn excluded(&self, giver: &str) -> impl Iterator<Item = &str> {
        self.forbidden
            .get(giver)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Every name mentioned anywhere in the banlist, as giver or receiver
    #[must_use]
    pub fn names(&self) -> BTreeSet<&str> {
        self.forbidden
            .iter()
            .flat_map(|(giver, receivers)| {
                std::iter::once(giver.as_str()).chain(receivers.iter().map(String::as_str))
            })
            .collect()
    }

    /// Number of directed exclusions
    #[must_use]
    pub fn len(&self) -> usize {
        self.forbidden.values().map(BTreeSet::len).sum()
    }

    /// Returns true if no exclusions are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<G, R> FromIterator<(G, R)> for Banlist
where
    G: AsRef<str>,
    R: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (G, R)>>(iter: I) -> Self {
        let mut banlist = Self::new();
        for (giver, receiver) in iter {
            banlist.forbid(giver.as_ref(), receiver.as_ref());
        }
        banlist
    }
}
