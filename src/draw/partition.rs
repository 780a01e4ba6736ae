//! Splitting a gift cycle between two administrators
//!
//! Each administrator hands out slips for the other participants. Neither
//! may see a pairing that involves themselves, as giver or receiver.

use crate::draw::finder::Assignment;

/// Assignments split between two administrators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminPartition {
    /// First administrator's name
    pub first_admin: String,
    /// Second administrator's name
    pub second_admin: String,
    /// Pairings the first administrator distributes
    pub first: Vec<Assignment>,
    /// Pairings the second administrator distributes
    pub second: Vec<Assignment>,
    /// Pairings involving both administrators; neither may distribute them
    pub withheld: Vec<Assignment>,
}

impl AdminPartition {
    /// The list `admin` distributes, or `None` if they are neither administrator
    #[must_use]
    pub fn for_admin(&self, admin: &str) -> Option<&[Assignment]> {
        if admin == self.first_admin {
            Some(&self.first)
        } else if admin == self.second_admin {
            Some(&self.second)
        } else {
            None
        }
    }

    /// Total number of pairings across all three lists
    #[must_use]
    pub fn total(&self) -> usize {
        self.first.len() + self.second.len() + self.withheld.len()
    }
}

/// Split cycle edges so neither administrator sees their own pairing.
///
/// Edges involving only the second administrator go to the first, and vice
/// versa. Edges involving neither are shared: the first half (floor) in cycle
/// order goes to the first administrator, the rest to the second. An edge
/// involving both administrators lands in `withheld`.
#[must_use]
pub fn partition(assignments: &[Assignment], admin1: &str, admin2: &str) -> AdminPartition {
    let mut result = AdminPartition {
        first_admin: admin1.to_string(),
        second_admin: admin2.to_string(),
        ..AdminPartition::default()
    };
    let mut shared = Vec::new();

    for edge in assignments {
        match (edge.involves(admin1), edge.involves(admin2)) {
            (false, false) => shared.push(edge.clone()),
            (false, true) => result.first.push(edge.clone()),
            (true, false) => result.second.push(edge.clone()),
            (true, true) => result.withheld.push(edge.clone()),
        }
    }

    if !result.withheld.is_empty() {
        tracing::debug!(
            count = result.withheld.len(),
            "pairings involve both administrators and were withheld"
        );
    }

    let mid = shared.len() / 2;
    let second_half = shared.split_off(mid);
    result.first.extend(shared);
    result.second.extend(second_half);

    result
}
