//! Constrained gift-cycle search
//!
//! Finds a single Hamiltonian cycle over the participants where every
//! consecutive giver → receiver edge (including the wrap-around edge) is
//! allowed by the banlist. The search is randomized backtracking driven by
//! a seeded generator, so the same inputs and seed always give the same cycle.

use std::collections::BTreeSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::draw::rules::Banlist;

/// Number of shuffled restarts tried before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// A single giver → receiver pairing
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Assignment {
    /// Person giving the gift
    pub giver: String,
    /// Person receiving the gift
    pub receiver: String,
}

impl Assignment {
    /// Create a new pairing
    #[must_use]
    pub fn new(giver: &str, receiver: &str) -> Self {
        Self {
            giver: giver.to_string(),
            receiver: receiver.to_string(),
        }
    }

    /// Whether `name` appears on either side of this pairing
    #[must_use]
    pub fn involves(&self, name: &str) -> bool {
        self.giver == name || self.receiver == name
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.giver, self.receiver)
    }
}

/// A closed gift cycle: `order[i]` gives to `order[(i + 1) % len]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftCycle {
    order: Vec<String>,
    attempts: u32,
}

impl GiftCycle {
    /// Participants in cycle order
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Number of participants in the cycle
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the cycle has no participants
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The (1-based) attempt on which the cycle was found
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The cycle's edges in order, ending with the wrap-around edge
    #[must_use]
    pub fn assignments(&self) -> Vec<Assignment> {
        self.order
            .iter()
            .zip(self.order.iter().cycle().skip(1))
            .map(|(giver, receiver)| Assignment::new(giver, receiver))
            .collect()
    }

    /// Who `giver` gives to, if they are in the cycle
    #[must_use]
    pub fn receiver_of(&self, giver: &str) -> Option<&str> {
        let pos = self.order.iter().position(|p| p == giver)?;
        Some(self.order[(pos + 1) % self.order.len()].as_str())
    }
}

/// Randomized backtracking search for a gift cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleFinder {
    max_attempts: u32,
}

impl Default for CycleFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleFinder {
    /// Create a finder with the default attempt budget
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create a finder with a custom attempt budget
    #[must_use]
    pub const fn with_max_attempts(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// The attempt budget
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Find a cycle using a generator seeded from `seed`.
    ///
    /// Returns `None` when no cycle was found within the attempt budget. That
    /// may mean no valid cycle exists, or only that none turned up in time.
    #[must_use]
    pub fn find_cycle<S: AsRef<str>>(
        &self,
        participants: &[S],
        banlist: &Banlist,
        seed: i64,
    ) -> Option<GiftCycle> {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from_le_bytes(seed.to_le_bytes()));
        self.find_cycle_with_rng(participants, banlist, &mut rng)
    }

    /// Find a cycle drawing every random choice from `rng`
    #[must_use]
    pub fn find_cycle_with_rng<S, R>(
        &self,
        participants: &[S],
        banlist: &Banlist,
        rng: &mut R,
    ) -> Option<GiftCycle>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        // Sorted baseline so the shuffles do not depend on input order
        let names: Vec<&str> = participants
            .iter()
            .map(AsRef::as_ref)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if names.len() < 2 {
            tracing::debug!(participants = names.len(), "too few participants for a cycle");
            return None;
        }

        let search = Search::new(&names, banlist);

        for attempt in 1..=self.max_attempts {
            let mut shuffled: Vec<usize> = (0..names.len()).collect();
            shuffled.shuffle(rng);

            if let Some(path) = search.run(shuffled[0], rng) {
                tracing::info!(attempt, participants = names.len(), "found gift cycle");
                return Some(GiftCycle {
                    order: path.into_iter().map(|i| names[i].to_string()).collect(),
                    attempts: attempt,
                });
            }
            tracing::debug!(attempt, "no cycle from this start");
        }

        tracing::info!(
            attempts = self.max_attempts,
            "attempt budget exhausted without a cycle"
        );
        None
    }
}

/// Decision point on the explicit search stack: the shuffled candidates for
/// the next path position and how many have been tried.
struct Frame {
    candidates: Vec<usize>,
    next: usize,
}

/// Search over participant indices with a precomputed permission matrix
struct Search {
    allowed: Vec<Vec<bool>>,
}

impl Search {
    fn new(names: &[&str], banlist: &Banlist) -> Self {
        let allowed = names
            .iter()
            .map(|giver| {
                names
                    .iter()
                    .map(|receiver| banlist.can_give_to(giver, receiver))
                    .collect()
            })
            .collect();
        Self { allowed }
    }

    fn len(&self) -> usize {
        self.allowed.len()
    }

    /// Unplaced participants in sorted order, then shuffled
    fn frame<R: Rng + ?Sized>(&self, placed: &[bool], rng: &mut R) -> Frame {
        let mut candidates: Vec<usize> = (0..self.len()).filter(|&i| !placed[i]).collect();
        candidates.shuffle(rng);
        Frame {
            candidates,
            next: 0,
        }
    }

    /// Depth-first search for a closed path starting (and ending) at `start`
    fn run<R: Rng + ?Sized>(&self, start: usize, rng: &mut R) -> Option<Vec<usize>> {
        let n = self.len();
        let mut path = Vec::with_capacity(n);
        let mut placed = vec![false; n];
        path.push(start);
        placed[start] = true;

        let mut stack = vec![self.frame(&placed, rng)];

        while let Some(frame) = stack.last_mut() {
            let current = path[path.len() - 1];

            let mut chosen = None;
            while let Some(&candidate) = frame.candidates.get(frame.next) {
                frame.next += 1;
                if self.allowed[current][candidate] {
                    chosen = Some(candidate);
                    break;
                }
            }

            match chosen {
                Some(candidate) => {
                    path.push(candidate);
                    placed[candidate] = true;

                    if path.len() < n {
                        let frame = self.frame(&placed, rng);
                        stack.push(frame);
                    } else if self.allowed[candidate][start] {
                        return Some(path);
                    } else {
                        path.pop();
                        placed[candidate] = false;
                    }
                }
                None => {
                    stack.pop();
                    if !stack.is_empty() {
                        if let Some(last) = path.pop() {
                            placed[last] = false;
                        }
                    }
                }
            }
        }

        None
    }
}
