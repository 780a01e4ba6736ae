//! Exchange orchestration
//!
//! Ties the roster, banlist and finder together: searches for a gift cycle
//! for a seed and splits it between the first two administrators. Pairings
//! that involve both of them go to the reserve administrators (anyone listed
//! after the first two), or back to their own giver when there is no reserve.

use anyhow::Result;

use crate::config::SantaConfig;
use crate::draw::{partition, AdminPartition, Assignment, Banlist, CycleFinder, GiftCycle};
use crate::error::DrawError;
use crate::roster::Roster;

/// A configured gift exchange ready to draw
#[derive(Debug, Clone)]
pub struct Exchange {
    participants: Vec<String>,
    admins: [String; 2],
    reserve: Vec<String>,
    banlist: Banlist,
    finder: CycleFinder,
}

/// The result of a successful draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    seed: i64,
    cycle: GiftCycle,
    partition: AdminPartition,
    reserve: Vec<String>,
}

impl Exchange {
    /// Create an exchange. The first two administrators distribute; the rest
    /// are reserves for pairings that involve both.
    pub fn new(
        participants: Vec<String>,
        admins: &[String],
        banlist: Banlist,
        finder: CycleFinder,
    ) -> Result<Self, DrawError> {
        let [first, second, reserve @ ..] = admins else {
            return Err(DrawError::InsufficientAdmins {
                found: admins.len(),
            });
        };
        Ok(Self {
            participants,
            admins: [first.clone(), second.clone()],
            reserve: reserve.to_vec(),
            banlist,
            finder,
        })
    }

    /// Create an exchange from a loaded configuration and roster
    pub fn from_config(config: &SantaConfig, roster: Roster) -> Result<Self> {
        config.check_names(&roster.participants)?;
        let exchange = Self::new(
            roster.participants,
            &roster.admins,
            config.banlist(),
            config.finder(),
        )?;
        Ok(exchange)
    }

    /// The two distributing administrators
    #[must_use]
    pub const fn admins(&self) -> &[String; 2] {
        &self.admins
    }

    /// Search for a cycle with `seed` and split it between the administrators
    pub fn draw(&self, seed: i64) -> Result<Draw, DrawError> {
        let cycle = self
            .finder
            .find_cycle(&self.participants, &self.banlist, seed)
            .ok_or(DrawError::NoCycleFound {
                attempts: self.finder.max_attempts(),
            })?;

        let [admin1, admin2] = &self.admins;
        let partition = partition(&cycle.assignments(), admin1, admin2);

        Ok(Draw {
            seed,
            cycle,
            partition,
            reserve: self.reserve.clone(),
        })
    }
}

impl Draw {
    /// Seed the draw was made with
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// The full gift cycle
    #[must_use]
    pub const fn cycle(&self) -> &GiftCycle {
        &self.cycle
    }

    /// The administrator split
    #[must_use]
    pub const fn partition(&self) -> &AdminPartition {
        &self.partition
    }

    /// Pairings `admin` should hand out.
    ///
    /// A reserve administrator gets the withheld pairings.
    pub fn assignments_for(&self, admin: &str) -> Result<&[Assignment], DrawError> {
        if let Some(list) = self.partition.for_admin(admin) {
            return Ok(list);
        }
        if self.reserve.iter().any(|name| name == admin) {
            return Ok(&self.partition.withheld);
        }
        Err(DrawError::UnknownAdmin {
            name: admin.to_string(),
        })
    }

    /// The reserve administrator who hands out withheld pairings, if any
    #[must_use]
    pub fn reserve_admin(&self) -> Option<&str> {
        self.reserve.first().map(String::as_str)
    }

    /// Whether `admin` is one of the two distributing administrators
    #[must_use]
    pub fn distributes(&self, admin: &str) -> bool {
        self.partition.for_admin(admin).is_some()
    }

    /// Withheld pairings `admin` gives, shown to them when no reserve exists.
    ///
    /// Only the giver's own slip is revealed; the receiving administrator
    /// never sees it.
    #[must_use]
    pub fn own_withheld(&self, admin: &str) -> Vec<&Assignment> {
        if !self.reserve.is_empty() || !self.distributes(admin) {
            return Vec::new();
        }
        self.partition
            .withheld
            .iter()
            .filter(|edge| edge.giver == admin)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn office() -> Exchange {
        Exchange::new(
            names(&["Ann", "Bob", "Cat", "Dan", "Eve", "Fay"]),
            &names(&["Ann", "Bob", "Cat"]),
            Banlist::new(),
            CycleFinder::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_needs_two_admins() {
        let err = Exchange::new(
            names(&["Ann", "Bob", "Cat"]),
            &names(&["Ann"]),
            Banlist::new(),
            CycleFinder::new(),
        )
        .unwrap_err();
        assert_eq!(err, DrawError::InsufficientAdmins { found: 1 });
    }

    /// Three people: the two admins are always adjacent in the cycle
    fn trio(admins: &[&str]) -> Exchange {
        Exchange::new(
            names(&["Ann", "Bob", "Cat"]),
            &names(admins),
            Banlist::new(),
            CycleFinder::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_only_first_two_admins_distribute() {
        let exchange = office();
        assert_eq!(exchange.admins(), &["Ann".to_string(), "Bob".to_string()]);

        let draw = exchange.draw(67).unwrap();
        assert!(draw.distributes("Ann"));
        assert!(draw.distributes("Bob"));
        assert!(!draw.distributes("Cat"));
        assert_eq!(draw.reserve_admin(), Some("Cat"));
        assert_eq!(
            draw.assignments_for("Dan").unwrap_err(),
            DrawError::UnknownAdmin {
                name: "Dan".to_string()
            }
        );
    }

    #[test]
    fn test_reserve_admin_gets_withheld_pairings() {
        let exchange = trio(&["Ann", "Cat", "Zed"]);
        for seed in 0..10 {
            let draw = exchange.draw(seed).unwrap();
            let withheld = &draw.partition().withheld;
            assert_eq!(withheld.len(), 1);
            assert_eq!(draw.assignments_for("Zed").unwrap(), withheld.as_slice());
            assert!(draw.own_withheld("Ann").is_empty());
            assert!(draw.own_withheld("Cat").is_empty());
        }
    }

    #[test]
    fn test_withheld_pairing_goes_to_its_giver_without_reserve() {
        let exchange = trio(&["Ann", "Cat"]);
        for seed in 0..10 {
            let draw = exchange.draw(seed).unwrap();
            assert_eq!(draw.reserve_admin(), None);

            let withheld = &draw.partition().withheld[0];
            let giver = draw.own_withheld(&withheld.giver);
            let receiver = draw.own_withheld(&withheld.receiver);
            assert_eq!(giver, vec![withheld]);
            assert!(receiver.is_empty());
        }
    }

    #[test]
    fn test_draw_covers_every_pairing() {
        let draw = office().draw(3).unwrap();

        assert_eq!(draw.seed(), 3);
        assert_eq!(draw.cycle().len(), 6);
        assert_eq!(draw.partition().total(), 6);
        assert!(draw.partition().withheld.is_empty());
    }

    #[test]
    fn test_admins_never_see_own_pairing() {
        let exchange = office();
        for seed in 0..25 {
            let draw = exchange.draw(seed).unwrap();
            for admin in exchange.admins() {
                let list = draw.assignments_for(admin).unwrap();
                assert!(list.iter().all(|edge| !edge.involves(admin)));
            }
        }
    }

    #[test]
    fn test_impossible_draw_reports_budget() {
        let mut banlist = Banlist::new();
        banlist.forbid("Ann", "Bob");
        let exchange = Exchange::new(
            names(&["Ann", "Bob"]),
            &names(&["Ann", "Bob"]),
            banlist,
            CycleFinder::with_max_attempts(20),
        )
        .unwrap();

        assert_eq!(
            exchange.draw(1).unwrap_err(),
            DrawError::NoCycleFound { attempts: 20 }
        );
    }

    #[test]
    fn test_from_config_rejects_unknown_banlist_name() {
        let config = SantaConfig::parse(
            r#"
[banlist]
"Ann" = ["Zed"]
"#,
        )
        .unwrap();
        let roster = Roster::new(names(&["Ann", "Bob"]), names(&["Ann", "Bob"])).unwrap();

        let err = Exchange::from_config(&config, roster).unwrap_err();
        assert!(err.to_string().contains("unknown participant 'Zed'"));
    }

    #[test]
    fn test_from_config_insufficient_admins_is_draw_error() {
        let config = SantaConfig::default();
        let roster = Roster::new(names(&["Ann", "Bob"]), names(&["Ann"])).unwrap();

        let err = Exchange::from_config(&config, roster).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DrawError>(),
            Some(&DrawError::InsufficientAdmins { found: 1 })
        );
    }
}
