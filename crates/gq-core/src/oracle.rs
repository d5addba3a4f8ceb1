//! Pure queries over the league table: flattening, division lookup, random
//! selection, and shuffling.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::league::{Division, TEAMS, Team};

/// Every team, flattened in declaration order.
///
/// The order is fixed for the life of the process, so index-based views stay
/// consistent across calls.
pub fn all_teams() -> &'static [Team] {
    &TEAMS
}

/// The division of the team with this exact (case-sensitive) name.
///
/// Returns `None` for unknown teams.
pub fn division_of(team_name: &str) -> Option<Division> {
    TEAMS
        .iter()
        .position(|t| t.name == team_name)
        .map(Division::for_table_index)
}

/// A uniformly random team. Repeats are possible.
pub fn random_team<R: Rng + ?Sized>(rng: &mut R) -> &'static Team {
    &TEAMS[rng.random_range(0..TEAMS.len())]
}

/// A fresh uniformly random permutation of `items` (Fisher-Yates).
///
/// The input is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::league::TOTAL_TEAMS;

    #[test]
    fn all_teams_is_stable() {
        let first: Vec<_> = all_teams().iter().map(|t| t.abbr).collect();
        let second: Vec<_> = all_teams().iter().map(|t| t.abbr).collect();
        assert_eq!(first.len(), TOTAL_TEAMS);
        assert_eq!(first, second);
        assert_eq!(first[0], "buf");
        assert_eq!(first[TOTAL_TEAMS - 1], "sea");
    }

    #[test]
    fn division_lookup_reconstructs_table() {
        let mut rebuilt: HashMap<Division, Vec<&str>> = HashMap::new();
        for team in all_teams() {
            let d = division_of(team.name).expect("every team has a division");
            rebuilt.entry(d).or_default().push(team.name);
        }
        assert_eq!(rebuilt.len(), 8);
        for d in Division::ALL {
            let expected: Vec<_> = d.teams().iter().map(|t| t.name).collect();
            assert_eq!(rebuilt[&d], expected);
        }
    }

    #[test]
    fn division_lookup_misses() {
        assert_eq!(division_of("Buffalo Bills"), Some(Division::AfcEast));
        assert_eq!(division_of("buffalo bills"), None);
        assert_eq!(division_of("Oakland Raiders"), None);
        assert_eq!(division_of(""), None);
    }

    #[test]
    fn random_team_covers_league() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            seen.insert(random_team(&mut rng).abbr);
        }
        assert_eq!(seen.len(), TOTAL_TEAMS);
    }

    #[test]
    fn shuffle_leaves_input_alone() {
        let input: Vec<u32> = (0..32).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let out = shuffle(&input, &mut rng);
        assert_eq!(input, (0..32).collect::<Vec<_>>());
        assert_ne!(out, input, "seed 1 should move something");
    }

    #[test]
    fn shuffle_varies_between_calls() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = shuffle(all_teams(), &mut rng);
        let b = shuffle(all_teams(), &mut rng);
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn shuffle_is_permutation(items in proptest::collection::vec(any::<u16>(), 0..64), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = shuffle(&items, &mut rng);
            prop_assert_eq!(out.len(), items.len());
            let mut a = items.clone();
            let mut b = out;
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }
    }
}
