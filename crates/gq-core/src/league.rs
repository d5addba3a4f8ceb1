//! The static league table: 32 teams in 8 divisions under 2 conferences.
//!
//! Teams are stored in one flat array in declaration order (AFC East, AFC
//! North, AFC South, AFC West, then the NFC in the same order), four per
//! division. A division's teams are the slice at its index.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CoreError;

/// Number of teams in every division.
pub const TEAMS_PER_DIVISION: usize = 4;

/// Number of teams in the league.
pub const TOTAL_TEAMS: usize = 32;

/// An NFL team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Team {
    /// Human-readable name, unique across the league.
    pub name: &'static str,
    /// Short code used as a stable key (e.g. `buf`).
    pub abbr: &'static str,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// One of the two conferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conference {
    /// American Football Conference.
    Afc,
    /// National Football Conference.
    Nfc,
}

impl Conference {
    /// Both conferences, AFC first.
    pub const ALL: [Conference; 2] = [Conference::Afc, Conference::Nfc];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Afc => "AFC",
            Self::Nfc => "NFC",
        }
    }

    /// The conference's divisions in display order (North, East, South, West).
    pub fn divisions(self) -> [Division; 4] {
        match self {
            Self::Afc => [
                Division::AfcNorth,
                Division::AfcEast,
                Division::AfcSouth,
                Division::AfcWest,
            ],
            Self::Nfc => [
                Division::NfcNorth,
                Division::NfcEast,
                Division::NfcSouth,
                Division::NfcWest,
            ],
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the eight divisions.
///
/// Variant order is the table's declaration order, which is also the order of
/// [`crate::oracle::all_teams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Division {
    /// AFC East.
    AfcEast,
    /// AFC North.
    AfcNorth,
    /// AFC South.
    AfcSouth,
    /// AFC West.
    AfcWest,
    /// NFC East.
    NfcEast,
    /// NFC North.
    NfcNorth,
    /// NFC South.
    NfcSouth,
    /// NFC West.
    NfcWest,
}

impl Division {
    /// All divisions in declaration order.
    pub const ALL: [Division; 8] = [
        Division::AfcEast,
        Division::AfcNorth,
        Division::AfcSouth,
        Division::AfcWest,
        Division::NfcEast,
        Division::NfcNorth,
        Division::NfcSouth,
        Division::NfcWest,
    ];

    /// All divisions the way the game boards lay them out: per conference
    /// North, East, South, West.
    pub const DISPLAY_ORDER: [Division; 8] = [
        Division::AfcNorth,
        Division::AfcEast,
        Division::AfcSouth,
        Division::AfcWest,
        Division::NfcNorth,
        Division::NfcEast,
        Division::NfcSouth,
        Division::NfcWest,
    ];

    /// The division key, e.g. `"AFC North"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::AfcEast => "AFC East",
            Self::AfcNorth => "AFC North",
            Self::AfcSouth => "AFC South",
            Self::AfcWest => "AFC West",
            Self::NfcEast => "NFC East",
            Self::NfcNorth => "NFC North",
            Self::NfcSouth => "NFC South",
            Self::NfcWest => "NFC West",
        }
    }

    /// The division name without its conference, e.g. `"North"`.
    pub fn region(self) -> &'static str {
        match self {
            Self::AfcEast | Self::NfcEast => "East",
            Self::AfcNorth | Self::NfcNorth => "North",
            Self::AfcSouth | Self::NfcSouth => "South",
            Self::AfcWest | Self::NfcWest => "West",
        }
    }

    /// The conference this division belongs to.
    pub fn conference(self) -> Conference {
        match self {
            Self::AfcEast | Self::AfcNorth | Self::AfcSouth | Self::AfcWest => Conference::Afc,
            Self::NfcEast | Self::NfcNorth | Self::NfcSouth | Self::NfcWest => Conference::Nfc,
        }
    }

    /// The four teams of this division in declaration order.
    pub fn teams(self) -> &'static [Team] {
        let start = self as usize * TEAMS_PER_DIVISION;
        &TEAMS[start..start + TEAMS_PER_DIVISION]
    }

    /// Division of the team at `index` in the flat table.
    pub(crate) fn for_table_index(index: usize) -> Division {
        Division::ALL[index / TEAMS_PER_DIVISION]
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Division {
    type Err = CoreError;

    /// Parse a division key, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.split_whitespace().collect::<Vec<_>>().join(" ");
        Division::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| CoreError::UnknownDivision(s.to_string()))
    }
}

impl Serialize for Division {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

const fn team(name: &'static str, abbr: &'static str) -> Team {
    Team { name, abbr }
}

pub(crate) static TEAMS: [Team; TOTAL_TEAMS] = [
    // AFC East
    team("Buffalo Bills", "buf"),
    team("Miami Dolphins", "mia"),
    team("New England Patriots", "ne"),
    team("New York Jets", "nyj"),
    // AFC North
    team("Baltimore Ravens", "bal"),
    team("Cincinnati Bengals", "cin"),
    team("Cleveland Browns", "cle"),
    team("Pittsburgh Steelers", "pit"),
    // AFC South
    team("Houston Texans", "hou"),
    team("Indianapolis Colts", "ind"),
    team("Jacksonville Jaguars", "jax"),
    team("Tennessee Titans", "ten"),
    // AFC West
    team("Denver Broncos", "den"),
    team("Kansas City Chiefs", "kc"),
    team("Las Vegas Raiders", "lv"),
    team("Los Angeles Chargers", "lac"),
    // NFC East
    team("Dallas Cowboys", "dal"),
    team("New York Giants", "nyg"),
    team("Philadelphia Eagles", "phi"),
    team("Washington Commanders", "wsh"),
    // NFC North
    team("Chicago Bears", "chi"),
    team("Detroit Lions", "det"),
    team("Green Bay Packers", "gb"),
    team("Minnesota Vikings", "min"),
    // NFC South
    team("Atlanta Falcons", "atl"),
    team("Carolina Panthers", "car"),
    team("New Orleans Saints", "no"),
    team("Tampa Bay Buccaneers", "tb"),
    // NFC West
    team("Arizona Cardinals", "ari"),
    team("Los Angeles Rams", "la"),
    team("San Francisco 49ers", "sf"),
    team("Seattle Seahawks", "sea"),
];

/// Find a team by its exact (case-sensitive) name.
pub fn team_by_name(name: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|t| t.name == name)
}

/// Find a team by its exact short code.
pub fn team_by_abbr(abbr: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|t| t.abbr == abbr)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_division_has_four_teams() {
        for d in Division::ALL {
            assert_eq!(d.teams().len(), TEAMS_PER_DIVISION, "{d}");
        }
    }

    #[test]
    fn names_and_abbrs_are_unique() {
        let names: HashSet<_> = TEAMS.iter().map(|t| t.name).collect();
        let abbrs: HashSet<_> = TEAMS.iter().map(|t| t.abbr).collect();
        assert_eq!(names.len(), TOTAL_TEAMS);
        assert_eq!(abbrs.len(), TOTAL_TEAMS);
    }

    #[test]
    fn division_slices() {
        let east: Vec<_> = Division::AfcEast.teams().iter().map(|t| t.abbr).collect();
        assert_eq!(east, ["buf", "mia", "ne", "nyj"]);
        let west: Vec<_> = Division::NfcWest.teams().iter().map(|t| t.abbr).collect();
        assert_eq!(west, ["ari", "la", "sf", "sea"]);
    }

    #[test]
    fn display_order_is_a_permutation() {
        let all: HashSet<_> = Division::ALL.into_iter().collect();
        let shown: HashSet<_> = Division::DISPLAY_ORDER.into_iter().collect();
        assert_eq!(all, shown);
        assert_eq!(Division::DISPLAY_ORDER[0], Division::AfcNorth);
    }

    #[test]
    fn conference_grouping() {
        for c in Conference::ALL {
            for d in c.divisions() {
                assert_eq!(d.conference(), c);
                assert!(d.name().starts_with(c.name()));
                assert!(d.name().ends_with(d.region()));
            }
        }
    }

    #[test]
    fn parse_division() {
        assert_eq!("AFC East".parse::<Division>().unwrap(), Division::AfcEast);
        assert_eq!("  nfc   west ".parse::<Division>().unwrap(), Division::NfcWest);
        assert!(matches!(
            "AFC Central".parse::<Division>(),
            Err(CoreError::UnknownDivision(_))
        ));
    }

    #[test]
    fn team_lookups() {
        assert_eq!(team_by_abbr("gb").unwrap().name, "Green Bay Packers");
        assert_eq!(team_by_name("Seattle Seahawks").unwrap().abbr, "sea");
        assert!(team_by_name("seattle seahawks").is_none());
        assert!(team_by_abbr("oak").is_none());
    }

    #[test]
    fn division_serializes_as_key() {
        let json = serde_json::to_string(&Division::NfcSouth).unwrap();
        assert_eq!(json, "\"NFC South\"");
    }
}
