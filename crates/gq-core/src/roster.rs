//! Starting quarterbacks, loaded once from a pre-fetched snapshot.
//!
//! The snapshot is produced by the offline collection step (`gq-fetch`) and
//! treated as read-only for the process lifetime. Build one [`QbRoster`] at
//! startup and hand out references to it.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::league::team_by_abbr;
use crate::oracle::shuffle;

/// Snapshot compiled into the crate, used when no `--data` file is given.
const BUNDLED_SNAPSHOT: &str = include_str!("../data/qb_data.json");

/// A starting quarterback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quarterback {
    /// Display name, unique within a snapshot.
    pub name: String,
    /// Identifier on the image host, used for headshots.
    pub athlete_id: String,
    /// Short code of the team he starts for. Not checked against the league.
    pub team_abbr: String,
}

/// The on-disk snapshot format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QbSnapshot {
    /// Date the snapshot was collected.
    pub last_updated: NaiveDate,
    /// One entry per team whose starter could be resolved.
    pub qbs: Vec<Quarterback>,
}

/// Read-only quarterback table.
#[derive(Debug, Clone)]
pub struct QbRoster {
    last_updated: NaiveDate,
    qbs: Vec<Quarterback>,
}

impl QbRoster {
    /// Build a roster from a snapshot, rejecting duplicate names.
    pub fn from_snapshot(snapshot: QbSnapshot) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        for qb in &snapshot.qbs {
            if !seen.insert(qb.name.as_str()) {
                return Err(CoreError::DuplicateQuarterback(qb.name.clone()));
            }
        }

        let roster = Self {
            last_updated: snapshot.last_updated,
            qbs: snapshot.qbs,
        };
        for qb in roster.dangling_team_refs() {
            tracing::warn!(qb = %qb.name, team = %qb.team_abbr, "quarterback references unknown team");
        }
        tracing::debug!(count = roster.len(), last_updated = %roster.last_updated, "loaded quarterback roster");
        Ok(roster)
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let snapshot: QbSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Load a snapshot file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The snapshot shipped with the crate.
    pub fn bundled() -> CoreResult<Self> {
        Self::from_json(BUNDLED_SNAPSHOT)
    }

    /// Load `path` if given, otherwise the bundled snapshot.
    pub fn load_or_bundled(path: Option<&Path>) -> CoreResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::bundled(),
        }
    }

    /// Date the snapshot was collected.
    pub fn last_updated(&self) -> NaiveDate {
        self.last_updated
    }

    /// Quarterbacks in snapshot order.
    pub fn all(&self) -> &[Quarterback] {
        &self.qbs
    }

    /// Number of quarterbacks.
    pub fn len(&self) -> usize {
        self.qbs.len()
    }

    /// Whether the snapshot resolved no starters at all.
    pub fn is_empty(&self) -> bool {
        self.qbs.is_empty()
    }

    /// A freshly shuffled copy of the roster.
    ///
    /// Every call produces an independent order. Sessions that need a stable
    /// order must call this once and keep the result.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Quarterback> {
        shuffle(&self.qbs, rng)
    }

    /// The team short code for this exact quarterback name.
    pub fn team_for(&self, qb_name: &str) -> Option<&str> {
        self.by_name(qb_name).map(|qb| qb.team_abbr.as_str())
    }

    /// Find a quarterback by exact name.
    pub fn by_name(&self, name: &str) -> Option<&Quarterback> {
        self.qbs.iter().find(|q| q.name == name)
    }

    /// The quarterback starting for this team, if any.
    pub fn by_team(&self, team_abbr: &str) -> Option<&Quarterback> {
        self.qbs.iter().find(|q| q.team_abbr == team_abbr)
    }

    /// Quarterbacks whose team short code is not in the league table.
    pub fn dangling_team_refs(&self) -> impl Iterator<Item = &Quarterback> {
        self.qbs
            .iter()
            .filter(|q| team_by_abbr(&q.team_abbr).is_none())
    }

    /// Back to the on-disk representation.
    pub fn to_snapshot(&self) -> QbSnapshot {
        QbSnapshot {
            last_updated: self.last_updated,
            qbs: self.qbs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::league::TOTAL_TEAMS;

    const SMALL: &str = r#"{
        "lastUpdated": "2025-09-01",
        "qbs": [
            { "name": "Josh Allen", "athleteId": "3918298", "teamAbbr": "buf" },
            { "name": "Lamar Jackson", "athleteId": "3916387", "teamAbbr": "bal" },
            { "name": "Nobody", "athleteId": "1", "teamAbbr": "oak" }
        ]
    }"#;

    #[test]
    fn parse_small_snapshot() {
        let roster = QbRoster::from_json(SMALL).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(
            roster.last_updated(),
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
        );
        assert_eq!(roster.team_for("Josh Allen"), Some("buf"));
        assert_eq!(roster.team_for("josh allen"), None);
        assert_eq!(roster.by_team("bal").unwrap().name, "Lamar Jackson");
        assert!(roster.by_team("kc").is_none());
    }

    #[test]
    fn dangling_refs_are_reported_not_rejected() {
        let roster = QbRoster::from_json(SMALL).unwrap();
        let dangling: Vec<_> = roster.dangling_team_refs().map(|q| q.name.as_str()).collect();
        assert_eq!(dangling, ["Nobody"]);
    }

    #[test]
    fn duplicate_names_rejected() {
        let json = r#"{ "lastUpdated": "2025-09-01", "qbs": [
            { "name": "A", "athleteId": "1", "teamAbbr": "buf" },
            { "name": "A", "athleteId": "2", "teamAbbr": "mia" }
        ] }"#;
        assert!(matches!(
            QbRoster::from_json(json),
            Err(CoreError::DuplicateQuarterback(name)) if name == "A"
        ));
    }

    #[test]
    fn malformed_snapshot() {
        assert!(matches!(
            QbRoster::from_json("{\"qbs\": []}"),
            Err(CoreError::Json(_))
        ));
    }

    #[test]
    fn load_missing_file() {
        let err = QbRoster::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
        assert!(err.to_string().contains("here.json"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qbs.json");
        std::fs::write(&path, SMALL).unwrap();
        let roster = QbRoster::load_or_bundled(Some(&path)).unwrap();
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn bundled_snapshot_covers_league() {
        let roster = QbRoster::bundled().unwrap();
        assert_eq!(roster.len(), TOTAL_TEAMS);
        assert_eq!(roster.dangling_team_refs().count(), 0);
        assert_eq!(roster.team_for("Josh Allen"), Some("buf"));
        let teams: HashSet<_> = roster.all().iter().map(|q| q.team_abbr.as_str()).collect();
        assert_eq!(teams.len(), TOTAL_TEAMS);
    }

    #[test]
    fn shuffled_is_fresh_each_call() {
        let roster = QbRoster::bundled().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let a = roster.shuffled(&mut rng);
        let b = roster.shuffled(&mut rng);
        assert_eq!(a.len(), roster.len());
        assert_ne!(a, b);
        assert_eq!(roster.all()[0].name, "Josh Allen");
    }

    #[test]
    fn snapshot_field_names() {
        let roster = QbRoster::from_json(SMALL).unwrap();
        let json = serde_json::to_string(&roster.to_snapshot()).unwrap();
        assert!(json.contains("\"lastUpdated\":\"2025-09-01\""));
        assert!(json.contains("\"athleteId\":\"3918298\""));
        assert!(json.contains("\"teamAbbr\":\"buf\""));
    }
}
