//! Response shapes of the sports data API, reduced to the fields we read.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// A team's depth chart: one entry per formation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepthChart {
    /// Formations, each with its own position table.
    #[serde(default)]
    pub items: Vec<Formation>,
}

/// One formation of a depth chart.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Formation {
    /// Positions keyed by their lowercase abbreviation, e.g. `"qb"`.
    #[serde(default)]
    pub positions: HashMap<String, Position>,
}

/// The ordered players listed at one position.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Position {
    /// Players in depth order.
    #[serde(default)]
    pub athletes: Vec<DepthEntry>,
}

/// One player on a depth chart.
#[derive(Debug, Clone, Deserialize)]
pub struct DepthEntry {
    /// Depth rank; 1 is the starter.
    #[serde(default)]
    pub rank: Option<u32>,
    /// Link to the athlete record.
    #[serde(default)]
    pub athlete: Option<ApiRef>,
}

/// A hypermedia link to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiRef {
    /// Absolute URL of the resource.
    #[serde(rename = "$ref")]
    pub href: String,
}

/// The athlete fields the snapshot needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    /// Athlete id; the API sends it as a string but older payloads use numbers.
    pub id: AthleteId,
    /// Preferred name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Fallback name.
    #[serde(default)]
    pub full_name: Option<String>,
}

impl Athlete {
    /// Display name, falling back to full name. Empty names count as missing.
    pub fn name(&self) -> Option<&str> {
        [&self.display_name, &self.full_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|n| !n.trim().is_empty())
    }
}

/// Athlete id as sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AthleteId {
    /// String form, e.g. `"3918298"`.
    Text(String),
    /// Numeric form.
    Number(u64),
}

impl fmt::Display for AthleteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AthleteId::Text(s) => f.write_str(s),
            AthleteId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// The listed starting quarterback: the first formation that has a `qb`
/// position, then the entry ranked 1, else the first entry.
///
/// This mirrors how the depth chart is usually ordered; it is not a
/// guarantee of who actually starts.
pub fn pick_starter(chart: &DepthChart) -> Option<&ApiRef> {
    let qb = chart
        .items
        .iter()
        .find_map(|formation| formation.positions.get("qb"))?;
    qb.athletes
        .iter()
        .find(|entry| entry.rank == Some(1))
        .or_else(|| qb.athletes.first())
        .and_then(|entry| entry.athlete.as_ref())
}
