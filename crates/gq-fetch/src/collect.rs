//! Walk the league and assemble the snapshot.

use std::fs;
use std::path::Path;
use std::time::Duration;

use gq_core::roster::{QbSnapshot, Quarterback};

use crate::client::SportsApi;
use crate::error::{FetchError, FetchResult};
use crate::espn::pick_starter;
use crate::team_ids::TEAM_IDS;

/// Resolve the listed starter of one team.
pub async fn starter_for<A: SportsApi>(
    api: &A,
    season: i32,
    abbr: &str,
    team_id: u32,
) -> FetchResult<Quarterback> {
    let chart = api.depth_chart(season, team_id).await?;
    let href = pick_starter(&chart)
        .ok_or_else(|| FetchError::NoQuarterback(abbr.to_string()))?
        .href
        .clone();
    let athlete = api.athlete(&href).await?;
    let id = athlete.id.to_string();
    let name = athlete
        .name()
        .ok_or_else(|| FetchError::MissingName(id.clone()))?
        .to_string();
    Ok(Quarterback {
        name,
        athlete_id: id,
        team_abbr: abbr.to_string(),
    })
}

/// Fetch every team's starter in league order, pausing `delay` between
/// teams. Teams that fail are logged and left out, as is a quarterback
/// already listed for an earlier team.
pub async fn collect_starters<A: SportsApi>(
    api: &A,
    season: i32,
    delay: Duration,
) -> Vec<Quarterback> {
    let mut qbs = Vec::with_capacity(TEAM_IDS.len());
    for (idx, (abbr, team_id)) in TEAM_IDS.iter().enumerate() {
        if idx > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match starter_for(api, season, abbr, *team_id).await {
            Ok(qb) if qbs.iter().any(|q: &Quarterback| q.name == qb.name) => {
                tracing::warn!(team = abbr, qb = %qb.name, "skipped: already listed for another team");
            }
            Ok(qb) => {
                tracing::info!(team = abbr, qb = %qb.name, "starter found");
                qbs.push(qb);
            }
            Err(e) => tracing::warn!(team = abbr, "skipped: {e}"),
        }
    }
    tracing::info!("Fetched {}/{} quarterbacks", qbs.len(), TEAM_IDS.len());
    qbs
}

/// Write `snapshot` as pretty JSON, creating parent directories.
pub fn write_snapshot(path: &Path, snapshot: &QbSnapshot) -> FetchResult<()> {
    let io_err = |source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut json = serde_json::to_string_pretty(snapshot)?;
    json.push('\n');
    fs::write(path, json).map_err(io_err)
}
