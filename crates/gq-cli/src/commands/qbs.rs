use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use gq_core::assets::headshot_url;
use gq_core::league::team_by_abbr;

pub fn run(data: Option<&Path>, team: Option<&str>, json: bool, urls: bool) -> Result<(), String> {
    let roster = super::load_roster(data)?;

    if json {
        let out = serde_json::to_string_pretty(&roster.to_snapshot())
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let qbs: Vec<_> = match team {
        Some(abbr) => {
            let abbr = abbr.to_lowercase();
            team_by_abbr(&abbr).ok_or_else(|| format!("unknown team abbreviation: \"{abbr}\""))?;
            roster.by_team(&abbr).into_iter().collect()
        }
        None => roster.all().iter().collect(),
    };

    if qbs.is_empty() {
        println!("  No quarterbacks found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Quarterback", "Team", "Athlete ID"];
    if urls {
        header.push("Headshot");
    }
    table.set_header(header);

    for qb in &qbs {
        let team_name = team_by_abbr(&qb.team_abbr)
            .map(|t| t.name.to_string())
            .unwrap_or_else(|| qb.team_abbr.clone());
        let mut row = vec![qb.name.clone(), team_name, qb.athlete_id.clone()];
        if urls {
            row.push(headshot_url(&qb.athlete_id));
        }
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!(
        "  {} quarterbacks (as of {})",
        qbs.len(),
        roster.last_updated()
    );

    Ok(())
}
