use comfy_table::{ContentArrangement, Table};

use gq_core::Division;
use gq_core::assets::logo_url;

pub fn run(division: Option<&str>, urls: bool) -> Result<(), String> {
    let divisions: Vec<Division> = match division {
        Some(name) => vec![name.parse().map_err(|e| format!("{e}"))?],
        None => Division::DISPLAY_ORDER.to_vec(),
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Team", "Abbr", "Division"];
    if urls {
        header.push("Logo");
    }
    table.set_header(header);

    let mut count = 0;
    for div in &divisions {
        for team in div.teams() {
            let mut row = vec![team.name.to_string(), team.abbr.to_string(), div.to_string()];
            if urls {
                row.push(logo_url(team.abbr));
            }
            table.add_row(row);
            count += 1;
        }
    }

    println!("{table}");
    println!();
    println!("  {count} teams");

    Ok(())
}
