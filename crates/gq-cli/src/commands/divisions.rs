use comfy_table::{ContentArrangement, Table};

use gq_core::Conference;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Division", "Conference", "Teams"]);

    let mut idx = 1;
    for conference in Conference::ALL {
        for division in conference.divisions() {
            let teams = division
                .teams()
                .iter()
                .map(|t| t.abbr.to_uppercase())
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(vec![
                idx.to_string(),
                division.to_string(),
                conference.to_string(),
                teams,
            ]);
            idx += 1;
        }
    }

    println!("{table}");
    Ok(())
}
