//! Image URLs on the third-party image host.
//!
//! Frontends that cannot show images render the text fallback instead.

const LOGO_BASE: &str = "https://a.espncdn.com/i/teamlogos/nfl/500";
const HEADSHOT_BASE: &str = "https://a.espncdn.com/i/headshots/nfl/players/full";

/// Logo URL for a team short code.
pub fn logo_url(abbr: &str) -> String {
    format!("{LOGO_BASE}/{abbr}.png")
}

/// Headshot URL for an athlete id.
pub fn headshot_url(athlete_id: &str) -> String {
    format!("{HEADSHOT_BASE}/{athlete_id}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_patterns() {
        assert_eq!(
            logo_url("buf"),
            "https://a.espncdn.com/i/teamlogos/nfl/500/buf.png"
        );
        assert_eq!(
            headshot_url("3918298"),
            "https://a.espncdn.com/i/headshots/nfl/players/full/3918298.png"
        );
    }
}
