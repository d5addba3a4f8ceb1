//! Sports data API team ids keyed by the quiz's team abbreviations.

/// `(abbreviation, api team id)` in league declaration order.
pub const TEAM_IDS: [(&str, u32); 32] = [
    // AFC East
    ("buf", 2),
    ("mia", 15),
    ("ne", 17),
    ("nyj", 20),
    // AFC North
    ("bal", 33),
    ("cin", 4),
    ("cle", 5),
    ("pit", 23),
    // AFC South
    ("hou", 34),
    ("ind", 11),
    ("jax", 30),
    ("ten", 10),
    // AFC West
    ("den", 7),
    ("kc", 12),
    ("lv", 13),
    ("lac", 24),
    // NFC East
    ("dal", 6),
    ("nyg", 19),
    ("phi", 21),
    ("wsh", 28),
    // NFC North
    ("chi", 3),
    ("det", 8),
    ("gb", 9),
    ("min", 16),
    // NFC South
    ("atl", 1),
    ("car", 29),
    ("no", 18),
    ("tb", 27),
    // NFC West
    ("ari", 22),
    ("la", 14),
    ("sf", 25),
    ("sea", 26),
];

/// API team id for an abbreviation.
pub fn team_id(abbr: &str) -> Option<u32> {
    TEAM_IDS.iter().find(|(a, _)| *a == abbr).map(|(_, id)| *id)
}
