/// Static tables keyed by the club names used in the source spreadsheet.
///
/// Identifiers and image folders are fixed here rather than derived from row text, so a
/// renamed spreadsheet cell cannot silently change a club's URL.
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubIdentity {
    pub id: &'static str,
    pub image_folder: &'static str,
}

const IDENTITIES: &[(&str, ClubIdentity)] = &[
    ("Operation Smile", ClubIdentity { id: "operation-smile", image_folder: "Operation Smile" }),
    ("School Show", ClubIdentity { id: "school-show", image_folder: "School Show" }),
    ("MUN", ClubIdentity { id: "mun", image_folder: "MUN" }),
    ("SPARK Club", ClubIdentity { id: "spark-club", image_folder: "SPARK Club" }),
    ("Interact Club", ClubIdentity { id: "interact-club", image_folder: "Interact Club" }),
    // spelled as in the spreadsheet
    ("Eco Commitee", ClubIdentity { id: "eco-committee", image_folder: "Eco Committee" }),
    ("Duke of Edinburgh", ClubIdentity { id: "duke-of-edinburgh", image_folder: "Duke of Edinburgh" }),
    ("UNICEF Ambassador", ClubIdentity { id: "unicef-ambassador", image_folder: "UNICEF Ambassador" }),
    ("TEDX", ClubIdentity { id: "tedx", image_folder: "TEDX" }),
];

const ROLES_BY_ID: &[(&str, &[&str])] = &[
    ("interact-club", &["Finance", "Events", "Social Media"]),
    ("unicef-ambassador", &["Event team", "Graphics design team"]),
];

static IDENTITY_BY_NAME: LazyLock<HashMap<&'static str, ClubIdentity>> =
    LazyLock::new(|| IDENTITIES.iter().copied().collect());

/// Exact match on the trimmed source name.
pub fn lookup(club_name: &str) -> Option<ClubIdentity> {
    IDENTITY_BY_NAME.get(club_name).copied()
}

pub fn roles_for(club_id: &str) -> Vec<String> {
    ROLES_BY_ID
        .iter()
        .find(|(id, _)| *id == club_id)
        .map(|(_, roles)| roles.iter().map(|r| r.to_string()).collect())
        .unwrap_or_default()
}
