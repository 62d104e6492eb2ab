/// Club category used to pick a theme and the card pill label.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClubCategory {
    Charity,
    Academic,
    PerformingArts,
    Leadership,
    Other,
}

const CATEGORY_BY_ID: &[(&str, ClubCategory)] = &[
    ("operation-smile", ClubCategory::Charity),
    ("unicef-ambassador", ClubCategory::Charity),
    ("spark-club", ClubCategory::Charity),
    ("eco-committee", ClubCategory::Charity),
    ("mun", ClubCategory::Academic),
    ("tedx", ClubCategory::Academic),
    ("school-show", ClubCategory::PerformingArts),
    ("duke-of-edinburgh", ClubCategory::Leadership),
    ("interact-club", ClubCategory::Leadership),
];

/// Unknown identifiers fall back to `Other`.
pub fn category_for(club_id: &str) -> ClubCategory {
    CATEGORY_BY_ID
        .iter()
        .find(|(id, _)| *id == club_id)
        .map(|(_, category)| *category)
        .unwrap_or(ClubCategory::Other)
}

impl ClubCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Charity => "Charity",
            Self::Academic => "Academic",
            Self::PerformingArts => "Performing Arts",
            Self::Leadership => "Leadership",
            Self::Other => "Other",
        }
    }

    /// Heading of the one category-specific section on a club page.
    pub fn personalization_title(self) -> &'static str {
        match self {
            Self::Charity => "Impact & Outreach",
            Self::Academic => "What You'll Learn",
            Self::PerformingArts => "Past Highlights",
            Self::Leadership => "Skills You'll Gain",
            Self::Other => "About",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_map_to_their_category() {
        assert_eq!(category_for("mun"), ClubCategory::Academic);
        assert_eq!(category_for("school-show"), ClubCategory::PerformingArts);
        assert_eq!(category_for("interact-club"), ClubCategory::Leadership);
        assert_eq!(category_for("eco-committee"), ClubCategory::Charity);
    }

    #[test]
    fn unknown_ids_fall_back_to_other() {
        assert_eq!(category_for("chess"), ClubCategory::Other);
        assert_eq!(category_for(""), ClubCategory::Other);
        assert_eq!(category_for("blank").label(), "Other");
    }

    #[test]
    fn serializes_kebab_case() {
        let json = serde_json::to_string(&ClubCategory::PerformingArts).unwrap();
        assert_eq!(json, r#""performing-arts""#);
    }
}
