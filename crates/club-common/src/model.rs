use serde::{Deserialize, Serialize};

/// Reserved identifier of the layout placeholder record. No real club may use it.
pub const SENTINEL_ID: &str = "blank";

/// Youngest year group in the school.
pub const MIN_YEAR_GROUP: u32 = 7;
/// Oldest year group in the school.
pub const MAX_YEAR_GROUP: u32 = 13;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubLeader {
    pub name: String,
    pub year: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubTeacher {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Textarea,
    Select,
    Date,
    Checkbox,
}

/// Structured join-form question. The builder never produces these; they come from elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubQuestion {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_link: Option<String>,
}

/// One entry of the generated catalog, serialized with the field names the site reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRecord {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub meeting_day: String,
    pub meeting_time: String,
    pub location: String,
    pub year_group: String,
    pub year_group_min: u32,
    pub year_group_max: u32,
    pub leaders: Vec<ClubLeader>,
    pub teachers: Vec<ClubTeacher>,
    pub contact: String,
    pub special_conditions: Option<String>,
    pub application_questions_raw: Option<String>,
    pub questions: Vec<ClubQuestion>,
    pub roles: Vec<String>,
    pub accepting: bool,
    pub image: String,
    pub images: Vec<String>,
}

impl ClubRecord {
    /// The placeholder appended after every real club.
    pub fn sentinel() -> Self {
        Self {
            id: SENTINEL_ID.to_string(),
            name: String::new(),
            tagline: String::new(),
            description: String::new(),
            meeting_day: String::new(),
            meeting_time: String::new(),
            location: String::new(),
            year_group: String::new(),
            year_group_min: MIN_YEAR_GROUP,
            year_group_max: MAX_YEAR_GROUP,
            leaders: Vec::new(),
            teachers: Vec::new(),
            contact: String::new(),
            special_conditions: None,
            application_questions_raw: None,
            questions: Vec::new(),
            roles: Vec::new(),
            accepting: false,
            image: String::new(),
            images: Vec::new(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id == SENTINEL_ID
    }

    /// Inclusive year-group range test.
    pub fn covers_year(&self, year: u32) -> bool {
        self.year_group_min <= year && year <= self.year_group_max
    }
}
