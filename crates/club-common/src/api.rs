use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Join request posted by the club join form.
///
/// Every field tolerates absence so that validation, not deserialization, reports what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinSubmission {
    #[serde(default)]
    pub club_id: Option<String>,
    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    StudentId,
    ClubId,
}

impl JoinSubmission {
    /// A submission needs a non-blank student id and club id. Nothing else is checked.
    pub fn validate(&self) -> Result<(), MissingField> {
        if is_blank(self.student_id.as_deref()) {
            return Err(MissingField::StudentId);
        }
        if is_blank(self.club_id.as_deref()) {
            return Err(MissingField::ClubId);
        }
        Ok(())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinAck {
    pub success: bool,
    pub message: String,
}

impl JoinAck {
    pub fn received() -> Self {
        Self {
            success: true,
            message: "Registration received".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
