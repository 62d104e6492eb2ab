/// Decoding of the club spreadsheet export.
///
/// Header names are the literal column names of the export; `email` holds the student
/// leader addresses and `email.2` the teacher addresses.
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceRow {
    #[serde(default)]
    pub club_name: String,
    #[serde(default)]
    pub club_description: String,
    #[serde(default)]
    pub meeting_day: String,
    #[serde(default)]
    pub meeting_time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub year_groups: String,
    #[serde(default, rename = "student_leaders_2025_26")]
    pub student_leaders: String,
    #[serde(default, rename = "email")]
    pub leader_emails: String,
    #[serde(default)]
    pub teacher_advisors: String,
    #[serde(default, rename = "email.2")]
    pub teacher_emails: String,
    #[serde(default)]
    pub contact_notes: String,
    #[serde(default)]
    pub special_conditions: Option<String>,
    #[serde(default)]
    pub application_questions: Option<String>,
}

/// Parses CSV text with a header row. Short rows, extra columns and a leading BOM are tolerated.
///
/// Returns the rows with their 1-based data row numbers.
pub fn parse_rows(content: &str) -> Result<Vec<(usize, SourceRow)>, csv::Error> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<SourceRow>().enumerate() {
        rows.push((idx + 1, record?));
    }
    Ok(rows)
}
