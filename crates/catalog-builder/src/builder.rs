/// Catalog assembly: source rows in, ordered club records plus the placeholder out.
///
/// Per-row problems never abort a run. They become [`Diagnostic`]s and the row is either
/// skipped or filled with the documented default.
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use club_common::model::ClubRecord;

use crate::error::AppError;
use crate::identity::{self, ClubIdentity};
use crate::images;
use crate::parser;
use crate::source::{self, SourceRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roster {
    Leaders,
    Teachers,
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaders => f.write_str("leader"),
            Self::Teachers => f.write_str("teacher"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    BlankClubName { row: usize },
    UnknownClub { row: usize, name: String },
    DuplicateClub { row: usize, id: String },
    YearGroupDefaulted { id: String, label: String },
    MissingEmail { id: String, roster: Roster, person: String },
    RosterWithoutEmails { id: String, roster: Roster },
    MissingImageFolder { id: String, folder: String },
    UnreadableImageFolder { id: String, folder: String, message: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankClubName { row } => write!(f, "row {row}: blank club name, skipped"),
            Self::UnknownClub { row, name } => {
                write!(f, "row {row}: unknown club name {name:?}, skipped")
            }
            Self::DuplicateClub { row, id } => {
                write!(f, "row {row}: club {id} already emitted, skipped")
            }
            Self::YearGroupDefaulted { id, label } => {
                write!(f, "{id}: year group {label:?} has no year, using 7-13")
            }
            Self::MissingEmail { id, roster, person } => {
                write!(f, "{id}: no email for {roster} {person:?}")
            }
            Self::RosterWithoutEmails { id, roster } => {
                write!(f, "{id}: {roster} roster has no email list, no {roster}s emitted")
            }
            Self::MissingImageFolder { id, folder } => {
                write!(f, "{id}: image folder {folder:?} not found")
            }
            Self::UnreadableImageFolder { id, folder, message } => {
                write!(f, "{id}: image folder {folder:?} unreadable: {message}")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub records: Vec<ClubRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutput {
    /// Real clubs only; the trailing placeholder is not counted.
    pub fn club_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_sentinel()).count()
    }
}

/// Reads the CSV at `source_path` and builds the catalog.
///
/// A missing source file is the only fatal input condition.
pub fn build_catalog(
    source_path: &Path,
    image_root: &Path,
    image_base: &str,
) -> Result<BuildOutput, AppError> {
    if !source_path.is_file() {
        return Err(AppError::SourceNotFound(source_path.display().to_string()));
    }
    let content = std::fs::read_to_string(source_path).map_err(|e| AppError::Source {
        path: source_path.display().to_string(),
        message: e.to_string(),
    })?;
    let rows = source::parse_rows(&content).map_err(|e| AppError::Source {
        path: source_path.display().to_string(),
        message: e.to_string(),
    })?;
    info!(rows = rows.len(), path = %source_path.display(), "source parsed");

    Ok(build_from_rows(rows, image_root, image_base))
}

pub fn build_from_rows(
    rows: Vec<(usize, SourceRow)>,
    image_root: &Path,
    image_base: &str,
) -> BuildOutput {
    let mut records = Vec::new();
    let mut diagnostics = Vec::new();
    let mut seen: HashSet<&'static str> = HashSet::new();

    for (row_no, row) in rows {
        let name = row.club_name.trim();
        if name.is_empty() {
            diagnostics.push(Diagnostic::BlankClubName { row: row_no });
            continue;
        }
        let Some(identity) = identity::lookup(name) else {
            diagnostics.push(Diagnostic::UnknownClub {
                row: row_no,
                name: name.to_string(),
            });
            continue;
        };
        if !seen.insert(identity.id) {
            diagnostics.push(Diagnostic::DuplicateClub {
                row: row_no,
                id: identity.id.to_string(),
            });
            continue;
        }

        let images = match images::discover_images(image_root, identity.image_folder, image_base) {
            Ok(Some(found)) => found,
            Ok(None) => {
                diagnostics.push(Diagnostic::MissingImageFolder {
                    id: identity.id.to_string(),
                    folder: identity.image_folder.to_string(),
                });
                Vec::new()
            }
            Err(e) => {
                diagnostics.push(Diagnostic::UnreadableImageFolder {
                    id: identity.id.to_string(),
                    folder: identity.image_folder.to_string(),
                    message: e.to_string(),
                });
                Vec::new()
            }
        };

        records.push(assemble_record(identity, &row, images, &mut diagnostics));
    }

    records.push(ClubRecord::sentinel());

    for diagnostic in &diagnostics {
        warn!(%diagnostic, "catalog diagnostic");
    }

    BuildOutput {
        records,
        diagnostics,
    }
}

fn assemble_record(
    identity: ClubIdentity,
    row: &SourceRow,
    images: Vec<String>,
    diagnostics: &mut Vec<Diagnostic>,
) -> ClubRecord {
    let id = identity.id.to_string();
    let description = row.club_description.trim().to_string();
    let year_group = row.year_groups.trim().to_string();

    let range = parser::parse_year_range(&year_group);
    if range.defaulted {
        diagnostics.push(Diagnostic::YearGroupDefaulted {
            id: id.clone(),
            label: year_group.clone(),
        });
    }

    let leaders = parser::parse_leaders(&row.student_leaders, &row.leader_emails);
    let teachers = parser::parse_teachers(&row.teacher_advisors, &row.teacher_emails);
    check_roster(&id, Roster::Leaders, &row.student_leaders, &row.leader_emails, diagnostics);
    check_roster(&id, Roster::Teachers, &row.teacher_advisors, &row.teacher_emails, diagnostics);
    for leader in leaders.iter().filter(|l| l.email.is_empty()) {
        diagnostics.push(Diagnostic::MissingEmail {
            id: id.clone(),
            roster: Roster::Leaders,
            person: leader.name.clone(),
        });
    }
    for teacher in teachers.iter().filter(|t| t.email.is_empty()) {
        diagnostics.push(Diagnostic::MissingEmail {
            id: id.clone(),
            roster: Roster::Teachers,
            person: teacher.name.clone(),
        });
    }

    let image = images.first().cloned().unwrap_or_default();

    ClubRecord {
        roles: identity::roles_for(&id),
        id,
        name: row.club_name.trim().to_string(),
        tagline: parser::tagline(&description),
        description,
        meeting_day: parser::collapse_whitespace(&row.meeting_day),
        meeting_time: parser::collapse_whitespace(&row.meeting_time),
        location: parser::collapse_whitespace(&row.location),
        year_group,
        year_group_min: range.min,
        year_group_max: range.max,
        leaders,
        teachers,
        contact: row.contact_notes.trim().to_string(),
        special_conditions: parser::normalize_optional(row.special_conditions.as_deref()),
        application_questions_raw: parser::normalize_optional(
            row.application_questions.as_deref(),
        ),
        questions: Vec::new(),
        accepting: true,
        image,
        images,
    }
}

fn check_roster(
    id: &str,
    roster: Roster,
    names: &str,
    emails: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if !names.trim().is_empty() && emails.trim().is_empty() {
        diagnostics.push(Diagnostic::RosterWithoutEmails {
            id: id.to_string(),
            roster,
        });
    }
}

/// Replaces the artifact at `path` with the pretty-printed catalog.
pub fn write_catalog(path: &Path, records: &[ClubRecord]) -> Result<(), AppError> {
    let mut json = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Output(format!("failed to serialize catalog: {e}")))?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::Output(format!("failed to create {}: {e}", parent.display()))
        })?;
    }
    std::fs::write(path, json)
        .map_err(|e| AppError::Output(format!("failed to write {}: {e}", path.display())))
}
