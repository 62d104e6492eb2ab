use std::sync::LazyLock;

use regex::Regex;

use club_common::model::{ClubLeader, ClubTeacher, MAX_YEAR_GROUP, MIN_YEAR_GROUP};

const TAGLINE_FALLBACK_CHARS: usize = 120;

static YEAR_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Y?\s*(\d+)\s*[-–]\s*Y?\s*(\d+)").expect("valid regex"));
static SINGLE_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Y?\s*(\d+)").expect("valid regex"));
static YEAR_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Y\d+$").expect("valid regex"));
static LEADER_EMAIL_SEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;\s]+").expect("valid regex"));
static ADVISOR_SEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: u32,
    pub max: u32,
    /// True when the label held no usable number and the full school span was assumed.
    pub defaulted: bool,
}

/// Trims and collapses internal whitespace runs to a single space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Blank cells and a literal "none" (any case) become `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    let s = value?.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(s.to_string())
    }
}

/// First sentence of the description, or its first 120 characters when it has no terminator.
pub fn tagline(description: &str) -> String {
    let trimmed = description.trim();
    match trimmed.find(['.', '!', '?']) {
        Some(idx) => trimmed[..=idx].trim().to_string(),
        None => trimmed.chars().take(TAGLINE_FALLBACK_CHARS).collect(),
    }
}

pub fn parse_year_range(label: &str) -> YearRange {
    let label = label.trim();
    let parsed = match YEAR_RANGE_RE.captures(label) {
        Some(caps) => caps[1].parse::<u32>().ok().zip(caps[2].parse::<u32>().ok()),
        None => SINGLE_YEAR_RE
            .captures(label)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .map(|year| (year, year)),
    };

    match parsed {
        Some((a, b)) => YearRange {
            min: a.min(b),
            max: a.max(b),
            defaulted: false,
        },
        None => YearRange {
            min: MIN_YEAR_GROUP,
            max: MAX_YEAR_GROUP,
            defaulted: true,
        },
    }
}

/// Pairs "<name words> Y<n>" entries in the roster with the email list by position.
///
/// Words after the last year indicator belong to no leader and are dropped. Missing
/// emails become empty strings.
pub fn parse_leaders(roster: &str, emails: &str) -> Vec<ClubLeader> {
    if roster.trim().is_empty() || emails.trim().is_empty() {
        return Vec::new();
    }
    let emails: Vec<&str> = LEADER_EMAIL_SEP_RE
        .split(emails)
        .filter(|e| !e.is_empty())
        .collect();

    let mut leaders = Vec::new();
    let mut name_words: Vec<&str> = Vec::new();
    for token in roster.split_whitespace() {
        let bare = token.trim_end_matches([',', ';']);
        if YEAR_TOKEN_RE.is_match(bare) {
            if name_words.is_empty() {
                continue;
            }
            let email = emails.get(leaders.len()).copied().unwrap_or_default();
            leaders.push(ClubLeader {
                name: name_words.join(" "),
                year: Some(bare.to_string()),
                email: email.to_string(),
            });
            name_words.clear();
            continue;
        }
        let word = token.trim_matches([',', ';']);
        if word.chars().any(char::is_alphanumeric) {
            name_words.push(word);
        }
    }
    leaders
}

/// Advisor names are separated by runs of two or more spaces; emails by any whitespace.
pub fn parse_teachers(advisors: &str, emails: &str) -> Vec<ClubTeacher> {
    if advisors.trim().is_empty() || emails.trim().is_empty() {
        return Vec::new();
    }
    let emails: Vec<&str> = emails.split_whitespace().collect();
    ADVISOR_SEP_RE
        .split(advisors)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .enumerate()
        .map(|(i, name)| ClubTeacher {
            name: name.to_string(),
            email: emails.get(i).copied().unwrap_or_default().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_from_to() {
        let r = parse_year_range("Y7-Y9");
        assert_eq!((r.min, r.max, r.defaulted), (7, 9, false));
        let r = parse_year_range("y10 – y13");
        assert_eq!((r.min, r.max), (10, 13));
        let r = parse_year_range("Years 7 - 9");
        assert_eq!((r.min, r.max), (7, 9));
    }

    #[test]
    fn year_range_single() {
        let r = parse_year_range("Y10");
        assert_eq!((r.min, r.max, r.defaulted), (10, 10, false));
    }

    #[test]
    fn year_range_defaults_to_full_span() {
        for label in ["", "   ", "All years", "Open to everyone"] {
            let r = parse_year_range(label);
            assert_eq!((r.min, r.max, r.defaulted), (7, 13, true), "label {label:?}");
        }
    }

    #[test]
    fn year_range_reversed_is_ordered() {
        let r = parse_year_range("Y11-Y9");
        assert_eq!((r.min, r.max), (9, 11));
    }

    #[test]
    fn tagline_takes_first_sentence() {
        assert_eq!(tagline("  We debate. We travel."), "We debate.");
        assert_eq!(tagline("Ready to act? Join now."), "Ready to act?");
        assert_eq!(tagline("Sing! Dance."), "Sing!");
    }

    #[test]
    fn tagline_without_terminator_is_capped() {
        let long = "a".repeat(200);
        assert_eq!(tagline(&long).chars().count(), 120);
        assert_eq!(tagline("no terminator here"), "no terminator here");
        assert_eq!(tagline(""), "");
    }

    #[test]
    fn none_normalization() {
        assert_eq!(normalize_optional(Some("None")), None);
        assert_eq!(normalize_optional(Some(" NONE ")), None);
        assert_eq!(normalize_optional(Some("")), None);
        assert_eq!(normalize_optional(None), None);
        assert_eq!(
            normalize_optional(Some(" Bring a water bottle ")),
            Some("Bring a water bottle".to_string())
        );
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(collapse_whitespace("  3:30pm \n -  4:30pm "), "3:30pm - 4:30pm");
    }

    #[test]
    fn leaders_pair_with_emails_by_position() {
        let leaders = parse_leaders(
            "Ana Li Y12 Ben Ortiz Y11",
            "ana@school.org; ben@school.org",
        );
        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].name, "Ana Li");
        assert_eq!(leaders[0].year.as_deref(), Some("Y12"));
        assert_eq!(leaders[0].email, "ana@school.org");
        assert_eq!(leaders[1].name, "Ben Ortiz");
        assert_eq!(leaders[1].email, "ben@school.org");
    }

    #[test]
    fn leader_without_email_gets_empty_string() {
        let leaders = parse_leaders("Ana Y12, Ben Y11", "ana@school.org");
        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].year.as_deref(), Some("Y12"));
        assert_eq!(leaders[1].name, "Ben");
        assert_eq!(leaders[1].email, "");
    }

    #[test]
    fn leaders_drop_connectors_and_trailing_words() {
        let leaders = parse_leaders("Ana Y12 & Ben Y11 (tbc)", "a@x b@x");
        let names: Vec<&str> = leaders.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Ben"]);
    }

    #[test]
    fn leaders_empty_when_either_side_missing() {
        assert!(parse_leaders("Ana Y12", "").is_empty());
        assert!(parse_leaders("", "ana@school.org").is_empty());
        assert!(parse_leaders("No year given", "x@y").is_empty());
    }

    #[test]
    fn teachers_split_on_wide_gaps() {
        let teachers = parse_teachers("Mr Cole   Ms Patel  Dr Wu", "cole@x patel@x");
        assert_eq!(teachers.len(), 3);
        assert_eq!(teachers[0].name, "Mr Cole");
        assert_eq!(teachers[1].name, "Ms Patel");
        assert_eq!(teachers[1].email, "patel@x");
        assert_eq!(teachers[2].name, "Dr Wu");
        assert_eq!(teachers[2].email, "");
    }

    #[test]
    fn teachers_empty_when_either_side_missing() {
        assert!(parse_teachers("Mr Cole", "  ").is_empty());
        assert!(parse_teachers("", "cole@x").is_empty());
    }
}
