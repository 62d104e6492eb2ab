/// Read-only view over the generated `clubs.json` artifact.
///
/// The catalog is loaded once and never mutated; regeneration replaces the file.
use std::path::Path;

use tracing::debug;

use crate::error::CommonError;
use crate::model::ClubRecord;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ClubRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<ClubRecord>) -> Self {
        Self { records }
    }

    pub fn load(path: &Path) -> Result<Self, CommonError> {
        if !path.is_file() {
            return Err(CommonError::CatalogNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let records: Vec<ClubRecord> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), records = records.len(), "catalog loaded");
        Ok(Self { records })
    }

    /// Every record in file order, placeholder included.
    pub fn records(&self) -> &[ClubRecord] {
        &self.records
    }

    /// Real clubs only.
    pub fn clubs(&self) -> impl Iterator<Item = &ClubRecord> {
        self.records.iter().filter(|c| !c.is_sentinel())
    }

    pub fn get(&self, id: &str) -> Option<&ClubRecord> {
        self.clubs().find(|c| c.id == id)
    }

    pub fn featured(&self, count: usize) -> Vec<&ClubRecord> {
        self.clubs().take(count).collect()
    }

    pub fn for_year(&self, year: u32) -> Vec<&ClubRecord> {
        self.clubs().filter(|c| c.covers_year(year)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(id: &str, min: u32, max: u32) -> ClubRecord {
        let mut c = ClubRecord::sentinel();
        c.id = id.to_string();
        c.name = id.to_uppercase();
        c.accepting = true;
        c.year_group_min = min;
        c.year_group_max = max;
        c
    }

    fn sample() -> Catalog {
        Catalog::from_records(vec![
            club("mun", 9, 13),
            club("tedx", 10, 12),
            club("spark-club", 7, 9),
            ClubRecord::sentinel(),
        ])
    }

    #[test]
    fn year_filter_excludes_sentinel() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.for_year(9).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["mun", "spark-club"]);
        // the placeholder spans 7..=13 but is never a match
        assert!(catalog.for_year(7).iter().all(|c| !c.is_sentinel()));
    }

    #[test]
    fn get_never_returns_sentinel() {
        let catalog = sample();
        assert!(catalog.get("blank").is_none());
        assert_eq!(catalog.get("tedx").map(|c| c.year_group_min), Some(10));
        assert!(catalog.get("chess").is_none());
    }

    #[test]
    fn featured_takes_leading_real_clubs() {
        let catalog = sample();
        assert_eq!(catalog.featured(6).len(), 3);
        assert_eq!(catalog.featured(2)[1].id, "tedx");
        assert_eq!(catalog.records().len(), 4);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("clubs.json")).unwrap_err();
        assert!(matches!(err, CommonError::CatalogNotFound(_)));
    }

    #[test]
    fn load_reads_written_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clubs.json");
        let json = serde_json::to_string_pretty(sample().records()).unwrap();
        std::fs::write(&path, json).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.records().len(), 4);
        assert_eq!(catalog.clubs().count(), 3);
    }
}
