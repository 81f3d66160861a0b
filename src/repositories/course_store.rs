use std::collections::{BTreeSet, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{CourseRecord, DegreeRequirementEntry, RawOffering},
};

/// Read-only access to the scraped catalog, the semester schedule and the extracted
/// degree requirements. Every call returns a fresh snapshot.
pub trait CourseDataStore: Send + Sync {
    fn catalog(&self) -> AppResult<Vec<CourseRecord>>;
    fn offerings(&self) -> AppResult<Vec<RawOffering>>;
    fn requirement(&self, program_id: &str) -> AppResult<DegreeRequirementEntry>;
    /// Empty when the program has no course allowlist.
    fn course_restrictions(&self, program_id: &str) -> AppResult<BTreeSet<String>>;
}

/// Backed by the JSON files the scrapers write. Files are re-read on every call.
pub struct JsonCourseDataStore {
    catalog_path: PathBuf,
    offerings_path: PathBuf,
    requirements_path: PathBuf,
    restrictions_path: PathBuf,
}

impl JsonCourseDataStore {
    pub fn new(config: &Config) -> Self {
        Self {
            catalog_path: config.catalog_path.clone(),
            offerings_path: config.offerings_path.clone(),
            requirements_path: config.requirements_path.clone(),
            restrictions_path: config.restrictions_path.clone(),
        }
    }

    pub fn with_paths(
        catalog_path: impl Into<PathBuf>,
        offerings_path: impl Into<PathBuf>,
        requirements_path: impl Into<PathBuf>,
        restrictions_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            offerings_path: offerings_path.into(),
            requirements_path: requirements_path.into(),
            restrictions_path: restrictions_path.into(),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::DataSourceError(format!("failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::DataSourceError(format!("malformed JSON in {}: {}", path.display(), e))
    })
}

impl CourseDataStore for JsonCourseDataStore {
    fn catalog(&self) -> AppResult<Vec<CourseRecord>> {
        let catalog: Vec<CourseRecord> = read_json(&self.catalog_path)?;
        log::debug!("Loaded {} catalog courses", catalog.len());
        Ok(catalog)
    }

    fn offerings(&self) -> AppResult<Vec<RawOffering>> {
        let offerings: Vec<RawOffering> = read_json(&self.offerings_path)?;
        log::debug!("Loaded {} semester offerings", offerings.len());
        Ok(offerings)
    }

    fn requirement(&self, program_id: &str) -> AppResult<DegreeRequirementEntry> {
        let mut all: HashMap<String, DegreeRequirementEntry> = read_json(&self.requirements_path)?;
        match all.remove(program_id) {
            Some(entry) => Ok(entry),
            None => {
                log::warn!("No degree requirements extracted for program {}", program_id);
                Ok(DegreeRequirementEntry::empty_for(program_id))
            }
        }
    }

    fn course_restrictions(&self, program_id: &str) -> AppResult<BTreeSet<String>> {
        if let Err(e) = std::fs::metadata(&self.restrictions_path) {
            if e.kind() == ErrorKind::NotFound {
                return Ok(BTreeSet::new());
            }
        }
        let mut all: HashMap<String, Vec<String>> = read_json(&self.restrictions_path)?;
        Ok(all
            .remove(program_id)
            .map(|codes| codes.into_iter().collect())
            .unwrap_or_default())
    }
}

/// Fixed snapshot of every store, for fixtures and tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCourseDataStore {
    pub catalog: Vec<CourseRecord>,
    pub offerings: Vec<RawOffering>,
    pub requirements: HashMap<String, DegreeRequirementEntry>,
    pub restrictions: HashMap<String, BTreeSet<String>>,
}

impl CourseDataStore for InMemoryCourseDataStore {
    fn catalog(&self) -> AppResult<Vec<CourseRecord>> {
        Ok(self.catalog.clone())
    }

    fn offerings(&self) -> AppResult<Vec<RawOffering>> {
        Ok(self.offerings.clone())
    }

    fn requirement(&self, program_id: &str) -> AppResult<DegreeRequirementEntry> {
        Ok(self
            .requirements
            .get(program_id)
            .cloned()
            .unwrap_or_else(|| DegreeRequirementEntry::empty_for(program_id)))
    }

    fn course_restrictions(&self, program_id: &str) -> AppResult<BTreeSet<String>> {
        Ok(self.restrictions.get(program_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("course-store-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&dir).unwrap();
            TempDir(dir)
        }

        fn write(&self, name: &str, contents: &str) -> PathBuf {
            let path = self.0.join(name);
            std::fs::write(&path, contents).unwrap();
            path
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn store_in(dir: &TempDir) -> JsonCourseDataStore {
        let catalog = dir.write(
            "catalog.json",
            r#"[{"code": "CS101", "title": "Intro", "description": "", "credits": 3.0,
                 "prerequisites": "", "faculty": "CSE"}]"#,
        );
        let offerings = dir.write(
            "offerings.json",
            r#"[{"Course": "Intro\n\n(CS101)", "Section": "A", "Credits": "3"}]"#,
        );
        let requirements = dir.write(
            "requirements.json",
            r#"{"ms_cis": {"program": "MS CIS", "raw_text": "CS101 CS201"}}"#,
        );
        JsonCourseDataStore::with_paths(catalog, offerings, requirements, dir.0.join("missing.json"))
    }

    #[test]
    fn test_reads_every_store() {
        let dir = TempDir::new();
        let store = store_in(&dir);

        assert_eq!(store.catalog().unwrap()[0].credits, Some(3.0));
        assert_eq!(store.offerings().unwrap()[0].section, "A");
        assert_eq!(store.requirement("ms_cis").unwrap().program, "MS CIS");
    }

    #[test]
    fn test_unknown_program_gets_empty_requirement() {
        let dir = TempDir::new();
        let entry = store_in(&dir).requirement("mph").unwrap();

        assert_eq!(entry.program, "Mph");
        assert!(entry.raw_text.is_empty());
    }

    #[test]
    fn test_missing_restrictions_file_means_no_restriction() {
        let dir = TempDir::new();
        assert!(store_in(&dir).course_restrictions("ms_cis").unwrap().is_empty());
    }

    #[test]
    fn test_restrictions_by_program() {
        let dir = TempDir::new();
        let restrictions = dir.write("restrictions.json", r#"{"ms_cis": ["CS101", "CS201"]}"#);
        let store = JsonCourseDataStore::with_paths(
            dir.0.join("catalog.json"),
            dir.0.join("offerings.json"),
            dir.0.join("requirements.json"),
            restrictions,
        );

        assert_eq!(store.course_restrictions("ms_cis").unwrap().len(), 2);
        assert!(store.course_restrictions("mba").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_data_source_error() {
        let dir = TempDir::new();
        let catalog = dir.write("catalog.json", "[{oops");
        let store = JsonCourseDataStore::with_paths(catalog, "a", "b", "c");

        let err = store.catalog().unwrap_err();
        assert!(matches!(err, AppError::DataSourceError(_)));
    }

    #[test]
    fn test_missing_catalog_is_data_source_error() {
        let store = JsonCourseDataStore::with_paths("/nonexistent/catalog.json", "a", "b", "c");
        assert!(matches!(store.catalog(), Err(AppError::DataSourceError(_))));
    }
}
