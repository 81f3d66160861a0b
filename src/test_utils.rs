#[cfg(test)]
pub mod fixtures {
    use std::collections::{BTreeSet, HashMap};

    use crate::models::domain::{CourseRecord, DegreeRequirementEntry, RawOffering};
    use crate::repositories::InMemoryCourseDataStore;

    /// Catalog with a short IESM prerequisite chain plus one unrelated course.
    pub fn iesm_catalog() -> Vec<CourseRecord> {
        vec![
            CourseRecord::new("IESM101", "Engineering Statistics", ""),
            CourseRecord::new("IESM210", "Operations Research", "Prerequisite: IESM101")
                .with_description("Linear programming, duality and network models."),
            CourseRecord::new("IESM220", "Project Management", ""),
            CourseRecord::new("IESM310", "Stochastic Models", "IESM210"),
            CourseRecord::new("ART100", "Drawing", ""),
        ]
    }

    /// Semester schedule with two sections of IESM210 and one row lacking a code.
    pub fn iesm_offerings() -> Vec<RawOffering> {
        vec![
            RawOffering::new("Engineering Statistics\n\n(IESM101)", "A", "3"),
            RawOffering::new("Operations Research\n\n(IESM210)", "A", "3"),
            RawOffering::new("Operations Research\n\n(IESM210)", "B", "3"),
            RawOffering::new("Project Management\n\n(IESM220)", "A", "3"),
            RawOffering::new("Stochastic Models\n\n(IESM310)", "A", "3"),
            RawOffering::new("Drawing\n\n(ART100)", "A", "1"),
            RawOffering::new("Graduate Seminar", "A", "0"),
        ]
    }

    pub fn iesm_store() -> InMemoryCourseDataStore {
        let mut requirements = HashMap::new();
        requirements.insert(
            "ms_iesm".to_string(),
            DegreeRequirementEntry::new(
                "MS IESM",
                "Core courses: IESM101, IESM210, IESM220, IESM310. Capstone: IESM399.",
            ),
        );

        InMemoryCourseDataStore {
            catalog: iesm_catalog(),
            offerings: iesm_offerings(),
            requirements,
            restrictions: HashMap::new(),
        }
    }

    pub fn iesm_store_with_restrictions(allowed: &[&str]) -> InMemoryCourseDataStore {
        let mut store = iesm_store();
        let codes: BTreeSet<String> = allowed.iter().map(|c| c.to_string()).collect();
        store.restrictions.insert("ms_iesm".to_string(), codes);
        store
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_offerings_include_duplicate_sections() {
        let offerings = iesm_offerings();
        let sections = offerings
            .iter()
            .filter(|o| o.course.ends_with("(IESM210)"))
            .count();
        assert_eq!(sections, 2);
    }

    #[test]
    fn test_fixture_store_has_iesm_requirements() {
        let store = iesm_store();
        assert!(store.requirements.contains_key("ms_iesm"));
        assert!(store.restrictions.is_empty());
    }
}
