use serde::{Deserialize, Serialize};

/// A course description as published in the university catalog.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CourseRecord {
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prerequisites: String,
    #[serde(default)]
    pub credits: Option<f64>,
    #[serde(default)]
    pub faculty: String,
}

impl CourseRecord {
    pub fn new(code: &str, title: &str, prerequisites: &str) -> Self {
        CourseRecord {
            code: code.to_string(),
            title: title.to_string(),
            description: String::new(),
            prerequisites: prerequisites.to_string(),
            credits: None,
            faculty: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// One row of the semester schedule, keyed the way the registrar's table labels its columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawOffering {
    #[serde(rename = "Course", default)]
    pub course: String,
    #[serde(rename = "Section", default)]
    pub section: String,
    #[serde(rename = "Session", default)]
    pub session: String,
    #[serde(rename = "Credits", default)]
    pub credits: String,
    #[serde(rename = "Campus", default)]
    pub campus: String,
    #[serde(rename = "Instructor", default)]
    pub instructor: String,
    #[serde(rename = "Times", default)]
    pub times: String,
    #[serde(rename = "Taken/Seats", default)]
    pub taken_seats: String,
    #[serde(rename = "Spaces Waiting", default)]
    pub spaces_waiting: String,
    #[serde(rename = "Delivery Method", default)]
    pub delivery_method: String,
    #[serde(rename = "Dist. Learning", default)]
    pub distance_learning: String,
    #[serde(rename = "Location", default)]
    pub location: String,
}

impl RawOffering {
    pub fn new(course: &str, section: &str, credits: &str) -> Self {
        RawOffering {
            course: course.to_string(),
            section: section.to_string(),
            credits: credits.to_string(),
            ..Default::default()
        }
    }
}

/// A semester offering joined with its catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedOffering {
    pub code: String,
    pub title: String,
    pub description: String,
    pub prerequisites: String,
    pub credits: f64,
    pub raw: RawOffering,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_offering_reads_scraper_columns() {
        let json = r#"{
            "Course": "Operations Research\n\n(IESM210)",
            "Section": "A",
            "Credits": "3",
            "Times": "MW 10:30-11:50",
            "Taken/Seats": "12/30",
            "Dist. Learning": "No"
        }"#;

        let offering: RawOffering = serde_json::from_str(json).unwrap();
        assert_eq!(offering.section, "A");
        assert_eq!(offering.credits, "3");
        assert_eq!(offering.taken_seats, "12/30");
        assert_eq!(offering.distance_learning, "No");
        assert!(offering.instructor.is_empty());
    }

    #[test]
    fn test_course_record_tolerates_missing_fields() {
        let record: CourseRecord = serde_json::from_str(r#"{"code": "CS101"}"#).unwrap();
        assert_eq!(record.code, "CS101");
        assert!(record.credits.is_none());
        assert!(record.prerequisites.is_empty());
    }
}
