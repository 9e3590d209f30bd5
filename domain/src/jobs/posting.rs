//! Job posting value object

use serde::{Deserialize, Serialize};

/// One posting extracted from the job board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    /// The `id` query parameter of the link, empty when absent
    pub id: String,
    pub title: String,
    /// Absolute link to the posting; postings are unique by link
    pub link: String,
    pub location: String,
    pub description: String,
}

impl JobPosting {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            link: link.into(),
            location: String::new(),
            description: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let job = JobPosting::new("https://jobs.rwfm.tamu.edu/view-job/?id=42")
            .with_id("42")
            .with_title("Field Technician")
            .with_location("College Station, TX");
        assert!(job.has_id());
        assert_eq!(job.title, "Field Technician");
        assert!(job.description.is_empty());
    }

    #[test]
    fn test_missing_id() {
        assert!(!JobPosting::new("https://example.com/view-job").has_id());
    }
}
