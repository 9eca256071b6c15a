use serde::{Deserialize, Serialize};

/// A seeded job listing. Immutable for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Display text only, never parsed.
    pub salary: String,
    pub description: String,
}

impl Job {
    pub fn new(
        id: u32,
        title: &str,
        company: &str,
        location: &str,
        salary: &str,
        description: &str,
    ) -> Self {
        Job {
            id,
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            salary: salary.to_string(),
            description: description.to_string(),
        }
    }

    /// Whole-string, case-insensitive comparison against the job's location.
    pub fn is_located_in(&self, city: &str) -> bool {
        self.location.to_lowercase() == city.to_lowercase()
    }
}
