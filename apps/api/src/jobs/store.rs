use crate::jobs::models::Job;

/// Fixed, read-only collection of job listings in seed order.
/// Shared behind an `Arc` without locking since nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    pub fn new(jobs: Vec<Job>) -> Self {
        JobStore { jobs }
    }

    /// Store populated with the built-in demo listings.
    pub fn seeded() -> Self {
        JobStore::new(seed_jobs())
    }

    pub fn all(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: u32) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Looks up a job by its raw path segment. Only the leading integer is
    /// read, so `"2abc"` finds job 2; a segment without one matches nothing.
    pub fn find_by_raw_id(&self, raw: &str) -> Option<&Job> {
        leading_integer(raw)
            .and_then(|id| u32::try_from(id).ok())
            .and_then(|id| self.get(id))
    }

    pub fn by_location(&self, city: &str) -> Vec<&Job> {
        self.jobs.iter().filter(|job| job.is_located_in(city)).collect()
    }
}

/// Reads an optional sign and the run of digits after leading whitespace,
/// ignoring whatever follows. `None` when there are no digits.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn seed_jobs() -> Vec<Job> {
    vec![
        Job::new(
            1,
            "Frontend Developer",
            "Tech GmbH",
            "Berlin",
            "55.000-70.000€",
            "React, TypeScript, CI/CD",
        ),
        Job::new(
            2,
            "Backend Developer",
            "StartupXYZ",
            "München",
            "60.000-75.000€",
            "Node.js, Express, PostgreSQL",
        ),
        Job::new(
            3,
            "DevOps Engineer",
            "CloudCorp",
            "Hamburg",
            "65.000-85.000€",
            "AWS, Docker, Kubernetes, CI/CD",
        ),
        Job::new(
            4,
            "Full-Stack Developer",
            "Digital AG",
            "Frankfurt",
            "58.000-72.000€",
            "React, Node.js, MongoDB",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique_and_ordered() {
        let store = JobStore::seeded();
        let ids: Vec<u32> = store.all().iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), store.all().len());
    }

    #[test]
    fn test_seed_fields_are_non_empty() {
        for job in JobStore::seeded().all() {
            assert!(job.id > 0);
            assert!(!job.title.is_empty());
            assert!(!job.company.is_empty());
            assert!(!job.location.is_empty());
        }
    }

    #[test]
    fn test_get_returns_requested_id_for_every_seed() {
        let store = JobStore::seeded();
        for job in store.all() {
            assert_eq!(store.get(job.id).map(|j| j.id), Some(job.id));
        }
    }

    #[test]
    fn test_get_first_seed_matches_known_record() {
        let store = JobStore::seeded();
        let job = store.get(1).unwrap();
        assert_eq!(job.title, "Frontend Developer");
        assert_eq!(job.company, "Tech GmbH");
        assert_eq!(job.location, "Berlin");
        assert_eq!(job.salary, "55.000-70.000€");
        assert_eq!(job.description, "React, TypeScript, CI/CD");
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = JobStore::seeded();
        assert!(store.get(0).is_none());
        assert!(store.get(999).is_none());
    }

    #[test]
    fn test_raw_id_without_leading_digits_matches_nothing() {
        let store = JobStore::seeded();
        assert!(store.find_by_raw_id("abc").is_none());
        assert!(store.find_by_raw_id("a1").is_none());
        assert!(store.find_by_raw_id("-1").is_none());
        assert!(store.find_by_raw_id("-").is_none());
        assert!(store.find_by_raw_id("").is_none());
        assert_eq!(store.find_by_raw_id("3").map(|j| j.id), Some(3));
    }

    #[test]
    fn test_raw_id_reads_leading_integer_only() {
        let store = JobStore::seeded();
        assert_eq!(store.find_by_raw_id("1abc").map(|j| j.id), Some(1));
        assert_eq!(store.find_by_raw_id("2.5").map(|j| j.id), Some(2));
        assert_eq!(store.find_by_raw_id(" 4").map(|j| j.id), Some(4));
        assert_eq!(store.find_by_raw_id("+3").map(|j| j.id), Some(3));
        assert_eq!(store.find_by_raw_id("004").map(|j| j.id), Some(4));
    }

    #[test]
    fn test_leading_integer_parsing() {
        assert_eq!(leading_integer("42xyz"), Some(42));
        assert_eq!(leading_integer("  -7"), Some(-7));
        assert_eq!(leading_integer("x42"), None);
        assert_eq!(leading_integer("+"), None);
        assert_eq!(leading_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_by_location_is_case_insensitive() {
        let store = JobStore::seeded();
        let lower = store.by_location("berlin");
        let upper = store.by_location("BERLIN");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].id, 1);
    }

    #[test]
    fn test_by_location_unknown_city_is_empty() {
        assert!(JobStore::seeded().by_location("Paris").is_empty());
    }

    #[test]
    fn test_by_location_returns_all_matches_in_seed_order() {
        let store = JobStore::new(vec![
            Job::new(7, "A", "X", "Köln", "1", ""),
            Job::new(3, "B", "Y", "Bonn", "2", ""),
            Job::new(5, "C", "Z", "köln", "3", ""),
        ]);
        let ids: Vec<u32> = store.by_location("KÖLN").iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![7, 5]);
    }
}
