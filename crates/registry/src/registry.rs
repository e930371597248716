//! In-memory student registry.

use crate::error::{RegistryError, Result};
use crate::validation::{is_valid_email, is_valid_name, is_valid_name_part};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};
use tracker_core::{CoursePoints, Student, StudentId};

/// Configuration for the registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Id given to the first student added
    pub first_id: StudentId,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            first_id: StudentId::FIRST,
        }
    }
}

/// Authoritative store of all students.
///
/// Students are append-only. Ids grow monotonically, so iterating the id
/// map yields students in insertion order.
pub struct Registry {
    students: BTreeMap<StudentId, Student>,
    by_email: HashMap<String, StudentId>,
    next_id: StudentId,
}

impl Registry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            students: BTreeMap::new(),
            by_email: HashMap::new(),
            next_id: config.first_id,
        }
    }

    /// Add a student from a raw `first last... email` line.
    ///
    /// Checks run in order and the first failure is returned: token count,
    /// first name, last name, email shape, email uniqueness.
    pub fn add_student(&mut self, credentials: &str) -> Result<StudentId> {
        let parts: Vec<&str> = credentials.split_whitespace().collect();
        if parts.len() < 3 {
            debug!("Rejected credentials with {} tokens", parts.len());
            return Err(RegistryError::IncorrectCredentials);
        }

        let first_name = parts[0];
        let last_name = parts[1..parts.len() - 1].join(" ");
        let email = parts[parts.len() - 1];

        if !is_valid_name_part(first_name) {
            return Err(RegistryError::IncorrectFirstName);
        }
        if !is_valid_name(&last_name) {
            return Err(RegistryError::IncorrectLastName);
        }
        if !is_valid_email(email) {
            return Err(RegistryError::IncorrectEmail);
        }
        if self.by_email.contains_key(email) {
            debug!("Email already registered: {}", email);
            return Err(RegistryError::EmailTaken);
        }

        let id = self.next_id;
        self.next_id = id.next();

        self.students
            .insert(id, Student::new(id, first_name, last_name, email));
        self.by_email.insert(email.to_string(), id);
        info!("Added student {}", id);

        Ok(id)
    }

    /// All ids in insertion order, or `None` when the registry is empty.
    pub fn list_ids(&self) -> Option<Vec<StudentId>> {
        if self.students.is_empty() {
            return None;
        }
        Some(self.students.keys().copied().collect())
    }

    /// Number of students.
    pub fn count(&self) -> usize {
        self.students.len()
    }

    /// Apply a raw `id p1 p2 p3 p4` submission.
    ///
    /// All four values are validated before the id is looked up, and the
    /// points are applied only when everything checks out.
    pub fn add_points(&mut self, input: &str) -> Result<StudentId> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.len() != 5 {
            return Err(RegistryError::IncorrectPointsFormat);
        }

        let raw_id: i32 = parts[0]
            .parse()
            .map_err(|_| RegistryError::StudentNotFound(parts[0].to_string()))?;

        let mut values = [0u32; 4];
        for (slot, token) in values.iter_mut().zip(&parts[1..]) {
            *slot = parse_points(token).ok_or(RegistryError::IncorrectPointsFormat)?;
        }

        let student = u32::try_from(raw_id)
            .ok()
            .and_then(|raw| self.students.get_mut(&StudentId::new(raw)))
            .ok_or_else(|| RegistryError::StudentNotFound(raw_id.to_string()))?;

        student.add_points(&CoursePoints::new(values));
        debug!("Updated points for {}: {:?}", student.id(), values);

        Ok(student.id())
    }

    /// Look a student up from a raw id string.
    pub fn find(&self, input: &str) -> Result<&Student> {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RegistryError::IncorrectIdFormat);
        }

        input
            .parse::<StudentId>()
            .ok()
            .and_then(|id| self.students.get(&id))
            .ok_or_else(|| RegistryError::StudentNotFound(normalize_digits(input)))
    }

    /// Get a student by id.
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Id registered for an email, if any.
    pub fn id_for_email(&self, email: &str) -> Option<StudentId> {
        self.by_email.get(email).copied()
    }

    /// All students in insertion order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Mutable access for bookkeeping such as notification state.
    pub fn students_mut(&mut self) -> impl Iterator<Item = &mut Student> {
        self.students.values_mut()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a single non-negative point value.
fn parse_points(token: &str) -> Option<u32> {
    let value: i32 = token.parse().ok()?;
    u32::try_from(value).ok()
}

/// Strip leading zeros the way an integer round trip would.
fn normalize_digits(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::Course;

    fn registry_with(lines: &[&str]) -> Registry {
        let mut registry = Registry::new();
        for line in lines {
            registry.add_student(line).unwrap();
        }
        registry
    }

    #[test]
    fn test_add_student_assigns_sequential_ids() {
        let mut registry = Registry::new();
        assert_eq!(registry.add_student("John Smith john@mail.com"), Ok(StudentId::new(1000)));
        assert_eq!(registry.add_student("Jane Doe jane@mail.com"), Ok(StudentId::new(1001)));
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_add_student_multi_word_last_name() {
        let mut registry = Registry::new();
        let id = registry.add_student("Jean-Claude van Damme jcd@google.it").unwrap();
        let student = registry.get(id).unwrap();
        assert_eq!(student.first_name(), "Jean-Claude");
        assert_eq!(student.last_name(), "van Damme");
        assert_eq!(student.email(), "jcd@google.it");
    }

    #[test]
    fn test_add_student_validation_order() {
        let mut registry = registry_with(&["John Smith john@mail.com"]);

        assert_eq!(registry.add_student(""), Err(RegistryError::IncorrectCredentials));
        assert_eq!(
            registry.add_student("John john@mail.com"),
            Err(RegistryError::IncorrectCredentials)
        );
        assert_eq!(
            registry.add_student("J Smith bad-email"),
            Err(RegistryError::IncorrectFirstName)
        );
        assert_eq!(
            registry.add_student("John S bad-email"),
            Err(RegistryError::IncorrectLastName)
        );
        assert_eq!(
            registry.add_student("John Smith bad-email"),
            Err(RegistryError::IncorrectEmail)
        );
        assert_eq!(
            registry.add_student("Other Person john@mail.com"),
            Err(RegistryError::EmailTaken)
        );
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_taken_email_rejected_even_with_bad_names_first() {
        let mut registry = registry_with(&["John Smith john@mail.com"]);
        // Name checks run first, so the duplicate only shows once names pass.
        assert_eq!(
            registry.add_student("J Smith john@mail.com"),
            Err(RegistryError::IncorrectFirstName)
        );
        assert_eq!(
            registry.add_student("Anna Smith john@mail.com"),
            Err(RegistryError::EmailTaken)
        );
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_email_match_is_case_sensitive() {
        let mut registry = registry_with(&["John Smith john@mail.com"]);
        assert!(registry.add_student("John Smith JOHN@mail.com").is_ok());
        assert_eq!(registry.id_for_email("JOHN@mail.com"), Some(StudentId::new(1001)));
    }

    #[test]
    fn test_failed_add_does_not_consume_id() {
        let mut registry = registry_with(&["John Smith john@mail.com"]);
        assert!(registry.add_student("John Smith john@mail.com").is_err());
        assert_eq!(registry.add_student("Jane Doe jane@mail.com"), Ok(StudentId::new(1001)));
    }

    #[test]
    fn test_custom_first_id() {
        let mut registry = Registry::with_config(RegistryConfig {
            first_id: StudentId::new(5001),
        });
        assert_eq!(registry.add_student("John Smith john@mail.com"), Ok(StudentId::new(5001)));
    }

    #[test]
    fn test_list_ids() {
        let mut registry = Registry::new();
        assert_eq!(registry.list_ids(), None);

        registry.add_student("John Smith john@mail.com").unwrap();
        registry.add_student("Jane Doe jane@mail.com").unwrap();
        assert_eq!(
            registry.list_ids(),
            Some(vec![StudentId::new(1000), StudentId::new(1001)])
        );
    }

    #[test]
    fn test_add_points_accumulates() {
        let mut registry = registry_with(&["John Smith john@mail.com"]);
        registry.add_points("1000 1 2 3 4").unwrap();
        registry.add_points("1000 10 20 30 40").unwrap();

        let student = registry.get(StudentId::FIRST).unwrap();
        assert_eq!(student.points(), &CoursePoints::new([11, 22, 33, 44]));
        assert_eq!(student.points_for(Course::Spring), 44);
    }

    #[test]
    fn test_add_points_format_errors() {
        let mut registry = registry_with(&["John Smith john@mail.com"]);

        assert_eq!(registry.add_points("1000 1 2 3"), Err(RegistryError::IncorrectPointsFormat));
        assert_eq!(
            registry.add_points("1000 1 2 3 4 5"),
            Err(RegistryError::IncorrectPointsFormat)
        );
        assert_eq!(registry.add_points(""), Err(RegistryError::IncorrectPointsFormat));
        assert_eq!(
            registry.add_points("1000 1 -2 3 4"),
            Err(RegistryError::IncorrectPointsFormat)
        );
        assert_eq!(
            registry.add_points("1000 1 two 3 4"),
            Err(RegistryError::IncorrectPointsFormat)
        );
        assert!(registry.get(StudentId::FIRST).unwrap().points().is_empty());
    }

    #[test]
    fn test_add_points_unknown_id() {
        let mut registry = registry_with(&["John Smith john@mail.com"]);

        assert_eq!(
            registry.add_points("abc 1 2 3 4"),
            Err(RegistryError::StudentNotFound("abc".to_string()))
        );
        assert_eq!(
            registry.add_points("9999 1 2 3 4"),
            Err(RegistryError::StudentNotFound("9999".to_string()))
        );
        assert_eq!(
            registry.add_points("-5 1 2 3 4"),
            Err(RegistryError::StudentNotFound("-5".to_string()))
        );
        assert_eq!(
            registry.add_points("+1000 1 2 3 4"),
            Ok(StudentId::FIRST)
        );
    }

    #[test]
    fn test_points_checked_before_id_existence() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.add_points("9999 1 -1 3 4"),
            Err(RegistryError::IncorrectPointsFormat)
        );
    }

    #[test]
    fn test_find() {
        let mut registry = registry_with(&["John Smith john@mail.com"]);
        registry.add_points("1000 8 7 7 5").unwrap();

        let student = registry.find("1000").unwrap();
        assert_eq!(
            student.to_string(),
            "1000 points: Java=8; DSA=7; Databases=7; Spring=5"
        );

        assert_eq!(registry.find("10a0").unwrap_err(), RegistryError::IncorrectIdFormat);
        assert_eq!(registry.find("-1000").unwrap_err(), RegistryError::IncorrectIdFormat);
        assert_eq!(registry.find("").unwrap_err(), RegistryError::IncorrectIdFormat);
        assert_eq!(
            registry.find("1001").unwrap_err(),
            RegistryError::StudentNotFound("1001".to_string())
        );
        assert_eq!(
            registry.find("0042").unwrap_err().to_string(),
            "No student is found for id=42."
        );
    }
}
