//! The patient record entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient record, the single persisted entity of the system.
///
/// The identifier is assigned by storage on first save and never changes
/// afterwards. None of the remaining fields is required to be non-empty;
/// the store performs no validation beyond type coercion.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use ward_store::Patient;
///
/// let patient = Patient::new(
///     "Dupont",
///     NaiveDate::from_ymd_opt(1990, 5, 21),
///     true,
///     85,
/// );
/// assert!(patient.id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Patient {
    /// Unique identifier, `None` until first persisted.
    pub id: Option<i64>,

    /// Patient name, searched by substring.
    pub name: String,

    /// Birth date (calendar date, no time component).
    pub birth_date: Option<NaiveDate>,

    /// Health flag: `true` means sick.
    pub sick: bool,

    /// Health score.
    pub score: i32,
}

impl Patient {
    /// Creates a new, not-yet-persisted patient record.
    pub fn new(
        name: impl Into<String>,
        birth_date: Option<NaiveDate>,
        sick: bool,
        score: i32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
            sick,
            score,
        }
    }

    /// Returns a copy of this record carrying the given identifier.
    ///
    /// Used when an authoritative identifier (for instance, one taken from
    /// a URL path) must override whatever the record carried.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns `true` if the record has not been persisted yet.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_id() {
        let patient = Patient::new("Martin", None, false, 10);
        assert!(patient.is_new());
        assert_eq!(patient.name, "Martin");
        assert_eq!(patient.score, 10);
    }

    #[test]
    fn test_with_id_overrides() {
        let patient = Patient::new("Martin", None, false, 10).with_id(3);
        let patient = patient.with_id(7);
        assert_eq!(patient.id, Some(7));
        assert!(!patient.is_new());
    }

    #[test]
    fn test_default_is_empty_template() {
        let patient = Patient::default();
        assert!(patient.id.is_none());
        assert!(patient.name.is_empty());
        assert!(patient.birth_date.is_none());
        assert!(!patient.sick);
        assert_eq!(patient.score, 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let patient = Patient::new(
            "Dupont",
            NaiveDate::from_ymd_opt(1990, 5, 21),
            true,
            85,
        )
        .with_id(1);

        let json = serde_json::to_string(&patient).unwrap();
        let back: Patient = serde_json::from_str(&json).unwrap();
        assert_eq!(back, patient);
    }
}
