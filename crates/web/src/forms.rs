//! Form bindings for the patient forms.
//!
//! The add and edit forms post the patient fields as
//! `application/x-www-form-urlencoded`. Coercion is deliberately lenient:
//! an empty date field means "absent", and the sick checkbox is `true`
//! exactly when the browser submitted it. No further validation happens
//! here.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use ward_store::Patient;

/// A submitted patient form.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientForm {
    /// Identifier carried by the form, if any. The update path overrides
    /// it with the path identifier; the save path passes it through.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<i64>,

    /// Patient name.
    #[serde(default)]
    pub name: String,

    /// Birth date; an empty field coerces to `None`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub birth_date: Option<NaiveDate>,

    /// Sick checkbox: absent means unchecked.
    #[serde(default, deserialize_with = "checkbox")]
    pub sick: bool,

    /// Health score.
    #[serde(default)]
    pub score: i32,
}

impl PatientForm {
    /// Converts the form into a patient record.
    pub fn into_patient(self) -> Patient {
        Patient {
            id: self.id,
            name: self.name,
            birth_date: self.birth_date,
            sick: self.sick,
            score: self.score,
        }
    }
}

/// Deserializes an optional field where the empty string means "absent".
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Deserializes an HTML checkbox value.
///
/// Browsers submit `on` for a checked box and omit the field entirely for
/// an unchecked one; `true`/`1` are accepted for non-browser clients.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(value.as_deref(), Some("on" | "true" | "1")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> PatientForm {
        serde_urlencoded::from_str(query).unwrap()
    }

    #[test]
    fn test_full_form() {
        let form = parse("name=Dupont&birth_date=1990-05-21&sick=on&score=85");
        let patient = form.into_patient();
        assert_eq!(patient.name, "Dupont");
        assert_eq!(patient.birth_date, NaiveDate::from_ymd_opt(1990, 5, 21));
        assert!(patient.sick);
        assert_eq!(patient.score, 85);
        assert!(patient.id.is_none());
    }

    #[test]
    fn test_empty_date_is_absent() {
        let form = parse("name=Martin&birth_date=&score=3");
        assert_eq!(form.birth_date, None);
    }

    #[test]
    fn test_unchecked_checkbox_is_false() {
        let form = parse("name=Martin&score=3");
        assert!(!form.sick);
    }

    #[test]
    fn test_id_passes_through() {
        let form = parse("id=7&name=Martin");
        assert_eq!(form.id, Some(7));
    }

    #[test]
    fn test_empty_id_is_absent() {
        let form = parse("id=&name=Martin");
        assert_eq!(form.id, None);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let form = parse("");
        let patient = form.into_patient();
        assert_eq!(patient, Patient::default());
    }
}
