use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};
use strum::{Display as StrumDisplay, EnumProperty, IntoStaticStr};
use uuid::Uuid;

/// Why a single attribute was rejected
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, StrumDisplay, IntoStaticStr, EnumProperty,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViolationKind {
    #[strum(props(message = "can't be blank"))]
    Blank,
    #[strum(props(message = "is invalid"))]
    Invalid,
    #[strum(props(message = "has already been taken"))]
    Taken,
    /// Points at a row that does not exist
    #[strum(props(message = "must exist"))]
    Missing,
}

impl ViolationKind {
    pub fn message(&self) -> &'static str {
        self.get_str("message").unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.field, self.kind.message())
    }
}

/// Every violation found for one record, in the order the checks ran
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, kind: ViolationKind) {
        self.0.push(Violation { field, kind });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Kinds of violation recorded against `field`
    pub fn on(&self, field: &str) -> Vec<ViolationKind> {
        self.0
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.kind)
            .collect()
    }

    pub fn contains(&self, field: &str, kind: ViolationKind) -> bool {
        self.0.iter().any(|v| v.field == field && v.kind == kind)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let messages: Vec<String> = self.0.iter().map(Violation::to_string).collect();
        write!(f, "{}", messages.join(", "))
    }
}

impl Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Whether an attribute counts as missing
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

macro_rules! never_blank {
    ($($ty:ty),*) => {
        $(impl Blank for $ty {
            fn is_blank(&self) -> bool {
                false
            }
        })*
    };
}

never_blank!(Uuid, NaiveDate, NaiveDateTime, i32, f64);

/// Pure checks a record must pass before it may be persisted.
///
/// Checks that need storage (uniqueness) are layered on top by the
/// database services.
pub trait Validate {
    fn validate(&self) -> ValidationErrors;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Runs an ordered list of checks, collecting every failure
#[derive(Debug, Default)]
pub struct Checks {
    errors: ValidationErrors,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presence<T: Blank + ?Sized>(mut self, field: &'static str, value: &T) -> Self {
        if value.is_blank() {
            self.errors.add(field, ViolationKind::Blank);
        }
        self
    }

    /// Absent values are left to `presence`
    pub fn format(mut self, field: &'static str, value: Option<&str>, rule: fn(&str) -> bool) -> Self {
        if let Some(value) = value
            && !value.is_blank()
            && !rule(value)
        {
            self.errors.add(field, ViolationKind::Invalid);
        }
        self
    }

    /// Rejects NaN and infinities, leaving absent values to `presence`
    pub fn finite(mut self, field: &'static str, value: Option<f64>) -> Self {
        if value.is_some_and(|value| !value.is_finite()) {
            self.errors.add(field, ViolationKind::Invalid);
        }
        self
    }

    pub fn finish(self) -> ValidationErrors {
        self.errors
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!("".is_blank());
        assert!("   \t".is_blank());
        assert!(!"x".is_blank());
        assert!(None::<String>.is_blank());
        assert!(Some(String::from(" ")).is_blank());
        assert!(!Some(Uuid::nil()).is_blank());
        assert!(None::<f64>.is_blank());
    }

    #[test]
    fn test_checks_keep_order() {
        let errors = Checks::new()
            .presence("name", &None::<String>)
            .presence("code", &Some(String::from("ok")))
            .format("url", Some("junk://"), |s| s.starts_with("http"))
            .finish();

        let fields: Vec<_> = errors.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "url"]);
        assert_eq!(errors.on("url"), vec![ViolationKind::Invalid]);
        assert_eq!(errors.to_string(), "name can't be blank, url is invalid");
    }

    #[test]
    fn test_format_skips_missing_values() {
        let errors = Checks::new()
            .format("url", None, |_| false)
            .format("url", Some(""), |_| false)
            .finish();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_finite_numbers() {
        let errors = Checks::new()
            .finite("weight", Some(f64::NAN))
            .finite("bonus", Some(f64::INFINITY))
            .finite("scale", Some(0.5))
            .finite("offset", None)
            .finish();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.on("weight"), vec![ViolationKind::Invalid]);
        assert_eq!(errors.on("bonus"), vec![ViolationKind::Invalid]);
    }

    #[test]
    fn test_errors_serialize_as_list() {
        let mut errors = ValidationErrors::new();
        errors.add("email", ViolationKind::Taken);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!([{ "field": "email", "kind": "taken" }]));
        assert!(errors.clone().into_result().is_err());
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
