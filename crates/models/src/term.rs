use crate::validation::{Checks, Validate, ValidationErrors};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermForm {
    pub school_id: Option<Uuid>,
    pub name: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
}

impl TermForm {
    pub fn new(
        school_id: Uuid,
        name: impl Into<String>,
        starts_on: NaiveDate,
        ends_on: NaiveDate,
    ) -> Self {
        Self {
            school_id: Some(school_id),
            name: Some(name.into()),
            starts_on: Some(starts_on),
            ends_on: Some(ends_on),
        }
    }
}

impl Validate for TermForm {
    fn validate(&self) -> ValidationErrors {
        Checks::new()
            .presence("name", &self.name)
            .presence("starts_on", &self.starts_on)
            .presence("ends_on", &self.ends_on)
            .presence("school_id", &self.school_id)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::TermForm;
    use crate::validation::{Validate, ViolationKind};
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_term_requires_every_field() {
        let errors = TermForm::default().validate();
        let fields: Vec<_> = errors.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "starts_on", "ends_on", "school_id"]);
        assert!(errors.iter().all(|v| v.kind == ViolationKind::Blank));
    }

    #[test]
    fn test_complete_term_is_valid() {
        let term = TermForm::new(
            Uuid::nil(),
            "Spring 2016",
            NaiveDate::from_ymd_opt(2016, 1, 11).unwrap(),
            NaiveDate::from_ymd_opt(2016, 5, 6).unwrap(),
        );
        assert!(term.is_valid());
    }
}
