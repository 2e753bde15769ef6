use crate::validation::{Checks, Validate, ValidationErrors};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentForm {
    pub course_id: Option<Uuid>,
    /// Unique among the assignments of one course
    pub name: Option<String>,
    pub percent_of_grade: Option<f64>,
    pub maximum_grade: Option<i32>,
    pub active_at: Option<NaiveDateTime>,
    pub due_at: Option<NaiveDateTime>,
    pub students_can_submit: bool,
}

impl AssignmentForm {
    pub fn new(name: impl Into<String>, percent_of_grade: f64) -> Self {
        Self {
            name: Some(name.into()),
            percent_of_grade: Some(percent_of_grade),
            ..Default::default()
        }
    }

    pub fn for_course(mut self, course_id: Uuid) -> Self {
        self.course_id = Some(course_id);
        self
    }
}

impl Validate for AssignmentForm {
    fn validate(&self) -> ValidationErrors {
        Checks::new()
            .presence("course_id", &self.course_id)
            .presence("name", &self.name)
            .presence("percent_of_grade", &self.percent_of_grade)
            .finite("percent_of_grade", self.percent_of_grade)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::AssignmentForm;
    use crate::validation::{Validate, ViolationKind};
    use uuid::Uuid;

    #[test]
    fn test_assignment_required_fields() {
        let errors = AssignmentForm::default().validate();
        let fields: Vec<_> = errors.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["course_id", "name", "percent_of_grade"]);

        assert!(!AssignmentForm::new("Essay", 10.0).is_valid());
        assert!(
            AssignmentForm::new("Essay", 10.0)
                .for_course(Uuid::nil())
                .is_valid()
        );
    }

    #[test]
    fn test_percent_of_grade_must_be_a_number() {
        let errors = AssignmentForm::new("Quiz", f64::NAN)
            .for_course(Uuid::nil())
            .validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.on("percent_of_grade"), vec![ViolationKind::Invalid]);

        let errors = AssignmentForm::new("Quiz", f64::NEG_INFINITY)
            .for_course(Uuid::nil())
            .validate();
        assert!(errors.contains("percent_of_grade", ViolationKind::Invalid));
    }
}
