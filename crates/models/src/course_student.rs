use crate::validation::{Checks, Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseStudentForm {
    pub course_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
    pub approved: bool,
    pub final_grade: Option<String>,
}

impl CourseStudentForm {
    pub fn new(student_id: Uuid) -> Self {
        Self {
            student_id: Some(student_id),
            ..Default::default()
        }
    }
}

impl Validate for CourseStudentForm {
    fn validate(&self) -> ValidationErrors {
        Checks::new().presence("student_id", &self.student_id).finish()
    }
}

#[cfg(test)]
mod test {
    use super::CourseStudentForm;
    use crate::validation::{Validate, ViolationKind};
    use uuid::Uuid;

    #[test]
    fn test_course_student_requires_student() {
        assert!(
            CourseStudentForm::default()
                .validate()
                .contains("student_id", ViolationKind::Blank)
        );
        assert!(CourseStudentForm::new(Uuid::nil()).is_valid());
    }
}
