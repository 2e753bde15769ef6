use crate::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseInstructorForm {
    pub course_id: Option<Uuid>,
    pub instructor_id: Option<Uuid>,
    pub primary: bool,
}

impl Validate for CourseInstructorForm {
    fn validate(&self) -> ValidationErrors {
        ValidationErrors::new()
    }
}
