use crate::{
    formats::is_course_code,
    validation::{Checks, Validate, ValidationErrors},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseForm {
    /// Courses may exist before they are scheduled into a term
    pub term_id: Option<Uuid>,
    pub name: Option<String>,
    pub course_code: Option<String>,
    pub color: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub public: bool,
    pub grading_method: Option<String>,
}

impl CourseForm {
    pub fn new(name: impl Into<String>, course_code: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            course_code: Some(course_code.into()),
            ..Default::default()
        }
    }

    pub fn in_term(mut self, term_id: Uuid) -> Self {
        self.term_id = Some(term_id);
        self
    }
}

impl Validate for CourseForm {
    fn validate(&self) -> ValidationErrors {
        Checks::new()
            .presence("name", &self.name)
            .presence("course_code", &self.course_code)
            .format("course_code", self.course_code.as_deref(), is_course_code)
            .finish()
    }
}
