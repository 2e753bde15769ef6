use crate::validation::{Checks, Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonForm {
    pub course_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub outline: Option<String>,
    pub lead_in_question: Option<String>,
    /// Assignment students complete before the lesson
    pub pre_class_assignment_id: Option<Uuid>,
    /// Assignment worked on during the lesson
    pub in_class_assignment_id: Option<Uuid>,
}

impl LessonForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl Validate for LessonForm {
    fn validate(&self) -> ValidationErrors {
        Checks::new().presence("name", &self.name).finish()
    }
}
