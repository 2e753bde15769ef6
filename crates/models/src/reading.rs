use crate::{
    formats::is_http_url,
    validation::{Checks, Validate, ValidationErrors},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingForm {
    pub lesson_id: Option<Uuid>,
    pub caption: Option<String>,
    pub url: Option<String>,
    /// Position of the reading within its lesson
    pub order_number: Option<i32>,
}

impl ReadingForm {
    pub fn new(caption: impl Into<String>, url: impl Into<String>, order_number: i32) -> Self {
        Self {
            lesson_id: None,
            caption: Some(caption.into()),
            url: Some(url.into()),
            order_number: Some(order_number),
        }
    }

    pub fn for_lesson(mut self, lesson_id: Uuid) -> Self {
        self.lesson_id = Some(lesson_id);
        self
    }
}

impl Validate for ReadingForm {
    fn validate(&self) -> ValidationErrors {
        Checks::new()
            .presence("order_number", &self.order_number)
            .presence("lesson_id", &self.lesson_id)
            .presence("url", &self.url)
            .format("url", self.url.as_deref(), is_http_url)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::ReadingForm;
    use crate::validation::{Validate, ViolationKind};
    use uuid::Uuid;

    #[test]
    fn test_reading_without_lesson_is_invalid() {
        let reading = ReadingForm::new("Do You Believe In Magic?", "http://example.com", 1);
        assert_eq!(
            reading.validate().on("lesson_id"),
            vec![ViolationKind::Blank]
        );
        assert!(reading.for_lesson(Uuid::nil()).is_valid());
    }

    #[test]
    fn test_reading_url_scheme() {
        let junk = ReadingForm::new("Junk", "junk://", 1).for_lesson(Uuid::nil());
        assert_eq!(junk.validate().on("url"), vec![ViolationKind::Invalid]);

        let https = ReadingForm::new("Secure", "https://example.com", 1).for_lesson(Uuid::nil());
        assert!(https.is_valid());
    }
}
