use crate::validation::{Checks, Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolForm {
    pub name: Option<String>,
}

impl SchoolForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl Validate for SchoolForm {
    fn validate(&self) -> ValidationErrors {
        Checks::new().presence("name", &self.name).finish()
    }
}

#[cfg(test)]
mod test {
    use super::SchoolForm;
    use crate::validation::{Validate, ViolationKind};

    #[test]
    fn test_school_requires_name() {
        assert!(SchoolForm::new("Appalachian State University").is_valid());

        let errors = SchoolForm::default().validate();
        assert!(errors.contains("name", ViolationKind::Blank));
        assert!(!SchoolForm::new("  ").is_valid());
    }
}
