use crate::{
    formats::{is_email, is_http_url},
    validation::{Checks, Validate, ValidationErrors},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl UserForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            photo_url: None,
        }
    }

    /// Emails compare case-insensitively, so they are stored trimmed and lowercased
    pub fn normalized(mut self) -> Self {
        self.email = self.email.map(|email| email.trim().to_lowercase());
        self
    }
}

impl Validate for UserForm {
    fn validate(&self) -> ValidationErrors {
        Checks::new()
            .presence("first_name", &self.first_name)
            .presence("last_name", &self.last_name)
            .presence("email", &self.email)
            .format("email", self.email.as_deref(), is_email)
            .format("photo_url", self.photo_url.as_deref(), is_http_url)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::UserForm;
    use crate::validation::{Validate, ViolationKind};

    #[test]
    fn test_user_required_fields() {
        let errors = UserForm::default().validate();
        let fields: Vec<_> = errors.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["first_name", "last_name", "email"]);
    }

    #[test]
    fn test_user_email_format() {
        let user = UserForm::new("Grace", "Hopper", "grace.at.navy");
        assert_eq!(user.validate().on("email"), vec![ViolationKind::Invalid]);
        assert!(UserForm::new("Grace", "Hopper", "grace@navy.mil").is_valid());
    }

    #[test]
    fn test_user_photo_url() {
        let mut user = UserForm::new("Grace", "Hopper", "grace@navy.mil");
        user.photo_url = Some("photos/grace.png".into());
        assert_eq!(user.validate().on("photo_url"), vec![ViolationKind::Invalid]);

        user.photo_url = Some("https://example.com/grace.png".into());
        assert!(user.is_valid());
    }

    #[test]
    fn test_normalized_email() {
        let user = UserForm::new("Grace", "Hopper", "  Grace@Navy.MIL ").normalized();
        assert_eq!(user.email.as_deref(), Some("grace@navy.mil"));
    }
}
