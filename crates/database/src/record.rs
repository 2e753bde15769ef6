use crate::{Error, Result};
use models::validation::ValidationErrors;

/// Outcome of a lax create: either the saved row, or the rejected
/// attributes together with the reasons they were rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum Record<F, M> {
    Persisted(M),
    Invalid { form: F, errors: ValidationErrors },
}

impl<F, M> Record<F, M> {
    /// Turns a strict result into a lax one, keeping only storage failures as errors
    pub(crate) fn from_result(form: F, result: Result<M>) -> Result<Self> {
        match result {
            Ok(model) => Ok(Self::Persisted(model)),
            Err(Error::Validation(errors)) => Ok(Self::Invalid { form, errors }),
            Err(err) => Err(err),
        }
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted(_))
    }

    pub fn is_valid(&self) -> bool {
        self.is_persisted()
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Persisted(_) => None,
            Self::Invalid { errors, .. } => Some(errors),
        }
    }

    pub fn persisted(&self) -> Option<&M> {
        match self {
            Self::Persisted(model) => Some(model),
            Self::Invalid { .. } => None,
        }
    }

    pub fn into_persisted(self) -> Option<M> {
        match self {
            Self::Persisted(model) => Some(model),
            Self::Invalid { .. } => None,
        }
    }

    /// The rejected attributes, to be fixed up and saved again
    pub fn into_form(self) -> Option<F> {
        match self {
            Self::Persisted(_) => None,
            Self::Invalid { form, .. } => Some(form),
        }
    }
}
