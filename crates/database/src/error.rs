use crate::cascade::Table;
use models::validation::ValidationErrors;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Cannot delete record in {table} because dependent {association} exist")]
    ConstraintViolation { table: Table, association: Table },

    #[error("Couldn't find {table} with id {id}")]
    NotFound { table: Table, id: Uuid },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl Error {
    /// The violations behind a failed validation, if that is what this is
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
