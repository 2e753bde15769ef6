use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What happens to dependent rows when their parent is destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DeleteAction {
    /// Destroy the dependents along with the parent
    Cascade,
    /// Refuse to destroy the parent while dependents exist
    Restrict,
    /// Keep the dependents but clear their reference to the parent
    Nullify,
}

impl DeleteAction {
    /// Whether dependents under this action can stop a destroy
    pub fn blocks(self) -> bool {
        matches!(self, Self::Restrict)
    }
}
