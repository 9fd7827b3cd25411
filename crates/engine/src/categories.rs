//! Categories used to label transactions in the UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// The fixed category groups. The discriminant is the id stored in
/// `categories.group_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    Expense = 1,
    Income = 2,
}

impl CategoryGroup {
    pub const ALL: [CategoryGroup; 2] = [CategoryGroup::Expense, CategoryGroup::Income];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }
}

impl TryFrom<i32> for CategoryGroup {
    type Error = EngineError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Expense),
            2 => Ok(Self::Income),
            other => Err(EngineError::Validation(format!(
                "Unknown category group: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub group: CategoryGroup,
    pub name: String,
    /// Hex color used by the UI, e.g. `#22c55e`.
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn group_id(&self) -> i32 {
        self.group.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_ids_round_trip() {
        for group in CategoryGroup::ALL {
            assert_eq!(CategoryGroup::try_from(group.id()).unwrap(), group);
        }
    }

    #[test]
    fn unknown_group_is_rejected() {
        assert_eq!(
            CategoryGroup::try_from(7),
            Err(EngineError::Validation(
                "Unknown category group: 7".to_string()
            ))
        );
    }
}
