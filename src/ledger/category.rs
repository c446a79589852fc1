use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::TransactionKind;

/// Colour used for breakdown entries whose category name no longer resolves.
pub const FALLBACK_CATEGORY_COLOR: &str = "#64748b";

/// Categorises ledger activity for budgeting and reporting.
///
/// `name` is the join key used by transactions and budgets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: TransactionKind, color: impl Into<String>) -> Self {
        NewCategory::new(name, kind, color).into_category(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, kind: TransactionKind, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            color: color.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn into_category(self, id: Uuid) -> Category {
        Category {
            id,
            name: self.name,
            kind: self.kind,
            color: self.color,
            icon: self.icon,
        }
    }
}
