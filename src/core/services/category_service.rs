use crate::ledger::{Ledger, NewCategory};

use super::{ServiceError, ServiceResult};

pub struct CategoryService;

impl CategoryService {
    pub fn validate(draft: &NewCategory) -> ServiceResult<()> {
        if draft.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Please enter a category name".into()));
        }
        Ok(())
    }

    /// Rejects a name another category of any kind already uses.
    pub fn ensure_unique(ledger: &Ledger, name: &str) -> ServiceResult<()> {
        if ledger.category_named(name).is_some() {
            return Err(ServiceError::Invalid(format!(
                "Category `{}` already exists",
                name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;

    #[test]
    fn blank_name_is_rejected() {
        let draft = NewCategory::new("   ", TransactionKind::Expense, "#000000");
        let err = CategoryService::validate(&draft).unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(ref message) if message.contains("name")));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut ledger = Ledger::new();
        ledger.add_category(NewCategory::new("Food", TransactionKind::Expense, "#f59e0b"));
        assert!(CategoryService::ensure_unique(&ledger, "Food").is_err());
        assert!(CategoryService::ensure_unique(&ledger, "Travel").is_ok());
    }
}
