//! Validation rules for expense input.
use rust_decimal::Decimal;

/// Longest name accepted for an expense, in characters
pub const MAX_NAME_LENGTH: usize = 256;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Expense name cannot be empty")]
    EmptyName,
    #[error("Expense name is too long ({0} characters, max 256)")]
    NameTooLong(usize),
    #[error("Expense amount cannot be negative, got {0}")]
    NegativeAmount(Decimal),
}

/// Trim and check a user-entered name
pub fn validate_name(name: &str) -> Result<String, ExpenseValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ExpenseValidationError::EmptyName);
    }
    let length = trimmed.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(ExpenseValidationError::NameTooLong(length));
    }
    Ok(trimmed.to_string())
}

pub fn validate_amount(amount: Decimal) -> Result<Decimal, ExpenseValidationError> {
    if amount < Decimal::ZERO {
        return Err(ExpenseValidationError::NegativeAmount(amount));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Groceries "), Ok("Groceries".to_string()));
        assert_eq!(validate_name("   "), Err(ExpenseValidationError::EmptyName));
        assert_eq!(validate_name(&"x".repeat(MAX_NAME_LENGTH)).map(|n| n.len()), Ok(MAX_NAME_LENGTH));
        assert_eq!(
            validate_name(&"x".repeat(MAX_NAME_LENGTH + 1)),
            Err(ExpenseValidationError::NameTooLong(MAX_NAME_LENGTH + 1))
        );
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(dec!(0)), Ok(dec!(0)));
        assert_eq!(validate_amount(dec!(4.99)), Ok(dec!(4.99)));
        assert_eq!(
            validate_amount(dec!(-0.01)),
            Err(ExpenseValidationError::NegativeAmount(dec!(-0.01)))
        );
    }
}
