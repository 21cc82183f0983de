//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing callers to use String.

use thiserror::Error;

use crate::value_objects::{Ability, BonusCategory};

/// Unified error type for domain operations.
///
/// Every failure is detected before any mutation occurs, so callers never
/// observe partial state changes. Non-integral score input has no variant
/// here: score fields are `i32`, so ill-typed input is rejected by the
/// compiler or at the serde boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A base-flavor score field is negative
    #[error("base {} cannot be negative (got {value})", .ability.display_name())]
    NegativeBaseScore { ability: Ability, value: i32 },

    /// A bonus-flavor field is negative at construction time
    #[error("{category} bonus for {} cannot be negative (got {value})", .ability.display_name())]
    NegativeBonusValue {
        category: BonusCategory,
        ability: Ability,
        value: i32,
    },

    /// A bonus set's tag does not match the slot it was supplied for
    #[error("expected a {slot} bonus for the {slot} slot, got {found}")]
    CategoryMismatch {
        slot: BonusCategory,
        found: BonusCategory,
    },

    /// A mutation targeted a category outside {racial, feat, level}
    #[error("{category} is not a bonus category")]
    UnknownCategory { category: BonusCategory },

    /// An `add_bonus` increment is not a positive integer
    #[error("increment for {} must be positive (got {amount})", .ability.display_name())]
    InvalidIncrement { ability: Ability, amount: i32 },

    /// An increment would push a total score above the cap
    #[error("increment would raise {} to {attempted}, above the cap of {cap}", .ability.display_name())]
    ScoreCapExceeded {
        ability: Ability,
        attempted: i32,
        cap: i32,
    },

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    /// - Business rules are not satisfied
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown ability: LUCK");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown ability: LUCK");
    }

    #[test]
    fn test_score_cap_exceeded_message_carries_context() {
        let err = DomainError::ScoreCapExceeded {
            ability: Ability::Strength,
            attempted: 36,
            cap: 20,
        };
        let msg = err.to_string();
        assert!(msg.contains("Strength"));
        assert!(msg.contains("36"));
        assert!(msg.contains("20"));
    }

    #[test]
    fn test_category_mismatch_message() {
        let err = DomainError::CategoryMismatch {
            slot: BonusCategory::Racial,
            found: BonusCategory::Feat,
        };
        assert_eq!(
            err.to_string(),
            "expected a racial bonus for the racial slot, got feat"
        );
    }

    #[test]
    fn test_negative_base_score_message() {
        let err = DomainError::NegativeBaseScore {
            ability: Ability::Dexterity,
            value: -3,
        };
        assert_eq!(err.to_string(), "base Dexterity cannot be negative (got -3)");
    }
}
