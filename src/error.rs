//! Error types for combat resolution.
//!
//! Everything that can go wrong while building combatants or resolving
//! a fight is represented by the `CombatError` enum. Death, leveling and
//! healing are ordinary outcomes and never show up here.

use thiserror::Error;

/// Errors that can occur while resolving combat.
///
/// # Examples
///
/// ```rust
/// use herofight::CombatError;
///
/// let err = CombatError::negative_damage(-10.0);
/// println!("{}", err); // "Invalid argument: damage value cannot be negative (got -10)"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CombatError {
    /// An operation received a value outside its domain.
    ///
    /// Raised for negative or non-finite damage, negative or non-finite
    /// experience, and monster levels below 1. The operation is rejected
    /// before any state is mutated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A combat configuration could not be parsed or is out of range.
    #[error("Invalid combat config: {0}")]
    InvalidConfig(String),
}

impl CombatError {
    /// Build the error returned for a damage value below zero.
    pub fn negative_damage(damage: f64) -> Self {
        CombatError::InvalidArgument(format!(
            "damage value cannot be negative (got {})",
            damage
        ))
    }

    /// Build the error returned for a negative experience gain.
    pub fn negative_experience(amount: f64) -> Self {
        CombatError::InvalidArgument(format!(
            "experience gain cannot be negative (got {})",
            amount
        ))
    }

    /// Build the error returned for a non-finite value of the named quantity.
    pub fn not_finite(what: &str) -> Self {
        CombatError::InvalidArgument(format!("{} must be a finite number", what))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CombatError::negative_damage(-10.0);
        let display = err.to_string();
        assert!(display.starts_with("Invalid argument"));
        assert!(display.contains("-10"));
    }

    #[test]
    fn test_config_error_display() {
        let err = CombatError::InvalidConfig("missing field".to_string());
        assert_eq!(err.to_string(), "Invalid combat config: missing field");
    }

    #[test]
    fn test_not_finite_names_quantity() {
        let err = CombatError::not_finite("damage");
        assert_eq!(
            err,
            CombatError::InvalidArgument("damage must be a finite number".to_string())
        );
    }
}
