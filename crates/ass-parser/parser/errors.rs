//! Parse error type
//!
//! The grammar itself never produces errors: a rule that does not match
//! returns `None` after rolling back whatever it consumed. Only the public
//! entry point turns a failed or incomplete start rule into a [`ParseError`].

use alloc::string::String;

use thiserror::Error;

/// Error returned by the public entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The start rule did not match the whole input
    ///
    /// Carries no partial result; a strict prefix match counts as a failure.
    #[error("Parse failed: rule '{rule}' did not match the whole input")]
    Failed { rule: String },

    /// The requested start rule is not registered
    #[error("Unknown parser rule '{rule}'")]
    UnknownRule { rule: String },
}

impl ParseError {
    /// Rule name the error refers to
    #[must_use]
    pub fn rule(&self) -> &str {
        match self {
            Self::Failed { rule } | Self::UnknownRule { rule } => rule,
        }
    }

    /// Whether the error comes from a bad rule name rather than the input
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::UnknownRule { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_rule() {
        let error = ParseError::Failed {
            rule: "dialogueParts".into(),
        };
        let message = error.to_string();
        assert!(message.contains("Parse failed"));
        assert!(message.contains("dialogueParts"));
    }

    #[test]
    fn unknown_rule_is_configuration_error() {
        let error = ParseError::UnknownRule {
            rule: "nope".into(),
        };
        assert!(error.is_configuration_error());
        assert_eq!(error.rule(), "nope");
        assert!(!ParseError::Failed { rule: "x".into() }.is_configuration_error());
    }
}
