//! Error types for the engines.
//!
//! Only dice input can fail. Deck operations clamp out-of-range input
//! instead of erroring.

/// Errors raised by the dice engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Roll notation did not match `[count]d<sides>`.
    #[error("Invalid dice notation {0:?}: expected a format like \"d20\" or \"3d6\"")]
    InvalidNotation(String),

    /// Side count outside the supported set (4, 6, 8, 10, 12, 20, 100).
    #[error("Invalid die type: d{0} (supported: d4, d6, d8, d10, d12, d20, d100)")]
    InvalidDieType(u32),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_message_names_formats() {
        let msg = Error::InvalidNotation("abc".into()).to_string();
        assert!(msg.contains("\"d20\""));
        assert!(msg.contains("\"3d6\""));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_die_type_message() {
        assert_eq!(
            Error::InvalidDieType(13).to_string(),
            "Invalid die type: d13 (supported: d4, d6, d8, d10, d12, d20, d100)"
        );
    }
}
