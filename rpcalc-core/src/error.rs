use std::fmt;

use crate::numfmt::format_g;

/// Everything that can go wrong while evaluating calculator input.
///
/// Every variant is recoverable: the evaluator reports the error through
/// its output sink and keeps consuming tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Push onto a stack already at capacity; carries the rejected value.
    StackOverflow(f64),
    StackUnderflow,
    DivisionByZero,
    ModulusByZero,
    /// All 26 variable slots are in use.
    VariableSpaceExhausted,
    /// Read of a letter that was never assigned.
    UndefinedVariable(char),
    UnknownCommand(char),
    /// Unget on a full pushback buffer; the character is discarded.
    PushbackOverflow,
}

// RUST CONCEPT: Implementing traits for custom error types
// The Display trait gives each error its report-line message
impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::StackOverflow(value) => {
                write!(f, "stack full, can't push {}", format_g(*value, 6))
            }
            CalcError::StackUnderflow => write!(f, "stack empty"),
            CalcError::DivisionByZero => write!(f, "zero divisor"),
            CalcError::ModulusByZero => write!(f, "zero divisor for modulus"),
            CalcError::VariableSpaceExhausted => write!(f, "no free variable slots"),
            CalcError::UndefinedVariable(letter) => write!(f, "undefined variable {}", letter),
            CalcError::UnknownCommand(c) => write!(f, "unknown command {}", c),
            CalcError::PushbackOverflow => write!(f, "too many characters pushed back"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failure() {
        assert_eq!(CalcError::StackUnderflow.to_string(), "stack empty");
        assert_eq!(CalcError::DivisionByZero.to_string(), "zero divisor");
        assert_eq!(
            CalcError::ModulusByZero.to_string(),
            "zero divisor for modulus"
        );
        assert_eq!(
            CalcError::VariableSpaceExhausted.to_string(),
            "no free variable slots"
        );
        assert_eq!(
            CalcError::UndefinedVariable('q').to_string(),
            "undefined variable q"
        );
        assert_eq!(
            CalcError::UnknownCommand('@').to_string(),
            "unknown command @"
        );
    }

    #[test]
    fn test_overflow_message_formats_value_like_percent_g() {
        assert_eq!(
            CalcError::StackOverflow(2.5).to_string(),
            "stack full, can't push 2.5"
        );
        assert_eq!(
            CalcError::StackOverflow(100000000.0).to_string(),
            "stack full, can't push 1e+08"
        );
    }
}
