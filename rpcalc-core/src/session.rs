//! Calculator session state.

use crate::stack::ValueStack;
use crate::variables::VariableStore;

/// How `_` chooses the slot it assigns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignPolicy {
    /// Slots fill in alphabetical order regardless of any letter written
    /// before the `_` (the classic behavior).
    Sequential,
    /// A letter immediately before `_` names the slot; a bare `_` still
    /// falls back to sequential filling.
    ByLetter,
}

/// All mutable state for one calculator session.
///
/// One session per input stream, nothing shared: the stack, variable
/// store, and tokenizer pushback belong to exactly one evaluation loop
/// at a time (the calculator is single-threaded and synchronous).
#[derive(Debug)]
pub struct CalculatorSession {
    pub stack: ValueStack,
    pub variables: VariableStore,
    pub policy: AssignPolicy,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::with_policy(AssignPolicy::Sequential)
    }

    pub fn with_policy(policy: AssignPolicy) -> Self {
        Self {
            stack: ValueStack::new(),
            variables: VariableStore::new(),
            policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_sequential_and_empty() {
        let session = CalculatorSession::new();
        assert_eq!(session.policy, AssignPolicy::Sequential);
        assert!(session.stack.is_empty());
    }

    #[test]
    fn test_with_policy_selects_by_letter() {
        let session = CalculatorSession::with_policy(AssignPolicy::ByLetter);
        assert_eq!(session.policy, AssignPolicy::ByLetter);
    }
}
