//! Bounded value stack.

use crate::error::CalcError;

/// Default capacity of the value stack.
pub const STACK_CAPACITY: usize = 100;

/// LIFO stack of f64 with a fixed capacity.
///
/// Overflow and underflow are ordinary errors, never panics, and a failed
/// operation leaves the existing contents exactly as they were.
#[derive(Debug)]
pub struct ValueStack {
    values: Vec<f64>,
    capacity: usize,
}

impl ValueStack {
    pub fn new() -> Self {
        Self::with_capacity(STACK_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// ( -- v )
    pub fn push(&mut self, value: f64) -> Result<(), CalcError> {
        if self.values.len() >= self.capacity {
            return Err(CalcError::StackOverflow(value));
        }
        self.values.push(value);
        Ok(())
    }

    // RUST CONCEPT: Option to Result conversion with ok_or
    // Vec::pop models emptiness as None; the calculator calls that underflow
    /// ( v -- )
    pub fn pop(&mut self) -> Result<f64, CalcError> {
        self.values.pop().ok_or(CalcError::StackUnderflow)
    }

    /// Top value, left in place.
    pub fn peek(&self) -> Result<f64, CalcError> {
        self.values.last().copied().ok_or(CalcError::StackUnderflow)
    }

    /// ( v -- v v )
    pub fn duplicate(&mut self) -> Result<(), CalcError> {
        let value = self.pop()?;
        self.push(value)?;
        self.push(value)
    }

    /// ( a b -- b a )
    pub fn swap(&mut self) -> Result<(), CalcError> {
        let len = self.values.len();
        if len < 2 {
            return Err(CalcError::StackUnderflow);
        }
        self.values.swap(len - 1, len - 2);
        Ok(())
    }

    /// Empties the stack, scrubbing the slots first.
    pub fn clear(&mut self) {
        for slot in &mut self.values {
            *slot = 0.0;
        }
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Bottom-to-top view of the current contents.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_returns_in_reverse_push_order() {
        let mut stack = ValueStack::new();
        stack.push(1.0).unwrap();
        stack.push(2.0).unwrap();
        stack.push(3.0).unwrap();

        assert_eq!(stack.pop().unwrap(), 3.0);
        assert_eq!(stack.pop().unwrap(), 2.0);
        assert_eq!(stack.pop().unwrap(), 1.0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_past_capacity_leaves_contents_unchanged() {
        let mut stack = ValueStack::with_capacity(2);
        stack.push(1.0).unwrap();
        stack.push(2.0).unwrap();

        assert_eq!(stack.push(3.0), Err(CalcError::StackOverflow(3.0)));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_pop_and_peek_on_empty_underflow() {
        let mut stack = ValueStack::new();
        assert_eq!(stack.pop(), Err(CalcError::StackUnderflow));
        assert_eq!(stack.peek(), Err(CalcError::StackUnderflow));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = ValueStack::new();
        stack.push(42.0).unwrap();

        assert_eq!(stack.peek().unwrap(), 42.0);
        assert_eq!(stack.peek().unwrap(), 42.0);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_duplicate_round_trip() {
        let mut stack = ValueStack::new();
        stack.push(7.5).unwrap();
        stack.duplicate().unwrap();

        // Size grew by exactly one and both copies pop back out
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop().unwrap(), 7.5);
        assert_eq!(stack.pop().unwrap(), 7.5);
    }

    #[test]
    fn test_duplicate_on_empty_underflows() {
        let mut stack = ValueStack::new();
        assert_eq!(stack.duplicate(), Err(CalcError::StackUnderflow));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_duplicate_at_capacity_overflows_without_net_change() {
        let mut stack = ValueStack::with_capacity(2);
        stack.push(1.0).unwrap();
        stack.push(2.0).unwrap();

        assert_eq!(stack.duplicate(), Err(CalcError::StackOverflow(2.0)));
        assert_eq!(stack.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_swap_exchanges_top_two() {
        let mut stack = ValueStack::new();
        stack.push(1.0).unwrap();
        stack.push(2.0).unwrap();
        stack.push(3.0).unwrap();
        stack.swap().unwrap();

        assert_eq!(stack.as_slice(), &[1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_swap_needs_two_values() {
        let mut stack = ValueStack::new();
        assert_eq!(stack.swap(), Err(CalcError::StackUnderflow));

        stack.push(1.0).unwrap();
        assert_eq!(stack.swap(), Err(CalcError::StackUnderflow));
        assert_eq!(stack.as_slice(), &[1.0]);
    }

    #[test]
    fn test_clear_empties_the_stack() {
        let mut stack = ValueStack::new();
        stack.push(1.0).unwrap();
        stack.push(2.0).unwrap();
        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(CalcError::StackUnderflow));
    }
}
