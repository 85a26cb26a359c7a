//! Single-letter variable store.
//!
//! Twenty-six slots, `a` through `z`. Default assignment fills slots in
//! alphabetical order no matter which letter the user had in mind (the
//! classic single-pass behavior); reads always use the true letter
//! offset. A slot holding zero is distinct from a slot never assigned.

use crate::error::CalcError;

/// Number of variable slots, one per lowercase letter.
pub const VARIABLE_SLOTS: usize = 26;

// RUST CONCEPT: Option in the slot array
// Some(0.0) is an assigned zero, None a slot never written
#[derive(Debug)]
pub struct VariableStore {
    slots: [Option<f64>; VARIABLE_SLOTS],
    next_free: usize,
}

impl VariableStore {
    pub fn new() -> Self {
        Self {
            slots: [None; VARIABLE_SLOTS],
            next_free: 0,
        }
    }

    /// Stores `value` in the next slot in alphabetical order and returns
    /// the letter that received it.
    pub fn assign_next(&mut self, value: f64) -> Result<char, CalcError> {
        if self.next_free >= VARIABLE_SLOTS {
            return Err(CalcError::VariableSpaceExhausted);
        }
        let letter = (b'a' + self.next_free as u8) as char;
        self.slots[self.next_free] = Some(value);
        self.next_free += 1;
        Ok(letter)
    }

    /// Stores `value` under a specific letter (by-letter assignment).
    /// The allocation pointer used by [`assign_next`](Self::assign_next)
    /// is not advanced.
    pub fn assign_to(&mut self, letter: char, value: f64) -> Result<(), CalcError> {
        let index = slot_index(letter).ok_or(CalcError::UndefinedVariable(letter))?;
        self.slots[index] = Some(value);
        Ok(())
    }

    /// Value stored under `letter`; a never-assigned slot is an error,
    /// not a silent zero.
    pub fn read(&self, letter: char) -> Result<f64, CalcError> {
        slot_index(letter)
            .and_then(|index| self.slots[index])
            .ok_or(CalcError::UndefinedVariable(letter))
    }
}

fn slot_index(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter as u8 - b'a') as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_fills_slots_in_order() {
        let mut store = VariableStore::new();
        assert_eq!(store.assign_next(1.0).unwrap(), 'a');
        assert_eq!(store.assign_next(2.0).unwrap(), 'b');
        assert_eq!(store.assign_next(3.0).unwrap(), 'c');

        assert_eq!(store.read('a').unwrap(), 1.0);
        assert_eq!(store.read('b').unwrap(), 2.0);
        assert_eq!(store.read('c').unwrap(), 3.0);
    }

    #[test]
    fn test_read_of_unassigned_slot_is_an_error() {
        let mut store = VariableStore::new();
        store.assign_next(1.0).unwrap();

        assert_eq!(store.read('b'), Err(CalcError::UndefinedVariable('b')));
        assert_eq!(store.read('z'), Err(CalcError::UndefinedVariable('z')));
    }

    #[test]
    fn test_assigned_zero_is_not_unassigned() {
        let mut store = VariableStore::new();
        store.assign_next(0.0).unwrap();

        assert_eq!(store.read('a').unwrap(), 0.0);
    }

    #[test]
    fn test_all_slots_exhaust() {
        let mut store = VariableStore::new();
        for i in 0..VARIABLE_SLOTS {
            let letter = store.assign_next(i as f64).unwrap();
            assert_eq!(letter, (b'a' + i as u8) as char);
        }

        assert_eq!(
            store.assign_next(99.0),
            Err(CalcError::VariableSpaceExhausted)
        );
        assert_eq!(store.read('z').unwrap(), 25.0);
    }

    #[test]
    fn test_assign_to_targets_the_named_letter() {
        let mut store = VariableStore::new();
        store.assign_to('x', 9.0).unwrap();

        assert_eq!(store.read('x').unwrap(), 9.0);
        // Other slots stay unassigned
        assert_eq!(store.read('a'), Err(CalcError::UndefinedVariable('a')));
    }

    #[test]
    fn test_assign_to_does_not_advance_sequential_pointer() {
        let mut store = VariableStore::new();
        store.assign_to('x', 9.0).unwrap();

        assert_eq!(store.assign_next(1.0).unwrap(), 'a');
    }

    #[test]
    fn test_non_lowercase_is_rejected() {
        let mut store = VariableStore::new();
        assert_eq!(store.read('A'), Err(CalcError::UndefinedVariable('A')));
        assert_eq!(
            store.assign_to('A', 1.0),
            Err(CalcError::UndefinedVariable('A'))
        );
    }
}
