//! Character pushback for tokenizer lookahead.
//!
//! The tokenizer sometimes reads one character past the end of a token to
//! know the token is finished (the end of a numeric literal, or the
//! character after a lone `-`). That character is parked here and handed
//! out again before the real input is touched.

use crate::error::CalcError;

/// Default capacity of the pushback buffer.
pub const PUSHBACK_CAPACITY: usize = 100;

/// Bounded LIFO of characters returned to the input.
#[derive(Debug)]
pub struct PushbackBuffer {
    chars: Vec<char>,
    capacity: usize,
}

impl PushbackBuffer {
    pub fn new() -> Self {
        Self::with_capacity(PUSHBACK_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Parks a character for re-reading. At capacity the character is
    /// discarded and an error returned; the buffer contents stay intact.
    pub fn unget(&mut self, c: char) -> Result<(), CalcError> {
        if self.chars.len() >= self.capacity {
            return Err(CalcError::PushbackOverflow);
        }
        self.chars.push(c);
        Ok(())
    }

    /// Most recently parked character, if any are pending.
    pub fn take(&mut self) -> Option<char> {
        self.chars.pop()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
