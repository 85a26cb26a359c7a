//! Input scanning for the calculator.
//!
//! Raw characters become [`Token`]s one call at a time. Numeric literal
//! scanning needs one character of lookahead to know where the literal
//! ends; the terminating character goes through the [`PushbackBuffer`] so
//! the next call starts exactly where the literal stopped.

use crate::error::CalcError;
use crate::pushback::PushbackBuffer;

/// Arithmetic operator characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Modulus,  // %
    Power,    // ^
    Sine,     // $
    Exp,      // &
}

/// Stack manipulation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Peek,      // p
    Duplicate, // d
    Swap,      // s
    Clear,     // c
}

/// One scanned unit of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Command(Command),
    /// `_`: pop the stack into a variable slot.
    VariableSet,
    /// A lowercase letter in read position.
    VariableGet(char),
    /// Evaluate-and-print trigger.
    Newline,
    /// Anything the classifier does not recognize.
    Unknown(char),
    EndOfInput,
}

/// Streaming tokenizer over borrowed input text.
pub struct Tokenizer<'a> {
    chars: std::str::Chars<'a>,
    pushback: PushbackBuffer,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            pushback: PushbackBuffer::new(),
        }
    }

    /// Scans and returns the next token. Blanks and tabs are skipped;
    /// a newline is a token of its own.
    pub fn next_token(&mut self) -> Result<Token, CalcError> {
        let mut c = match self.get_char() {
            Some(c) => c,
            None => return Ok(Token::EndOfInput),
        };
        while c == ' ' || c == '\t' {
            c = match self.get_char() {
                Some(c) => c,
                None => return Ok(Token::EndOfInput),
            };
        }

        if c.is_ascii_digit() || c == '.' {
            return self.scan_number(c);
        }
        if c == '-' {
            // A `-` only starts a literal when a digit or `.` follows;
            // otherwise it is the subtraction operator.
            match self.get_char() {
                Some(next) if next.is_ascii_digit() || next == '.' => {
                    self.unget(next)?;
                    return self.scan_number(c);
                }
                Some(next) => self.unget(next)?,
                None => {}
            }
            return Ok(Token::Operator(Operator::Subtract));
        }

        Ok(classify(c))
    }

    /// Returns a character to the input; the next read sees it first.
    pub fn unget(&mut self, c: char) -> Result<(), CalcError> {
        self.pushback.unget(c)
    }

    // RUST CONCEPT: Option chaining with or_else
    // Pending pushback characters win over fresh input
    fn get_char(&mut self) -> Option<char> {
        self.pushback.take().or_else(|| self.chars.next())
    }

    /// Scans a numeric literal starting at `first` (a digit, `.`, or a
    /// `-` known to be followed by a digit or `.`). The character that
    /// terminates the literal is pushed back.
    fn scan_number(&mut self, first: char) -> Result<Token, CalcError> {
        let mut literal = String::new();
        let mut current = Some(first);
        literal.push(first);

        if first == '-' {
            current = self.get_char();
            if let Some(body) = current {
                literal.push(body);
            }
        }

        if matches!(current, Some(d) if d.is_ascii_digit()) {
            current = self.take_digits(&mut literal);
            if current == Some('.') {
                literal.push('.');
                current = self.take_digits(&mut literal);
            }
        } else if current == Some('.') {
            // The literal began with the dot (".5", "-.25", or a bare ".")
            current = self.take_digits(&mut literal);
        }

        if let Some(terminator) = current {
            self.unget(terminator)?;
        }

        // atof leniency: a digitless literal like "." reads as zero
        Ok(Token::Number(literal.parse().unwrap_or(0.0)))
    }

    /// Appends a run of digits to `literal`, returning the first
    /// non-digit character (None when input runs out).
    fn take_digits(&mut self, literal: &mut String) -> Option<char> {
        while let Some(c) = self.get_char() {
            if c.is_ascii_digit() {
                literal.push(c);
            } else {
                return Some(c);
            }
        }
        None
    }
}

/// Classification for characters that do not start a numeric literal.
/// The command letters `p d s c` claim their characters before the
/// variable-read catch-all does.
fn classify(c: char) -> Token {
    match c {
        '+' => Token::Operator(Operator::Add),
        '*' => Token::Operator(Operator::Multiply),
        '/' => Token::Operator(Operator::Divide),
        '%' => Token::Operator(Operator::Modulus),
        '^' => Token::Operator(Operator::Power),
        '$' => Token::Operator(Operator::Sine),
        '&' => Token::Operator(Operator::Exp),
        'p' => Token::Command(Command::Peek),
        'd' => Token::Command(Command::Duplicate),
        's' => Token::Command(Command::Swap),
        'c' => Token::Command(Command::Clear),
        '_' => Token::VariableSet,
        '\n' => Token::Newline,
        'a'..='z' => Token::VariableGet(c),
        _ => Token::Unknown(c),
    }
}
