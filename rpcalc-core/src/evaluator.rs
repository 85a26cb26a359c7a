// Token dispatch loop for the calculator.
//
// EXECUTION MODEL:
// 1. Numbers push themselves onto the value stack
// 2. Operators pop their operands and push one result
// 3. Commands manipulate the stack in place (peek, duplicate, swap, clear)
// 4. `_` pops into the variable store; a lowercase letter reads from it
// 5. A newline pops and prints the top of the stack, if any
//
// Every failure is reported through the output sink and the loop moves on
// to the next token. Only end of input stops the loop: a typo never kills
// the session.

use crate::error::CalcError;
use crate::numfmt::format_g;
use crate::output::Output;
use crate::session::{AssignPolicy, CalculatorSession};
use crate::tokenizer::{Command, Operator, Token, Tokenizer};

/// Evaluates `input` to end of input against an existing session.
pub fn run(input: &str, session: &mut CalculatorSession, out: &mut dyn Output) {
    let mut tokens = Tokenizer::new(input);
    // One token of lookahead, used by by-letter assignment
    let mut pending: Option<Token> = None;

    loop {
        // RUST CONCEPT: Option::take drains the lookahead slot
        let token = match pending.take() {
            Some(token) => token,
            None => match tokens.next_token() {
                Ok(token) => token,
                Err(error) => {
                    report_error(out, &error);
                    continue;
                }
            },
        };

        if token == Token::EndOfInput {
            break;
        }

        // Under the by-letter policy `x _` assigns to x, which takes one
        // token of lookahead before ordinary dispatch.
        if session.policy == AssignPolicy::ByLetter {
            if let Token::VariableGet(letter) = token {
                match tokens.next_token() {
                    Ok(Token::VariableSet) => {
                        if let Err(error) = assign_to_letter(letter, session, out) {
                            report_error(out, &error);
                        }
                        continue;
                    }
                    Ok(other) => pending = Some(other),
                    Err(error) => report_error(out, &error),
                }
            }
        }

        if let Err(error) = dispatch(&token, session, out) {
            report_error(out, &error);
        }
    }
}

/// Evaluates one line of input, supplying the trailing newline that
/// triggers evaluate-and-print when the caller's line lacks one.
pub fn run_line(line: &str, session: &mut CalculatorSession, out: &mut dyn Output) {
    if line.ends_with('\n') {
        run(line, session, out);
    } else {
        let mut text = String::with_capacity(line.len() + 1);
        text.push_str(line);
        text.push('\n');
        run(&text, session, out);
    }
}

/// Dispatches a single token against the session.
fn dispatch(
    token: &Token,
    session: &mut CalculatorSession,
    out: &mut dyn Output,
) -> Result<(), CalcError> {
    match token {
        Token::Number(value) => session.stack.push(*value),
        Token::Operator(op) => apply_operator(*op, session),
        Token::Command(cmd) => apply_command(*cmd, session, out),
        Token::VariableSet => {
            let value = session.stack.pop()?;
            let letter = session.variables.assign_next(value)?;
            report_assignment(out, letter, value);
            Ok(())
        }
        Token::VariableGet(letter) => {
            let value = session.variables.read(*letter)?;
            session.stack.push(value)
        }
        Token::Newline => {
            if !session.stack.is_empty() {
                let value = session.stack.pop()?;
                let _ = out.write_line(&format!("\t{}", format_g(value, 8)));
            }
            Ok(())
        }
        Token::Unknown(c) => Err(CalcError::UnknownCommand(*c)),
        Token::EndOfInput => Ok(()),
    }
}

/// Applies an arithmetic operator to the stack.
///
/// `/` checks the divisor before touching the dividend, so a zero divisor
/// consumes only the divisor. `%` pops both operands first and tests the
/// truncated divisor (a NaN divisor truncates to zero), consuming both on
/// failure. The asymmetry is part of the calculator's observable behavior.
fn apply_operator(op: Operator, session: &mut CalculatorSession) -> Result<(), CalcError> {
    let stack = &mut session.stack;
    match op {
        // ( a b -- a+b )
        Operator::Add => {
            let b = stack.pop()?;
            let a = stack.pop()?;
            stack.push(a + b)
        }
        // ( a b -- a-b )
        Operator::Subtract => {
            let b = stack.pop()?;
            let a = stack.pop()?;
            stack.push(a - b)
        }
        // ( a b -- a*b )
        Operator::Multiply => {
            let b = stack.pop()?;
            let a = stack.pop()?;
            stack.push(a * b)
        }
        // ( a b -- a/b )
        Operator::Divide => {
            let divisor = stack.pop()?;
            if divisor == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            let dividend = stack.pop()?;
            stack.push(dividend / divisor)
        }
        // ( a b -- a mod b ), both operands truncated toward zero
        Operator::Modulus => {
            // The cast truncates, saturates, and turns NaN into 0, so the
            // zero test on the cast value catches every unusable divisor
            let divisor = stack.pop()? as i64;
            let dividend = stack.pop()? as i64;
            if divisor == 0 {
                return Err(CalcError::ModulusByZero);
            }
            // wrapping_rem: i64::MIN paired with divisor -1 must not overflow
            stack.push(dividend.wrapping_rem(divisor) as f64)
        }
        // ( a -- sin a )
        Operator::Sine => {
            let a = stack.pop()?;
            stack.push(a.sin())
        }
        // ( a -- e^a )
        Operator::Exp => {
            let a = stack.pop()?;
            stack.push(a.exp())
        }
        // ( a b -- a^b )
        Operator::Power => {
            let exponent = stack.pop()?;
            let base = stack.pop()?;
            stack.push(base.powf(exponent))
        }
    }
}

/// Applies a stack command. Peek reports through the output sink.
fn apply_command(
    cmd: Command,
    session: &mut CalculatorSession,
    out: &mut dyn Output,
) -> Result<(), CalcError> {
    match cmd {
        Command::Peek => {
            let top = session.stack.peek()?;
            let _ = out.write_line(&format!("top of the stack: {}", format_g(top, 6)));
            Ok(())
        }
        Command::Duplicate => session.stack.duplicate(),
        Command::Swap => session.stack.swap(),
        Command::Clear => {
            session.stack.clear();
            Ok(())
        }
    }
}

/// By-letter assignment: `x _` stores the popped value under x.
fn assign_to_letter(
    letter: char,
    session: &mut CalculatorSession,
    out: &mut dyn Output,
) -> Result<(), CalcError> {
    let value = session.stack.pop()?;
    session.variables.assign_to(letter, value)?;
    report_assignment(out, letter, value);
    Ok(())
}

fn report_assignment(out: &mut dyn Output, letter: char, value: f64) {
    let _ = out.write_line(&format!("variable {}: {:.3}", letter, value));
}

fn report_error(out: &mut dyn Output, error: &CalcError) {
    let _ = out.write_line(&format!("error: {}", error));
}
