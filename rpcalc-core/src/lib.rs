//! # rpcalc Core
//!
//! Evaluation library for a reverse Polish notation desk calculator.
//!
//! Input text is scanned into tokens (numeric literals, operators, stack
//! commands, variable references) and dispatched against a bounded value
//! stack and a 26-slot variable store. A newline evaluates and prints the
//! top of the stack.
//!
//! ## Features
//!
//! - **Report-and-continue**: every failure becomes a report line and
//!   evaluation moves on to the next token; nothing short of end of
//!   input stops the loop
//! - **Bounded state**: stack, variable store, and pushback buffer have
//!   fixed capacities with explicit overflow errors
//! - **Pluggable output**: reports go through the [`Output`] trait, so
//!   tests capture them and embedders redirect them
//! - **C-compatible report formats**: printf `%g` rounding and notation,
//!   reproduced in [`numfmt`]
//!
//! ## Example
//!
//! ```ignore
//! use rpcalc_core::{CalculatorSession, StdoutOutput, run};
//!
//! let mut session = CalculatorSession::new();
//! let mut out = StdoutOutput::new();
//!
//! // Prints "\t9"
//! run("4 5 +\n", &mut session, &mut out);
//! assert!(session.stack.is_empty());
//! ```

// Public modules
pub mod error;
pub mod output;
pub mod numfmt;
pub mod pushback;
pub mod tokenizer;
pub mod stack;
pub mod variables;
pub mod session;
pub mod evaluator;
pub mod stdout_output;

// Re-exports for convenience
pub use error::CalcError;
pub use evaluator::{run, run_line};
pub use numfmt::format_g;
pub use output::Output;
pub use pushback::PushbackBuffer;
pub use session::{AssignPolicy, CalculatorSession};
pub use stack::ValueStack;
pub use stdout_output::StdoutOutput;
pub use tokenizer::{Command, Operator, Token, Tokenizer};
pub use variables::VariableStore;
