//! Stdout implementation of the Output trait.

use std::io::{self, Write};

use crate::output::Output;

pub struct StdoutOutput;

impl StdoutOutput {
    pub fn new() -> Self {
        StdoutOutput
    }
}

impl Output for StdoutOutput {
    fn write(&mut self, text: &str) -> Result<(), ()> {
        io::stdout().write_all(text.as_bytes()).map_err(|_| ())
    }

    fn flush(&mut self) -> Result<(), ()> {
        io::stdout().flush().map_err(|_| ())
    }
}
