//! Output trait for calculator reports.
//!
//! The evaluator never talks to stdout directly; it writes through this
//! trait so tests can capture report lines and embedders can redirect
//! them anywhere a terminal would not fit.

/// Line-oriented text sink.
///
/// Write operations return Ok(()) on success, Err(()) on failure. The
/// evaluator ignores report failures; there is nowhere further to report
/// them.
pub trait Output {
    /// Writes raw text to the sink.
    fn write(&mut self, text: &str) -> Result<(), ()>;

    /// Flushes any buffered output.
    fn flush(&mut self) -> Result<(), ()>;

    /// Writes text followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<(), ()> {
        self.write(text)?;
        self.write("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock output for testing
    struct MockOutput {
        buffer: String,
    }

    impl MockOutput {
        fn new() -> Self {
            Self {
                buffer: String::new(),
            }
        }
    }

    impl Output for MockOutput {
        fn write(&mut self, text: &str) -> Result<(), ()> {
            self.buffer.push_str(text);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut output = MockOutput::new();
        output.write("Hello").unwrap();
        output.write_line(" World").unwrap();
        output.flush().unwrap();

        assert_eq!(output.buffer, "Hello World\n");
    }
}
