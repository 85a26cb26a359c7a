// Interactive REPL built on editline

use editline::{LineEditor, terminals::StdioTerminal};
use rpcalc_core::{format_g, run_line, CalculatorSession, Output, StdoutOutput};
use std::io::Write;

pub fn run_repl(session: &mut CalculatorSession) {
    // Print ASCII art banner
    println!();
    println!("                       _      ");
    println!(" _ __ _ __   ___  __ _| | ___ ");
    println!("| '__| '_ \\ / __|/ _` | |/ __|");
    println!("| |  | |_) | (__| (_| | | (__ ");
    println!("|_|  | .__/ \\___|\\__,_|_|\\___|");
    println!("     |_|                v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Enter a program in reverse Polish notation, e.g. `1 2 - 4 5 + *`");
    println!("Type `p` to peek, `d` to duplicate, `s` to swap, `c` to clear");
    println!("Type `_` to store the top in a variable, a lowercase letter to read it back");
    println!("Press Ctrl-D to exit");
    println!();

    let mut out = StdoutOutput::new();

    // Create editline editor and terminal
    let mut editor = LineEditor::new(1024, 50);
    let mut terminal = StdioTerminal::new();

    loop {
        // Print prompt
        print!("\n> ");
        let _ = std::io::stdout().flush();

        match editor.read_line(&mut terminal) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                run_line(trimmed, session, &mut out);
                let _ = out.flush();

                // The line's own result was already printed; anything still
                // on the stack carries over, so show it
                if !session.stack.is_empty() {
                    print!("Stack: ");
                    for (i, value) in session.stack.as_slice().iter().enumerate() {
                        if i > 0 {
                            print!(" ");
                        }
                        print!("{}", format_g(*value, 6));
                    }
                    println!();
                }
            }
            Err(editline::Error::Eof) => {
                // EOF (Ctrl-D)
                println!("\nGoodbye!");
                break;
            }
            Err(editline::Error::Interrupted) => {
                // Ctrl-C - just continue
                println!("^C");
                continue;
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }
}
