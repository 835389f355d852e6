//! Interactive token prompt.
//!
//! The REPL reads one line at a time, runs a fresh lexer over it, and
//! prints each token's debug representation. It exits when the input
//! stream closes.

use std::io::{BufRead, Write};

use monkeyc_lex::{Lexer, TokenKind};

/// The fixed input prompt.
pub const PROMPT: &str = ">> ";

/// Run the prompt loop until `input` is exhausted.
///
/// Generic over the streams so tests can drive it in memory.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> std::io::Result<()> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            writeln!(output, "{:?}", token)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_repl(input: &str) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prompt_is_printed() {
        let output = run_repl("");
        assert_eq!(output, PROMPT);
    }

    #[test]
    fn test_tokens_are_printed_per_line() {
        let output = run_repl("let x = 5;\n");
        assert!(output.starts_with(PROMPT));
        assert!(output.contains("kind: Let"));
        assert!(output.contains("literal: \"x\""));
        assert!(output.contains("kind: Int"));
        assert!(output.contains("kind: Semicolon"));
        // Eof terminates the line's stream without being printed
        assert!(!output.contains("Eof"));
    }

    #[test]
    fn test_each_line_gets_fresh_lexer() {
        let output = run_repl("let\nfn\n");
        assert_eq!(output.matches(PROMPT).count(), 3);
        assert!(output.contains("kind: Let"));
        assert!(output.contains("kind: Function"));
    }

    #[test]
    fn test_illegal_tokens_are_echoed() {
        let output = run_repl("@\n");
        assert!(output.contains("kind: Illegal"));
        assert!(output.contains("literal: \"@\""));
    }
}
