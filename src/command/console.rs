//! Line-oriented prompt/response console over any reader and writer.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            line: String::new(),
        }
    }

    /// Print `message` without a newline and read one line of input.
    ///
    /// Returns `None` at end of input. The answer is trimmed.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None); // EOF
        }
        Ok(Some(self.line.trim().to_string()))
    }

    /// Yes/no question; `y`/`yes` in any case is yes, anything else no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.prompt(&format!("{} (y/n): ", question))?;
        Ok(matches!(
            answer.as_deref().map(str::to_lowercase).as_deref(),
            Some("y") | Some("yes")
        ))
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_and_eof() {
        let mut console = Console::new(Cursor::new("  hello \n"), Vec::new());

        assert_eq!(console.prompt("> ").unwrap(), Some("hello".to_string()));
        assert_eq!(console.prompt("> ").unwrap(), None);

        let (_, output) = console.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "> > ");
    }

    #[test]
    fn test_confirm() {
        let mut console = Console::new(Cursor::new("Y\nyes\nn\nsure\n"), Vec::new());

        assert!(console.confirm("Directed?").unwrap());
        assert!(console.confirm("Directed?").unwrap());
        assert!(!console.confirm("Directed?").unwrap());
        assert!(!console.confirm("Directed?").unwrap());
        assert!(!console.confirm("Directed?").unwrap());
    }
}
