use crate::domain::ports::Dialog;
use crate::utils::error::Result;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Line-based dialog: notices are printed, the prompt reads one line.
///
/// An empty line selects the prompt's default answer and end of input
/// cancels. A preset answer, if given, is returned without reading.
pub struct TerminalDialog<R, W> {
    input: R,
    output: W,
    preset: Option<String>,
}

impl TerminalDialog<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            preset: None,
        }
    }

    pub fn with_preset_answer(mut self, answer: Option<String>) -> Self {
        self.preset = answer;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Dialog for TerminalDialog<R, W> {
    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, message: &str, default: &str) -> Result<Option<String>> {
        if let Some(answer) = self.preset.take() {
            return Ok(Some(answer));
        }

        write!(self.output, "{} [{}]: ", message, default)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.is_empty() {
            Ok(Some(default.to_string()))
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dialog(input: &str) -> TerminalDialog<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalDialog::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_reads_line() {
        let mut dialog = dialog("Y2\n");
        let answer = dialog.prompt("Code", "Your code").unwrap();
        assert_eq!(answer.as_deref(), Some("Y2"));

        let output = String::from_utf8(dialog.into_output()).unwrap();
        assert_eq!(output, "Code [Your code]: ");
    }

    #[test]
    fn test_prompt_keeps_inner_whitespace() {
        let mut dialog = dialog(" Y2 \r\n");
        let answer = dialog.prompt("Code", "Your code").unwrap();
        assert_eq!(answer.as_deref(), Some(" Y2 "));
    }

    #[test]
    fn test_empty_line_selects_default() {
        let mut dialog = dialog("\n");
        let answer = dialog.prompt("Code", "Your code").unwrap();
        assert_eq!(answer.as_deref(), Some("Your code"));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut dialog = dialog("");
        assert_eq!(dialog.prompt("Code", "Your code").unwrap(), None);
    }

    #[test]
    fn test_preset_skips_input() {
        let mut dialog = dialog("ignored\n").with_preset_answer(Some("X1".to_string()));
        assert_eq!(
            dialog.prompt("Code", "Your code").unwrap().as_deref(),
            Some("X1")
        );

        let output = String::from_utf8(dialog.into_output()).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_notify_writes_line() {
        let mut dialog = dialog("");
        dialog.notify("Hallo").unwrap();
        assert_eq!(String::from_utf8(dialog.into_output()).unwrap(), "Hallo\n");
    }
}
