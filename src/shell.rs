use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{interpreter::config::Config, run_line};

/// Printed before each input line and in front of every output line.
pub const PROMPT: &str = ">> ";
/// The single message reported for any failed line.
pub const SYNTAX_ERROR: &str = "Syntax Error!";

/// Reads and runs lines until end of input or a blank line.
///
/// Every line runs in isolation. A successful line commits its output (if it
/// printed anything); a failed line writes `>> Syntax Error!` and nothing
/// else. The detailed error only goes to the log.
///
/// Input is read as raw bytes. Invalid UTF-8 is replaced rather than
/// rejected, so such a line fails like any other bad line and the session
/// goes on.
///
/// # Parameters
/// - `input`: Source of program lines.
/// - `output`: Sink for prompts, results and error lines.
/// - `config`: Dialect and limits applied to every line.
/// - `prompt`: Whether to write `>> ` before reading each line.
///
/// # Errors
/// Propagates I/O errors from `input` and `output`.
///
/// # Example
/// ```
/// use plang::{interpreter::config::Config, shell::run_session};
///
/// let input = "integer k ; k = 5 ; print k ;\nprint q ;\n\nprint k ;\n";
/// let mut output = Vec::new();
/// run_session(input.as_bytes(), &mut output, &Config::default(), false).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), ">> 5\n>> Syntax Error!\n");
/// ```
pub fn run_session<R, W>(mut input: R, output: &mut W, config: &Config, prompt: bool) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    let mut bytes = Vec::new();
    let mut count = 0usize;

    loop {
        if prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        bytes.clear();
        if input.read_until(b'\n', &mut bytes)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&bytes);
        if line.trim().is_empty() {
            break;
        }
        count += 1;

        match run_line(&line, config) {
            Ok(buffer) => buffer.commit(output)?,
            Err(e) => {
                debug!("line {count}: {e}");
                writeln!(output, "{PROMPT}{SYNTAX_ERROR}")?;
            },
        }
    }

    info!("session ended after {count} line(s)");
    Ok(())
}
