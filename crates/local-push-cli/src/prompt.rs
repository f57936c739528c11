use std::io::{self, BufRead, Write};

const QUERY: &str = "Overwrite Dockerfile? [yN]";

/// Answer used for an empty line or end of input.
const DEFAULT_ANSWER: &str = "N";

/// Ask whether to overwrite the existing Dockerfile.
///
/// Only `y` and `N` are accepted (case-sensitive); anything else re-prompts.
pub(crate) fn confirm_overwrite<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<bool> {
    loop {
        write!(writer, "{QUERY} ")?;
        writer.flush()?;

        let mut line = String::new();
        let answer = if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            DEFAULT_ANSWER
        } else {
            match line.trim() {
                "" => DEFAULT_ANSWER,
                answer => answer,
            }
        };

        match answer {
            "y" => return Ok(true),
            "N" => return Ok(false),
            _ => writeln!(writer, "input must be 'y' or 'N'")?,
        }
    }
}
