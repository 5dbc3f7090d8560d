use anyhow::Context;
use std::io::{BufRead, Write};

pub(crate) const DATE_PROMPT: &str = "Enter birth date (YYYY-MM-DD): ";
pub(crate) const TIME_PROMPT: &str = "Enter birth time (HH:MM, 24-hour format): ";
pub(crate) const LATITUDE_PROMPT: &str = "Enter latitude of birthplace: ";
pub(crate) const LONGITUDE_PROMPT: &str = "Enter longitude of birthplace: ";
pub(crate) const TIMEZONE_PROMPT: &str = "Enter timezone offset from UTC (e.g., -5 for EST): ";

/// Return `given` if present, otherwise print `prompt` and read one line.
pub(crate) fn value_or_prompt<R: BufRead, W: Write>(
    given: Option<String>,
    prompt: &str,
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<String> {
    if let Some(value) = given {
        return Ok(value);
    }

    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .with_context(|| format!("Failed to read answer to '{}'", prompt.trim()))?;
    if read == 0 {
        anyhow::bail!("Input ended before '{}' was answered", prompt.trim());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
