//! Distribution entry collection from the console.
//!
//! Entries arrive as `value:probability` lines; a blank line (or EOF)
//! ends the input. Malformed lines are reported and re-prompted, never
//! fatal.

use std::io::{self, BufRead, Write};

use ms_stat::Distribution;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryParseError {
    #[error("expected 'value:probability', got '{0}'")]
    MissingSeparator(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Parse a single `value:probability` line into a numeric pair.
pub fn parse_entry(line: &str) -> Result<(f64, f64), EntryParseError> {
    let (value, prob) = line
        .split_once(':')
        .ok_or_else(|| EntryParseError::MissingSeparator(line.to_string()))?;
    let value = parse_number(value)?;
    let prob = parse_number(prob)?;
    Ok((value, prob))
}

fn parse_number(text: &str) -> Result<f64, EntryParseError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| EntryParseError::NotANumber(text.to_string()))
}

/// Collect distribution entries interactively.
///
/// Duplicate outcome values overwrite earlier entries, so the last
/// probability the user typed for an outcome wins. The returned
/// distribution is unvalidated; validation happens in the computation.
pub fn collect_distribution<R, W>(input: &mut R, out: &mut W) -> io::Result<Distribution>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Enter entries as 'value:probability'. Finish with an empty line."
    )?;

    let mut entries: Vec<(f64, f64)> = Vec::new();
    loop {
        write!(out, ">>> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        match parse_entry(line) {
            Ok(entry) => entries.push(entry),
            Err(e) => writeln!(out, "Invalid entry ({e}). Try again.")?,
        }
    }
    log::debug!("collected {} entries", entries.len());
    Ok(Distribution::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_plain_entry() {
        assert_eq!(parse_entry("2:0.5"), Ok((2.0, 0.5)));
    }

    #[test]
    fn parses_with_whitespace_and_signs() {
        assert_eq!(parse_entry(" -1.5 : 0.25 "), Ok((-1.5, 0.25)));
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(matches!(
            parse_entry("2;0.5"),
            Err(EntryParseError::MissingSeparator(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_value() {
        assert_eq!(
            parse_entry("x:0.5"),
            Err(EntryParseError::NotANumber("x".to_string()))
        );
    }

    #[test]
    fn rejects_empty_probability() {
        assert_eq!(
            parse_entry("2:"),
            Err(EntryParseError::NotANumber(String::new()))
        );
    }

    #[test]
    fn collects_until_blank_line() {
        let mut input = Cursor::new("2:0.5\n4:0.5\n\n");
        let mut out = Vec::new();
        let dist = collect_distribution(&mut input, &mut out).unwrap();
        assert_eq!(dist.len(), 2);
        assert!(dist.validate().is_ok());
    }

    #[test]
    fn collects_until_eof() {
        let mut input = Cursor::new("1:1.0\n");
        let mut out = Vec::new();
        let dist = collect_distribution(&mut input, &mut out).unwrap();
        assert_eq!(dist.len(), 1);
    }

    #[test]
    fn malformed_line_reprompts() {
        let mut input = Cursor::new("oops\n2:0.5\n4:0.5\n\n");
        let mut out = Vec::new();
        let dist = collect_distribution(&mut input, &mut out).unwrap();
        assert_eq!(dist.len(), 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid entry"));
    }

    #[test]
    fn duplicate_outcome_keeps_last_probability() {
        let mut input = Cursor::new("1:0.2\n1:1.0\n\n");
        let mut out = Vec::new();
        let dist = collect_distribution(&mut input, &mut out).unwrap();
        assert_eq!(dist.len(), 1);
        assert_eq!(dist.iter().next(), Some((1.0, 1.0)));
    }
}
