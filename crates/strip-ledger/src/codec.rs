//! Line-oriented text format for strips.
//!
//! One record per line:
//!
//! ```text
//! record     := checkpoint | arithmetic
//! checkpoint := "#" | "="
//! arithmetic := sign number
//! sign       := "+" | "-" | "*" | "/"
//! ```
//!
//! The first entry of a strip may only add or subtract: there is no prior
//! total to multiply or divide. No whitespace is tolerated and blank lines
//! are rejected.

use strip_types::{Entry, Operator, TypeError};

use crate::error::LedgerError;

pub const INVALID_NUMBER_MESSAGE: &str = "The value following an operator must be a number";
pub const INVALID_LEADING_MESSAGE: &str = "The first character may only be +, - or the Enter key";

/// Separator written after every record.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Why a single record was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("{}", INVALID_NUMBER_MESSAGE)]
    InvalidNumberFormat,

    #[error("{}", INVALID_LEADING_MESSAGE)]
    InvalidLeadingCharacter,
}

impl RecordError {
    /// Attach the 1-based line number the record was read from.
    pub fn at_line(self, line: usize) -> LedgerError {
        match self {
            Self::InvalidNumberFormat => LedgerError::InvalidNumberFormat { line },
            Self::InvalidLeadingCharacter => LedgerError::InvalidLeadingCharacter { line },
        }
    }
}

impl From<TypeError> for RecordError {
    /// A bare arithmetic sign is missing its number; a bad sign or a
    /// checkpoint followed by text is a bad leading character.
    fn from(error: TypeError) -> Self {
        match error {
            TypeError::MissingOperand(_) => Self::InvalidNumberFormat,
            TypeError::UnexpectedOperand(_) | TypeError::UnknownSign(_) => {
                Self::InvalidLeadingCharacter
            }
        }
    }
}

/// Parse one record.
///
/// `strip_is_empty` says whether the record would become the first entry,
/// in which case only `+`, `-` and checkpoints are accepted. For records
/// longer than one character the number is checked before the sign, so
/// `xabc` and `*abc` both report a number error.
pub fn parse_record(record: &str, strip_is_empty: bool) -> Result<Entry, RecordError> {
    let mut chars = record.chars();
    let Some(first) = chars.next() else {
        return Err(RecordError::InvalidLeadingCharacter);
    };
    let number = chars.as_str();

    if number.is_empty() {
        return Ok(Operator::try_from_sign(first)?.checkpoint()?);
    }

    let operand: f64 = number
        .parse()
        .map_err(|_| RecordError::InvalidNumberFormat)?;

    let op = Operator::try_from_sign(first)?;
    if strip_is_empty && matches!(op, Operator::Multiply | Operator::Divide) {
        return Err(RecordError::InvalidLeadingCharacter);
    }
    Ok(op.with_operand(operand)?)
}

/// Serialize entries, one canonical record per line.
pub fn encode(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{entry}{LINE_SEPARATOR}"))
        .collect()
}

/// Parse a whole document. Stops at the first invalid record.
pub fn decode(text: &str) -> Result<Vec<Entry>, LedgerError> {
    let mut entries = Vec::new();
    for (index, record) in text.lines().enumerate() {
        let entry = parse_record(record, entries.is_empty()).map_err(|e| e.at_line(index + 1))?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoints_parse_anywhere() {
        assert_eq!(parse_record("#", true), Ok(Entry::Subtotal));
        assert_eq!(parse_record("=", true), Ok(Entry::Total));
        assert_eq!(parse_record("=", false), Ok(Entry::Total));
    }

    #[test]
    fn arithmetic_records() {
        assert_eq!(parse_record("+5", true), Ok(Entry::Add(5.0)));
        assert_eq!(parse_record("-3.5", true), Ok(Entry::Subtract(3.5)));
        assert_eq!(parse_record("*2", false), Ok(Entry::Multiply(2.0)));
        assert_eq!(parse_record("/-4", false), Ok(Entry::Divide(-4.0)));
        assert_eq!(parse_record("+1e3", false), Ok(Entry::Add(1000.0)));
    }

    #[test]
    fn first_entry_cannot_multiply_or_divide() {
        assert_eq!(parse_record("*5", true), Err(RecordError::InvalidLeadingCharacter));
        assert_eq!(parse_record("/5", true), Err(RecordError::InvalidLeadingCharacter));
    }

    #[test]
    fn unknown_sign_is_rejected() {
        assert_eq!(parse_record("x5", false), Err(RecordError::InvalidLeadingCharacter));
        assert_eq!(parse_record("#5", false), Err(RecordError::InvalidLeadingCharacter));
        assert_eq!(parse_record("x", false), Err(RecordError::InvalidLeadingCharacter));
        assert_eq!(parse_record("", false), Err(RecordError::InvalidLeadingCharacter));
    }

    #[test]
    fn operand_must_be_a_number() {
        assert_eq!(parse_record("+abc", true), Err(RecordError::InvalidNumberFormat));
        assert_eq!(parse_record("+ 5", false), Err(RecordError::InvalidNumberFormat));
        assert_eq!(parse_record("+", true), Err(RecordError::InvalidNumberFormat));
        // The number is checked before the sign.
        assert_eq!(parse_record("xabc", false), Err(RecordError::InvalidNumberFormat));
    }

    #[test]
    fn operator_errors_map_to_record_errors() {
        assert_eq!(
            RecordError::from(TypeError::MissingOperand(Operator::Multiply)),
            RecordError::InvalidNumberFormat
        );
        assert_eq!(
            RecordError::from(TypeError::UnexpectedOperand(Operator::Subtotal)),
            RecordError::InvalidLeadingCharacter
        );
        assert_eq!(
            RecordError::from(TypeError::UnknownSign('%')),
            RecordError::InvalidLeadingCharacter
        );
        assert_eq!(parse_record("*", false), Err(RecordError::InvalidNumberFormat));
        assert_eq!(parse_record("=1", true), Err(RecordError::InvalidLeadingCharacter));
    }

    #[test]
    fn non_finite_operands_survive_text() {
        let entries = [Entry::Add(f64::INFINITY), Entry::Subtract(f64::NEG_INFINITY)];
        assert_eq!(decode(&encode(&entries)).unwrap(), entries);
        let nan = decode("+NaN").unwrap();
        assert!(nan[0].operand().is_some_and(f64::is_nan));
    }

    #[test]
    fn encode_terminates_every_record() {
        let text = encode(&[Entry::Add(5.0), Entry::Multiply(2.0), Entry::Subtotal]);
        assert_eq!(text, ["+5", "*2", "#", ""].join(LINE_SEPARATOR));
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn decode_reports_first_bad_line() {
        let err = decode("+1\n*2\n+x\n*y\n").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidNumberFormat { line: 3 }));

        // A leading checkpoint makes the strip non-empty.
        assert_eq!(
            decode("=\n*2\n").unwrap(),
            vec![Entry::Total, Entry::Multiply(2.0)]
        );
    }

    #[test]
    fn decode_accepts_crlf_and_missing_final_newline() {
        assert_eq!(
            decode("+1\r\n*2\r\n=").unwrap(),
            vec![Entry::Add(1.0), Entry::Multiply(2.0), Entry::Total]
        );
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn blank_line_is_rejected() {
        let err = decode("+1\n\n+2\n").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidLeadingCharacter { line: 2 }));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(RecordError::InvalidNumberFormat.to_string(), INVALID_NUMBER_MESSAGE);
        let err = RecordError::InvalidLeadingCharacter.at_line(4);
        assert_eq!(
            err.to_string(),
            "line 4: The first character may only be +, - or the Enter key"
        );
        assert_eq!(err.validation_message(), Some(INVALID_LEADING_MESSAGE));
    }
}
