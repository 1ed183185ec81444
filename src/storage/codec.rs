//! Line-oriented text codec shared by the member and workout files.
//!
//! Each record is written as a block of `Label: value` lines in a fixed
//! order, terminated by a `---` separator line. Decoding scans for the
//! record-start label and then consumes the known number of field lines.
//! Decoding stops at the first malformed record; records decoded before it
//! are kept.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::storage::error::{CodecError, RecordKind, StoreError};

/// Line terminating every record block.
pub const SEPARATOR: &str = "---";

/// Date format used for join and workout dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A record that can be held in a [`RecordStore`](crate::storage::RecordStore).
pub trait Record: Clone {
    /// Store-assigned identifier.
    fn id(&self) -> u32;
}

/// Field layout of one record kind in the text format.
pub trait RecordCodec {
    type Record: Record;

    /// Kind of record, used in errors and logs.
    const KIND: RecordKind;

    /// Label of the first line of each block, without the trailing space.
    const START_LABEL: &'static str;

    /// Whether a missing file is worth reporting on load.
    const REQUIRED: bool;

    /// Append the field lines of one record (everything after the start line
    /// and before the separator).
    fn encode_fields(record: &Self::Record, out: &mut String);

    /// Rebuild a record from the field lines that follow its start line.
    fn decode_fields(id: u32, fields: &mut FieldLines<'_>) -> Result<Self::Record, CodecError>;
}

/// Result of decoding a whole file.
#[derive(Debug)]
pub struct Decoded<T> {
    /// Records decoded before the end of the file or the first error
    pub records: Vec<T>,
    /// The error that stopped decoding, if any
    pub error: Option<CodecError>,
}

/// Serialize a collection, in order, to the text format.
pub fn encode<C: RecordCodec>(records: &[C::Record]) -> String {
    let mut out = String::new();
    for record in records {
        push_field(&mut out, C::START_LABEL, record.id());
        C::encode_fields(record, &mut out);
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

/// Deserialize a collection from the text format.
///
/// Lines outside a record block are ignored. Both `\n` and `\r\n` line
/// endings are accepted.
pub fn decode<C: RecordCodec>(text: &str) -> Decoded<C::Record> {
    let mut fields = FieldLines::new(text);
    let mut records = Vec::new();

    while let Some((line, content)) = fields.next_line() {
        let Some(rest) = content.strip_prefix(C::START_LABEL) else {
            continue;
        };

        let result = parse_number(line, C::START_LABEL, strip_space(rest))
            .and_then(|id| C::decode_fields(id, &mut fields))
            .and_then(|record| fields.separator().map(|_| record));

        match result {
            Ok(record) => records.push(record),
            Err(error) => {
                return Decoded {
                    records,
                    error: Some(error),
                }
            }
        }
    }

    Decoded {
        records,
        error: None,
    }
}

/// Append a `Label: value` line.
pub fn push_field(out: &mut String, label: &str, value: impl std::fmt::Display) {
    out.push_str(label);
    out.push(' ');
    out.push_str(&value.to_string());
    out.push('\n');
}

/// Reject free text that would split a field across lines.
pub fn ensure_single_line(
    kind: RecordKind,
    field: &'static str,
    value: &str,
) -> Result<(), StoreError> {
    if value.contains(['\n', '\r']) {
        return Err(StoreError::MultilineText { kind, field });
    }
    Ok(())
}

/// Format a float so it always carries a decimal point and parses back to
/// the identical value.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Cursor over the lines of a record file, tracking line numbers.
pub struct FieldLines<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> FieldLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let content = self.lines.next()?;
        self.line += 1;
        Some((self.line, content))
    }

    /// Consume the next line, which must start with `label`.
    ///
    /// Returns the line number and the value after the label.
    fn field(&mut self, label: &'static str) -> Result<(usize, &'a str), CodecError> {
        let Some((line, content)) = self.next_line() else {
            return Err(CodecError::MissingField {
                line: self.line + 1,
                label,
            });
        };

        content
            .strip_prefix(label)
            .map(|rest| (line, strip_space(rest)))
            .ok_or_else(|| CodecError::UnexpectedLabel {
                line,
                label,
                found: content.to_string(),
            })
    }

    /// Read a free-text field verbatim.
    pub fn text(&mut self, label: &'static str) -> Result<String, CodecError> {
        self.field(label).map(|(_, value)| value.to_string())
    }

    /// Read a numeric field, dropping an optional unit suffix.
    pub fn number<T: FromStr>(
        &mut self,
        label: &'static str,
        unit: &str,
    ) -> Result<T, CodecError> {
        let (line, value) = self.field(label)?;
        let value = value.trim();
        let value = value.strip_suffix(unit).unwrap_or(value).trim_end();
        parse_number(line, label, value)
    }

    /// Read an ISO-8601 calendar date.
    pub fn date(&mut self, label: &'static str) -> Result<NaiveDate, CodecError> {
        let (line, value) = self.field(label)?;
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| CodecError::InvalidDate {
            line,
            value: value.to_string(),
        })
    }

    /// Read a field and hand its raw value to `parse`, which reports failures
    /// against the field's line number.
    pub fn parsed<T>(
        &mut self,
        label: &'static str,
        parse: impl FnOnce(usize, &str) -> Result<T, CodecError>,
    ) -> Result<T, CodecError> {
        let (line, value) = self.field(label)?;
        parse(line, value)
    }

    /// Consume a field whose value is derived and not restored.
    pub fn skip(&mut self, label: &'static str) -> Result<(), CodecError> {
        self.field(label).map(|_| ())
    }

    /// Consume the separator closing a record. A file that ends right after
    /// the last field is accepted.
    fn separator(&mut self) -> Result<(), CodecError> {
        match self.next_line() {
            None => Ok(()),
            Some((_, content)) if content.trim() == SEPARATOR => Ok(()),
            Some((line, content)) => Err(CodecError::UnexpectedLabel {
                line,
                label: SEPARATOR,
                found: content.to_string(),
            }),
        }
    }
}

/// Drop the single space between a label and its value.
fn strip_space(rest: &str) -> &str {
    rest.strip_prefix(' ').unwrap_or(rest)
}

fn parse_number<T: FromStr>(line: usize, label: &'static str, value: &str) -> Result<T, CodecError> {
    value.trim().parse().map_err(|_| CodecError::InvalidNumber {
        line,
        label,
        value: value.to_string(),
    })
}
