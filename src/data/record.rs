// src/data/record.rs

//! Implements a [`Record`], one delimited chunk of a score log, and the
//! field splitting + numeric coercion applied to it.
//!
//! A `Record` is a transient parsing artifact: it is created by a
//! [`RecordReader`], interrogated for its field(s), and dropped.
//!
//! [`RecordReader`]: crate::readers::recordreader::RecordReader

use crate::common::{FieldIndex, NumericKind, RecordIndex, ScoreValue, SeriesError, SeriesResult};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FieldSelect
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Which field(s) of each [`Record`] feed the output series.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldSelect {
    /// The whole record is one value; yields a single series
    /// (index implicit).
    Whole,
    /// Select one field per record; yields a single series.
    Single(FieldIndex),
    /// Select an x field and a y field per record; yields a paired series.
    Pair(FieldIndex, FieldIndex),
}

impl FieldSelect {
    /// Does this selection address fields by position?
    #[inline(always)]
    pub const fn is_positional(&self) -> bool {
        !matches!(*self, FieldSelect::Whole)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Record
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The fields of one `Record` after splitting; empty tokens already dropped.
pub type Fields<'a> = Vec<&'a str>;

/// One delimiter-separated chunk of a score log, representing one logged
/// event (one search sample), plus its position among the raw records.
///
/// The stored text is whitespace-trimmed; record and field delimiters are
/// not part of it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    text: String,
    index: RecordIndex,
}

impl Record {
    pub fn new(
        text: String,
        index: RecordIndex,
    ) -> Record {
        Record { text, index }
    }

    /// 0-based position among the raw records of the log, in file order.
    #[inline(always)]
    pub const fn index(&self) -> RecordIndex {
        self.index
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split this record on `field_sep` into ordered field tokens.
    ///
    /// Tokens are whitespace-trimmed; tokens empty after trimming are
    /// dropped, so positions resolve against the surviving tokens only.
    pub fn fields(
        &self,
        field_sep: char,
    ) -> Fields {
        self.text
            .split(field_sep)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Resolve signed position `at` against `fields` and return the token.
    ///
    /// Negative positions index from the end (`-1` is the last field).
    /// A position out of range either way is a [`MalformedRecord`] error;
    /// it signals a malformed log line, not end of data.
    ///
    /// [`MalformedRecord`]: crate::common::SeriesError::MalformedRecord
    pub fn field_at<'a>(
        &self,
        fields: &Fields<'a>,
        at: FieldIndex,
    ) -> SeriesResult<&'a str> {
        match resolve_field_index(at, fields.len()) {
            Some(at_) => Ok(fields[at_]),
            None => Err(SeriesError::MalformedRecord {
                index: self.index,
                reason: format!(
                    "field position {} out of range for {} field(s) in record {:?}",
                    at,
                    fields.len(),
                    self.text,
                ),
            }),
        }
    }
}

/// Resolve signed field position `at` against a field count of `len`.
///
/// Returns `None` when out of range (including any position against zero
/// fields).
pub fn resolve_field_index(
    at: FieldIndex,
    len: usize,
) -> Option<usize> {
    if at >= 0 {
        let at_ = at as usize;
        if at_ < len {
            return Some(at_);
        }
        return None;
    }
    // negative; count back from the end
    let back = at.unsigned_abs();
    if back <= len {
        return Some(len - back);
    }

    None
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// numeric coercion
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parse `token` as a number of the declared `kind`.
///
/// A token that cannot be parsed is a fatal [`NumericParse`] error, not a
/// skipped value; it indicates log corruption distinct from the expected
/// "no data at this position" case.
///
/// [`NumericParse`]: crate::common::SeriesError::NumericParse
pub fn parse_value(
    token: &str,
    kind: NumericKind,
    index: RecordIndex,
) -> SeriesResult<ScoreValue> {
    match kind {
        NumericKind::Integer => match token.parse::<i64>() {
            Ok(value) => Ok(value as ScoreValue),
            Err(err) => Err(SeriesError::NumericParse {
                index,
                token: String::from(token),
                kind,
                reason: err.to_string(),
            }),
        },
        NumericKind::Float => match token.parse::<ScoreValue>() {
            Ok(value) => Ok(value),
            Err(err) => Err(SeriesError::NumericParse {
                index,
                token: String::from(token),
                kind,
                reason: err.to_string(),
            }),
        },
    }
}
