// src/common.rs

//! Common imports, type aliases, and other globals for _ssplib_
//! (avoids circular imports).

use std::fmt;

pub use std::fs::File;
pub use std::path::Path;

extern crate thiserror;
use thiserror::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;

/// Size of a file in bytes.
pub type FileSz = u64;

/// Offset into the loaded log text in bytes.
pub type FileOffset = usize;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Records and RecordReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A general-purpose counter.
pub type Count = u64;

/// 0-based position of a [`Record`] among the raw records of a score log,
/// in file order. File order is the only ordering signal for "index" or
/// "time" axes.
///
/// [`Record`]: crate::data::record::Record
pub type RecordIndex = usize;

/// Signed position of a field within a [`Record`].
/// Negative positions index from the end; `-1` is the last field.
///
/// [`Record`]: crate::data::record::Record
pub type FieldIndex = isize;

/// Default record delimiter of paired-series score logs.
pub const RECORD_SEP_DEFAULT: u8 = b';';

/// Default field delimiter within one record.
pub const FIELD_SEP_DEFAULT: char = ',';

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Series
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One numeric value parsed from a score log.
///
/// Integer-kind tokens are validated as `i64` then widened, so both numeric
/// kinds flow through one series representation (window means are fractional
/// either way).
pub type ScoreValue = f64;

/// Ordered sequence of [`ScoreValue`] derived from one field position across
/// all surviving records, in file order.
pub type Series = Vec<ScoreValue>;

/// Paired x-series and y-series of equal length.
pub type SeriesXY = (Series, Series);

/// The numeric kind a score log token is declared to hold.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumericKind {
    Integer,
    Float,
}

impl fmt::Display for NumericKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            NumericKind::Integer => write!(f, "integer"),
            NumericKind::Float => write!(f, "float"),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Errors of the parse + aggregate pipeline.
///
/// All variants are fatal to the pipeline run that raised them; none are
/// recovered locally. Empty-but-well-formed input is _not_ an error (it
/// yields an empty [`Series`]).
#[derive(Debug, Error)]
pub enum SeriesError {
    /// The named log cannot be opened or read. No retry; score logs are
    /// written once by the external optimizer before this program runs.
    #[error("cannot read score log {path:?}: {source}")]
    SourceUnavailable {
        path: FPath,
        source: std::io::Error,
    },

    /// A record cannot yield the selected field position(s).
    /// Carries the record index so the bad chunk can be located.
    /// Silently skipping could hide systematic log corruption.
    #[error("malformed record {index}: {reason}")]
    MalformedRecord {
        index: RecordIndex,
        reason: String,
    },

    /// A selected token is not a valid number of the declared kind.
    #[error("record {index}: token {token:?} is not a valid {kind} value: {reason}")]
    NumericParse {
        index: RecordIndex,
        token: String,
        kind: NumericKind,
        reason: String,
    },

    /// Window size zero passed to the aggregator; the partition is undefined.
    #[error("invalid window size {size}; a window must hold at least one element")]
    InvalidWindowSize { size: usize },
}

pub type SeriesResult<T> = std::result::Result<T, SeriesError>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// custom Result enum for streaming find functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `Result` Extended, for the point-finding functions of [`RecordReader`].
///
/// [`RecordReader`]: crate::readers::recordreader::RecordReader
#[derive(Debug)]
pub enum ResultNext<T, E> {
    /// Contains the success data.
    Found(T),
    /// Input exhausted (or the record cap reached); nothing to return but
    /// no bad errors happened.
    Done,
    /// Contains the error value, something bad happened.
    Err(E),
}

impl<T, E> ResultNext<T, E> {
    /// Returns `true` if the result is [`Found`] or [`Done`].
    ///
    /// [`Found`]: ResultNext::Found
    /// [`Done`]: ResultNext::Done
    #[allow(dead_code)]
    #[inline(always)]
    pub const fn is_ok(&self) -> bool {
        matches!(*self, ResultNext::Found(_) | ResultNext::Done)
    }

    /// Returns `true` if the result is [`Found`].
    ///
    /// [`Found`]: ResultNext::Found
    #[inline(always)]
    pub const fn is_found(&self) -> bool {
        matches!(*self, ResultNext::Found(_))
    }

    /// Returns `true` if the result is [`Done`].
    ///
    /// [`Done`]: ResultNext::Done
    #[inline(always)]
    pub const fn is_done(&self) -> bool {
        matches!(*self, ResultNext::Done)
    }

    /// Returns `true` if the result is [`Err`].
    ///
    /// [`Err`]: ResultNext::Err
    #[allow(dead_code)]
    #[inline(always)]
    pub const fn is_err(&self) -> bool {
        matches!(*self, ResultNext::Err(_))
    }

    /// Converts from `ResultNext<T, E>` to [`Option<T>`], consuming `self`
    /// and discarding the error, if any.
    #[allow(dead_code)]
    #[inline(always)]
    pub fn ok(self) -> Option<T> {
        match self {
            ResultNext::Found(x) => Some(x),
            ResultNext::Done => None,
            ResultNext::Err(_) => None,
        }
    }
}

impl<T, E> fmt::Display for ResultNext<T, E>
where
    E: fmt::Display,
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ResultNext::Found(_) => {
                write!(f, "ResultNext::Found")
            }
            ResultNext::Done => {
                write!(f, "ResultNext::Done")
            }
            ResultNext::Err(err) => {
                write!(f, "ResultNext::Err({})", err)
            }
        }
    }
}
