// src/readers/recordreader.rs

//! Implements a [`RecordReader`],
//! the driver of deriving [`Record`s] and parsed points using a
//! [`LogReader`].
//!
//! [`Record`s]: crate::data::record::Record
//! [`LogReader`]: crate::readers::logreader::LogReader

use crate::common::{
    Count,
    FPath,
    FieldIndex,
    FileOffset,
    NumericKind,
    RecordIndex,
    ResultNext,
    ScoreValue,
    Series,
    SeriesError,
    SeriesResult,
    SeriesXY,
};
use crate::data::record::{parse_value, FieldSelect, Record};
use crate::data::series::SeriesData;
use crate::readers::logreader::LogReader;
use crate::readers::summary::Summary;

extern crate memchr;
use memchr::memchr;

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RecordReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Values selected and coerced from one record: the y value and, in pair
/// mode, the explicit x value.
pub type Point = (Option<ScoreValue>, ScoreValue);

/// [`RecordReader::find_point`] searching results.
///
/// [`RecordReader::find_point`]: self::RecordReader#method.find_point
pub type ResultFindPoint = ResultNext<(FileOffset, Point), SeriesError>;

/// A specialized reader that uses a [`LogReader`] to find [`Record`s] in a
/// score log and coerce them to numeric points.
///
/// The record delimiter is scanned with `memchr`; records are visited in
/// file order, the only ordering signal for "index" or "time" axes. The
/// reader holds no state across invocations other than its run counters,
/// surfaced in [`Summary`].
///
/// _Not a rust "Reader"; does not implement trait [`Read`]._
///
/// [`LogReader`]: crate::readers::logreader::LogReader
/// [`Record`s]: crate::data::record::Record
/// [`Summary`]: crate::readers::summary::Summary
/// [`Read`]: std::io::Read
pub struct RecordReader {
    pub(crate) logreader: LogReader,
    /// Record delimiter; a single ASCII byte.
    record_sep: u8,
    /// Field delimiter within one record.
    field_sep: char,
    /// Caller-declared cap on raw records inspected, `None` for no cap.
    /// Records beyond the cap are never read.
    record_cap: Option<Count>,
    /// `Count` of raw records inspected (pre-drop).
    pub(super) records_inspected: Count,
    /// `Count` of records that contributed a point to the output.
    pub(super) records_parsed: Count,
    /// `Count` of empty records dropped without error.
    pub(super) records_dropped: Count,
    /// Did a `find_record` call stop at the record cap?
    pub(super) cap_reached: bool,
}

impl std::fmt::Debug for RecordReader {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        f.debug_struct("RecordReader")
            .field("record_sep", &(self.record_sep as char))
            .field("field_sep", &self.field_sep)
            .field("record_cap", &self.record_cap)
            .field("records_inspected", &self.records_inspected)
            .field("logreader", &self.logreader)
            .finish()
    }
}

impl RecordReader {
    /// Create a new `RecordReader`; reads the log at `path`.
    ///
    /// `record_sep` must be an ASCII byte so the `memchr` scan can never
    /// split a multi-byte character.
    pub fn new(
        path: FPath,
        record_sep: u8,
        field_sep: char,
        record_cap: Option<Count>,
    ) -> SeriesResult<RecordReader> {
        defn!("({:?}, {:?}, {:?}, {:?})", path, record_sep as char, field_sep, record_cap);
        assert!(
            record_sep.is_ascii(),
            "record delimiter 0x{:02x} is not ASCII",
            record_sep,
        );
        let logreader = LogReader::new(path)?;
        defx!();

        Ok(RecordReader {
            logreader,
            record_sep,
            field_sep,
            record_cap,
            records_inspected: 0,
            records_parsed: 0,
            records_dropped: 0,
            cap_reached: false,
        })
    }

    #[inline(always)]
    pub fn path(&self) -> &FPath {
        self.logreader.path()
    }

    /// `Count` of raw records inspected so far.
    #[inline(always)]
    pub const fn count_records_inspected(&self) -> Count {
        self.records_inspected
    }

    /// `Count` of records that contributed a point to the output.
    #[inline(always)]
    pub const fn count_records_parsed(&self) -> Count {
        self.records_parsed
    }

    /// Find the next raw [`Record`] at or after `fileoffset`.
    ///
    /// Returns the offset one past the record's delimiter and the record
    /// with its text whitespace-trimmed. Returns `None` when the text (or
    /// the record cap) is exhausted. The trailing empty record produced by
    /// a record delimiter at, or whitespace before, the very end of the
    /// text is never materialized.
    ///
    /// [`Record`]: crate::data::record::Record
    fn find_record(
        &mut self,
        fileoffset: FileOffset,
    ) -> Option<(FileOffset, Record)> {
        if let Some(cap) = self.record_cap {
            if self.records_inspected >= cap {
                defo!("record cap {} reached", cap);
                self.cap_reached = true;
                return None;
            }
        }
        let text: &str = self.logreader.text();
        if fileoffset >= text.len() {
            return None;
        }
        let remaining: &str = &text[fileoffset..];
        let (chunk, fileoffset_next): (&str, FileOffset) =
            match memchr(self.record_sep, remaining.as_bytes()) {
                Some(at) => (&remaining[..at], fileoffset + at + 1),
                None => {
                    // last chunk; drop it without error if it is only the
                    // whitespace tail after the final delimiter
                    if remaining.trim().is_empty() {
                        return None;
                    }
                    (remaining, text.len())
                }
            };
        let index: RecordIndex = self.records_inspected as RecordIndex;
        self.records_inspected += 1;

        Some((fileoffset_next, Record::new(String::from(chunk.trim()), index)))
    }

    /// Find the next parsed point at or after `fileoffset`, applying the
    /// field-selection policy `select` and coercing with `kind`.
    ///
    /// Empty records are dropped without error in `Whole` mode. In the
    /// positional modes an interior empty record is fatal
    /// [`MalformedRecord`]; an empty record cannot yield the selected
    /// position(s).
    ///
    /// [`MalformedRecord`]: crate::common::SeriesError::MalformedRecord
    pub fn find_point(
        &mut self,
        fileoffset: FileOffset,
        select: FieldSelect,
        kind: NumericKind,
    ) -> ResultFindPoint {
        defn!("({}, {:?}, {:?})", fileoffset, select, kind);
        let mut fo: FileOffset = fileoffset;
        loop {
            let (fo_next, record): (FileOffset, Record) = match self.find_record(fo) {
                Some(val) => val,
                None => {
                    defx!("return Done");
                    return ResultFindPoint::Done;
                }
            };
            if record.is_empty() {
                if select.is_positional() {
                    defx!("return Err(MalformedRecord) record {}", record.index());
                    return ResultFindPoint::Err(SeriesError::MalformedRecord {
                        index: record.index(),
                        reason: String::from("empty record cannot yield the selected field position(s)"),
                    });
                }
                defo!("drop empty record {}", record.index());
                self.records_dropped += 1;
                fo = fo_next;
                continue;
            }
            let point: Point = match self.record_to_point(&record, select, kind) {
                Ok(val) => val,
                Err(err) => {
                    defx!("return Err");
                    return ResultFindPoint::Err(err);
                }
            };
            self.records_parsed += 1;
            defx!("return Found(({}, {:?}))", fo_next, point);
            return ResultFindPoint::Found((fo_next, point));
        }
    }

    /// Select and coerce the configured field(s) of one non-empty record.
    fn record_to_point(
        &self,
        record: &Record,
        select: FieldSelect,
        kind: NumericKind,
    ) -> SeriesResult<Point> {
        match select {
            FieldSelect::Whole => {
                let value = parse_value(record.as_str(), kind, record.index())?;
                Ok((None, value))
            }
            FieldSelect::Single(at) => {
                let fields = record.fields(self.field_sep);
                let token = record.field_at(&fields, at)?;
                let value = parse_value(token, kind, record.index())?;
                Ok((None, value))
            }
            FieldSelect::Pair(at_x, at_y) => {
                let fields = record.fields(self.field_sep);
                let token_x = record.field_at(&fields, at_x)?;
                let token_y = record.field_at(&fields, at_y)?;
                let value_x = parse_value(token_x, kind, record.index())?;
                let value_y = parse_value(token_y, kind, record.index())?;
                Ok((Some(value_x), value_y))
            }
        }
    }

    /// Parse the whole log into series data under `select` and `kind`.
    ///
    /// This is the most straightforward use of a `RecordReader`: drive
    /// [`find_point`] until `Done`. Zero valid records is not an error; it
    /// yields empty series data.
    ///
    /// [`find_point`]: self::RecordReader#method.find_point
    pub fn parse(
        &mut self,
        select: FieldSelect,
        kind: NumericKind,
    ) -> SeriesResult<SeriesData> {
        defn!("({:?}, {:?})", select, kind);
        let mut series_x = Series::new();
        let mut series_y = Series::new();
        let mut fo: FileOffset = 0;
        loop {
            match self.find_point(fo, select, kind) {
                ResultFindPoint::Found((fo_next, (value_x, value_y))) => {
                    if let Some(value_x) = value_x {
                        series_x.push(value_x);
                    }
                    series_y.push(value_y);
                    fo = fo_next;
                }
                ResultFindPoint::Done => {
                    break;
                }
                ResultFindPoint::Err(err) => {
                    defx!("return Err");
                    return Err(err);
                }
            }
        }
        defx!("parsed {} point(s)", series_y.len());
        match select {
            FieldSelect::Pair(..) => Ok(SeriesData::Paired(series_x, series_y)),
            _ => Ok(SeriesData::Single(series_y)),
        }
    }

    /// Parse a single-series log where the whole record is one value.
    pub fn parse_values(
        &mut self,
        kind: NumericKind,
    ) -> SeriesResult<Series> {
        match self.parse(FieldSelect::Whole, kind)? {
            SeriesData::Single(series) => Ok(series),
            SeriesData::Paired(..) => unreachable!("Whole selection never yields a paired series"),
        }
    }

    /// Parse a single series from field position `at` of each record.
    pub fn parse_field(
        &mut self,
        at: FieldIndex,
        kind: NumericKind,
    ) -> SeriesResult<Series> {
        match self.parse(FieldSelect::Single(at), kind)? {
            SeriesData::Single(series) => Ok(series),
            SeriesData::Paired(..) => unreachable!("Single selection never yields a paired series"),
        }
    }

    /// Parse a paired series from field positions `at_x` and `at_y` of each
    /// record. The returned series have equal length, position-for-position
    /// correspondence with the surviving records.
    pub fn parse_points(
        &mut self,
        at_x: FieldIndex,
        at_y: FieldIndex,
        kind: NumericKind,
    ) -> SeriesResult<SeriesXY> {
        match self.parse(FieldSelect::Pair(at_x, at_y), kind)? {
            SeriesData::Paired(series_x, series_y) => Ok((series_x, series_y)),
            SeriesData::Single(..) => unreachable!("Pair selection always yields a paired series"),
        }
    }

    /// Snapshot the run counters into a [`Summary`].
    ///
    /// [`Summary`]: crate::readers::summary::Summary
    pub fn summary(&self) -> Summary {
        Summary {
            path: self.logreader.path().clone(),
            filesz: self.logreader.filesz(),
            records_inspected: self.records_inspected,
            records_parsed: self.records_parsed,
            records_dropped: self.records_dropped,
            cap_reached: self.cap_reached,
            window: None,
            points_plotted: 0,
        }
    }
}
