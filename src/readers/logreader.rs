// src/readers/logreader.rs

//! Implements a [`LogReader`], the lowest reader layer.
//!
//! A `LogReader` acquires the RawLog: it opens the named score log, reads
//! the whole text once, and releases the file handle before returning, on
//! success and on every error path. Everything above this layer consumes
//! in-memory text.
//!
//! [`LogReader`]: self::LogReader

use std::io::Read;

use crate::common::{Count, FPath, File, FileSz, SeriesError, SeriesResult};
use crate::readers::helpers::fpath_to_path;

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Reader of one score log file.
///
/// Score logs are UTF-8 (or ASCII) text written once by the external
/// optimizer. The whole text is loaded in `LogReader::new`; a failure to
/// open or read is [`SourceUnavailable`], surfaced immediately with no
/// retry.
///
/// _Not a rust "Reader"; does not implement trait [`Read`]._
///
/// [`SourceUnavailable`]: crate::common::SeriesError::SourceUnavailable
/// [`Read`]: std::io::Read
pub struct LogReader {
    path: FPath,
    /// Byte count of the loaded text.
    filesz: FileSz,
    text: String,
}

impl std::fmt::Debug for LogReader {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        f.debug_struct("LogReader")
            .field("path", &self.path)
            .field("filesz", &self.filesz)
            .finish()
    }
}

impl LogReader {
    /// Create a new `LogReader`; opens the file at `path`, reads it
    /// entirely, closes it.
    pub fn new(path: FPath) -> SeriesResult<LogReader> {
        defn!("({:?})", path);
        let mut text = String::new();
        {
            // scoped acquisition; the handle drops here on every exit path
            let mut file: File = match File::open(fpath_to_path(&path)) {
                Ok(val) => val,
                Err(err) => {
                    defx!("File::open error {}", err);
                    return Err(SeriesError::SourceUnavailable { path, source: err });
                }
            };
            match file.read_to_string(&mut text) {
                Ok(sz) => {
                    defo!("read_to_string read {} bytes", sz);
                }
                Err(err) => {
                    defx!("read_to_string error {}", err);
                    return Err(SeriesError::SourceUnavailable { path, source: err });
                }
            }
        }
        let filesz: FileSz = text.len() as FileSz;
        defx!("return LogReader {{ filesz {} }}", filesz);

        Ok(LogReader { path, filesz, text })
    }

    /// The loaded log text.
    #[inline(always)]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    #[inline(always)]
    pub fn path(&self) -> &FPath {
        &self.path
    }

    /// Byte count of the loaded text.
    #[inline(always)]
    pub const fn filesz(&self) -> FileSz {
        self.filesz
    }

    /// `Count` of bytes available to the record scan.
    #[inline(always)]
    pub const fn count_bytes(&self) -> Count {
        self.filesz
    }
}
