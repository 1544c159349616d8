// src/readers/summary.rs

//! Implements `Summary` statistics tracking struct.

use crate::common::{Count, FPath, FileSz};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Summary
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Accumulated statistics of one pipeline run over one score log.
///
/// The parse counters are snapshotted from the [`RecordReader`]; the
/// aggregation fields (`window`, `points_plotted`) are filled by the
/// driver after reshaping and smoothing. Printed to stderr by
/// [`print_summary`] when the user passes `--summary`.
///
/// [`RecordReader`]: crate::readers::recordreader::RecordReader
/// [`print_summary`]: crate::plotter::summary::print_summary
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Path of the processed score log.
    pub path: FPath,
    /// Byte count of the loaded text.
    pub filesz: FileSz,
    /// `Count` of raw records inspected (pre-drop).
    pub records_inspected: Count,
    /// `Count` of records that contributed a point to the output series.
    pub records_parsed: Count,
    /// `Count` of empty records dropped without error.
    pub records_dropped: Count,
    /// Did the record cap stop the scan before end of text?
    pub cap_reached: bool,
    /// Window size of the moving average, if smoothing was requested.
    pub window: Option<usize>,
    /// `Count` of points handed to the plot sink.
    pub points_plotted: Count,
}

impl Summary {
    /// Create a new `Summary` with zeroed counters.
    pub fn new(
        path: FPath,
        filesz: FileSz,
    ) -> Summary {
        Summary {
            path,
            filesz,
            ..Summary::default()
        }
    }
}
