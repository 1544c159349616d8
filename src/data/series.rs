// src/data/series.rs

//! Operations on finished [`Series`] data: the windowed mean, caller-supplied
//! reshape transforms, bounds for plot scaling, and series formatting.
//!
//! A series is the durable output of the parse pipeline; everything here is
//! a pure batch transformation applied before hand-off to the plot sink.
//!
//! [`Series`]: crate::common::Series

use crate::common::{NumericKind, ScoreValue, Series, SeriesError, SeriesResult, SeriesXY};

extern crate itertools;
use itertools::Itertools;
use itertools::MinMaxResult;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SeriesData
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The two output flavors of the parse pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum SeriesData {
    /// One series; the index of each element is the implicit x axis.
    Single(Series),
    /// Explicit x-series and y-series of equal length.
    Paired(Series, Series),
}

impl SeriesData {
    /// Count of points this data holds.
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Single(series) => series.len(),
            SeriesData::Paired(_x, y) => y.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// windowed mean
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Arithmetic mean of `values`.
///
/// `values` must not be empty.
pub fn mean(values: &[ScoreValue]) -> ScoreValue {
    debug_assert!(!values.is_empty(), "mean of zero values");

    values.iter().sum::<ScoreValue>() / (values.len() as ScoreValue)
}

/// Replace each consecutive window of up to `window` elements with its
/// arithmetic mean, preserving window order.
///
/// Windows are contiguous and non-overlapping. The final window holds
/// `len mod window` elements when that is nonzero; its mean is a true mean
/// over the elements actually present, never zero-padded.
///
/// An empty series yields an empty series. `window == 0` is
/// [`InvalidWindowSize`], rejected before any computation.
///
/// [`InvalidWindowSize`]: crate::common::SeriesError::InvalidWindowSize
pub fn moving_average(
    window: usize,
    series: &[ScoreValue],
) -> SeriesResult<Series> {
    if window == 0 {
        return Err(SeriesError::InvalidWindowSize { size: window });
    }

    Ok(series
        .chunks(window)
        .map(mean)
        .collect())
}

/// [`moving_average`] applied to both series of a pair.
pub fn moving_average_xy(
    window: usize,
    series_xy: &SeriesXY,
) -> SeriesResult<SeriesXY> {
    let (series_x, series_y) = series_xy;

    Ok((moving_average(window, series_x)?, moving_average(window, series_y)?))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// reshape transforms
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Apply a caller-supplied pure transform to a paired series, once.
///
/// The transform receives the x-series and y-series by value and returns
/// the reshaped pair. Nothing is assumed about series length equality
/// beyond what `transform` itself requires.
pub fn reshape<F>(
    series_xy: SeriesXY,
    transform: F,
) -> SeriesXY
where
    F: FnOnce(Series, Series) -> SeriesXY,
{
    let (series_x, series_y) = series_xy;

    transform(series_x, series_y)
}

/// The identity transform; the [`reshape`] default.
pub fn reshape_identity(
    series_x: Series,
    series_y: Series,
) -> SeriesXY {
    (series_x, series_y)
}

/// Replace the x-series with the 0-based index of each y element.
pub fn reshape_index_x(
    _series_x: Series,
    series_y: Series,
) -> SeriesXY {
    let series_x: Series = (0..series_y.len())
        .map(|index| index as ScoreValue)
        .collect();

    (series_x, series_y)
}

/// Swap the axes.
pub fn reshape_swap(
    series_x: Series,
    series_y: Series,
) -> SeriesXY {
    (series_y, series_x)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// bounds
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `(min, max)` of `series`, or `None` for an empty series.
pub fn series_bounds(series: &[ScoreValue]) -> Option<(ScoreValue, ScoreValue)> {
    match series.iter().minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(value) => Some((*value, *value)),
        MinMaxResult::MinMax(lo, hi) => Some((*lo, *hi)),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// formatting
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Format one value the way the external optimizer writes it.
///
/// Integer-kind values print without a fractional part so they re-parse
/// under `NumericKind::Integer`.
pub fn format_value(
    value: ScoreValue,
    kind: NumericKind,
) -> String {
    match kind {
        NumericKind::Integer => format!("{}", value as i64),
        NumericKind::Float => format!("{}", value),
    }
}

/// Render a single series back to log text: values joined by `record_sep`.
pub fn format_series(
    series: &[ScoreValue],
    kind: NumericKind,
    record_sep: u8,
) -> String {
    series
        .iter()
        .map(|value| format_value(*value, kind))
        .join((record_sep as char).to_string().as_str())
}

/// Render a paired series back to log text: `x<field_sep>y` records joined
/// by `record_sep`.
///
/// Both series must have equal length.
pub fn format_series_xy(
    series_xy: &SeriesXY,
    kind: NumericKind,
    record_sep: u8,
    field_sep: char,
) -> String {
    let (series_x, series_y) = series_xy;
    debug_assert_eq!(series_x.len(), series_y.len(), "unequal series lengths");

    series_x
        .iter()
        .zip(series_y.iter())
        .map(|(x, y)| {
            format!(
                "{}{}{}",
                format_value(*x, kind),
                field_sep,
                format_value(*y, kind),
            )
        })
        .join((record_sep as char).to_string().as_str())
}
