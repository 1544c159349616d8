// src/plotter/plotters.rs

//! The plot sink: [`PlotData`] display metadata, the [`PlotSink`] trait,
//! and [`TerminalPlotter`], a character-cell renderer for the terminal.
//!
//! [`PlotData`]: self::PlotData
//! [`PlotSink`]: self::PlotSink
//! [`TerminalPlotter`]: self::TerminalPlotter

use crate::common::{ScoreValue, Series};
use crate::data::series::{series_bounds, SeriesData};
use crate::debug::printers::de_err;

use std::io::{
    Error,
    ErrorKind,
    Result,
    Write, // for `std::io::Stdout.flush`
};

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
#[allow(unused_imports)]
use ::more_asserts::{assert_ge, assert_le};
use ::unicode_width::UnicodeWidthStr;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] for plotted points.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_POINT_DEFAULT: Color = Color::Yellow;

/// [`Color`] for the summary header printed to stderr.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_SUMMARY: Color = Color::Cyan;

/// A preselection of point [`Color`s], cycled per plotted log.
/// Chosen for a dark background console.
///
/// [`Color`s]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLORS_POINT: [Color; 6] = [
    Color::Yellow,
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
];

/// Terminal bell as u8; the completion signal of [`TerminalPlotter::notify`].
///
/// [`TerminalPlotter::notify`]: self::TerminalPlotter#method.notify
#[allow(non_upper_case_globals)]
pub const BELu8: u8 = 7;

/// Minimum plot frame width in character cells.
pub const PLOT_WIDTH_MIN: usize = 16;
/// Maximum plot frame width in character cells.
pub const PLOT_WIDTH_MAX: usize = 512;
/// Default plot frame width in character cells.
pub const PLOT_WIDTH_DEFAULT: usize = 72;
/// Minimum plot frame height in character cells.
pub const PLOT_HEIGHT_MIN: usize = 4;
/// Maximum plot frame height in character cells.
pub const PLOT_HEIGHT_MAX: usize = 128;
/// Default plot frame height in character cells.
pub const PLOT_HEIGHT_DEFAULT: usize = 20;

/// Cell character for one plotted point.
const POINT_CHAR: &str = "*";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// helper functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Return the point color at `at`, cycling through [`COLORS_POINT`].
pub const fn color_cycle(at: usize) -> Color {
    COLORS_POINT[at % COLORS_POINT.len()]
}

/// Write `buffer` to stdout and flush. Errors are printed in debug builds
/// and otherwise swallowed; there is nowhere better to report a failed
/// stdout.
pub fn write_stdout(buffer: &[u8]) {
    let stdout = std::io::stdout();
    let mut stdout_lock = stdout.lock();
    match stdout_lock.write_all(buffer) {
        Ok(_) => {}
        Err(_err) => {
            de_err!("stdout.write_all error {}", _err);
            return;
        }
    }
    match stdout_lock.flush() {
        Ok(_) => {}
        Err(_err) => {
            de_err!("stdout.flush error {}", _err);
        }
    }
}

/// Format `value` for an axis end label.
fn fmt_axis_value(value: ScoreValue) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    format!("{:.3}", value)
}

/// Left-pad `s` with spaces to display width `width`.
fn pad_left(
    s: &str,
    width: usize,
) -> String {
    let w: usize = UnicodeWidthStr::width(s);

    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Center `s` within display width `width` (left-biased).
fn center(
    s: &str,
    width: usize,
) -> String {
    let w: usize = UnicodeWidthStr::width(s);
    let pad: usize = width.saturating_sub(w) / 2;

    format!("{}{}", " ".repeat(pad), s)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PlotData and PlotSink
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One finished plot: display metadata plus the series data to render.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub data: SeriesData,
}

impl PlotData {
    /// Count of points this plot holds.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The external rendering collaborator of the pipeline.
///
/// A sink consumes finished coordinate sequences and display metadata.
/// Rendering technology is entirely the sink's concern.
pub trait PlotSink {
    /// Render one finished plot.
    fn render(
        &mut self,
        plot: &PlotData,
    ) -> Result<()>;

    /// Signal completion to the user after rendering.
    fn notify(&mut self) -> Result<()> {
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TerminalPlotter
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A plot sink that renders into a character-cell frame on a `termcolor`
/// stream (stdout).
///
/// Points are scaled into a `width` × `height` grid; the y axis grows
/// upward. Axis end labels show the series bounds. An empty series renders
/// an empty frame, not an error. Completion notification is the terminal
/// bell, when enabled.
pub struct TerminalPlotter {
    width: usize,
    height: usize,
    color_choice: ColorChoice,
    color_point: Color,
    bell: bool,
}

impl std::fmt::Debug for TerminalPlotter {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        f.debug_struct("TerminalPlotter")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bell", &self.bell)
            .finish()
    }
}

impl TerminalPlotter {
    /// Create a new `TerminalPlotter`.
    pub fn new(
        width: usize,
        height: usize,
        color_choice: ColorChoice,
        bell: bool,
    ) -> TerminalPlotter {
        assert_ge!(width, PLOT_WIDTH_MIN, "plot width {} too small", width);
        assert_le!(width, PLOT_WIDTH_MAX, "plot width {} too large", width);
        assert_ge!(height, PLOT_HEIGHT_MIN, "plot height {} too small", height);
        assert_le!(height, PLOT_HEIGHT_MAX, "plot height {} too large", height);

        TerminalPlotter {
            width,
            height,
            color_choice,
            color_point: COLOR_POINT_DEFAULT,
            bell,
        }
    }

    /// Override the point color (see [`color_cycle`]).
    ///
    /// [`color_cycle`]: self::color_cycle
    pub fn set_color_point(
        &mut self,
        color: Color,
    ) {
        self.color_point = color;
    }

    /// Render `plot` into `out`.
    ///
    /// Split from [`render`] so tests can render into a
    /// [`termcolor::Buffer`].
    ///
    /// [`render`]: self::TerminalPlotter#method.render
    /// [`termcolor::Buffer`]: https://docs.rs/termcolor/1.1.3/termcolor/struct.Buffer.html
    pub fn render_to(
        &self,
        plot: &PlotData,
        out: &mut impl WriteColor,
    ) -> Result<()> {
        // resolve the x series; for single-series data the x axis is the
        // implicit element index
        let index_x: Series;
        let (series_x, series_y): (&[ScoreValue], &[ScoreValue]) = match &plot.data {
            SeriesData::Single(series) => {
                index_x = (0..series.len())
                    .map(|at| at as ScoreValue)
                    .collect();
                (&index_x, series)
            }
            SeriesData::Paired(series_x, series_y) => (series_x, series_y),
        };
        if series_x.len() != series_y.len() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "x series holds {} value(s) but y series holds {}",
                    series_x.len(),
                    series_y.len(),
                ),
            ));
        }

        let bounds_x = series_bounds(series_x);
        let bounds_y = series_bounds(series_y);

        // mark the grid
        let mut grid: Vec<Vec<bool>> = vec![vec![false; self.width]; self.height];
        if let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (bounds_x, bounds_y) {
            let x_span: ScoreValue = if x_hi > x_lo { x_hi - x_lo } else { 1.0 };
            let y_span: ScoreValue = if y_hi > y_lo { y_hi - y_lo } else { 1.0 };
            for (x, y) in series_x.iter().zip(series_y.iter()) {
                let col = (((x - x_lo) / x_span) * ((self.width - 1) as ScoreValue)).round() as usize;
                let row = (((y - y_lo) / y_span) * ((self.height - 1) as ScoreValue)).round() as usize;
                let row_ = self.height - 1 - row.min(self.height - 1);
                grid[row_][col.min(self.width - 1)] = true;
            }
        }

        // left margin carries the y-axis end labels
        let label_y_hi: String = bounds_y.map_or(String::new(), |(_, hi)| fmt_axis_value(hi));
        let label_y_lo: String = bounds_y.map_or(String::new(), |(lo, _)| fmt_axis_value(lo));
        let margin: usize = UnicodeWidthStr::width(label_y_hi.as_str())
            .max(UnicodeWidthStr::width(label_y_lo.as_str()));
        let margin_blank: String = " ".repeat(margin);

        // title and y-axis label
        if !plot.title.is_empty() {
            writeln!(out, "{}{}", margin_blank, center(&plot.title, self.width + 2))?;
        }
        if !plot.y_label.is_empty() {
            writeln!(out, "{}{}", margin_blank, plot.y_label)?;
        }

        // frame
        let border: String = format!("{}+{}+", margin_blank, "-".repeat(self.width));
        writeln!(out, "{}", border)?;
        for (at, row) in grid.iter().enumerate() {
            let label: &str = if at == 0 {
                label_y_hi.as_str()
            } else if at == self.height - 1 {
                label_y_lo.as_str()
            } else {
                ""
            };
            write!(out, "{}|", pad_left(label, margin))?;
            for cell in row.iter() {
                if *cell {
                    out.set_color(ColorSpec::new().set_fg(Some(self.color_point)))?;
                    write!(out, "{}", POINT_CHAR)?;
                    out.reset()?;
                } else {
                    write!(out, " ")?;
                }
            }
            writeln!(out, "|")?;
        }
        writeln!(out, "{}", border)?;

        // x-axis end labels and axis label
        if let Some((x_lo, x_hi)) = bounds_x {
            let label_x_lo: String = fmt_axis_value(x_lo);
            let label_x_hi: String = fmt_axis_value(x_hi);
            let between: usize = self
                .width
                .saturating_sub(UnicodeWidthStr::width(label_x_lo.as_str()))
                .saturating_sub(UnicodeWidthStr::width(label_x_hi.as_str()));
            writeln!(
                out,
                "{} {}{}{}",
                margin_blank,
                label_x_lo,
                " ".repeat(between),
                label_x_hi,
            )?;
        }
        if !plot.x_label.is_empty() {
            writeln!(out, "{}{}", margin_blank, center(&plot.x_label, self.width + 2))?;
        }
        out.flush()?;

        Ok(())
    }
}

impl PlotSink for TerminalPlotter {
    fn render(
        &mut self,
        plot: &PlotData,
    ) -> Result<()> {
        let mut out = StandardStream::stdout(self.color_choice);
        self.render_to(plot, &mut out)
    }

    fn notify(&mut self) -> Result<()> {
        if self.bell {
            write_stdout(&[BELu8]);
        }

        Ok(())
    }
}
