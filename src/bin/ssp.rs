// src/bin/ssp.rs

//! Driver program _ssp_ drives the [_ssplib_].
//!
//! Processes user-passed command-line arguments.
//! Each passed score log name is resolved against the experiment-output
//! root, parsed into one or two numeric series, optionally reshaped and
//! smoothed with a windowed average, then handed to the terminal plot sink.
//! With `--list`, the logs found under the root are printed instead.
//!
//! If passed CLI option `--summary`, a [`Summary`] of each processed log
//! is printed to stderr after rendering.
//!
//! `ssp.rs` is the only place that prints to STDOUT.
//!
//! [_ssplib_]: ssplib
//! [`Summary`]: ssplib::readers::summary::Summary

#![allow(non_camel_case_types)]

// first setup the custom global allocator
cfg_if::cfg_if! {
    if #[cfg(feature = "jemalloc")] {
        use ::tikv_jemallocator::Jemalloc;
        #[global_allocator]
        static GLOBAL: Jemalloc = Jemalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "jemalloc";
    }
    else if #[cfg(feature = "mimalloc")] {
        use ::mimalloc::MiMalloc;
        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "mimalloc";
    }
    else {
        const CLI_HELP_AFTER_ALLOCATOR: &str = "system";
    }
}

use std::process::ExitCode;

use ::clap::{
    Parser,
    ValueEnum,
};
use ::const_format::concatcp;

use ::ssplib::common::{
    Count,
    FPath,
    FPaths,
    FieldIndex,
    NumericKind,
};
use ::ssplib::data::record::FieldSelect;
use ::ssplib::data::series::{
    moving_average,
    moving_average_xy,
    reshape,
    reshape_index_x,
    reshape_swap,
    SeriesData,
};
use ::ssplib::debug::printers::e_err;
use ::ssplib::plotter::plotters::{
    color_cycle,
    write_stdout,
    ColorChoice,
    PlotData,
    PlotSink,
    TerminalPlotter,
    PLOT_HEIGHT_DEFAULT,
    PLOT_HEIGHT_MAX,
    PLOT_HEIGHT_MIN,
    PLOT_WIDTH_DEFAULT,
    PLOT_WIDTH_MAX,
    PLOT_WIDTH_MIN,
};
use ::ssplib::plotter::summary::print_summary;
use ::ssplib::readers::helpers::basename;
use ::ssplib::readers::loglocator::LogLocator;
use ::ssplib::readers::recordreader::RecordReader;
use ::ssplib::readers::summary::Summary;
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use ::anyhow;

// --------------------
// command-line parsing

/// general error exit value
const EXIT_ERR: u8 = 1;

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

/// CLI enum that maps to [`NumericKind`].
///
/// [`NumericKind`]: ssplib::common::NumericKind
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CLI_Numeric_Kind {
    int,
    float,
}

/// CLI enum that maps to a [`FieldSelect`] policy.
///
/// [`FieldSelect`]: ssplib::data::record::FieldSelect
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CLI_Log_Format {
    /// whole records are single values; one series, index implicit
    values,
    /// one field per record selected by --field; one series
    field,
    /// an x field and a y field per record; paired series
    points,
}

const CLI_HELP_AFTER: &str = concatcp!(
    "\
Score logs are plain text written by the external tree-search optimizer.

Single-series logs hold delimiter-separated numeric tokens; parse them
with \"--format values\". Paired-series logs hold record-delimited records
of field-delimited fields; select the x and y fields with --field-x and
--field-y (\"--format points\", the default). Negative field positions
index from the end; -1 is the last field.

Log names are resolved relative to --root unless absolute.

Example, plot the sampled-score log of one optimizer run, smoothed over
every 10000 playouts:

  ssp --root ./output score_logs/all_scores-att48 \\
      --kind int --index-x --window 10000

Allocator: ",
    CLI_HELP_AFTER_ALLOCATOR,
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "ssp",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(Score Series Plotter)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Author: ", env!("CARGO_PKG_AUTHORS"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
    override_usage = "\n  ssp [OPTIONS] <PATHS>...\n\n  ssp --list [--root ROOT]",
)]
struct CLI_Args {
    /// Name(s) of score logs to plot, resolved against --root unless
    /// absolute.
    #[clap(
        required_unless_present = "list",
        verbatim_doc_comment,
    )]
    paths: Vec<String>,

    /// Experiment-output root directory under which the optimizer writes
    /// its score logs.
    #[clap(
        short = 'r',
        long,
        verbatim_doc_comment,
        default_value_t = String::from("."),
    )]
    root: String,

    /// Shape of the passed score logs.
    #[clap(
        short = 'f',
        long,
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Log_Format::points,
    )]
    format: CLI_Log_Format,

    /// Record delimiter; one ASCII character.
    #[clap(
        long = "record-sep",
        verbatim_doc_comment,
        value_parser = cli_parse_sep_byte,
        default_value = ";",
    )]
    record_sep: u8,

    /// Field delimiter within one record; one character.
    #[clap(
        long = "field-sep",
        verbatim_doc_comment,
        value_parser = cli_parse_sep_char,
        default_value = ",",
    )]
    field_sep: char,

    /// Field position for "--format field". Negative positions index from
    /// the end.
    #[clap(
        long,
        verbatim_doc_comment,
        allow_negative_numbers = true,
        default_value_t = 0,
    )]
    field: FieldIndex,

    /// Field position of the x value for "--format points".
    #[clap(
        long = "field-x",
        verbatim_doc_comment,
        allow_negative_numbers = true,
        default_value_t = 0,
    )]
    field_x: FieldIndex,

    /// Field position of the y value for "--format points".
    /// The default -1 selects the last field, the terminal value of each
    /// record.
    #[clap(
        long = "field-y",
        verbatim_doc_comment,
        allow_negative_numbers = true,
        default_value_t = -1,
    )]
    field_y: FieldIndex,

    /// Numeric kind of the selected tokens.
    #[clap(
        short = 'k',
        long,
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Numeric_Kind::float,
    )]
    kind: CLI_Numeric_Kind,

    /// Inspect at most CAP raw records; records beyond the cap are never
    /// read. Bounds cost for very large logs.
    #[clap(
        long,
        verbatim_doc_comment,
    )]
    cap: Option<Count>,

    /// Smooth with a moving average of this window size before plotting.
    /// The final window may hold fewer elements; its mean is taken over
    /// the elements actually present.
    #[clap(
        short = 'w',
        long,
        verbatim_doc_comment,
    )]
    window: Option<usize>,

    /// Replace the x series with the 0-based point index
    /// (e.g. plot score over playouts instead of over time).
    #[clap(
        long = "index-x",
        verbatim_doc_comment,
    )]
    index_x: bool,

    /// Swap the x and y axes. Applied after --index-x.
    #[clap(
        long = "swap-xy",
        verbatim_doc_comment,
    )]
    swap_xy: bool,

    /// Plot title. Defaults to the log file basename.
    #[clap(
        short = 't',
        long,
        verbatim_doc_comment,
    )]
    title: Option<String>,

    /// Label under the x axis.
    #[clap(
        long = "x-label",
        verbatim_doc_comment,
    )]
    x_label: Option<String>,

    /// Label above the y axis.
    #[clap(
        long = "y-label",
        verbatim_doc_comment,
    )]
    y_label: Option<String>,

    /// Plot frame width in character cells.
    #[clap(
        long,
        verbatim_doc_comment,
        value_parser = cli_parse_width,
        default_value_t = PLOT_WIDTH_DEFAULT,
    )]
    width: usize,

    /// Plot frame height in character cells.
    #[clap(
        long,
        verbatim_doc_comment,
        value_parser = cli_parse_height,
        default_value_t = PLOT_HEIGHT_DEFAULT,
    )]
    height: usize,

    /// Choose to print using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Ring the terminal bell after each plot is rendered.
    #[clap(
        long,
        verbatim_doc_comment,
    )]
    bell: bool,

    /// Print a summary of each log processed to stderr.
    /// Most useful for developers.
    #[clap(
        short,
        long,
        verbatim_doc_comment,
    )]
    summary: bool,

    /// List the score logs found under --root and exit.
    #[clap(
        long,
        verbatim_doc_comment,
        conflicts_with = "paths",
    )]
    list: bool,
}

/// `clap` argument parser for `--record-sep`.
fn cli_parse_sep_byte(sep: &str) -> std::result::Result<u8, String> {
    match sep.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("record delimiter must be one ASCII character, got {:?}", sep)),
    }
}

/// `clap` argument parser for `--field-sep`.
fn cli_parse_sep_char(sep: &str) -> std::result::Result<char, String> {
    let mut chars = sep.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("field delimiter must be one character, got {:?}", sep)),
    }
}

/// `clap` argument parser for `--width`.
fn cli_parse_width(width: &str) -> std::result::Result<usize, String> {
    let width_: usize = width
        .parse::<usize>()
        .map_err(|err| err.to_string())?;
    if !(PLOT_WIDTH_MIN..=PLOT_WIDTH_MAX).contains(&width_) {
        return Err(format!(
            "width {} outside accepted range [{}, {}]",
            width_, PLOT_WIDTH_MIN, PLOT_WIDTH_MAX,
        ));
    }

    Ok(width_)
}

/// `clap` argument parser for `--height`.
fn cli_parse_height(height: &str) -> std::result::Result<usize, String> {
    let height_: usize = height
        .parse::<usize>()
        .map_err(|err| err.to_string())?;
    if !(PLOT_HEIGHT_MIN..=PLOT_HEIGHT_MAX).contains(&height_) {
        return Err(format!(
            "height {} outside accepted range [{}, {}]",
            height_, PLOT_HEIGHT_MIN, PLOT_HEIGHT_MAX,
        ));
    }

    Ok(height_)
}

// --------------------
// processing

/// Print the score logs found under the root, one per line.
fn list_logs(locator: &LogLocator) -> anyhow::Result<()> {
    defn!("root {:?}", locator.root());
    let paths: FPaths = locator.discover()?;
    let mut lines = String::new();
    for path in paths.iter() {
        lines.push_str(path);
        lines.push('\n');
    }
    write_stdout(lines.as_bytes());
    defx!("{} path(s)", paths.len());

    Ok(())
}

/// Run the pipeline for one score log: resolve → parse → reshape → smooth
/// → hand to the plot sink.
fn process_log(
    args: &CLI_Args,
    locator: &LogLocator,
    name: &str,
    select: FieldSelect,
    kind: NumericKind,
    color_choice: ColorChoice,
    at: usize,
) -> anyhow::Result<()> {
    defn!("({:?})", name);
    let path: FPath = locator.resolve(name);
    let mut reader = RecordReader::new(path.clone(), args.record_sep, args.field_sep, args.cap)?;
    let data: SeriesData = reader.parse(select, kind)?;
    let mut summary: Summary = reader.summary();

    // reshape, then smooth
    let data: SeriesData = match data {
        SeriesData::Single(series) => {
            let series = match args.window {
                Some(window) => moving_average(window, &series)?,
                None => series,
            };
            SeriesData::Single(series)
        }
        SeriesData::Paired(series_x, series_y) => {
            let mut series_xy = (series_x, series_y);
            if args.index_x {
                series_xy = reshape(series_xy, reshape_index_x);
            }
            if args.swap_xy {
                series_xy = reshape(series_xy, reshape_swap);
            }
            let series_xy = match args.window {
                Some(window) => moving_average_xy(window, &series_xy)?,
                None => series_xy,
            };
            SeriesData::Paired(series_xy.0, series_xy.1)
        }
    };
    summary.window = args.window;
    summary.points_plotted = data.len() as Count;

    let title: String = match &args.title {
        Some(val) => val.clone(),
        None => basename(&path),
    };
    let plot = PlotData {
        title,
        x_label: args.x_label.clone().unwrap_or_default(),
        y_label: args.y_label.clone().unwrap_or_default(),
        data,
    };
    let mut plotter = TerminalPlotter::new(args.width, args.height, color_choice, args.bell);
    plotter.set_color_point(color_cycle(at));
    plotter.render(&plot)?;
    plotter.notify()?;
    if args.summary {
        print_summary(&summary, color_choice);
    }
    defx!();

    Ok(())
}

// --------------------
// main

pub fn main() -> ExitCode {
    stack_offset_set(Some(2));
    defn!();
    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };
    let locator = LogLocator::new(args.root.clone());

    if args.list {
        match list_logs(&locator) {
            Ok(()) => {
                defx!("return SUCCESS");
                return ExitCode::SUCCESS;
            }
            Err(err) => {
                e_err!("{}", err);
                defx!("return {}", EXIT_ERR);
                return ExitCode::from(EXIT_ERR);
            }
        }
    }

    let select: FieldSelect = match args.format {
        CLI_Log_Format::values => FieldSelect::Whole,
        CLI_Log_Format::field => FieldSelect::Single(args.field),
        CLI_Log_Format::points => FieldSelect::Pair(args.field_x, args.field_y),
    };
    let kind: NumericKind = match args.kind {
        CLI_Numeric_Kind::int => NumericKind::Integer,
        CLI_Numeric_Kind::float => NumericKind::Float,
    };

    // each log's pipeline run is independent; report every failure and
    // exit nonzero if any occurred
    let mut error_count: usize = 0;
    for (at, name) in args.paths.iter().enumerate() {
        match process_log(&args, &locator, name, select, kind, color_choice, at) {
            Ok(()) => {}
            Err(err) => {
                e_err!("{}", err);
                error_count += 1;
            }
        }
    }
    if error_count != 0 {
        defx!("{} error(s), return {}", error_count, EXIT_ERR);
        return ExitCode::from(EXIT_ERR);
    }
    defx!("return SUCCESS");

    ExitCode::SUCCESS
}
