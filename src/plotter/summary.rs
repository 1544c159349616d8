// src/plotter/summary.rs

//! Print a processing [`Summary`] to stderr.
//!
//! [`Summary`]: crate::readers::summary::Summary

use crate::debug::printers::de_err;
use crate::plotter::plotters::COLOR_SUMMARY;
use crate::readers::summary::Summary;

use std::io::{Result, Write};

use ::termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print `summary` to stderr after rendering. Write failures are reported
/// in debug builds and otherwise swallowed; the plot already rendered.
pub fn print_summary(
    summary: &Summary,
    color_choice: ColorChoice,
) {
    let mut stderr = StandardStream::stderr(color_choice);
    if let Err(_err) = print_summary_(summary, &mut stderr) {
        de_err!("print_summary error {}", _err);
    }
}

/// [`print_summary`] into any `WriteColor`; split for testing.
///
/// [`print_summary`]: self::print_summary
pub fn print_summary_(
    summary: &Summary,
    out: &mut impl WriteColor,
) -> Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(COLOR_SUMMARY)))?;
    writeln!(out, "Summary of processing {:?}:", summary.path)?;
    out.reset()?;
    writeln!(out, "   file size          {} (bytes)", summary.filesz)?;
    writeln!(out, "   records inspected  {}", summary.records_inspected)?;
    writeln!(out, "   records parsed     {}", summary.records_parsed)?;
    writeln!(out, "   records dropped    {}", summary.records_dropped)?;
    writeln!(out, "   record cap reached {}", if summary.cap_reached { "yes" } else { "no" })?;
    match summary.window {
        Some(window) => writeln!(out, "   smoothing window   {}", window)?,
        None => writeln!(out, "   smoothing window   (none)")?,
    }
    writeln!(out, "   points plotted     {}", summary.points_plotted)?;
    out.flush()?;

    Ok(())
}
