// src/data/mod.rs

//! The `data` module is the specialized data containers for
//! [`Record`]s and [`Series`].
//!
//! ## Definitions of data
//!
//! ### Record
//!
//! A "record" is one delimiter-separated chunk of a score log that:
//!
//! * begins after a prior record delimiter or the beginning of the log.
//! * ends with a record delimiter or the end of the log.
//!
//! A record represents one logged event of the external optimizer (one
//! search sample, or one best-score update). A record is represented by a
//! [`Record`] and found by a [`RecordReader`]. Records are transient; they
//! exist only while parsing.
//!
//! ### Field
//!
//! A "field" is a sub-token of a record after splitting on the field
//! delimiter. Fields that are empty after trimming are dropped before
//! position selection.
//!
//! ### Series
//!
//! A [`Series`] is the ordered sequence of numbers derived from one field
//! position across all surviving records, in file order. It is the durable
//! output of the pipeline, handed to the [plot sink] and then discarded.
//!
//! [`Record`]: crate::data::record::Record
//! [`RecordReader`]: crate::readers::recordreader::RecordReader
//! [`Series`]: crate::common::Series
//! [plot sink]: crate::plotter::plotters::PlotSink

pub mod record;
pub mod series;
