// src/readers/mod.rs

//! "Readers" for _ssplib_.
//!
//! ## Overview of readers
//!
//! * A [`RecordReader`] drives a [`LogReader`] to derive [`Record`s] and
//!   coerce them to numeric points.
//! * A [`LogReader`] only handles the raw log text; it reads the file once
//!   and releases the handle before anything above it runs.
//! * A [`LogLocator`] maps user-passed log names to real file paths under
//!   the experiment-output root.
//!
//! The _ssp_ binary program uses one `RecordReader` per score log passed.
//!
//! <br/>
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`Record`s]: crate::data::record::Record
//! [`LogReader`]: crate::readers::logreader::LogReader
//! [`RecordReader`]: crate::readers::recordreader::RecordReader
//! [`LogLocator`]: crate::readers::loglocator::LogLocator
//! [`Read`]: std::io::Read

pub mod helpers;
pub mod loglocator;
pub mod logreader;
pub mod recordreader;
pub mod summary;
