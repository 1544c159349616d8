// src/tests/mod.rs

//! Tests for _ssplib_.
//!
//! Tests are placed at `src/tests/`, inside the `ssplib`. The author
//! concluded this is a reasonable trade-off of separation and access.
//!
//! Tests placed at top-level path `tests/` do not have crate-internal
//! visibility. While it is recommended to not require internal visibility
//! for testing, in practice that often makes tests difficult or impossible
//! to implement.

pub mod logreader_tests;
pub mod recordreader_tests;
