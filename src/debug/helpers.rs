// src/debug/helpers.rs

//! Miscellaneous helper functions for testing.

use crate::common::FPath;
use crate::readers::helpers::path_to_fpath;

use std::fs::{create_dir_all, File};
use std::path::PathBuf;

#[allow(unused_imports)] // XXX: clippy wrongly marks this as unused
use std::io::Write; // for `NamedTempFile.write_all`

extern crate lazy_static;
use lazy_static::lazy_static;

extern crate tempfile;
#[doc(hidden)]
pub use tempfile::tempdir;
#[doc(hidden)]
pub use tempfile::NamedTempFile;
#[doc(hidden)]
pub use tempfile::TempDir;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// temporary file helper functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// NamedTempFile instances default to this file name prefix.
pub const STR_TEMPFILE_PREFIX: &str = "tmp-ssp-test-";

lazy_static! {
    pub static ref STRING_TEMPFILE_PREFIX: String = String::from(STR_TEMPFILE_PREFIX);
}

/// Small helper function for copying `NamedTempFile` path to a `FPath`.
pub fn ntf_fpath(ntf: &NamedTempFile) -> FPath {
    FPath::from(ntf.path().to_str().unwrap())
}

/// Testing helper function to write a `str` to a temporary file.
///
/// BUG: `NamedTempFile` created within `lazy_static` will fail to remove itself
///      <https://github.com/Stebalien/tempfile/issues/183>.
pub fn create_temp_file(data: &str) -> NamedTempFile {
    let mut ntf = match tempfile::Builder::new()
        // use known prefix for easier cleanup
        .prefix::<str>(&STRING_TEMPFILE_PREFIX)
        .tempfile()
    {
        Ok(val) => val,
        Err(err) => {
            panic!("NamedTempFile::new() return Err {}", err);
        }
    };
    match ntf.write_all(data.as_bytes()) {
        Ok(_) => {}
        Err(err) => {
            panic!("NamedTempFile::write_all() return Err {}", err);
        }
    }

    ntf
}

/// Create a temporary directory.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Testing helper function to write a `str` to file `name` within the
/// passed `TempDir`. Creates leading directories in paths, e.g. `name`
/// value `foo/bar.log` creates directory `foo` and file `bar.log`.
pub fn create_file_in_tmpdir(
    data: &str,
    name: &FPath,
    tempdir: &TempDir,
) -> FPath {
    let path: PathBuf = tempdir.path().join(name);
    if let Some(parent) = path.parent() {
        match create_dir_all(parent) {
            Ok(_) => {}
            Err(err) => panic!("create_dir_all({:?}) return Err {}", parent, err),
        }
    }
    let mut file = match File::create(&path) {
        Ok(val) => val,
        Err(err) => panic!("File::create({:?}) return Err {}", path, err),
    };
    match file.write_all(data.as_bytes()) {
        Ok(_) => {}
        Err(err) => panic!("File::write_all() return Err {}", err),
    }

    path_to_fpath(path.as_path())
}
