// src/tests/logreader_tests.rs

//! tests for `readers/logreader.rs`

use crate::common::{FPath, SeriesError};
use crate::debug::helpers::{create_temp_file, ntf_fpath, NamedTempFile};
use crate::readers::logreader::LogReader;

use ::lazy_static::lazy_static;

// -------------------------------------------------------------------------------------------------

lazy_static! {
    static ref NTF_BASIC: NamedTempFile = create_temp_file("1;2;3");
    static ref NTF_BASIC_PATH: FPath = ntf_fpath(&NTF_BASIC);
    static ref NTF_EMPTY: NamedTempFile = create_temp_file("");
    static ref NTF_EMPTY_PATH: FPath = ntf_fpath(&NTF_EMPTY);
}

// -------------------------------------------------------------------------------------------------

#[test]
fn test_new_loads_whole_text() {
    let logreader = LogReader::new(NTF_BASIC_PATH.clone()).unwrap();
    assert_eq!(logreader.text(), "1;2;3");
    assert_eq!(logreader.filesz(), 5);
    assert_eq!(logreader.count_bytes(), 5);
    assert_eq!(logreader.path(), &*NTF_BASIC_PATH);
}

#[test]
fn test_new_empty_file_is_not_an_error() {
    let logreader = LogReader::new(NTF_EMPTY_PATH.clone()).unwrap();
    assert_eq!(logreader.text(), "");
    assert_eq!(logreader.filesz(), 0);
}

#[test]
fn test_new_missing_path_is_source_unavailable() {
    let path: FPath = FPath::from("/ssp-test/no/such/path/all_scores-att48");
    match LogReader::new(path.clone()) {
        Err(SeriesError::SourceUnavailable { path: path_, .. }) => {
            assert_eq!(path_, path, "error should carry the failing path");
        }
        Ok(_) => panic!("expected SourceUnavailable for {:?}", path),
        Err(err) => panic!("expected SourceUnavailable, got {:?}", err),
    }
}
