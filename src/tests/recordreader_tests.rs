// src/tests/recordreader_tests.rs
//

#![allow(non_snake_case)]

use crate::common::{
    Count,
    FPath,
    FileOffset,
    NumericKind,
    Series,
    SeriesError,
    SeriesXY,
};
use crate::data::record::FieldSelect;
use crate::data::series::{format_series, format_series_xy, SeriesData};
use crate::debug::helpers::{create_temp_file, ntf_fpath, NamedTempFile};
use crate::readers::recordreader::{RecordReader, ResultFindPoint};

use ::lazy_static::lazy_static;

// -------------------------------------------------------------------------------------------------

lazy_static! {
    static ref NTF_VALUES: NamedTempFile = create_temp_file("3,1,4,1,5");
    static ref NTF_VALUES_PATH: FPath = ntf_fpath(&NTF_VALUES);
    static ref NTF_VALUES_TRAILING: NamedTempFile = create_temp_file("1,2,3,");
    static ref NTF_VALUES_TRAILING_PATH: FPath = ntf_fpath(&NTF_VALUES_TRAILING);
    static ref NTF_VALUES_GAP: NamedTempFile = create_temp_file("1,,2,3");
    static ref NTF_VALUES_GAP_PATH: FPath = ntf_fpath(&NTF_VALUES_GAP);
    static ref NTF_VALUES_FLOAT: NamedTempFile = create_temp_file("1.5,2.5,-0.5");
    static ref NTF_VALUES_FLOAT_PATH: FPath = ntf_fpath(&NTF_VALUES_FLOAT);
    static ref NTF_VALUES_CORRUPT: NamedTempFile = create_temp_file("1,x,3");
    static ref NTF_VALUES_CORRUPT_PATH: FPath = ntf_fpath(&NTF_VALUES_CORRUPT);
    static ref NTF_ONLY_SEPS: NamedTempFile = create_temp_file(";;;");
    static ref NTF_ONLY_SEPS_PATH: FPath = ntf_fpath(&NTF_ONLY_SEPS);
    static ref NTF_EMPTY: NamedTempFile = create_temp_file("");
    static ref NTF_EMPTY_PATH: FPath = ntf_fpath(&NTF_EMPTY);
    //
    static ref NTF_PAIRS: NamedTempFile = create_temp_file("0,10;1,20;2,30");
    static ref NTF_PAIRS_PATH: FPath = ntf_fpath(&NTF_PAIRS);
    static ref NTF_PAIRS_NL: NamedTempFile = create_temp_file("0,10;1,20;2,30;\n");
    static ref NTF_PAIRS_NL_PATH: FPath = ntf_fpath(&NTF_PAIRS_NL);
    static ref NTF_PAIRS_SPACED: NamedTempFile = create_temp_file("0, 10; 1, 20");
    static ref NTF_PAIRS_SPACED_PATH: FPath = ntf_fpath(&NTF_PAIRS_SPACED);
    static ref NTF_PAIRS_EMPTY_RECORD: NamedTempFile = create_temp_file("1,2;;3,4");
    static ref NTF_PAIRS_EMPTY_RECORD_PATH: FPath = ntf_fpath(&NTF_PAIRS_EMPTY_RECORD);
    static ref NTF_PAIRS_SHORT_RECORD: NamedTempFile = create_temp_file("1,2;3");
    static ref NTF_PAIRS_SHORT_RECORD_PATH: FPath = ntf_fpath(&NTF_PAIRS_SHORT_RECORD);
    static ref NTF_TRIPLES: NamedTempFile = create_temp_file("0,5,10;1,6,20;2,7,30");
    static ref NTF_TRIPLES_PATH: FPath = ntf_fpath(&NTF_TRIPLES);
    static ref NTF_SINGLE_GAP: NamedTempFile = create_temp_file("5;;6");
    static ref NTF_SINGLE_GAP_PATH: FPath = ntf_fpath(&NTF_SINGLE_GAP);
}

// -------------------------------------------------------------------------------------------------

/// helper to wrap the match and panic checks
fn new_RecordReader(
    path: &FPath,
    record_sep: u8,
    field_sep: char,
    record_cap: Option<Count>,
) -> RecordReader {
    match RecordReader::new(path.clone(), record_sep, field_sep, record_cap) {
        Ok(val) => val,
        Err(err) => {
            panic!("ERROR: RecordReader::new({:?}, …) failed {}", path, err);
        }
    }
}

// -------------------------------------------------------------------------------------------------
// single-series parsing (Whole)

#[test]
fn test_parse_values_length_and_file_order() {
    let mut reader = new_RecordReader(&NTF_VALUES_PATH, b',', ',', None);
    let series: Series = reader.parse_values(NumericKind::Integer).unwrap();
    assert_eq!(series, vec![3.0, 1.0, 4.0, 1.0, 5.0]);
    assert_eq!(reader.count_records_parsed(), 5);
}

#[test]
fn test_parse_values_trailing_delimiter_dropped() {
    // "1,2,3," parses to [1,2,3], no error for the trailing empty record
    let mut reader = new_RecordReader(&NTF_VALUES_TRAILING_PATH, b',', ',', None);
    let series: Series = reader.parse_values(NumericKind::Integer).unwrap();
    assert_eq!(series, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_parse_values_interior_empty_record_dropped() {
    let mut reader = new_RecordReader(&NTF_VALUES_GAP_PATH, b',', ',', None);
    let series: Series = reader.parse_values(NumericKind::Integer).unwrap();
    assert_eq!(series, vec![1.0, 2.0, 3.0]);
    let summary = reader.summary();
    assert_eq!(summary.records_inspected, 4);
    assert_eq!(summary.records_parsed, 3);
    assert_eq!(summary.records_dropped, 1);
}

#[test]
fn test_parse_values_float_kind() {
    let mut reader = new_RecordReader(&NTF_VALUES_FLOAT_PATH, b',', ',', None);
    let series: Series = reader.parse_values(NumericKind::Float).unwrap();
    assert_eq!(series, vec![1.5, 2.5, -0.5]);
}

#[test]
fn test_parse_values_corrupt_token_is_fatal() {
    let mut reader = new_RecordReader(&NTF_VALUES_CORRUPT_PATH, b',', ',', None);
    match reader.parse_values(NumericKind::Integer) {
        Err(SeriesError::NumericParse { index, token, .. }) => {
            assert_eq!(index, 1, "error should pinpoint the corrupt record");
            assert_eq!(token, "x");
        }
        result => panic!("expected NumericParse, got {:?}", result),
    }
}

#[test]
fn test_parse_values_only_delimiters_yields_empty_series() {
    let mut reader = new_RecordReader(&NTF_ONLY_SEPS_PATH, b';', ',', None);
    let series: Series = reader.parse_values(NumericKind::Integer).unwrap();
    assert_eq!(series, Series::new());
    assert_eq!(reader.summary().records_dropped, 3);
}

#[test]
fn test_parse_values_empty_file_yields_empty_series() {
    // zero valid records is not an error
    let mut reader = new_RecordReader(&NTF_EMPTY_PATH, b',', ',', None);
    let series: Series = reader.parse_values(NumericKind::Integer).unwrap();
    assert_eq!(series, Series::new());
}

// -------------------------------------------------------------------------------------------------
// paired-series parsing (Pair)

#[test]
fn test_parse_points_first_and_last_field() {
    let mut reader = new_RecordReader(&NTF_PAIRS_PATH, b';', ',', None);
    let (series_x, series_y): SeriesXY = reader
        .parse_points(0, -1, NumericKind::Integer)
        .unwrap();
    assert_eq!(series_x, vec![0.0, 1.0, 2.0]);
    assert_eq!(series_y, vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_parse_points_positive_positions() {
    let mut reader = new_RecordReader(&NTF_TRIPLES_PATH, b';', ',', None);
    let (series_x, series_y): SeriesXY = reader
        .parse_points(0, 1, NumericKind::Integer)
        .unwrap();
    assert_eq!(series_x, vec![0.0, 1.0, 2.0]);
    assert_eq!(series_y, vec![5.0, 6.0, 7.0]);
}

#[test]
fn test_parse_points_negative_position_selects_terminal_value() {
    let mut reader = new_RecordReader(&NTF_TRIPLES_PATH, b';', ',', None);
    let (_series_x, series_y): SeriesXY = reader
        .parse_points(0, -1, NumericKind::Integer)
        .unwrap();
    assert_eq!(series_y, vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_parse_points_trailing_delimiter_and_newline_dropped() {
    let mut reader = new_RecordReader(&NTF_PAIRS_NL_PATH, b';', ',', None);
    let (series_x, series_y): SeriesXY = reader
        .parse_points(0, -1, NumericKind::Integer)
        .unwrap();
    assert_eq!(series_x, vec![0.0, 1.0, 2.0]);
    assert_eq!(series_y, vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_parse_points_tolerates_spaces_around_tokens() {
    let mut reader = new_RecordReader(&NTF_PAIRS_SPACED_PATH, b';', ',', None);
    let (series_x, series_y): SeriesXY = reader
        .parse_points(0, -1, NumericKind::Integer)
        .unwrap();
    assert_eq!(series_x, vec![0.0, 1.0]);
    assert_eq!(series_y, vec![10.0, 20.0]);
}

#[test]
fn test_parse_points_interior_empty_record_is_malformed() {
    // "1,2;;3,4" must not silently produce a shorter series
    let mut reader = new_RecordReader(&NTF_PAIRS_EMPTY_RECORD_PATH, b';', ',', None);
    match reader.parse_points(0, -1, NumericKind::Integer) {
        Err(SeriesError::MalformedRecord { index, .. }) => {
            assert_eq!(index, 1, "error should pinpoint the empty record");
        }
        result => panic!("expected MalformedRecord, got {:?}", result),
    }
}

#[test]
fn test_parse_points_missing_position_is_malformed() {
    let mut reader = new_RecordReader(&NTF_PAIRS_SHORT_RECORD_PATH, b';', ',', None);
    match reader.parse_points(0, 1, NumericKind::Integer) {
        Err(SeriesError::MalformedRecord { index, .. }) => {
            assert_eq!(index, 1);
        }
        result => panic!("expected MalformedRecord, got {:?}", result),
    }
}

#[test]
fn test_parse_points_negative_out_of_range_is_malformed() {
    let mut reader = new_RecordReader(&NTF_PAIRS_PATH, b';', ',', None);
    match reader.parse_points(0, -3, NumericKind::Integer) {
        Err(SeriesError::MalformedRecord { index, .. }) => {
            assert_eq!(index, 0);
        }
        result => panic!("expected MalformedRecord, got {:?}", result),
    }
}

#[test]
fn test_parse_points_empty_file_yields_empty_series() {
    let mut reader = new_RecordReader(&NTF_EMPTY_PATH, b';', ',', None);
    let (series_x, series_y): SeriesXY = reader
        .parse_points(0, -1, NumericKind::Integer)
        .unwrap();
    assert_eq!(series_x, Series::new());
    assert_eq!(series_y, Series::new());
}

// -------------------------------------------------------------------------------------------------
// single-field parsing (Single)

#[test]
fn test_parse_field_selects_one_series() {
    let mut reader = new_RecordReader(&NTF_PAIRS_PATH, b';', ',', None);
    let series: Series = reader.parse_field(-1, NumericKind::Integer).unwrap();
    assert_eq!(series, vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_parse_field_interior_empty_record_is_malformed() {
    let mut reader = new_RecordReader(&NTF_SINGLE_GAP_PATH, b';', ',', None);
    match reader.parse_field(0, NumericKind::Integer) {
        Err(SeriesError::MalformedRecord { index, .. }) => {
            assert_eq!(index, 1);
        }
        result => panic!("expected MalformedRecord, got {:?}", result),
    }
}

// -------------------------------------------------------------------------------------------------
// record cap

#[test]
fn test_record_cap_bounds_the_scan() {
    let mut reader = new_RecordReader(&NTF_PAIRS_PATH, b';', ',', Some(2));
    let (series_x, series_y): SeriesXY = reader
        .parse_points(0, -1, NumericKind::Integer)
        .unwrap();
    assert_eq!(series_x, vec![0.0, 1.0]);
    assert_eq!(series_y, vec![10.0, 20.0]);
    let summary = reader.summary();
    assert_eq!(summary.records_inspected, 2, "records beyond the cap are never read");
    assert!(summary.cap_reached);
}

#[test]
fn test_record_cap_larger_than_log() {
    let mut reader = new_RecordReader(&NTF_PAIRS_PATH, b';', ',', Some(100));
    let (_series_x, series_y): SeriesXY = reader
        .parse_points(0, -1, NumericKind::Integer)
        .unwrap();
    assert_eq!(series_y.len(), 3);
    assert!(!reader.summary().cap_reached);
}

// -------------------------------------------------------------------------------------------------
// streaming find_point

/// loop on `RecordReader.find_point` until it is done;
/// this is the most straightforward use of `RecordReader`
#[test]
fn test_find_point_streams_in_file_order() {
    let mut reader = new_RecordReader(&NTF_PAIRS_PATH, b';', ',', None);
    let mut fo: FileOffset = 0;
    let mut points: Vec<(f64, f64)> = Vec::new();
    loop {
        let result = reader.find_point(fo, FieldSelect::Pair(0, -1), NumericKind::Integer);
        assert!(result.is_ok(), "unexpected {}", result);
        match result {
            ResultFindPoint::Found((fo_next, (value_x, value_y))) => {
                points.push((value_x.unwrap(), value_y));
                fo = fo_next;
            }
            ResultFindPoint::Done => {
                break;
            }
            ResultFindPoint::Err(err) => {
                panic!("unexpected error {}", err);
            }
        }
    }
    assert_eq!(points, vec![(0.0, 10.0), (1.0, 20.0), (2.0, 30.0)]);
    assert_eq!(reader.count_records_parsed(), 3);
    assert_eq!(reader.count_records_inspected(), 3);
}

// -------------------------------------------------------------------------------------------------
// parse dispatch

#[test]
fn test_parse_dispatch_matches_selection() {
    let mut reader = new_RecordReader(&NTF_PAIRS_PATH, b';', ',', None);
    match reader.parse(FieldSelect::Pair(0, -1), NumericKind::Integer).unwrap() {
        SeriesData::Paired(series_x, series_y) => {
            assert_eq!(series_x.len(), series_y.len());
        }
        data => panic!("expected SeriesData::Paired, got {:?}", data),
    }
}

// -------------------------------------------------------------------------------------------------
// round-trip

#[test]
fn test_round_trip_integer_values() {
    let series: Series = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
    let text = format_series(&series, NumericKind::Integer, b',');
    let ntf = create_temp_file(&text);
    let mut reader = new_RecordReader(&ntf_fpath(&ntf), b',', ',', None);
    assert_eq!(reader.parse_values(NumericKind::Integer).unwrap(), series);
}

#[test]
fn test_round_trip_float_points() {
    let series_xy: SeriesXY = (vec![0.25, 1.5, 2.75], vec![10.125, 20.0, 30.5]);
    let text = format_series_xy(&series_xy, NumericKind::Float, b';', ',');
    let ntf = create_temp_file(&text);
    let mut reader = new_RecordReader(&ntf_fpath(&ntf), b';', ',', None);
    let (series_x, series_y): SeriesXY = reader
        .parse_points(0, -1, NumericKind::Float)
        .unwrap();
    assert_eq!(series_x.len(), series_xy.0.len());
    for (parsed, original) in series_x.iter().zip(series_xy.0.iter()) {
        assert!((parsed - original).abs() < 1e-9, "x {} != {}", parsed, original);
    }
    for (parsed, original) in series_y.iter().zip(series_xy.1.iter()) {
        assert!((parsed - original).abs() < 1e-9, "y {} != {}", parsed, original);
    }
}
