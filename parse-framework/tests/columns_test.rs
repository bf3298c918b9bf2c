use parse_framework::{parse_columns, parse_columns_with_options, ParseError, Sink, SplitOptions};

#[test]
fn test_parse_columns_sparse() {
    let mut a = String::new();
    let mut c = 0i32;
    let mut e = 0f64;
    parse_columns(
        "alpha|1|2|3|4.5",
        "|",
        &[0, 2, 4],
        &mut [Sink::scalar(&mut a), Sink::scalar(&mut c), Sink::scalar(&mut e)],
    )
    .unwrap();
    assert_eq!(a, "alpha");
    assert_eq!(c, 2);
    assert_eq!(e, 4.5);
}

#[test]
fn test_parse_columns_unsorted_list() {
    // List order pairs columns with destinations; it need not be sorted.
    let mut last = String::new();
    let mut first = String::new();
    parse_columns(
        "a|b|c",
        "|",
        &[2, 0],
        &mut [Sink::scalar(&mut last), Sink::scalar(&mut first)],
    )
    .unwrap();
    assert_eq!(last, "c");
    assert_eq!(first, "a");
}

#[test]
fn test_parse_columns_missing_index() {
    let mut x = 0i32;
    let err = parse_columns("1|2", "|", &[5], &mut [Sink::scalar(&mut x)]).unwrap_err();
    assert_eq!(err, ParseError::IndexOutOfRange { index: 5, len: 2 });
}

#[test]
fn test_parse_columns_conversion_failure_names_column() {
    let mut x = 0i32;
    let err = parse_columns("a|b|c", "|", &[1], &mut [Sink::scalar(&mut x)]).unwrap_err();
    assert!(matches!(err, ParseError::Conversion { index: 1, .. }));
}

#[test]
fn test_parse_columns_list_sink_length_mismatch() {
    let mut x = 0i32;
    let err = parse_columns("1|2|3", "|", &[0, 1], &mut [Sink::scalar(&mut x)]).unwrap_err();
    assert_eq!(err, ParseError::Arity { expected: 1, found: 2 });
}

#[test]
fn test_parse_columns_rejects_unbounded_sink() {
    let mut all: Vec<i32> = Vec::new();
    let err = parse_columns("1|2|3", "|", &[0], &mut [Sink::container(&mut all)]).unwrap_err();
    assert_eq!(err, ParseError::GreedySinkNotLast);
}

#[test]
fn test_parse_columns_empty_list() {
    parse_columns("1|2|3", "|", &[], &mut []).unwrap();
}

#[test]
fn test_parse_columns_without_compression() {
    let mut b = String::new();
    parse_columns_with_options(
        "x||y",
        "|",
        &[1],
        &mut [Sink::scalar(&mut b)],
        SplitOptions::default(),
    )
    .unwrap();
    assert_eq!(b, "");
}
