use split_framework::{
    join, join_if, split, split_columns, split_n, split_to_vec, CharSet, SplitOptions,
};

#[test]
fn test_split_basic() {
    let mut out = Vec::new();
    let n = split(&'|', "d||x", |t| out.push(t.to_string()), SplitOptions::default());
    assert_eq!(n, 3);
    assert_eq!(out, ["d", "", "x"]);
}

#[test]
fn test_split_compressed() {
    let opts = SplitOptions::new().compress_delimiters(true);
    let mut out = Vec::new();
    let n = split(&'|', "d||x", |t| out.push(t.to_string()), opts);
    assert_eq!(n, 2);
    assert_eq!(out, ["d", "x"]);
}

#[test]
fn test_split_empty_input() {
    let mut out: Vec<String> = Vec::new();
    let n = split(&'|', "", |t| out.push(t.to_string()), SplitOptions::default());
    assert_eq!(n, 0);
    assert!(out.is_empty());
}

#[test]
fn test_split_returns_count() {
    let n = split(&CharSet::new(",;"), "a,b;c,d", |_| {}, SplitOptions::default());
    assert_eq!(n, 4);
}

#[test]
fn test_split_n_stops_at_bound() {
    let mut out = Vec::new();
    let n = split_n(&'|', "a|b|c|d", 2, |t| out.push(t.to_string()), SplitOptions::default());
    assert_eq!(n, 2);
    assert_eq!(out, ["a", "b"]);
}

#[test]
fn test_split_n_bound_exceeds_tokens() {
    let mut out = Vec::new();
    let n = split_n(&'|', "a|b", 10, |t| out.push(t.to_string()), SplitOptions::default());
    assert_eq!(n, 2);
    assert_eq!(out, ["a", "b"]);
}

#[test]
fn test_split_n_zero() {
    let n = split_n(&'|', "a|b", 0, |_| panic!("no tokens expected"), SplitOptions::default());
    assert_eq!(n, 0);
}

#[test]
fn test_split_columns_sparse() {
    let mut out = Vec::new();
    let n = split_columns(
        &',',
        "a,b,c,d,e",
        &[0, 2, 4],
        |i, t| out.push((i, t.to_string())),
        SplitOptions::default(),
    );
    assert_eq!(n, 3);
    assert_eq!(
        out,
        [(0, "a".to_owned()), (2, "c".to_owned()), (4, "e".to_owned())]
    );
}

#[test]
fn test_split_columns_unsorted_list() {
    let mut out = Vec::new();
    split_columns(
        &',',
        "a,b,c",
        &[2, 0],
        |i, t| out.push((i, t.to_string())),
        SplitOptions::default(),
    );
    // Emission stays in input order regardless of list order.
    assert_eq!(out, [(0, "a".to_owned()), (2, "c".to_owned())]);
}

#[test]
fn test_split_columns_short_input() {
    let mut out = Vec::new();
    let n = split_columns(
        &',',
        "a,b",
        &[0, 5],
        |i, t| out.push((i, t.to_string())),
        SplitOptions::default(),
    );
    assert_eq!(n, 1);
    assert_eq!(out, [(0, "a".to_owned())]);
}

#[test]
fn test_split_columns_empty_list() {
    let n = split_columns(&',', "a,b", &[], |_, _| panic!(), SplitOptions::default());
    assert_eq!(n, 0);
}

#[test]
fn test_split_to_vec() {
    let tokens = split_to_vec(&'|', "a|b|c", SplitOptions::default());
    assert_eq!(tokens, ["a", "b", "c"]);
}

#[test]
fn test_join_basic() {
    assert_eq!(join("|", ["a", "b", "c"]), "a|b|c");
    assert_eq!(join(", ", ["x"]), "x");
    assert_eq!(join("|", std::iter::empty::<&str>()), "");
}

#[test]
fn test_join_preserves_empty_tokens() {
    assert_eq!(join("|", ["d", "", "x"]), "d||x");
}

#[test]
fn test_join_if_filters() {
    let joined = join_if("|", |t: &str| !t.is_empty(), ["a", "", "b", "", "c"]);
    assert_eq!(joined, "a|b|c");
}

#[test]
fn test_round_trip() {
    let input = "alpha|beta||gamma|";
    let tokens = split_to_vec(&'|', input, SplitOptions::default());
    assert_eq!(join("|", tokens), input);
}
