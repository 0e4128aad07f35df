use fen_runtime::{match_pattern, split_pattern, sub_pattern, ErrorKind, Pattern, Runtime, Value};

fn str_of(rt: &Runtime, v: Value) -> String {
    rt.str_buf(v).unwrap().as_str_lossy().into_owned()
}

fn strs_of(rt: &Runtime, v: Value) -> Vec<String> {
    rt.list_items(v)
        .unwrap()
        .iter()
        .map(|item| str_of(rt, *item))
        .collect()
}

#[test]
fn match_produces_match_data_or_nil() {
    let mut rt = Runtime::new();
    let p = Pattern::compile(r"l+").unwrap();
    let s = rt.new_str("hello");
    let m = match_pattern(&mut rt, &p, s, 0).unwrap();
    assert!(rt.match_data(m).is_ok());
    let whole = rt.send(m, "to_s", &[]).unwrap();
    assert_eq!(str_of(&rt, whole), "ll");
}

#[test]
fn whole_match_and_groups() {
    let mut rt = Runtime::new();
    let p = Pattern::compile(r"(\w+)-(\d+)").unwrap();
    let s = rt.new_str("id: abc-42!");
    let m = match_pattern(&mut rt, &p, s, 0).unwrap();

    assert_eq!(rt.send(m, "size", &[]).unwrap(), Value::Int(3));
    let whole = rt.send(m, "to_s", &[]).unwrap();
    assert_eq!(str_of(&rt, whole), "abc-42");
    let g0 = rt.send(m, "[]", &[Value::Int(0)]).unwrap();
    assert_eq!(str_of(&rt, g0), "abc-42");
    let g1 = rt.send(m, "[]", &[Value::Int(1)]).unwrap();
    assert_eq!(str_of(&rt, g1), "abc");
    let g2 = rt.send(m, "[]", &[Value::Int(2)]).unwrap();
    assert_eq!(str_of(&rt, g2), "42");
}

#[test]
fn out_of_range_group_is_nil() {
    let mut rt = Runtime::new();
    let p = Pattern::compile(r"a(b)?").unwrap();
    let s = rt.new_str("ac");
    let m = match_pattern(&mut rt, &p, s, 0).unwrap();
    assert_eq!(rt.send(m, "[]", &[Value::Int(5)]).unwrap(), Value::Nil);
    // Group exists but did not participate.
    assert_eq!(rt.send(m, "[]", &[Value::Int(1)]).unwrap(), Value::Nil);
}

#[test]
fn negative_group_index_raises() {
    let mut rt = Runtime::new();
    let p = Pattern::compile(r"a").unwrap();
    let s = rt.new_str("a");
    let m = match_pattern(&mut rt, &p, s, 0).unwrap();
    let err = rt.send(m, "[]", &[Value::Int(-1)]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Argument);
}

#[test]
fn no_match_yields_nil() {
    let mut rt = Runtime::new();
    let p = Pattern::compile(r"\d").unwrap();
    let s = rt.new_str("abc");
    assert_eq!(match_pattern(&mut rt, &p, s, 0).unwrap(), Value::Nil);
}

#[test]
fn start_offset_skips_earlier_matches() {
    let mut rt = Runtime::new();
    let p = Pattern::compile(r"a").unwrap();
    let s = rt.new_str("abca");
    let m = match_pattern(&mut rt, &p, s, 1).unwrap();
    let whole = rt.send(m, "to_s", &[]).unwrap();
    assert_eq!(str_of(&rt, whole), "a");
    assert_eq!(match_pattern(&mut rt, &p, s, 10).unwrap(), Value::Nil);
}

#[test]
fn groups_survive_subject_mutation() {
    let mut rt = Runtime::new();
    let p = Pattern::compile(r"world").unwrap();
    let s = rt.new_str("hello world");
    let m = match_pattern(&mut rt, &p, s, 0).unwrap();

    let tail = rt.new_str("!!!");
    rt.send(s, "<<", &[tail]).unwrap();
    let g0 = rt.send(m, "[]", &[Value::Int(0)]).unwrap();
    assert_eq!(str_of(&rt, g0), "world");
}

#[test]
fn pattern_split_keeps_the_trailing_segment() {
    let mut rt = Runtime::new();
    let p = Pattern::compile(r"\s*,\s*").unwrap();
    let s = rt.new_str("a, b ,c,");
    let r = split_pattern(&mut rt, s, &p).unwrap();
    assert_eq!(strs_of(&rt, r), vec!["a", "b", "c", ""]);
}

#[test]
fn pattern_split_edge_cases() {
    let mut rt = Runtime::new();
    let p = Pattern::compile(r",").unwrap();

    let empty = rt.new_str("");
    let r = split_pattern(&mut rt, empty, &p).unwrap();
    assert!(rt.list_items(r).unwrap().is_empty());

    let no_match = rt.new_str("abc");
    let r = split_pattern(&mut rt, no_match, &p).unwrap();
    assert_eq!(strs_of(&rt, r), vec!["abc"]);
}

#[test]
fn zero_width_pattern_split_terminates() {
    let mut rt = Runtime::new();
    let p = Pattern::compile(r"x*").unwrap();
    let s = rt.new_str("ab");
    let r = split_pattern(&mut rt, s, &p).unwrap();
    // Scan advances past each zero-width match instead of stalling.
    assert_eq!(strs_of(&rt, r), vec!["", "a", "b", ""]);
}

#[test]
fn pattern_sub_replaces_the_first_match() {
    let mut rt = Runtime::new();
    let p = Pattern::compile(r"\d+").unwrap();
    let s = rt.new_str("a1b22c");
    let repl = rt.new_str("#");
    let r = sub_pattern(&mut rt, s, &p, repl).unwrap();
    assert_eq!(str_of(&rt, r), "a#b22c");
    assert_eq!(str_of(&rt, s), "a1b22c");

    let untouched = rt.new_str("abc");
    let r = sub_pattern(&mut rt, untouched, &p, repl).unwrap();
    assert_eq!(str_of(&rt, r), "abc");
}

#[test]
fn invalid_pattern_source_raises() {
    let err = Pattern::compile(r"(unclosed").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Argument);
    assert!(err.message.starts_with("invalid pattern:"));
}

#[test]
fn pattern_debug_renders_the_source() {
    let p = Pattern::compile(r"a(b)").unwrap();
    assert_eq!(format!("{p:?}"), "Pattern(\"a(b)\")");
}
