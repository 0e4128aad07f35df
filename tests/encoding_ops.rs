use fen_runtime::{Encoding, ErrorKind, Runtime, Value};

fn str_of(rt: &Runtime, v: Value) -> String {
    rt.str_buf(v).unwrap().as_str_lossy().into_owned()
}

#[test]
fn literals_default_to_utf8() {
    let mut rt = Runtime::new();
    let s = rt.new_str("abc");
    assert_eq!(rt.send(s, "encoding", &[]).unwrap(), Value::Encoding(Encoding::Utf8));
}

#[test]
fn registry_resolves_names_and_aliases_case_insensitively() {
    let rt = Runtime::new();
    let enc = rt.encodings();
    assert_eq!(enc.resolve("UTF-8").unwrap(), Encoding::Utf8);
    assert_eq!(enc.resolve("utf-8").unwrap(), Encoding::Utf8);
    assert_eq!(enc.resolve("CP65001").unwrap(), Encoding::Utf8);
    assert_eq!(enc.resolve("ASCII-8BIT").unwrap(), Encoding::Ascii8Bit);
    assert_eq!(enc.resolve("binary").unwrap(), Encoding::Ascii8Bit);
}

#[test]
fn registry_lists_both_encodings() {
    let rt = Runtime::new();
    let all: Vec<Encoding> = rt.encodings().list().collect();
    assert_eq!(all, vec![Encoding::Ascii8Bit, Encoding::Utf8]);
}

#[test]
fn unknown_encoding_name_raises() {
    let rt = Runtime::new();
    let err = rt.encodings().resolve("EBCDIC").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Argument);
    assert_eq!(err.message, "unknown encoding name - EBCDIC");
}

#[test]
fn encoding_value_exposes_name_and_aliases() {
    let mut rt = Runtime::new();
    let e = Value::Encoding(Encoding::Ascii8Bit);
    let name = rt.send(e, "name", &[]).unwrap();
    assert_eq!(str_of(&rt, name), "ASCII-8BIT");

    let names = rt.send(e, "names", &[]).unwrap();
    let items = rt.list_items(names).unwrap().clone();
    let rendered: Vec<String> = items.iter().map(|v| str_of(&rt, *v)).collect();
    assert_eq!(rendered, vec!["ASCII-8BIT", "BINARY"]);
}

#[test]
fn force_encoding_reinterprets_without_copying_bytes() {
    let mut rt = Runtime::new();
    let s = rt.new_str("héllo");
    let byte_len = rt.str_buf(s).unwrap().len();
    assert_eq!(rt.send(s, "size", &[]).unwrap(), Value::Int(5));

    let name = rt.new_str("ASCII-8BIT");
    let r = rt.send(s, "force_encoding", &[name]).unwrap();
    assert_eq!(r, s);
    assert_eq!(rt.str_buf(s).unwrap().encoding(), Encoding::Ascii8Bit);
    assert_eq!(rt.str_buf(s).unwrap().len(), byte_len);
    // Under the byte encoding every byte is one character.
    assert_eq!(rt.send(s, "size", &[]).unwrap(), Value::Int(byte_len as i64));
}

#[test]
fn force_encoding_accepts_an_encoding_value() {
    let mut rt = Runtime::new();
    let s = rt.new_str("abc");
    rt.send(s, "force_encoding", &[Value::Encoding(Encoding::Ascii8Bit)]).unwrap();
    assert_eq!(rt.str_buf(s).unwrap().encoding(), Encoding::Ascii8Bit);
}

#[test]
fn force_encoding_rejects_other_kinds() {
    let mut rt = Runtime::new();
    let s = rt.new_str("abc");
    let err = rt.send(s, "force_encoding", &[Value::Int(1)]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "no implicit conversion of Integer into String");
}

#[test]
fn encode_to_binary_requires_single_byte_characters() {
    let mut rt = Runtime::new();
    let ascii = rt.new_str("hello");
    let target = rt.new_str("ASCII-8BIT");
    let r = rt.send(ascii, "encode", &[target]).unwrap();
    assert_ne!(r, ascii);
    assert_eq!(rt.str_buf(r).unwrap().encoding(), Encoding::Ascii8Bit);
    assert_eq!(str_of(&rt, r), "hello");

    let multibyte = rt.new_str("héllo");
    let err = rt.send(multibyte, "encode", &[target]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UndefinedConversion);
    assert_eq!(err.message, "U+E9 from UTF-8 to ASCII-8BIT");
}

#[test]
fn encode_widening_always_succeeds() {
    let mut rt = Runtime::new();
    let s = rt.new_bytes(vec![0xC3, 0xA9], Encoding::Ascii8Bit);
    let r = rt.send(s, "encode", &[Value::Encoding(Encoding::Utf8)]).unwrap();
    assert_eq!(rt.str_buf(r).unwrap().encoding(), Encoding::Utf8);
    assert_eq!(str_of(&rt, r), "é");
    // The source keeps its own tag.
    assert_eq!(rt.str_buf(s).unwrap().encoding(), Encoding::Ascii8Bit);
}

#[test]
fn encode_to_the_same_encoding_copies() {
    let mut rt = Runtime::new();
    let s = rt.new_str("abc");
    let r = rt.send(s, "encode", &[Value::Encoding(Encoding::Utf8)]).unwrap();
    assert_ne!(r, s);
    assert_eq!(str_of(&rt, r), "abc");
}

#[test]
fn positional_ops_follow_the_tag() {
    let mut rt = Runtime::new();
    let s = rt.new_bytes("héllo".as_bytes().to_vec(), Encoding::Ascii8Bit);
    // Six characters as bytes, five as UTF-8.
    assert_eq!(rt.send(s, "size", &[]).unwrap(), Value::Int(6));
    rt.send(s, "force_encoding", &[Value::Encoding(Encoding::Utf8)]).unwrap();
    assert_eq!(rt.send(s, "size", &[]).unwrap(), Value::Int(5));
}
