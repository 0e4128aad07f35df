use fen_runtime::{
    BlockId, Capabilities, Encoding, ErrorKind, FrozenState, ObjectId, Runtime, Value,
};

fn str_of(rt: &Runtime, v: Value) -> String {
    rt.str_buf(v).unwrap().as_str_lossy().into_owned()
}

#[test]
fn unknown_method_is_a_type_error() {
    let mut rt = Runtime::new();
    let err = rt.send(Value::Int(1), "frobnicate", &[]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "undefined method `frobnicate' for Integer");

    let err = rt.send(Value::Nil, "+", &[Value::Int(1)]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
}

#[test]
fn symbols_intern_to_one_id() {
    let mut rt = Runtime::new();
    let a = rt.intern("status");
    let b = rt.intern("status");
    let c = rt.intern("other");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(rt.send(a, "==", &[b]).unwrap(), Value::True);
    assert_eq!(rt.send(a, "==", &[c]).unwrap(), Value::False);

    assert_eq!(rt.symbols().len(), 2);
    let Value::Symbol(id) = a else { panic!("expected a symbol") };
    assert_eq!(rt.symbols().get("status"), Some(id));
    assert_eq!(rt.symbols().get("missing"), None);
    assert_eq!(rt.symbols().name(id), "status");
}

#[test]
fn symbol_rendering() {
    let mut rt = Runtime::new();
    let sym = rt.intern("status");
    let s = rt.send(sym, "to_s", &[]).unwrap();
    assert_eq!(str_of(&rt, s), "status");
    let i = rt.send(sym, "inspect", &[]).unwrap();
    assert_eq!(str_of(&rt, i), ":status");
}

#[test]
fn nil_methods() {
    let mut rt = Runtime::new();
    let s = rt.send(Value::Nil, "to_s", &[]).unwrap();
    assert_eq!(str_of(&rt, s), "");
    let i = rt.send(Value::Nil, "inspect", &[]).unwrap();
    assert_eq!(str_of(&rt, i), "nil");
    let a = rt.send(Value::Nil, "to_a", &[]).unwrap();
    assert!(rt.list_items(a).unwrap().is_empty());
    assert_eq!(rt.send(Value::Nil, "to_i", &[]).unwrap(), Value::Int(0));
    assert_eq!(rt.send(Value::Nil, "==", &[Value::Nil]).unwrap(), Value::True);
    assert_eq!(rt.send(Value::Nil, "==", &[Value::False]).unwrap(), Value::False);
}

#[test]
fn boolean_rendering() {
    let mut rt = Runtime::new();
    let t = rt.send(Value::True, "to_s", &[]).unwrap();
    assert_eq!(str_of(&rt, t), "true");
    let f = rt.send(Value::False, "inspect", &[]).unwrap();
    assert_eq!(str_of(&rt, f), "false");
}

#[test]
fn closures_report_lambda_strictness() {
    let mut rt = Runtime::new();
    let lambda = rt.new_closure(BlockId(7), true);
    let block = rt.new_closure(BlockId(8), false);
    assert_eq!(rt.send(lambda, "lambda?", &[]).unwrap(), Value::True);
    assert_eq!(rt.send(block, "lambda?", &[]).unwrap(), Value::False);
}

#[test]
fn encoding_values_compare_by_tag() {
    let mut rt = Runtime::new();
    let utf8 = Value::Encoding(Encoding::Utf8);
    let binary = Value::Encoding(Encoding::Ascii8Bit);
    assert_eq!(rt.send(utf8, "==", &[utf8]).unwrap(), Value::True);
    assert_eq!(rt.send(utf8, "==", &[binary]).unwrap(), Value::False);
}

#[test]
fn narrowing_accessors_flag_caller_bugs() {
    let rt = Runtime::new();
    assert!(rt.heap().is_empty());
    let err = Value::Nil.as_int().unwrap_err();
    assert_eq!(err.kind, ErrorKind::KindMismatch);
    assert!(!err.is_guest_visible());

    let err = rt.str_buf(Value::Int(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::KindMismatch);

    let zero_div = fen_runtime::RuntimeError::zero_division();
    assert!(zero_div.is_guest_visible());
}

#[test]
fn fabricated_object_ids_error_instead_of_panicking() {
    let rt = Runtime::new();
    assert!(rt.heap().get(ObjectId(999)).is_err());

    let err = rt.str_buf(Value::Str(ObjectId(999))).unwrap_err();
    assert_eq!(err.kind, ErrorKind::KindMismatch);
    assert!(!err.is_guest_visible());
}

struct AllFrozen;

impl FrozenState for AllFrozen {
    fn is_frozen(&self, _value: Value) -> bool {
        true
    }
}

#[test]
fn frozen_strings_refuse_mutation() {
    let mut rt = Runtime::with_caps(Capabilities { frozen: Box::new(AllFrozen) });
    let s = rt.new_str("ab");
    let tail = rt.new_str("cd");
    let err = rt.send(s, "<<", &[tail]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "can't modify frozen String");
    assert_eq!(str_of(&rt, s), "ab");

    // Non-mutating operators stay available.
    let r = rt.send(s, "+", &[tail]).unwrap();
    assert_eq!(str_of(&rt, r), "abcd");
}

#[test]
fn error_display_names_the_guest_class() {
    let err = fen_runtime::RuntimeError::zero_division();
    assert_eq!(err.to_string(), "ZeroDivisionError: divided by 0");
    assert_eq!(err.kind.name(), "ZeroDivisionError");
}
