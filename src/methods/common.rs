//! Shared helpers for the per-kind dispatchers.

use crate::core::heap::ManagedObject;
use crate::core::text::StrBuf;
use crate::core::value::Value;
use crate::errors::RuntimeError;
use crate::runtime::Runtime;

pub(crate) fn validate_arity(
    _method: &str,
    args_len: usize,
    min: usize,
    max: usize,
) -> Result<(), RuntimeError> {
    if args_len < min || args_len > max {
        let expected = if min == max {
            format!("{min}")
        } else {
            format!("{min}..{max}")
        };
        return Err(RuntimeError::argument(format!(
            "wrong number of arguments (given {args_len}, expected {expected})"
        )));
    }
    Ok(())
}

pub(crate) fn unknown_method(recv: Value, method: &str) -> RuntimeError {
    RuntimeError::type_error(format!(
        "undefined method `{method}' for {}",
        recv.kind_name()
    ))
}

/// Checked string view of an argument; wrong kinds surface the guest's
/// "no implicit conversion" TypeError rather than KindMismatch.
pub(crate) fn expect_str(rt: &Runtime, value: Value) -> Result<&StrBuf, RuntimeError> {
    match value {
        Value::Str(id) => rt.heap.str(id),
        other => Err(RuntimeError::type_error(format!(
            "no implicit conversion of {} into String",
            other.kind_name()
        ))),
    }
}

pub(crate) fn expect_int(value: Value) -> Result<i64, RuntimeError> {
    match value {
        Value::Int(i) => Ok(i),
        other => Err(RuntimeError::type_error(format!(
            "no implicit conversion of {} into Integer",
            other.kind_name()
        ))),
    }
}

pub(crate) fn new_str_value(rt: &mut Runtime, s: &str) -> Value {
    Value::Str(rt.alloc(ManagedObject::Str(StrBuf::from_str(s))))
}

pub(crate) fn new_buf_value(rt: &mut Runtime, buf: StrBuf) -> Value {
    Value::Str(rt.alloc(ManagedObject::Str(buf)))
}

pub(crate) fn new_list_value(rt: &mut Runtime, items: Vec<Value>) -> Value {
    Value::List(rt.alloc(ManagedObject::List(items)))
}

/// Converts an operand to String via its own `to_s`, for concatenation
/// with a non-string right-hand side.
pub(crate) fn to_s_fallback(rt: &mut Runtime, value: Value) -> Result<Value, RuntimeError> {
    if value.is_str() {
        return Ok(value);
    }
    let converted = rt.send(value, "to_s", &[])?;
    if converted.is_str() {
        Ok(converted)
    } else {
        Err(RuntimeError::type_error(format!(
            "can't convert {} to String ({0}#to_s gives {})",
            value.kind_name(),
            converted.kind_name()
        )))
    }
}

/// Host-side rendering for error messages only.
pub(crate) fn value_inspect(rt: &Runtime, value: Value) -> String {
    match value {
        Value::Nil => "nil".to_string(),
        Value::True => "true".to_string(),
        Value::False => "false".to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Str(id) => match rt.heap.str(id) {
            Ok(s) => format!("{:?}", s.as_str_lossy()),
            Err(_) => "<string>".to_string(),
        },
        Value::Symbol(id) => format!(":{}", rt.symbols.name(id)),
        other => format!("#<{}>", other.kind_name()),
    }
}
