//! Methods on nil, true and false.

use super::common::*;
use super::MethodKind;
use crate::core::value::Value;
use crate::errors::RuntimeError;
use crate::runtime::Runtime;

pub(crate) fn dispatch(
    rt: &mut Runtime,
    recv: Value,
    kind: MethodKind,
    args: &[Value],
    method: &str,
) -> Result<Value, RuntimeError> {
    match (recv, kind) {
        (Value::Nil, MethodKind::ToS) => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(new_str_value(rt, ""))
        }
        (Value::Nil, MethodKind::Inspect) => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(new_str_value(rt, "nil"))
        }
        (Value::Nil, MethodKind::ToA) => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(new_list_value(rt, Vec::new()))
        }
        (Value::Nil, MethodKind::ToI) => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(Value::Int(0))
        }
        (Value::True, MethodKind::ToS | MethodKind::Inspect) => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(new_str_value(rt, "true"))
        }
        (Value::False, MethodKind::ToS | MethodKind::Inspect) => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(new_str_value(rt, "false"))
        }
        (_, MethodKind::Eq | MethodKind::CaseEq | MethodKind::Eql) => {
            validate_arity(method, args.len(), 1, 1)?;
            let equal = match (recv, args[0]) {
                (Value::Nil, Value::Nil) => true,
                (Value::True, Value::True) => true,
                (Value::False, Value::False) => true,
                _ => false,
            };
            Ok(Value::from_bool(equal))
        }
        _ => Err(unknown_method(recv, method)),
    }
}
