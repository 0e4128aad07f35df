//! Encoding value methods.

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
    let tag = recv.as_encoding()?;

    match kind {
        MethodKind::Name | MethodKind::ToS | MethodKind::Inspect => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(new_str_value(rt, tag.name()))
        }
        MethodKind::Names => {
            // Canonical name first, then aliases.
            validate_arity(method, args.len(), 0, 0)?;
            let names = rt.encodings().names(tag);
            let items: Vec<Value> = names
                .into_iter()
                .map(|n| new_str_value(rt, n))
                .collect();
            Ok(new_list_value(rt, items))
        }
        MethodKind::Eq => {
            validate_arity(method, args.len(), 1, 1)?;
            Ok(Value::from_bool(
                matches!(args[0], Value::Encoding(other) if other == tag),
            ))
        }
        _ => Err(unknown_method(recv, method)),
    }
}
