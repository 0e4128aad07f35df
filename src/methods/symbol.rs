//! Symbol methods. Symbols are interned, so equality is id identity.

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
    let id = recv.as_symbol()?;

    match kind {
        MethodKind::ToS => {
            validate_arity(method, args.len(), 0, 0)?;
            let name = rt.symbols.name(id).to_string();
            Ok(new_str_value(rt, &name))
        }
        MethodKind::Inspect => {
            validate_arity(method, args.len(), 0, 0)?;
            let rendered = format!(":{}", rt.symbols.name(id));
            Ok(new_str_value(rt, &rendered))
        }
        MethodKind::Eq | MethodKind::CaseEq | MethodKind::Eql => {
            validate_arity(method, args.len(), 1, 1)?;
            Ok(Value::from_bool(
                matches!(args[0], Value::Symbol(other) if other == id),
            ))
        }
        _ => Err(unknown_method(recv, method)),
    }
}
