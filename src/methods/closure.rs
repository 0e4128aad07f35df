//! Closure descriptor methods. Invocation is the evaluator's job; this
//! core only distinguishes lambda-strict descriptors from plain blocks.

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
    let id = recv.as_closure_id()?;
    let closure = *rt.heap.closure(id)?;

    match kind {
        MethodKind::LambdaP => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(Value::from_bool(closure.lambda))
        }
        _ => Err(unknown_method(recv, method)),
    }
}
