//! The numeric coercion protocol shared by Integer and Float.
//!
//! For `op(lhs, rhs)` with a mixed right-hand side, the receiver asks
//! `rhs` to coerce: `rhs.coerce(lhs)` must return a two-element array
//! `[lhs', rhs']` in a common kind. The caller retries the operation on
//! the pair; if `lhs'` is a foreign kind the whole operation is delegated
//! back to it (double dispatch).

use crate::core::value::Value;
use crate::errors::RuntimeError;
use crate::runtime::Runtime;

/// Runs the coercion capability on `rhs` with `lhs` as argument and
/// unpacks the `[lhs', rhs']` pair.
pub(crate) fn coerce_pair(
    rt: &mut Runtime,
    lhs: Value,
    rhs: Value,
) -> Result<(Value, Value), RuntimeError> {
    let result = rt.send(rhs, "coerce", &[lhs])?;
    let items = rt.list_items(result)?;
    if items.len() != 2 {
        return Err(RuntimeError::type_error(
            "coerce must return [x, y]".to_string(),
        ));
    }
    Ok((items[0], items[1]))
}

/// TypeError for an operand that cannot enter the protocol at all.
pub(crate) fn uncoercible(rhs: Value, target: &str) -> RuntimeError {
    RuntimeError::type_error(format!(
        "{} can't be coerced into {target}",
        rhs.kind_name()
    ))
}

/// ArgumentError for a relational comparison that found no ordering.
pub(crate) fn comparison_failed(lhs_kind: &str, rhs: Value) -> RuntimeError {
    RuntimeError::argument(format!(
        "comparison of {lhs_kind} with {} failed",
        rhs.kind_name()
    ))
}
