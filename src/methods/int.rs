//! Integer operators and methods.

use super::common::*;
use super::numeric;
use super::MethodKind;
use crate::core::text::StrBuf;
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
    let i = recv.as_int()?;

    match kind {
        MethodKind::ToS | MethodKind::Inspect => {
            validate_arity(method, args.len(), 0, 0)?;
            let mut buf = StrBuf::new();
            buf.push_i64(i);
            Ok(new_buf_value(rt, buf))
        }
        MethodKind::ToI => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(recv)
        }
        MethodKind::Abs => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(Value::Int(i.wrapping_abs()))
        }
        MethodKind::Succ => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(Value::Int(i.wrapping_add(1)))
        }
        MethodKind::BitAnd => {
            validate_arity(method, args.len(), 1, 1)?;
            Ok(Value::Int(i & expect_int(args[0])?))
        }
        MethodKind::BitOr => {
            validate_arity(method, args.len(), 1, 1)?;
            Ok(Value::Int(i | expect_int(args[0])?))
        }
        MethodKind::Eq => {
            validate_arity(method, args.len(), 1, 1)?;
            Ok(Value::from_bool(match args[0] {
                Value::Int(j) => i == j,
                Value::Float(f) => (i as f64) == f,
                _ => false,
            }))
        }
        MethodKind::CaseEq => {
            validate_arity(method, args.len(), 1, 1)?;
            Ok(Value::from_bool(matches!(args[0], Value::Int(j) if j == i)))
        }
        MethodKind::Eql => {
            // Strict: same kind, same value, no coercion.
            validate_arity(method, args.len(), 1, 1)?;
            Ok(Value::from_bool(matches!(args[0], Value::Int(j) if j == i)))
        }
        MethodKind::Coerce => {
            validate_arity(method, args.len(), 1, 1)?;
            match args[0] {
                Value::Float(_) => {
                    let promoted = Value::Float(i as f64);
                    Ok(new_list_value(rt, vec![args[0], promoted]))
                }
                Value::Int(_) => Ok(new_list_value(rt, vec![args[0], recv])),
                other => Err(RuntimeError::argument(format!(
                    "invalid value for Float(): {}",
                    value_inspect(rt, other)
                ))),
            }
        }
        MethodKind::Add
        | MethodKind::Sub
        | MethodKind::Mul
        | MethodKind::Div
        | MethodKind::Mod
        | MethodKind::Pow => {
            validate_arity(method, args.len(), 1, 1)?;
            arith(rt, recv, i, kind, args[0], method)
        }
        MethodKind::Cmp => {
            validate_arity(method, args.len(), 1, 1)?;
            cmp_value(rt, recv, i, args[0])
        }
        MethodKind::Lt | MethodKind::Le | MethodKind::Gt | MethodKind::Ge => {
            validate_arity(method, args.len(), 1, 1)?;
            match cmp_value(rt, recv, i, args[0])? {
                Value::Int(ord) => Ok(Value::from_bool(relation_holds(kind, ord))),
                _ => Err(numeric::comparison_failed("Integer", args[0])),
            }
        }
        _ => Err(unknown_method(recv, method)),
    }
}

fn relation_holds(kind: MethodKind, ord: i64) -> bool {
    match kind {
        MethodKind::Lt => ord < 0,
        MethodKind::Le => ord <= 0,
        MethodKind::Gt => ord > 0,
        MethodKind::Ge => ord >= 0,
        _ => unreachable!("not a relational operator"),
    }
}

/// Same-kind fast path, then the coercion protocol, then double dispatch.
fn arith(
    rt: &mut Runtime,
    recv: Value,
    a: i64,
    kind: MethodKind,
    arg: Value,
    method: &str,
) -> Result<Value, RuntimeError> {
    if let Value::Int(b) = arg {
        return int_int(kind, a, b);
    }
    if !rt.responds_to_coerce(arg) {
        return Err(numeric::uncoercible(arg, "Integer"));
    }
    let (lhs, rhs) = numeric::coerce_pair(rt, recv, arg)?;
    if !lhs.is_int() {
        // A coercion promoted the receiver; hand the whole operation over.
        return rt.send(lhs, method, &[rhs]);
    }
    match rhs {
        Value::Int(b) => int_int(kind, lhs.as_int()?, b),
        _ => Err(numeric::uncoercible(arg, "Integer")),
    }
}

fn int_int(kind: MethodKind, a: i64, b: i64) -> Result<Value, RuntimeError> {
    let result = match kind {
        MethodKind::Add => a.wrapping_add(b),
        MethodKind::Sub => a.wrapping_sub(b),
        MethodKind::Mul => a.wrapping_mul(b),
        MethodKind::Div => {
            if b == 0 {
                return Err(RuntimeError::zero_division());
            }
            a.wrapping_div(b)
        }
        MethodKind::Mod => {
            if b == 0 {
                return Err(RuntimeError::zero_division());
            }
            a.wrapping_rem(b)
        }
        // Exponentiation goes through f64 and truncates.
        MethodKind::Pow => (a as f64).powf(b as f64) as i64,
        _ => unreachable!("not an arithmetic operator"),
    };
    Ok(Value::Int(result))
}

fn cmp_value(
    rt: &mut Runtime,
    recv: Value,
    a: i64,
    arg: Value,
) -> Result<Value, RuntimeError> {
    match arg {
        Value::Int(b) => Ok(Value::Int(ordering(a, b))),
        _ if rt.responds_to_coerce(arg) => {
            let (lhs, rhs) = numeric::coerce_pair(rt, recv, arg)?;
            if !lhs.is_int() {
                return rt.send(lhs, "<=>", &[rhs]);
            }
            match rhs {
                Value::Int(b) => Ok(Value::Int(ordering(lhs.as_int()?, b))),
                _ => Ok(Value::Nil),
            }
        }
        _ => Ok(Value::Nil),
    }
}

fn ordering(a: i64, b: i64) -> i64 {
    if a < b {
        -1
    } else if a == b {
        0
    } else {
        1
    }
}
