//! Float operators and methods.
//!
//! NaN poisons every ordering: `<=>` and the relational operators yield
//! nil (no ordering) when either side is NaN. Division by zero produces a
//! NaN Float rather than raising.

use super::common::*;
use super::numeric;
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
    let f = recv.as_float()?;

    match kind {
        MethodKind::ToS | MethodKind::Inspect => {
            validate_arity(method, args.len(), 0, 0)?;
            let s = float_to_s(f);
            Ok(new_str_value(rt, &s))
        }
        MethodKind::ToI => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(Value::Int(f.floor() as i64))
        }
        MethodKind::Abs => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(Value::Float(f.abs()))
        }
        MethodKind::NanP => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(Value::from_bool(f.is_nan()))
        }
        MethodKind::Eql => {
            // Exact same-kind equality; no coercion is attempted.
            validate_arity(method, args.len(), 1, 1)?;
            Ok(Value::from_bool(matches!(args[0], Value::Float(g) if g == f)))
        }
        MethodKind::Eq => {
            validate_arity(method, args.len(), 1, 1)?;
            Ok(Value::from_bool(match args[0] {
                Value::Float(g) => f == g,
                Value::Int(i) => f == i as f64,
                _ => false,
            }))
        }
        MethodKind::Coerce => {
            validate_arity(method, args.len(), 1, 1)?;
            match args[0] {
                Value::Float(_) => Ok(new_list_value(rt, vec![args[0], recv])),
                Value::Int(i) => {
                    let promoted = Value::Float(i as f64);
                    Ok(new_list_value(rt, vec![promoted, recv]))
                }
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
            arith(rt, recv, f, kind, args[0], method)
        }
        MethodKind::Cmp => {
            validate_arity(method, args.len(), 1, 1)?;
            cmp_value(rt, recv, f, args[0])
        }
        MethodKind::Lt | MethodKind::Le | MethodKind::Gt | MethodKind::Ge => {
            validate_arity(method, args.len(), 1, 1)?;
            relational(rt, recv, f, kind, args[0])
        }
        _ => Err(unknown_method(recv, method)),
    }
}

/// Outcome of pushing the right-hand side through the coercion protocol:
/// a usable float, a result already produced by delegating to a promoted
/// foreign lhs, or an operand that never became a float. Callers report
/// `Foreign` against the original argument.
enum Resolved {
    Float(f64),
    Delegated(Value),
    Foreign,
}

fn resolve_rhs(
    rt: &mut Runtime,
    recv: Value,
    arg: Value,
    method: &str,
) -> Result<Resolved, RuntimeError> {
    if let Value::Float(g) = arg {
        return Ok(Resolved::Float(g));
    }
    if !rt.responds_to_coerce(arg) {
        return Ok(Resolved::Foreign);
    }
    let (lhs, rhs) = numeric::coerce_pair(rt, recv, arg)?;
    if !lhs.is_float() {
        return Ok(Resolved::Delegated(rt.send(lhs, method, &[rhs])?));
    }
    match rhs {
        Value::Float(g) => Ok(Resolved::Float(g)),
        _ => Ok(Resolved::Foreign),
    }
}

fn arith(
    rt: &mut Runtime,
    recv: Value,
    f: f64,
    kind: MethodKind,
    arg: Value,
    method: &str,
) -> Result<Value, RuntimeError> {
    let g = match resolve_rhs(rt, recv, arg, method)? {
        Resolved::Float(g) => g,
        Resolved::Delegated(result) => return Ok(result),
        Resolved::Foreign => return Err(numeric::uncoercible(arg, "Float")),
    };
    let result = match kind {
        MethodKind::Add => f + g,
        MethodKind::Sub => f - g,
        MethodKind::Mul => f * g,
        MethodKind::Div => {
            if g == 0.0 {
                f64::NAN
            } else {
                f / g
            }
        }
        MethodKind::Mod => {
            if g == 0.0 {
                f64::NAN
            } else {
                f % g
            }
        }
        MethodKind::Pow => f.powf(g),
        _ => unreachable!("not an arithmetic operator"),
    };
    Ok(Value::Float(result))
}

fn cmp_value(
    rt: &mut Runtime,
    recv: Value,
    f: f64,
    arg: Value,
) -> Result<Value, RuntimeError> {
    let g = match resolve_rhs(rt, recv, arg, "<=>")? {
        Resolved::Float(g) => g,
        Resolved::Delegated(result) => return Ok(result),
        Resolved::Foreign => return Ok(Value::Nil),
    };
    if f.is_nan() || g.is_nan() {
        return Ok(Value::Nil);
    }
    Ok(Value::Int(if f < g {
        -1
    } else if f == g {
        0
    } else {
        1
    }))
}

fn relational(
    rt: &mut Runtime,
    recv: Value,
    f: f64,
    kind: MethodKind,
    arg: Value,
) -> Result<Value, RuntimeError> {
    let method = match kind {
        MethodKind::Lt => "<",
        MethodKind::Le => "<=",
        MethodKind::Gt => ">",
        MethodKind::Ge => ">=",
        _ => unreachable!("not a relational operator"),
    };
    let g = match resolve_rhs(rt, recv, arg, method)? {
        Resolved::Float(g) => g,
        Resolved::Delegated(result) => return Ok(result),
        Resolved::Foreign => {
            return Err(numeric::comparison_failed("Float", arg));
        }
    };
    if f.is_nan() || g.is_nan() {
        return Ok(Value::Nil);
    }
    let holds = match kind {
        MethodKind::Lt => f < g,
        MethodKind::Le => f <= g,
        MethodKind::Gt => f > g,
        MethodKind::Ge => f >= g,
        _ => unreachable!(),
    };
    Ok(Value::from_bool(holds))
}

/// Fixed-precision rendering: fifteen fractional digits, trailing zeros
/// trimmed, at least one fractional digit kept.
pub(crate) fn float_to_s(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f == f64::INFINITY {
        return "Infinity".to_string();
    }
    if f == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    let mut out = format!("{f:.15}");
    while out.len() > 1 {
        let bytes = out.as_bytes();
        let n = bytes.len();
        if bytes[n - 1] == b'0' && bytes[n - 2] != b'.' {
            out.pop();
        } else {
            break;
        }
    }
    out
}
