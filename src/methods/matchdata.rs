//! Match results.
//!
//! A match snapshots its subject bytes at match time, so later mutation
//! of the searched string cannot shift what the groups refer to.

use super::common::*;
use super::MethodKind;
use crate::core::text::StrBuf;
use crate::core::value::{MatchData, Value};
use crate::errors::RuntimeError;
use crate::pattern::Pattern;
use crate::runtime::Runtime;

pub(crate) fn dispatch(
    rt: &mut Runtime,
    recv: Value,
    kind: MethodKind,
    args: &[Value],
    method: &str,
) -> Result<Value, RuntimeError> {
    let m = rt.match_data(recv)?.clone();

    match kind {
        MethodKind::Size => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(Value::Int(m.size() as i64))
        }
        MethodKind::ToS => {
            validate_arity(method, args.len(), 0, 0)?;
            // Region 0 participates in every successful match.
            match m.group_bytes(0) {
                Some(bytes) => {
                    let buf = StrBuf::from_bytes(bytes.to_vec(), m.subject().encoding());
                    Ok(new_buf_value(rt, buf))
                }
                None => unreachable!("a match always has a whole-match region"),
            }
        }
        MethodKind::Ref => {
            validate_arity(method, args.len(), 1, 1)?;
            let index = expect_int(args[0])?;
            if index < 0 {
                return Err(RuntimeError::argument(format!(
                    "negative group index {index}"
                )));
            }
            group(rt, &m, index as usize)
        }
        _ => Err(unknown_method(recv, method)),
    }
}

fn group(rt: &mut Runtime, m: &MatchData, index: usize) -> Result<Value, RuntimeError> {
    if index >= m.size() {
        return Ok(Value::Nil);
    }
    match m.group_bytes(index) {
        Some(bytes) => {
            let buf = StrBuf::from_bytes(bytes.to_vec(), m.subject().encoding());
            Ok(new_buf_value(rt, buf))
        }
        // In range but the group did not participate in the match.
        None => Ok(Value::Nil),
    }
}

/// Runs `pattern` against `subject` from byte offset `start`. Produces a
/// MatchData value on success and nil when nothing matches.
pub fn match_pattern(
    rt: &mut Runtime,
    pattern: &Pattern,
    subject: Value,
    start: usize,
) -> Result<Value, RuntimeError> {
    let s = rt.str_buf(subject)?.clone();
    match pattern.search(s.as_bytes(), start) {
        Some(regions) => {
            let data = MatchData::new(s.dup(), regions);
            Ok(rt.new_match(data))
        }
        None => Ok(Value::Nil),
    }
}
