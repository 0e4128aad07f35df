//! String operators and methods.
//!
//! Positional arguments are character indices under the receiver's
//! encoding; `index` and the match regions are byte offsets. `split`
//! always appends a final segment after the last delimiter match, even
//! when that segment is empty: `"a,b,".split(",")` is `["a", "b", ""]`.

use super::common::*;
use super::MethodKind;
use crate::core::encoding::Encoding;
use crate::core::text::StrBuf;
use crate::core::value::Value;
use crate::errors::{messages, RuntimeError};
use crate::pattern::Pattern;
use crate::runtime::Runtime;

/// A guest range argument, already narrowed to integer endpoints. Range
/// values themselves live outside this core.
#[derive(Debug, Clone, Copy)]
pub struct RangeArg {
    pub begin: i64,
    pub end: i64,
    pub exclusive: bool,
}

pub(crate) fn dispatch(
    rt: &mut Runtime,
    recv: Value,
    kind: MethodKind,
    args: &[Value],
    method: &str,
) -> Result<Value, RuntimeError> {
    let sid = recv.as_str_id()?;
    let s = rt.heap.str(sid)?.clone();

    match kind {
        MethodKind::ToS => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(recv)
        }
        MethodKind::Inspect => {
            validate_arity(method, args.len(), 0, 0)?;
            let quoted = inspect_bytes(s.as_bytes());
            Ok(new_str_value(rt, &quoted))
        }
        MethodKind::Add => {
            validate_arity(method, args.len(), 1, 1)?;
            let other = to_s_fallback(rt, args[0])?;
            let other_buf = rt.str_buf(other)?.clone();
            let mut out = s.dup();
            out.push_buf(&other_buf);
            Ok(new_buf_value(rt, out))
        }
        MethodKind::Shovel => {
            validate_arity(method, args.len(), 1, 1)?;
            if rt.is_frozen(recv) {
                return Err(RuntimeError::type_error(messages::FROZEN_STRING));
            }
            let other = to_s_fallback(rt, args[0])?;
            let other_buf = rt.str_buf(other)?.clone();
            rt.heap.str_mut(sid)?.push_buf(&other_buf);
            Ok(recv)
        }
        MethodKind::Mul => {
            validate_arity(method, args.len(), 1, 1)?;
            let n = expect_int(args[0])?;
            if n < 0 {
                return Err(RuntimeError::argument("negative argument"));
            }
            let mut out = StrBuf::from_bytes(Vec::new(), s.encoding());
            for _ in 0..n {
                out.push_buf(&s);
            }
            Ok(new_buf_value(rt, out))
        }
        MethodKind::Eq | MethodKind::Eql => {
            validate_arity(method, args.len(), 1, 1)?;
            let equal = match args[0] {
                Value::Str(other) => rt.heap.str(other)?.as_bytes() == s.as_bytes(),
                _ => false,
            };
            Ok(Value::from_bool(equal))
        }
        MethodKind::Cmp => {
            validate_arity(method, args.len(), 1, 1)?;
            match args[0] {
                Value::Str(other) => {
                    let other_bytes = rt.heap.str(other)?.as_bytes();
                    let ord = match s.as_bytes().cmp(other_bytes) {
                        std::cmp::Ordering::Less => -1,
                        std::cmp::Ordering::Equal => 0,
                        std::cmp::Ordering::Greater => 1,
                    };
                    Ok(Value::Int(ord))
                }
                _ => Ok(Value::Nil),
            }
        }
        MethodKind::Ref => {
            validate_arity(method, args.len(), 1, 1)?;
            let index = expect_int(args[0])?;
            ref_index(rt, recv, index)
        }
        MethodKind::Index => {
            validate_arity(method, args.len(), 1, 2)?;
            let needle = expect_str(rt, args[0])?.clone();
            let from = match args.get(1) {
                Some(v) => expect_int(*v)?.max(0) as usize,
                None => 0,
            };
            match s.index_of(needle.as_bytes(), from) {
                Some(i) => Ok(Value::Int(i as i64)),
                None => Ok(Value::Nil),
            }
        }
        MethodKind::Split => {
            validate_arity(method, args.len(), 1, 1)?;
            let sep = expect_str(rt, args[0])?.clone();
            split_literal(rt, &s, &sep)
        }
        MethodKind::Substitute => {
            validate_arity(method, args.len(), 2, 2)?;
            let needle = expect_str(rt, args[0])?.clone();
            let repl = expect_str(rt, args[1])?.clone();
            match s.index_of(needle.as_bytes(), 0) {
                None => Ok(new_buf_value(rt, s.dup())),
                Some(i) => {
                    let out = splice(&s, i, i + needle.len(), &repl);
                    Ok(new_buf_value(rt, out))
                }
            }
        }
        MethodKind::ForceEncoding => {
            validate_arity(method, args.len(), 1, 1)?;
            let target = resolve_encoding_arg(rt, args[0])?;
            rt.heap.str_mut(sid)?.set_encoding(target);
            Ok(recv)
        }
        MethodKind::Encode => {
            validate_arity(method, args.len(), 1, 1)?;
            let target = resolve_encoding_arg(rt, args[0])?;
            encode(rt, &s, target)
        }
        MethodKind::Ljust => {
            validate_arity(method, args.len(), 1, 2)?;
            let target = expect_int(args[0])?.max(0) as usize;
            let pad = match args.get(1) {
                Some(v) => expect_str(rt, *v)?.clone(),
                None => StrBuf::from_str(" "),
            };
            ljust(rt, &s, target, &pad)
        }
        MethodKind::Chars => {
            validate_arity(method, args.len(), 0, 0)?;
            let items = char_values(rt, &s);
            Ok(new_list_value(rt, items))
        }
        MethodKind::Size => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(Value::Int(s.char_count() as i64))
        }
        MethodKind::Ord => {
            validate_arity(method, args.len(), 0, 0)?;
            match s.char_ranges().next() {
                Some((lo, hi)) => {
                    let cp = StrBuf::code_point(&s.as_bytes()[lo..hi]);
                    Ok(Value::Int(cp as i64))
                }
                None => Err(RuntimeError::argument(messages::EMPTY_STRING)),
            }
        }
        MethodKind::Bytes => {
            validate_arity(method, args.len(), 0, 0)?;
            let items: Vec<Value> =
                s.as_bytes().iter().map(|b| Value::Int(*b as i64)).collect();
            Ok(new_list_value(rt, items))
        }
        MethodKind::EncodingGet => {
            validate_arity(method, args.len(), 0, 0)?;
            Ok(Value::Encoding(s.encoding()))
        }
        MethodKind::ToI => {
            validate_arity(method, args.len(), 0, 1)?;
            let base = match args.first() {
                Some(v) => expect_int(*v)?,
                None => 10,
            };
            if !(2..=36).contains(&base) {
                return Err(RuntimeError::argument(format!("invalid radix {base}")));
            }
            Ok(Value::Int(parse_prefix(s.as_bytes(), base as u32)))
        }
        _ => Err(unknown_method(recv, method)),
    }
}

/// Character lookup with negative wraparound; out of range yields nil.
pub fn ref_index(rt: &mut Runtime, recv: Value, index: i64) -> Result<Value, RuntimeError> {
    let s = rt.str_buf(recv)?.clone();
    let count = s.char_count() as i64;
    let index = if index < 0 { count + index } else { index };
    if index < 0 || index >= count {
        return Ok(Value::Nil);
    }
    match s.char_range_at(index as usize) {
        Some((lo, hi)) => {
            let buf = StrBuf::from_bytes(s.as_bytes()[lo..hi].to_vec(), s.encoding());
            Ok(new_buf_value(rt, buf))
        }
        None => Ok(Value::Nil),
    }
}

/// Range slice over character indices. Both endpoints wrap when
/// negative; the upper bound clamps to the character count.
pub fn ref_range(rt: &mut Runtime, recv: Value, range: RangeArg) -> Result<Value, RuntimeError> {
    let s = rt.str_buf(recv)?.clone();
    let count = s.char_count() as i64;

    let mut begin = range.begin;
    let mut end = range.end;
    if begin < 0 {
        begin += count;
    }
    if end < 0 {
        end += count;
    }
    if begin < 0 || end < 0 {
        return Ok(Value::Nil);
    }
    if begin >= count {
        return Ok(Value::Nil);
    }
    if !range.exclusive {
        end += 1;
    }
    let end = end.min(count);

    let (lo, hi) = s.byte_span_of_chars(begin as usize, end.max(begin) as usize);
    let buf = StrBuf::from_bytes(s.as_bytes()[lo..hi].to_vec(), s.encoding());
    Ok(new_buf_value(rt, buf))
}

/// Pattern-based split. Same contract as the literal form, including the
/// unconditional trailing segment.
pub fn split_pattern(
    rt: &mut Runtime,
    recv: Value,
    pattern: &Pattern,
) -> Result<Value, RuntimeError> {
    let s = rt.str_buf(recv)?.clone();
    if s.is_empty() {
        return Ok(new_list_value(rt, Vec::new()));
    }
    let bytes = s.as_bytes();

    let first = pattern.search(bytes, 0);
    let Some(regions) = first else {
        let copy = new_buf_value(rt, s.dup());
        return Ok(new_list_value(rt, vec![copy]));
    };

    let mut parts: Vec<StrBuf> = Vec::new();
    let mut last = 0usize;
    let mut regions = regions;
    loop {
        let (begin, end) = whole_region(&regions);
        parts.push(segment(&s, last, begin));
        last = end;
        // A zero-width match must not stall the scan.
        let next_from = if end > begin { end } else { end + 1 };
        if next_from > bytes.len() {
            break;
        }
        match pattern.search(bytes, next_from) {
            Some(r) => regions = r,
            None => break,
        }
    }
    parts.push(segment(&s, last, bytes.len()));

    let items: Vec<Value> = parts.into_iter().map(|p| new_buf_value(rt, p)).collect();
    Ok(new_list_value(rt, items))
}

/// Pattern-based first-match substitution.
pub fn sub_pattern(
    rt: &mut Runtime,
    recv: Value,
    pattern: &Pattern,
    replacement: Value,
) -> Result<Value, RuntimeError> {
    let s = rt.str_buf(recv)?.clone();
    let repl = expect_str(rt, replacement)?.clone();
    match pattern.search(s.as_bytes(), 0) {
        None => Ok(new_buf_value(rt, s.dup())),
        Some(regions) => {
            let (begin, end) = whole_region(&regions);
            let out = splice(&s, begin, end, &repl);
            Ok(new_buf_value(rt, out))
        }
    }
}

fn whole_region(regions: &crate::pattern::Regions) -> (usize, usize) {
    match regions.first().copied().flatten() {
        Some(region) => region,
        None => unreachable!("a successful match always has a whole-match region"),
    }
}

fn split_literal(rt: &mut Runtime, s: &StrBuf, sep: &StrBuf) -> Result<Value, RuntimeError> {
    if s.is_empty() {
        return Ok(new_list_value(rt, Vec::new()));
    }
    if sep.is_empty() {
        // Empty delimiter degenerates to character segmentation.
        let items = char_values(rt, s);
        return Ok(new_list_value(rt, items));
    }

    let Some(first) = s.index_of(sep.as_bytes(), 0) else {
        let copy = new_buf_value(rt, s.dup());
        return Ok(new_list_value(rt, vec![copy]));
    };

    let mut parts: Vec<StrBuf> = Vec::new();
    let mut last = 0usize;
    let mut index = first;
    loop {
        parts.push(segment(s, last, index));
        last = index + sep.len();
        match s.index_of(sep.as_bytes(), last) {
            Some(next) => index = next,
            None => break,
        }
    }
    // The tail is always pushed, even when empty.
    parts.push(segment(s, last, s.len()));

    let items: Vec<Value> = parts.into_iter().map(|p| new_buf_value(rt, p)).collect();
    Ok(new_list_value(rt, items))
}

fn segment(s: &StrBuf, from: usize, to: usize) -> StrBuf {
    StrBuf::from_bytes(s.as_bytes()[from..to].to_vec(), s.encoding())
}

fn splice(s: &StrBuf, begin: usize, end: usize, replacement: &StrBuf) -> StrBuf {
    let mut out = StrBuf::from_bytes(s.as_bytes()[..begin].to_vec(), s.encoding());
    out.push_buf(replacement);
    out.push_bytes(&s.as_bytes()[end..]);
    out
}

fn resolve_encoding_arg(rt: &Runtime, arg: Value) -> Result<Encoding, RuntimeError> {
    match arg {
        Value::Encoding(e) => Ok(e),
        Value::Str(id) => {
            let name = rt.heap.str(id)?.as_str_lossy().into_owned();
            rt.encodings().resolve(&name)
        }
        other => Err(RuntimeError::type_error(format!(
            "no implicit conversion of {} into String",
            other.kind_name()
        ))),
    }
}

/// Re-tag a duplicate under `target`, then check the bytes survive the
/// narrower encoding. Widening (byte-oriented to UTF-8) always does.
fn encode(rt: &mut Runtime, s: &StrBuf, target: Encoding) -> Result<Value, RuntimeError> {
    let orig = s.encoding();
    let mut copy = s.dup();
    copy.set_encoding(target);

    if orig == target {
        return Ok(new_buf_value(rt, copy));
    }
    match (orig, target) {
        (Encoding::Utf8, Encoding::Ascii8Bit) => {
            for (lo, hi) in s.char_ranges() {
                if hi - lo > 1 {
                    let cp = StrBuf::code_point(&s.as_bytes()[lo..hi]);
                    return Err(RuntimeError::undefined_conversion(format!(
                        "U+{cp:X} from UTF-8 to ASCII-8BIT"
                    )));
                }
            }
            Ok(new_buf_value(rt, copy))
        }
        (Encoding::Ascii8Bit, Encoding::Utf8) => Ok(new_buf_value(rt, copy)),
        _ => Err(RuntimeError::converter_not_found()),
    }
}

/// Pads a duplicate with `pad` until `target` characters, truncating the
/// final append rather than overshooting.
fn ljust(
    rt: &mut Runtime,
    s: &StrBuf,
    target: usize,
    pad: &StrBuf,
) -> Result<Value, RuntimeError> {
    if pad.is_empty() {
        return Err(RuntimeError::argument("zero width padding"));
    }
    let mut copy = s.dup();
    while copy.char_count() < target {
        let overshoot = copy.char_count() + pad.char_count() > target;
        copy.push_buf(pad);
        if overshoot {
            copy.truncate_chars(target);
        }
    }
    Ok(new_buf_value(rt, copy))
}

fn char_values(rt: &mut Runtime, s: &StrBuf) -> Vec<Value> {
    let ranges: Vec<(usize, usize)> = s.char_ranges().collect();
    ranges
        .into_iter()
        .map(|(lo, hi)| {
            let buf = StrBuf::from_bytes(s.as_bytes()[lo..hi].to_vec(), s.encoding());
            new_buf_value(rt, buf)
        })
        .collect()
}

/// strtoll-style prefix parse: optional whitespace and sign, then digits
/// valid in `base`; no digits at all parses as zero.
fn parse_prefix(bytes: &[u8], base: u32) -> i64 {
    let mut pos = 0usize;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    let mut negative = false;
    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        negative = bytes[pos] == b'-';
        pos += 1;
    }
    let mut value: i64 = 0;
    while pos < bytes.len() {
        let digit = match (bytes[pos] as char).to_digit(base) {
            Some(d) => d as i64,
            None => break,
        };
        value = value.wrapping_mul(base as i64).wrapping_add(digit);
        pos += 1;
    }
    if negative { value.wrapping_neg() } else { value }
}

fn inspect_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for chunk in String::from_utf8_lossy(bytes).chars() {
        match chunk {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
