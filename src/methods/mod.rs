//! Built-in method dispatch.
//!
//! The narrow "send a named operation to a value" protocol: a method name
//! maps to a [`MethodKind`], the receiver's kind picks the dispatcher.
//! Numeric coercion and string conversion fall back through here when an
//! operand is not the concrete kind they expected.

use crate::core::value::{Kind, Value};
use crate::errors::RuntimeError;
use crate::runtime::Runtime;

mod closure;
mod common;
mod encoding;
pub(crate) mod float;
pub(crate) mod int;
pub(crate) mod matchdata;
mod nil_bool;
pub(crate) mod numeric;
pub(crate) mod str;
mod symbol;

pub use matchdata::match_pattern;
pub use str::{ref_index, ref_range, split_pattern, sub_pattern, RangeArg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MethodKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Cmp,
    Eq,
    CaseEq,
    Lt,
    Le,
    Gt,
    Ge,
    Eql,
    Coerce,
    ToS,
    ToI,
    ToA,
    Inspect,
    Abs,
    Succ,
    BitAnd,
    BitOr,
    NanP,
    Shovel,
    Ref,
    Index,
    Split,
    Substitute,
    ForceEncoding,
    Encode,
    Ljust,
    Chars,
    Size,
    Ord,
    Bytes,
    EncodingGet,
    Name,
    Names,
    LambdaP,
    Unknown,
}

impl MethodKind {
    pub(crate) fn from_str(s: &str) -> Self {
        match s {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            "**" => Self::Pow,
            "<=>" => Self::Cmp,
            "==" => Self::Eq,
            "===" => Self::CaseEq,
            "<" => Self::Lt,
            "<=" => Self::Le,
            ">" => Self::Gt,
            ">=" => Self::Ge,
            "eql?" => Self::Eql,
            "coerce" => Self::Coerce,
            "to_s" => Self::ToS,
            "to_i" => Self::ToI,
            "to_a" => Self::ToA,
            "inspect" => Self::Inspect,
            "abs" => Self::Abs,
            "succ" => Self::Succ,
            "&" => Self::BitAnd,
            "|" => Self::BitOr,
            "nan?" => Self::NanP,
            "<<" => Self::Shovel,
            "[]" => Self::Ref,
            "index" => Self::Index,
            "split" => Self::Split,
            "sub" => Self::Substitute,
            "force_encoding" => Self::ForceEncoding,
            "encode" => Self::Encode,
            "ljust" => Self::Ljust,
            "chars" => Self::Chars,
            "size" | "length" => Self::Size,
            "ord" => Self::Ord,
            "bytes" => Self::Bytes,
            "encoding" => Self::EncodingGet,
            "name" => Self::Name,
            "names" => Self::Names,
            "lambda?" => Self::LambdaP,
            _ => Self::Unknown,
        }
    }
}

pub(crate) fn dispatch_builtin_method(
    rt: &mut Runtime,
    recv: Value,
    kind: MethodKind,
    args: &[Value],
    method: &str,
) -> Result<Value, RuntimeError> {
    match recv.kind() {
        Kind::Integer => int::dispatch(rt, recv, kind, args, method),
        Kind::Float => float::dispatch(rt, recv, kind, args, method),
        Kind::String => str::dispatch(rt, recv, kind, args, method),
        Kind::MatchData => matchdata::dispatch(rt, recv, kind, args, method),
        Kind::Symbol => symbol::dispatch(rt, recv, kind, args, method),
        Kind::Encoding => encoding::dispatch(rt, recv, kind, args, method),
        Kind::Closure => closure::dispatch(rt, recv, kind, args, method),
        Kind::Nil | Kind::True | Kind::False => {
            nil_bool::dispatch(rt, recv, kind, args, method)
        }
        Kind::List => Err(common::unknown_method(recv, method)),
    }
}
