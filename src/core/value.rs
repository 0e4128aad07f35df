//! Runtime value representation.
//!
//! `Value` is a closed sum over every primitive kind the runtime knows.
//! The discriminant can never disagree with its payload; narrowing
//! accessors return `KindMismatch` instead of trusting the caller. Heavy
//! payloads (string buffers, match results, closures, lists) live on the
//! [`Heap`](super::heap::Heap) and are referenced by `ObjectId`, so
//! `Value` itself stays `Copy`.

use smallvec::SmallVec;

use super::encoding::Encoding;
use super::heap::ObjectId;
use super::symbol::SymbolId;
use super::text::StrBuf;
use crate::errors::RuntimeError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Nil,
    True,
    False,
    Int(i64),
    Float(f64),
    Str(ObjectId),
    Symbol(SymbolId),
    Encoding(Encoding),
    Match(ObjectId),
    Closure(ObjectId),
    /// Coercion pairs and operation results only; full collection
    /// semantics live outside this core.
    List(ObjectId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Nil,
    True,
    False,
    Integer,
    Float,
    String,
    Symbol,
    Encoding,
    MatchData,
    Closure,
    List,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Nil => "NilClass",
            Kind::True => "TrueClass",
            Kind::False => "FalseClass",
            Kind::Integer => "Integer",
            Kind::Float => "Float",
            Kind::String => "String",
            Kind::Symbol => "Symbol",
            Kind::Encoding => "Encoding",
            Kind::MatchData => "MatchData",
            Kind::Closure => "Proc",
            Kind::List => "Array",
        }
    }
}

impl Value {
    pub fn from_bool(b: bool) -> Self {
        if b { Value::True } else { Value::False }
    }

    /// Never fails; the whole point of the closed variant.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::True => Kind::True,
            Value::False => Kind::False,
            Value::Int(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::String,
            Value::Symbol(_) => Kind::Symbol,
            Value::Encoding(_) => Kind::Encoding,
            Value::Match(_) => Kind::MatchData,
            Value::Closure(_) => Kind::Closure,
            Value::List(_) => Kind::List,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn is_numeric(&self) -> bool {
        self.is_int() || self.is_float()
    }

    pub fn as_int(&self) -> Result<i64, RuntimeError> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(RuntimeError::kind_mismatch("Integer", other.kind_name())),
        }
    }

    pub fn as_float(&self) -> Result<f64, RuntimeError> {
        match self {
            Value::Float(f) => Ok(*f),
            other => Err(RuntimeError::kind_mismatch("Float", other.kind_name())),
        }
    }

    pub fn as_str_id(&self) -> Result<ObjectId, RuntimeError> {
        match self {
            Value::Str(id) => Ok(*id),
            other => Err(RuntimeError::kind_mismatch("String", other.kind_name())),
        }
    }

    pub fn as_symbol(&self) -> Result<SymbolId, RuntimeError> {
        match self {
            Value::Symbol(id) => Ok(*id),
            other => Err(RuntimeError::kind_mismatch("Symbol", other.kind_name())),
        }
    }

    pub fn as_encoding(&self) -> Result<Encoding, RuntimeError> {
        match self {
            Value::Encoding(e) => Ok(*e),
            other => Err(RuntimeError::kind_mismatch("Encoding", other.kind_name())),
        }
    }

    pub fn as_match_id(&self) -> Result<ObjectId, RuntimeError> {
        match self {
            Value::Match(id) => Ok(*id),
            other => Err(RuntimeError::kind_mismatch("MatchData", other.kind_name())),
        }
    }

    pub fn as_closure_id(&self) -> Result<ObjectId, RuntimeError> {
        match self {
            Value::Closure(id) => Ok(*id),
            other => Err(RuntimeError::kind_mismatch("Proc", other.kind_name())),
        }
    }

    pub fn as_list_id(&self) -> Result<ObjectId, RuntimeError> {
        match self {
            Value::List(id) => Ok(*id),
            other => Err(RuntimeError::kind_mismatch("Array", other.kind_name())),
        }
    }
}

/// Opaque handle to a compiled block owned by the control-flow layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub usize);

/// A captured block plus its arity discipline. `lambda` closures check
/// argument counts strictly; plain blocks do not. The distinction is
/// consumed by the dispatch layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closure {
    pub block: BlockId,
    pub lambda: bool,
}

/// One pattern match, detached from the subject string.
///
/// The subject is snapshotted at match time so later mutation of the
/// original string cannot invalidate the regions. Region 0 is the whole
/// match; a `None` region is a group that did not participate.
#[derive(Debug, Clone)]
pub struct MatchData {
    subject: StrBuf,
    regions: SmallVec<[Option<(usize, usize)>; 8]>,
}

impl MatchData {
    pub fn new(subject: StrBuf, regions: SmallVec<[Option<(usize, usize)>; 8]>) -> Self {
        debug_assert!(!regions.is_empty());
        debug_assert!(regions.iter().flatten().all(|(b, e)| b <= e));
        Self { subject, regions }
    }

    /// Region count, including the whole match. Always >= 1.
    pub fn size(&self) -> usize {
        self.regions.len()
    }

    pub fn region(&self, index: usize) -> Option<(usize, usize)> {
        self.regions.get(index).copied().flatten()
    }

    /// Bytes of one capture, sliced out of the snapshot.
    pub fn group_bytes(&self, index: usize) -> Option<&[u8]> {
        let (begin, end) = self.region(index)?;
        Some(&self.subject.as_bytes()[begin..end])
    }

    pub fn subject(&self) -> &StrBuf {
        &self.subject
    }
}
