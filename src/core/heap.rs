//! Heap storage for value payloads.
//!
//! This is the allocation half of the object substrate: callers hand in a
//! payload and get back an `ObjectId`. Reclamation is the collector
//! collaborator's concern and never happens inside this core, so ids stay
//! valid for the lifetime of the runtime.

use super::text::StrBuf;
use super::value::{Closure, MatchData, Value};
use crate::errors::{ErrorKind, RuntimeError};

/// Handle to a heap-allocated payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub usize);

pub enum ManagedObject {
    Str(StrBuf),
    List(Vec<Value>),
    Match(MatchData),
    Closure(Closure),
}

pub struct Heap {
    objects: Vec<ManagedObject>,
}

impl Heap {
    pub fn new() -> Self {
        Self { objects: Vec::with_capacity(256) }
    }

    pub fn alloc(&mut self, obj: ManagedObject) -> ObjectId {
        let id = self.objects.len();
        self.objects.push(obj);
        ObjectId(id)
    }

    /// Checked lookup. An id this heap never issued is a caller bug and
    /// surfaces the same way a wrong-tag narrowing does.
    pub fn get(&self, id: ObjectId) -> Result<&ManagedObject, RuntimeError> {
        self.objects.get(id.0).ok_or_else(|| dangling(id))
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Result<&mut ManagedObject, RuntimeError> {
        self.objects.get_mut(id.0).ok_or_else(|| dangling(id))
    }

    pub fn str(&self, id: ObjectId) -> Result<&StrBuf, RuntimeError> {
        match self.get(id)? {
            ManagedObject::Str(s) => Ok(s),
            other => Err(RuntimeError::kind_mismatch("String", object_name(other))),
        }
    }

    pub fn str_mut(&mut self, id: ObjectId) -> Result<&mut StrBuf, RuntimeError> {
        match self.get_mut(id)? {
            ManagedObject::Str(s) => Ok(s),
            other => Err(RuntimeError::kind_mismatch("String", object_name(other))),
        }
    }

    pub fn list(&self, id: ObjectId) -> Result<&Vec<Value>, RuntimeError> {
        match self.get(id)? {
            ManagedObject::List(items) => Ok(items),
            other => Err(RuntimeError::kind_mismatch("Array", object_name(other))),
        }
    }

    pub fn match_data(&self, id: ObjectId) -> Result<&MatchData, RuntimeError> {
        match self.get(id)? {
            ManagedObject::Match(m) => Ok(m),
            other => Err(RuntimeError::kind_mismatch("MatchData", object_name(other))),
        }
    }

    pub fn closure(&self, id: ObjectId) -> Result<&Closure, RuntimeError> {
        match self.get(id)? {
            ManagedObject::Closure(c) => Ok(c),
            other => Err(RuntimeError::kind_mismatch("Proc", object_name(other))),
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

fn dangling(id: ObjectId) -> RuntimeError {
    RuntimeError::new(
        ErrorKind::KindMismatch,
        format!("no heap object for id {}", id.0),
    )
}

fn object_name(obj: &ManagedObject) -> &'static str {
    match obj {
        ManagedObject::Str(_) => "String",
        ManagedObject::List(_) => "Array",
        ManagedObject::Match(_) => "MatchData",
        ManagedObject::Closure(_) => "Proc",
    }
}
