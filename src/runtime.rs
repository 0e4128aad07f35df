//! Runtime context owning the heap and the process-scoped registries.
//!
//! A `Runtime` bundles everything the primitive kinds need: the
//! allocation substrate, the symbol intern table, the encoding registry,
//! and injected host capabilities. Higher layers (class system, method
//! tables, control flow) hold one of these and go through [`Runtime::send`]
//! or the typed constructors/accessors below.

use crate::caps::Capabilities;
use crate::core::encoding::{Encoding, EncodingRegistry};
use crate::core::heap::{Heap, ManagedObject, ObjectId};
use crate::core::symbol::SymbolTable;
use crate::core::text::StrBuf;
use crate::core::value::{BlockId, Closure, MatchData, Value};
use crate::errors::RuntimeError;
use crate::methods;

pub struct Runtime {
    pub(crate) heap: Heap,
    pub(crate) symbols: SymbolTable,
    encodings: EncodingRegistry,
    caps: Capabilities,
}

impl Runtime {
    pub fn new() -> Self {
        Self::with_caps(Capabilities::default())
    }

    pub fn with_caps(caps: Capabilities) -> Self {
        Self {
            heap: Heap::new(),
            symbols: SymbolTable::new(),
            encodings: EncodingRegistry::new(),
            caps,
        }
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    pub fn encodings(&self) -> &EncodingRegistry {
        &self.encodings
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub(crate) fn alloc(&mut self, obj: ManagedObject) -> ObjectId {
        self.heap.alloc(obj)
    }

    // ------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------

    pub fn new_str(&mut self, s: &str) -> Value {
        Value::Str(self.alloc(ManagedObject::Str(StrBuf::from_str(s))))
    }

    pub fn new_str_buf(&mut self, buf: StrBuf) -> Value {
        Value::Str(self.alloc(ManagedObject::Str(buf)))
    }

    pub fn new_bytes(&mut self, bytes: Vec<u8>, encoding: Encoding) -> Value {
        Value::Str(self.alloc(ManagedObject::Str(StrBuf::from_bytes(bytes, encoding))))
    }

    pub fn new_list(&mut self, items: Vec<Value>) -> Value {
        Value::List(self.alloc(ManagedObject::List(items)))
    }

    pub fn new_match(&mut self, data: MatchData) -> Value {
        Value::Match(self.alloc(ManagedObject::Match(data)))
    }

    pub fn new_closure(&mut self, block: BlockId, lambda: bool) -> Value {
        Value::Closure(self.alloc(ManagedObject::Closure(Closure { block, lambda })))
    }

    /// Symbol constructor; interning keeps one id per distinct name.
    pub fn intern(&mut self, name: &str) -> Value {
        Value::Symbol(self.symbols.intern(name))
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    pub fn str_buf(&self, value: Value) -> Result<&StrBuf, RuntimeError> {
        self.heap.str(value.as_str_id()?)
    }

    pub fn list_items(&self, value: Value) -> Result<&Vec<Value>, RuntimeError> {
        self.heap.list(value.as_list_id()?)
    }

    pub fn match_data(&self, value: Value) -> Result<&MatchData, RuntimeError> {
        self.heap.match_data(value.as_match_id()?)
    }

    pub fn is_frozen(&self, value: Value) -> bool {
        self.caps.frozen.is_frozen(value)
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Sends a named operation to a value over the built-in method table.
    ///
    /// This is the fallback path the numeric coercion protocol and the
    /// string conversion helpers use when an operand is not the concrete
    /// kind they expected.
    pub fn send(
        &mut self,
        recv: Value,
        name: &str,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        methods::dispatch_builtin_method(self, recv, methods::MethodKind::from_str(name), args, name)
    }

    /// Whether `value` participates in the numeric coercion protocol.
    pub fn responds_to_coerce(&self, value: Value) -> bool {
        value.is_numeric()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
