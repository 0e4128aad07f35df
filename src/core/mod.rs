//! Core value infrastructure.
//!
//! - `Value` / `Kind` - the closed tagged variant and its narrowing accessors
//! - `Heap` - allocation substrate for string/list/match/closure payloads
//! - `StrBuf` - owned, encoding-tagged string storage
//! - `Encoding` - the two supported encodings and their name registry
//! - `SymbolTable` - process-lifetime symbol interning

pub mod encoding;
pub mod heap;
pub mod symbol;
pub mod text;
pub mod value;

pub use encoding::{Encoding, EncodingRegistry};
pub use heap::{Heap, ManagedObject, ObjectId};
pub use symbol::{SymbolId, SymbolTable};
pub use text::StrBuf;
pub use value::{BlockId, Closure, Kind, MatchData, Value};
