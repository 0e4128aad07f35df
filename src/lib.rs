//! Fen language runtime core: primitive values and their operators.
//!
//! The crate models the value layer of a dynamically typed guest
//! language. Immediate values (nil, booleans, integers, floats, symbols,
//! encoding tags) live inline in [`Value`]; strings, match results,
//! closures and lists live in a [`Heap`] behind ids. [`Runtime::send`]
//! dispatches named operations to the built-in methods of each kind.

#![allow(clippy::collapsible_if)]
#![allow(clippy::new_without_default)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::manual_range_contains)]

pub mod core;
pub mod errors;

mod caps;
mod methods;
mod pattern;
mod runtime;

pub use core::encoding::{Encoding, EncodingRegistry};
pub use core::heap::{Heap, ManagedObject, ObjectId};
pub use core::symbol::{SymbolId, SymbolTable};
pub use core::text::StrBuf;
pub use core::value::{BlockId, Closure, Kind, MatchData, Value};

pub use caps::{Capabilities, FrozenState, NeverFrozen};
pub use errors::{ErrorKind, RuntimeError};
pub use methods::{match_pattern, ref_index, ref_range, split_pattern, sub_pattern, RangeArg};
pub use pattern::{Pattern, Regions};
pub use runtime::Runtime;
