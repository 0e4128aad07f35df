//! Host capability traits for dependency injection.

use crate::core::Value;

/// Frozen-state query. The freeze flag itself belongs to the object
/// layer above this core; string mutation only consults it.
pub trait FrozenState {
    fn is_frozen(&self, value: Value) -> bool;
}

/// Default: nothing is frozen.
pub struct NeverFrozen;

impl FrozenState for NeverFrozen {
    fn is_frozen(&self, _value: Value) -> bool {
        false
    }
}

pub struct Capabilities {
    pub frozen: Box<dyn FrozenState>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { frozen: Box::new(NeverFrozen) }
    }
}
