//! Error kinds and messages surfaced by the value runtime.
//!
//! Guest-visible kinds map to the exception classes the surrounding
//! rescue machinery knows about. `KindMismatch` is different: it means a
//! narrowing accessor was called against the wrong tag, which is a caller
//! bug, not something a guest program can rescue.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or empty input, unresolved encoding name, bad coercion target.
    Argument,
    /// Operand of the wrong kind, no implicit conversion available.
    Type,
    /// Integer division or modulo by zero.
    ZeroDivision,
    /// A multi-byte character cannot survive a narrowing encoding change.
    UndefinedConversion,
    /// No conversion rule exists between two encodings.
    ConverterNotFound,
    /// Internal consistency failure: wrong tag handed to a narrowing accessor.
    KindMismatch,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Argument => "ArgumentError",
            ErrorKind::Type => "TypeError",
            ErrorKind::ZeroDivision => "ZeroDivisionError",
            ErrorKind::UndefinedConversion => "Encoding::UndefinedConversionError",
            ErrorKind::ConverterNotFound => "Encoding::ConverterNotFoundError",
            ErrorKind::KindMismatch => "KindMismatch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub message: String,
}

impl RuntimeError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Argument, message)
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Type, message)
    }

    pub fn zero_division() -> Self {
        Self::new(ErrorKind::ZeroDivision, messages::DIVIDED_BY_ZERO)
    }

    pub fn undefined_conversion(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedConversion, message)
    }

    pub fn converter_not_found() -> Self {
        Self::new(ErrorKind::ConverterNotFound, messages::CONVERTER_NOT_FOUND)
    }

    /// Wrong tag handed to a narrowing accessor. Always a caller bug.
    pub fn kind_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::new(
            ErrorKind::KindMismatch,
            format!("expected {expected}, got {actual}"),
        )
    }

    /// True for the kinds a guest `rescue` can observe.
    pub fn is_guest_visible(&self) -> bool {
        self.kind != ErrorKind::KindMismatch
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.name(), self.message)
    }
}

impl std::error::Error for RuntimeError {}

pub mod messages {
    pub const DIVIDED_BY_ZERO: &str = "divided by 0";
    pub const CONVERTER_NOT_FOUND: &str = "code converter not found";
    pub const EMPTY_STRING: &str = "empty string";
    pub const FROZEN_STRING: &str = "can't modify frozen String";
}
