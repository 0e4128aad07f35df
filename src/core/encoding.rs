//! The two supported text encodings and the process-wide name registry.
//!
//! Only a byte-oriented encoding (ASCII-8BIT) and UTF-8 are modeled.
//! Switching a string between them is tag reinterpretation plus a
//! validity check, never charset mapping.

use crate::errors::RuntimeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Byte-oriented: every byte is one character.
    Ascii8Bit,
    /// Variable-width multi-byte, 1..=4 bytes per character.
    Utf8,
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Ascii8Bit => "ASCII-8BIT",
            Encoding::Utf8 => "UTF-8",
        }
    }
}

struct EncodingSpec {
    tag: Encoding,
    canonical: &'static str,
    aliases: &'static [&'static str],
}

const SPECS: &[EncodingSpec] = &[
    EncodingSpec {
        tag: Encoding::Ascii8Bit,
        canonical: "ASCII-8BIT",
        aliases: &["BINARY"],
    },
    EncodingSpec {
        tag: Encoding::Utf8,
        canonical: "UTF-8",
        aliases: &["CP65001"],
    },
];

/// Constant after construction; one per [`crate::Runtime`] so the core
/// stays testable without process globals.
pub struct EncodingRegistry {
    _priv: (),
}

impl EncodingRegistry {
    pub(crate) fn new() -> Self {
        Self { _priv: () }
    }

    /// All registered encodings, in registration order.
    pub fn list(&self) -> impl Iterator<Item = Encoding> + '_ {
        SPECS.iter().map(|s| s.tag)
    }

    /// Canonical name plus aliases for one encoding.
    pub fn names(&self, tag: Encoding) -> Vec<&'static str> {
        let spec = SPECS
            .iter()
            .find(|s| s.tag == tag)
            .unwrap_or_else(|| unreachable!("unregistered encoding tag"));
        let mut out = vec![spec.canonical];
        out.extend_from_slice(spec.aliases);
        out
    }

    /// Case-insensitive lookup across every canonical and alias name.
    pub fn resolve(&self, name: &str) -> Result<Encoding, RuntimeError> {
        for spec in SPECS {
            if spec.canonical.eq_ignore_ascii_case(name) {
                return Ok(spec.tag);
            }
            for alias in spec.aliases {
                if alias.eq_ignore_ascii_case(name) {
                    return Ok(spec.tag);
                }
            }
        }
        Err(RuntimeError::argument(format!(
            "unknown encoding name - {name}"
        )))
    }
}
