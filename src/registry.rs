//! Spec registry: status-byte and type-name lookups over [`SPECS`].
//!
//! The process-wide registry is built once on first use and is read-only
//! afterwards, so it can be shared across threads without locking.
//!
//! # Example
//! ```
//! use midi_spec::{lookup, lookup_by_status, lookup_by_type, SpecKey};
//!
//! let spec = lookup_by_status(0x93)?;
//! assert_eq!(spec.type_name, "note_on");
//!
//! let spec = lookup_by_type("songpos")?;
//! assert_eq!(spec.status_byte, 0xF2);
//!
//! assert!(lookup_by_status(0xF4).is_err());
//! assert_eq!(lookup(SpecKey::from(0xF8))?.type_name, "clock");
//! # Ok::<(), midi_spec::Error>(())
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::spec::{Spec, SPECS};

/// Key into the combined lookup. Status bytes and type names never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecKey<'a> {
    Status(u8),
    Type(&'a str),
}

impl From<u8> for SpecKey<'_> {
    fn from(byte: u8) -> Self {
        Self::Status(byte)
    }
}

impl<'a> From<&'a str> for SpecKey<'a> {
    fn from(name: &'a str) -> Self {
        Self::Type(name)
    }
}

/// Frozen lookup table over a spec set.
#[derive(Debug)]
pub struct SpecRegistry {
    specs: &'static [Spec],
    by_status: HashMap<u8, &'static Spec>,
    by_type: HashMap<&'static str, &'static Spec>,
}

impl SpecRegistry {
    /// Index a spec set. Channel families get one entry per channel;
    /// everything else gets its literal status byte.
    pub fn new(specs: &'static [Spec]) -> Self {
        let mut by_status = HashMap::with_capacity(256);
        let mut by_type = HashMap::with_capacity(specs.len());

        for spec in specs {
            by_type.insert(spec.type_name, spec);
            for status in spec.status_bytes() {
                by_status.insert(status, spec);
            }
        }

        Self {
            specs,
            by_status,
            by_type,
        }
    }

    /// The process-wide registry over [`SPECS`].
    pub fn global() -> &'static SpecRegistry {
        static REGISTRY: OnceLock<SpecRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let registry = SpecRegistry::new(&SPECS);
            tracing::debug!(
                "Built MIDI spec registry: {} specs, {} status bytes",
                registry.len(),
                registry.by_status.len()
            );
            registry
        })
    }

    pub fn by_status(&self, status: u8) -> Result<&'static Spec> {
        self.by_status
            .get(&status)
            .copied()
            .ok_or(Error::UnrecognizedStatusByte(status))
    }

    pub fn by_type(&self, type_name: &str) -> Result<&'static Spec> {
        self.by_type
            .get(type_name)
            .copied()
            .ok_or_else(|| Error::UnknownMessageType(type_name.to_string()))
    }

    pub fn get(&self, key: SpecKey<'_>) -> Result<&'static Spec> {
        match key {
            SpecKey::Status(status) => self.by_status(status),
            SpecKey::Type(name) => self.by_type(name),
        }
    }

    #[inline]
    pub fn contains_status(&self, status: u8) -> bool {
        self.by_status.contains_key(&status)
    }

    #[inline]
    pub fn contains_type(&self, type_name: &str) -> bool {
        self.by_type.contains_key(type_name)
    }

    /// Specs in table order.
    pub fn specs(&self) -> &'static [Spec] {
        self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Populated status bytes, ascending.
    pub fn status_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self.by_status.keys().copied().collect();
        bytes.sort_unstable();
        bytes
    }

    /// Type names in table order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> {
        let specs = self.specs;
        specs.iter().map(|spec| spec.type_name)
    }
}

/// Spec for a status byte, including every channel of a channel family.
pub fn lookup_by_status(status: u8) -> Result<&'static Spec> {
    SpecRegistry::global().by_status(status)
}

pub fn lookup_by_type(type_name: &str) -> Result<&'static Spec> {
    SpecRegistry::global().by_type(type_name)
}

/// Combined lookup accepting either key kind.
pub fn lookup<'a>(key: impl Into<SpecKey<'a>>) -> Result<&'static Spec> {
    SpecRegistry::global().get(key.into())
}
