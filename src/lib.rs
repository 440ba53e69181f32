//! MIDI message spec registry.
//!
//! Canonical table of MIDI 1.0 message shapes, lookups by status byte and
//! type name, and a factory that builds defaulted message records.
//!
//! # Features
//!
//! - **Spec table**: status byte, type name, value fields, wire length
//! - **Lookups**: by status byte (all 16 channels of a channel family) or by type name
//! - **Message factory**: defaults plus unchecked, last-write-wins overrides
//! - **Serde**: record (de)serialization (feature: `serde`, on by default)
//!
//! Byte-stream parsing, encoding, port I/O and range validation live
//! elsewhere; they consume the lookups and constants exported here.
//!
//! # Example
//!
//! ```
//! use midi_spec::{lookup_by_status, make_message, overrides, FieldValue, MessageLength};
//!
//! // Decoder side: how long is the message behind this status byte?
//! let spec = lookup_by_status(0xC5)?;
//! assert_eq!(spec.type_name, "program_change");
//! assert_eq!(spec.length, MessageLength::Fixed(2));
//!
//! // Construction side: defaults with overrides on top
//! let msg = make_message("note_on", overrides! { "channel" => 9, "note" => 36 })?;
//! assert_eq!(msg.get("velocity"), Some(&FieldValue::Int(64)));
//! # Ok::<(), midi_spec::Error>(())
//! ```

// Error types
pub mod error;
pub use error::{Error, Result};

pub mod spec;
pub use spec::{
    channel_of, is_realtime_type, MessageLength, Spec, StatusCategory, CHANNEL_COUNT,
    CHANNEL_MESSAGES, COMMON_ATTRIBUTES, COMMON_MESSAGES, MAX_PITCHWHEEL, MAX_SONGPOS,
    MIN_PITCHWHEEL, MIN_SONGPOS, REALTIME_MESSAGES, REALTIME_TYPES, SPECS, SYSEX_END,
    SYSEX_START,
};

pub mod registry;
pub use registry::{lookup, lookup_by_status, lookup_by_type, SpecKey, SpecRegistry};

mod value;
pub use value::FieldValue;

pub mod message;
pub use message::{
    default_value, make_default_message, make_message, FieldName, MessageRecord, Overrides,
    DEFAULT_TIME, DEFAULT_VALUES,
};

#[cfg(feature = "serde")]
pub(crate) mod serde_support;
