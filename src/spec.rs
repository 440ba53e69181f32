//! MIDI message shapes.
//!
//! Every MIDI 1.0 message kind is described by a [`Spec`]: its status byte,
//! symbolic type name, ordered value fields, and wire length. The full set
//! lives in [`SPECS`] and is the single source the registry indexes.
//!
//! # Example
//! ```
//! use midi_spec::{MessageLength, SPECS};
//!
//! let note_on = SPECS.iter().find(|s| s.type_name == "note_on").unwrap();
//! assert_eq!(note_on.status_byte, 0x90);
//! assert_eq!(note_on.value_names, &["channel", "note", "velocity"]);
//! assert_eq!(note_on.length, MessageLength::Fixed(3));
//! ```

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use MessageLength::{Fixed, Unbounded};

/// Status bytes of channel messages (low nibble = channel).
pub const CHANNEL_MESSAGES: RangeInclusive<u8> = 0x80..=0xEF;

// Both system ranges include undefined bytes (0xF4, 0xF5, 0xF9, 0xFD).
pub const COMMON_MESSAGES: RangeInclusive<u8> = 0xF0..=0xF7;
pub const REALTIME_MESSAGES: RangeInclusive<u8> = 0xF8..=0xFF;

pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;

/// Number of channels addressable by a channel message.
pub const CHANNEL_COUNT: u8 = 16;

/// Pitchwheel is a 14-bit signed integer.
pub const MIN_PITCHWHEEL: i16 = -8192;
pub const MAX_PITCHWHEEL: i16 = 8191;

/// Song position is a 14-bit unsigned integer.
pub const MIN_SONGPOS: u16 = 0;
pub const MAX_SONGPOS: u16 = 16383;

/// Types that a parser lets through in the middle of a sysex body.
pub const REALTIME_TYPES: [&str; 5] = ["tune_request", "clock", "start", "continue", "stop"];

/// Field names present on every message regardless of shape.
pub const COMMON_ATTRIBUTES: [&str; 2] = ["type", "time"];

/// Byte count of a message on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageLength {
    Fixed(u8),
    /// Sysex: runs until [`SYSEX_END`].
    Unbounded,
}

impl MessageLength {
    #[inline]
    pub fn fixed(&self) -> Option<u8> {
        match self {
            Self::Fixed(n) => Some(*n),
            Self::Unbounded => None,
        }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

/// Immutable description of one message shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Spec {
    /// Literal status byte, or the channel-0 byte of a channel family.
    pub status_byte: u8,
    /// Unique symbolic name (`"note_on"`, `"sysex"`, ...).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_name: &'static str,
    /// Shape-specific fields in canonical order.
    pub value_names: &'static [&'static str],
    pub length: MessageLength,
}

impl Spec {
    pub const fn new(
        status_byte: u8,
        type_name: &'static str,
        value_names: &'static [&'static str],
        length: MessageLength,
    ) -> Self {
        Self {
            status_byte,
            type_name,
            value_names,
            length,
        }
    }

    /// True for the seven channel families (0x80..=0xEF).
    #[inline]
    pub fn is_channel(&self) -> bool {
        CHANNEL_MESSAGES.contains(&self.status_byte)
    }

    /// `value_names` plus `type` and `time`.
    pub fn attribute_names(&self) -> BTreeSet<&'static str> {
        self.value_names
            .iter()
            .chain(COMMON_ATTRIBUTES.iter())
            .copied()
            .collect()
    }

    #[inline]
    pub fn has_attribute(&self, name: &str) -> bool {
        COMMON_ATTRIBUTES.contains(&name) || self.value_names.contains(&name)
    }

    /// Every status byte this spec occupies: 16 for a channel family, 1 otherwise.
    pub fn status_bytes(&self) -> impl Iterator<Item = u8> {
        let base = self.status_byte;
        let count = if self.is_channel() { CHANNEL_COUNT } else { 1 };
        (0..count).map(move |channel| base | channel)
    }
}

/// Range a status byte falls in. Says nothing about whether a spec exists
/// for it; reserved bytes classify like their neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Channel,
    Common,
    RealTime,
}

impl StatusCategory {
    /// `None` for data bytes (< 0x80).
    pub fn of(byte: u8) -> Option<Self> {
        if CHANNEL_MESSAGES.contains(&byte) {
            Some(Self::Channel)
        } else if COMMON_MESSAGES.contains(&byte) {
            Some(Self::Common)
        } else if REALTIME_MESSAGES.contains(&byte) {
            Some(Self::RealTime)
        } else {
            None
        }
    }
}

/// Channel encoded in a channel-message status byte.
#[inline]
pub fn channel_of(status: u8) -> Option<u8> {
    CHANNEL_MESSAGES.contains(&status).then_some(status & 0x0F)
}

#[inline]
pub fn is_realtime_type(type_name: &str) -> bool {
    REALTIME_TYPES.contains(&type_name)
}

/// Every defined MIDI 1.0 message shape.
pub static SPECS: [Spec; 18] = [
    // Channel messages
    Spec::new(0x80, "note_off", &["channel", "note", "velocity"], Fixed(3)),
    Spec::new(0x90, "note_on", &["channel", "note", "velocity"], Fixed(3)),
    Spec::new(0xA0, "polytouch", &["channel", "note", "value"], Fixed(3)),
    Spec::new(0xB0, "control_change", &["channel", "control", "value"], Fixed(3)),
    Spec::new(0xC0, "program_change", &["channel", "program"], Fixed(2)),
    Spec::new(0xD0, "aftertouch", &["channel", "value"], Fixed(2)),
    Spec::new(0xE0, "pitchwheel", &["channel", "pitch"], Fixed(3)),
    // System common messages. 0xF4 and 0xF5 are undefined.
    Spec::new(0xF0, "sysex", &["data"], Unbounded),
    Spec::new(0xF1, "quarter_frame", &["frame_type", "frame_value"], Fixed(2)),
    Spec::new(0xF2, "songpos", &["pos"], Fixed(3)),
    Spec::new(0xF3, "song_select", &["song"], Fixed(2)),
    Spec::new(0xF6, "tune_request", &[], Fixed(1)),
    // System real-time messages. 0xF9 and 0xFD are undefined.
    Spec::new(0xF8, "clock", &[], Fixed(1)),
    Spec::new(0xFA, "start", &[], Fixed(1)),
    Spec::new(0xFB, "continue", &[], Fixed(1)),
    Spec::new(0xFC, "stop", &[], Fixed(1)),
    Spec::new(0xFE, "active_sensing", &[], Fixed(1)),
    Spec::new(0xFF, "reset", &[], Fixed(1)),
];
