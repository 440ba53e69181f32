//! Message construction with defaults and overrides.
//!
//! [`make_message`] looks up a spec by type name, fills `type`, `time` and
//! every value field from the default table, then applies overrides with
//! last-write-wins semantics. Overrides are not checked against the spec:
//! they may replace `type`/`time` and may add keys the spec does not
//! declare. Validate the record before encoding it.
//!
//! # Example
//! ```
//! use midi_spec::{make_message, overrides, FieldValue};
//!
//! let msg = make_message("note_on", overrides! { "note" => 60 })?;
//! assert_eq!(msg.get("note"), Some(&FieldValue::Int(60)));
//! assert_eq!(msg.get("velocity"), Some(&FieldValue::Int(64)));
//! assert_eq!(msg.keys().collect::<Vec<_>>(), ["type", "time", "channel", "note", "velocity"]);
//! # Ok::<(), midi_spec::Error>(())
//! ```

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::error::Result;
use crate::registry::SpecRegistry;
use crate::value::FieldValue;

/// Build an [`Overrides`] list from `key => value` pairs.
///
/// # Example
/// ```
/// use midi_spec::overrides;
///
/// let o = overrides! {
///     "channel" => 9,
///     "note" => 36,
/// };
/// assert_eq!(o.len(), 2);
/// ```
#[macro_export]
macro_rules! overrides {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut list = $crate::Overrides::new();
        $(
            list.push(($key.into(), $value.into()));
        )*
        list
    }};
}

pub type FieldName = Cow<'static, str>;

/// Ordered field overrides. Later entries win over earlier ones.
pub type Overrides = Vec<(FieldName, FieldValue)>;

pub const DEFAULT_TIME: FieldValue = FieldValue::Int(0);

/// Default for every value name used by any spec, plus `time`.
pub static DEFAULT_VALUES: [(&str, FieldValue); 13] = [
    ("channel", FieldValue::Int(0)),
    ("control", FieldValue::Int(0)),
    ("data", FieldValue::Bytes(Vec::new())),
    ("frame_type", FieldValue::Int(0)),
    ("frame_value", FieldValue::Int(0)),
    ("note", FieldValue::Int(0)),
    ("pitch", FieldValue::Int(0)),
    ("pos", FieldValue::Int(0)),
    ("program", FieldValue::Int(0)),
    ("song", FieldValue::Int(0)),
    ("value", FieldValue::Int(0)),
    ("velocity", FieldValue::Int(64)),
    ("time", DEFAULT_TIME),
];

pub fn default_value(name: &str) -> Option<FieldValue> {
    DEFAULT_VALUES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.clone())
}

/// Field-name to value mapping produced by [`make_message`].
///
/// Fields keep insertion order; setting an existing key replaces its value
/// in place. Equality compares key/value pairs regardless of order.
#[derive(Debug, Clone, Default)]
pub struct MessageRecord {
    fields: SmallVec<[(FieldName, FieldValue); 6]>,
}

impl MessageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Insert or replace. Returns the previous value.
    pub fn set(
        &mut self,
        name: impl Into<FieldName>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        let index = self.fields.iter().position(|(key, _)| key == name)?;
        Some(self.fields.remove(index).1)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_ref(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_ref())
    }

    /// The `type` field, if present and a string.
    pub fn type_name(&self) -> Option<&str> {
        self.get("type").and_then(FieldValue::as_str)
    }

    /// The `time` field, if present and numeric.
    pub fn time(&self) -> Option<f64> {
        self.get("time").and_then(FieldValue::as_f64)
    }

    pub fn into_fields(self) -> Vec<(FieldName, FieldValue)> {
        self.fields.into_vec()
    }
}

impl PartialEq for MessageRecord {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V> FromIterator<(K, V)> for MessageRecord
where
    K: Into<FieldName>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        record.extend(iter);
        record
    }
}

impl<K, V> Extend<(K, V)> for MessageRecord
where
    K: Into<FieldName>,
    V: Into<FieldValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Build a message record for `type_name`.
///
/// Fails with [`Error::UnknownMessageType`](crate::Error::UnknownMessageType)
/// before touching the overrides if the type is not in the spec set.
pub fn make_message<I, K, V>(type_name: &str, overrides: I) -> Result<MessageRecord>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<FieldName>,
    V: Into<FieldValue>,
{
    let spec = SpecRegistry::global().by_type(type_name).map_err(|e| {
        tracing::debug!("Cannot build message: {}", e);
        e
    })?;

    let mut record = MessageRecord::new();
    record.set("type", spec.type_name);
    record.set("time", DEFAULT_TIME);

    for &name in spec.value_names {
        // Every value name in SPECS has an entry in DEFAULT_VALUES.
        let value = default_value(name).unwrap_or(FieldValue::Int(0));
        record.set(name, value);
    }

    record.extend(overrides);

    tracing::trace!("Built {} message with {} fields", type_name, record.len());
    Ok(record)
}

/// [`make_message`] with no overrides.
pub fn make_default_message(type_name: &str) -> Result<MessageRecord> {
    make_message(type_name, Overrides::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::spec::SPECS;

    #[test]
    fn test_every_value_name_has_default() {
        for spec in SPECS.iter() {
            for name in spec.value_names {
                assert!(
                    default_value(name).is_some(),
                    "{} has no default for {}",
                    spec.type_name,
                    name
                );
            }
        }
        assert_eq!(default_value("time"), Some(FieldValue::Int(0)));
        assert_eq!(default_value("bogus"), None);
    }

    #[test]
    fn test_note_on_defaults() {
        let msg = make_default_message("note_on").unwrap();
        let expected: MessageRecord = [
            ("type", FieldValue::from("note_on")),
            ("time", FieldValue::Int(0)),
            ("channel", FieldValue::Int(0)),
            ("note", FieldValue::Int(0)),
            ("velocity", FieldValue::Int(64)),
        ]
        .into_iter()
        .collect();
        assert_eq!(msg, expected);
        assert_eq!(
            msg.keys().collect::<Vec<_>>(),
            ["type", "time", "channel", "note", "velocity"]
        );
    }

    #[test]
    fn test_sysex_data_override() {
        let msg = make_message("sysex", overrides! { "data" => [1u8, 2, 3] }).unwrap();
        assert_eq!(msg.len(), 3);
        assert_eq!(msg.type_name(), Some("sysex"));
        assert_eq!(msg.time(), Some(0.0));
        assert_eq!(
            msg.get("data").and_then(FieldValue::as_bytes),
            Some(&[1u8, 2, 3][..])
        );
    }

    #[test]
    fn test_sysex_default_data_empty() {
        let msg = make_default_message("sysex").unwrap();
        assert_eq!(msg.get("data"), Some(&FieldValue::Bytes(Vec::new())));
    }

    #[test]
    fn test_unknown_type_fails() {
        let result = make_message("no_such_type", overrides! { "note" => 1 });
        assert_eq!(
            result,
            Err(Error::UnknownMessageType("no_such_type".to_string()))
        );
    }

    #[test]
    fn test_override_adds_extra_key() {
        let msg = make_message("clock", overrides! { "extra" => 1 }).unwrap();
        assert_eq!(msg.get("extra"), Some(&FieldValue::Int(1)));
        assert_eq!(msg.keys().collect::<Vec<_>>(), ["type", "time", "extra"]);
    }

    #[test]
    fn test_override_type_and_time() {
        let msg = make_message(
            "note_off",
            overrides! { "type" => "note_on", "time" => 0.25 },
        )
        .unwrap();
        assert_eq!(msg.type_name(), Some("note_on"));
        assert_eq!(msg.time(), Some(0.25));
        // Overridden keys keep their position
        assert_eq!(msg.keys().next(), Some("type"));
    }

    #[test]
    fn test_last_override_wins() {
        let msg = make_message(
            "control_change",
            overrides! { "value" => 10, "control" => 7, "value" => 127 },
        )
        .unwrap();
        assert_eq!(msg.get("value"), Some(&FieldValue::Int(127)));
        assert_eq!(msg.get("control"), Some(&FieldValue::Int(7)));
        assert_eq!(msg.len(), 5);
    }

    #[test]
    fn test_no_range_checking() {
        let msg = make_message("pitchwheel", overrides! { "pitch" => 100_000, "channel" => 99 })
            .unwrap();
        assert_eq!(msg.get("pitch"), Some(&FieldValue::Int(100_000)));
        assert_eq!(msg.get("channel"), Some(&FieldValue::Int(99)));
    }

    #[test]
    fn test_record_equality_ignores_order() {
        let a: MessageRecord = [("a", 1), ("b", 2)].into_iter().collect();
        let b: MessageRecord = [("b", 2), ("a", 1)].into_iter().collect();
        let c: MessageRecord = [("a", 1)].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(c, a);
    }

    #[test]
    fn test_record_set_and_remove() {
        let mut msg = make_default_message("program_change").unwrap();
        assert_eq!(msg.set("program", 42), Some(FieldValue::Int(0)));
        assert_eq!(msg.set("bank", 1), None);
        assert!(msg.contains("bank"));
        assert_eq!(msg.remove("bank"), Some(FieldValue::Int(1)));
        assert_eq!(msg.remove("bank"), None);
        assert_eq!(msg.len(), 4);
    }

    #[test]
    fn test_hashmap_overrides() {
        let mut map = std::collections::HashMap::new();
        map.insert("song".to_string(), FieldValue::Int(3));
        let msg = make_message("song_select", map).unwrap();
        assert_eq!(msg.get("song"), Some(&FieldValue::Int(3)));
    }
}
