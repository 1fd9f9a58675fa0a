//! Presence-tracking field wrapper for partial updates.

use serde::{Deserialize, Deserializer};

/// One field of a partial update.
///
/// Use with `#[serde(default)]`: a key missing from the payload stays
/// `Absent`, an explicit `null` becomes `Null`, anything else `Value`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_present(&self) -> bool {
        !matches!(self, Patch::Absent)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Apply to a nullable field: `Null` clears it.
    pub fn apply_nullable(self, slot: &mut Option<T>) {
        match self {
            Patch::Absent => {}
            Patch::Null => *slot = None,
            Patch::Value(v) => *slot = Some(v),
        }
    }

    /// Apply to a required field. `Null` must be rejected before this point.
    pub fn apply_required(self, slot: &mut T) {
        if let Patch::Value(v) = self {
            *slot = v;
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}
