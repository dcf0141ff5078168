use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A tri-state input field distinguishing a missing key from an explicit
/// null.
///
/// Update operations apply only the fields present in their input: a field
/// absent from the payload leaves the state untouched, while a field
/// explicitly set to null overwrites the state with null. Plain `Option`
/// cannot carry that distinction through serde, so inputs use `Patch`.
///
/// Fields of this type must be declared with
/// `#[serde(default, skip_serializing_if = "Patch::is_absent")]`: the
/// default covers the missing key, and the custom `Deserialize` below maps
/// JSON null to [`Patch::Null`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field was not present in the input.
    #[default]
    Absent,
    /// Field was explicitly null.
    Null,
    /// Field carried a value.
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// Collapse to an optional value; both `Absent` and `Null` become
    /// `None`. This is the add-operation reading, where an omitted field
    /// initializes to null.
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Absent | Patch::Null => None,
            Patch::Value(value) => Some(value),
        }
    }

    /// Apply the update-operation reading to a nullable slot: `Absent`
    /// leaves it untouched, `Null` clears it, `Value` overwrites it.
    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            Patch::Absent => {}
            Patch::Null => *slot = None,
            Patch::Value(value) => *slot = Some(value),
        }
    }

    /// Apply to a non-nullable slot, resolving an explicit null to the
    /// type's default value.
    pub fn apply_or_default(self, slot: &mut T)
    where
        T: Default,
    {
        match self {
            Patch::Absent => {}
            Patch::Null => *slot = T::default(),
            Patch::Value(value) => *slot = value,
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Value(value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Absent fields should be skipped at the struct level; if one
            // reaches here it degrades to null.
            Patch::Absent | Patch::Null => serializer.serialize_none(),
            Patch::Value(value) => serializer.serialize_some(value),
        }
    }
}
