//! The [`Field`] wrapper and its JSON codec hooks.

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::FieldError;

/// A value paired with a flag recording whether its key was present in the
/// JSON object it was decoded from.
///
/// `valid` is true only after the value was successfully decoded from a key
/// that existed in the input. A fresh field holds `T`'s default value with
/// `valid` false, which is also the state an absent key leaves behind.
///
/// Encoding always emits `value` and never consults `valid`; an absent field
/// serializes as `T`'s default, not as an omission. Callers that want
/// merge-patch output omit unset keys at the struct level:
///
/// ```
/// use json_partial::Field;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct UserPatch {
///     #[serde(skip_serializing_if = "Field::is_absent")]
///     name: Field<String>,
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field<T> {
    /// The decoded payload; `T`'s default while `valid` is false.
    pub value: T,
    /// Whether the key was present and its value decoded successfully.
    pub valid: bool,
}

impl<T: Default> Field<T> {
    /// A field whose key was not present. Holds `T`'s default value.
    pub fn absent() -> Self {
        Field {
            value: T::default(),
            valid: false,
        }
    }
}

impl<T> Field<T> {
    /// A field holding an explicitly supplied value.
    pub fn present(value: T) -> Self {
        Field { value, valid: true }
    }

    /// True when the key was present in the decoded input.
    pub fn is_present(&self) -> bool {
        self.valid
    }

    /// True when the key was absent. Suitable as a serde
    /// `skip_serializing_if` predicate for merge-patch style output.
    pub fn is_absent(&self) -> bool {
        !self.valid
    }

    /// The value, if the key was present.
    pub fn get(&self) -> Option<&T> {
        if self.valid {
            Some(&self.value)
        } else {
            None
        }
    }

    /// Converts to `Some(value)` for a present field, `None` for an absent one.
    pub fn into_option(self) -> Option<T> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }
}

impl<T: Default> Default for Field<T> {
    fn default() -> Self {
        Field::absent()
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::present(value)
    }
}

impl<T: Default> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::present(value),
            None => Field::absent(),
        }
    }
}

impl<T> From<Field<T>> for Option<T> {
    fn from(field: Field<T>) -> Self {
        field.into_option()
    }
}

// ── Byte-level codec operations ───────────────────────────────────────────

impl<T: Serialize> Field<T> {
    /// Serializes the wrapped value to JSON bytes, ignoring `valid`.
    pub fn encode(&self) -> Result<Vec<u8>, FieldError> {
        serde_json::to_vec(&self.value).map_err(FieldError::Encode)
    }
}

impl<T: DeserializeOwned> Field<T> {
    /// Decodes one JSON value into this field, marking it present on success.
    ///
    /// Must be called only for a key that exists in the object being decoded;
    /// an absent key leaves the field untouched, with no call at all. On a
    /// decode error both `value` and `valid` keep their previous state.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<(), FieldError> {
        let value = serde_json::from_slice(bytes).map_err(FieldError::Decode)?;
        self.value = value;
        self.valid = true;
        Ok(())
    }
}

// ── serde hooks ───────────────────────────────────────────────────────────

impl<T> Serialize for Field<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Field::present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_field_is_absent_with_default_value() {
        let field: Field<i64> = Field::default();
        assert!(!field.valid);
        assert_eq!(field.value, 0);
    }

    #[test]
    fn decode_marks_present() {
        let mut field: Field<String> = Field::absent();
        field.decode(br#""Ann""#).unwrap();
        assert!(field.valid);
        assert_eq!(field.value, "Ann");
    }

    #[test]
    fn decode_of_zero_value_is_present() {
        let mut field: Field<i64> = Field::absent();
        field.decode(b"0").unwrap();
        assert!(field.valid);
        assert_eq!(field.value, 0);
    }

    #[test]
    fn failed_decode_leaves_absent_field_untouched() {
        let mut field: Field<i64> = Field::absent();
        let err = field.decode(br#""oops""#).unwrap_err();
        assert!(matches!(err, FieldError::Decode(_)));
        assert!(!field.valid);
        assert_eq!(field.value, 0);
    }

    #[test]
    fn failed_decode_keeps_previous_value() {
        let mut field = Field::present(7i64);
        field.decode(b"not json").unwrap_err();
        assert!(field.valid);
        assert_eq!(field.value, 7);
    }

    #[test]
    fn decode_is_idempotent() {
        let mut field: Field<i64> = Field::absent();
        field.decode(b"42").unwrap();
        field.decode(b"42").unwrap();
        assert!(field.valid);
        assert_eq!(field.value, 42);
    }

    #[test]
    fn encode_ignores_valid() {
        let absent: Field<i64> = Field::absent();
        let present = Field::present(0i64);
        assert_eq!(absent.encode().unwrap(), present.encode().unwrap());
        assert_eq!(
            absent.encode().unwrap(),
            serde_json::to_vec(&0i64).unwrap()
        );
    }

    #[test]
    fn encode_then_decode_roundtrips() {
        let src = Field::present(vec![1, 2, 3]);
        let mut dst: Field<Vec<i32>> = Field::absent();
        dst.decode(&src.encode().unwrap()).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn option_conversions() {
        let from_some: Field<i32> = Some(5).into();
        assert_eq!(from_some, Field::present(5));
        let from_none: Field<i32> = None.into();
        assert_eq!(from_none, Field::absent());
        assert_eq!(Field::present(5).into_option(), Some(5));
        assert_eq!(Field::<i32>::absent().into_option(), None);
        assert_eq!(Field::present(5).get(), Some(&5));
        assert_eq!(Field::<i32>::absent().get(), None);
    }

    #[test]
    fn presence_predicates() {
        assert!(Field::present(1).is_present());
        assert!(!Field::present(1).is_absent());
        assert!(Field::<i32>::absent().is_absent());
        assert!(!Field::<i32>::absent().is_present());
    }
}
