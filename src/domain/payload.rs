//! Field decoders for creation payloads.
//!
//! Clients send loosely typed JSON. A falsy value (`null`, `false`, `0`,
//! `""`, `[]`, `{}`) in a text field reads as absent, so it ends up as a
//! missing-field rejection rather than a decode failure. A reference id that
//! cannot name a stored record reads as absent too, and later fails the
//! reference check.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserializer;

/// Decode a text field. Truthy numbers and `true` keep their JSON spelling.
///
/// # Errors
/// Non-empty arrays and objects are rejected.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TextVisitor)
}

/// Decode a reference id. Anything that is not an integer in the id range,
/// or a string spelling one, decodes as `None`.
///
/// # Errors
/// Only malformed input from the underlying deserializer.
pub fn reference<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<i32>,
{
    deserializer.deserialize_any(ReferenceVisitor(PhantomData))
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(v.then(|| "true".to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok((v != 0).then(|| v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok((v != 0).then(|| v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok((v != 0.0).then(|| v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        match seq.next_element::<IgnoredAny>()? {
            None => Ok(None),
            Some(_) => Err(de::Error::invalid_type(de::Unexpected::Seq, &self)),
        }
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        match map.next_entry::<IgnoredAny, IgnoredAny>()? {
            None => Ok(None),
            Some(_) => Err(de::Error::invalid_type(de::Unexpected::Map, &self)),
        }
    }
}

struct ReferenceVisitor<T>(PhantomData<T>);

impl<'de, T: From<i32>> Visitor<'de> for ReferenceVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(i32::try_from(v).ok().map(T::from))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(i32::try_from(v).ok().map(T::from))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        let whole = v.fract() == 0.0 && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX);
        #[allow(clippy::cast_possible_truncation)]
        let id = whole.then(|| v as i32);
        Ok(id.map(T::from))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.parse::<i32>().ok().map(T::from))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::domain::id::CourseId;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Fields {
        #[serde(deserialize_with = "super::text")]
        name: Option<String>,
        #[serde(deserialize_with = "super::reference")]
        course_id: Option<CourseId>,
    }

    fn decode(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn falsy_text_reads_as_absent() {
        for value in ["null", "false", "0", "0.0", "\"\"", "[]", "{}"] {
            let fields = decode(&format!(r#"{{"name": {value}}}"#));
            assert_eq!(fields.name.filter(|s| !s.is_empty()), None, "value {value}");
        }
    }

    #[test]
    fn truthy_scalars_keep_their_spelling() {
        assert_eq!(decode(r#"{"name": "Ada"}"#).name.as_deref(), Some("Ada"));
        assert_eq!(decode(r#"{"name": 42}"#).name.as_deref(), Some("42"));
        assert_eq!(decode(r#"{"name": true}"#).name.as_deref(), Some("true"));
    }

    #[test]
    fn non_empty_containers_are_not_text() {
        assert!(serde_json::from_str::<Fields>(r#"{"name": [1]}"#).is_err());
        assert!(serde_json::from_str::<Fields>(r#"{"name": {"a": 1}}"#).is_err());
    }

    #[test]
    fn integer_references_decode() {
        assert_eq!(decode(r#"{"course_id": 7}"#).course_id, Some(CourseId::new(7)));
        assert_eq!(decode(r#"{"course_id": "7"}"#).course_id, Some(CourseId::new(7)));
        assert_eq!(decode(r#"{"course_id": 7.0}"#).course_id, Some(CourseId::new(7)));
    }

    #[test]
    fn unusable_references_read_as_absent() {
        for value in ["\"abc\"", "1.5", "99999999999", "-99999999999", "true", "[1]", "{}"] {
            let fields = decode(&format!(r#"{{"course_id": {value}}}"#));
            assert_eq!(fields.course_id, None, "value {value}");
        }
    }
}
