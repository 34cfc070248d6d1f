//! Forgiving deserializers for hand-authored documents.
//!
//! Network documents are written by people, not generated, so the model
//! accepts what a human is likely to type: numeric ids, empty strings,
//! a `ports:` key left dangling with no value. Every helper here maps a
//! value of the wrong kind to "absent" instead of failing the whole
//! document.

use std::fmt;

use serde::{Deserialize, Deserializer, de::IgnoredAny};

/// A YAML/JSON scalar accepted where text is expected.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Str(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Other(IgnoredAny),
}

impl Scalar {
    pub(crate) fn into_text(self) -> Option<String> {
        let text = match self {
            Scalar::Str(s) => s,
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::UInt(u) => u.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Other(_) => return None,
        };
        (!text.is_empty()).then_some(text)
    }
}

/// Either a well-formed `T` or something we skip.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

impl<T> Entry<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Entry::Valid(value) => Some(value),
            Entry::Invalid(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum List<T> {
    Items(Vec<Entry<T>>),
    Other(IgnoredAny),
}

/// Deserializes an optional scalar as text.
///
/// Strings, booleans and numbers are kept in their textual form. Empty
/// strings, `null`, mappings and sequences all become `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let scalar = Option::<Scalar>::deserialize(deserializer)?;
    Ok(scalar.and_then(Scalar::into_text))
}

/// Deserializes a sequence of scalars as text, dropping entries that are
/// not scalars or are empty.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = Option::<List<Scalar>>::deserialize(deserializer)?;
    Ok(match list {
        Some(List::Items(items)) => items
            .into_iter()
            .filter_map(Entry::into_option)
            .filter_map(Scalar::into_text)
            .collect(),
        Some(List::Other(_)) | None => Vec::new(),
    })
}

/// Deserializes a sequence of `T`, dropping entries that do not have the
/// expected shape. A non-sequence value yields an empty list.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let list = Option::<List<T>>::deserialize(deserializer)?;
    Ok(match list {
        Some(List::Items(items)) => items.into_iter().filter_map(Entry::into_option).collect(),
        Some(List::Other(_)) | None => Vec::new(),
    })
}

/// Deserializes an optional `T`, mapping a value of the wrong kind to `None`.
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entry = Option::<Entry<T>>::deserialize(deserializer)?;
    Ok(entry.and_then(Entry::into_option))
}

/// Deserializes an optional number, accepting numeric strings such as `"42"`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let scalar = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match scalar {
        Some(Scalar::Int(i)) => Some(i as f64),
        Some(Scalar::UInt(u)) => Some(u as f64),
        Some(Scalar::Float(f)) => Some(f),
        Some(Scalar::Str(s)) => s.trim().parse().ok(),
        Some(Scalar::Bool(_)) | Some(Scalar::Other(_)) | None => None,
    })
}

/// Formats a number the way a person wrote it: `42` rather than `42.0`.
pub struct DisplayNumber(pub f64);

impl fmt::Display for DisplayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
