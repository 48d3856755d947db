//! The attribute mapping produced by the parser.
//!
//! An [`Attributes`] maps field names to [`Value`]s. Every entry remembers the
//! span of the statement that produced it so later phases can point back at
//! the source text.

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::span::Span;

/// A field value: either a string or a boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Boolean(bool),
}

impl Value {
    /// The variant name used in diagnostics.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Boolean(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            Value::String(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl fmt::Display for Value {
    /// Writes the value in source syntax: strings quoted, booleans bare.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// The two kinds of [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::String => write!(f, "string"),
            ValueKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// A field held a value of the wrong kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}' must be a {expected}, found {found}")]
pub struct TypeMismatch {
    pub field: String,
    pub expected: ValueKind,
    pub found: ValueKind,
}

/// One parsed `field: value;` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    value: Value,
    span: Span,
}

impl Attribute {
    pub fn new(value: Value, span: Span) -> Self {
        Self { value, span }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Span of the whole statement, from the field name to the `;`.
    pub fn span(&self) -> Span {
        self.span
    }
}

/// Field name to value mapping with last-write-wins insertion.
///
/// Equality compares names and values only; spans and insertion order are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: IndexMap<String, Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any earlier value for the same name.
    ///
    /// Returns the replaced attribute, if any.
    pub fn insert(&mut self, name: impl Into<String>, attribute: Attribute) -> Option<Attribute> {
        self.entries.insert(name.into(), attribute)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).map(Attribute::value)
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.entries.get(name)
    }

    pub fn span(&self, name: &str) -> Option<Span> {
        self.entries.get(name).map(Attribute::span)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, attribute)| (name.as_str(), attribute.value()))
    }

    /// Look up a string field.
    ///
    /// Returns `Ok(None)` when the field is absent and an error when it
    /// holds a boolean.
    pub fn get_str(&self, name: &str) -> Result<Option<&str>, TypeMismatch> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(TypeMismatch {
                field: name.to_string(),
                expected: ValueKind::String,
                found: other.kind(),
            }),
        }
    }

    /// Look up a boolean field.
    ///
    /// Returns `Ok(None)` when the field is absent and an error when it
    /// holds a string.
    pub fn get_bool(&self, name: &str) -> Result<Option<bool>, TypeMismatch> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Boolean(b)) => Ok(Some(*b)),
            Some(other) => Err(TypeMismatch {
                field: name.to_string(),
                expected: ValueKind::Boolean,
                found: other.kind(),
            }),
        }
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for Attributes {}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<Value>,
{
    /// Builds a mapping without source positions; every span is empty.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, Attribute::new(value.into(), Span::default()));
        }
        attributes
    }
}

impl fmt::Display for Attributes {
    /// Writes the mapping back in source syntax, one statement per line.
    ///
    /// Strings are written verbatim; a string containing `"` cannot be read
    /// back because the language has no escapes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}
