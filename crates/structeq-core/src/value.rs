//! Structural value model
//!
//! Every comparable type is lowered into a [`Value`] tree before the
//! comparator walks it. Records keep declaration order so diagnostics come
//! out in the same order the fields were declared; mappings are keyed and
//! sorted so equality never depends on insertion order.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;

/// A structured value as seen by the comparator
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Timestamp(DateTime<Utc>),
    Duration(Duration),
    /// Ordered, length-sensitive list of values
    Sequence(Vec<Value>),
    /// Unordered string-keyed mapping
    Mapping(BTreeMap<String, Value>),
    /// Named fields in declaration order
    Record(IndexMap<String, Value>),
}

/// The kind of a [`Value`], used to report shape mismatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Timestamp,
    Duration,
    Sequence,
    Mapping,
    Record,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Duration => "duration",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
            ValueKind::Record => "record",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Start building a record value
    pub fn record() -> RecordBuilder {
        RecordBuilder::default()
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Duration(_) => ValueKind::Duration,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
            Value::Record(_) => ValueKind::Record,
        }
    }

    /// Look up a record field or mapping entry by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.get(name),
            Value::Mapping(entries) => entries.get(name),
            _ => None,
        }
    }

    /// Keep only the named fields of a record
    ///
    /// This is how two differently shaped records are compared on the
    /// fields they share: the caller names the overlap and projects both
    /// sides. Names the record does not have are skipped, so the projected
    /// sides disagree on them and the comparator reports them as missing.
    /// Non-record values are returned unchanged.
    pub fn project(&self, names: &[&str]) -> Value {
        match self {
            Value::Record(fields) => Value::Record(
                names
                    .iter()
                    .filter_map(|name| {
                        fields
                            .get(*name)
                            .map(|value| ((*name).to_string(), value.clone()))
                    })
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    /// Primitive equality: exact, no tolerance
    ///
    /// Floats compare with IEEE `==`: `0.0` equals `-0.0` and NaN equals
    /// nothing. Containers always return `false` here; they are walked by the
    /// comparator instead.
    pub(crate) fn primitive_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Duration(a), Value::Duration(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::compare::first_difference_values(self, other).is_none()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Timestamp(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::Nanos, true)),
            Value::Duration(d) => write!(f, "{:?}", d),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                f.write_str("}")
            }
            Value::Record(fields) => {
                f.write_str("{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Builder for [`Value::Record`]
#[derive(Debug, Default)]
pub struct RecordBuilder {
    fields: IndexMap<String, Value>,
}

impl RecordBuilder {
    /// Add a named field
    pub fn field<T: Structural + ?Sized>(mut self, name: &str, value: &T) -> Self {
        self.fields.insert(name.to_string(), value.to_value());
        self
    }

    /// Promote every field of an embedded record into this one
    ///
    /// A field that is already present is overwritten, so embed first and
    /// add the container's own fields afterwards.
    pub fn embed<T: Structural + ?Sized>(mut self, embedded: &T) -> Self {
        match embedded.to_value() {
            Value::Record(fields) => self.fields.extend(fields),
            other => {
                tracing::warn!(kind = %other.kind(), "embedded value is not a record, skipping");
            }
        }
        self
    }

    pub fn build(self) -> Value {
        Value::Record(self.fields)
    }
}

/// Conversion of a typed value into a [`Value`] tree
pub trait Structural {
    fn to_value(&self) -> Value;
}

impl Structural for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: Structural + ?Sized> Structural for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl Structural for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! impl_structural_int {
    ($($ty:ty),*) => {
        $(
            impl Structural for $ty {
                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

impl_structural_int!(i8, i16, i32, i64, u8, u16, u32);

impl Structural for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl Structural for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl Structural for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Structural for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Structural for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl Structural for Duration {
    fn to_value(&self) -> Value {
        Value::Duration(*self)
    }
}

impl<T: Structural> Structural for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: Structural> Structural for [T] {
    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(Structural::to_value).collect())
    }
}

impl<T: Structural> Structural for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: Structural, S: BuildHasher> Structural for HashMap<String, T, S> {
    fn to_value(&self) -> Value {
        Value::Mapping(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}

impl<T: Structural> Structural for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Mapping(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}
