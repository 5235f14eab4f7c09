//! Field access traits.
//!
//! [`Fields`] is how the engine reads named fields off the records it
//! queries. Structs implement it with a `match` over field names; mapping
//! types (`HashMap`, `BTreeMap`) get it for free when their values
//! implement [`AsValue`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::value::{Number, Timestamp, Value};

/// Named-field access for queryable records.
///
/// Returning `None` means the record has no such field; a query that walks
/// into it fails the whole materialization. Returning `Some(Value::Null)`
/// means the field exists but holds nothing, which is what
/// `is_set`/`is_not_set` distinguish. Collection-valued fields are not
/// addressable and should return `None`.
///
/// # Example
///
/// ```
/// use backlog_sift::{Fields, Value};
///
/// struct Issue {
///     title: String,
///     assignee: Option<String>,
/// }
///
/// impl Fields for Issue {
///     fn field(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "title" => Some(Value::Str(&self.title)),
///             "assignee" => Some(match &self.assignee {
///                 Some(a) => Value::Str(a),
///                 None => Value::Null,
///             }),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Fields {
    /// Returns the value of a named field, or `None` if the record has no
    /// such field.
    fn field(&self, name: &str) -> Option<Value<'_>>;
}

/// Conversion of a leaf type into a [`Value`], borrowed from `self`.
///
/// Implemented for the primitive scalars, strings, [`Timestamp`], and
/// `Option` of any of those (`None` becomes `Value::Null`). Implementing it
/// for your own type lets maps of that type act as records.
pub trait AsValue {
    /// The field value backed by `self`.
    fn as_value(&self) -> Value<'_>;
}

impl AsValue for bool {
    fn as_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl AsValue for &str {
    fn as_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl AsValue for Timestamp {
    fn as_value(&self) -> Value<'_> {
        Value::Time(*self)
    }
}

impl<V: AsValue> AsValue for Option<V> {
    fn as_value(&self) -> Value<'_> {
        match self {
            Some(v) => v.as_value(),
            None => Value::Null,
        }
    }
}

macro_rules! as_value_number {
    ($($ty:ty),*) => {
        $(impl AsValue for $ty {
            fn as_value(&self) -> Value<'_> {
                Value::Number(Number::from(*self))
            }
        })*
    };
}

as_value_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<V: AsValue, S: BuildHasher> Fields for HashMap<String, V, S> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(AsValue::as_value)
    }
}

impl<'k, V: AsValue, S: BuildHasher> Fields for HashMap<&'k str, V, S> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(AsValue::as_value)
    }
}

impl<V: AsValue> Fields for BTreeMap<String, V> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(AsValue::as_value)
    }
}

impl<'k, V: AsValue> Fields for BTreeMap<&'k str, V> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(AsValue::as_value)
    }
}

// Maps are records too, so nested maps resolve through dotted paths.
impl<V: AsValue, S: BuildHasher> AsValue for HashMap<String, V, S> {
    fn as_value(&self) -> Value<'_> {
        Value::Record(self)
    }
}

impl<'k, V: AsValue, S: BuildHasher> AsValue for HashMap<&'k str, V, S> {
    fn as_value(&self) -> Value<'_> {
        Value::Record(self)
    }
}

impl<V: AsValue> AsValue for BTreeMap<String, V> {
    fn as_value(&self) -> Value<'_> {
        Value::Record(self)
    }
}

impl<'k, V: AsValue> AsValue for BTreeMap<&'k str, V> {
    fn as_value(&self) -> Value<'_> {
        Value::Record(self)
    }
}
