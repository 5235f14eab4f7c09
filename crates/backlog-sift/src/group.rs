//! Grouping into an order-preserving multimap.
//!
//! `Query::group_by` buckets records by a selector's value. Keys iterate in
//! first-occurrence order over the input and each bucket keeps the input's
//! relative order, backed by an [`IndexMap`].

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Result, SiftError};
use crate::fields::Fields;
use crate::selector::Selector;
use crate::value::{Number, Timestamp, Value};

/// Owned, hashable group key.
///
/// Numeric keys normalize so that equal numbers share a bucket regardless
/// of representation: `1`, `1u64`, and `1.0` all become `Int(1)`. Floats
/// that are not exact integers keep their bit pattern, with every NaN
/// folded into one bucket. Record values cannot key a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Null sentinel key.
    Null,
    /// Boolean key.
    Bool(bool),
    /// Integer key (also holds integral floats and fitting unsigned).
    Int(i64),
    /// Unsigned key beyond `i64::MAX`.
    UInt(u64),
    /// Non-integral float key, by bit pattern.
    Float(u64),
    /// String key.
    Text(String),
    /// Timestamp key, as epoch milliseconds.
    Time(i64),
}

impl Key {
    /// Builds the bucket key for one resolved value.
    pub fn from_value(value: &Value<'_>) -> Result<Self> {
        match value {
            Value::Null => Ok(Key::Null),
            Value::Bool(b) => Ok(Key::Bool(*b)),
            Value::Number(n) => Ok(Key::from_number(*n)),
            Value::Time(t) => Ok(Key::Time(t.as_millis())),
            Value::Str(s) => Ok(Key::Text((*s).to_owned())),
            Value::Record(_) => Err(SiftError::BadGroupKey {
                kind: value.kind(),
            }),
        }
    }

    fn from_number(n: Number) -> Self {
        match n {
            Number::I64(i) => Key::Int(i),
            Number::U64(u) => {
                if u <= i64::MAX as u64 {
                    Key::Int(u as i64)
                } else {
                    Key::UInt(u)
                }
            }
            Number::F64(x) => {
                if x.is_nan() {
                    Key::Float(f64::NAN.to_bits())
                } else if x.trunc() == x && x >= i64::MIN as f64 && x < i64::MAX as f64 {
                    // Integral floats (including -0.0) fold into Int
                    Key::Int(x as i64)
                } else {
                    Key::Float(x.to_bits())
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => f.write_str("null"),
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(i) => write!(f, "{i}"),
            Key::UInt(u) => write!(f, "{u}"),
            Key::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            Key::Text(s) => f.write_str(s),
            Key::Time(ms) => write!(f, "{ms}"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i as i64)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<u64> for Key {
    fn from(u: u64) -> Self {
        Key::from_number(Number::U64(u))
    }
}

impl From<f64> for Key {
    fn from(x: f64) -> Self {
        Key::from_number(Number::F64(x))
    }
}

impl From<Timestamp> for Key {
    fn from(t: Timestamp) -> Self {
        Key::Time(t.as_millis())
    }
}

/// Result of `group_by`: buckets of borrowed records, keyed and ordered by
/// first occurrence.
#[derive(Debug)]
pub struct Groups<'a, T> {
    map: IndexMap<Key, Vec<&'a T>>,
}

impl<'a, T> Groups<'a, T> {
    pub(crate) fn from_records(records: &[&'a T], selector: &Selector<T>) -> Result<Self>
    where
        T: Fields,
    {
        let mut map: IndexMap<Key, Vec<&'a T>> = IndexMap::new();
        for &record in records {
            let key = Key::from_value(&selector.resolve(record)?)?;
            map.entry(key).or_default().push(record);
        }
        Ok(Groups { map })
    }

    /// Bucket for a key, if any record produced it.
    pub fn get(&self, key: impl Into<Key>) -> Option<&[&'a T]> {
        self.map.get(&key.into()).map(Vec::as_slice)
    }

    /// Keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.map.keys()
    }

    /// Key/bucket pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &[&'a T])> {
        self.map.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no records were grouped.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'a, T> IntoIterator for Groups<'a, T> {
    type Item = (Key, Vec<&'a T>);
    type IntoIter = indexmap::map::IntoIter<Key, Vec<&'a T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'g, 'a, T> IntoIterator for &'g Groups<'a, T> {
    type Item = (&'g Key, &'g Vec<&'a T>);
    type IntoIter = indexmap::map::Iter<'g, Key, Vec<&'a T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}
