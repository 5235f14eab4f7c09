//! Runtime value types for field comparison.
//!
//! [`Value`] is the runtime value of a field extracted from a record. It is
//! borrowed from the source record and covers the kinds the engine can test:
//! strings, numbers, timestamps, booleans, the null sentinel, and nested
//! records for dotted-path traversal.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, SiftError};
use crate::fields::Fields;

/// Runtime value of one field, borrowed from the source record.
///
/// Field access returns this type; predicates and sort keys consume it.
/// `Null` is the "present but absent" sentinel that `is_set`/`is_not_set`
/// test for. `Record` carries a nested record so paths like
/// `"workspace.name"` can keep walking.
///
/// # Example
///
/// ```
/// use backlog_sift::{Fields, Number, Value};
///
/// struct Tag {
///     name: String,
///     uses: u64,
/// }
///
/// impl Fields for Tag {
///     fn field(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "name" => Some(Value::Str(&self.name)),
///             "uses" => Some(Value::Number(Number::U64(self.uses))),
///             _ => None,
///         }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// Present field holding no value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// Timestamp value (milliseconds since Unix epoch).
    Time(Timestamp),
    /// String value (borrowed).
    Str(&'a str),
    /// Nested record, traversable by further path segments.
    Record(&'a dyn Fields),
}

impl<'a> Value<'a> {
    /// Returns `true` if this is the `Null` sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the timestamp value, if present.
    pub fn as_time(&self) -> Option<Timestamp> {
        match self {
            Value::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the nested record, if present.
    pub fn as_record(&self) -> Option<&'a dyn Fields> {
        match self {
            Value::Record(r) => Some(*r),
            _ => None,
        }
    }

    /// Name of this value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Time(_) => "timestamp",
            Value::Str(_) => "string",
            Value::Record(_) => "record",
        }
    }

    /// Orders two values of the same kind.
    ///
    /// Numbers order numerically across integer and float widths; strings
    /// lexicographically; timestamps chronologically; booleans with `false`
    /// first. `Ok(None)` means the pair is unordered within its kind (NaN
    /// against a number). Values of different kinds, and `Null` against
    /// anything, do not order and fail with [`SiftError::Incomparable`].
    pub fn compare(&self, other: &Value<'_>) -> Result<Option<Ordering>> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Ok(a.compare(*b)),
            (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
            (Value::Time(a), Value::Time(b)) => Ok(Some(a.cmp(b))),
            (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
            _ => Err(SiftError::Incomparable {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }
}

/// Structural equality. Different kinds are unequal, never an error.
/// Numbers compare numerically across widths. Records compare by identity
/// (same underlying record), matching what chained lookups hand back.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => std::ptr::addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Time(t) => f.debug_tuple("Time").field(t).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Record(_) => f.write_str("Record(..)"),
        }
    }
}

/// Numeric value stored at full precision.
///
/// One of three variants so integers are not forced through floats:
/// `I64` for signed, `U64` for unsigned, `F64` for floating point.
/// Integer-to-integer comparisons are exact; only comparisons involving a
/// float go through `f64`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers across variants.
    ///
    /// Returns `None` only when NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::I64(a), Number::U64(b)) => Some(cmp_signed_unsigned(a, b)),
            (Number::U64(a), Number::I64(b)) => Some(cmp_signed_unsigned(b, a).reverse()),
            // At least one side is a float
            (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
        }
    }
}

fn cmp_signed_unsigned(a: i64, b: u64) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u64).cmp(&b)
    }
}

/// Numeric equality across variants: `I64(1) == F64(1.0)`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Number {
            fn from(n: $ty) -> Self {
                Number::I64(n as i64)
            }
        })*
    };
}

macro_rules! number_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Number {
            fn from(n: $ty) -> Self {
                Number::U64(n as u64)
            }
        })*
    };
}

number_from_signed!(i8, i16, i32, i64, isize);
number_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

/// Timestamp as milliseconds since Unix epoch.
///
/// Timezone-agnostic and dependency-free; callers convert from their
/// datetime type of choice (`chrono::DateTime`, `std::time::SystemTime`)
/// at the boundary.
///
/// # Example
///
/// ```
/// use backlog_sift::Timestamp;
///
/// let due = Timestamp::from_secs(1_706_500_000);
/// assert!(due > Timestamp::from_millis(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs * 1000)
    }

    /// Milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Seconds since Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0 / 1000
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}
