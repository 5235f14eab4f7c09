//! Field selectors: dotted path strings or accessor functions.
//!
//! Every query operation that names a field takes an `impl Into<Selector>`,
//! so call sites pass either a path like `"workspace.name"` or a closure
//! built with [`Selector::from_fn`]. Both forms resolve to a [`Value`] per
//! record at materialization time.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, SiftError};
use crate::fields::Fields;
use crate::value::Value;

/// Accessor function extracting a field value from a record.
pub type Accessor<T> = Arc<dyn for<'r> Fn(&'r T) -> Value<'r>>;

/// A field selector: either a dotted path or a ready-made accessor.
///
/// Paths are re-walked on every resolution, segment by segment, through
/// nested [`Value::Record`]s. A segment that does not resolve fails the
/// enclosing materialization with [`SiftError::NoSuchField`]; there is no
/// placeholder fallback.
///
/// # Example
///
/// ```
/// use backlog_sift::{Selector, Value};
/// use std::collections::BTreeMap;
///
/// let mut row = BTreeMap::new();
/// row.insert("points".to_string(), 5i64);
///
/// // From a path string
/// let by_path: Selector<BTreeMap<String, i64>> = Selector::from("points");
///
/// // From an accessor
/// let by_fn = Selector::from_fn(|row: &BTreeMap<String, i64>| {
///     match row.get("points") {
///         Some(p) => Value::Number((*p).into()),
///         None => Value::Null,
///     }
/// });
///
/// assert_eq!(by_fn.resolve(&row).unwrap(), by_path.resolve(&row).unwrap());
/// ```
pub enum Selector<T> {
    /// Dotted field path, split on `.` and walked per record.
    Path(String),
    /// Caller-supplied accessor, used as-is.
    Func(Accessor<T>),
}

impl<T> Selector<T> {
    /// Wraps an accessor function as a selector.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: for<'r> Fn(&'r T) -> Value<'r> + 'static,
    {
        Selector::Func(Arc::new(f))
    }

    /// Resolves the selector against one record.
    pub fn resolve<'r>(&self, record: &'r T) -> Result<Value<'r>>
    where
        T: Fields,
    {
        match self {
            Selector::Path(path) => resolve_path(record, path),
            Selector::Func(f) => Ok(f(record)),
        }
    }
}

/// Walks a dotted path through nested records.
fn resolve_path<'r, T: Fields>(record: &'r T, path: &str) -> Result<Value<'r>> {
    let mut value = Value::Record(record);
    for segment in path.split('.') {
        let Value::Record(fields) = value else {
            return Err(SiftError::no_such_field(path, segment));
        };
        value = fields
            .field(segment)
            .ok_or_else(|| SiftError::no_such_field(path, segment))?;
    }
    Ok(value)
}

impl<T> From<&str> for Selector<T> {
    fn from(path: &str) -> Self {
        Selector::Path(path.to_owned())
    }
}

impl<T> From<String> for Selector<T> {
    fn from(path: String) -> Self {
        Selector::Path(path)
    }
}

impl<T> From<&String> for Selector<T> {
    fn from(path: &String) -> Self {
        Selector::Path(path.clone())
    }
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        match self {
            Selector::Path(p) => Selector::Path(p.clone()),
            Selector::Func(f) => Selector::Func(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Selector::Func(_) => f.write_str("Func(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;
    use std::collections::BTreeMap;

    struct City {
        name: String,
        population: u64,
    }

    struct Office {
        label: String,
        city: City,
    }

    impl Fields for City {
        fn field(&self, name: &str) -> Option<Value<'_>> {
            match name {
                "name" => Some(Value::Str(&self.name)),
                "population" => Some(Value::Number(Number::U64(self.population))),
                _ => None,
            }
        }
    }

    impl Fields for Office {
        fn field(&self, name: &str) -> Option<Value<'_>> {
            match name {
                "label" => Some(Value::Str(&self.label)),
                "city" => Some(Value::Record(&self.city)),
                _ => None,
            }
        }
    }

    fn office() -> Office {
        Office {
            label: "hq".to_string(),
            city: City {
                name: "Porto".to_string(),
                population: 231_000,
            },
        }
    }

    #[test]
    fn resolves_single_segment() {
        let office = office();
        let sel: Selector<Office> = "label".into();
        assert_eq!(sel.resolve(&office).unwrap(), Value::Str("hq"));
    }

    #[test]
    fn resolves_nested_path() {
        let office = office();
        let sel: Selector<Office> = "city.name".into();
        assert_eq!(sel.resolve(&office).unwrap(), Value::Str("Porto"));

        let sel: Selector<Office> = "city.population".into();
        assert_eq!(
            sel.resolve(&office).unwrap(),
            Value::Number(Number::U64(231_000))
        );
    }

    #[test]
    fn missing_segment_fails() {
        let office = office();
        let sel: Selector<Office> = "city.mayor".into();
        let err = sel.resolve(&office).unwrap_err();
        assert!(matches!(
            err,
            SiftError::NoSuchField { ref path, ref segment }
                if path == "city.mayor" && segment == "mayor"
        ));
    }

    #[test]
    fn walking_past_a_leaf_fails() {
        let office = office();
        let sel: Selector<Office> = "label.length".into();
        let err = sel.resolve(&office).unwrap_err();
        assert!(matches!(
            err,
            SiftError::NoSuchField { ref segment, .. } if segment == "length"
        ));
    }

    #[test]
    fn accessor_passes_through() {
        let office = office();
        let sel = Selector::from_fn(|o: &Office| Value::Number(Number::U64(o.city.population)));
        assert_eq!(
            sel.resolve(&office).unwrap(),
            Value::Number(Number::U64(231_000))
        );
    }

    #[test]
    fn maps_resolve_nested_paths() {
        let mut inner = BTreeMap::new();
        inner.insert("name", "core");
        let mut outer = BTreeMap::new();
        outer.insert("team", inner);

        let sel: Selector<BTreeMap<&str, BTreeMap<&str, &str>>> = "team.name".into();
        assert_eq!(sel.resolve(&outer).unwrap(), Value::Str("core"));
    }
}
