//! Boolean predicates over records.
//!
//! A [`Predicate`] pairs a [`Selector`] with a [`Cond`], the test applied to
//! the resolved value. Query builder methods construct these; they can also
//! be built directly and registered with `Query::add_filter`.

use regex::{Regex, RegexBuilder};

use crate::error::{Result, SiftError};
use crate::fields::Fields;
use crate::selector::Selector;
use crate::value::{Number, Timestamp, Value};

use std::cmp::Ordering;
use std::fmt;

/// Owned comparison operand supplied at builder call sites.
///
/// Builder methods take `impl Into<Operand>`, so plain literals work:
/// `query.equals("points", 5)` or `query.equals("name", "apple")`.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// The null sentinel.
    Null,
    /// Boolean operand.
    Bool(bool),
    /// Numeric operand.
    Number(Number),
    /// Timestamp operand.
    Time(Timestamp),
    /// String operand.
    Text(String),
}

impl Operand {
    /// Views the operand as a [`Value`] for comparison.
    pub(crate) fn as_value(&self) -> Value<'_> {
        match self {
            Operand::Null => Value::Null,
            Operand::Bool(b) => Value::Bool(*b),
            Operand::Number(n) => Value::Number(*n),
            Operand::Time(t) => Value::Time(*t),
            Operand::Text(s) => Value::Str(s),
        }
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Bool(b)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_owned())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl From<&String> for Operand {
    fn from(s: &String) -> Self {
        Operand::Text(s.clone())
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        Operand::Number(n)
    }
}

impl From<Timestamp> for Operand {
    fn from(t: Timestamp) -> Self {
        Operand::Time(t)
    }
}

impl<O: Into<Operand>> From<Option<O>> for Operand {
    fn from(opt: Option<O>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Operand::Null,
        }
    }
}

macro_rules! operand_from_number {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Operand {
            fn from(n: $ty) -> Self {
                Operand::Number(Number::from(n))
            }
        })*
    };
}

operand_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Containment matcher: plain substring or compiled regular expression.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Contiguous substring test. When `case_sensitive` is false, both
    /// sides are upper-cased before the scan.
    Substring {
        needle: String,
        case_sensitive: bool,
    },
    /// Compiled pattern, matched anywhere in the value (search, not
    /// full-match).
    Pattern(Regex),
}

impl Matcher {
    /// Builds a matcher. With `regex` set, `pattern` is compiled and the
    /// case-insensitivity flag is switched on when `case_sensitive` is
    /// false; otherwise a substring matcher is produced.
    pub fn new(pattern: &str, case_sensitive: bool, regex: bool) -> Result<Self> {
        if regex {
            let compiled = RegexBuilder::new(pattern)
                .case_insensitive(!case_sensitive)
                .build()?;
            Ok(Matcher::Pattern(compiled))
        } else {
            Ok(Matcher::Substring {
                needle: pattern.to_owned(),
                case_sensitive,
            })
        }
    }

    fn hits(&self, text: &str) -> bool {
        match self {
            Matcher::Pattern(re) => re.is_match(text),
            Matcher::Substring {
                needle,
                case_sensitive: true,
            } => text.contains(needle.as_str()),
            Matcher::Substring {
                needle,
                case_sensitive: false,
            } => text.to_uppercase().contains(&needle.to_uppercase()),
        }
    }
}

/// The test a predicate applies to a resolved value.
#[derive(Debug, Clone)]
pub enum Cond {
    /// Value is not the null sentinel.
    IsSet,
    /// Value is the null sentinel.
    IsNotSet,
    /// Value is boolean `true`, strictly. Other kinds never pass.
    IsTrue,
    /// Value is anything but boolean `true`. This is the complement of
    /// [`Cond::IsTrue`], not a check for boolean `false`: null and
    /// non-boolean values pass too.
    IsFalse,
    /// Structural equality against the operand.
    Eq(Operand),
    /// Structural inequality against the operand.
    Ne(Operand),
    /// Value orders below the bound; `inclusive` admits equality.
    Lt { bound: Operand, inclusive: bool },
    /// Value orders above the bound; `inclusive` admits equality.
    Gt { bound: Operand, inclusive: bool },
    /// String containment per the matcher.
    Contains(Matcher),
}

impl Cond {
    pub(crate) fn eval(&self, value: &Value<'_>) -> Result<bool> {
        match self {
            Cond::IsSet => Ok(!value.is_null()),
            Cond::IsNotSet => Ok(value.is_null()),
            Cond::IsTrue => Ok(matches!(value, Value::Bool(true))),
            Cond::IsFalse => Ok(!matches!(value, Value::Bool(true))),
            Cond::Eq(operand) => Ok(*value == operand.as_value()),
            Cond::Ne(operand) => Ok(*value != operand.as_value()),
            Cond::Lt { bound, inclusive } => {
                Ok(match value.compare(&bound.as_value())? {
                    Some(Ordering::Less) => true,
                    Some(Ordering::Equal) => *inclusive,
                    Some(Ordering::Greater) | None => false,
                })
            }
            Cond::Gt { bound, inclusive } => {
                Ok(match value.compare(&bound.as_value())? {
                    Some(Ordering::Greater) => true,
                    Some(Ordering::Equal) => *inclusive,
                    Some(Ordering::Less) | None => false,
                })
            }
            Cond::Contains(matcher) => match value {
                Value::Str(text) => Ok(matcher.hits(text)),
                other => Err(SiftError::NotText { kind: other.kind() }),
            },
        }
    }
}

/// A registered filter: one selector, one condition.
pub struct Predicate<T> {
    selector: Selector<T>,
    cond: Cond,
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Predicate {
            selector: self.selector.clone(),
            cond: self.cond.clone(),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("selector", &self.selector)
            .field("cond", &self.cond)
            .finish()
    }
}

impl<T> Predicate<T> {
    /// Builds a predicate from any selector form and a condition.
    pub fn new(selector: impl Into<Selector<T>>, cond: Cond) -> Self {
        Predicate {
            selector: selector.into(),
            cond,
        }
    }

    /// Evaluates the predicate against one record.
    pub fn matches(&self, record: &T) -> Result<bool>
    where
        T: Fields,
    {
        let value = self.selector.resolve(record)?;
        self.cond.eval(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Story {
        text: String,
        likes: i64,
        pinned: Option<bool>,
    }

    impl Fields for Story {
        fn field(&self, name: &str) -> Option<Value<'_>> {
            match name {
                "text" => Some(Value::Str(&self.text)),
                "likes" => Some(Value::Number(Number::I64(self.likes))),
                "pinned" => Some(match self.pinned {
                    Some(p) => Value::Bool(p),
                    None => Value::Null,
                }),
                _ => None,
            }
        }
    }

    fn story(text: &str, likes: i64, pinned: Option<bool>) -> Story {
        Story {
            text: text.to_owned(),
            likes,
            pinned,
        }
    }

    #[test]
    fn set_and_not_set() {
        let with = story("x", 0, Some(false));
        let without = story("x", 0, None);

        let is_set = Predicate::new("pinned", Cond::IsSet);
        assert!(is_set.matches(&with).unwrap());
        assert!(!is_set.matches(&without).unwrap());

        let is_not_set = Predicate::<Story>::new("pinned", Cond::IsNotSet);
        assert!(is_not_set.matches(&without).unwrap());
    }

    #[test]
    fn is_true_is_strict() {
        let truthy = Predicate::new("pinned", Cond::IsTrue);
        assert!(truthy.matches(&story("x", 0, Some(true))).unwrap());
        assert!(!truthy.matches(&story("x", 0, Some(false))).unwrap());
        assert!(!truthy.matches(&story("x", 0, None)).unwrap());
        // Non-boolean values never pass
        let text_true = Predicate::new("text", Cond::IsTrue);
        assert!(!text_true.matches(&story("true", 0, None)).unwrap());
    }

    #[test]
    fn is_false_means_not_strictly_true() {
        let falsy = Predicate::new("pinned", Cond::IsFalse);
        assert!(falsy.matches(&story("x", 0, Some(false))).unwrap());
        // Null passes: not the boolean literal true
        assert!(falsy.matches(&story("x", 0, None)).unwrap());
        assert!(!falsy.matches(&story("x", 0, Some(true))).unwrap());
        // Non-boolean passes too
        let text_false = Predicate::new("text", Cond::IsFalse);
        assert!(text_false.matches(&story("true", 0, None)).unwrap());
    }

    #[test]
    fn equality_is_structural() {
        let eq = Predicate::new("likes", Cond::Eq(5.into()));
        assert!(eq.matches(&story("x", 5, None)).unwrap());
        assert!(!eq.matches(&story("x", 6, None)).unwrap());

        // Cross-kind equality is false, not an error
        let eq_str = Predicate::new("likes", Cond::Eq("5".into()));
        assert!(!eq_str.matches(&story("x", 5, None)).unwrap());

        let ne = Predicate::new("text", Cond::Ne("draft".into()));
        assert!(ne.matches(&story("final", 0, None)).unwrap());
    }

    #[test]
    fn ordering_with_inclusive_flag() {
        let below = |inclusive| {
            Predicate::new(
                "likes",
                Cond::Lt {
                    bound: 5.into(),
                    inclusive,
                },
            )
        };
        assert!(below(false).matches(&story("x", 4, None)).unwrap());
        assert!(!below(false).matches(&story("x", 5, None)).unwrap());
        assert!(below(true).matches(&story("x", 5, None)).unwrap());

        let above = Predicate::new(
            "likes",
            Cond::Gt {
                bound: 5.into(),
                inclusive: false,
            },
        );
        assert!(above.matches(&story("x", 6, None)).unwrap());
        assert!(!above.matches(&story("x", 5, None)).unwrap());
    }

    #[test]
    fn ordering_across_kinds_fails() {
        let bad = Predicate::new(
            "text",
            Cond::Lt {
                bound: 5.into(),
                inclusive: false,
            },
        );
        assert!(matches!(
            bad.matches(&story("x", 0, None)),
            Err(SiftError::Incomparable { .. })
        ));

        // Null never orders
        let null_cmp = Predicate::new(
            "pinned",
            Cond::Gt {
                bound: false.into(),
                inclusive: false,
            },
        );
        assert!(null_cmp.matches(&story("x", 0, None)).is_err());
    }

    #[test]
    fn substring_case_handling() {
        let sensitive = Matcher::new("ISSUE", true, false).unwrap();
        assert!(sensitive.hits("found ISSUE here"));
        assert!(!sensitive.hits("found issue here"));

        let insensitive = Matcher::new("issue", false, false).unwrap();
        assert!(insensitive.hits("found ISSUE here"));
        assert!(insensitive.hits("found Issue here"));
        assert!(!insensitive.hits("clean"));
    }

    #[test]
    fn regex_search_semantics() {
        let re = Matcher::new("abc", false, true).unwrap();
        assert!(re.hits("XXABCYY"));

        let anchored = Matcher::new("^abc$", true, true).unwrap();
        assert!(anchored.hits("abc"));
        assert!(!anchored.hits("xxabc"));

        assert!(matches!(
            Matcher::new("(unclosed", true, true),
            Err(SiftError::BadPattern(_))
        ));
    }

    #[test]
    fn contains_requires_text() {
        let pred = Predicate::new(
            "likes",
            Cond::Contains(Matcher::new("5", true, false).unwrap()),
        );
        assert!(matches!(
            pred.matches(&story("x", 5, None)),
            Err(SiftError::NotText { kind: "number" })
        ));
    }

    #[test]
    fn nan_orders_nowhere() {
        let mut map = std::collections::BTreeMap::new();
        map.insert("score", f64::NAN);
        let below = Predicate::new(
            "score",
            Cond::Lt {
                bound: 1.0.into(),
                inclusive: false,
            },
        );
        assert!(!below.matches(&map).unwrap());
        let above = Predicate::new(
            "score",
            Cond::Gt {
                bound: 1.0.into(),
                inclusive: true,
            },
        );
        assert!(!above.matches(&map).unwrap());
    }
}
