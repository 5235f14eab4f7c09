//! Multi-key stable sorting.
//!
//! Sort keys are registered in priority order: first registered is the
//! primary key. Materialization runs one stable pass per key, starting from
//! the last-registered key and ending with the first, so the primary key
//! dominates and every later key breaks ties with its own direction. The
//! same passes run whether directions are mixed or not.

use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;
use crate::fields::Fields;
use crate::selector::Selector;
use crate::value::Value;

/// Sort direction for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl Dir {
    /// Applies the direction to an ascending ordering.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Dir::Asc => ord,
            Dir::Desc => ord.reverse(),
        }
    }
}

/// One registered sort key: a selector and its direction.
pub struct SortKey<T> {
    /// Field the pass orders by.
    pub selector: Selector<T>,
    /// Direction of this key, independent of the others.
    pub dir: Dir,
}

impl<T> SortKey<T> {
    /// Builds a sort key.
    pub fn new(selector: impl Into<Selector<T>>, dir: Dir) -> Self {
        SortKey {
            selector: selector.into(),
            dir,
        }
    }

    /// Ascending key.
    pub fn asc(selector: impl Into<Selector<T>>) -> Self {
        SortKey::new(selector, Dir::Asc)
    }

    /// Descending key.
    pub fn desc(selector: impl Into<Selector<T>>) -> Self {
        SortKey::new(selector, Dir::Desc)
    }
}

impl<T> Clone for SortKey<T> {
    fn clone(&self) -> Self {
        SortKey {
            selector: self.selector.clone(),
            dir: self.dir,
        }
    }
}

impl<T> fmt::Debug for SortKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortKey")
            .field("selector", &self.selector)
            .field("dir", &self.dir)
            .finish()
    }
}

/// Runs the registered passes over a working sequence, in place.
pub(crate) fn apply_sort<'a, T: Fields>(
    records: &mut Vec<&'a T>,
    keys: &[SortKey<T>],
) -> Result<()> {
    for key in keys.iter().rev() {
        sort_pass(records, key)?;
    }
    Ok(())
}

/// One stable pass. Key values resolve up front, so a resolution failure
/// aborts before anything reorders.
fn sort_pass<'a, T: Fields>(records: &mut Vec<&'a T>, key: &SortKey<T>) -> Result<()> {
    let mut decorated: Vec<(Value<'a>, &'a T)> = Vec::with_capacity(records.len());
    for &record in records.iter() {
        decorated.push((key.selector.resolve(record)?, record));
    }

    let mut failure = None;
    decorated.sort_by(|(a, _), (b, _)| match a.compare(b) {
        Ok(Some(ord)) => key.dir.apply(ord),
        // Unordered within a kind (NaN): keep input order
        Ok(None) => Ordering::Equal,
        Err(e) => {
            if failure.is_none() {
                failure = Some(e);
            }
            Ordering::Equal
        }
    });
    if let Some(e) = failure {
        return Err(e);
    }

    *records = decorated.into_iter().map(|(_, r)| r).collect();
    Ok(())
}
