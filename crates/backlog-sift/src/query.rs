//! Fluent query façade over a borrowed collection.

use crate::error::Result;
use crate::fields::Fields;
use crate::group::Groups;
use crate::predicate::{Cond, Matcher, Operand, Predicate};
use crate::selector::Selector;
use crate::sort::{apply_sort, Dir, SortKey};

/// Chainable filter/sort/group query over a borrowed slice of records.
///
/// A query is bound to its backing collection for its whole life and never
/// copies or mutates it. Builder calls accumulate predicates and sort keys;
/// terminals materialize a new `Vec` of references. The current *view*
/// starts as the full collection and narrows only through
/// [`set_view`](Query::set_view).
///
/// Filters AND together and evaluate in registration order. Sort keys apply
/// in registration order: first registered is the primary key, later keys
/// break ties, each with its own direction.
///
/// # Example
///
/// ```
/// use backlog_sift::{Dir, Fields, Number, Query, Value};
///
/// struct Task {
///     name: String,
///     points: u32,
///     done: bool,
/// }
///
/// impl Fields for Task {
///     fn field(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "name" => Some(Value::Str(&self.name)),
///             "points" => Some(Value::Number(Number::U64(self.points as u64))),
///             "done" => Some(Value::Bool(self.done)),
///             _ => None,
///         }
///     }
/// }
///
/// let tasks = vec![
///     Task { name: "triage inbox".into(), points: 2, done: true },
///     Task { name: "write changelog".into(), points: 5, done: false },
///     Task { name: "cut release".into(), points: 8, done: false },
/// ];
///
/// let mut query = Query::new(&tasks);
/// let open = query
///     .is_false("done")
///     .sort_by("points", Dir::Desc)
///     .get_list()?;
///
/// assert_eq!(open.len(), 2);
/// assert_eq!(open[0].name, "cut release");
/// # Ok::<(), backlog_sift::SiftError>(())
/// ```
pub struct Query<'a, T> {
    backing: &'a [T],
    view: Vec<&'a T>,
    filters: Vec<Predicate<T>>,
    sorts: Vec<SortKey<T>>,
}

impl<'a, T: Fields> Query<'a, T> {
    /// Binds a query to a backing collection. The view starts as the whole
    /// collection and both accumulators start empty.
    pub fn new(backing: &'a [T]) -> Self {
        Query {
            backing,
            view: backing.iter().collect(),
            filters: Vec::new(),
            sorts: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Filter builders
    // ------------------------------------------------------------------

    /// Keeps records whose field is not null.
    pub fn is_set(&mut self, selector: impl Into<Selector<T>>) -> &mut Self {
        self.push_filter(selector, Cond::IsSet)
    }

    /// Keeps records whose field is null.
    pub fn is_not_set(&mut self, selector: impl Into<Selector<T>>) -> &mut Self {
        self.push_filter(selector, Cond::IsNotSet)
    }

    /// Keeps records whose field is boolean `true`, strictly.
    pub fn is_true(&mut self, selector: impl Into<Selector<T>>) -> &mut Self {
        self.push_filter(selector, Cond::IsTrue)
    }

    /// Keeps records whose field is anything but boolean `true`.
    ///
    /// Not the mirror of [`is_true`](Query::is_true) on boolean `false`:
    /// null and non-boolean values pass too.
    pub fn is_false(&mut self, selector: impl Into<Selector<T>>) -> &mut Self {
        self.push_filter(selector, Cond::IsFalse)
    }

    /// Keeps records whose field equals the operand. Different kinds are
    /// unequal, not an error.
    pub fn equals(
        &mut self,
        selector: impl Into<Selector<T>>,
        operand: impl Into<Operand>,
    ) -> &mut Self {
        self.push_filter(selector, Cond::Eq(operand.into()))
    }

    /// Keeps records whose field differs from the operand.
    pub fn not_equals(
        &mut self,
        selector: impl Into<Selector<T>>,
        operand: impl Into<Operand>,
    ) -> &mut Self {
        self.push_filter(selector, Cond::Ne(operand.into()))
    }

    /// Keeps records whose field orders below the bound; `inclusive`
    /// admits equality.
    pub fn less_than(
        &mut self,
        selector: impl Into<Selector<T>>,
        bound: impl Into<Operand>,
        inclusive: bool,
    ) -> &mut Self {
        self.push_filter(
            selector,
            Cond::Lt {
                bound: bound.into(),
                inclusive,
            },
        )
    }

    /// Keeps records whose field orders above the bound; `inclusive`
    /// admits equality.
    pub fn greater_than(
        &mut self,
        selector: impl Into<Selector<T>>,
        bound: impl Into<Operand>,
        inclusive: bool,
    ) -> &mut Self {
        self.push_filter(
            selector,
            Cond::Gt {
                bound: bound.into(),
                inclusive,
            },
        )
    }

    /// Keeps records whose string field contains `pattern`.
    ///
    /// With `regex` set, the pattern is compiled (case-insensitively when
    /// `case_sensitive` is false) and matched anywhere in the value.
    /// Without it, a plain substring scan runs, upper-casing both sides
    /// when `case_sensitive` is false. Fails immediately on an invalid
    /// pattern.
    pub fn contains(
        &mut self,
        selector: impl Into<Selector<T>>,
        pattern: &str,
        case_sensitive: bool,
        regex: bool,
    ) -> Result<&mut Self> {
        let matcher = Matcher::new(pattern, case_sensitive, regex)?;
        Ok(self.push_filter(selector, Cond::Contains(matcher)))
    }

    /// Registers a ready-made predicate.
    pub fn add_filter(&mut self, predicate: Predicate<T>) -> &mut Self {
        self.filters.push(predicate);
        self
    }

    fn push_filter(&mut self, selector: impl Into<Selector<T>>, cond: Cond) -> &mut Self {
        self.filters.push(Predicate::new(selector, cond));
        self
    }

    // ------------------------------------------------------------------
    // Sort builders
    // ------------------------------------------------------------------

    /// Registers a sort key. The first registered key is the primary one.
    pub fn sort_by(&mut self, selector: impl Into<Selector<T>>, dir: Dir) -> &mut Self {
        self.sorts.push(SortKey::new(selector, dir));
        self
    }

    /// Registers an ascending sort key.
    pub fn sort_asc(&mut self, selector: impl Into<Selector<T>>) -> &mut Self {
        self.sort_by(selector, Dir::Asc)
    }

    /// Registers a descending sort key.
    pub fn sort_desc(&mut self, selector: impl Into<Selector<T>>) -> &mut Self {
        self.sort_by(selector, Dir::Desc)
    }

    // ------------------------------------------------------------------
    // Terminals
    // ------------------------------------------------------------------

    /// Materializes the pending filters and sorts over the current view,
    /// clears both accumulators, and returns the result. The view itself
    /// is left untouched.
    ///
    /// On error nothing is cleared; the accumulators keep their state.
    pub fn get_list(&mut self) -> Result<Vec<&'a T>> {
        let out = self.materialize()?;
        self.filters.clear();
        self.sorts.clear();
        Ok(out)
    }

    /// Materializes like [`get_list`](Query::get_list) but clears nothing,
    /// so the same filters and sorts can run again.
    pub fn peek(&self) -> Result<Vec<&'a T>> {
        self.materialize()
    }

    /// Materializes like [`get_list`](Query::get_list), then narrows the
    /// view to the result. Later calls operate on the narrowed view;
    /// records excluded here never come back except through
    /// [`new_view`](Query::new_view).
    pub fn set_view(&mut self) -> Result<Vec<&'a T>> {
        let out = self.get_list()?;
        self.view = out.clone();
        Ok(out)
    }

    /// A fresh query over the original backing collection: full view,
    /// empty accumulators.
    pub fn new_view(&self) -> Query<'a, T> {
        Query::new(self.backing)
    }

    /// Buckets the filtered view by the selector's value, keys in
    /// first-occurrence order.
    ///
    /// The filter accumulator is applied but *not* cleared, so the same
    /// filters still back a later [`get_list`](Query::get_list). Pending
    /// sort keys are not consulted; group over a sorted view by calling
    /// [`set_view`](Query::set_view) first.
    pub fn group_by(&self, selector: impl Into<Selector<T>>) -> Result<Groups<'a, T>> {
        let filtered = self.apply_filters()?;
        Groups::from_records(&filtered, &selector.into())
    }

    /// The current view.
    pub fn view(&self) -> &[&'a T] {
        &self.view
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn materialize(&self) -> Result<Vec<&'a T>> {
        let mut out = self.apply_filters()?;
        apply_sort(&mut out, &self.sorts)?;
        Ok(out)
    }

    fn apply_filters(&self) -> Result<Vec<&'a T>> {
        let mut out = Vec::with_capacity(self.view.len());
        for &record in &self.view {
            if self.passes(record)? {
                out.push(record);
            }
        }
        Ok(out)
    }

    /// All registered predicates hold; an empty accumulator passes
    /// everything. Evaluates in registration order, stopping at the first
    /// failure.
    fn passes(&self, record: &T) -> Result<bool> {
        for predicate in &self.filters {
            if !predicate.matches(record)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
