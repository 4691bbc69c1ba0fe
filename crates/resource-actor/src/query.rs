//! # Query Engine
//!
//! Filtering and sorting over a snapshot of a collection. Filters are delegated to
//! [`ActorEntity::matches`] and sort comparisons to [`ActorEntity::compare_by`], so each
//! resource kind decides what its predicates and sortable fields mean while the engine
//! guarantees the common rules:
//!
//! - filters compose by logical AND (inside `matches`) and never mutate the store;
//! - sorting is stable in both directions, so equal keys keep their prior relative order;
//! - no sort field means the collection keeps its insertion order.

use crate::entity::ActorEntity;
use std::fmt;
use std::str::FromStr;

/// Sort direction. Ascending unless explicitly descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses the `order` request parameter. Anything other than `desc` is ascending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// A sort request on one allow-listed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
    pub field: F,
    pub order: SortOrder,
}

impl<F: FromStr> Sort<F> {
    /// Builds a sort from the `sortBy` / `order` parameters.
    ///
    /// Returns `None` when `sortBy` is missing or names a field outside the allow-list,
    /// which leaves the listing in insertion order.
    pub fn from_params(sort_by: Option<&str>, order: Option<&str>) -> Option<Self> {
        let field = sort_by?.trim().parse().ok()?;
        Some(Self {
            field,
            order: SortOrder::from_param(order),
        })
    }
}

/// A complete list query: filter predicates plus an optional sort.
pub struct ListQuery<T: ActorEntity> {
    pub filter: T::Filter,
    pub sort: Option<Sort<T::SortField>>,
}

impl<T: ActorEntity> ListQuery<T> {
    pub fn new(filter: T::Filter, sort: Option<Sort<T::SortField>>) -> Self {
        Self { filter, sort }
    }

    /// Applies the query to a snapshot and returns the resulting view.
    pub fn apply(&self, mut items: Vec<T>) -> Vec<T> {
        items.retain(|item| item.matches(&self.filter));
        if let Some(sort) = self.sort {
            // `sort_by` is stable; reversing the comparator (not the output) keeps ties in place.
            match sort.order {
                SortOrder::Asc => items.sort_by(|a, b| a.compare_by(b, sort.field)),
                SortOrder::Desc => items.sort_by(|a, b| b.compare_by(a, sort.field)),
            }
        }
        items
    }
}

impl<T: ActorEntity> Default for ListQuery<T> {
    fn default() -> Self {
        Self {
            filter: T::Filter::default(),
            sort: None,
        }
    }
}

impl<T: ActorEntity> fmt::Debug for ListQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListQuery")
            .field("filter", &self.filter)
            .field("sort", &self.sort)
            .finish()
    }
}
