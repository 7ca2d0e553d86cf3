use crate::column_filters::ColumnFilters;
use crate::source::FilterSource;
use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

/// Active column filters of one list view, keyed by column name.
///
/// An entry exists only while its column has at least one filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterRegistry {
    columns: IndexMap<String, ColumnFilters>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&ColumnFilters> {
        self.columns.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnFilters> {
        self.columns.values()
    }

    /// Replace the filters of `filters.name()`, or drop the entry if `filters` is empty.
    /// Returns whether the column is filtered afterwards.
    pub fn insert(&mut self, filters: ColumnFilters) -> bool {
        if filters.is_empty() {
            self.columns.shift_remove(filters.name());
            false
        } else {
            self.columns.insert(filters.name().to_string(), filters);
            true
        }
    }

    pub fn remove(&mut self, column: &str) -> Option<ColumnFilters> {
        self.columns.shift_remove(column)
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// All column predicates joined with AND, empty if nothing is filtered.
    pub fn to_sql(&self) -> String {
        filters_to_sql(self.columns.values())
    }

    /// Same as [`FilterRegistry::to_sql`] but leaving `column` out.
    pub fn to_sql_except(&self, column: &str) -> String {
        filters_to_sql(
            self.columns
                .iter()
                .filter(|(name, _)| name.as_str() != column)
                .map(|(_, filters)| filters),
        )
    }

    /// Install the combined predicate as the row filter of `source`.
    pub fn install(&self, source: &mut impl FilterSource) {
        let predicate = self.to_sql();
        debug!("installing row filter: {predicate:?}");
        source.apply_filter(&predicate);
    }
}

pub fn filters_to_sql<'a>(filters: impl IntoIterator<Item = &'a ColumnFilters>) -> String {
    filters
        .into_iter()
        .map(ColumnFilters::to_sql)
        .filter(|sql| !sql.is_empty())
        .join(" AND ")
}

/// `lhs AND rhs`, skipping empty sides.
pub(crate) fn and_sql(lhs: &str, rhs: &str) -> String {
    [lhs, rhs].into_iter().filter(|s| !s.is_empty()).join(" AND ")
}
