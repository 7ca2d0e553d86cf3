use crate::filter::{quote, Filter};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Filters active on one column, combined into a single predicate.
///
/// Member order is irrelevant: [`ColumnFilters::to_sql`] treats the members as a set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilters {
    name: String,
    filters: Vec<Filter>,
}

impl ColumnFilters {
    pub fn new(name: impl AsRef<str>) -> Self {
        ColumnFilters {
            name: name.as_ref().to_string(),
            filters: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_filter(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn has_blank(&self) -> bool {
        self.filters.iter().any(Filter::is_blank)
    }

    pub fn has_data(&self) -> bool {
        self.filters.iter().any(Filter::is_data)
    }

    /// True if any member is a whitelist filter.
    pub fn has_revert(&self) -> bool {
        self.filters.iter().any(Filter::is_revert)
    }

    /// Values of the member value filters, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().filter_map(Filter::value_str)
    }

    // At most one blank and one data filter exist per column, a whitelist member wins otherwise.
    fn blank_filter(&self) -> Option<&Filter> {
        self.filters
            .iter()
            .filter(|f| f.is_blank())
            .max_by_key(|f| f.is_revert())
    }

    fn data_filter(&self) -> Option<&Filter> {
        self.filters
            .iter()
            .filter(|f| f.is_data())
            .max_by_key(|f| f.is_revert())
    }

    /// Parenthesized predicate for this column, empty string when no filter is set.
    pub fn to_sql(&self) -> String {
        if self.filters.is_empty() {
            return String::new();
        }
        let name = &self.name;
        let revert = self.has_revert();

        let values = self.values().sorted().dedup().map(quote).join(",");
        let mut combined = if values.is_empty() {
            String::new()
        } else if revert {
            format!("{name} IN ({values})")
        } else {
            format!("{name} NOT IN ({values})")
        };

        if let Some(blank) = self.blank_filter() {
            combined = match (combined.is_empty(), revert) {
                (true, _) => blank.to_sql(),
                (false, true) => format!("{combined} OR {}", blank.to_sql()),
                (false, false) => format!("{combined} AND {}", blank.to_sql()),
            };
        } else if let Some(data) = self.data_filter() {
            // "Has any data" subsumes individual values.
            combined = data.to_sql();
        }

        // NOT IN (...) never matches NULL, keep blank rows unless blanks were mentioned.
        if !self.has_blank() && !revert {
            combined.push_str(&format!(" OR {name} IS NULL"));
        }

        format!("({combined})")
    }
}
