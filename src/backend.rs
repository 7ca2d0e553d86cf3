use header_filter_core::{FilterSource, SourceError};

/// Data source of a [`crate::ListView`]: answers filter menu queries and hands out the rows
/// that pass the currently installed filter.
pub trait RowSource: FilterSource {
    /// Row filter installed by the last `apply_filter` call, empty when showing all rows.
    fn installed_filter(&self) -> &str;

    /// Display strings of `columns` for every row passing the installed filter.
    fn rows(&self, columns: &[&str]) -> Result<Vec<Vec<String>>, SourceError>;

    /// Number of rows passing the installed filter.
    fn row_count(&self) -> Result<usize, SourceError>;
}
