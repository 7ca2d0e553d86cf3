use crate::field::Status;
use std::cmp::Ordering;
use std::fmt;

/// Tabular query collaborator consumed by the filter menus.
///
/// Predicates are boolean expressions in the SQLite `WHERE` dialect, an empty predicate
/// means "all rows".
pub trait FilterSource {
    /// Distinct values of `column` over the rows satisfying `predicate`, NULL included.
    fn distinct_values(&self, column: &str, predicate: &str)
        -> Result<Vec<SqlValue>, SourceError>;

    /// Whether at least one row satisfies `predicate`.
    fn exists(&self, predicate: &str) -> Result<bool, SourceError>;

    /// Install `predicate` as the row filter of the view.
    fn apply_filter(&mut self, predicate: &str);

    /// Icon registered in reference data for `value` of `column`.
    fn lookup_icon(&self, column: &str, value: &str) -> Option<String> {
        let _ = (column, value);
        None
    }

    /// Display rank of a status value.
    fn status_rank(&self, value: &str) -> i32 {
        Status::rank_of(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("query failed: {0}")]
    Query(String),
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Dynamically typed cell value returned by a distinct-value scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SqlValue {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// NULL or empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            SqlValue::Null => true,
            SqlValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// String form used as the comparison key of value filters, `None` for NULL.
    pub fn to_key(&self) -> Option<String> {
        match self {
            SqlValue::Null => None,
            other => Some(other.to_string()),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            SqlValue::Integer(i) => Some(*i as f64),
            SqlValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    fn class(&self) -> u8 {
        match self {
            SqlValue::Null => 0,
            SqlValue::Integer(_) | SqlValue::Real(_) => 1,
            SqlValue::Text(_) => 2,
        }
    }

    /// Total order: NULL first, then numbers by value, then text.
    ///
    /// Integers that collapse to the same `f64` are told apart exactly, an integer sorts
    /// before an equal real.
    pub fn compare(&self, other: &SqlValue) -> Ordering {
        self.class()
            .cmp(&other.class())
            .then_with(|| match (self, other) {
                (SqlValue::Text(a), SqlValue::Text(b)) => a.cmp(b),
                (SqlValue::Integer(a), SqlValue::Integer(b)) => {
                    (*a as f64).total_cmp(&(*b as f64)).then(a.cmp(b))
                }
                _ => match (self.as_f64(), other.as_f64()) {
                    (Some(a), Some(b)) => a.total_cmp(&b).then(
                        matches!(self, SqlValue::Real(_)).cmp(&matches!(other, SqlValue::Real(_))),
                    ),
                    _ => Ordering::Equal,
                },
            })
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => Ok(()),
            SqlValue::Integer(i) => write!(f, "{i}"),
            SqlValue::Real(r) => write!(f, "{r}"),
            SqlValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        assert_eq!(SqlValue::Null.to_key(), None);
        assert_eq!(SqlValue::from(-44).to_key().as_deref(), Some("-44"));
        assert_eq!(SqlValue::from(0.5).to_key().as_deref(), Some("0.5"));
        assert_eq!(SqlValue::from("").to_key().as_deref(), Some(""));
        assert!(SqlValue::from("").is_blank());
        assert!(!SqlValue::from(0).is_blank());
    }

    #[test]
    fn mixed_ordering() {
        assert_eq!(SqlValue::from(-44).compare(&SqlValue::from(1900)), Ordering::Less);
        assert_eq!(SqlValue::from(2).compare(&SqlValue::from(10.5)), Ordering::Less);
        assert_eq!(SqlValue::from(2).compare(&SqlValue::from(2.0)), Ordering::Less);
        assert_eq!(SqlValue::Null.compare(&SqlValue::from(-44)), Ordering::Less);
        // numbers before text, whatever the text says
        assert_eq!(SqlValue::from(1900).compare(&SqlValue::from("1850s")), Ordering::Less);
        assert_eq!(SqlValue::from("1950s").compare(&SqlValue::from(2)), Ordering::Greater);
        assert_eq!(SqlValue::from("10").compare(&SqlValue::from("9")), Ordering::Less);
    }

    #[test]
    fn large_integers_stay_ordered() {
        let a = SqlValue::Integer(1 << 53);
        let b = SqlValue::Integer((1 << 53) + 1);
        let r = SqlValue::Real((1u64 << 53) as f64);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(a.compare(&r), Ordering::Less);
        assert_eq!(b.compare(&r), Ordering::Less);
    }

    #[test]
    fn sorting_a_mixed_column() {
        let mut values: Vec<SqlValue> = (0..400)
            .map(|n| match n % 4 {
                0 => SqlValue::Integer(1900 - n),
                1 => SqlValue::Text(format!("{n}s")),
                2 => SqlValue::Real(n as f64 / 8.0),
                _ => SqlValue::Null,
            })
            .collect();
        values.sort_by(|a, b| a.compare(b));

        let classes: Vec<u8> = values.iter().map(SqlValue::class).collect();
        assert!(classes.is_sorted());
        for pair in values.windows(2) {
            assert_ne!(pair[0].compare(&pair[1]), Ordering::Greater);
        }
    }
}
