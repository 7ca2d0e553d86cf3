use serde::{Deserialize, Serialize};

/// One criterion over a single column.
///
/// `revert == false` builds an exclude filter: rows matching the criterion are filtered out.
/// `revert == true` builds a whitelist filter: only rows matching the criterion are kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Filter {
    /// Exact, case-sensitive string equality with `value`.
    Value {
        column: String,
        value: String,
        revert: bool,
    },
    /// Row has a non-blank value.
    Data { column: String, revert: bool },
    /// Row is NULL or an empty string.
    Blank { column: String, revert: bool },
}

impl Filter {
    pub fn value(column: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        Filter::Value {
            column: column.as_ref().to_string(),
            value: value.as_ref().to_string(),
            revert: false,
        }
    }

    pub fn data(column: impl AsRef<str>) -> Self {
        Filter::Data {
            column: column.as_ref().to_string(),
            revert: false,
        }
    }

    pub fn blank(column: impl AsRef<str>) -> Self {
        Filter::Blank {
            column: column.as_ref().to_string(),
            revert: false,
        }
    }

    pub fn with_revert(mut self, revert: bool) -> Self {
        self.set_revert(revert);
        self
    }

    pub fn set_revert(&mut self, revert: bool) {
        match self {
            Filter::Value { revert: r, .. }
            | Filter::Data { revert: r, .. }
            | Filter::Blank { revert: r, .. } => *r = revert,
        }
    }

    pub fn column(&self) -> &str {
        match self {
            Filter::Value { column, .. }
            | Filter::Data { column, .. }
            | Filter::Blank { column, .. } => column,
        }
    }

    /// Comparison value, only value filters carry one.
    pub fn value_str(&self) -> Option<&str> {
        match self {
            Filter::Value { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_revert(&self) -> bool {
        match self {
            Filter::Value { revert, .. }
            | Filter::Data { revert, .. }
            | Filter::Blank { revert, .. } => *revert,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Filter::Blank { .. })
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Filter::Data { .. })
    }

    /// Boolean predicate fragment for this filter alone.
    pub fn to_sql(&self) -> String {
        match self {
            Filter::Value {
                column,
                value,
                revert: true,
            } => format!("{column}={}", quote(value)),
            Filter::Value {
                column,
                value,
                revert: false,
            } => format!("{column}<>{}", quote(value)),
            Filter::Data { column, revert: true } | Filter::Blank { column, revert: false } => {
                not_blank_sql(column)
            }
            Filter::Data { column, revert: false } | Filter::Blank { column, revert: true } => {
                blank_sql(column)
            }
        }
    }
}

/// SQL string literal, apostrophes doubled.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

pub(crate) fn blank_sql(column: &str) -> String {
    format!("ifnull({column},'')=''")
}

pub(crate) fn not_blank_sql(column: &str) -> String {
    format!("ifnull({column},'')<>''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Filter::value("country", "Peru"), "country<>'Peru'")]
    #[case(Filter::value("country", "Peru").with_revert(true), "country='Peru'")]
    #[case(Filter::data("note"), "ifnull(note,'')=''")]
    #[case(Filter::data("note").with_revert(true), "ifnull(note,'')<>''")]
    #[case(Filter::blank("note"), "ifnull(note,'')<>''")]
    #[case(Filter::blank("note").with_revert(true), "ifnull(note,'')=''")]
    fn fragments(#[case] filter: Filter, #[case] expected: &str) {
        assert_eq!(filter.to_sql(), expected);
    }

    #[test]
    fn apostrophes_are_doubled() {
        let filter = Filter::value("mint", "Saint-Pierre d'Or").with_revert(true);
        assert_eq!(filter.to_sql(), "mint='Saint-Pierre d''Or'");
        assert_eq!(filter.value_str(), Some("Saint-Pierre d'Or"));
    }

    #[test]
    fn capabilities() {
        let blank = Filter::blank("year");
        assert!(blank.is_blank() && !blank.is_data() && !blank.is_revert());
        assert_eq!(blank.value_str(), None);

        let mut data = Filter::data("year");
        data.set_revert(true);
        assert!(data.is_data() && data.is_revert());
        assert_eq!(data.column(), "year");
    }
}
