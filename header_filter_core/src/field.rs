use serde::{Deserialize, Serialize};

/// Storage kind of a collection field.
#[derive(
    strum::EnumIter,
    strum::Display,
    Debug,
    PartialEq,
    Eq,
    Copy,
    Clone,
    Default,
    Serialize,
    Deserialize,
)]
pub enum FieldType {
    #[default]
    String,
    Number,
    Money,
    Date,
    Year,
    Status,
    Denomination,
    /// Multi-line free text, individual values are never enumerated.
    Text,
    Image,
    Binary,
}

impl FieldType {
    /// Free-form columns are probed for blank / non-blank rows instead of listing values.
    pub fn is_free_form(self) -> bool {
        matches!(self, FieldType::Text | FieldType::Image | FieldType::Binary)
    }
}

/// Collection item status, declared in display order.
#[derive(
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
    Debug,
    PartialEq,
    Eq,
    Copy,
    Clone,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Demo,
    Pass,
    Owned,
    Ordered,
    Sale,
    Sold,
    Missing,
    Wish,
    Bidding,
    Duplicate,
    Replacement,
}

impl Status {
    pub fn rank(self) -> i32 {
        self as i32
    }

    pub fn title(self) -> &'static str {
        match self {
            Status::Demo => "Demo",
            Status::Pass => "Pass",
            Status::Owned => "Owned",
            Status::Ordered => "Ordered",
            Status::Sale => "For sale",
            Status::Sold => "Sold",
            Status::Missing => "Missing",
            Status::Wish => "Wish",
            Status::Bidding => "Bidding",
            Status::Duplicate => "Duplicate",
            Status::Replacement => "Replacement",
        }
    }

    /// Rank of a stored status value, unknown values sort after every known status.
    pub fn rank_of(value: &str) -> i32 {
        value
            .parse::<Status>()
            .map(Status::rank)
            .unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn status_round_trips_through_stored_value() {
        for status in Status::iter() {
            let stored: &'static str = status.into();
            assert_eq!(stored.parse::<Status>(), Ok(status));
            assert_eq!(status.to_string(), stored);
        }
    }

    #[test]
    fn ranks_follow_declaration_order() {
        let ranks: Vec<i32> = Status::iter().map(Status::rank).collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Status::rank_of("owned"), Status::Owned.rank());
        assert_eq!(Status::rank_of("lost in the mail"), i32::MAX);
    }

    #[test]
    fn free_form_types() {
        let free_form: Vec<FieldType> = FieldType::iter().filter(|t| t.is_free_form()).collect();
        assert_eq!(
            free_form,
            vec![FieldType::Text, FieldType::Image, FieldType::Binary]
        );
    }
}
