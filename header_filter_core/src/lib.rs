use serde::{Deserialize, Serialize};

pub mod checklist;
pub mod column_filters;
pub mod field;
pub mod filter;
pub mod format;
pub mod menu;
pub mod registry;
pub mod source;

pub use checklist::{CheckState, ChecklistItem, ItemIcon, ItemKind};
pub use column_filters::ColumnFilters;
pub use field::{FieldType, Status};
pub use filter::Filter;
pub use menu::{FilterMenu, FilterMenuConfig, MenuState};
pub use registry::FilterRegistry;
pub use source::{FilterSource, SourceError, SqlValue};

/// Column as seen by the filter engine: storage name used in predicates, displayed title and
/// the field type that decides how distinct values are offered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterColumn {
    pub name: String,
    pub title: String,
    pub ty: FieldType,
}

impl FilterColumn {
    pub fn new(name: impl AsRef<str>, ty: FieldType) -> Self {
        FilterColumn {
            name: name.as_ref().to_string(),
            title: name.as_ref().to_string(),
            ty,
        }
    }

    pub fn title(mut self, title: impl AsRef<str>) -> Self {
        self.title = title.as_ref().to_string();
        self
    }
}
