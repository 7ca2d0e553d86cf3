use crate::field::Status;
use crate::filter::Filter;
use crate::source::SqlValue;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    Checked,
    Unchecked,
    PartiallyChecked,
}

impl CheckState {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    /// Partially checked counts as checked, matching how a user reads the box.
    pub fn is_checked(self) -> bool {
        self != CheckState::Unchecked
    }

    pub fn toggled(self) -> Self {
        match self {
            CheckState::Checked => CheckState::Unchecked,
            CheckState::Unchecked | CheckState::PartiallyChecked => CheckState::Checked,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Aggregate "(Select all)" control, always the first row.
    SelectAll,
    Value,
    /// NULL or empty rows.
    Blanks,
    /// Any non-blank content of a free-form column.
    Data,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ItemIcon {
    Status(Status),
    /// Icon provided by the reference data collaborator.
    Reference(String),
}

/// One row of a filter menu checklist.
#[derive(Clone, Debug, PartialEq)]
pub struct ChecklistItem {
    pub kind: ItemKind,
    pub label: String,
    /// Raw comparison key, meaningful for `ItemKind::Value` only.
    pub value: String,
    pub sort_key: SqlValue,
    pub icon: Option<ItemIcon>,
    pub check_state: CheckState,
    pub hidden: bool,
}

impl ChecklistItem {
    fn sentinel(kind: ItemKind, label: &str, check_state: CheckState) -> Self {
        ChecklistItem {
            kind,
            label: label.to_string(),
            value: label.to_string(),
            sort_key: SqlValue::Null,
            icon: None,
            check_state,
            hidden: false,
        }
    }

    pub fn select_all(label: &str) -> Self {
        Self::sentinel(ItemKind::SelectAll, label, CheckState::Checked)
    }

    pub fn blanks(label: &str, check_state: CheckState) -> Self {
        Self::sentinel(ItemKind::Blanks, label, check_state)
    }

    pub fn data(label: &str, check_state: CheckState) -> Self {
        Self::sentinel(ItemKind::Data, label, check_state)
    }

    pub fn value(
        label: impl Into<String>,
        value: impl Into<String>,
        sort_key: SqlValue,
        check_state: CheckState,
    ) -> Self {
        ChecklistItem {
            kind: ItemKind::Value,
            label: label.into(),
            value: value.into(),
            sort_key,
            icon: None,
            check_state,
            hidden: false,
        }
    }

    pub fn with_icon(mut self, icon: Option<ItemIcon>) -> Self {
        self.icon = icon;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.check_state.is_checked()
    }

    /// Filter primitive this row stands for, `None` for the aggregate row.
    pub fn to_filter(&self, column: &str) -> Option<Filter> {
        match self.kind {
            ItemKind::SelectAll => None,
            ItemKind::Value => Some(Filter::value(column, &self.value)),
            ItemKind::Blanks => Some(Filter::blank(column)),
            ItemKind::Data => Some(Filter::data(column)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling() {
        assert_eq!(CheckState::Checked.toggled(), CheckState::Unchecked);
        assert_eq!(CheckState::Unchecked.toggled(), CheckState::Checked);
        assert_eq!(CheckState::PartiallyChecked.toggled(), CheckState::Checked);
        assert!(CheckState::PartiallyChecked.is_checked());
    }

    #[test]
    fn rows_map_to_primitives() {
        let value = ChecklistItem::value("½", "0.5", SqlValue::Real(0.5), CheckState::Checked);
        assert_eq!(value.to_filter("value"), Some(Filter::value("value", "0.5")));
        assert_eq!(
            ChecklistItem::blanks("(Blanks)", CheckState::Checked).to_filter("value"),
            Some(Filter::blank("value"))
        );
        assert_eq!(
            ChecklistItem::data("(Text)", CheckState::Checked).to_filter("note"),
            Some(Filter::data("note"))
        );
        assert_eq!(ChecklistItem::select_all("(Select all)").to_filter("note"), None);
    }
}
