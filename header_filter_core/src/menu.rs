//! Per-column filter menu: checklist of distinct values with tri-state "(Select all)", turned
//! into a [`ColumnFilters`] on commit.

mod build;
mod config;

use crate::checklist::{CheckState, ChecklistItem, ItemKind};
use crate::column_filters::ColumnFilters;
use crate::registry::FilterRegistry;
use crate::source::FilterSource;
use crate::FilterColumn;
use log::{debug, trace};

pub use config::FilterMenuConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    /// Distinct values are being loaded.
    Building,
    /// Checklist is shown and can be edited.
    Interactive,
    /// Last session ended with apply.
    Committed,
    /// Last session ended without changing filters.
    Cancelled,
}

pub struct FilterMenu {
    column: FilterColumn,
    config: FilterMenuConfig,
    state: MenuState,
    /// First item is always the "(Select all)" row while open.
    items: Vec<ChecklistItem>,
    search: String,
}

impl FilterMenu {
    pub fn new(column: FilterColumn, config: FilterMenuConfig) -> Self {
        FilterMenu {
            column,
            config,
            state: MenuState::Closed,
            items: vec![],
            search: String::new(),
        }
    }

    pub fn column(&self) -> &FilterColumn {
        &self.column
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Interactive
    }

    /// Whether the column currently has a filter, drives the header indicator.
    pub fn is_active(&self, registry: &FilterRegistry) -> bool {
        registry.contains(&self.column.name)
    }

    /// Build a fresh checklist. Distinct values are scanned under the filters of all other
    /// columns, initial check states follow this column's own filter from `registry`.
    pub fn open(&mut self, registry: &FilterRegistry, source: &impl FilterSource) {
        self.state = MenuState::Building;
        self.search.clear();
        self.items = build::checklist(&self.column, &self.config, registry, source);
        self.refresh_select_all();
        self.state = MenuState::Interactive;
        debug!(
            "filter menu for {} opened with {} value row(s)",
            self.column.name,
            self.rows().len()
        );
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Rows not hidden by the search text, with their indices into [`FilterMenu::items`].
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &ChecklistItem)> {
        self.items.iter().enumerate().filter(|(_, item)| !item.hidden)
    }

    pub fn select_all_state(&self) -> CheckState {
        self.items
            .first()
            .map(|item| item.check_state)
            .unwrap_or(CheckState::Unchecked)
    }

    pub fn toggle(&mut self, idx: usize) {
        if let Some(item) = self.items.get(idx) {
            let checked = item.check_state.toggled().is_checked();
            self.set_checked(idx, checked);
        }
    }

    /// Set one row. Setting the "(Select all)" row sets every row, any other row updates the
    /// aggregate state afterwards.
    pub fn set_checked(&mut self, idx: usize, checked: bool) {
        if self.state != MenuState::Interactive {
            trace!("ignoring check change on a closed menu");
            return;
        }
        let Some(item) = self.items.get_mut(idx) else {
            return;
        };
        let state = CheckState::from_checked(checked);
        item.check_state = state;
        if item.kind == ItemKind::SelectAll {
            for row in self.items.iter_mut().skip(1) {
                row.check_state = state;
            }
        }
        self.refresh_select_all();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Hide rows whose label does not contain `text`. Check states are left untouched.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        for item in self.items.iter_mut().skip(1) {
            item.hidden = !item.label.contains(text);
        }
    }

    pub fn checked_count(&self) -> usize {
        self.rows().iter().filter(|item| item.is_checked()).count()
    }

    /// Applying is refused while nothing is checked, an empty view is never installed.
    pub fn can_apply(&self) -> bool {
        self.state == MenuState::Interactive && self.checked_count() > 0
    }

    /// Convert the checklist into filters, using the orientation that lists fewer rows:
    /// a whitelist of checked rows when more rows are unchecked, otherwise an exclude list of
    /// unchecked rows. Ties go to the exclude list.
    pub fn build_filters(&self) -> ColumnFilters {
        let checked = self.checked_count();
        let unchecked = self.rows().len() - checked;
        let revert = unchecked > checked;

        let mut filters = ColumnFilters::new(&self.column.name);
        for item in self.rows() {
            if item.is_checked() != revert {
                continue;
            }
            if let Some(filter) = item.to_filter(&self.column.name) {
                filters.add_filter(filter.with_revert(revert));
            }
        }
        filters
    }

    /// Commit the checklist into `registry` and install the combined predicate on `source`.
    /// Returns false, changing nothing, when the menu is not open or nothing is checked.
    pub fn apply(
        &mut self,
        registry: &mut FilterRegistry,
        source: &mut impl FilterSource,
    ) -> bool {
        if !self.can_apply() {
            debug!("filter menu for {}: nothing to apply", self.column.name);
            return false;
        }
        let filters = self.build_filters();
        trace!(
            "filter menu for {}: {} filter(s) {:?}",
            self.column.name,
            filters.filters().len(),
            filters.to_sql()
        );
        registry.insert(filters);
        registry.install(source);
        self.close(MenuState::Committed);
        true
    }

    pub fn cancel(&mut self) {
        if self.state == MenuState::Interactive {
            self.close(MenuState::Cancelled);
        }
    }

    /// Drop this column's filter and reinstall the remaining ones.
    pub fn clear(&mut self, registry: &mut FilterRegistry, source: &mut impl FilterSource) {
        if registry.remove(&self.column.name).is_some() {
            debug!("filter on {} cleared", self.column.name);
        }
        registry.install(source);
        self.cancel();
    }

    fn rows(&self) -> &[ChecklistItem] {
        self.items.get(1..).unwrap_or(&[])
    }

    fn refresh_select_all(&mut self) {
        let total = self.rows().len();
        if total == 0 {
            return;
        }
        let checked = self.checked_count();
        let state = if checked == 0 {
            CheckState::Unchecked
        } else if checked == total {
            CheckState::Checked
        } else {
            CheckState::PartiallyChecked
        };
        if let Some(select_all) = self.items.first_mut() {
            select_all.check_state = state;
        }
    }

    fn close(&mut self, state: MenuState) {
        self.items.clear();
        self.search.clear();
        self.state = state;
    }
}
