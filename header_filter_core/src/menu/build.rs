use super::FilterMenuConfig;
use crate::checklist::{CheckState, ChecklistItem, ItemIcon};
use crate::column_filters::ColumnFilters;
use crate::field::{FieldType, Status};
use crate::filter::{blank_sql, not_blank_sql};
use crate::format::{number_with_fraction, year_label};
use crate::registry::{and_sql, FilterRegistry};
use crate::source::{FilterSource, SourceError};
use crate::FilterColumn;
use log::warn;
use std::collections::HashSet;

/// Filter the column had before the menu was opened.
struct Prior<'a> {
    filters: Option<&'a ColumnFilters>,
    values: HashSet<&'a str>,
    revert: bool,
}

impl<'a> Prior<'a> {
    fn new(filters: Option<&'a ColumnFilters>) -> Self {
        Prior {
            filters,
            values: filters.map(|f| f.values().collect()).unwrap_or_default(),
            revert: filters.is_some_and(ColumnFilters::has_revert),
        }
    }

    /// A row named by a whitelist starts checked, a row named by an exclude list unchecked.
    fn state_for(&self, listed: bool) -> CheckState {
        CheckState::from_checked(listed == self.revert)
    }

    fn has_blank(&self) -> bool {
        self.filters.is_some_and(ColumnFilters::has_blank)
    }

    fn has_data(&self) -> bool {
        self.filters.is_some_and(ColumnFilters::has_data)
    }
}

pub(super) fn checklist(
    column: &FilterColumn,
    config: &FilterMenuConfig,
    registry: &FilterRegistry,
    source: &impl FilterSource,
) -> Vec<ChecklistItem> {
    let prior = Prior::new(registry.get(&column.name));
    let others = registry.to_sql_except(&column.name);

    let mut items = vec![ChecklistItem::select_all(&config.select_all_label)];
    let has_blanks = if column.ty.is_free_form() {
        probe_free_form(column, config, &prior, &others, source, &mut items)
    } else {
        scan_values(column, config, &prior, &others, source, &mut items)
    };
    if has_blanks {
        items.push(ChecklistItem::blanks(
            &config.blanks_label,
            prior.state_for(prior.has_blank()),
        ));
    }
    items
}

/// One row per distinct non-blank value. Returns whether blank rows were seen.
fn scan_values(
    column: &FilterColumn,
    config: &FilterMenuConfig,
    prior: &Prior,
    others: &str,
    source: &impl FilterSource,
    items: &mut Vec<ChecklistItem>,
) -> bool {
    let values = fail_soft(source.distinct_values(&column.name, others), &column.name);

    let mut has_blanks = false;
    let mut rows = Vec::with_capacity(values.len());
    for raw in values {
        let Some(key) = raw.to_key().filter(|key| !key.is_empty()) else {
            has_blanks = true;
            continue;
        };
        let state = prior.state_for(prior.values.contains(key.as_str()));
        let item = match column.ty {
            FieldType::Year => {
                ChecklistItem::value(year_label(&raw, &config.bc_suffix), key, raw, state)
            }
            FieldType::Denomination => {
                let (label, _) = number_with_fraction(&key, config.convert_fraction);
                ChecklistItem::value(label, key, raw, state)
            }
            FieldType::Status => {
                let status = key.parse::<Status>().ok();
                let label = status.map_or_else(|| key.clone(), |s| s.title().to_string());
                ChecklistItem::value(label, key, raw, state)
                    .with_icon(status.map(ItemIcon::Status))
            }
            _ => {
                let icon = source
                    .lookup_icon(&column.name, &key)
                    .map(ItemIcon::Reference);
                ChecklistItem::value(key.clone(), key, raw, state).with_icon(icon)
            }
        };
        rows.push(item);
    }

    match column.ty {
        FieldType::Status => rows.sort_by_cached_key(|item| source.status_rank(&item.value)),
        FieldType::Year | FieldType::Denomination => {
            rows.sort_by(|a, b| a.sort_key.compare(&b.sort_key))
        }
        _ => rows.sort_by(|a, b| a.label.cmp(&b.label)),
    }
    items.extend(rows);
    has_blanks
}

/// Free text and binary content is not enumerated: only "has data" and "is blank" are offered.
fn probe_free_form(
    column: &FilterColumn,
    config: &FilterMenuConfig,
    prior: &Prior,
    others: &str,
    source: &impl FilterSource,
    items: &mut Vec<ChecklistItem>,
) -> bool {
    let blank_rows = and_sql(others, &blank_sql(&column.name));
    let data_rows = and_sql(others, &not_blank_sql(&column.name));

    let has_blanks = fail_soft(source.exists(&blank_rows), &column.name);
    if fail_soft(source.exists(&data_rows), &column.name) {
        let label = match column.ty {
            FieldType::Text => &config.text_label,
            FieldType::Image => &config.images_label,
            _ => &config.data_label,
        };
        items.push(ChecklistItem::data(label, prior.state_for(prior.has_data())));
    }
    has_blanks
}

fn fail_soft<T: Default>(result: Result<T, SourceError>, column: &str) -> T {
    result.unwrap_or_else(|err| {
        warn!("filter menu for {column}: {err}, treating as no rows");
        T::default()
    })
}
