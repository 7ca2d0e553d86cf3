mod config;
mod filter_popup;
mod state;

use crate::backend::RowSource;
use egui::{Button, PopupCloseBehavior, Response, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use filter_popup::PopupAction;
use header_filter_core::{FilterColumn, FilterMenu, FilterRegistry};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tap::TapFallible;

pub use config::ListViewConfig;

/// Table of rows with a filter menu button in every column header.
pub struct ListView {
    columns: Vec<FilterColumn>,
    registry: FilterRegistry,
    state: state::State,
    config: ListViewConfig,
}

/// Part of the view that survives restarts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListViewState {
    pub filters: FilterRegistry,
}

impl ListView {
    pub fn new(columns: impl IntoIterator<Item = FilterColumn>) -> Self {
        ListView {
            columns: columns.into_iter().collect(),
            registry: FilterRegistry::new(),
            state: state::State::default(),
            config: ListViewConfig::default(),
        }
    }

    pub fn config_mut(&mut self) -> &mut ListViewConfig {
        &mut self.config
    }

    pub fn columns(&self) -> &[FilterColumn] {
        &self.columns
    }

    pub fn registry(&self) -> &FilterRegistry {
        &self.registry
    }

    pub fn clear_all_filters(&mut self, source: &mut impl RowSource) {
        debug!("clearing {} column filter(s)", self.registry.len());
        self.registry.clear();
        self.registry.install(source);
        self.state.menu = None;
        self.state.rows_dirty = true;
    }

    pub fn save_state(&self) -> ListViewState {
        ListViewState {
            filters: self.registry.clone(),
        }
    }

    /// Restore saved filters and install them on `source`.
    pub fn load_state(&mut self, state: ListViewState, source: &mut impl RowSource) {
        self.registry = state.filters;
        self.registry.install(source);
        self.state.menu = None;
        self.state.rows_dirty = true;
    }

    pub fn show(&mut self, source: &mut impl RowSource, ui: &mut Ui) -> Response {
        self.reload_if_dirty(&*source);

        let ListView {
            columns,
            registry,
            state,
            config,
        } = self;

        let resp = ui
            .vertical(|ui| {
                ui.label(format!("{} row(s)", state.row_count));
                ScrollArea::horizontal().show(ui, |ui| {
                    let mut builder = TableBuilder::new(ui)
                        .striped(config.striped)
                        .resizable(true);
                    for _ in columns.iter() {
                        builder = builder.column(Column::auto().at_least(60.0));
                    }
                    builder
                        .header(config.minimum_row_height + 4.0, |mut header| {
                            for (idx, column) in columns.iter().enumerate() {
                                header.col(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.strong(column.title.as_str());
                                        show_filter_button(
                                            idx, column, registry, state, config, source, ui,
                                        );
                                    });
                                });
                            }
                        })
                        .body(|body| {
                            body.rows(config.minimum_row_height, state.rows.len(), |mut row| {
                                let Some(values) = state.rows.get(row.index()) else {
                                    return;
                                };
                                for value in values {
                                    row.col(|ui| {
                                        ui.label(value.as_str());
                                    });
                                }
                            });
                        });
                });
            })
            .response;

        self.reload_if_dirty(&*source);
        resp
    }

    fn reload_if_dirty(&mut self, source: &impl RowSource) {
        if !self.state.rows_dirty {
            return;
        }
        let names: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        self.state.rows = source
            .rows(&names)
            .tap_err(|err| warn!("loading rows failed: {err}"))
            .unwrap_or_default();
        self.state.row_count = source
            .row_count()
            .tap_err(|err| warn!("counting rows failed: {err}"))
            .unwrap_or(self.state.rows.len());
        self.state.rows_dirty = false;
    }
}

#[allow(clippy::too_many_arguments)]
fn show_filter_button(
    idx: usize,
    column: &FilterColumn,
    registry: &mut FilterRegistry,
    state: &mut state::State,
    config: &ListViewConfig,
    source: &mut impl RowSource,
    ui: &mut Ui,
) {
    let popup_id = ui.make_persistent_id(("header_filter", idx));
    let button = ui
        .add(Button::new("⏷").small().selected(registry.contains(&column.name)))
        .on_hover_text("Filter items");

    if button.clicked() {
        let mut menu = FilterMenu::new(column.clone(), config.menu.clone());
        menu.open(registry, &*source);
        state.menu = Some(menu);
        ui.memory_mut(|mem| mem.open_popup(popup_id));
    }

    let Some(menu) = state
        .menu
        .as_mut()
        .filter(|menu| menu.column().name == column.name)
    else {
        return;
    };
    let is_active = menu.is_active(registry);
    let mut action = egui::popup_below_widget(
        ui,
        popup_id,
        &button,
        PopupCloseBehavior::CloseOnClickOutside,
        |ui| filter_popup::show(menu, is_active, ui),
    )
    .flatten();
    if action.is_none() && !ui.memory(|mem| mem.is_popup_open(popup_id)) {
        action = Some(PopupAction::Cancel);
    }

    match action {
        Some(PopupAction::Apply) => {
            if menu.apply(registry, source) {
                state.rows_dirty = true;
            }
        }
        Some(PopupAction::Clear) => {
            menu.clear(registry, source);
            state.rows_dirty = true;
        }
        Some(PopupAction::Cancel) => menu.cancel(),
        None => return,
    }
    state.menu = None;
    ui.memory_mut(|mem| mem.close_popup());
}
