use header_filter_core::FilterMenu;

pub(super) struct State {
    pub(super) rows: Vec<Vec<String>>,
    pub(super) row_count: usize,
    /// Rows must be fetched again before the next frame, e.g. after a filter change.
    pub(super) rows_dirty: bool,
    /// Menu of the header popup currently shown, only one can be open.
    pub(super) menu: Option<FilterMenu>,
}

impl Default for State {
    fn default() -> Self {
        State {
            rows: vec![],
            row_count: 0,
            rows_dirty: true,
            menu: None,
        }
    }
}
