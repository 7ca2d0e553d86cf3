use header_filter_core::FilterMenuConfig;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListViewConfig {
    /// Row height will not be lower that this value.
    pub minimum_row_height: f32,
    pub striped: bool,
    pub menu: FilterMenuConfig,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        ListViewConfig {
            minimum_row_height: 18.0,
            striped: true,
            menu: FilterMenuConfig::default(),
        }
    }
}
