use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterMenuConfig {
    /// Show denominations with vulgar fractions (`½`, `2¼`).
    pub convert_fraction: bool,
    pub select_all_label: String,
    pub blanks_label: String,
    pub text_label: String,
    pub images_label: String,
    pub data_label: String,
    /// Appended to negative years.
    pub bc_suffix: String,
}

impl Default for FilterMenuConfig {
    fn default() -> Self {
        FilterMenuConfig {
            convert_fraction: true,
            select_all_label: "(Select all)".into(),
            blanks_label: "(Blanks)".into(),
            text_label: "(Text)".into(),
            images_label: "(Images)".into(),
            data_label: "(Data)".into(),
            bc_suffix: "BC".into(),
        }
    }
}
