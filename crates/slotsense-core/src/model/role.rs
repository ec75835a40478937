use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A countable symbol or event whose per-game occurrence rate may depend on
/// the active setting.
///
/// `probabilities` maps setting id to the rate in `[0, 1]`. A missing entry,
/// zero, or anything at or above one means "no data" for that pair; the
/// inference engine skips such pairs. Only roles with `has_setting_diff`
/// participate in inference at all, the rest are informational.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub probabilities: BTreeMap<String, f64>,
    pub has_setting_diff: bool,
    pub display_order: u32,
}

impl Role {
    pub fn probability_for(&self, setting_id: &str) -> Option<f64> {
        self.probabilities.get(setting_id).copied()
    }
}
