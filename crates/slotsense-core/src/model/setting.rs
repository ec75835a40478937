use serde::{Deserialize, Serialize};

/// One hidden payout tier of a machine. The full ordered set is fixed when
/// the machine is defined and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Setting {
    pub id: String,
    pub name: String,
    pub order: u32,
}

impl Setting {
    pub fn new(id: impl Into<String>, name: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            order,
        }
    }
}

/// The standard six-tier ladder ("1" through "6") most A-type machines use.
pub fn default_settings() -> Vec<Setting> {
    (1..=6)
        .map(|n| Setting::new(n.to_string(), format!("Setting {n}"), n))
        .collect()
}
