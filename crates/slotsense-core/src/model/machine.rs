use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::role::Role;
use crate::model::setting::{Setting, default_settings};
use crate::rate::denominator_to_probability;

/// Broad machine category as printed on spec sheets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MachineType {
    #[serde(rename = "A-type")]
    AType,
    #[serde(rename = "AT")]
    At,
    #[serde(rename = "ART")]
    Art,
}

impl MachineType {
    pub const fn as_str(self) -> &'static str {
        match self {
            MachineType::AType => "A-type",
            MachineType::At => "AT",
            MachineType::Art => "ART",
        }
    }
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MachineType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "A-type" | "A" => Ok(MachineType::AType),
            "AT" => Ok(MachineType::At),
            "ART" => Ok(MachineType::Art),
            _ => Err(()),
        }
    }
}

/// A machine definition: the ordered setting ladder plus the role table whose
/// rates drive inference. Produced by external machine-data management; the
/// core only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MachineData {
    pub id: String,
    pub name: String,
    pub machine_type: MachineType,
    pub settings: Vec<Setting>,
    pub roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl MachineData {
    pub fn role(&self, role_id: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == role_id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Bundled A-type definitions, handy for demos and tests. Rates are entered
/// in denominator notation exactly as published.
pub fn preset_machines() -> Vec<MachineData> {
    vec![
        MachineData {
            id: "preset_my_juggler_v".to_string(),
            name: "My Juggler V".to_string(),
            machine_type: MachineType::AType,
            settings: default_settings(),
            roles: vec![
                diff_role("grape", "Grape", 1, [6.49, 6.49, 6.49, 6.49, 6.35, 6.18]),
                diff_role(
                    "solo_reg",
                    "Solo REG",
                    2,
                    [512.0, 448.0, 394.0, 346.0, 287.0, 240.0],
                ),
                diff_role(
                    "cherry_reg",
                    "Cherry REG",
                    3,
                    [1365.0, 1213.0, 1092.0, 993.0, 910.0, 840.0],
                ),
            ],
            author: Some("preset".to_string()),
            version: Some("1.0".to_string()),
        },
        MachineData {
            id: "preset_im_juggler_ex".to_string(),
            name: "Im Juggler EX".to_string(),
            machine_type: MachineType::AType,
            settings: default_settings(),
            roles: vec![
                diff_role("grape", "Grape", 1, [6.49, 6.49, 6.49, 6.49, 6.35, 6.18]),
                diff_role(
                    "solo_big",
                    "Solo BIG",
                    2,
                    [409.0, 399.0, 381.0, 372.0, 352.0, 334.0],
                ),
                diff_role(
                    "solo_reg",
                    "Solo REG",
                    3,
                    [528.0, 489.0, 455.0, 431.0, 373.0, 327.0],
                ),
            ],
            author: Some("preset".to_string()),
            version: Some("1.0".to_string()),
        },
    ]
}

fn diff_role(id: &str, name: &str, display_order: u32, denominators: [f64; 6]) -> Role {
    let probabilities = denominators
        .iter()
        .enumerate()
        .map(|(index, d)| ((index + 1).to_string(), denominator_to_probability(*d)))
        .collect();

    Role {
        id: id.to_string(),
        name: name.to_string(),
        probabilities,
        has_setting_diff: true,
        display_order,
    }
}
