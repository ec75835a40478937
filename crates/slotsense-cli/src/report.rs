//! Session report rendering: posterior table, per-role rates, verdict.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use slotsense_core::infer::engine::SettingProbability;
use slotsense_core::infer::verdict::summarize;
use slotsense_core::model::machine::MachineData;
use slotsense_core::model::session::CountSession;
use slotsense_core::rate::{format_probability, probability_to_denominator};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report at {path}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable snapshot of one completed analysis run.
#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub machine: String,
    pub total_games: u32,
    pub effective_games: i64,
    pub counts: BTreeMap<String, u32>,
    pub results: Vec<SettingProbability>,
    pub verdict_label: String,
    pub verdict_color: String,
}

impl SessionReport {
    pub fn build(session: &CountSession) -> Self {
        let verdict = summarize(&session.results);
        Self {
            machine: session.machine_name.clone(),
            total_games: session.total_games,
            effective_games: session.effective_games(),
            counts: session.counts.clone(),
            results: session.results.clone(),
            verdict_label: verdict.label.to_string(),
            verdict_color: verdict.color.to_string(),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let file = File::create(path).map_err(|source| ReportError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|source| ReportError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Ok(())
    }
}

/// Prints the human-readable report to stdout.
pub fn print_report(machine: &MachineData, session: &CountSession) {
    println!(
        "{} ({}) — {} games observed",
        machine.name,
        machine.machine_type,
        session.effective_games()
    );

    println!("\nRole counts:");
    let mut roles: Vec<_> = machine.roles.iter().collect();
    roles.sort_by_key(|role| role.display_order);
    for role in roles {
        let observed = session.current_rate(&role.id);
        println!(
            "  {:<12} {:>5}  observed {:<10}",
            role.name,
            session.count(&role.id),
            format_probability(observed, 2),
        );
        if let Some(ladder) = rate_ladder(machine, &role.id) {
            println!("               published {ladder}");
        }
    }

    println!("\nPosterior over settings:");
    for row in &session.results {
        println!(
            "  {:<12} {:>6.2}%  (relative likelihood {:.3})",
            row.setting_name,
            row.probability * 100.0,
            row.likelihood,
        );
    }

    let verdict = summarize(&session.results);
    println!("\nVerdict: {} [{}]", verdict.label, verdict.color);
}

/// One-line expected-rate reference for a role across all settings, e.g. for
/// comparing an observed 1/6.25 against the published ladder.
pub fn rate_ladder(machine: &MachineData, role_id: &str) -> Option<String> {
    let role = machine.role(role_id)?;
    let entries: Vec<String> = machine
        .settings
        .iter()
        .map(|setting| {
            let rate = role.probability_for(&setting.id).unwrap_or(0.0);
            if rate > 0.0 {
                format!("{}: 1/{:.2}", setting.id, probability_to_denominator(rate))
            } else {
                format!("{}: -", setting.id)
            }
        })
        .collect();
    Some(entries.join("  "))
}
