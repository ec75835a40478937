use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use slotsense_cli::config::{SessionRunConfig, SimulateConfig, parse_count_override};
use slotsense_cli::logging::init_logging;
use slotsense_cli::report::{SessionReport, print_report};
use slotsense_cli::simulate::simulate_counts;
use slotsense_core::model::machine::MachineData;
use slotsense_core::model::session::CountSession;

/// Setting-inference harness for pachislot counting sessions.
#[derive(Debug, Parser)]
#[command(
    name = "slotsense",
    author,
    version,
    about = "Infers the likely machine setting from observed symbol counts"
)]
struct Cli {
    /// Path to the YAML session configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "session.yaml")]
    config: PathBuf,

    /// Override the total game counter reading.
    #[arg(long, value_name = "GAMES")]
    games: Option<u32>,

    /// Override an observed count (repeatable), e.g. --count grape=160.
    #[arg(long = "count", value_name = "ROLE=COUNT")]
    counts: Vec<String>,

    /// Simulate a session at this true setting instead of replaying counts.
    #[arg(long, value_name = "SETTING")]
    simulate_setting: Option<String>,

    /// RNG seed for simulation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Write the full report as JSON to this path.
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Exit after validating the configuration (no analysis is run).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = SessionRunConfig::from_path(&cli.config)?;

    if let Some(games) = cli.games {
        config.total_games = games;
    }

    for raw in &cli.counts {
        let (role, count) = parse_count_override(raw)?;
        config.counts.insert(role, count);
    }

    if let Some(setting) = cli.simulate_setting {
        let seed = cli.seed.or(config.simulate.as_ref().and_then(|s| s.seed));
        config.simulate = Some(SimulateConfig { setting, seed });
    } else if let (Some(simulate), Some(seed)) = (config.simulate.as_mut(), cli.seed) {
        simulate.seed = Some(seed);
    }

    if let Some(json) = cli.json {
        config.output.json = Some(json);
    }

    config.validate()?;

    if cli.validate_only {
        println!(
            "Configuration at {} is valid ({} games, {} configured counts).",
            cli.config.display(),
            config.total_games,
            config.counts.len()
        );
        return Ok(());
    }

    let _logging_guard = init_logging(&config.logging)?;

    let machine_json = fs::read_to_string(&config.machine).with_context(|| {
        format!(
            "reading machine definition at {}",
            config.machine.display()
        )
    })?;
    let machine = MachineData::from_json(&machine_json).with_context(|| {
        format!(
            "parsing machine definition at {}",
            config.machine.display()
        )
    })?;

    let mut session = CountSession::start(&machine, config.start_games);
    session.set_game_count(config.total_games);

    let counts = match &config.simulate {
        Some(simulate) => {
            let seed = simulate.seed.unwrap_or(0);
            info!(
                setting = %simulate.setting,
                seed,
                games = session.effective_games(),
                "simulating session"
            );
            let counts =
                simulate_counts(&machine, &simulate.setting, session.effective_games(), seed)?;
            println!(
                "Simulated {} games at setting {} (seed {seed})",
                session.effective_games(),
                simulate.setting
            );
            counts
        }
        None => config.counts.clone(),
    };

    for (role_id, count) in &counts {
        session.set_count(role_id, *count);
    }
    session.update_results(&machine);

    let best = session
        .results
        .iter()
        .max_by(|a, b| a.probability.total_cmp(&b.probability));
    if let Some(best) = best {
        info!(
            machine = %machine.name,
            games = session.effective_games(),
            best_setting = %best.setting_id,
            best_probability = best.probability,
            "analysis complete"
        );
    }

    print_report(&machine, &session);

    if let Some(path) = &config.output.json {
        SessionReport::build(&session).write_json(path)?;
        println!("\nJSON report: {}", path.display());
    }

    Ok(())
}
