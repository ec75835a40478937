use slotsense_core::infer::verdict::summarize;
use slotsense_core::model::machine::preset_machines;
use slotsense_core::model::session::CountSession;
use slotsense_core::rate::format_probability;

#[test]
fn full_session_flow_over_preset_table() {
    let machine = preset_machines().remove(0);
    let mut session = CountSession::start(&machine, 0);

    // Fresh session: no evidence, neutral verdict.
    let verdict = summarize(&session.results);
    assert_eq!(verdict.label, "still determining");

    // An evening at roughly setting-6 rates: grape 1/6.18, solo REG 1/240,
    // cherry REG 1/840 over 6000 games.
    session.set_game_count(6000);
    session.set_count("grape", 971);
    session.set_count("solo_reg", 25);
    session.set_count("cherry_reg", 7);
    session.update_results(&machine);

    let sum: f64 = session.results.iter().map(|row| row.probability).sum();
    assert!((sum - 1.0).abs() < 1e-6);

    let best = session
        .results
        .iter()
        .max_by(|a, b| a.probability.total_cmp(&b.probability))
        .unwrap();
    assert_eq!(best.setting_id, "6");

    let high_mass: f64 = session
        .results
        .iter()
        .filter(|row| row.setting_id.parse::<i64>().unwrap() >= 5)
        .map(|row| row.probability)
        .sum();
    assert!(high_mass > 0.5);

    let verdict = summarize(&session.results);
    assert!(verdict.label.starts_with("high setting"));
}

#[test]
fn low_rate_session_leans_low() {
    let machine = preset_machines().remove(0);
    let mut session = CountSession::start(&machine, 0);

    // Setting-1 rates: grape 1/6.49, solo REG 1/512, cherry REG 1/1365.
    session.set_game_count(8000);
    session.set_count("grape", 1233);
    session.set_count("solo_reg", 16);
    session.set_count("cherry_reg", 6);
    session.update_results(&machine);

    let low_mass: f64 = session
        .results
        .iter()
        .filter(|row| row.setting_id.parse::<i64>().unwrap() <= 2)
        .map(|row| row.probability)
        .sum();
    let high_mass: f64 = session
        .results
        .iter()
        .filter(|row| row.setting_id.parse::<i64>().unwrap() >= 5)
        .map(|row| row.probability)
        .sum();
    assert!(low_mass > high_mass);
}

#[test]
fn observed_rates_format_in_denominator_notation() {
    let machine = preset_machines().remove(0);
    let mut session = CountSession::start(&machine, 0);
    session.set_game_count(1000);
    session.set_count("grape", 160);

    assert_eq!(format_probability(session.current_rate("grape"), 2), "1/6.25");
    assert_eq!(format_probability(session.current_rate("solo_reg"), 2), "-");
}
