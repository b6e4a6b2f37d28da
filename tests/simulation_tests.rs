use curio_quant::config::SimulationConfig;
use curio_quant::simulation;

#[test]
fn fixed_seed_reproduces_percentiles() {
    let cfg = SimulationConfig::default();
    let a = simulation::run(100.0, 0.05, 0.25, 2, 42, &cfg);
    let b = simulation::run(100.0, 0.05, 0.25, 2, 42, &cfg);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_give_different_draws() {
    let cfg = SimulationConfig::default();
    let a = simulation::run(100.0, 0.05, 0.25, 2, 1, &cfg);
    let b = simulation::run(100.0, 0.05, 0.25, 2, 2, &cfg);
    assert!((a.p50 - b.p50).abs() > 1e-12);
}

#[test]
fn zero_volatility_and_trend_is_a_point_mass() {
    let cfg = SimulationConfig::default();
    let s = simulation::run(100.0, 0.0, 0.0, 1, 9, &cfg);
    assert!((s.p10 - 100.0).abs() < 1e-9);
    assert!((s.p90 - 100.0).abs() < 1e-9);
    assert!((s.mean - 100.0).abs() < 1e-9);
}

#[test]
fn percentiles_are_ordered() {
    let cfg = SimulationConfig::default();
    let s = simulation::run(250.0, 0.1, 0.4, 3, 7, &cfg);
    assert!(s.p10 <= s.p25);
    assert!(s.p25 <= s.p50);
    assert!(s.p50 <= s.p75);
    assert!(s.p75 <= s.p90);
    assert!(s.p10 >= 0.0);
}

#[test]
fn safety_cap_bounds_terminal_prices() {
    let cfg = SimulationConfig::default();
    // Strong drift and heavy volatility would blow up without the cap.
    let years = 2;
    let s = simulation::run(100.0, 10.0, 1.5, years, 3, &cfg);
    let cap = 100.0 * cfg.cap_growth_base.powi(years as i32);
    assert!(s.p90 <= cap + 1e-9, "p90 = {} cap = {}", s.p90, cap);
    assert!(s.mean <= cap + 1e-9);
}

#[test]
fn positive_drift_shifts_the_distribution_up() {
    let cfg = SimulationConfig::default();
    let rising = simulation::run(100.0, 0.08, 0.2, 2, 11, &cfg);
    let falling = simulation::run(100.0, -0.08, 0.2, 2, 11, &cfg);
    assert!(rising.p50 > falling.p50);
}

#[test]
fn fewer_paths_still_produce_a_summary() {
    let cfg = SimulationConfig {
        n_paths: 16,
        ..Default::default()
    };
    let s = simulation::run(80.0, 0.01, 0.3, 1, 5, &cfg);
    assert!(s.p10 > 0.0);
    assert!(s.p90 >= s.p10);
}
