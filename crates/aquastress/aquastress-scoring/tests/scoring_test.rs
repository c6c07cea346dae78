use aquastress_core::models::{Observation, Provider, Reading, SeverityLevel};
use aquastress_core::traits::IStressScorer;
use aquastress_scoring::factors::{aridity, humidity, per_capita, temperature};
use aquastress_scoring::{compute_stress, StressEngine};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Reference scenarios ─────────────────────────────────────────────────

#[test]
fn hot_dry_megacity_without_rain_is_critical() {
    let a = compute_stress(0.0, 40.0, 10.0, 10.0);
    assert!(approx(a.index.value(), 95.0), "got {}", a.index.value());
    assert_eq!(a.severity, SeverityLevel::Critical);
}

#[test]
fn mild_wet_city_stays_below_warning() {
    let a = compute_stress(50.0, 20.0, 70.0, 5.0);
    assert!(a.index.value() < 40.0, "got {}", a.index.value());
    assert!(matches!(
        a.severity,
        SeverityLevel::Low | SeverityLevel::Moderate
    ));
    // 0 aridity + 30 per-capita + 3 temperature + 0 humidity.
    assert!(approx(a.index.value(), 33.0), "got {}", a.index.value());
}

// ── Edge cases ──────────────────────────────────────────────────────────

#[test]
fn temperature_of_25_does_not_divide_by_zero() {
    assert_eq!(aridity::potential_evapotranspiration(25.0), 0.0);
    assert!(aridity::aridity_index(5.0, 25.0).is_infinite());
    assert_eq!(aridity::calculate(5.0, 25.0), 0.0);

    let a = compute_stress(5.0, 25.0, 40.0, 2.0);
    assert!(a.index.value().is_finite());
    assert!((0.0..=100.0).contains(&a.index.value()));
}

#[test]
fn zero_precipitation_is_maximally_arid_at_any_temperature() {
    for t in [-60.0, -17.8, 0.0, 15.0, 25.0, 40.0, 60.0] {
        assert_eq!(aridity::calculate(0.0, t), 40.0, "temperature {t}");
    }
}

#[test]
fn negative_precipitation_degrades_to_arid() {
    assert_eq!(aridity::calculate(-3.0, 30.0), 40.0);
    assert_eq!(per_capita::calculate(-3.0, 2.0), 30.0);
    let a = compute_stress(-3.0, 30.0, 20.0, 2.0);
    assert!((0.0..=100.0).contains(&a.index.value()));
}

#[test]
fn extreme_inputs_stay_in_range() {
    let cases = [
        (0.0, 60.0, 0.0, 40.0),
        (1e9, -60.0, 100.0, 0.001),
        (f64::MAX, f64::MAX, f64::MAX, f64::MAX),
        (0.0, f64::MIN, -50.0, 1.0),
        (f64::NAN, f64::NAN, f64::NAN, f64::NAN),
        (5.0, 20.0, 50.0, 0.0),
    ];
    for (p, t, h, pop) in cases {
        let v = compute_stress(p, t, h, pop).index.value();
        assert!(
            (0.0..=100.0).contains(&v),
            "index {v} out of range for ({p}, {t}, {h}, {pop})"
        );
    }
}

// ── Aridity bands ───────────────────────────────────────────────────────

#[test]
fn aridity_bands_follow_ascending_thresholds() {
    // At 24 °C, PET = 0.0023 × 41.8 × 1 × 5 = 0.4807 mm/day.
    let pet = aridity::potential_evapotranspiration(24.0);
    assert!(approx(pet, 0.4807));

    assert_eq!(aridity::calculate(0.02, 24.0), 40.0); // AI ≈ 0.042
    assert_eq!(aridity::calculate(0.05, 24.0), 30.0); // AI ≈ 0.104
    assert_eq!(aridity::calculate(0.15, 24.0), 20.0); // AI ≈ 0.312
    assert_eq!(aridity::calculate(0.28, 24.0), 10.0); // AI ≈ 0.582
    assert_eq!(aridity::calculate(0.50, 24.0), 0.0); // AI ≈ 1.040
}

// ── Per-capita bands ────────────────────────────────────────────────────

#[test]
fn per_capita_bands_follow_ascending_thresholds() {
    // One person: area = √1e-5 km², per-capita ≈ precipitation × 3.162 m³.
    let pop = 1e-6;
    assert_eq!(per_capita::calculate(100.0, pop), 30.0); // ≈ 316
    assert_eq!(per_capita::calculate(200.0, pop), 20.0); // ≈ 632
    assert_eq!(per_capita::calculate(400.0, pop), 10.0); // ≈ 1265
    assert_eq!(per_capita::calculate(600.0, pop), 0.0); // ≈ 1897
}

#[test]
fn per_capita_without_population_is_scarce() {
    assert_eq!(per_capita::per_capita_m3(10.0, 0.0), 0.0);
    assert_eq!(per_capita::per_capita_m3(10.0, f64::NAN), 0.0);
    assert_eq!(per_capita::calculate(10.0, -1.0), 30.0);
}

#[test]
fn per_capita_volume_uses_served_area() {
    let area = per_capita::served_area_km2(10.0);
    assert!(approx(area, 10.0));
    // 2 mm over 10 km² = 20 000 m³ shared by 10 million people.
    assert!(approx(per_capita::per_capita_m3(2.0, 10.0), 0.002));
}

// ── Continuous factors ──────────────────────────────────────────────────

#[test]
fn temperature_factor_is_monotone_and_saturates() {
    assert_eq!(temperature::calculate(15.0), 0.0);
    assert_eq!(temperature::calculate(-30.0), 0.0);
    assert!(approx(temperature::calculate(20.0), 3.0));
    assert!(approx(temperature::calculate(50.0), 20.0));
    assert!(approx(temperature::calculate(500.0), 20.0));

    let mut prev = 0.0;
    let mut t = -60.0;
    while t <= 60.0 {
        let c = temperature::calculate(t);
        assert!(c >= prev, "temperature factor decreased at {t}");
        prev = c;
        t += 0.5;
    }
}

#[test]
fn humidity_factor_rewards_moist_air() {
    assert_eq!(humidity::calculate(60.0), 0.0);
    assert_eq!(humidity::calculate(95.0), 0.0);
    assert!(approx(humidity::calculate(35.0), 5.0));
    assert!(approx(humidity::calculate(10.0), 10.0));
    assert!(approx(humidity::calculate(0.0), 10.0));
}

// ── Engine ──────────────────────────────────────────────────────────────

#[test]
fn engine_matches_free_function() {
    let engine = StressEngine::new();
    let o = Observation::new(1.2, 33.0, 22.0, 4.9);
    assert_eq!(engine.score(&o), compute_stress(1.2, 33.0, 22.0, 4.9));
}

#[test]
fn scoring_is_deterministic() {
    let engine = StressEngine::new();
    let o = Observation::new(3.7, 27.4, 41.0, 2.3);
    let first = engine.score(&o);
    for _ in 0..100 {
        assert_eq!(engine.score(&o), first);
    }
}

#[test]
fn score_batch_keys_results_by_location() {
    let engine = StressEngine::new();
    let now = chrono::Utc::now();
    let readings = vec![
        Reading {
            location_id: "a".into(),
            provider: Provider::OpenMeteo,
            observed_at: now,
            observation: Observation::new(0.0, 40.0, 10.0, 10.0),
            soil_moisture: None,
        },
        Reading {
            location_id: "b".into(),
            provider: Provider::NasaPower,
            observed_at: now,
            observation: Observation::new(50.0, 20.0, 70.0, 5.0),
            soil_moisture: Some(0.4),
        },
    ];
    let scored = engine.score_batch(&readings);
    assert_eq!(scored.len(), 2);
    assert_eq!(scored[0].0, "a");
    assert_eq!(scored[0].1.severity, SeverityLevel::Critical);
    assert_eq!(scored[1].0, "b");
    assert!(scored[1].1.severity <= SeverityLevel::Moderate);
}
