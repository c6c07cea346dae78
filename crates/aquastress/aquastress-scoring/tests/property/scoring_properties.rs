use aquastress_core::models::{Observation, SeverityLevel};
use aquastress_core::traits::IStressScorer;
use aquastress_scoring::factors::{aridity, temperature};
use aquastress_scoring::{compute_stress, formula, StressEngine};
use proptest::prelude::*;

fn arb_observation() -> impl Strategy<Value = Observation> {
    (0.0f64..500.0, -60.0f64..60.0, 0.0f64..=100.0, 0.001f64..40.0)
        .prop_map(|(p, t, h, pop)| Observation::new(p, t, h, pop))
}

// ── Index bounded ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn index_bounded_for_valid_domain(o in arb_observation()) {
        let a = StressEngine::new().score(&o);
        prop_assert!((0.0..=100.0).contains(&a.index.value()));
        prop_assert!(a.index.value().is_finite());
    }

    #[test]
    fn index_bounded_for_any_f64(
        p in any::<f64>(),
        t in any::<f64>(),
        h in any::<f64>(),
        pop in any::<f64>(),
    ) {
        let v = compute_stress(p, t, h, pop).index.value();
        prop_assert!((0.0..=100.0).contains(&v), "index {} out of range", v);
    }
}

// ── Determinism and classification ──────────────────────────────────────

proptest! {
    #[test]
    fn scoring_is_deterministic(o in arb_observation()) {
        let engine = StressEngine::new();
        prop_assert_eq!(engine.score(&o), engine.score(&o));
    }

    #[test]
    fn severity_agrees_with_index(o in arb_observation()) {
        let a = StressEngine::new().score(&o);
        prop_assert_eq!(a.severity, SeverityLevel::from_index(a.index.value()));
    }

    #[test]
    fn severity_partition_has_exactly_one_level(index in 0.0f64..=100.0) {
        let level = SeverityLevel::from_index(index);
        let matching = [
            (SeverityLevel::Low, index < 20.0),
            (SeverityLevel::Moderate, (20.0..40.0).contains(&index)),
            (SeverityLevel::Warning, (40.0..60.0).contains(&index)),
            (SeverityLevel::Severe, (60.0..80.0).contains(&index)),
            (SeverityLevel::Critical, index >= 80.0),
        ];
        let hits: Vec<_> = matching.iter().filter(|(_, hit)| *hit).map(|(l, _)| *l).collect();
        prop_assert_eq!(hits, vec![level]);
    }
}

// ── Factor properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn zero_precipitation_always_max_aridity(t in -60.0f64..60.0) {
        prop_assert_eq!(aridity::calculate(0.0, t), aridity::MAX_CONTRIBUTION);
        let b = formula::compute_breakdown(&Observation::new(0.0, t, 50.0, 1.0));
        prop_assert_eq!(b.aridity, 40.0);
    }

    #[test]
    fn temperature_contribution_monotone(t in -60.0f64..60.0, dt in 0.0f64..30.0) {
        prop_assert!(temperature::calculate(t + dt) >= temperature::calculate(t));
        prop_assert!(temperature::calculate(t + dt) <= 20.0 + 1e-9);
    }

    #[test]
    fn hotter_never_lowers_index_when_dry(t in 25.5f64..59.0, dt in 0.0f64..1.0, h in 0.0f64..100.0) {
        // With no rain the aridity and per-capita terms are pinned, so only
        // temperature moves the index.
        let cool = compute_stress(0.0, t, h, 2.0).index.value();
        let hot = compute_stress(0.0, t + dt, h, 2.0).index.value();
        prop_assert!(hot + 1e-9 >= cool);
    }
}
