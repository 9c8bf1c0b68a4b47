use approx::assert_relative_eq;
use rand::{SeedableRng, rngs::StdRng};

use hydrofeed_nutrients::{
    Action, Element, Error, InputError, Nutrient, NutrientTargets, Progress, Recipe,
    SearchStatus, SolutionVolume, Solver, Substance, VolumeUnit, deviation, solve,
};

fn potassium_nitrate() -> Substance {
    Substance::new(
        "kno3",
        "Potassium nitrate",
        "KNO3",
        vec![Element::ionic("NO3", 13.85), Element::new("K", 38.67)],
    )
}

fn common_salts() -> Vec<Substance> {
    vec![
        Substance::new(
            "cano3",
            "Calcium nitrate",
            "Ca(NO3)2",
            vec![Element::new("Ca", 19.0), Element::ionic("NO3", 64.2)],
        ),
        Substance::new(
            "kno3",
            "Potassium nitrate",
            "KNO3",
            vec![Element::new("K", 38.67), Element::ionic("NO3", 61.3)],
        ),
        Substance::new(
            "mkp",
            "Monopotassium phosphate",
            "KH2PO4",
            vec![Element::new("K", 28.7), Element::ionic("H2PO4", 71.3)],
        ),
        Substance::new(
            "epsom",
            "Magnesium sulfate heptahydrate",
            "MgSO4·7H2O",
            vec![Element::new("Mg", 9.86), Element::ionic("SO4", 38.97)],
        ),
    ]
}

fn nitrate_and_potassium() -> NutrientTargets {
    NutrientTargets::new()
        .with(Nutrient::NitrateNitrogen, 150.0)
        .with(Nutrient::Potassium, 200.0)
}

fn one_liter() -> SolutionVolume {
    SolutionVolume::from_milliliters(1000.0)
}

#[test]
fn potassium_nitrate_matches_potassium() {
    let substances = vec![potassium_nitrate()];
    let targets = nitrate_and_potassium();
    let mut rng = StdRng::seed_from_u64(7);

    let result = Solver::default()
        .solve(&substances, &targets, one_liter(), &mut rng)
        .unwrap();

    // Nitrate cannot reach its target before potassium overshoots, so the
    // best weight lands where potassium is exact.
    let grams = result.weight_of("kno3").unwrap();
    assert!((grams - 200.0 / 386.7).abs() < 0.1, "grams = {grams}");
    assert!(result.deviation < 47.0, "deviation = {}", result.deviation);
    assert!(result.deviation <= result.diagnostics.sampled_deviation);
    assert_eq!(result.diagnostics.trials, 1000);
    assert!(result.ec.is_some());
}

#[test]
fn same_seed_same_result() {
    let substances = common_salts();
    let targets = NutrientTargets::preset(hydrofeed_nutrients::Preset::General);
    let solver = Solver::default();

    let a = solver
        .solve(&substances, &targets, one_liter(), &mut StdRng::seed_from_u64(3))
        .unwrap();
    let b = solver
        .solve(&substances, &targets, one_liter(), &mut StdRng::seed_from_u64(3))
        .unwrap();

    assert_eq!(a, b);
}

#[test]
fn weights_are_complete_and_non_negative() {
    let substances = common_salts();
    let targets = NutrientTargets::new()
        .with(Nutrient::Calcium, 10.0)
        .with(Nutrient::Magnesium, 5.0);
    let mut rng = StdRng::seed_from_u64(11);

    let result = Solver::default()
        .solve(&substances, &targets, one_liter(), &mut rng)
        .unwrap();

    let ids: Vec<_> = result.weights.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["cano3", "kno3", "mkp", "epsom"]);
    assert!(result.weights.iter().all(|w| w.grams >= 0.0));

    let sum: f64 = result.weights.iter().map(|w| w.grams).sum();
    assert_relative_eq!(result.total_weight, sum, max_relative = 1e-12);
    assert!(result.deviation >= 0.0);
}

#[test]
fn refinement_improves_on_sampling() {
    let substances = common_salts();
    let targets = NutrientTargets::new()
        .with(Nutrient::NitrateNitrogen, 150.0)
        .with(Nutrient::Phosphorus, 40.0)
        .with(Nutrient::Potassium, 200.0)
        .with(Nutrient::Calcium, 150.0)
        .with(Nutrient::Magnesium, 40.0)
        .with(Nutrient::Sulfur, 53.0);
    let mut rng = StdRng::seed_from_u64(2024);

    let result = Solver::default()
        .solve(&substances, &targets, one_liter(), &mut rng)
        .unwrap();

    assert!(result.deviation <= result.diagnostics.sampled_deviation);
    assert!(result.deviation < 35.0, "deviation = {}", result.deviation);
    assert_ne!(result.diagnostics.status, SearchStatus::Stopped);
    assert_relative_eq!(
        result.deviation,
        deviation(&result.achieved, &targets),
        max_relative = 1e-12
    );
}

#[test]
fn refinement_never_gets_worse() {
    let substances = common_salts();
    let targets = NutrientTargets::preset(hydrofeed_nutrients::Preset::Vegetative);
    let mut rng = StdRng::seed_from_u64(5);
    let mut sampled = Vec::new();
    let mut refined = Vec::new();

    let result = Solver::default()
        .solve_observed(
            &substances,
            &targets,
            one_liter(),
            &mut rng,
            |progress: &Progress<'_>| -> Option<Action> {
                match progress {
                    Progress::Sampled { deviation, .. } => sampled.push(*deviation),
                    Progress::Refined { deviation, .. } => refined.push(*deviation),
                }
                None
            },
        )
        .unwrap();

    assert_eq!(sampled.len(), 1000);
    assert_eq!(refined.len(), result.diagnostics.passes);

    let best_sample = sampled.iter().copied().fold(f64::INFINITY, f64::min);
    assert_eq!(best_sample, result.diagnostics.sampled_deviation);

    let mut previous = best_sample;
    for deviation in refined {
        assert!(deviation <= previous);
        previous = deviation;
    }
    assert_eq!(previous, result.deviation);
}

#[test]
fn observer_can_stop_sampling() {
    let substances = vec![potassium_nitrate()];
    let targets = nitrate_and_potassium();
    let mut rng = StdRng::seed_from_u64(1);

    let result = Solver::default()
        .solve_observed(
            &substances,
            &targets,
            one_liter(),
            &mut rng,
            |progress: &Progress<'_>| match progress {
                Progress::Sampled { trial: 9, .. } => Some(Action::StopEarly),
                _ => None,
            },
        )
        .unwrap();

    assert_eq!(result.diagnostics.trials, 10);
    assert_eq!(result.diagnostics.passes, 0);
    assert_eq!(result.diagnostics.status, SearchStatus::Stopped);
    assert_eq!(result.deviation, result.diagnostics.sampled_deviation);
}

#[test]
fn no_substances_miss_every_target() {
    let targets = nitrate_and_potassium();

    let result = solve(&[], &targets, 1000.0).unwrap();

    assert!(result.weights.is_empty());
    assert_eq!(result.total_weight, 0.0);
    assert_eq!(result.deviation, 100.0);
    assert_eq!(result.ec, Some(0.0));
}

#[test]
fn unusable_volumes_are_rejected() {
    let substances = vec![potassium_nitrate()];
    let targets = nitrate_and_potassium();

    assert!(matches!(
        solve(&substances, &targets, 0.0),
        Err(Error::InvalidInput(InputError::Volume(v))) if v == 0.0
    ));
    assert!(matches!(
        solve(&substances, &targets, f64::NAN),
        Err(Error::InvalidInput(InputError::Volume(v))) if v.is_nan()
    ));
    assert!(matches!(
        solve(&substances, &targets, -250.0),
        Err(Error::InvalidInput(InputError::Volume(_)))
    ));
}

#[test]
fn negative_targets_are_rejected() {
    let targets = nitrate_and_potassium().with(Nutrient::Magnesium, -1.0);

    let err = solve(&[potassium_nitrate()], &targets, 1000.0).unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidInput(InputError::Target {
            nutrient: Nutrient::Magnesium,
            ..
        })
    ));
}

#[test]
fn liters_and_milliliters_solve_identically() {
    let substances = common_salts();
    let targets = NutrientTargets::preset(hydrofeed_nutrients::Preset::Flowering);
    let solver = Solver::default();

    let liters = solver
        .solve(
            &substances,
            &targets,
            SolutionVolume::new(1.0, VolumeUnit::Liter),
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap();
    let milliliters = solver
        .solve(
            &substances,
            &targets,
            one_liter(),
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap();

    assert_eq!(liters, milliliters);
}

#[test]
fn saved_recipe_reproduces_concentrations() {
    let substances = common_salts();
    let targets = NutrientTargets::preset(hydrofeed_nutrients::Preset::General);
    let volume = SolutionVolume::new(20.0, VolumeUnit::Liter);
    let mut rng = StdRng::seed_from_u64(17);

    let result = Solver::default()
        .solve(&substances, &targets, volume, &mut rng)
        .unwrap();
    let recipe = Recipe::from_result("General", &substances, &targets, volume, &result)
        .with_description("All-round feed");

    let json = serde_json::to_string(&recipe).unwrap();
    let restored: Recipe = serde_json::from_str(&json).unwrap();
    let achieved = restored.concentrations().unwrap();

    assert_eq!(restored.name, "General");
    assert_eq!(restored.weights().len(), substances.len());
    for (bucket, ppm) in result.achieved.iter() {
        assert_relative_eq!(achieved.get(bucket), ppm, max_relative = 1e-12);
    }
    assert_relative_eq!(
        restored.deviation().unwrap(),
        result.deviation,
        max_relative = 1e-12
    );
    assert_relative_eq!(restored.total_weight(), result.total_weight, max_relative = 1e-12);
}
