use std::convert::Infallible;

use rand::{SeedableRng, rngs::StdRng};

use hydrofeed_core::{MinimizationProblem, Model};

use super::{Action, Config, ConfigError, Event, Status, minimize, minimize_unobserved};

/// Squared distance from a fixed center: f(x) = Σ (xᵢ - cᵢ)².
struct Bowl {
    center: Vec<f64>,
}

impl Model for Bowl {
    type Input = Vec<f64>;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &Vec<f64>) -> Result<f64, Self::Error> {
        Ok(x.iter()
            .zip(&self.center)
            .map(|(xi, ci)| (xi - ci).powi(2))
            .sum())
    }
}

/// Constant model: every point scores the same.
struct Flat;

impl Model for Flat {
    type Input = Vec<f64>;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, _x: &Vec<f64>) -> Result<f64, Self::Error> {
        Ok(1.0)
    }
}

/// Objective: the model output itself.
struct ObjectiveOutput {
    variables: usize,
}

impl MinimizationProblem for ObjectiveOutput {
    type Input = Vec<f64>;
    type Output = f64;
    type Error = Infallible;

    fn variables(&self) -> usize {
        self.variables
    }

    fn input(&self, x: &[f64]) -> Result<Self::Input, Self::Error> {
        Ok(x.to_vec())
    }

    fn objective(&self, _input: &Vec<f64>, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn samples_stay_in_range() {
    let model = Bowl {
        center: vec![1.0, 2.0, 3.0],
    };
    let problem = ObjectiveOutput { variables: 3 };
    let config = Config::new(200, [0.5, 1.5]).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let mut seen = 0;
    let observer = |event: &Event<'_, _>| {
        seen += 1;
        assert_eq!(event.x().len(), 3);
        assert!(event.x().iter().all(|v| (0.5..1.5).contains(v)));
        None
    };

    let solution = minimize(&model, &problem, &config, &mut rng, observer).unwrap();

    assert_eq!(solution.status, Status::Completed);
    assert_eq!(solution.trials, 200);
    assert_eq!(seen, 200);
}

#[test]
fn keeps_lowest_objective() {
    let model = Bowl {
        center: vec![2.0, 2.0],
    };
    let problem = ObjectiveOutput { variables: 2 };
    let config = Config::new(500, [0.0, 5.0]).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let mut lowest = f64::INFINITY;
    let observer = |event: &Event<'_, _>| {
        lowest = lowest.min(event.objective());
        None
    };

    let solution = minimize(&model, &problem, &config, &mut rng, observer).unwrap();

    assert_eq!(solution.objective, lowest);
    assert_eq!(solution.snapshot.output, lowest);
    assert_eq!(solution.snapshot.input, solution.x);
}

#[test]
fn ties_keep_earliest_trial() {
    let problem = ObjectiveOutput { variables: 2 };
    let config = Config::new(50, [0.0, 5.0]).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let mut first = Vec::new();
    let observer = |event: &Event<'_, _>| {
        if event.trial() == 0 {
            first = event.x().to_vec();
        } else {
            assert!(!event.is_improvement());
        }
        None
    };

    let solution = minimize(&Flat, &problem, &config, &mut rng, observer).unwrap();

    assert_eq!(solution.x, first);
}

#[test]
fn same_seed_reproduces_result() {
    let model = Bowl {
        center: vec![0.7, 3.1, 4.4],
    };
    let problem = ObjectiveOutput { variables: 3 };
    let config = Config::default();

    let a = minimize_unobserved(&model, &problem, &config, &mut StdRng::seed_from_u64(11)).unwrap();
    let b = minimize_unobserved(&model, &problem, &config, &mut StdRng::seed_from_u64(11)).unwrap();

    assert_eq!(a.x, b.x);
    assert_eq!(a.objective, b.objective);
}

#[test]
fn zero_variables_still_runs() {
    let model = Bowl { center: vec![] };
    let problem = ObjectiveOutput { variables: 0 };
    let mut rng = StdRng::seed_from_u64(0);

    let solution = minimize_unobserved(&model, &problem, &Config::default(), &mut rng).unwrap();

    assert!(solution.x.is_empty());
    assert_eq!(solution.objective, 0.0);
    assert_eq!(solution.trials, 1000);
}

#[test]
fn observer_can_stop_early() {
    let model = Bowl {
        center: vec![1.0],
    };
    let problem = ObjectiveOutput { variables: 1 };
    let mut rng = StdRng::seed_from_u64(5);

    let observer = |event: &Event<'_, _>| (event.trial() == 9).then_some(Action::StopEarly);

    let solution = minimize(&model, &problem, &Config::default(), &mut rng, observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.trials, 10);
}

#[test]
fn discarded_trials_are_never_best() {
    let model = Bowl {
        center: vec![2.5],
    };
    let problem = ObjectiveOutput { variables: 1 };
    let config = Config::new(300, [0.0, 5.0]).unwrap();
    let mut rng = StdRng::seed_from_u64(9);

    // Refuse everything in the left half of the range.
    let observer = |event: &Event<'_, _>| (event.x()[0] < 2.5).then_some(Action::Discard);

    let solution = minimize(&model, &problem, &config, &mut rng, observer).unwrap();

    assert!(solution.x[0] >= 2.5, "kept a discarded trial: {:?}", solution.x);
}

#[test]
fn rejects_invalid_config() {
    assert_eq!(Config::new(0, [0.0, 5.0]), Err(ConfigError::Trials));
    assert_eq!(Config::new(10, [5.0, 5.0]), Err(ConfigError::Range));
    assert_eq!(Config::new(10, [0.0, f64::INFINITY]), Err(ConfigError::Range));
    assert_eq!(Config::new(10, [f64::NAN, 1.0]), Err(ConfigError::Range));
}

#[test]
fn default_config_matches_documented_values() {
    let config = Config::default();

    assert_eq!(config.trials(), 1000);
    assert_eq!(config.range(), [0.0, 5.0]);
}
