//! Two-phase search for substance weights.
//!
//! A solve first samples random weight vectors to find a reasonable region,
//! then refines the best sample one substance at a time with fixed gram
//! steps. Both phases minimize the mean percent deviation from the targets,
//! and refinement never makes the sampled result worse.
//!
//! Results are reproducible for a given [`RandomSource`] state, so seeding
//! the source with a fixed value pins the weights a solve returns.

use tracing::{debug, debug_span};

use hydrofeed_core::Observer;
use hydrofeed_solvers::optimization::{
    coordinate_descent,
    random_search::{self, RandomSource},
};

use crate::{
    CalculationResult, ConcentrationModel, Concentrations, DeviationProblem, Error,
    NutrientTargets, SolutionVolume, Substance,
    conductivity::{estimate_ec, round_ec},
    result::{Diagnostics, SearchStatus, SubstanceWeight},
};

/// Tuning for both search phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    sampling: random_search::Config,
    refinement: coordinate_descent::Config,
    estimate_ec: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sampling: random_search::Config::default(),
            refinement: coordinate_descent::Config::default(),
            estimate_ec: true,
        }
    }
}

impl Config {
    /// Creates a config from already validated phase configs.
    #[must_use]
    pub fn new(
        sampling: random_search::Config,
        refinement: coordinate_descent::Config,
        estimate_ec: bool,
    ) -> Self {
        Self {
            sampling,
            refinement,
            estimate_ec,
        }
    }

    /// Returns the random sampling config.
    #[must_use]
    pub fn sampling(&self) -> &random_search::Config {
        &self.sampling
    }

    /// Returns the coordinate refinement config.
    #[must_use]
    pub fn refinement(&self) -> &coordinate_descent::Config {
        &self.refinement
    }

    /// Returns whether results carry an EC estimate.
    #[must_use]
    pub fn estimate_ec(&self) -> bool {
        self.estimate_ec
    }
}

/// Progress reported while a solve runs.
#[derive(Debug)]
pub enum Progress<'a> {
    /// A random weight vector was scored.
    Sampled {
        trial: usize,
        weights: &'a [f64],
        deviation: f64,
        achieved: &'a Concentrations,
    },

    /// A refinement pass finished.
    Refined {
        pass: usize,
        weights: &'a [f64],
        deviation: f64,
        achieved: &'a Concentrations,

        /// Number of substances whose weight changed during the pass.
        moves: usize,
    },
}

impl Progress<'_> {
    /// Returns the deviation of the reported weights.
    #[must_use]
    pub fn deviation(&self) -> f64 {
        match self {
            Self::Sampled { deviation, .. } | Self::Refined { deviation, .. } => *deviation,
        }
    }
}

/// Actions an observer can take during a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop searching and return the best weights found so far.
    StopEarly,
}

/// Solves for substance weights with a fixed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Solver {
    config: Config,
}

impl Solver {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Computes the grams of each substance that best match `targets`.
    ///
    /// The returned weights are in substance order, one per substance, and
    /// never negative. An empty substance list is not an error: every positive
    /// target then deviates by 100 %.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the volume is not finite and
    /// positive, or if any target is negative or not finite.
    pub fn solve<R>(
        &self,
        substances: &[Substance],
        targets: &NutrientTargets,
        volume: SolutionVolume,
        rng: &mut R,
    ) -> Result<CalculationResult, Error>
    where
        R: RandomSource + ?Sized,
    {
        self.solve_observed(substances, targets, volume, rng, ())
    }

    /// Like [`solve`](Self::solve), reporting progress to an observer.
    ///
    /// Returning [`Action::StopEarly`] during sampling skips refinement;
    /// during refinement it keeps the current weights.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_observed<R, Obs>(
        &self,
        substances: &[Substance],
        targets: &NutrientTargets,
        volume: SolutionVolume,
        rng: &mut R,
        mut observer: Obs,
    ) -> Result<CalculationResult, Error>
    where
        R: RandomSource + ?Sized,
        Obs: for<'a> Observer<Progress<'a>, Action>,
    {
        targets.validate()?;
        let model = ConcentrationModel::new(substances, volume)?;
        let problem = DeviationProblem::new(targets, substances.len());

        let span = debug_span!("solve", substances = substances.len(), %volume);
        let _guard = span.enter();

        let sampled = random_search::minimize(
            &model,
            &problem,
            &self.config.sampling,
            rng,
            |event: &random_search::Event<'_, ConcentrationModel>| {
                let random_search::Event::Sampled {
                    trial,
                    x,
                    objective,
                    output,
                    ..
                } = *event;
                let progress = Progress::Sampled {
                    trial,
                    weights: x,
                    deviation: objective,
                    achieved: output,
                };
                observer
                    .observe(&progress)
                    .map(|Action::StopEarly| random_search::Action::StopEarly)
            },
        )?;
        debug!(
            trials = sampled.trials,
            deviation = sampled.objective,
            "random sampling finished"
        );

        if sampled.status == random_search::Status::StoppedByObserver {
            let diagnostics = Diagnostics {
                sampled_deviation: sampled.objective,
                trials: sampled.trials,
                passes: 0,
                status: SearchStatus::Stopped,
            };
            return Ok(self.finish(
                substances,
                sampled.x,
                sampled.objective,
                sampled.snapshot.output,
                diagnostics,
            ));
        }

        let refined = coordinate_descent::minimize(
            &model,
            &problem,
            sampled.x,
            &self.config.refinement,
            |event: &coordinate_descent::Event<'_, ConcentrationModel>| {
                let coordinate_descent::Event::Pass {
                    pass,
                    x,
                    objective,
                    moves,
                    output,
                    ..
                } = *event;
                let progress = Progress::Refined {
                    pass,
                    weights: x,
                    deviation: objective,
                    achieved: output,
                    moves,
                };
                observer
                    .observe(&progress)
                    .map(|Action::StopEarly| coordinate_descent::Action::StopEarly)
            },
        )?;
        debug!(
            passes = refined.passes,
            deviation = refined.objective,
            status = ?refined.status,
            "refinement finished"
        );

        let status = match refined.status {
            coordinate_descent::Status::Converged => SearchStatus::Converged,
            coordinate_descent::Status::MaxPasses => SearchStatus::PassLimit,
            coordinate_descent::Status::StoppedByObserver => SearchStatus::Stopped,
        };
        let diagnostics = Diagnostics {
            sampled_deviation: sampled.objective,
            trials: sampled.trials,
            passes: refined.passes,
            status,
        };

        Ok(self.finish(
            substances,
            refined.x,
            refined.objective,
            refined.snapshot.output,
            diagnostics,
        ))
    }

    fn finish(
        &self,
        substances: &[Substance],
        weights: Vec<f64>,
        deviation: f64,
        achieved: Concentrations,
        diagnostics: Diagnostics,
    ) -> CalculationResult {
        let ec = self
            .config
            .estimate_ec
            .then(|| round_ec(estimate_ec(&achieved)));

        let weights: Vec<SubstanceWeight> = substances
            .iter()
            .zip(weights)
            .map(|(substance, grams)| SubstanceWeight {
                id: substance.id.clone(),
                grams,
            })
            .collect();
        let total_weight = weights.iter().map(|w| w.grams).sum();

        CalculationResult {
            weights,
            total_weight,
            achieved,
            deviation,
            ec,
            diagnostics,
        }
    }
}

/// Solves with the default configuration and an entropy-seeded random source.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `solution_volume_ml` is not finite and
/// positive, or if any target is negative or not finite.
pub fn solve(
    substances: &[Substance],
    targets: &NutrientTargets,
    solution_volume_ml: f64,
) -> Result<CalculationResult, Error> {
    Solver::default().solve(
        substances,
        targets,
        SolutionVolume::from_milliliters(solution_volume_ml),
        &mut rand::thread_rng(),
    )
}
