use hydrofeed_core::{MinimizationProblem, Model, Observer};

use crate::optimization::{Evaluation, evaluate};

use super::{Action, Config, Error, Event, RandomSource, Solution, Status};

/// Core random search implementation.
pub(super) fn search<M, P, R, Obs>(
    model: &M,
    problem: &P,
    config: &Config,
    rng: &mut R,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
    R: RandomSource + ?Sized,
    Obs: for<'a> Observer<Event<'a, M>, Action>,
{
    let variables = problem.variables();

    // The first trial is always kept as a fallback so the solution has a
    // snapshot even if the observer discards everything.
    let first = sample(model, problem, config, variables, rng)?;
    let action = observe::<M, _>(&mut observer, 0, &first, None);
    let mut best = Best {
        eval: first,
        kept: action != Some(Action::Discard),
    };
    if action == Some(Action::StopEarly) {
        return Ok(best.into_solution(Status::StoppedByObserver, 1));
    }

    for trial in 1..config.trials() {
        let eval = sample(model, problem, config, variables, rng)?;
        let action = observe::<M, _>(&mut observer, trial, &eval, best.objective());

        if action != Some(Action::Discard) {
            best.offer(eval);
        }
        if action == Some(Action::StopEarly) {
            return Ok(best.into_solution(Status::StoppedByObserver, trial + 1));
        }
    }

    Ok(best.into_solution(Status::Completed, config.trials()))
}

/// Draws one trial and evaluates it.
fn sample<M, P, R>(
    model: &M,
    problem: &P,
    config: &Config,
    variables: usize,
    rng: &mut R,
) -> Result<Evaluation<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
    R: RandomSource + ?Sized,
{
    let [low, high] = config.range();
    let x = (0..variables).map(|_| rng.next_in_range(low, high)).collect();

    Ok(evaluate(model, problem, x)?)
}

fn observe<M, Obs>(
    observer: &mut Obs,
    trial: usize,
    eval: &Evaluation<M::Input, M::Output>,
    best: Option<f64>,
) -> Option<Action>
where
    M: Model,
    Obs: for<'a> Observer<Event<'a, M>, Action>,
{
    let event = Event::Sampled {
        trial,
        x: &eval.x,
        objective: eval.objective,
        input: &eval.snapshot.input,
        output: &eval.snapshot.output,
        best,
    };
    observer.observe(&event)
}

/// Best-so-far bookkeeping.
///
/// `kept` is false only while the fallback first trial has been discarded by
/// the observer; any later kept trial replaces it unconditionally.
struct Best<I, O> {
    eval: Evaluation<I, O>,
    kept: bool,
}

impl<I, O> Best<I, O> {
    fn objective(&self) -> Option<f64> {
        self.kept.then_some(self.eval.objective)
    }

    /// Strictly better trials replace the current best, so ties keep the earliest.
    fn offer(&mut self, eval: Evaluation<I, O>) {
        if !self.kept || eval.objective < self.eval.objective {
            self.eval = eval;
            self.kept = true;
        }
    }

    fn into_solution(self, status: Status, trials: usize) -> Solution<I, O> {
        Solution {
            status,
            x: self.eval.x,
            objective: self.eval.objective,
            snapshot: self.eval.snapshot,
            trials,
        }
    }
}
