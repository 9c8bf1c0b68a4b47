use hydrofeed_core::{MinimizationProblem, Model, Observer};

use crate::optimization::{Evaluation, evaluate};

use super::{Action, Config, Error, Event, Solution, Status};

/// Which candidate wins for a single variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Move {
    Increase,
    Decrease,
    Keep,
}

/// Picks a move from the current, increased, and decreased objectives.
///
/// The increase wins ties against the decrease; either must strictly beat
/// the current objective to be taken.
pub(super) fn choose(current: f64, increase: f64, decrease: f64) -> Move {
    if increase < current && increase <= decrease {
        Move::Increase
    } else if decrease < current {
        Move::Decrease
    } else {
        Move::Keep
    }
}

/// Core coordinate descent implementation.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    start: Vec<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M>, Action>,
{
    let expected = problem.variables();
    if start.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: start.len(),
        });
    }

    let mut current = evaluate(model, problem, start)?;
    let start_objective = current.objective;

    for pass in 1..=config.max_passes() {
        let previous = current.objective;
        let mut moves = 0;

        for index in 0..expected {
            let value = current.x[index];
            let up = propose(model, problem, &current.x, index, value + config.step())?;
            let down = propose(
                model,
                problem,
                &current.x,
                index,
                (value - config.step()).max(config.lower_bound()),
            )?;

            match choose(current.objective, up.objective, down.objective) {
                Move::Increase => current = up,
                Move::Decrease => current = down,
                Move::Keep => continue,
            }
            moves += 1;
        }

        let event = Event::Pass {
            pass,
            x: &current.x,
            objective: current.objective,
            previous,
            moves,
            input: &current.snapshot.input,
            output: &current.snapshot.output,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(into_solution(current, start_objective, Status::StoppedByObserver, pass));
        }

        if moves == 0 {
            return Ok(into_solution(current, start_objective, Status::Converged, pass));
        }
    }

    Ok(into_solution(
        current,
        start_objective,
        Status::MaxPasses,
        config.max_passes(),
    ))
}

/// Scores `x` with variable `index` replaced by `value`.
///
/// The candidate is a fresh vector; `x` itself is never touched, so a
/// rejected proposal needs no undo.
fn propose<M, P>(
    model: &M,
    problem: &P,
    x: &[f64],
    index: usize,
    value: f64,
) -> Result<Evaluation<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
{
    let mut candidate = x.to_vec();
    candidate[index] = value;
    Ok(evaluate(model, problem, candidate)?)
}

fn into_solution<I, O>(
    eval: Evaluation<I, O>,
    start_objective: f64,
    status: Status,
    passes: usize,
) -> Solution<I, O> {
    Solution {
        status,
        x: eval.x,
        objective: eval.objective,
        start_objective,
        snapshot: eval.snapshot,
        passes,
    }
}
