/// A source of uniformly distributed floats.
///
/// The random search draws every variable through this trait, so callers can
/// pass a seeded generator to make runs reproducible. Every [`rand::Rng`]
/// implements it.
pub trait RandomSource {
    /// Returns a float drawn uniformly from the half-open range `[low, high)`.
    ///
    /// Callers guarantee `low < high` and that both are finite.
    fn next_in_range(&mut self, low: f64, high: f64) -> f64;
}

impl<R> RandomSource for R
where
    R: rand::Rng,
{
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        self.gen_range(low..high)
    }
}
