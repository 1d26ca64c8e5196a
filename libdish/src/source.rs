use rand::Rng;

/// Randomness collaborator for [`PetriDish::randomize`]: produce a uniformly
/// distributed index into the state set. Injected rather than baked in so
/// tests can script the draws.
///
/// [`PetriDish::randomize`]: crate::dish::PetriDish::randomize
pub trait StateSource {
    /// Return a uniform index in `[0, num_states)`.
    fn pick(&mut self, num_states: usize) -> usize;
}

/// A [`StateSource`] backed by any `rand` generator. Cryptographic quality
/// is not required, so `rand::rng()` is a fine choice.
pub struct RngStateSource<R>(pub R);

impl<R: Rng> StateSource for RngStateSource<R> {
    fn pick(&mut self, num_states: usize) -> usize {
        self.0.random_range(0..num_states)
    }
}
