use rand::Rng;

/// A source of uniformly distributed indices.
///
/// Implementations must return a value in `[0, bound)` for any `bound > 0`. The sampler never
/// calls `next_index` with a zero bound.
pub trait RandomSource {
    /// Return the next index in `[0, bound)`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Adapts any [rand::Rng] into a [RandomSource].
///
/// Use `RngSource::new(rand::rng())` for production draws, or wrap a seeded
/// [rand::rngs::StdRng] when the sequence of draws has to be reproducible.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Create a new [RngSource] wrapping the provided generator.
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    /// Consume the source, returning the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound == 1 {
            return 0;
        }

        self.rng.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn single_slot_is_always_zero() {
        let mut source = RngSource::new(rand::rng());
        assert!((0..100).all(|_| source.next_index(1) == 0));
    }

    #[test]
    fn indices_stay_in_bounds() {
        let mut source = RngSource::new(StdRng::seed_from_u64(0));
        assert!((0..1_000).all(|_| source.next_index(7) < 7));
    }

    #[test]
    fn seeded_sources_repeat_the_same_sequence() {
        let mut first = RngSource::new(StdRng::seed_from_u64(42));
        let mut second = RngSource::new(StdRng::seed_from_u64(42));

        let a: Vec<usize> = (0..50).map(|_| first.next_index(10)).collect();
        let b: Vec<usize> = (0..50).map(|_| second.next_index(10)).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn every_index_is_reachable() {
        let mut source = RngSource::new(StdRng::seed_from_u64(0));
        let mut seen = [false; 5];
        for _ in 0..1_000 {
            seen[source.next_index(5)] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn borrowed_source_advances_the_owner() {
        let mut owned = RngSource::new(StdRng::seed_from_u64(7));
        let mut reference = RngSource::new(StdRng::seed_from_u64(7));

        fn draw<S: RandomSource>(mut source: S) -> usize {
            source.next_index(100)
        }

        assert_eq!(reference.next_index(100), draw(&mut owned));

        assert_eq!(reference.next_index(100), owned.next_index(100));
    }
}
