use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Supplies integers for bulk heap fills, so callers control where the
/// randomness comes from instead of the heap reaching for a global generator.
pub trait ValueSource {
    fn next_value(&mut self) -> i32;
}

/// Uniform values from `[low, high)`.
pub struct RandomValues<R: Rng> {
    rng: R,
    low: i32,
    high: i32,
}

impl RandomValues<StdRng> {
    /// OS-seeded source over `[0, 100)`, the range the heap's sentinel assumes.
    pub fn new() -> Self {
        RandomValues::with_rng(StdRng::from_os_rng())
    }
}

impl Default for RandomValues<StdRng> {
    fn default() -> Self {
        RandomValues::new()
    }
}

impl<R: Rng> RandomValues<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomValues {
            rng,
            low: 0,
            high: 100,
        }
    }

    pub fn with_range(rng: R, low: i32, high: i32) -> Self {
        assert!(low < high);
        RandomValues { rng, low, high }
    }
}

impl<R: Rng> ValueSource for RandomValues<R> {
    fn next_value(&mut self) -> i32 {
        self.rng.random_range(self.low..self.high)
    }
}

/// Replays a scripted sequence, cycling when it runs out.
pub struct FixedValues {
    values: Vec<i32>,
    next: usize,
}

impl FixedValues {
    pub fn new(values: Vec<i32>) -> Self {
        assert!(!values.is_empty());
        FixedValues { values, next: 0 }
    }
}

impl ValueSource for FixedValues {
    fn next_value(&mut self) -> i32 {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{FixedValues, RandomValues, ValueSource};

    #[test]
    fn random_values_stay_in_range() {
        let rng = StdRng::seed_from_u64(42);
        let mut source = RandomValues::with_rng(rng);
        for _ in 0..1000 {
            let value = source.next_value();
            assert!((0..100).contains(&value));
        }
    }

    #[test]
    fn custom_range_respected() {
        let rng = StdRng::seed_from_u64(7);
        let mut source = RandomValues::with_range(rng, 10, 20);
        for _ in 0..1000 {
            let value = source.next_value();
            assert!((10..20).contains(&value));
        }
    }

    #[test]
    fn fixed_values_replay_and_cycle() {
        let mut source = FixedValues::new(vec![5, 3, 8]);
        assert_eq!(source.next_value(), 5);
        assert_eq!(source.next_value(), 3);
        assert_eq!(source.next_value(), 8);
        assert_eq!(source.next_value(), 5);
    }
}
