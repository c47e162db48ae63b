use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable random source owned by one game session. Keeping the seed makes a
/// session's random choices reproducible.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Picks one element uniformly, or `None` for an empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.random_range(0..items.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(777);
        let mut b = SessionRng::new(777);

        let first: Vec<usize> = (0..20).map(|_| a.random_range(0..9)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.random_range(0..9)).collect();

        assert_eq!(first, second);
        assert_eq!(a.seed(), 777);
    }

    #[test]
    fn test_choose_empty_is_none() {
        let mut rng = SessionRng::new(1);
        let empty: [usize; 0] = [];

        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = SessionRng::new(5);
        let items = [2usize, 4, 8];

        for _ in 0..50 {
            let picked = rng.choose(&items).unwrap();
            assert!(items.contains(&picked));
        }
    }
}
