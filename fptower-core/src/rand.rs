use rand::{
    distributions::{Distribution, Standard},
    prelude::StdRng,
    Rng, SeedableRng,
};

pub trait UniformRand: Sized {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl<T> UniformRand for T
where
    Standard: Distribution<T>,
{
    #[inline]
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.sample(Standard)
    }
}

/// A deterministic RNG for tests and benchmarks.
pub fn test_rng() -> StdRng {
    let mut seed = [0u8; 32];
    for (i, digit) in seed.iter_mut().enumerate() {
        *digit = i as u8;
    }
    StdRng::from_seed(seed)
}
