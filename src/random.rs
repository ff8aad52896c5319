//! Seedable random source shared by every engine.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible RNG from a 64-bit seed.
///
/// The same seed always yields the same stream, so runs that share a seed
/// and configuration produce identical results.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
