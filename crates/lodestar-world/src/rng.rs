//! Chunk-local deterministic pseudo-random stream.
//!
//! Each `generate` call owns its own `ChunkRng`; no random state is shared
//! across chunks or calls, so generation order and interleaving cannot
//! change any chunk's output.

/// 64-bit linear congruential stream, output from the high bits.
#[derive(Debug, Clone)]
pub struct ChunkRng {
    state: u64,
}

impl ChunkRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as u32
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / 16_777_216.0 // 2^24
    }

    /// Uniform integer in [0, n). `n` must be non-zero.
    pub fn next_range(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0, "next_range requires a non-empty range");
        self.next_u32() % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let mut a = ChunkRng::new(42);
        let mut b = ChunkRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_seeds_diverge() {
        let mut a = ChunkRng::new(1);
        let mut b = ChunkRng::new(2);
        let a_vals: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let b_vals: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(a_vals, b_vals);
    }

    #[test]
    fn test_next_f32_range() {
        let mut rng = ChunkRng::new(7);
        for _ in 0..1000 {
            let f = rng.next_f32();
            assert!((0.0..1.0).contains(&f), "out of range: {f}");
        }
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = ChunkRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(4) < 4);
        }
    }

    #[test]
    fn test_distribution() {
        // Check that draws are roughly uniformly distributed.
        let mut rng = ChunkRng::new(12345);
        let mut low_count = 0u32;
        let total = 10_000;
        for _ in 0..total {
            if rng.next_f32() < 0.5 {
                low_count += 1;
            }
        }
        let low_frac = low_count as f32 / total as f32;
        assert!(
            low_frac > 0.4 && low_frac < 0.6,
            "poor distribution: {low_frac}"
        );
    }
}
