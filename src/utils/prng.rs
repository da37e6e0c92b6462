/// Xorshift-style generator used by the magic-number search.
///
/// Deterministic for a given seed, so a search run can be reproduced exactly.
pub struct PRNG {
    s: (u64, u64, u64, u64),
}

impl PRNG {
    /// Seed used by [`PRNG::default`] and in place of a zero seed, which would
    /// leave the state stuck at zero.
    pub const DEFAULT_SEED: u64 = 0x6B51FF299F6A3AEE;

    pub const fn new(seed: u64) -> Self {
        let seed = if seed == 0 { Self::DEFAULT_SEED } else { seed };

        let s0 = seed;
        let s1 = seed.wrapping_mul(2);
        let s2 = seed.wrapping_div(5);
        let s3 = seed.wrapping_add(seed.wrapping_div(2));

        PRNG {
            s: (s0, s1, s2, s3),
        }
    }

    #[inline]
    pub const fn random_u64(&mut self) -> u64 {
        let t = self.s.1 << 17;
        self.s.2 ^= self.s.0;
        self.s.3 ^= self.s.1;
        self.s.1 ^= self.s.2;
        self.s.0 ^= self.s.3;
        self.s.2 ^= t;
        self.s.3 = self.s.3.rotate_left(45);

        self.s.0
    }

    /// A random number with roughly an eighth of its bits set
    #[inline]
    pub const fn random_sparse_u64(&mut self) -> u64 {
        self.random_u64() & self.random_u64() & self.random_u64()
    }
}

impl Default for PRNG {
    fn default() -> Self {
        PRNG::new(Self::DEFAULT_SEED)
    }
}
