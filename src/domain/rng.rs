/// Seedable LCG random source.
/// Injected into scene construction so tests can fix the seed and get a
/// deterministic star population. Constants from Numerical Recipes.

#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        // A zero state would stick at zero
        Rng { state: if seed == 0 { 1 } else { seed } }
    }

    /// Seed from the system clock (config `seed = 0`).
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(1);
        Rng::new(nanos)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in [0, max). max must be > 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniform value in [lo, hi] inclusive.
    pub fn pick_in(&mut self, lo: u32, hi: u32) -> u32 {
        lo + self.next_range(hi - lo + 1)
    }

    /// Uniformly chosen element of a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_range(items.len() as u32) as usize]
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
