//! Injectable randomness for critical-hit rolls.
//!
//! # Determinism
//!
//! Turn resolution is referentially transparent given its inputs, including
//! the roll source. Tests use [`FixedRoll`]; hosts use a seeded [`PcgRng`]
//! so encounters can be replayed.

/// Source of uniform rolls in `[0, 1)`.
pub trait CritRng {
    fn roll(&mut self) -> f64;
}

impl<F> CritRng for F
where
    F: FnMut() -> f64,
{
    fn roll(&mut self) -> f64 {
        self()
    }
}

/// Always returns the same roll.
///
/// `FixedRoll(0.0)` crits whenever the crit chance is positive,
/// `FixedRoll(1.0)` never crits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedRoll(pub f64);

impl CritRng for FixedRoll {
    fn roll(&mut self) -> f64 {
        self.0
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

impl CritRng for PcgRng {
    fn roll(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }
}
