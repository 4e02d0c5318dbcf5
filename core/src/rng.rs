//! Deterministic random number generation.
//!
//! RULE: No generator may call any platform RNG.
//! All randomness flows through a SeededStream created fresh for
//! the request that consumes it. Streams are never shared between
//! requests and never stored in a static.
//!
//! The stream is Mulberry32: 32-bit state, wrapping arithmetic only.
//! That keeps every draw bit-exact with recorded reference traces on
//! every platform.

use crate::types::Seed;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::f64::consts::PI;

const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A deterministic stream of floats in [0, 1) owned by one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededStream {
    state: u32,
    draws: u64,
}

impl SeededStream {
    pub fn new(seed: Seed) -> Self {
        Self {
            state: seed as u32,
            draws: 0,
        }
    }

    /// Raw Mulberry32 output.
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let a = self.state;
        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        self.draws += 1;
        t ^ (t >> 14)
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        self.next_raw() as f64 / TWO_POW_32
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Uniform sample in [min, max). Always consumes one draw.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        let u = self.next_f64();
        if min == max {
            return min;
        }
        min + u * (max - min)
    }

    /// Box-Muller sample. Always consumes exactly two draws.
    pub fn gaussian(&mut self, mean: f64, std: f64) -> f64 {
        let u1 = self.next_f64();
        let u2 = self.next_f64();
        // ln(0) is -inf; substitute instead of resampling so the draw count stays two.
        let u1 = if u1 <= 0.0 { f64::MIN_POSITIVE } else { u1 };
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        z * std + mean
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Fair coin with the strict `> 0.5` convention.
    pub fn coin(&mut self) -> bool {
        self.next_f64() > 0.5
    }

    /// floor(uniform(lo, hi)) as an integer.
    pub fn index_in(&mut self, lo: u32, hi: u32) -> u32 {
        self.uniform(lo as f64, hi as f64).floor() as u32
    }
}

impl rand::RngCore for SeededStream {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_raw() as u64;
        let hi = self.next_raw() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededStream {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32 as i32)
    }
}

/// Derives independent request seeds from a single master seed.
///
/// Each slot gets its own PCG stream, seeded from
/// (master_seed XOR slot * golden ratio), so adding a slot never
/// changes the seeds handed to existing slots.
pub struct SeedBank {
    master_seed: u64,
}

impl SeedBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Seed for a stable slot index.
    pub fn seed_for(&self, slot: u64) -> Seed {
        use rand::RngCore;
        let derived = self.master_seed ^ slot.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        let mut pcg = Pcg64Mcg::seed_from_u64(derived);
        pcg.next_u32() as Seed
    }

    /// A fresh stream for a stable slot index.
    pub fn stream_for(&self, slot: u64) -> SeededStream {
        SeededStream::new(self.seed_for(slot))
    }

    /// The first `count` slot seeds, in slot order.
    pub fn seeds(&self, count: usize) -> Vec<Seed> {
        (0..count as u64).map(|slot| self.seed_for(slot)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn matches_reference_trace_for_seed_zero() {
        let mut s = SeededStream::new(0);
        let got: Vec<u32> = (0..4).map(|_| s.next_raw()).collect();
        assert_eq!(got, vec![1144304738, 1416247, 958946056, 627933444]);
    }

    #[test]
    fn matches_reference_trace_for_seed_12345() {
        let mut s = SeededStream::new(12345);
        let got: Vec<u32> = (0..4).map(|_| s.next_raw()).collect();
        assert_eq!(got, vec![4207900869, 1317490944, 2079646450, 3513001552]);
    }

    #[test]
    fn negative_seed_uses_twos_complement() {
        let mut s = SeededStream::new(-1);
        assert_eq!(s.next_raw(), 3850105811);
    }

    #[test]
    fn floats_stay_in_unit_interval() {
        let mut s = SeededStream::new(777);
        for _ in 0..10_000 {
            let v = s.next_f64();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn degenerate_uniform_returns_min_and_consumes_a_draw() {
        let mut s = SeededStream::new(9);
        assert_eq!(s.uniform(20.0, 20.0), 20.0);
        assert_eq!(s.draws(), 1);
    }

    #[test]
    fn gaussian_consumes_exactly_two_draws() {
        let mut s = SeededStream::new(42);
        for i in 1..=100 {
            let v = s.gaussian(5.0, 1.0);
            assert!(v.is_finite());
            assert_eq!(s.draws(), 2 * i);
        }
    }

    #[test]
    fn gaussian_survives_a_zero_first_draw() {
        // This seed puts the state at 0 after one increment, so u1 == 0.0.
        let mut first = SeededStream::new(-1_831_565_813);
        assert_eq!(first.next_f64(), 0.0);

        let mut s = SeededStream::new(-1_831_565_813);
        let v = s.gaussian(0.0, 1.0);
        assert!(v.is_finite(), "{v}");
        assert_eq!(s.draws(), 2);
    }

    #[test]
    fn rng_core_u32_matches_raw_stream() {
        let mut a = SeededStream::new(31337);
        let mut b = SeededStream::new(31337);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_raw());
        }
    }

    #[test]
    fn from_seed_round_trips_little_endian() {
        let a = SeededStream::from_seed(12345i32.to_le_bytes());
        assert_eq!(a, SeededStream::new(12345));
    }

    #[test]
    fn seed_bank_is_deterministic_and_slots_differ() {
        let a = SeedBank::new(0xDEAD_BEEF);
        let b = SeedBank::new(0xDEAD_BEEF);
        assert_eq!(a.seeds(32), b.seeds(32));
        assert_ne!(a.seed_for(0), a.seed_for(1));
    }

    #[test]
    fn stream_for_starts_at_the_slot_seed() {
        let bank = SeedBank::new(7);
        let mut direct = SeededStream::new(bank.seed_for(3));
        let mut from_bank = bank.stream_for(3);
        assert_eq!(from_bank.draws(), 0);
        assert_eq!(from_bank.next_raw(), direct.next_raw());
    }
}
