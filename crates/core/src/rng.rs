//! RNG module - tile spawn randomness
//!
//! The engine never touches global randomness. It draws from an injected
//! [`TileRng`], so a seeded source replays the same game exactly.
//!
//! [`SimpleRng`] is the default source: a small LCG that is fast, seedable and
//! identical on every platform.

use crate::types::{SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE};

/// Source of randomness for tile spawning
pub trait TileRng {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max), `0` when `max` is 0
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: TileRng + ?Sized> TileRng for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl TileRng for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG have short periods; lead with the high half.
        self.state.rotate_left(16)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Where and what to spawn, given `empty_count` free cells
///
/// Draws the cell first (uniform over the empty cells, row-major), then the
/// value: 4 when a roll in `0..100` falls below `four_chance_percent`, else 2.
/// Returns `None` on a full board without consuming randomness.
pub fn roll_spawn<R: TileRng + ?Sized>(
    rng: &mut R,
    empty_count: usize,
    four_chance_percent: u8,
) -> Option<(usize, u32)> {
    if empty_count == 0 {
        return None;
    }
    let nth = rng.next_range(empty_count as u32) as usize;
    let value = if rng.next_range(100) < four_chance_percent as u32 {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    };
    Some((nth, value))
}
