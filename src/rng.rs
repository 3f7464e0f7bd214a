//! Index randomness for word selection.
//!
//! With the `rng` feature (default) indices come from `getrandom`, which uses
//! `crypto.getRandomValues` in the browser. Without it we fall back to
//! a clock-seeded linear congruential step.

/// Something that can pick an index into a collection of `len` items.
pub trait IndexSource {
    /// Returns a value in `0..len`, or `0` when `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

/// Default randomness for the game.
#[derive(Debug, Default, Clone)]
pub struct SystemRandom {
    #[cfg(not(feature = "rng"))]
    state: Option<u64>,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndexSource for SystemRandom {
    #[cfg(feature = "rng")]
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let mut buf = [0u8; 8];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => (u64::from_le_bytes(buf) % len as u64) as usize,
            Err(err) => {
                log::warn!("getrandom failed ({err}), using clock");
                (lcg_step(clock_seed()) % len as u64) as usize
            }
        }
    }

    #[cfg(not(feature = "rng"))]
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let next = lcg_step(self.state.unwrap_or_else(clock_seed));
        self.state = Some(next);
        ((next >> 16) % len as u64) as usize
    }
}

/// Replays a fixed list of indices (wrapping each into range). Handy for
/// deterministic rounds in tests and demos.
#[derive(Debug, Clone)]
pub struct SequenceIndex {
    seq: Vec<usize>,
    pos: usize,
}

impl SequenceIndex {
    pub fn new(seq: impl Into<Vec<usize>>) -> Self {
        Self { seq: seq.into(), pos: 0 }
    }
}

impl IndexSource for SequenceIndex {
    fn index(&mut self, len: usize) -> usize {
        if len == 0 || self.seq.is_empty() {
            return 0;
        }
        let v = self.seq[self.pos % self.seq.len()];
        self.pos += 1;
        v % len
    }
}

fn lcg_step(x: u64) -> u64 {
    x.wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407)
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| (p.now() * 1000.0) as u64)
        .unwrap_or(0)
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_range() {
        let mut rng = SystemRandom::new();
        for len in 1..50 {
            assert!(rng.index(len) < len);
        }
        assert_eq!(rng.index(0), 0);
    }

    #[test]
    fn sequence_wraps_values_and_cycles() {
        let mut seq = SequenceIndex::new(vec![1, 7]);
        assert_eq!(seq.index(5), 1);
        assert_eq!(seq.index(5), 2);
        assert_eq!(seq.index(5), 1);
        assert_eq!(SequenceIndex::new(Vec::new()).index(3), 0);
    }
}
