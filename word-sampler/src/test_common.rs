#![cfg(test)]

use std::collections::VecDeque;

use rand::{rngs::StdRng, SeedableRng};

use crate::{RandomSource, RngSource};

pub const DEFAULT_WORDS: [&str; 4] = ["abc", "dec", "cbc", "g"];

/// Replays a fixed list of indices and records every bound it was asked for.
///
/// Panics when it runs out of indices or when a scripted index is outside the requested bound, so
/// a test fails loudly if the sampler draws more than expected.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    indices: VecDeque<usize>,
    pub bounds: Vec<usize>,
}

impl ScriptedSource {
    pub fn new(indices: &[usize]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            bounds: Vec::new(),
        }
    }

    pub fn draws(&self) -> usize {
        self.bounds.len()
    }

    pub fn remaining(&self) -> usize {
        self.indices.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.bounds.push(bound);
        let index = self
            .indices
            .pop_front()
            .expect("scripted source ran out of indices");
        assert!(index < bound, "scripted index {} out of bound {}", index, bound);
        index
    }
}

pub fn seeded_source(seed: u64) -> RngSource<StdRng> {
    RngSource::new(StdRng::seed_from_u64(seed))
}
