use std::collections::HashMap;

/// Transposition cache keyed by the 64-bit Zobrist digest. Values are the
/// solved score delta for the subtree rooted at the keyed state.
pub trait TranspositionTable {
    fn get(&self, key: u64) -> Option<i32>;
    fn put(&mut self, key: u64, value: i32);
    fn clear(&mut self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Simple hash-map implementation, used for parity testing against the
/// direct-mapped array table.
#[derive(Debug, Default)]
pub struct InMemoryTT {
    map: HashMap<u64, i32>,
}

impl InMemoryTT {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: HashMap::with_capacity(cap),
        }
    }
}

impl TranspositionTable for InMemoryTT {
    #[inline]
    fn get(&self, key: u64) -> Option<i32> {
        self.map.get(&key).copied()
    }

    #[inline]
    fn put(&mut self, key: u64, value: i32) {
        self.map.insert(key, value);
    }

    #[inline]
    fn clear(&mut self) {
        self.map.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }
}
