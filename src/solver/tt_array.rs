use super::tt::TranspositionTable;

/// Fixed-size direct-mapped transposition table.
/// - Capacity must be a power of two
/// - Index = low bits of the key
/// - Replacement: unconditional overwrite, no aging or depth tagging
/// - Stores the full 64-bit key for verification on probe
pub struct FixedTT {
    mask: usize,
    keys: Vec<u64>,
    values: Vec<i32>,
    count: usize,
}

impl FixedTT {
    #[inline]
    pub fn with_capacity_pow2(cap_pow2: usize) -> Self {
        assert!(
            cap_pow2.is_power_of_two(),
            "TT capacity must be a power of two"
        );
        Self {
            mask: cap_pow2 - 1,
            keys: vec![0u64; cap_pow2],
            values: vec![0i32; cap_pow2],
            count: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        // Low bits; Zobrist keys are well-mixed.
        (key as usize) & self.mask
    }
}

impl TranspositionTable for FixedTT {
    #[inline]
    fn get(&self, key: u64) -> Option<i32> {
        let idx = self.index(key);
        if self.keys[idx] == key {
            Some(self.values[idx])
        } else {
            None
        }
    }

    #[inline]
    fn put(&mut self, key: u64, value: i32) {
        let idx = self.index(key);
        if self.keys[idx] == 0 {
            self.count += 1;
        }
        self.keys[idx] = key;
        self.values[idx] = value;
    }

    #[inline]
    fn clear(&mut self) {
        for k in &mut self.keys {
            *k = 0;
        }
        for v in &mut self.values {
            *v = 0;
        }
        self.count = 0;
    }

    #[inline]
    fn len(&self) -> usize {
        self.count
    }
}
