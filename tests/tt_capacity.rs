use belotree::solver::{FixedTT, TranspositionTable};

#[test]
fn capacity_must_be_a_power_of_two() {
    let tt = FixedTT::with_capacity_pow2(1 << 10);
    assert_eq!(tt.capacity(), 1024);
    assert!(tt.is_empty());
}

#[test]
#[should_panic(expected = "power of two")]
fn odd_capacity_is_rejected() {
    let _ = FixedTT::with_capacity_pow2(1000);
}

#[test]
fn put_get_roundtrip_and_overwrite() {
    let mut tt = FixedTT::with_capacity_pow2(1 << 8);

    tt.put(0x1234_5678_9ABC_DEF0, 42);
    assert_eq!(tt.get(0x1234_5678_9ABC_DEF0), Some(42));
    assert_eq!(tt.len(), 1);

    // Same slot, same key: value replaced unconditionally.
    tt.put(0x1234_5678_9ABC_DEF0, 7);
    assert_eq!(tt.get(0x1234_5678_9ABC_DEF0), Some(7));
    assert_eq!(tt.len(), 1);

    // Colliding key (same low bits): the resident entry is evicted.
    let colliding = 0x1234_5678_9ABC_DEF0 ^ (0xFFu64 << 32);
    tt.put(colliding, 99);
    assert_eq!(tt.get(colliding), Some(99));
    assert_eq!(tt.get(0x1234_5678_9ABC_DEF0), None);
}

#[test]
fn clear_empties_the_table() {
    let mut tt = FixedTT::with_capacity_pow2(1 << 8);
    tt.put(0xAAAA_BBBB_CCCC_DDDD, 1);
    tt.put(0x1111_2222_3333_4444, 2);
    tt.clear();
    assert!(tt.is_empty());
    assert_eq!(tt.get(0xAAAA_BBBB_CCCC_DDDD), None);
}
