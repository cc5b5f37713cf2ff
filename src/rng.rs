use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::cards::{Card, CardSet, TOTAL_CARDS};
use crate::types::NUM_SEATS;

/// Deterministic RNG factory for a given (seed, deal_id) pair.
///
/// Uses the PCG 64-bit generator for reproducible sequences: equal inputs
/// give equal deals across runs and platforms.
#[inline]
pub fn rng_for_deal(seed: u64, deal_id: u64) -> impl Rng {
    Pcg64::seed_from_u64(seed ^ deal_id)
}

/// Shuffle the 32-card deck and deal eight cards to each seat.
pub fn random_hands<R: Rng>(rng: &mut R) -> [CardSet; NUM_SEATS] {
    let mut deck: Vec<u8> = (0..TOTAL_CARDS).collect();
    deck.shuffle(rng);

    let mut hands = [CardSet::new(); NUM_SEATS];
    for (i, &id) in deck.iter().enumerate() {
        hands[i / 8].add(Card::from_id(id));
    }
    hands
}
