//! Multi-deal throughput: fan a batch of games out across rayon workers.
//!
//! Each worker owns its own `Solver`, so transposition entries are never
//! shared between threads and no locking is needed; results land in a
//! pre-allocated `N x 4` buffer through disjoint per-index writes.

use log::debug;
use rayon::prelude::*;

use crate::cards::CardSet;
use crate::types::{Seat, Suit};

use super::{Deal, Solver};

/// Solve every game under each of the four trump suits. The contracting
/// player and trick leader are fixed across the batch. Row `i` holds the
/// scores for `games[i]`, indexed by suit.
pub fn solve_batch(
    games: &[[CardSet; 4]],
    contract_player: Seat,
    starter: Seat,
) -> Vec<[i32; 4]> {
    let mut results = vec![[0i32; 4]; games.len()];

    games
        .par_iter()
        .zip(results.par_iter_mut())
        .for_each_init(Solver::new, |solver, (hands, out)| {
            let deal = Deal::new(*hands, Suit::Hearts, contract_player, starter);
            *out = solver.solve_all_suits(&deal);
        });

    debug!(
        "solved batch of {} deals under the four trump suits",
        games.len()
    );
    results
}
