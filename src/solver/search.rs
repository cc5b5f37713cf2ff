//! Depth-first alpha-beta minimax over the remaining deal.
//!
//! The contracting team maximises, the defenders minimise. Each node's
//! value is the number of points the contracting team still adds from that
//! node to the end of the deal; prior scores are folded in by the caller
//! at the root. Keeping node values accumulation-free is what lets the
//! transposition table serve hits across solves with different starting
//! scores.

use crate::cards::Card;
use crate::engine::apply::{play, unplay};
use crate::state::GameState;
use crate::types::{team_of, Team};

use super::move_order::{ordered_moves, MAX_MOVES};
use super::tt::TranspositionTable;

/// Root window. The natural closed interval for a deal is 0..=252; the
/// wider bounds disable window cuts at the root.
pub(crate) const ROOT_ALPHA: i32 = -1;
pub(crate) const ROOT_BETA: i32 = 163;

/// Solve the state to terminal. Returns the points the contracting team
/// adds from here on under optimal play by both sides. The state is
/// mutated during the search and restored before returning.
pub fn search_root(
    state: &mut GameState,
    contract_team: Team,
    tt: &mut dyn TranspositionTable,
) -> i32 {
    alpha_beta(state, contract_team, ROOT_ALPHA, ROOT_BETA, tt)
}

fn alpha_beta(
    state: &mut GameState,
    contract_team: Team,
    mut alpha: i32,
    mut beta: i32,
    tt: &mut dyn TranspositionTable,
) -> i32 {
    if state.is_terminal() {
        return 0;
    }

    let key = state.zobrist;
    if let Some(value) = tt.get(key) {
        return value;
    }

    let attacker = team_of(state.to_play()) == contract_team;

    let mut moves = [Card::from_id(0); MAX_MOVES];
    let n = ordered_moves(state.legal_moves(), state.trump, &mut moves);
    debug_assert!(n > 0, "a non-empty hand always has a legal move");

    let mut best = if attacker { -1 } else { 9999 };

    for &card in &moves[..n] {
        let undo = play(state, card);
        // Points banked by completing a trick shift the window for the
        // remainder of the deal.
        let gained = undo.gain_for(contract_team);
        let value = gained + alpha_beta(state, contract_team, alpha - gained, beta - gained, tt);
        unplay(state, undo);

        if attacker {
            if value > best {
                best = value;
            }
            if best > alpha {
                alpha = best;
            }
        } else {
            if value < best {
                best = value;
            }
            if best < beta {
                beta = best;
            }
        }
        if beta <= alpha {
            break;
        }
    }

    tt.put(key, best);
    best
}
