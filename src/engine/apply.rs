//! In-place play/unplay with exact undo.
//!
//! `play` removes the card from the acting seat's hand, appends it to the
//! trick and maintains the Zobrist digest incrementally. When the fourth
//! card lands, the trick is resolved on the spot: winner, points, the +10
//! last-trick bonus and the +90 capot bonus when the losing team finishes
//! the deal without a point. `unplay` restores the state bit-for-bit.

use crate::cards::Card;
use crate::engine::score::{trick_points, trick_winner};
use crate::hash::{z_hand, z_trick, z_turn};
use crate::state::{GameState, Play, Trick};
use crate::types::{next_seat, other_team, team_of, Seat, Team};

/// Bookkeeping for a trick completed by a `play` call.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTrick {
    pub winner: Seat,
    /// Points credited to the winner's team, bonuses included.
    pub points: u16,
    /// The completed trick, kept for undo.
    pub trick: Trick,
    pub prev_starter: Seat,
}

#[derive(Debug, Clone, Copy)]
pub struct UndoInfo {
    pub seat: Seat,
    pub card: Card,
    pub prev_zobrist: u64,
    pub resolved: Option<ResolvedTrick>,
}

impl UndoInfo {
    /// Points this play added for the given team (zero unless it completed
    /// a trick that team won).
    #[inline]
    pub fn gain_for(&self, team: Team) -> i32 {
        match self.resolved {
            Some(r) if team_of(r.winner) == team => i32::from(r.points),
            _ => 0,
        }
    }
}

pub fn play(state: &mut GameState, card: Card) -> UndoInfo {
    let seat = state.to_play();
    debug_assert!(state.hands[seat as usize].contains(card));

    let prev_zobrist = state.zobrist;

    state.hands[seat as usize].remove(card);
    state.zobrist ^= z_hand(seat, card) ^ z_turn(seat) ^ z_trick(card);
    state.trick.push(Play { seat, card });

    if state.trick.len() < 4 {
        state.zobrist ^= z_turn(next_seat(seat));
        return UndoInfo {
            seat,
            card,
            prev_zobrist,
            resolved: None,
        };
    }

    // Fourth card: resolve the trick in place.
    let winner = trick_winner(&state.trick, state.trump);
    let mut points = trick_points(&state.trick, state.trump);

    let last_trick = state.hands.iter().all(|h| h.is_empty());
    if last_trick {
        points += 10; // dix de der
    }

    let winner_team = team_of(winner);
    state.scores[winner_team as usize] += points;
    if last_trick && state.scores[other_team(winner_team) as usize] == 0 {
        // The losing side took nothing: capot.
        state.scores[winner_team as usize] += 90;
        points += 90;
    }

    for p in state.trick.plays() {
        state.zobrist ^= z_trick(p.card);
    }
    state.zobrist ^= z_turn(winner);

    let resolved = ResolvedTrick {
        winner,
        points,
        trick: state.trick,
        prev_starter: state.starter,
    };
    state.trick = Trick::new();
    state.starter = winner;

    UndoInfo {
        seat,
        card,
        prev_zobrist,
        resolved: Some(resolved),
    }
}

pub fn unplay(state: &mut GameState, undo: UndoInfo) {
    if let Some(r) = undo.resolved {
        state.scores[team_of(r.winner) as usize] -= r.points;
        state.trick = r.trick;
        state.starter = r.prev_starter;
    }
    let popped = state.trick.pop();
    debug_assert_eq!(
        popped.map(|p| p.card),
        Some(undo.card),
        "unplay must mirror the last play"
    );
    state.hands[undo.seat as usize].add(undo.card);
    state.zobrist = undo.prev_zobrist;
}
