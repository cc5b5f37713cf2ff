//! Trick resolution and bonus helpers.

use crate::cards::{Card, CardSet};
use crate::state::Trick;
use crate::types::{team_of, Rank, Seat, Suit, Team};

/// Strength used to pick a trick winner: any trump outranks any non-trump,
/// and a non-trump card only competes when it follows the lead suit.
#[inline]
fn effective_strength(card: Card, lead: Suit, trump: Suit) -> i32 {
    if card.suit() == trump {
        1000 + card.strength(trump)
    } else if card.suit() == lead {
        card.strength(trump)
    } else {
        -1
    }
}

/// Seat that wins the trick. The trick must hold at least one play.
pub fn trick_winner(trick: &Trick, trump: Suit) -> Seat {
    let plays = trick.plays();
    debug_assert!(!plays.is_empty());
    let lead = plays[0].card.suit();

    let mut winner = plays[0].seat;
    let mut best = -1;
    for p in plays {
        let s = effective_strength(p.card, lead, trump);
        if s > best {
            best = s;
            winner = p.seat;
        }
    }
    winner
}

/// Card points of the trick, bonuses excluded.
#[inline]
pub fn trick_points(trick: &Trick, trump: Suit) -> u16 {
    trick.plays().iter().map(|p| p.card.points(trump)).sum()
}

/// Team holding both King and Queen of trump in a single hand, if any.
/// Worth +20 to that team, awarded at the root of a solve.
pub fn belote_team(hands: &[CardSet; 4], trump: Suit) -> Option<Team> {
    if trump == Suit::None {
        return None;
    }
    let king = Card::new(trump, Rank::King);
    let queen = Card::new(trump, Rank::Queen);
    hands
        .iter()
        .position(|h| h.contains(king) && h.contains(queen))
        .map(|seat| team_of(seat as Seat))
}
