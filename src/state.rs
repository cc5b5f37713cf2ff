//! Search state: the four hands, the trick in progress and the legal-move
//! generator implementing the Coinche following rules.

use crate::cards::{Card, CardSet};
use crate::hash::recompute_zobrist;
use crate::types::{Seat, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

/// The trick in progress: up to four (seat, card) entries in play order.
/// The first entry fixes the lead suit.
#[derive(Debug, Clone, Copy)]
pub struct Trick {
    plays: [Play; 4],
    len: u8,
}

/// Popped slots keep stale entries, so equality only looks at the live
/// prefix.
impl PartialEq for Trick {
    fn eq(&self, other: &Self) -> bool {
        self.plays() == other.plays()
    }
}

impl Eq for Trick {}

impl Trick {
    #[inline]
    pub fn new() -> Self {
        Self {
            plays: [Play {
                seat: 0,
                card: Card::from_id(0),
            }; 4],
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn push(&mut self, play: Play) {
        debug_assert!(self.len < 4, "a trick never exceeds 4 plays");
        self.plays[self.len as usize] = play;
        self.len += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Play> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.plays[self.len as usize])
        }
    }

    #[inline]
    pub fn plays(&self) -> &[Play] {
        &self.plays[..self.len as usize]
    }

    #[inline]
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays().first().map(|p| p.card.suit())
    }

    /// Strength of the best trump played so far, if any.
    #[inline]
    pub fn highest_trump_strength(&self, trump: Suit) -> Option<i32> {
        self.plays()
            .iter()
            .filter(|p| p.card.suit() == trump)
            .map(|p| p.card.strength(trump))
            .max()
    }
}

impl Default for Trick {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub hands: [CardSet; 4],
    pub trump: Suit,
    pub trick: Trick,
    /// Seat that led the current trick.
    pub starter: Seat,
    /// Running trick points per team: `[NS, EW]`.
    pub scores: [u16; 2],
    /// Cached Zobrist digest, maintained incrementally by play/unplay.
    pub zobrist: u64,
}

impl GameState {
    pub fn new(
        hands: [CardSet; 4],
        trump: Suit,
        trick: Trick,
        starter: Seat,
        scores: [u16; 2],
    ) -> Self {
        let mut state = Self {
            hands,
            trump,
            trick,
            starter,
            scores,
            zobrist: 0,
        };
        state.zobrist = recompute_zobrist(&state);
        state
    }

    #[inline]
    pub fn to_play(&self) -> Seat {
        (self.starter + self.trick.len) % 4
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.trick.is_empty() && self.hands.iter().all(|h| h.is_empty())
    }

    /// Legal plays for the seat to act, as a bitmask.
    ///
    /// Rule order: follow the lead suit if able (beating the best trump in
    /// the trick when trump was led and beating is possible); otherwise
    /// trump, over-trumping when possible; otherwise anything. The
    /// over-trump obligation applies even when the partner is winning.
    /// Non-empty whenever the hand is non-empty.
    pub fn legal_moves(&self) -> CardSet {
        let hand = self.hands[self.to_play() as usize];
        let Some(lead) = self.trick.lead_suit() else {
            return hand;
        };

        let follow = hand.suit_cards(lead);
        if !follow.is_empty() {
            if lead == self.trump {
                let floor = self.trick.highest_trump_strength(self.trump).unwrap_or(-1);
                let higher = stronger_trumps(follow, self.trump, floor);
                if !higher.is_empty() {
                    return higher;
                }
            }
            return follow;
        }

        let trumps = hand.suit_cards(self.trump);
        if !trumps.is_empty() {
            let floor = self.trick.highest_trump_strength(self.trump).unwrap_or(-1);
            let higher = stronger_trumps(trumps, self.trump, floor);
            if !higher.is_empty() {
                return higher;
            }
            return trumps;
        }

        hand
    }
}

#[inline]
fn stronger_trumps(set: CardSet, trump: Suit, floor: i32) -> CardSet {
    let mut out = CardSet::new();
    for card in set.iter() {
        if card.strength(trump) > floor {
            out.add(card);
        }
    }
    out
}

/// Re-export minimal surface for callers as free functions.
#[inline]
pub fn legal_moves(state: &GameState) -> CardSet {
    state.legal_moves()
}

#[inline]
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}
