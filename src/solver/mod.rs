use crate::cards::{Card, CardSet};
use crate::engine::score::belote_team;
use crate::state::{GameState, Play, Trick};
use crate::types::{team_of, Seat, Suit, NS, NUM_SEATS};

pub mod batch;
pub mod move_order;
pub mod search;
pub mod tt;
pub mod tt_array;

pub use batch::solve_batch;
pub use search::search_root;
pub use tt::{InMemoryTT, TranspositionTable};
pub use tt_array::FixedTT;

/// Default direct-mapped table: 2^22 slots, roughly 64 MiB.
pub const DEFAULT_TT_CAPACITY: usize = 1 << 22;

/// A fully specified game to solve: the four hands, the trump, the
/// contracting player, any cards already played in the current trick, the
/// trick's leader and points already banked by each team.
#[derive(Debug, Clone, Copy)]
pub struct Deal {
    pub hands: [CardSet; 4],
    pub trump: Suit,
    pub contract_player: Seat,
    pub trick: Trick,
    pub starter: Seat,
    pub ns_points: u16,
    pub ew_points: u16,
}

impl Deal {
    /// A fresh deal: empty trick, no prior points.
    #[inline]
    pub fn new(hands: [CardSet; 4], trump: Suit, contract_player: Seat, starter: Seat) -> Self {
        Self {
            hands,
            trump,
            contract_player,
            trick: Trick::new(),
            starter,
            ns_points: 0,
            ew_points: 0,
        }
    }

    /// Checked constructor for callers holding hands as a slice. The hand
    /// count is the one structural error the solver signals; every other
    /// precondition is caller-guaranteed.
    pub fn from_hands(
        hands: &[CardSet],
        trump: Suit,
        contract_player: Seat,
        current_trick: &[(Seat, Card)],
        starter: Seat,
        ns_points: u16,
        ew_points: u16,
    ) -> Result<Self, String> {
        if hands.len() != NUM_SEATS {
            return Err(format!(
                "malformed input: expected {NUM_SEATS} hands, got {}",
                hands.len()
            ));
        }
        debug_assert!(current_trick.len() < 4, "a full trick must be resolved first");
        let mut trick = Trick::new();
        for &(seat, card) in current_trick {
            trick.push(Play { seat, card });
        }
        Ok(Self {
            hands: [hands[0], hands[1], hands[2], hands[3]],
            trump,
            contract_player,
            trick,
            starter,
            ns_points,
            ew_points,
        })
    }

    #[inline]
    fn prior_points(&self, team: u8) -> u16 {
        if team == NS {
            self.ns_points
        } else {
            self.ew_points
        }
    }
}

/// Solver facade owning the transposition table. The table is allocated
/// once and intentionally reused across `solve` calls; a single instance
/// is not safe for concurrent use.
pub struct Solver {
    tt: FixedTT,
    /// Cached entries are relative to the contracting team, and their
    /// capot tails assume a fixed zero-ness of the prior scores. A later
    /// call under a different context must not see them.
    last_context: Option<(u8, bool, bool)>,
}

impl Solver {
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_pow2(DEFAULT_TT_CAPACITY)
    }

    /// Construct with a custom power-of-two table size.
    #[inline]
    pub fn with_capacity_pow2(cap_pow2: usize) -> Self {
        Self {
            tt: FixedTT::with_capacity_pow2(cap_pow2),
            last_context: None,
        }
    }

    /// Maximum total score the contracting team can guarantee from the
    /// deal, against a defence minimising that score. Prior points are
    /// folded into the result, and the belote bonus is added when one
    /// contracting-team hand starts with both King and Queen of trump.
    pub fn solve(&mut self, deal: &Deal) -> i32 {
        let contract_team = team_of(deal.contract_player);
        let context = (contract_team, deal.ns_points == 0, deal.ew_points == 0);
        if self.last_context != Some(context) {
            if self.last_context.is_some() {
                self.tt.clear();
            }
            self.last_context = Some(context);
        }
        let mut state = GameState::new(
            deal.hands,
            deal.trump,
            deal.trick,
            deal.starter,
            [deal.ns_points, deal.ew_points],
        );

        let delta = search::search_root(&mut state, contract_team, &mut self.tt);

        let mut total = i32::from(deal.prior_points(contract_team)) + delta;
        if belote_team(&deal.hands, deal.trump) == Some(contract_team) {
            total += 20;
        }
        total
    }

    /// Scores under each of the four trump suits, indexed by suit. The
    /// deal's own trump field is ignored. Runs on the same table, so a
    /// warm cache carries across the four searches.
    pub fn solve_all_suits(&mut self, deal: &Deal) -> [i32; 4] {
        let mut out = [0i32; 4];
        for suit in Suit::playable() {
            let mut d = *deal;
            d.trump = suit;
            out[suit.index() as usize] = self.solve(&d);
        }
        out
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
