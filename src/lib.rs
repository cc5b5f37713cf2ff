#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod cards;
pub mod state;
pub mod hash;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::cards::{Card, CardSet};
pub use crate::engine::apply::{play, unplay, UndoInfo};
pub use crate::engine::score::{belote_team, trick_points, trick_winner};
pub use crate::hash::{recompute_zobrist, zobrist_key};
pub use crate::solver::{solve_batch, Deal, Solver};
pub use crate::state::{is_terminal, legal_moves, GameState, Play, Trick};
pub use crate::types::{team_of, Rank, Seat, Suit, Team};
