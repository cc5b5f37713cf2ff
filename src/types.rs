use serde::{Deserialize, Serialize};

/// Seats around the table, clockwise. Seats 0 and 2 form the NS team,
/// seats 1 and 3 the EW team.
pub type Seat = u8;
pub const NUM_SEATS: usize = 4;

/// Team index: 0 = NS (seats 0/2), 1 = EW (seats 1/3).
pub type Team = u8;
pub const NS: Team = 0;
pub const EW: Team = 1;

#[inline]
pub fn team_of(seat: Seat) -> Team {
    seat % 2
}

#[inline]
pub fn other_team(team: Team) -> Team {
    1 - team
}

#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % 4
}

#[inline]
pub fn partner(seat: Seat) -> Seat {
    (seat + 2) % 4
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    /// Absence of a trump context; never a card's suit.
    None,
}

impl Suit {
    /// The four playable suits, in card-id order.
    #[inline]
    pub fn playable() -> [Suit; 4] {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
    }

    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
            Suit::None => 4,
        }
    }

    #[inline]
    pub fn from_index(i: u8) -> Option<Suit> {
        match i {
            0 => Some(Suit::Hearts),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Clubs),
            3 => Some(Suit::Spades),
            4 => Some(Suit::None),
            _ => None,
        }
    }

    /// Suit of a card id; ids are dense over 0..32 so 0..=3 is total here.
    #[inline]
    pub(crate) fn of_card(i: u8) -> Suit {
        match i {
            0 => Suit::Hearts,
            1 => Suit::Diamonds,
            2 => Suit::Clubs,
            _ => Suit::Spades,
        }
    }

    #[inline]
    pub fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::None => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    #[inline]
    pub fn all() -> [Rank; 8] {
        [
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }

    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Rank::Seven => 0,
            Rank::Eight => 1,
            Rank::Nine => 2,
            Rank::Ten => 3,
            Rank::Jack => 4,
            Rank::Queen => 5,
            Rank::King => 6,
            Rank::Ace => 7,
        }
    }

    #[inline]
    pub(crate) fn of_card(i: u8) -> Rank {
        match i & 7 {
            0 => Rank::Seven,
            1 => Rank::Eight,
            2 => Rank::Nine,
            3 => Rank::Ten,
            4 => Rank::Jack,
            5 => Rank::Queen,
            6 => Rank::King,
            _ => Rank::Ace,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        const NAMES: [&str; 8] = ["7", "8", "9", "10", "J", "Q", "K", "A"];
        NAMES[self.index() as usize]
    }
}
