//! Playing cards: suit, colour, rank, and facing.
//!
//! A `Card` is an immutable value. Flipping a card produces a new value
//! rather than mutating the one stored in a pile.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Derived colour: hearts and diamonds are red, clubs and spades black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// Card colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// A playing card.
///
/// Rank 1 is the Ace, 11/12/13 are Jack/Queen/King.
///
/// ## Example
///
/// ```
/// use klondike_engine::cards::{Card, Color, Suit};
///
/// let king = Card::new(Suit::Spades, Card::KING).flipped_up();
/// assert!(king.face_up);
/// assert_eq!(king.color(), Color::Black);
/// assert_eq!(king.to_string(), "K♠");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRecord")]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
}

/// A rank outside `1..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("rank must be 1-13, got {rank}")]
pub struct RankError {
    pub rank: u8,
}

/// Wire form of a `Card`, checked on the way in.
#[derive(Deserialize)]
struct CardRecord {
    suit: Suit,
    rank: u8,
    face_up: bool,
}

impl TryFrom<CardRecord> for Card {
    type Error = RankError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let card = Card::try_new(record.suit, record.rank)?;
        Ok(Self {
            face_up: record.face_up,
            ..card
        })
    }
}

impl Card {
    pub const ACE: u8 = 1;
    pub const JACK: u8 = 11;
    pub const QUEEN: u8 = 12;
    pub const KING: u8 = 13;

    /// Create a face-down card.
    ///
    /// Panics if `rank` is outside `1..=13`.
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Self {
        assert!(
            (Self::ACE..=Self::KING).contains(&rank),
            "Rank must be 1-13, got {rank}"
        );
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-down card, rejecting ranks outside `1..=13`.
    pub fn try_new(suit: Suit, rank: u8) -> Result<Self, RankError> {
        if !(Self::ACE..=Self::KING).contains(&rank) {
            return Err(RankError { rank });
        }
        Ok(Self {
            suit,
            rank,
            face_up: false,
        })
    }

    /// Derived colour of the card's suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Same card, face-up.
    #[must_use]
    pub const fn flipped_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    /// Same card, face-down.
    #[must_use]
    pub const fn flipped_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }

    /// Identity of the card ignoring its facing.
    #[must_use]
    pub const fn key(self) -> (Suit, u8) {
        (self.suit, self.rank)
    }

    /// Rank label: "A", "2".."10", "J", "Q", "K".
    #[must_use]
    pub fn rank_label(self) -> String {
        match self.rank {
            Self::ACE => "A".to_string(),
            Self::JACK => "J".to_string(),
            Self::QUEEN => "Q".to_string(),
            Self::KING => "K".to_string(),
            n => n.to_string(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}
