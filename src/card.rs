//! Card, rank, and suit types.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseCardError;

/// Card suit.
///
/// Declaration order carries the sort order used by
/// [`BuildOption::DefaultSort`](crate::BuildOption::DefaultSort):
/// `Spades < Diamonds < Clubs < Hearts`. [`Suit::None`] is reserved for
/// cards without a suit (jokers) and orders below every real suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Suit {
    /// No suit (jokers).
    None,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// The four standard suits, in deck generation order.
    pub const STANDARD: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Returns the canonical display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Spades" => Ok(Self::Spades),
            "Diamonds" => Ok(Self::Diamonds),
            "Clubs" => Ok(Self::Clubs),
            "Hearts" => Ok(Self::Hearts),
            _ => Err(ParseCardError::UnknownSuit),
        }
    }
}

/// Card rank.
///
/// Declaration order carries the sort order: `Joker < Ace < Two < … < King`.
/// Jokers receive special treatment in the default sort, which places them
/// after every other card instead of first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    /// Joker.
    Joker,
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// The thirteen standard ranks, ascending from ace to king. Jokers are
    /// not part of the standard deck and are excluded.
    pub const STANDARD: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the canonical display name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Joker => "Joker",
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Joker" => Ok(Self::Joker),
            "Ace" => Ok(Self::Ace),
            "Two" => Ok(Self::Two),
            "Three" => Ok(Self::Three),
            "Four" => Ok(Self::Four),
            "Five" => Ok(Self::Five),
            "Six" => Ok(Self::Six),
            "Seven" => Ok(Self::Seven),
            "Eight" => Ok(Self::Eight),
            "Nine" => Ok(Self::Nine),
            "Ten" => Ok(Self::Ten),
            "Jack" => Ok(Self::Jack),
            "Queen" => Ok(Self::Queen),
            "King" => Ok(Self::King),
            _ => Err(ParseCardError::UnknownRank),
        }
    }
}

/// A playing card.
///
/// Two cards are equal iff rank and suit are both equal; cards carry no
/// identity beyond value equality and are freely copyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// The joker card, `Joker of None`.
    pub const JOKER: Self = Self::new(Rank::Joker, Suit::None);

    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.rank, Rank::Joker)
    }
}

impl fmt::Display for Card {
    /// Renders the card as `<Rank> of <Suit>`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Rank::Ace, Suit::Spades);
    /// assert_eq!(card.to_string(), "Ace of Spades");
    /// assert_eq!(Card::JOKER.to_string(), "Joker of None");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the canonical rendered form, e.g. `"Queen of Hearts"`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let card: Card = "Queen of Hearts".parse().unwrap();
    /// assert_eq!(card, Card::new(Rank::Queen, Suit::Hearts));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s.split_once(" of ").ok_or(ParseCardError::MissingSeparator)?;
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}

/// Number of cards in a single standard deck.
pub const DECK_SIZE: usize = 52;
