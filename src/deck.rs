//! Deck construction and the build pipeline.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::BuildOption;

/// An ordered sequence of playing cards.
///
/// A deck is produced by [`Deck::standard`] or by one of the build entry
/// points, which fold an ordered list of [`BuildOption`] values over the
/// standard 52-card deck. There is no uniqueness constraint: a deck may
/// contain duplicate cards (multi-deck) or any number of jokers. The
/// finished deck is returned to the caller as an owned value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Deck {
    pub(crate) cards: Vec<Card>,
}

impl Deck {
    /// Creates the standard 52-card deck.
    ///
    /// Cards are generated suit-major (spades, diamonds, clubs, hearts),
    /// each suit ascending from ace to king. Jokers are excluded.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.cards()[0].to_string(), "Ace of Spades");
    /// assert_eq!(deck.cards()[51].to_string(), "King of Hearts");
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Builds a deck, applying the given options in order.
    ///
    /// Each option observes the output of the previous one. Shuffles draw
    /// from the thread-local OS-entropy generator and are not reproducible
    /// across calls; use [`Deck::build_seeded`] for deterministic output.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{BuildOption, Deck};
    ///
    /// let deck = Deck::build([BuildOption::AddJokers(2), BuildOption::Shuffle]);
    /// assert_eq!(deck.len(), 54);
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn build<I>(options: I) -> Self
    where
        I: IntoIterator<Item = BuildOption>,
    {
        Self::build_with_rng(options, &mut rand::rng())
    }

    /// Builds a deck with a generator seeded from `seed`.
    ///
    /// The same seed and options always produce the same deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{BuildOption, Deck};
    ///
    /// let first = Deck::build_seeded([BuildOption::Shuffle], 42);
    /// let second = Deck::build_seeded([BuildOption::Shuffle], 42);
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn build_seeded<I>(options: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = BuildOption>,
    {
        Self::build_with_rng(options, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Builds a deck, drawing any randomness from the caller's generator.
    ///
    /// [`Deck::build`] and [`Deck::build_seeded`] both delegate here.
    #[must_use]
    pub fn build_with_rng<I, R>(options: I, rng: &mut R) -> Self
    where
        I: IntoIterator<Item = BuildOption>,
        R: Rng + ?Sized,
    {
        let mut deck = Self::standard();

        for option in options {
            option.apply(&mut deck, rng);
        }

        deck
    }

    /// Returns the cards in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck contains no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns an iterator over the cards in the deck.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Consumes the deck, returning the underlying cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
