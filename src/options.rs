//! Deck build options.

use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::deck::Deck;

/// Comparison function consumed by [`BuildOption::SortBy`].
///
/// Returns the ordering of `a` relative to `b`; the sort is stable, so
/// cards that compare [`Ordering::Equal`] keep their pre-sort relative
/// order. Non-capturing closures coerce to this type.
pub type CardOrdering = fn(a: &Card, b: &Card) -> Ordering;

/// A single deck transformation.
///
/// The build entry points on [`Deck`] apply options strictly in the order
/// supplied by the caller; each option observes the output of the previous
/// one and may append, remove, reorder, or resize the deck. Options are
/// independent and composable, and no compatibility validation is
/// performed: removing an absent rank or suit is simply a no-op.
///
/// # Example
///
/// ```
/// use deckrs::{BuildOption, Deck, Rank};
///
/// let deck = Deck::build([
///     BuildOption::RemoveRanks(vec![Rank::King, Rank::Queen, Rank::Jack]),
///     BuildOption::AddJokers(2),
///     BuildOption::Shuffle,
/// ]);
/// assert_eq!(deck.len(), 42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BuildOption {
    /// Expands the deck to `n` total standard decks by appending `n - 1`
    /// freshly generated base decks, preserving arrival order. No-op for
    /// `n <= 1`.
    MultiDeck(usize),
    /// Appends `n` jokers (`Joker of None`) to the end of the deck.
    AddJokers(usize),
    /// Removes every card of the given rank, preserving the relative order
    /// of the surviving cards.
    RemoveRank(Rank),
    /// Removes every card whose rank appears in the list.
    RemoveRanks(Vec<Rank>),
    /// Removes every card of the given suit, preserving the relative order
    /// of the surviving cards.
    RemoveSuit(Suit),
    /// Removes every card whose suit appears in the list.
    RemoveSuits(Vec<Suit>),
    /// Randomly permutes the deck in place with an unbiased shuffle drawn
    /// from the pipeline's generator.
    Shuffle,
    /// Stably sorts the deck with a caller-supplied comparison.
    SortBy(CardOrdering),
    /// Stably sorts the deck by rank ascending, then suit ascending, with
    /// jokers after every other card.
    DefaultSort,
}

impl BuildOption {
    /// Applies this option to `deck`, drawing any randomness from `rng`.
    ///
    /// This is the dispatcher the build entry points fold over; it is also
    /// usable directly to transform an existing deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{BuildOption, Deck, Rank};
    ///
    /// let mut deck = Deck::standard();
    /// BuildOption::RemoveRank(Rank::Ace).apply(&mut deck, &mut rand::rng());
    /// assert_eq!(deck.len(), 48);
    /// ```
    pub fn apply<R: Rng + ?Sized>(&self, deck: &mut Deck, rng: &mut R) {
        let cards = &mut deck.cards;
        match self {
            Self::MultiDeck(n) => {
                for _ in 1..*n {
                    cards.extend_from_slice(Deck::standard().cards());
                }
            }
            Self::AddJokers(n) => {
                cards.extend(core::iter::repeat_n(Card::JOKER, *n));
            }
            Self::RemoveRank(rank) => cards.retain(|card| card.rank != *rank),
            Self::RemoveRanks(ranks) => cards.retain(|card| !ranks.contains(&card.rank)),
            Self::RemoveSuit(suit) => cards.retain(|card| card.suit != *suit),
            Self::RemoveSuits(suits) => cards.retain(|card| !suits.contains(&card.suit)),
            Self::Shuffle => cards.shuffle(rng),
            Self::SortBy(compare) => cards.sort_by(*compare),
            Self::DefaultSort => cards.sort_by(default_order),
        }
    }
}

/// Default deck ordering: jokers compare greater than every other card in
/// either argument position and equal to each other, so a stable sort sends
/// them to the end without reordering them; all other cards compare by rank,
/// then by suit.
fn default_order(a: &Card, b: &Card) -> Ordering {
    match (a.is_joker(), b.is_joker()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)),
    }
}
