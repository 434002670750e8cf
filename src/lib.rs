//! A playing-card deck builder with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type built by folding an ordered list of
//! [`BuildOption`] values over the standard 52-card deck: add jokers,
//! expand to multiple decks, remove ranks or suits, shuffle, and sort.
//! Individual cards render as `<Rank> of <Suit>` via [`core::fmt::Display`].
//!
//! # Example
//!
//! ```
//! use deckrs::{BuildOption, Deck, Rank};
//!
//! let deck = Deck::build([
//!     BuildOption::MultiDeck(2),
//!     BuildOption::AddJokers(2),
//!     BuildOption::Shuffle,
//! ]);
//! assert_eq!(deck.len(), 106);
//! assert_eq!(deck.iter().filter(|card| card.rank == Rank::Joker).count(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::ParseCardError;
pub use options::{BuildOption, CardOrdering};
