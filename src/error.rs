//! Error types for card parsing.

use thiserror::Error;

/// Errors that can occur when parsing a card, rank, or suit from its
/// canonical rendered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input is missing the ` of ` separator between rank and suit.
    #[error("missing ` of ` separator")]
    MissingSeparator,
    /// The rank name is not recognized.
    #[error("unrecognized rank name")]
    UnknownRank,
    /// The suit name is not recognized.
    #[error("unrecognized suit name")]
    UnknownSuit,
}
