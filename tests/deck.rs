//! Deck building integration tests.

use std::collections::HashSet;

use deckrs::{BuildOption, Card, DECK_SIZE, Deck, ParseCardError, Rank, Suit};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn standard_deck_has_every_combination_once() {
    let deck = Deck::standard();

    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.cards()[0].to_string(), "Ace of Spades");
    assert_eq!(deck.cards()[51].to_string(), "King of Hearts");

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(deck.iter().all(|card| !card.is_joker()));
}

#[test]
fn multi_deck_repeats_the_base_deck() {
    let deck = Deck::build([BuildOption::MultiDeck(4)]);

    assert_eq!(deck.len(), DECK_SIZE * 4);
    assert_eq!(deck.cards()[52].to_string(), "Ace of Spades");
    assert_eq!(deck.cards()[DECK_SIZE * 4 - 1].to_string(), "King of Hearts");
}

#[test]
fn multi_deck_of_one_or_zero_is_a_noop() {
    assert_eq!(Deck::build([BuildOption::MultiDeck(1)]), Deck::standard());
    assert_eq!(Deck::build([BuildOption::MultiDeck(0)]), Deck::standard());
}

#[test]
fn multi_deck_appends_in_generation_order_after_a_shuffle() {
    let deck = Deck::build_seeded([BuildOption::Shuffle, BuildOption::MultiDeck(2)], 3);

    assert_eq!(deck.len(), DECK_SIZE * 2);
    assert_eq!(&deck.cards()[DECK_SIZE..], Deck::standard().cards());
}

#[test]
fn add_jokers_appends_to_the_end() {
    let deck = Deck::build([BuildOption::AddJokers(2)]);

    assert_eq!(deck.len(), 54);
    assert_eq!(deck.cards()[52].to_string(), "Joker of None");
    assert_eq!(deck.cards()[53].to_string(), "Joker of None");

    assert_eq!(Deck::build([BuildOption::AddJokers(0)]), Deck::standard());
}

#[test]
fn jokers_survive_a_shuffle() {
    let deck = Deck::build([BuildOption::AddJokers(2), BuildOption::Shuffle]);

    assert_eq!(deck.len(), 54);
    assert_eq!(deck.iter().filter(|card| card.is_joker()).count(), 2);
}

#[test]
fn shuffle_preserves_the_card_multiset() {
    let deck = Deck::build([BuildOption::Shuffle]);

    assert_eq!(deck.len(), DECK_SIZE);
    for expected in Deck::standard().iter() {
        assert_eq!(deck.iter().filter(|card| *card == expected).count(), 1);
    }
}

#[test]
fn seeded_builds_are_deterministic() {
    let first = Deck::build_seeded([BuildOption::Shuffle], 7);
    let second = Deck::build_seeded([BuildOption::Shuffle], 7);

    assert_eq!(first, second);
    assert_ne!(first, Deck::standard());
}

#[test]
fn remove_rank_filters_stably() {
    let deck = Deck::build([
        BuildOption::RemoveRank(Rank::Two),
        BuildOption::RemoveRank(Rank::Three),
    ]);

    assert_eq!(deck.len(), DECK_SIZE - 4 * 2);
    assert!(
        deck.iter()
            .all(|card| card.rank != Rank::Two && card.rank != Rank::Three)
    );

    let survivors: Vec<Card> = Deck::standard()
        .into_iter()
        .filter(|card| card.rank != Rank::Two && card.rank != Rank::Three)
        .collect();
    assert_eq!(deck.cards(), survivors.as_slice());
}

#[test]
fn remove_ranks_removes_face_cards() {
    let deck = Deck::build([BuildOption::RemoveRanks(vec![
        Rank::King,
        Rank::Queen,
        Rank::Jack,
    ])]);

    assert_eq!(deck.len(), DECK_SIZE - 4 * 3);
    assert!(deck.iter().all(|card| {
        card.rank != Rank::King && card.rank != Rank::Queen && card.rank != Rank::Jack
    }));
}

#[test]
fn remove_suit_removes_clubs() {
    let deck = Deck::build([BuildOption::RemoveSuit(Suit::Clubs)]);

    assert_eq!(deck.len(), DECK_SIZE - 13);
    assert!(deck.iter().all(|card| card.suit != Suit::Clubs));
}

#[test]
fn remove_suits_removes_red_suits() {
    let deck = Deck::build([BuildOption::RemoveSuits(vec![Suit::Diamonds, Suit::Hearts])]);

    assert_eq!(deck.len(), DECK_SIZE - 13 * 2);
    assert!(
        deck.iter()
            .all(|card| card.suit == Suit::Spades || card.suit == Suit::Clubs)
    );
}

#[test]
fn removing_an_absent_rank_is_a_noop() {
    assert_eq!(
        Deck::build([BuildOption::RemoveRank(Rank::Joker)]),
        Deck::standard()
    );
}

#[test]
fn removing_from_an_empty_deck_is_a_noop() {
    let deck = Deck::build([
        BuildOption::RemoveSuits(Suit::STANDARD.to_vec()),
        BuildOption::RemoveRank(Rank::Ace),
    ]);
    assert!(deck.is_empty());

    let mut empty = Deck::from(Vec::new());
    BuildOption::RemoveSuit(Suit::Hearts).apply(&mut empty, &mut rand::rng());
    assert!(empty.is_empty());
}

#[test]
fn default_sort_orders_by_rank_then_suit() {
    let deck = Deck::build_seeded([BuildOption::Shuffle, BuildOption::DefaultSort], 11);

    assert_eq!(deck.cards()[0].to_string(), "Ace of Spades");
    assert_eq!(deck.cards()[51].to_string(), "King of Hearts");

    // Rank-major: the four aces lead, in suit order.
    for (index, suit) in Suit::STANDARD.iter().enumerate() {
        assert_eq!(deck.cards()[index], card(Rank::Ace, *suit));
    }
}

#[test]
fn default_sort_sends_jokers_to_the_end() {
    let deck = Deck::build([BuildOption::AddJokers(2), BuildOption::DefaultSort]);

    assert_eq!(deck.len(), 54);
    assert_eq!(deck.cards()[0].to_string(), "Ace of Spades");
    assert_eq!(deck.cards()[52], Card::JOKER);
    assert_eq!(deck.cards()[53], Card::JOKER);
}

#[test]
fn default_sort_handles_a_joker_in_either_position() {
    let ace = card(Rank::Ace, Suit::Spades);
    let mut rng = rand::rng();

    let mut joker_first = Deck::from(vec![Card::JOKER, ace]);
    BuildOption::DefaultSort.apply(&mut joker_first, &mut rng);
    assert_eq!(joker_first.cards(), &[ace, Card::JOKER]);

    let mut joker_second = Deck::from(vec![ace, Card::JOKER]);
    BuildOption::DefaultSort.apply(&mut joker_second, &mut rng);
    assert_eq!(joker_second.cards(), &[ace, Card::JOKER]);

    let king = card(Rank::King, Suit::Spades);
    let mut surrounded = Deck::from(vec![Card::JOKER, king, Card::JOKER]);
    BuildOption::DefaultSort.apply(&mut surrounded, &mut rng);
    assert_eq!(surrounded.cards(), &[king, Card::JOKER, Card::JOKER]);
}

#[test]
fn sort_by_is_stable() {
    let deck = Deck::build([BuildOption::SortBy(|a, b| a.rank.cmp(&b.rank))]);

    // Equal ranks keep the suit-major generation order.
    for (index, suit) in Suit::STANDARD.iter().enumerate() {
        assert_eq!(deck.cards()[index], card(Rank::Ace, *suit));
        assert_eq!(deck.cards()[48 + index], card(Rank::King, *suit));
    }
}

#[test]
fn sort_by_accepts_a_custom_ordering() {
    let deck = Deck::build([BuildOption::SortBy(|a, b| b.rank.cmp(&a.rank))]);

    assert_eq!(deck.cards()[0], card(Rank::King, Suit::Spades));
    assert_eq!(deck.cards()[51], card(Rank::Ace, Suit::Hearts));
}

#[test]
fn pipeline_applies_options_in_caller_order() {
    let removed_after = Deck::build([
        BuildOption::AddJokers(1),
        BuildOption::RemoveRank(Rank::Joker),
    ]);
    assert_eq!(removed_after.len(), DECK_SIZE);

    let added_after = Deck::build([
        BuildOption::RemoveRank(Rank::Joker),
        BuildOption::AddJokers(1),
    ]);
    assert_eq!(added_after.len(), DECK_SIZE + 1);
}

#[test]
fn rendering_and_parsing_round_trip() {
    let deck = Deck::build([BuildOption::AddJokers(1)]);

    for expected in deck.iter() {
        let parsed: Card = expected.to_string().parse().unwrap();
        assert_eq!(parsed, *expected);
    }
}

#[test]
fn parse_errors() {
    assert_eq!(
        "Queen".parse::<Card>().unwrap_err(),
        ParseCardError::MissingSeparator
    );
    assert_eq!(
        "Prince of Spades".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownRank
    );
    assert_eq!(
        "Ace of Swords".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownSuit
    );
    assert_eq!(
        "Prince".parse::<Rank>().unwrap_err(),
        ParseCardError::UnknownRank
    );
    assert_eq!(
        "Swords".parse::<Suit>().unwrap_err(),
        ParseCardError::UnknownSuit
    );
}
