//! CLI deck-building example.

use deckrs::{BuildOption, Deck, Rank};

fn main() {
    let shuffled = Deck::build([
        BuildOption::RemoveRanks(vec![Rank::Two, Rank::Three]),
        BuildOption::AddJokers(2),
        BuildOption::Shuffle,
    ]);

    println!("Shuffled deck with jokers, twos and threes removed ({} cards):", shuffled.len());
    for (index, card) in shuffled.iter().enumerate() {
        println!("{:>2}: {card}", index + 1);
    }

    let sorted = Deck::build([BuildOption::AddJokers(2), BuildOption::DefaultSort]);

    println!();
    println!("Default sort puts jokers last:");
    println!("first: {}", sorted.cards()[0]);
    println!("last:  {}", sorted.cards()[sorted.len() - 1]);
}
