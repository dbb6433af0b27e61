//! Deck and ranking tests.
//!
//! These tests cover the public card model:
//! - The fixed ranking table and its error path
//! - Completeness and uniqueness of created decks
//! - Shuffles that keep the deck valid

use std::collections::HashSet;

use proptest::prelude::*;
use war_cards::cards::{create_deck, get_ranking, Card, Deck, Rank, Suit, DECK_SIZE};
use war_cards::core::{GameRng, WarError};

// =============================================================================
// Ranking
// =============================================================================

#[test]
fn test_ranking_for_every_rank_name() {
    let table = [
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("jack", 11),
        ("queen", 12),
        ("king", 13),
        ("ace", 14),
    ];

    for (name, ranking) in table {
        assert_eq!(get_ranking(name).unwrap(), ranking, "ranking of {name}");
    }
}

#[test]
fn test_club_jack_ranks_eleven() {
    let card = Card::new(Suit::Club, Rank::Jack);
    assert_eq!(card.ranking(), 11);
}

#[test]
fn test_unrecognised_rank_is_an_error() {
    match get_ranking("joker") {
        Err(WarError::InvalidRank { rank }) => assert_eq!(rank, "joker"),
        other => panic!("expected InvalidRank, got {other:?}"),
    }
    assert!(Card::parse("club", "knight").is_err());
}

// =============================================================================
// Deck creation
// =============================================================================

#[test]
fn test_create_deck_once_yields_52_unique_cards() {
    let deck = create_deck();
    assert_eq!(deck.len(), 52);

    let pairs: HashSet<(Suit, Rank)> = deck.iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(pairs.len(), 52);
}

#[test]
fn test_create_deck_equals_full_product() {
    let expected: HashSet<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect();
    let actual: HashSet<Card> = create_deck().into_iter().collect();

    assert_eq!(actual, expected);
}

#[test]
fn test_first_card_line() {
    let deck = create_deck();
    assert_eq!(deck.cards()[0].to_string(), "Suit: spade, Rank: two");
}

#[test]
fn test_two_creations_stay_separate() {
    let mut combined: Vec<Card> = create_deck().into_cards();
    combined.extend(create_deck());

    assert_eq!(combined.len(), 104);
    assert!(matches!(
        Deck::from_cards(combined),
        Err(WarError::IncompleteDeck { len: 104 })
    ));
}

#[test]
fn test_filter_labels() {
    let card = Card::new(Suit::Spade, Rank::Six);
    assert_eq!(card.suit.capitalized(), "Spade");
    assert_eq!(card.rank.uppercased(), "SIX");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Any seeded shuffle is still a complete deck.
    #[test]
    fn prop_shuffled_deck_is_valid(seed in any::<u64>()) {
        let shuffled = create_deck().shuffled(&mut GameRng::new(seed));
        prop_assert_eq!(shuffled.len(), DECK_SIZE);

        let revalidated = Deck::from_cards(shuffled.into_cards());
        prop_assert!(revalidated.is_ok());
    }

    /// Dropping any single card breaks the deck.
    #[test]
    fn prop_missing_card_rejected(index in 0usize..DECK_SIZE) {
        let mut cards = create_deck().into_cards();
        cards.remove(index);
        let rejected = matches!(
            Deck::from_cards(cards),
            Err(WarError::IncompleteDeck { len: 51 })
        );
        prop_assert!(rejected);
    }

    /// Overwriting one card with another duplicates it.
    #[test]
    fn prop_duplicate_rejected(from in 0usize..DECK_SIZE, to in 0usize..DECK_SIZE) {
        prop_assume!(from != to);
        let mut cards = create_deck().into_cards();
        cards[to] = cards[from];
        let rejected = matches!(
            Deck::from_cards(cards),
            Err(WarError::DuplicateCard { .. })
        );
        prop_assert!(rejected);
    }

    /// Names round-trip through parsing.
    #[test]
    fn prop_card_names_parse(suit in 0usize..4, rank in 0usize..13) {
        let card = Card::new(Suit::ALL[suit], Rank::ALL[rank]);
        let parsed = Card::parse(card.suit.name(), card.rank.name()).unwrap();
        prop_assert_eq!(parsed, card);
        prop_assert_eq!(get_ranking(card.rank.name()).unwrap(), card.ranking());
    }
}
