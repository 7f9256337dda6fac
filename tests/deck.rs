//! Deck integration tests.

use std::collections::HashMap;

use cardpack::{Card, Deck, DeckError, DeckOptions, MAX_CUT_POINT, PACK_SIZE, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn unshuffled(packs: u8) -> Deck {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    Deck::new(&DeckOptions::default().with_packs(packs).with_shuffle(false), &mut rng).unwrap()
}

fn counts(deck: &Deck) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for &card in deck {
        *counts.entry(card).or_insert(0) += 1;
    }
    counts
}

#[test]
fn card_display_and_codes() {
    assert_eq!(card(Suit::Hearts, Rank::Two).to_string(), "2 of Hearts");
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "Ace of Spades");
    assert_eq!(card(Suit::Clubs, Rank::Jack).to_string(), "J of Clubs");
    assert_eq!(Suit::Spades.code(), 'S');
    assert_eq!(Rank::Ace.code(), "A");
    assert_eq!(Rank::Ten.code(), "10");
    assert_eq!(Rank::Nine.pips(), Some(9));
    assert_eq!(Rank::Queen.pips(), None);
}

#[test]
fn suit_and_rank_parse_names_and_codes() {
    assert_eq!("S".parse::<Suit>(), Ok(Suit::Spades));
    assert_eq!("hearts".parse::<Suit>(), Ok(Suit::Hearts));
    assert_eq!(" Clubs ".parse::<Suit>(), Ok(Suit::Clubs));
    assert!("Stars".parse::<Suit>().is_err());

    assert_eq!("Q".parse::<Rank>(), Ok(Rank::Queen));
    assert_eq!("queen".parse::<Rank>(), Ok(Rank::Queen));
    assert_eq!("A".parse::<Rank>(), Ok(Rank::Ace));
    assert_eq!("Ace".parse::<Rank>(), Ok(Rank::Ace));
    assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
    assert!("1".parse::<Rank>().is_err());
    assert!("11".parse::<Rank>().is_err());
}

#[test]
fn standard_deck_order() {
    let deck = unshuffled(1);
    assert_eq!(deck.len(), PACK_SIZE);
    assert_eq!(deck, Deck::standard());
    assert_eq!(deck.get(0), Some(&card(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.get(1), Some(&card(Suit::Diamonds, Rank::Two)));
    assert_eq!(deck.get(4), Some(&card(Suit::Hearts, Rank::Three)));
    assert_eq!(deck.get(51), Some(&card(Suit::Clubs, Rank::Ace)));
    assert_eq!(deck.get(52), None);
    assert_eq!(deck.to_string(), "52 cards in deck.");
}

#[test]
fn multiple_packs_contain_each_card_once_per_pack() {
    for packs in 1..=4 {
        let deck = unshuffled(packs);
        assert_eq!(deck.len(), packs as usize * PACK_SIZE);

        let counts = counts(&deck);
        assert_eq!(counts.len(), PACK_SIZE);
        assert!(counts.values().all(|&n| n == packs as usize));
    }
}

#[test]
fn custom_domains() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let options = DeckOptions::default()
        .with_packs(2)
        .with_shuffle(false)
        .with_suits(vec![Suit::Spades, Suit::Hearts])
        .with_ranks(vec![Rank::Queen, Rank::Ace, Rank::Seven]);
    let deck = Deck::new(&options, &mut rng).unwrap();

    assert_eq!(deck.len(), options.deck_len());
    assert_eq!(deck.len(), 12);
    assert_eq!(deck.get(0), Some(&card(Suit::Spades, Rank::Queen)));
    assert_eq!(deck.get(1), Some(&card(Suit::Hearts, Rank::Queen)));
    assert_eq!(deck.get(2), Some(&card(Suit::Spades, Rank::Ace)));
    assert_eq!(deck.get(6), Some(&card(Suit::Spades, Rank::Queen)));

    let counts = counts(&deck);
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|&n| n == 2));
}

#[test]
fn invalid_options_are_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        Deck::new(&DeckOptions::default().with_packs(0), &mut rng).unwrap_err(),
        DeckError::ZeroPacks
    );
    assert_eq!(
        Deck::new(&DeckOptions::default().with_suits(Vec::new()), &mut rng).unwrap_err(),
        DeckError::EmptyDomain
    );
    assert_eq!(
        Deck::new(&DeckOptions::default().with_ranks(Vec::new()), &mut rng).unwrap_err(),
        DeckError::EmptyDomain
    );
}

#[test]
fn shuffle_is_a_seeded_permutation() {
    let options = DeckOptions::default();
    let a = Deck::new(&options, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
    let b = Deck::new(&options, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
    let c = Deck::new(&options, &mut ChaCha8Rng::seed_from_u64(10)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Deck::standard());
    assert_eq!(counts(&a), counts(&Deck::standard()));
}

#[test]
fn draw_from_top_scenario() {
    let mut deck = Deck::standard();
    let drawn = deck.draw_from_top(2);

    assert_eq!(
        drawn,
        [card(Suit::Hearts, Rank::Two), card(Suit::Diamonds, Rank::Two)]
    );
    assert_eq!(deck.len(), 50);
    assert_eq!(deck.top_card(), Ok(&card(Suit::Spades, Rank::Two)));
}

#[test]
fn draw_from_top_stops_when_exhausted() {
    let mut deck = Deck::standard();
    let first = deck.draw_from_top(40);
    let rest = deck.draw_from_top(40);

    assert_eq!(first.len(), 40);
    assert_eq!(rest.len(), 12);
    assert!(deck.is_empty());
    assert!(deck.draw_from_top(1).is_empty());
    assert_eq!(deck.draw(), None);

    let mut all = first;
    all.extend(rest);
    assert_eq!(Deck::from_cards(all), Deck::standard());
}

#[test]
fn draw_from_bottom_is_symmetric() {
    let cards = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Clubs, Rank::Ace),
    ];
    let mut deck = Deck::from_cards(cards);

    assert_eq!(
        deck.draw_from_bottom(2),
        [card(Suit::Clubs, Rank::Ace), card(Suit::Spades, Rank::Queen)]
    );
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.draw_from_bottom(5), [card(Suit::Hearts, Rank::Two)]);
    assert!(deck.draw_from_bottom(1).is_empty());
}

#[test]
fn draw_from_bottom_full_deck() {
    let mut deck = Deck::standard();
    let mut drawn = deck.draw_from_bottom(PACK_SIZE);
    drawn.reverse();

    assert!(deck.is_empty());
    assert_eq!(Deck::from_cards(drawn), Deck::standard());
}

#[test]
fn empty_deck_reports_instead_of_panicking() {
    let deck = Deck::from_cards([]);
    assert_eq!(deck.top_card(), Err(DeckError::Empty));
    assert_eq!(deck.bottom_card(), Err(DeckError::Empty));
    assert_eq!(deck.get(0), None);
    assert_eq!(deck.to_string(), "0 cards in deck.");
}

#[test]
fn cut_at_is_a_rotation() {
    let original = Deck::standard();
    let mut deck = original.clone();
    deck.cut_at(10).unwrap();

    assert_eq!(deck.len(), PACK_SIZE);
    let expected: Vec<Card> = original
        .iter()
        .skip(10)
        .chain(original.iter().take(10))
        .copied()
        .collect();
    assert_eq!(deck, Deck::from_cards(expected));
    assert_eq!(deck.get(42), original.get(0));
    assert_eq!(deck.bottom_card(), Ok(&card(Suit::Diamonds, Rank::Four)));
}

#[test]
fn cut_at_bounds() {
    let mut deck = Deck::from_cards([card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Ten)]);
    assert_eq!(
        deck.cut_at(3),
        Err(DeckError::CutOutOfRange { point: 3, len: 2 })
    );

    deck.cut_at(2).unwrap();
    assert_eq!(deck.top_card(), Ok(&card(Suit::Hearts, Rank::Two)));

    deck.cut_at(0).unwrap();
    assert_eq!(deck.top_card(), Ok(&card(Suit::Hearts, Rank::Two)));
}

#[test]
fn random_cut_matches_explicit_cut() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..50 {
        let mut cut = Deck::standard();
        let point = cut.cut(&mut rng);
        assert!(point <= MAX_CUT_POINT);

        let mut expected = Deck::standard();
        expected.cut_at(point).unwrap();
        assert_eq!(cut, expected);
    }
}

#[test]
fn random_cut_on_small_deck_stays_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..20 {
        let mut deck = Deck::from_cards([card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Ten)]);
        assert!(deck.cut(&mut rng) <= 2);
        assert_eq!(deck.len(), 2);
    }

    let mut empty = Deck::from_cards([]);
    assert_eq!(empty.cut(&mut rng), 0);
}
