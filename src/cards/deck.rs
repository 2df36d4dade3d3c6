//! Deck construction and shuffling.
//!
//! The canonical deck holds 108 cards: per standard color one `0`, two
//! each of `1`-`9` and two each of skip, reverse and draw two (25 per
//! color), plus four `wild` and four `wild draw four`.

use im::Vector;

use super::card::{Card, CardId, CardValue, Color};
use crate::core::rng::{self, RandomSource};

/// Total cards in a canonical deck.
pub const DECK_SIZE: usize = 108;

/// Build the canonical deck in a fixed order with ids `card-0..card-107`.
#[must_use]
pub fn build_deck() -> Vector<Card> {
    let mut deck = Vector::new();
    let mut next_id = 0u16;
    let mut alloc = || {
        let id = CardId::new(next_id);
        next_id += 1;
        id
    };

    for color in Color::ALL {
        deck.push_back(Card::colored(alloc(), color, CardValue::Number(0)));
        for n in 1..=9 {
            deck.push_back(Card::colored(alloc(), color, CardValue::Number(n)));
            deck.push_back(Card::colored(alloc(), color, CardValue::Number(n)));
        }
        for value in CardValue::ACTIONS {
            deck.push_back(Card::colored(alloc(), color, value));
            deck.push_back(Card::colored(alloc(), color, value));
        }
    }

    for _ in 0..4 {
        deck.push_back(Card::wild(alloc(), CardValue::Wild));
        deck.push_back(Card::wild(alloc(), CardValue::WildDrawFour));
    }

    deck
}

/// Return a uniformly shuffled copy of `cards`.
#[must_use]
pub fn shuffle_cards(cards: &Vector<Card>, rng: &mut dyn RandomSource) -> Vector<Card> {
    let mut buf: Vec<Card> = cards.iter().copied().collect();
    rng::shuffle(rng, &mut buf);
    buf.into_iter().collect()
}
