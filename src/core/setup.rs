//! Rigged table setup for puzzles, replays and tests.
//!
//! `TableSetup` builds a `GameState` with chosen hands and discard top
//! while still holding the full 108-card deck: every requested card is
//! taken out of a fresh canonical deck, and whatever is left over goes
//! where the setup says.
//!
//! ```
//! use rust_uno::cards::{CardColor, CardValue, Color};
//! use rust_uno::core::TableSetup;
//!
//! let red = CardColor::Standard(Color::Red);
//! let state = TableSetup::new(4)
//!     .hand(0, &[(CardColor::Standard(Color::Blue), CardValue::Number(5))])
//!     .discard_top(red, CardValue::Number(5))
//!     .build();
//!
//! assert_eq!(state.total_cards(), 108);
//! assert_eq!(state.current_color, Color::Red);
//! ```

use im::Vector;

use super::config::{GameConfig, LOG_LIMIT};
use super::event_log::EventLog;
use super::player::{Direction, Player, PlayerId, PlayerMap};
use super::state::{GameState, Phase};
use crate::cards::{build_deck, Card, CardColor, CardValue, Color};

/// Where cards not placed explicitly end up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Leftovers {
    /// After any explicit draw-pile cards.
    #[default]
    DrawPile,
    /// Under the discard top, leaving the draw pile empty.
    UnderDiscard,
    /// Appended to a seat's hand, leaving the draw pile empty.
    Hand(u8),
}

/// Builder for a rigged, card-conserving `GameState`.
#[derive(Clone, Debug)]
pub struct TableSetup {
    seat_count: usize,
    hands: Vec<Vec<(CardColor, CardValue)>>,
    draw_top: Vec<(CardColor, CardValue)>,
    discard_top: Option<(CardColor, CardValue)>,
    current_color: Option<Color>,
    current_player: u8,
    direction: Direction,
    human_seat: Option<u8>,
    leftovers: Leftovers,
}

impl TableSetup {
    /// A table of `seat_count` seats, seat 0 human, all hands empty.
    pub fn new(seat_count: usize) -> Self {
        assert!((2..=4).contains(&seat_count), "Seat count must be 2-4");
        Self {
            seat_count,
            hands: vec![Vec::new(); seat_count],
            draw_top: Vec::new(),
            discard_top: None,
            current_color: None,
            current_player: 0,
            direction: Direction::Forward,
            human_seat: Some(0),
            leftovers: Leftovers::DrawPile,
        }
    }

    /// Give `seat` exactly these cards, in order.
    #[must_use]
    pub fn hand(mut self, seat: u8, cards: &[(CardColor, CardValue)]) -> Self {
        self.hands[seat as usize] = cards.to_vec();
        self
    }

    /// Put these cards on top of the draw pile, first card drawn first.
    #[must_use]
    pub fn draw_pile_top(mut self, cards: &[(CardColor, CardValue)]) -> Self {
        self.draw_top = cards.to_vec();
        self
    }

    /// Choose the top discard. Defaults to the first spare colored numeral.
    #[must_use]
    pub fn discard_top(mut self, color: CardColor, value: CardValue) -> Self {
        self.discard_top = Some((color, value));
        self
    }

    /// Override the active color. Defaults to the discard top's color.
    #[must_use]
    pub fn current_color(mut self, color: Color) -> Self {
        self.current_color = Some(color);
        self
    }

    #[must_use]
    pub fn current_player(mut self, seat: u8) -> Self {
        self.current_player = seat;
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Make every seat scripted.
    #[must_use]
    pub fn all_scripted(mut self) -> Self {
        self.human_seat = None;
        self
    }

    #[must_use]
    pub fn leftovers(mut self, leftovers: Leftovers) -> Self {
        self.leftovers = leftovers;
        self
    }

    /// Build the state.
    ///
    /// Panics if a requested card is not left in the deck.
    #[must_use]
    pub fn build(self) -> GameState {
        let mut pool: Vec<Card> = build_deck().into_iter().collect();

        let names = GameConfig::default().seats;
        let mut players = PlayerMap::new(self.seat_count, |id| {
            let is_human = self.human_seat == Some(id.0);
            Player::new(id, names[id.index()].name.clone(), is_human)
        });
        for (seat, cards) in self.hands.iter().enumerate() {
            for &wanted in cards {
                players[PlayerId::new(seat as u8)].receive(take(&mut pool, wanted));
            }
        }

        let mut draw_pile: Vector<Card> =
            self.draw_top.iter().map(|&wanted| take(&mut pool, wanted)).collect();

        let top = match self.discard_top {
            Some(wanted) => take(&mut pool, wanted),
            None => {
                let pos = pool
                    .iter()
                    .position(|c| matches!(c.value, CardValue::Number(_)))
                    .expect("deck always holds a spare numeral");
                pool.remove(pos)
            }
        };

        let mut discard_pile = Vector::new();
        match self.leftovers {
            Leftovers::DrawPile => draw_pile.extend(pool),
            Leftovers::UnderDiscard => discard_pile.extend(pool),
            Leftovers::Hand(seat) => {
                for card in pool {
                    players[PlayerId::new(seat)].receive(card);
                }
            }
        }
        discard_pile.push_back(top);

        let current_color = self
            .current_color
            .or_else(|| top.color.standard())
            .unwrap_or(Color::Red);

        GameState {
            players,
            current_player: PlayerId::new(self.current_player),
            direction: self.direction,
            draw_pile,
            discard_pile,
            current_color,
            pending_color: None,
            phase: Phase::Playing,
            winner_id: None,
            log: EventLog::new(LOG_LIMIT),
            drawn_card_id: None,
            last_played_card: None,
            turn_count: 0,
        }
    }
}

fn take(pool: &mut Vec<Card>, (color, value): (CardColor, CardValue)) -> Card {
    let pos = pool
        .iter()
        .position(|c| c.color == color && c.value == value)
        .unwrap_or_else(|| panic!("No {:?} {} left in deck", color, value));
    pool.remove(pos)
}
