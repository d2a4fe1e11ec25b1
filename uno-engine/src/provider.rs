use rand::{seq::SliceRandom, thread_rng};
use strum::IntoEnumIterator;

use crate::card::{Card, CardColor};
use crate::error::Result;
use crate::game::Game;
use crate::hand::Hand;
use crate::turn::Move;

/// Answers the color question when a wild card is played without a chosen
/// color. Injected so the engine never prompts on its own; replayed games
/// carry their recorded colors and never consult it.
pub trait ColorResolver {
    fn resolve_color(&mut self, seat: usize, hand: &Hand) -> CardColor;
}

/// The external actor supplying one move per turn: a human front end, a
/// scripted policy or a learned agent. The engine only validates and applies
/// whatever comes back.
pub trait DecisionProvider: ColorResolver {
    fn select_move(&mut self, view: &crate::turn::TurnView<'_>) -> Move;
}

impl<T: ColorResolver + ?Sized> ColorResolver for Box<T> {
    fn resolve_color(&mut self, seat: usize, hand: &Hand) -> CardColor {
        (**self).resolve_color(seat, hand)
    }
}

impl<T: DecisionProvider + ?Sized> DecisionProvider for Box<T> {
    fn select_move(&mut self, view: &crate::turn::TurnView<'_>) -> Move {
        (**self).select_move(view)
    }
}

/// Deterministic scripted policy: the first legal card, or draw. Wild colors
/// follow the dominant color in hand.
#[derive(Debug, Default)]
pub struct FirstLegal;

impl ColorResolver for FirstLegal {
    fn resolve_color(&mut self, _seat: usize, hand: &Hand) -> CardColor {
        dominant_color(hand)
    }
}

impl DecisionProvider for FirstLegal {
    fn select_move(&mut self, view: &crate::turn::TurnView<'_>) -> Move {
        view.legal_moves
            .iter()
            .find(|action| matches!(action, Move::Play { .. }))
            .copied()
            .unwrap_or(Move::Draw)
    }
}

/// Uniform random over the legal moves; wild colors picked uniformly too.
#[derive(Debug, Default)]
pub struct RandomProvider;

impl ColorResolver for RandomProvider {
    fn resolve_color(&mut self, _seat: usize, _hand: &Hand) -> CardColor {
        let colors: Vec<CardColor> = CardColor::iter()
            .filter(|color| *color != CardColor::Wild)
            .collect();
        let mut rng = thread_rng();
        *colors
            .choose(&mut rng)
            .expect("there is always a deck color to choose from")
    }
}

impl DecisionProvider for RandomProvider {
    fn select_move(&mut self, view: &crate::turn::TurnView<'_>) -> Move {
        let mut rng = thread_rng();
        view.legal_moves
            .choose(&mut rng)
            .copied()
            .unwrap_or(Move::Draw)
    }
}

/// Asks `provider` for the current player's move and applies it.
///
/// A wild move without a chosen color is resolved here, before the engine
/// sees it, so the returned move always carries the color that ended up on
/// the discard pile. Recorders persist exactly that.
pub fn play_one_turn<P: DecisionProvider>(game: &mut Game, provider: &mut P) -> Result<Move> {
    let seat = game.current_turn();
    let mut action = {
        let view = game.turn_view();
        provider.select_move(&view)
    };

    if let Move::Play { index, color: None } = action {
        if let Some(hand) = game.hand(seat) {
            if hand.get(index).map_or(false, Card::is_wild) {
                let chosen = provider.resolve_color(seat, hand);
                action = Move::play_colored(index, chosen);
            }
        }
    }

    game.play(action, provider)?;
    Ok(action)
}

fn dominant_color(hand: &Hand) -> CardColor {
    let mut best = CardColor::Red;
    let mut best_count = 0;
    for color in CardColor::iter().filter(|color| *color != CardColor::Wild) {
        let count = hand
            .cards()
            .iter()
            .filter(|card| card.color == color)
            .count();
        if count > best_count {
            best = color;
            best_count = count;
        }
    }
    best
}
