use crate::card::{Card, CardColor};
use crate::hand::Hand;

/// One turn's action. An explicit tagged union; there is no sentinel index
/// standing in for a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Play the hand card at `index`. For wild cards, `color` carries the
    /// chosen color; when it is `None` the game asks its color resolver.
    Play {
        index: usize,
        color: Option<CardColor>,
    },
    /// Draw the pending debt, or one card when no debt is pending.
    Draw,
}

impl Move {
    pub fn play(index: usize) -> Self {
        Move::Play { index, color: None }
    }

    pub fn play_colored(index: usize, color: CardColor) -> Self {
        Move::Play {
            index,
            color: Some(color),
        }
    }
}

/// Everything a decision provider gets to see when asked for a move.
#[derive(Debug)]
pub struct TurnView<'a> {
    /// Seat of the acting player.
    pub seat: usize,
    pub hand: &'a Hand,
    /// Top of the discard pile; `None` before the opening card is flipped.
    pub top_card: Option<Card>,
    pub legal_moves: Vec<Move>,
    pub draw_debt: u32,
    pub clockwise: bool,
    /// Cards actually played so far, keyed by seat. Context for providers
    /// only; the rules never consult it.
    pub history: &'a [Vec<Card>],
}
