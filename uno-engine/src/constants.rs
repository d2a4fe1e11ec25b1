use strum::EnumCount;

use crate::card::CardColor;

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const SKIP_CARDS_PER_COLOR: u8 = 2;
pub(crate) const REVERSE_CARDS_PER_COLOR: u8 = 2;
pub(crate) const DRAW_TWO_CARDS_PER_COLOR: u8 = 2;

pub(crate) const WILD_CARDS_IN_DECK: u8 = 4;
pub(crate) const WILD_DRAW_FOUR_CARDS_IN_DECK: u8 = 4;

// The Wild variant of CardColor is not a deck color.
pub(crate) const DECK_COLORS: usize = CardColor::COUNT - 1;

pub(crate) const TOTAL_CARDS_IN_DECK: usize = (NUMBER_CARDS_PER_COLOR.len()
    + SKIP_CARDS_PER_COLOR as usize
    + REVERSE_CARDS_PER_COLOR as usize
    + DRAW_TWO_CARDS_PER_COLOR as usize)
    * DECK_COLORS
    + WILD_CARDS_IN_DECK as usize
    + WILD_DRAW_FOUR_CARDS_IN_DECK as usize;

pub(crate) const MIN_PLAYERS: usize = 2;
pub(crate) const MAX_PLAYERS: usize = 10;
pub(crate) const INITIAL_HAND_SIZE: usize = 7;
