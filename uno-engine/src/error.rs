use thiserror::Error;

use crate::card::Card;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("{0} cannot be played on the current discard pile")]
    IllegalMove(Card),
    #[error("card not in the current player's hand")]
    CardNotInHand,
    #[error("draw pile and recyclable discard pile are both exhausted")]
    DeckExhausted,
    #[error("invalid player count {0}, expected 2 to 10 players")]
    InvalidPlayerCount(usize),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
