use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::card::{Card, CardColor, ParseCardError};
use crate::config::GameConfig;
use crate::deck::Deck;
use crate::error::GameError;
use crate::game::Game;
use crate::hand::Hand;
use crate::provider::ColorResolver;
use crate::turn::Move;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("failed to read or write the save file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse the save file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Card(#[from] ParseCardError),
    #[error("move {turn} plays a wild card but records no chosen color")]
    MissingColor { turn: usize },
    #[error(transparent)]
    Game(#[from] GameError),
}

/// One recorded move: the hand index that was played, or `None` for a draw.
/// Wild plays also carry the color the player chose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CardColor>,
}

impl From<Move> for RecordedMove {
    fn from(action: Move) -> Self {
        match action {
            Move::Play { index, color } => Self {
                index: Some(index),
                color,
            },
            Move::Draw => Self {
                index: None,
                color: None,
            },
        }
    }
}

/// The persisted form of a game: the post-shuffle deck order as card string
/// encodings, the seed driving recycle reshuffles and every move in order.
/// Hands are not stored; replaying the moves against the deck order
/// re-derives them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecordedGame {
    pub deck: Vec<String>,
    #[serde(default)]
    pub seed: u64,
    pub moves: Vec<RecordedMove>,
}

impl RecordedGame {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}

/// Accumulates a game into a [`RecordedGame`] and exports it as YAML after
/// every move. The deck order is snapshotted once, right after the game is
/// started.
#[derive(Debug)]
pub struct GameRecorder {
    recorded: RecordedGame,
    path: PathBuf,
}

impl GameRecorder {
    pub fn new(game: &Game, path: impl Into<PathBuf>) -> Self {
        let deck = game.initial_deck().iter().map(Card::to_string).collect();
        Self {
            recorded: RecordedGame {
                deck,
                seed: game.recycle_seed(),
                moves: Vec::new(),
            },
            path: path.into(),
        }
    }

    pub fn record(&mut self, action: Move) {
        self.recorded.moves.push(action.into());
    }

    pub fn export(&self) -> Result<(), ReplayError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_yaml::to_string(&self.recorded)?)?;
        Ok(())
    }

    pub fn recorded(&self) -> &RecordedGame {
        &self.recorded
    }
}

// Replay rejects wild moves without a recorded color before playing them,
// so the resolver is never consulted.
struct NoPrompt;

impl ColorResolver for NoPrompt {
    fn resolve_color(&mut self, _seat: usize, _hand: &Hand) -> CardColor {
        CardColor::Red
    }
}

/// Rebuilds a game by dealing the recorded deck order without shuffling and
/// reapplying every recorded move. The recorded seed makes every recycle
/// reshuffle along the way land in the same order it did live.
pub fn replay(recorded: &RecordedGame, config: &GameConfig) -> Result<Game, ReplayError> {
    let cards = recorded
        .deck
        .iter()
        .map(|encoding| encoding.parse::<Card>())
        .collect::<Result<Vec<Card>, ParseCardError>>()?;

    let mut game = Game::with_deck_seeded(config.clone(), Deck::from_cards(cards), recorded.seed)?;
    game.start_prepared()?;

    for (turn, recorded_move) in recorded.moves.iter().enumerate() {
        let action = match recorded_move.index {
            Some(index) => {
                let seat = game.current_turn();
                let wild = game
                    .hand(seat)
                    .and_then(|hand| hand.get(index))
                    .map_or(false, Card::is_wild);
                if wild && recorded_move.color.is_none() {
                    return Err(ReplayError::MissingColor { turn });
                }
                Move::Play {
                    index,
                    color: recorded_move.color,
                }
            }
            None => Move::Draw,
        };
        game.play(action, &mut NoPrompt)?;
    }

    debug!(moves = recorded.moves.len(), "replayed recorded game");
    Ok(game)
}
