use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::card::{Card, CardColor, CardKind};
use crate::constants::*;

/// One entry of the color/kind count table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCount {
    pub color: CardColor,
    pub kind: CardKind,
    pub count: u8,
}

/// The card distribution a deck is built from. The default table is the
/// standard 108-card layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub counts: Vec<CardCount>,
}

impl DeckConfig {
    pub fn total_cards(&self) -> usize {
        self.counts.iter().map(|entry| entry.count as usize).sum()
    }

    /// The populated deck in table order, one value-equal card per count.
    pub(crate) fn cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.total_cards());
        for entry in &self.counts {
            for _ in 0..entry.count {
                cards.push(Card::new(entry.color, entry.kind));
            }
        }
        cards
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        let mut counts = Vec::new();

        for color in CardColor::iter().filter(|color| *color != CardColor::Wild) {
            for number in NUMBER_CARDS_PER_COLOR {
                counts.push(CardCount {
                    color,
                    kind: CardKind::Number(*number),
                    count: 1,
                });
            }
            counts.push(CardCount {
                color,
                kind: CardKind::Skip,
                count: SKIP_CARDS_PER_COLOR,
            });
            counts.push(CardCount {
                color,
                kind: CardKind::Reverse,
                count: REVERSE_CARDS_PER_COLOR,
            });
            counts.push(CardCount {
                color,
                kind: CardKind::DrawTwo,
                count: DRAW_TWO_CARDS_PER_COLOR,
            });
        }

        counts.push(CardCount {
            color: CardColor::Wild,
            kind: CardKind::Wild,
            count: WILD_CARDS_IN_DECK,
        });
        counts.push(CardCount {
            color: CardColor::Wild,
            kind: CardKind::WildDrawFour,
            count: WILD_DRAW_FOUR_CARDS_IN_DECK,
        });

        Self { counts }
    }
}

/// Everything a game is constructed from. The engine never reads this from
/// a file itself; front ends load it however they like and pass it in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: usize,
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default = "default_initial_hand_size")]
    pub initial_hand_size: usize,
    /// House rule: offer Draw even when the hand holds a playable card.
    #[serde(default)]
    pub draw_alongside_playable: bool,
}

fn default_initial_hand_size() -> usize {
    INITIAL_HAND_SIZE
}

impl GameConfig {
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            deck: DeckConfig::default(),
            initial_hand_size: default_initial_hand_size(),
            draw_alongside_playable: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_builds_a_standard_deck() {
        let config = DeckConfig::default();
        assert_eq!(config.total_cards(), TOTAL_CARDS_IN_DECK);
        assert_eq!(config.cards().len(), TOTAL_CARDS_IN_DECK);
    }

    #[test]
    fn default_table_has_one_zero_and_two_ones_per_color() {
        let cards = DeckConfig::default().cards();

        let red_zeros = cards
            .iter()
            .filter(|card| **card == Card::new(CardColor::Red, CardKind::Number(0)))
            .count();
        assert_eq!(red_zeros, 1);

        let blue_ones = cards
            .iter()
            .filter(|card| **card == Card::new(CardColor::Blue, CardKind::Number(1)))
            .count();
        assert_eq!(blue_ones, 2);
    }

    #[test]
    fn game_config_round_trips_through_yaml() {
        let config = GameConfig::new(6);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: GameConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(loaded.player_count, 6);
        assert_eq!(loaded.deck, config.deck);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let loaded: GameConfig = serde_yaml::from_str("player_count: 3").unwrap();
        assert_eq!(loaded.player_count, 3);
        assert_eq!(loaded.initial_hand_size, INITIAL_HAND_SIZE);
        assert!(!loaded.draw_alongside_playable);
        assert_eq!(loaded.deck.total_cards(), TOTAL_CARDS_IN_DECK);
    }
}
