use crate::card::Card;
use crate::error::{GameError, Result};

/// One player's cards. An unordered multiset: lookups go by value, never by
/// identity, since many physically distinct cards share a color and kind.
#[derive(Clone, Debug, Default)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.0.extend(cards);
    }

    /// Removes one value-equal card.
    pub fn remove(&mut self, card: &Card) -> Result<Card> {
        let index = self.card_index(card).ok_or(GameError::CardNotInHand)?;
        Ok(self.0.remove(index))
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Result<Card> {
        if index >= self.0.len() {
            return Err(GameError::CardNotInHand);
        }
        Ok(self.0.remove(index))
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.0.iter().position(|x| x == card)
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.0.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
