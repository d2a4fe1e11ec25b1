use rand::{seq::SliceRandom, Rng};

use crate::card::Card;
use crate::config::DeckConfig;

/// The draw pile. Cards leave from the front; recycled discards are appended
/// and reshuffled by the game.
#[derive(Debug)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Populates the pile from a count table, in table order. No randomness.
    pub fn build(config: &DeckConfig) -> Self {
        Self(config.cards())
    }

    /// A pile with an exact caller-supplied order, used when replaying a
    /// recorded game.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub(crate) fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    /// Removes up to `amount` cards from the front. Returns fewer when the
    /// pile runs short; the game recycles the discard pile and draws again.
    pub(crate) fn draw(&mut self, amount: usize) -> Vec<Card> {
        let amount = amount.min(self.0.len());
        self.0.drain(0..amount).collect()
    }

    pub(crate) fn put_back(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.0.extend(cards);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, CardKind};
    use crate::constants::TOTAL_CARDS_IN_DECK;

    #[test]
    fn correct_card_count_new_deck() {
        let deck = Deck::build(&DeckConfig::default());
        assert_eq!(deck.cards_count(), TOTAL_CARDS_IN_DECK);
    }

    #[test]
    fn draw_takes_from_the_front() {
        let red_1 = Card::new(CardColor::Red, CardKind::Number(1));
        let blue_2 = Card::new(CardColor::Blue, CardKind::Number(2));
        let mut deck = Deck::from_cards(vec![red_1, blue_2]);

        assert_eq!(deck.draw(1), vec![red_1]);
        assert_eq!(deck.cards(), &[blue_2]);
    }

    #[test]
    fn draw_returns_short_when_pile_runs_out() {
        let red_1 = Card::new(CardColor::Red, CardKind::Number(1));
        let mut deck = Deck::from_cards(vec![red_1]);

        assert_eq!(deck.draw(3), vec![red_1]);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(1), vec![]);
    }

    #[test]
    fn put_back_appends() {
        let red_1 = Card::new(CardColor::Red, CardKind::Number(1));
        let blue_2 = Card::new(CardColor::Blue, CardKind::Number(2));
        let mut deck = Deck::from_cards(vec![red_1]);

        deck.put_back([blue_2]);
        assert_eq!(deck.cards(), &[red_1, blue_2]);
    }
}
