use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use tracing::debug;

use crate::card::{Card, CardKind};
use crate::config::GameConfig;
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::error::{GameError, Result};
use crate::hand::Hand;
use crate::provider::ColorResolver;
use crate::turn::{Move, TurnView};

/// The rule engine. Owns the draw pile, one hand per seat and the discard
/// pile, and applies one externally supplied move per turn.
///
/// Every card stays in exactly one of the three places; the total across
/// draw pile, discard pile and hands is conserved by every operation.
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    initial_deck: Vec<Card>,
    hands: Vec<Hand>,
    discard: Vec<Card>,
    history: Vec<Vec<Card>>,
    turn: usize,
    clockwise: bool,
    draw_debt: u32,
    recycle_seed: u64,
    recycle_rng: StdRng,
    config: GameConfig,
}

impl Game {
    /// A game with a freshly populated deck. Call [`Game::start`] to shuffle,
    /// deal and flip the opening card.
    pub fn new(config: GameConfig) -> Result<Self> {
        let deck = Deck::build(&config.deck);
        Self::with_deck(config, deck)
    }

    /// A game over a caller-supplied deck order. Used by replay, which must
    /// not reshuffle.
    pub fn with_deck(config: GameConfig, deck: Deck) -> Result<Self> {
        Self::with_deck_seeded(config, deck, thread_rng().gen())
    }

    /// Like [`Game::with_deck`], but with a caller-supplied seed for the
    /// recycle reshuffles. Replay passes the recorded seed so every recycle
    /// reproduces the same pile order.
    pub fn with_deck_seeded(config: GameConfig, deck: Deck, recycle_seed: u64) -> Result<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&config.player_count) {
            return Err(GameError::InvalidPlayerCount(config.player_count));
        }

        Ok(Self {
            deck,
            initial_deck: Vec::new(),
            hands: vec![Hand::default(); config.player_count],
            discard: Vec::new(),
            history: vec![Vec::new(); config.player_count],
            turn: 0,
            clockwise: true,
            draw_debt: 0,
            recycle_seed,
            recycle_rng: StdRng::seed_from_u64(recycle_seed),
            config,
        })
    }

    /// Shuffles, deals the initial hands round-robin and flips the opening
    /// discard card.
    pub fn start(&mut self) -> Result<()> {
        self.deck.shuffle(&mut thread_rng());
        self.start_prepared()
    }

    /// Deals and flips without shuffling, keeping the deck's current order.
    pub fn start_prepared(&mut self) -> Result<()> {
        let needed = self.config.player_count * self.config.initial_hand_size + 1;
        if self.deck.cards_count() < needed {
            return Err(GameError::DeckExhausted);
        }
        self.initial_deck = self.deck.cards().to_vec();

        for _ in 0..self.config.initial_hand_size {
            for seat in 0..self.hands.len() {
                let cards = self.deck.draw(1);
                self.hands[seat].add_cards(cards);
            }
        }

        self.discard.extend(self.deck.draw(1));
        debug!(top = %self.top_card().map(|c| c.to_string()).unwrap_or_default(), "game started");
        Ok(())
    }

    /// Applies one move for the current player.
    ///
    /// Caller errors (`IllegalMove`, `CardNotInHand`) reject the move and
    /// leave the state untouched. `DeckExhausted` means neither the draw
    /// pile nor the recyclable discard can cover a requested draw.
    pub fn play(&mut self, action: Move, colors: &mut dyn ColorResolver) -> Result<()> {
        match action {
            Move::Draw => {
                let amount = if self.draw_debt == 0 {
                    1
                } else {
                    self.draw_debt as usize
                };
                let cards = self.draw_with_recycle(amount)?;
                debug!(seat = self.turn, count = cards.len(), "player drew");
                self.hands[self.turn].add_cards(cards);
                self.draw_debt = 0;
            }
            Move::Play { index, color } => {
                let card = *self.hands[self.turn]
                    .get(index)
                    .ok_or(GameError::CardNotInHand)?;

                if let Some(top) = self.discard.last() {
                    if !card.is_playable(top, self.draw_debt > 0) {
                        return Err(GameError::IllegalMove(card));
                    }
                }

                let played = if card.is_wild() {
                    let chosen = match color {
                        Some(chosen) => chosen,
                        None => colors.resolve_color(self.turn, &self.hands[self.turn]),
                    };
                    card.with_color(chosen)
                } else {
                    card
                };

                self.hands[self.turn].remove_at(index)?;
                self.discard.push(played);
                self.history[self.turn].push(played);
                debug!(seat = self.turn, card = %played, "player played");

                match played.kind {
                    CardKind::Skip => self.advance_turn(),
                    CardKind::Reverse => self.clockwise = !self.clockwise,
                    CardKind::DrawTwo => self.draw_debt += 2,
                    CardKind::WildDrawFour => self.draw_debt += 4,
                    CardKind::Wild | CardKind::Number(_) => {}
                }
            }
        }

        self.advance_turn();
        Ok(())
    }

    /// The moves open to `seat` right now. Before the opening card is
    /// flipped every hand card is legal. Draw is always offered when no card
    /// is, and alongside playable cards under the house rule.
    pub fn legal_moves(&self, seat: usize) -> Vec<Move> {
        let Some(hand) = self.hands.get(seat) else {
            return Vec::new();
        };

        let mut moves: Vec<Move> = match self.discard.last() {
            None => (0..hand.cards_count()).map(Move::play).collect(),
            Some(top) => hand
                .cards()
                .iter()
                .enumerate()
                .filter(|(_, card)| card.is_playable(top, self.draw_debt > 0))
                .map(|(index, _)| Move::play(index))
                .collect(),
        };

        if moves.is_empty() || self.config.draw_alongside_playable {
            moves.push(Move::Draw);
        }

        moves
    }

    /// What the current player's decision provider gets to see.
    pub fn turn_view(&self) -> TurnView<'_> {
        TurnView {
            seat: self.turn,
            hand: &self.hands[self.turn],
            top_card: self.top_card().copied(),
            legal_moves: self.legal_moves(self.turn),
            draw_debt: self.draw_debt,
            clockwise: self.clockwise,
            history: &self.history,
        }
    }

    /// True when any hand is empty or no draw can ever be satisfied again.
    /// A query, not a transition; the state is left as the last move put it.
    pub fn is_over(&self) -> bool {
        if self.hands.iter().any(Hand::is_empty) {
            return true;
        }
        self.deck.is_empty() && self.discard.len() <= 1
    }

    /// The first seat with an empty hand, or `None` when the game ended by
    /// exhaustion.
    pub fn winner(&self) -> Option<usize> {
        self.hands.iter().position(Hand::is_empty)
    }

    pub fn current_turn(&self) -> usize {
        self.turn
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn draw_debt(&self) -> u32 {
        self.draw_debt
    }

    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    pub fn hand(&self, seat: usize) -> Option<&Hand> {
        self.hands.get(seat)
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard.last()
    }

    pub fn history(&self, seat: usize) -> &[Card] {
        self.history.get(seat).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The deck order as it stood right before dealing: everything a replay
    /// needs to re-derive the hands. Empty until the game is started.
    pub fn initial_deck(&self) -> &[Card] {
        &self.initial_deck
    }

    /// Seed driving the recycle reshuffles. Recorded alongside the initial
    /// deck so a replay repeats them exactly.
    pub fn recycle_seed(&self) -> u64 {
        self.recycle_seed
    }

    /// Cards across draw pile, discard pile and every hand.
    pub fn total_cards(&self) -> usize {
        self.deck.cards_count()
            + self.discard.len()
            + self.hands.iter().map(Hand::cards_count).sum::<usize>()
    }

    /// Draws exactly `amount` cards, refilling the draw pile from all but
    /// the top of the discard pile as often as needed. Checked up front, so
    /// a failing draw changes nothing.
    fn draw_with_recycle(&mut self, amount: usize) -> Result<Vec<Card>> {
        let available = self.deck.cards_count() + self.discard.len().saturating_sub(1);
        if available < amount {
            return Err(GameError::DeckExhausted);
        }

        let mut drawn = self.deck.draw(amount);
        while drawn.len() < amount {
            let top = self.discard.split_off(self.discard.len() - 1);
            self.deck.put_back(self.discard.drain(..));
            self.discard = top;
            self.deck.shuffle(&mut self.recycle_rng);
            debug!(recycled = self.deck.cards_count(), "recycled discard pile into draw pile");

            drawn.extend(self.deck.draw(amount - drawn.len()));
        }

        Ok(drawn)
    }

    fn advance_turn(&mut self) {
        let players = self.hands.len();
        self.turn = if self.clockwise {
            (self.turn + 1) % players
        } else {
            (self.turn + players - 1) % players
        };
    }
}
