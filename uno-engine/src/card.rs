use core::fmt;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};
use thiserror::Error;

#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    EnumCountMacro,
    EnumIter,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum CardColor {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// A single card, compared by value: two cards with the same color and kind
/// are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: CardColor,
    pub kind: CardKind,
}

impl Card {
    pub fn new(color: CardColor, kind: CardKind) -> Self {
        Self { color, kind }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self.kind, CardKind::Wild | CardKind::WildDrawFour)
    }

    /// Copy of this card with the color replaced. Used when a wild card is
    /// played and the acting player assigns its color.
    pub fn with_color(self, color: CardColor) -> Self {
        Self { color, ..self }
    }

    /// Whether this card may be played on top of `previous`.
    ///
    /// While a draw penalty is pending, only a card of the same penalty kind
    /// may be played: it either resolves or stacks the penalty, so everything
    /// else is rejected, wilds and color matches included.
    pub fn is_playable(&self, previous: &Card, draw_debt_active: bool) -> bool {
        if draw_debt_active && previous.kind == CardKind::DrawTwo {
            return self.kind == CardKind::DrawTwo;
        }
        if draw_debt_active && previous.kind == CardKind::WildDrawFour {
            return self.kind == CardKind::WildDrawFour;
        }
        self.color == previous.color || self.kind == previous.kind || self.is_wild()
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Number(number) => write!(f, "{} {}", self.color, number),
            CardKind::Skip => write!(f, "{} Skip", self.color),
            CardKind::Reverse => write!(f, "{} Reverse", self.color),
            CardKind::DrawTwo => write!(f, "{} Draw Two", self.color),
            CardKind::Wild => write!(f, "Wild"),
            CardKind::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

#[derive(Error, Debug)]
#[error("unrecognized card encoding {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseCardError(s.to_string());

        match s {
            "Wild" => return Ok(Card::new(CardColor::Wild, CardKind::Wild)),
            "Wild Draw Four" => return Ok(Card::new(CardColor::Wild, CardKind::WildDrawFour)),
            _ => {}
        }

        let (color, rest) = s.split_once(' ').ok_or_else(bad)?;
        let color = color.parse::<CardColor>().map_err(|_| bad())?;
        // Only the two literals above may carry the wild color.
        if color == CardColor::Wild {
            return Err(bad());
        }
        let kind = match rest {
            "Skip" => CardKind::Skip,
            "Reverse" => CardKind::Reverse,
            "Draw Two" => CardKind::DrawTwo,
            _ => {
                let number = rest.parse::<u8>().map_err(|_| bad())?;
                if number > 9 {
                    return Err(bad());
                }
                CardKind::Number(number)
            }
        };

        Ok(Card::new(color, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_correct_string_for_number_card() {
        let red_3 = Card::new(CardColor::Red, CardKind::Number(3));
        assert_eq!(red_3.to_string(), "Red 3");

        let yellow_5 = Card::new(CardColor::Yellow, CardKind::Number(5));
        assert_eq!(yellow_5.to_string(), "Yellow 5");

        let blue_9 = Card::new(CardColor::Blue, CardKind::Number(9));
        assert_eq!(blue_9.to_string(), "Blue 9");
    }

    #[test]
    fn return_correct_string_for_special_cards() {
        let red_skip = Card::new(CardColor::Red, CardKind::Skip);
        assert_eq!(red_skip.to_string(), "Red Skip");

        let yellow_reverse = Card::new(CardColor::Yellow, CardKind::Reverse);
        assert_eq!(yellow_reverse.to_string(), "Yellow Reverse");

        let blue_draw_two = Card::new(CardColor::Blue, CardKind::DrawTwo);
        assert_eq!(blue_draw_two.to_string(), "Blue Draw Two");
    }

    #[test]
    fn return_correct_string_for_wild_cards() {
        let wild = Card::new(CardColor::Wild, CardKind::Wild);
        assert_eq!(wild.to_string(), "Wild");

        let wild_draw_four = Card::new(CardColor::Wild, CardKind::WildDrawFour);
        assert_eq!(wild_draw_four.to_string(), "Wild Draw Four");
    }

    #[test]
    fn parse_round_trips_every_encoding() {
        let cards = [
            Card::new(CardColor::Red, CardKind::Number(0)),
            Card::new(CardColor::Green, CardKind::Number(7)),
            Card::new(CardColor::Yellow, CardKind::Skip),
            Card::new(CardColor::Blue, CardKind::Reverse),
            Card::new(CardColor::Red, CardKind::DrawTwo),
            Card::new(CardColor::Wild, CardKind::Wild),
            Card::new(CardColor::Wild, CardKind::WildDrawFour),
        ];
        for card in cards {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Card>().is_err());
        assert!("Purple 3".parse::<Card>().is_err());
        assert!("Red 10".parse::<Card>().is_err());
        assert!("Red Banana".parse::<Card>().is_err());
    }

    #[test]
    fn parse_rejects_wild_color_on_non_wild_kinds() {
        assert!("Wild 3".parse::<Card>().is_err());
        assert!("Wild Skip".parse::<Card>().is_err());
        assert!("Wild Reverse".parse::<Card>().is_err());
        assert!("Wild Draw Two".parse::<Card>().is_err());
    }

    #[test]
    fn playable_on_matching_color_or_kind() {
        let previous = Card::new(CardColor::Red, CardKind::Number(3));

        assert!(Card::new(CardColor::Red, CardKind::Number(7)).is_playable(&previous, false));
        assert!(Card::new(CardColor::Blue, CardKind::Number(3)).is_playable(&previous, false));
        assert!(Card::new(CardColor::Red, CardKind::Skip).is_playable(&previous, false));
        assert!(!Card::new(CardColor::Blue, CardKind::Number(7)).is_playable(&previous, false));
    }

    #[test]
    fn wilds_playable_on_anything_without_debt() {
        let previous = Card::new(CardColor::Green, CardKind::Number(9));

        assert!(Card::new(CardColor::Wild, CardKind::Wild).is_playable(&previous, false));
        assert!(Card::new(CardColor::Wild, CardKind::WildDrawFour).is_playable(&previous, false));
    }

    #[test]
    fn only_draw_two_playable_on_pending_draw_two() {
        let previous = Card::new(CardColor::Red, CardKind::DrawTwo);

        assert!(Card::new(CardColor::Blue, CardKind::DrawTwo).is_playable(&previous, true));
        assert!(!Card::new(CardColor::Red, CardKind::Number(2)).is_playable(&previous, true));
        assert!(!Card::new(CardColor::Wild, CardKind::Wild).is_playable(&previous, true));
        assert!(!Card::new(CardColor::Wild, CardKind::WildDrawFour).is_playable(&previous, true));
    }

    #[test]
    fn only_wild_draw_four_playable_on_pending_wild_draw_four() {
        let previous = Card::new(CardColor::Green, CardKind::WildDrawFour);

        assert!(Card::new(CardColor::Wild, CardKind::WildDrawFour).is_playable(&previous, true));
        assert!(!Card::new(CardColor::Green, CardKind::Number(4)).is_playable(&previous, true));
        assert!(!Card::new(CardColor::Wild, CardKind::Wild).is_playable(&previous, true));
        assert!(!Card::new(CardColor::Blue, CardKind::DrawTwo).is_playable(&previous, true));
    }

    #[test]
    fn debt_flag_ignored_when_previous_is_not_a_penalty_card() {
        let previous = Card::new(CardColor::Red, CardKind::Number(3));
        assert!(Card::new(CardColor::Red, CardKind::Number(7)).is_playable(&previous, true));
    }
}
