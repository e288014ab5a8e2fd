use crate::{Card, RandomSource};
use serde::{Deserialize, Serialize};

/// In-place Fisher–Yates: walks from the last index down to 1 and swaps
/// each slot with a uniformly chosen slot at or below it.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// The player's draw pile and discard pile. `draw[0]` is the next card drawn.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Draw {
    pub cards: Vec<Card>,
    /// Size of the discard pile that was recycled, if a reshuffle happened.
    pub reshuffled: Option<usize>,
}

impl Deck {
    pub fn new(draw: Vec<Card>) -> Self {
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty() && self.discard.is_empty()
    }

    /// Draws up to `count` cards. The discard pile is shuffled into the draw
    /// pile the moment the draw pile runs dry, checked before every card, so a
    /// batch that straddles the boundary recycles mid-batch. Returns fewer
    /// cards when both piles are exhausted.
    pub fn draw_cards<R: RandomSource + ?Sized>(&mut self, count: usize, rng: &mut R) -> Draw {
        let mut out = Draw {
            cards: Vec::with_capacity(count.min(self.len())),
            reshuffled: None,
        };
        for _ in 0..count {
            if self.draw.is_empty() && !self.discard.is_empty() {
                out.reshuffled = Some(self.discard.len());
                self.reshuffle_discard(rng);
            }
            if self.draw.is_empty() {
                break;
            }
            out.cards.push(self.draw.remove(0));
        }
        out
    }

    pub fn discard(&mut self, mut cards: Vec<Card>) {
        self.discard.append(&mut cards);
    }

    /// Replaces the draw pile with the shuffled discard pile.
    fn reshuffle_discard<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        debug_assert!(self.draw.is_empty());
        self.draw = std::mem::take(&mut self.discard);
        shuffle(&mut self.draw, rng);
        log::trace!("reshuffled {} cards into the draw pile", self.draw.len());
    }
}
