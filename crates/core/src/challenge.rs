use crate::deck::shuffle;
use crate::{Card, Event, EventBus, GameState, RandomSource, Rejection};
use serde::{Deserialize, Serialize};

/// Challenge cards cycle `deck -> active -> completed -> deck`; none is ever
/// lost.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeTrack {
    pub active: Option<Card>,
    pub deck: Vec<Card>,
    pub completed: Vec<Card>,
}

impl ChallengeTrack {
    pub fn new(mut deck: Vec<Card>) -> Self {
        let active = if deck.is_empty() {
            None
        } else {
            Some(deck.remove(0))
        };
        Self {
            active,
            deck,
            completed: Vec::new(),
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.active
            .iter()
            .chain(self.deck.iter())
            .chain(self.completed.iter())
    }

    /// Picks the next active challenge after the previous one was completed.
    /// Returns the number of cards recycled from the completed pile, if any.
    fn advance<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        debug_assert!(self.active.is_none());
        if !self.deck.is_empty() {
            self.active = Some(self.deck.remove(0));
            return None;
        }
        if self.completed.is_empty() {
            return None;
        }
        let mut recycled = std::mem::take(&mut self.completed);
        let count = recycled.len();
        shuffle(&mut recycled, rng);
        self.active = Some(recycled.remove(0));
        self.deck = recycled;
        Some(count)
    }
}

/// Whether `tasks` and `specs` cover the challenge's requirements. Missing
/// challenges and non-challenge cards are never completable.
pub fn can_complete(challenge: Option<&Card>, tasks: u32, specs: u32) -> bool {
    challenge
        .and_then(Card::challenge)
        .is_some_and(|stats| tasks >= stats.required_tasks && specs >= stats.required_specs)
}

impl GameState {
    pub fn can_complete_active(&self) -> bool {
        can_complete(
            self.challenges.active.as_ref(),
            self.current_tasks,
            self.current_specs,
        )
    }

    /// Pays for the active challenge, scores it and brings up the next one.
    pub fn complete_challenge<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        events: &mut EventBus,
    ) -> Result<(), Rejection> {
        let stats = *self
            .challenges
            .active
            .as_ref()
            .and_then(Card::challenge)
            .ok_or(Rejection::NoActiveChallenge)?;
        if !self.can_complete_active() {
            return Err(Rejection::RequirementsUnmet {
                tasks: stats.required_tasks,
                specs: stats.required_specs,
                have_tasks: self.current_tasks,
                have_specs: self.current_specs,
            });
        }
        let Some(card) = self.challenges.active.take() else {
            return Err(Rejection::NoActiveChallenge);
        };
        self.current_tasks -= stats.required_tasks;
        self.current_specs -= stats.required_specs;
        self.score = self.score.saturating_add(stats.point_value);
        events.push(Event::ChallengeCompleted {
            card: card.instance,
            kind: stats.kind,
            points: stats.point_value,
            score: self.score,
        });
        self.challenges.completed.push(card);
        if let Some(cards) = self.challenges.advance(rng) {
            events.push(Event::ChallengesRecycled { cards });
        }
        Ok(())
    }
}
