use crate::{Card, Event, EventBus, GameState, InstanceId, Rejection};
use serde::{Deserialize, Serialize};

/// Cards on offer plus the pool they are refilled from. The store is allowed
/// to run short once the pool is exhausted.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Store {
    pub offers: Vec<Card>,
    pub pool: Vec<Card>,
}

impl Store {
    /// Fills up to `slots` offers from the front of `pool`.
    pub fn stock(mut pool: Vec<Card>, slots: usize) -> Self {
        let rest = pool.split_off(slots.min(pool.len()));
        Self {
            offers: pool,
            pool: rest,
        }
    }

    pub fn offer(&self, instance: InstanceId) -> Option<&Card> {
        self.offers.iter().find(|card| card.instance == instance)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.offers.iter().chain(self.pool.iter())
    }

    fn take(&mut self, instance: InstanceId) -> Option<Card> {
        let index = self
            .offers
            .iter()
            .position(|card| card.instance == instance)?;
        Some(self.offers.remove(index))
    }

    /// Moves the head of the pool into the offers.
    fn refill(&mut self) -> Option<InstanceId> {
        if self.pool.is_empty() {
            return None;
        }
        let card = self.pool.remove(0);
        let instance = card.instance;
        self.offers.push(card);
        Some(instance)
    }
}

impl GameState {
    /// Buys an offer with tasks. The card goes to the discard pile and only
    /// reaches the hand after the next reshuffle.
    pub fn purchase(
        &mut self,
        instance: InstanceId,
        events: &mut EventBus,
    ) -> Result<(), Rejection> {
        let cost = self
            .store
            .offer(instance)
            .map(Card::cost)
            .ok_or(Rejection::OfferNotFound(instance))?;
        if self.current_tasks < cost {
            return Err(Rejection::InsufficientTasks {
                cost,
                have: self.current_tasks,
            });
        }
        let Some(card) = self.store.take(instance) else {
            return Err(Rejection::OfferNotFound(instance));
        };
        self.current_tasks -= cost;
        self.deck.discard.push(card);
        let refilled = self.store.refill();
        events.push(Event::CardPurchased {
            card: instance,
            cost,
            tasks_left: self.current_tasks,
            refilled,
        });
        Ok(())
    }
}
