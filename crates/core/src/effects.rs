use crate::{Card, Event, EventBus, GameState, InstanceId, RandomSource, Rejection};

/// Applies a played card's effects: resources first, then card draw.
/// Challenge cards carry no play effect.
pub fn resolve_card_effect<R: RandomSource + ?Sized>(
    card: &Card,
    state: &mut GameState,
    rng: &mut R,
    events: &mut EventBus,
) {
    let Some(stats) = card.action() else {
        return;
    };
    state.current_tasks = state.current_tasks.saturating_add(stats.task_points);
    state.current_specs = state.current_specs.saturating_add(stats.specs);
    if stats.card_draw > 0 {
        state.draw_into_hand(stats.card_draw as usize, rng, events);
    }
}

impl GameState {
    /// Moves a card from hand to the played area, then resolves it.
    pub fn play_card<R: RandomSource + ?Sized>(
        &mut self,
        instance: InstanceId,
        rng: &mut R,
        events: &mut EventBus,
    ) -> Result<(), Rejection> {
        let index = self
            .hand
            .iter()
            .position(|card| card.instance == instance)
            .ok_or(Rejection::CardNotInHand(instance))?;
        if self.hand[index].action().is_none() {
            return Err(Rejection::NotAnActionCard(instance));
        }
        let card = self.hand.remove(index);
        self.played.push(card.clone());
        let (tasks, specs) = (self.current_tasks, self.current_specs);
        resolve_card_effect(&card, self, rng, events);
        events.push(Event::CardPlayed {
            card: instance,
            tasks: self.current_tasks - tasks,
            specs: self.current_specs - specs,
        });
        Ok(())
    }

    /// Draws through the deck and appends to the hand. Returns how many cards
    /// actually arrived.
    pub fn draw_into_hand<R: RandomSource + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
        events: &mut EventBus,
    ) -> usize {
        let draw = self.deck.draw_cards(count, rng);
        if let Some(cards) = draw.reshuffled {
            events.push(Event::DeckReshuffled { cards });
        }
        let drawn = draw.cards.len();
        self.hand.extend(draw.cards);
        events.push(Event::CardsDrawn {
            requested: count,
            drawn,
        });
        drawn
    }
}
