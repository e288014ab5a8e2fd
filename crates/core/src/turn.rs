use crate::{Event, EventBus, GameState, Phase, RandomSource};

impl GameState {
    pub fn end_play_phase(&mut self, events: &mut EventBus) {
        self.phase = Phase::Buy;
        events.push(Event::PhaseChanged { phase: Phase::Buy });
    }

    /// Cleans up the turn and either ends the game or deals the next hand.
    ///
    /// Played cards are discarded, then any cards still in hand, so the new
    /// hand is a full replacement. After the last turn the hand, draw pile and
    /// discard are left alone and nothing is dealt.
    pub fn end_buy_phase<R: RandomSource + ?Sized>(&mut self, rng: &mut R, events: &mut EventBus) {
        let played = std::mem::take(&mut self.played);
        self.deck.discard(played);
        self.current_tasks = 0;
        self.current_specs = 0;
        self.turn = self.turn.saturating_add(1);

        if self.turn > self.max_turns() {
            self.game_over = true;
            if let Some(outcome) = self.outcome() {
                events.push(Event::GameEnded {
                    score: self.score,
                    outcome,
                });
            }
            return;
        }

        let leftover = std::mem::take(&mut self.hand);
        self.deck.discard(leftover);
        self.phase = Phase::Play;
        events.push(Event::PhaseChanged { phase: Phase::Play });
        let hand = self.draw_into_hand(self.hand_size(), rng, events);
        events.push(Event::TurnStarted {
            turn: self.turn,
            hand,
        });
    }
}
