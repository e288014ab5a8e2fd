use crate::{ChallengeKind, InstanceId, Outcome, Phase};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    GameStarted {
        deck: usize,
        challenges: usize,
        store: usize,
    },
    CardsDrawn {
        requested: usize,
        drawn: usize,
    },
    DeckReshuffled {
        cards: usize,
    },
    CardPlayed {
        card: InstanceId,
        tasks: u32,
        specs: u32,
    },
    ChallengeCompleted {
        card: InstanceId,
        kind: ChallengeKind,
        points: u32,
        score: u32,
    },
    ChallengesRecycled {
        cards: usize,
    },
    CardPurchased {
        card: InstanceId,
        cost: u32,
        tasks_left: u32,
        refilled: Option<InstanceId>,
    },
    PhaseChanged {
        phase: Phase,
    },
    TurnStarted {
        turn: u32,
        hand: usize,
    },
    GameEnded {
        score: u32,
        outcome: Outcome,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
