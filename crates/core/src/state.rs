use crate::{Card, ChallengeTrack, Deck, GameConfig, InstanceAllocator, InstanceId, Store};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Play,
    Buy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Victory,
    Defeat,
}

/// A complete snapshot of one game. Transitions never edit a snapshot the
/// caller can see; they build the next one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: Phase,
    pub turn: u32,
    pub game_over: bool,
    pub score: u32,
    pub current_tasks: u32,
    pub current_specs: u32,
    pub deck: Deck,
    pub hand: Vec<Card>,
    pub played: Vec<Card>,
    pub challenges: ChallengeTrack,
    pub store: Store,
    #[serde(default)]
    pub ids: InstanceAllocator,
}

impl GameState {
    /// The empty pre-game state: no cards anywhere, turn 1, play phase.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: Phase::Play,
            turn: 1,
            game_over: false,
            score: 0,
            current_tasks: 0,
            current_specs: 0,
            deck: Deck::default(),
            hand: Vec::new(),
            played: Vec::new(),
            challenges: ChallengeTrack::default(),
            store: Store::default(),
            ids: InstanceAllocator::default(),
        }
    }

    pub fn max_turns(&self) -> u32 {
        self.config.max_turns
    }

    pub fn hand_size(&self) -> usize {
        self.config.hand_size
    }

    pub fn hand_card(&self, instance: InstanceId) -> Option<&Card> {
        self.hand.iter().find(|card| card.instance == instance)
    }

    pub fn active_challenge(&self) -> Option<&Card> {
        self.challenges.active.as_ref()
    }

    /// Every card the player owns: draw pile, discard, hand and played area.
    pub fn player_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.deck
            .draw
            .iter()
            .chain(self.deck.discard.iter())
            .chain(self.hand.iter())
            .chain(self.played.iter())
    }

    /// Sorted instance ids of [`Self::player_cards`].
    pub fn player_instances(&self) -> Vec<InstanceId> {
        let mut ids: Vec<InstanceId> = self.player_cards().map(|card| card.instance).collect();
        ids.sort_unstable();
        ids
    }

    /// Sorted instance ids across the active challenge, challenge deck and
    /// completed pile.
    pub fn challenge_instances(&self) -> Vec<InstanceId> {
        let mut ids: Vec<InstanceId> = self.challenges.cards().map(|card| card.instance).collect();
        ids.sort_unstable();
        ids
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            return None;
        }
        if self.score >= self.config.win_score {
            Some(Outcome::Victory)
        } else {
            Some(Outcome::Defeat)
        }
    }
}
