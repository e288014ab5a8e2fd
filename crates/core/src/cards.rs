use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one physical card for the lifetime of a game.
///
/// Catalog ids repeat (a starter deck holds six "Basic Code" cards); instance
/// ids never do, so actions always address an instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct InstanceId(pub u32);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CardCategory {
    Action,
    Challenge,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeKind {
    Bug,
    Feature,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ActionStats {
    #[serde(default)]
    pub cost: u32,
    #[serde(default)]
    pub task_points: u32,
    #[serde(default)]
    pub specs: u32,
    #[serde(default)]
    pub card_draw: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChallengeStats {
    pub kind: ChallengeKind,
    #[serde(default)]
    pub required_tasks: u32,
    #[serde(default)]
    pub required_specs: u32,
    #[serde(default)]
    pub point_value: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CardKind {
    Action(ActionStats),
    Challenge(ChallengeStats),
}

impl CardKind {
    pub fn category(&self) -> CardCategory {
        match self {
            CardKind::Action(_) => CardCategory::Action,
            CardKind::Challenge(_) => CardCategory::Challenge,
        }
    }
}

/// Immutable catalog entry. Instantiated into [`Card`]s at game start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CardTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub kind: CardKind,
}

impl CardTemplate {
    pub fn action(id: &str, name: &str, stats: ActionStats) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            kind: CardKind::Action(stats),
        }
    }

    pub fn challenge(id: &str, name: &str, stats: ChallengeStats) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            kind: CardKind::Challenge(stats),
        }
    }

    pub fn instantiate(&self, instance: InstanceId) -> Card {
        Card {
            instance,
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            kind: self.kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub instance: InstanceId,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub kind: CardKind,
}

impl Card {
    pub fn category(&self) -> CardCategory {
        self.kind.category()
    }

    pub fn action(&self) -> Option<&ActionStats> {
        match &self.kind {
            CardKind::Action(stats) => Some(stats),
            CardKind::Challenge(_) => None,
        }
    }

    pub fn challenge(&self) -> Option<&ChallengeStats> {
        match &self.kind {
            CardKind::Challenge(stats) => Some(stats),
            CardKind::Action(_) => None,
        }
    }

    /// Purchase price in tasks. Challenge cards are never sold and cost nothing.
    pub fn cost(&self) -> u32 {
        self.action().map(|stats| stats.cost).unwrap_or(0)
    }
}

/// Hands out instance ids for a single game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceAllocator {
    next: u32,
}

impl Default for InstanceAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl InstanceAllocator {
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    pub fn instantiate_all(&mut self, templates: &[CardTemplate]) -> Vec<Card> {
        templates
            .iter()
            .map(|template| template.instantiate(self.alloc()))
            .collect()
    }
}
