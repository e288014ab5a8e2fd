#![allow(dead_code)]

use sprintdeck_core::{
    ActionStats, Card, CardTemplate, Catalog, ChallengeKind, ChallengeStats, GameState,
    RandomSource,
};

/// Picks `j = i` every time, so every shuffle is the identity.
pub struct NoShuffle;

impl RandomSource for NoShuffle {
    fn below(&mut self, bound: usize) -> usize {
        bound - 1
    }
}

fn action(
    id: &str,
    name: &str,
    cost: u32,
    task_points: u32,
    specs: u32,
    card_draw: u32,
) -> CardTemplate {
    CardTemplate::action(
        id,
        name,
        ActionStats {
            cost,
            task_points,
            specs,
            card_draw,
        },
    )
}

fn challenge(id: &str, kind: ChallengeKind, tasks: u32, specs: u32, points: u32) -> CardTemplate {
    CardTemplate::challenge(
        id,
        id,
        ChallengeStats {
            kind,
            required_tasks: tasks,
            required_specs: specs,
            point_value: points,
        },
    )
}

/// Same shape as the shipped assets: 12 starters, 7 store cards, 10 challenges.
pub fn catalog() -> Catalog {
    let mut starter = Vec::new();
    for _ in 0..6 {
        starter.push(action("basic-code", "Basic Code", 0, 1, 0, 0));
    }
    for _ in 0..6 {
        starter.push(action("quick-spec", "Quick Spec", 0, 0, 1, 0));
    }
    let store = vec![
        action("focused-coding", "Focused Coding", 3, 3, 0, 0),
        action("pair-programming", "Pair Programming", 4, 2, 0, 1),
        action("write-spec", "Write Spec", 3, 0, 2, 0),
        action("code-review", "Code Review", 2, 1, 1, 0),
        action("refactor", "Refactor", 5, 4, 1, 0),
        action("ai-assist", "AI Assist", 4, 1, 0, 2),
        action("deep-work", "Deep Work", 6, 5, 0, 1),
    ];
    let challenges = vec![
        challenge("typo-bug", ChallengeKind::Bug, 3, 0, 1),
        challenge("missing-import", ChallengeKind::Bug, 4, 0, 1),
        challenge("null-pointer", ChallengeKind::Bug, 5, 1, 2),
        challenge("race-condition", ChallengeKind::Bug, 6, 1, 2),
        challenge("add-button", ChallengeKind::Feature, 4, 1, 1),
        challenge("form-validation", ChallengeKind::Feature, 5, 1, 1),
        challenge("api-integration", ChallengeKind::Feature, 7, 2, 2),
        challenge("user-auth", ChallengeKind::Feature, 8, 2, 2),
        challenge("performance-bug", ChallengeKind::Bug, 9, 2, 3),
        challenge("complex-feature", ChallengeKind::Feature, 10, 3, 3),
    ];
    Catalog {
        starter,
        store,
        challenges,
    }
}

/// A fresh action card with an id that cannot collide with the state's cards.
pub fn extra_card(state: &mut GameState, task_points: u32, card_draw: u32) -> Card {
    action("test-draw", "Test Draw", 0, task_points, 0, card_draw).instantiate(state.ids.alloc())
}
