mod common;

use common::{catalog, extra_card, NoShuffle};
use sprintdeck_core::{
    apply, step, Action, Event, GameConfig, GameState, InstanceId, Outcome, Phase, Rejection,
    RngState, Session,
};
use std::collections::HashSet;

fn started(seed: u64) -> (GameState, RngState) {
    started_with(GameConfig::default(), seed)
}

fn gated() -> GameConfig {
    GameConfig {
        enforce_phases: true,
        ..GameConfig::default()
    }
}

fn started_with(config: GameConfig, seed: u64) -> (GameState, RngState) {
    let mut rng = RngState::from_seed(seed);
    let state = apply(
        &GameState::new(config),
        &Action::StartGame,
        &catalog(),
        &mut rng,
    );
    (state, rng)
}

#[test]
fn start_game_deals_opening_layout() {
    let (state, _) = started(1);
    assert_eq!(state.hand.len(), 5);
    assert_eq!(state.deck.draw.len(), 7);
    assert!(state.deck.discard.is_empty());
    assert!(state.played.is_empty());
    assert!(state.challenges.active.is_some());
    assert_eq!(state.challenges.deck.len(), 9);
    assert!(state.challenges.completed.is_empty());
    assert_eq!(state.store.offers.len(), 5);
    assert_eq!(state.store.pool.len(), 2);
    assert_eq!(state.turn, 1);
    assert_eq!(state.phase, Phase::Play);
    assert_eq!(state.current_tasks, 0);
    assert_eq!(state.score, 0);
    assert!(!state.game_over);
}

#[test]
fn every_instance_id_is_unique() {
    let (state, _) = started(2);
    let ids: Vec<InstanceId> = state
        .player_cards()
        .chain(state.challenges.cards())
        .chain(state.store.cards())
        .map(|card| card.instance)
        .collect();
    let unique: HashSet<InstanceId> = ids.iter().copied().collect();
    assert_eq!(ids.len(), 29);
    assert_eq!(unique.len(), 29);
}

#[test]
fn draw_two_from_three_card_deck() {
    let (mut state, mut rng) = started(3);
    state.deck.draw.truncate(3);
    state.hand.clear();
    let next = apply(&state, &Action::DrawCards { count: 2 }, &catalog(), &mut rng);
    assert_eq!(next.hand.len(), 2);
    assert_eq!(next.deck.draw.len(), 1);
    assert!(next.deck.discard.is_empty());
}

#[test]
fn draw_reshuffles_discard_when_deck_is_empty() {
    let (mut state, mut rng) = started(4);
    let discard: Vec<_> = state.deck.draw.drain(..3).collect();
    state.deck.draw.clear();
    state.deck.discard = discard;
    state.hand.clear();
    let next = apply(&state, &Action::DrawCards { count: 2 }, &catalog(), &mut rng);
    assert_eq!(next.hand.len(), 2);
    assert!(next.deck.discard.is_empty());
    assert_eq!(next.deck.draw.len(), 1);
}

#[test]
fn draw_with_both_piles_empty_draws_nothing() {
    let (mut state, mut rng) = started(5);
    state.deck.draw.clear();
    state.deck.discard.clear();
    state.hand.clear();
    let transition = step(&state, &Action::DrawCards { count: 3 }, &catalog(), &mut rng);
    assert!(transition.accepted());
    assert!(transition.state.hand.is_empty());
    assert_eq!(
        transition.events,
        vec![Event::CardsDrawn {
            requested: 3,
            drawn: 0
        }]
    );
}

#[test]
fn oversized_draw_stops_when_both_piles_run_out() {
    let (state, mut rng) = started(5);
    let action: Action =
        serde_json::from_str(r#"{"kind":"DrawCards","count":18446744073709551615}"#)
            .expect("decode draw");
    assert_eq!(action, Action::DrawCards { count: usize::MAX });

    let transition = step(&state, &action, &catalog(), &mut rng);
    assert!(transition.accepted());
    assert_eq!(transition.state.hand.len(), 12);
    assert!(transition.state.deck.is_empty());
    assert!(transition.events.contains(&Event::CardsDrawn {
        requested: usize::MAX,
        drawn: 7
    }));
}

#[test]
fn card_draw_effect_reshuffles_mid_play() {
    let (mut state, mut rng) = started(6);
    let discard: Vec<_> = state.deck.draw.drain(..3).collect();
    state.deck.draw.clear();
    state.deck.discard = discard;
    let drawer = extra_card(&mut state, 1, 2);
    let id = drawer.instance;
    state.hand = vec![drawer];

    let next = apply(&state, &Action::PlayCard { card: id }, &catalog(), &mut rng);
    assert_eq!(next.hand.len(), 2);
    assert!(next.deck.discard.is_empty());
    assert_eq!(next.deck.draw.len(), 1);
    assert_eq!(next.played.len(), 1);
    assert_eq!(next.current_tasks, 1);
}

#[test]
fn end_buy_phase_redraws_from_reshuffled_discard() {
    let (mut state, mut rng) = started(7);
    let hand = std::mem::take(&mut state.hand);
    state.deck.draw.clear();
    state.deck.discard = hand;
    state.phase = Phase::Buy;

    let next = apply(&state, &Action::EndBuyPhase, &catalog(), &mut rng);
    assert_eq!(next.hand.len(), 5);
    assert!(next.deck.draw.is_empty());
    assert!(next.deck.discard.is_empty());
    assert_eq!(next.turn, state.turn + 1);
    assert_eq!(next.phase, Phase::Play);
}

#[test]
fn end_buy_phase_clears_resources_and_played_area() {
    let (state, mut rng) = started(8);
    let catalog = catalog();
    let mut state = state;
    for card in state.hand.clone() {
        state = apply(&state, &Action::PlayCard { card: card.instance }, &catalog, &mut rng);
    }
    assert_eq!(state.played.len(), 5);
    assert_eq!(state.current_tasks + state.current_specs, 5);
    state = apply(&state, &Action::EndPlayPhase, &catalog, &mut rng);
    state = apply(&state, &Action::EndBuyPhase, &catalog, &mut rng);
    assert_eq!(state.current_tasks, 0);
    assert_eq!(state.current_specs, 0);
    assert!(state.played.is_empty());
    assert_eq!(state.deck.discard.len(), 5);
    assert_eq!(state.hand.len(), 5);
    assert_eq!(state.deck.draw.len(), 2);
}

#[test]
fn final_turn_ends_game_without_redraw() {
    let (mut state, mut rng) = started(9);
    state.turn = state.max_turns();
    state.phase = Phase::Buy;
    let hand_before = state.hand.clone();
    let draw_before = state.deck.draw.clone();

    let next = apply(&state, &Action::EndBuyPhase, &catalog(), &mut rng);
    assert!(next.game_over);
    assert_eq!(next.hand, hand_before);
    assert_eq!(next.deck.draw, draw_before);
    assert_eq!(next.outcome(), Some(Outcome::Defeat));
}

#[test]
fn game_over_is_terminal_until_restart() {
    let (mut state, mut rng) = started(10);
    state.game_over = true;
    let catalog = catalog();
    for action in [
        Action::DrawCards { count: 1 },
        Action::CompleteChallenge,
        Action::EndPlayPhase,
        Action::EndBuyPhase,
        Action::PlayCard {
            card: state.hand[0].instance,
        },
    ] {
        let transition = step(&state, &action, &catalog, &mut rng);
        assert_eq!(transition.rejection, Some(Rejection::GameOver));
        assert_eq!(transition.state, state);
    }
    let restarted = apply(&state, &Action::RestartGame, &catalog, &mut rng);
    assert!(!restarted.game_over);
    assert_eq!(restarted.turn, 1);
    assert_eq!(restarted.hand.len(), 5);
    assert_eq!(restarted.deck.draw.len(), 7);
}

#[test]
fn restart_matches_a_fresh_start_with_the_same_randomness() {
    let (mut state, _) = started(11);
    state.score = 7;
    state.turn = 12;
    let fresh = apply(
        &GameState::new(GameConfig::default()),
        &Action::StartGame,
        &catalog(),
        &mut RngState::from_seed(99),
    );
    let restarted = apply(
        &state,
        &Action::RestartGame,
        &catalog(),
        &mut RngState::from_seed(99),
    );
    assert_eq!(fresh, restarted);
}

#[test]
fn playing_a_card_not_in_hand_is_a_no_op() {
    let (state, mut rng) = started(12);
    let stray = state.deck.draw[0].instance;
    let transition = step(&state, &Action::PlayCard { card: stray }, &catalog(), &mut rng);
    assert_eq!(transition.state, state);
    assert_eq!(transition.rejection, Some(Rejection::CardNotInHand(stray)));
    assert!(transition.events.is_empty());
}

#[test]
fn unknown_action_is_a_no_op() {
    let (state, mut rng) = started(13);
    let action: Action = serde_json::from_str(r#"{"kind":"SellCard","card":1}"#).expect("decode");
    let transition = step(&state, &action, &catalog(), &mut rng);
    assert_eq!(transition.state, state);
    assert_eq!(transition.rejection, Some(Rejection::UnknownAction));
}

#[test]
fn purchase_goes_to_discard_not_deck() {
    let (state, mut rng) = started(14);
    let catalog = catalog();
    let mut state = apply(&state, &Action::EndPlayPhase, &catalog, &mut rng);
    state.current_tasks = 10;
    let offer = state.store.offers[0].clone();
    let draw_before = state.deck.draw.len();

    let next = apply(
        &state,
        &Action::PurchaseCard {
            card: offer.instance,
        },
        &catalog,
        &mut rng,
    );
    assert_eq!(next.deck.draw.len(), draw_before);
    assert_eq!(next.deck.discard, vec![offer.clone()]);
    assert_eq!(next.current_tasks, 10 - offer.cost());
    assert_eq!(next.store.offers.len(), 5);
    assert_eq!(next.store.pool.len(), 1);
}

#[test]
fn purchased_card_cycles_back_into_hand() {
    let (state, mut rng) = started(15);
    let catalog = catalog();
    let mut state = apply(&state, &Action::EndPlayPhase, &catalog, &mut rng);
    state.current_tasks = 10;
    let bought = state.store.offers[0].instance;
    state = apply(&state, &Action::PurchaseCard { card: bought }, &catalog, &mut rng);
    assert!(state.deck.discard.iter().any(|card| card.instance == bought));

    // Empty the draw pile so the next draw must recycle the discard.
    state.deck.draw.clear();
    state.hand.clear();
    state = apply(&state, &Action::DrawCards { count: 1 }, &catalog, &mut rng);
    assert_eq!(state.hand.len(), 1);
    assert_eq!(state.hand[0].instance, bought);
    assert!(state.deck.discard.is_empty());
}

#[test]
fn phases_gate_actions() {
    let (state, mut rng) = started_with(gated(), 16);
    let catalog = catalog();
    let offer = state.store.offers[0].instance;
    let mut rich = state.clone();
    rich.current_tasks = 10;

    let buy_in_play = step(&rich, &Action::PurchaseCard { card: offer }, &catalog, &mut rng);
    assert_eq!(
        buy_in_play.rejection,
        Some(Rejection::WrongPhase {
            expected: Phase::Buy,
            actual: Phase::Play
        })
    );
    let end_buy_in_play = step(&rich, &Action::EndBuyPhase, &catalog, &mut rng);
    assert!(!end_buy_in_play.accepted());

    let buying = apply(&rich, &Action::EndPlayPhase, &catalog, &mut rng);
    let card = buying.hand[0].instance;
    let play_in_buy = step(&buying, &Action::PlayCard { card }, &catalog, &mut rng);
    assert!(!play_in_buy.accepted());
    assert!(!step(&buying, &Action::EndPlayPhase, &catalog, &mut rng).accepted());

    let mut relaxed = rich;
    relaxed.config.enforce_phases = false;
    let bought = step(&relaxed, &Action::PurchaseCard { card: offer }, &catalog, &mut rng);
    assert!(bought.accepted());
}

#[test]
fn default_config_accepts_actions_in_either_phase() {
    let (state, mut rng) = started(16);
    let catalog = catalog();
    assert!(!state.config.enforce_phases);

    let buying = apply(&state, &Action::EndPlayPhase, &catalog, &mut rng);
    assert_eq!(buying.phase, Phase::Buy);
    let card = buying.hand[0].instance;
    let played = step(&buying, &Action::PlayCard { card }, &catalog, &mut rng);
    assert!(played.accepted());
    assert_eq!(played.state.played.len(), 1);
    assert_eq!(played.state.hand.len(), 4);

    let mut rich = state.clone();
    rich.current_tasks = 10;
    let offer = rich.store.offers[0].clone();
    let bought = step(
        &rich,
        &Action::PurchaseCard {
            card: offer.instance,
        },
        &catalog,
        &mut rng,
    );
    assert!(bought.accepted());
    assert_eq!(bought.state.deck.discard, vec![offer]);

    let ended = step(&state, &Action::EndBuyPhase, &catalog, &mut rng);
    assert!(ended.accepted());
    assert_eq!(ended.state.turn, 2);
}

#[test]
fn completing_a_challenge_scores_its_points() {
    let (mut state, mut rng) = started(17);
    let catalog = catalog();
    let stats = *state
        .active_challenge()
        .and_then(|card| card.challenge())
        .expect("active challenge");

    state.current_tasks = stats.required_tasks.saturating_sub(1);
    state.current_specs = stats.required_specs;
    if stats.required_tasks > 0 {
        let short = apply(&state, &Action::CompleteChallenge, &catalog, &mut rng);
        assert_eq!(short, state);
    }

    state.current_tasks = stats.required_tasks + 2;
    let transition = step(&state, &Action::CompleteChallenge, &catalog, &mut rng);
    assert!(transition.accepted());
    assert_eq!(transition.state.score, stats.point_value);
    assert_eq!(transition.state.current_tasks, 2);
    assert_eq!(transition.state.current_specs, 0);
    assert_eq!(transition.state.challenges.completed.len(), 1);
    assert_eq!(transition.state.challenges.deck.len(), 8);
    assert_eq!(
        transition.state.challenge_instances(),
        state.challenge_instances()
    );
}

#[test]
fn challenges_recycle_through_a_full_cycle() {
    let (mut state, mut rng) = started(18);
    let catalog = catalog();
    let all = state.challenge_instances();
    state.current_tasks = 1_000;
    state.current_specs = 1_000;
    for _ in 0..10 {
        state = apply(&state, &Action::CompleteChallenge, &catalog, &mut rng);
    }
    assert_eq!(state.challenges.deck.len(), 9);
    assert!(state.challenges.completed.is_empty());
    assert!(state.challenges.active.is_some());
    assert_eq!(state.challenge_instances(), all);
}

#[test]
fn identity_shuffle_deals_catalog_order() {
    let state = apply(
        &GameState::new(GameConfig::default()),
        &Action::StartGame,
        &catalog(),
        &mut NoShuffle,
    );
    assert!(state.hand.iter().all(|card| card.id == "basic-code"));
    assert_eq!(
        state.challenges.active.as_ref().map(|card| card.id.as_str()),
        Some("typo-bug")
    );
    assert_eq!(state.store.offers[0].id, "focused-coding");
}

#[test]
fn session_dispatches_and_logs_events() {
    let mut session = Session::new(gated(), catalog(), 21);
    assert!(session.state().hand.is_empty());
    session.dispatch(Action::StartGame).expect("start");
    assert_eq!(session.state().hand.len(), 5);
    let err = session
        .dispatch(Action::EndBuyPhase)
        .expect_err("buy phase not reached");
    assert!(matches!(err, Rejection::WrongPhase { .. }));
    session.dispatch(Action::EndPlayPhase).expect("end play");
    let events: Vec<Event> = session.drain_events().collect();
    assert!(matches!(events.first(), Some(Event::GameStarted { .. })));
    assert_eq!(
        events.last(),
        Some(&Event::PhaseChanged { phase: Phase::Buy })
    );
}

#[test]
fn full_game_reaches_game_over_after_max_turns() {
    let mut session = Session::new(GameConfig::default(), catalog(), 22);
    session.dispatch(Action::StartGame).expect("start");
    for _ in 0..GameConfig::default().max_turns {
        session.dispatch(Action::EndPlayPhase).expect("end play");
        session.dispatch(Action::EndBuyPhase).expect("end buy");
    }
    assert!(session.state().game_over);
    assert_eq!(session.state().turn, 21);
    assert_eq!(session.state().player_instances().len(), 12);
}
