use crate::deck::shuffle;
use crate::{
    Action, Catalog, ChallengeTrack, Deck, Event, EventBus, GameConfig, GameState,
    InstanceAllocator, InstanceId, Phase, RandomSource, RngState, Store,
};
use thiserror::Error;

/// Why an action left the state untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("the game is over")]
    GameOver,
    #[error("action needs the {expected:?} phase, current phase is {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("card {0} is not in hand")]
    CardNotInHand(InstanceId),
    #[error("card {0} cannot be played")]
    NotAnActionCard(InstanceId),
    #[error("card {0} is not on offer")]
    OfferNotFound(InstanceId),
    #[error("not enough tasks: need {cost}, have {have}")]
    InsufficientTasks { cost: u32, have: u32 },
    #[error("no active challenge")]
    NoActiveChallenge,
    #[error("challenge needs {tasks} tasks and {specs} specs, have {have_tasks} and {have_specs}")]
    RequirementsUnmet {
        tasks: u32,
        specs: u32,
        have_tasks: u32,
        have_specs: u32,
    },
    #[error("unknown action")]
    UnknownAction,
}

/// Result of one [`step`]: the next snapshot, what happened, and the reason
/// the action was ignored if it was.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<Event>,
    pub rejection: Option<Rejection>,
}

impl Transition {
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// The total transition function. Rejected actions return a copy equal to
/// `state`.
pub fn apply<R: RandomSource + ?Sized>(
    state: &GameState,
    action: &Action,
    catalog: &Catalog,
    rng: &mut R,
) -> GameState {
    step(state, action, catalog, rng).state
}

/// Like [`apply`] but also reports events and the rejection reason.
///
/// Work happens on a private copy that is discarded on rejection, so a
/// half-finished transition is never observable.
pub fn step<R: RandomSource + ?Sized>(
    state: &GameState,
    action: &Action,
    catalog: &Catalog,
    rng: &mut R,
) -> Transition {
    let mut next = state.clone();
    let mut events = EventBus::default();
    match dispatch(&mut next, action, catalog, rng, &mut events) {
        Ok(()) => {
            log::debug!(
                "{} accepted: turn {} phase {:?} tasks {} specs {} score {}",
                action.name(),
                next.turn,
                next.phase,
                next.current_tasks,
                next.current_specs,
                next.score
            );
            Transition {
                state: next,
                events: events.drain().collect(),
                rejection: None,
            }
        }
        Err(rejection) => {
            log::debug!("{} rejected: {rejection}", action.name());
            Transition {
                state: state.clone(),
                events: Vec::new(),
                rejection: Some(rejection),
            }
        }
    }
}

fn dispatch<R: RandomSource + ?Sized>(
    state: &mut GameState,
    action: &Action,
    catalog: &Catalog,
    rng: &mut R,
    events: &mut EventBus,
) -> Result<(), Rejection> {
    match *action {
        Action::StartGame | Action::RestartGame => {
            *state = start_game(state.config, catalog, rng, events);
            Ok(())
        }
        Action::Unknown => Err(Rejection::UnknownAction),
        _ if state.game_over => Err(Rejection::GameOver),
        Action::DrawCards { count } => {
            state.draw_into_hand(count, rng, events);
            Ok(())
        }
        Action::PlayCard { card } => {
            require_phase(state, Phase::Play)?;
            state.play_card(card, rng, events)
        }
        Action::CompleteChallenge => state.complete_challenge(rng, events),
        Action::PurchaseCard { card } => {
            require_phase(state, Phase::Buy)?;
            state.purchase(card, events)
        }
        Action::EndPlayPhase => {
            require_phase(state, Phase::Play)?;
            state.end_play_phase(events);
            Ok(())
        }
        Action::EndBuyPhase => {
            require_phase(state, Phase::Buy)?;
            state.end_buy_phase(rng, events);
            Ok(())
        }
    }
}

fn require_phase(state: &GameState, expected: Phase) -> Result<(), Rejection> {
    if state.config.enforce_phases && state.phase != expected {
        return Err(Rejection::WrongPhase {
            expected,
            actual: state.phase,
        });
    }
    Ok(())
}

/// Builds a fresh game: every catalog entry gets a new instance id, all three
/// lists are shuffled, the opening hand and store are dealt and the first
/// challenge is turned up.
pub fn start_game<R: RandomSource + ?Sized>(
    config: GameConfig,
    catalog: &Catalog,
    rng: &mut R,
    events: &mut EventBus,
) -> GameState {
    let mut ids = InstanceAllocator::default();
    let mut starter = ids.instantiate_all(&catalog.starter);
    let mut challenges = ids.instantiate_all(&catalog.challenges);
    let mut pool = ids.instantiate_all(&catalog.store);
    shuffle(&mut starter, rng);
    shuffle(&mut challenges, rng);
    shuffle(&mut pool, rng);

    let mut state = GameState::new(config);
    state.ids = ids;
    state.deck = Deck::new(starter);
    state.challenges = ChallengeTrack::new(challenges);
    state.store = Store::stock(pool, config.store_size);
    let draw = state.deck.draw_cards(config.hand_size, rng);
    state.hand = draw.cards;

    events.push(Event::GameStarted {
        deck: state.deck.draw.len(),
        challenges: state.challenges.deck.len(),
        store: state.store.offers.len(),
    });
    events.push(Event::TurnStarted {
        turn: state.turn,
        hand: state.hand.len(),
    });
    state
}

/// Owns the mutable side of a game: catalog, random source, current snapshot
/// and an event log. UIs hold one of these and render from [`Session::state`].
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    rng: RngState,
    state: GameState,
    events: EventBus,
}

impl Session {
    /// Creates a session holding the empty pre-game state. Dispatch
    /// [`Action::StartGame`] to deal.
    pub fn new(config: GameConfig, catalog: Catalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: RngState::from_seed(seed),
            state: GameState::new(config),
            events: EventBus::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn dispatch(&mut self, action: Action) -> Result<&GameState, Rejection> {
        let transition = step(&self.state, &action, &self.catalog, &mut self.rng);
        if let Some(rejection) = transition.rejection {
            return Err(rejection);
        }
        for event in transition.events {
            self.events.push(event);
        }
        self.state = transition.state;
        Ok(&self.state)
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain()
    }
}
