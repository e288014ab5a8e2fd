use anyhow::Context;
use sprintdeck_core::{
    can_complete, Action, Card, CardKind, Event, GameConfig, GameState, Outcome, Phase, Rejection,
    Session,
};
use sprintdeck_data::{builtin_catalog, load_catalog, load_game_config};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Clone)]
struct CliOptions {
    auto: bool,
    json: bool,
    seed: u64,
    assets: Option<PathBuf>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut auto = false;
    let mut json = false;
    let mut seed = std::env::var("SPRINTDECK_SEED")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEED);
    let mut assets = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => auto = true,
            "--json" => json = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(parsed) = value.parse::<u64>() {
                        seed = parsed;
                    }
                    idx += 1;
                }
            }
            "--assets" => {
                if let Some(value) = args.get(idx + 1) {
                    assets = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            other => log::warn!("ignoring unknown argument {other}"),
        }
        idx += 1;
    }
    CliOptions {
        auto,
        json,
        seed,
        assets,
    }
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if let Err(err) = run(&options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let mut session = build_session(options)?;
    session
        .dispatch(Action::StartGame)
        .map_err(|err| anyhow::anyhow!("start game: {err}"))?;
    if options.auto {
        run_auto(&mut session);
        if options.json {
            show_state(session.state(), true)?;
        }
        return Ok(());
    }
    run_interactive(&mut session, options.json)
}

fn build_session(options: &CliOptions) -> anyhow::Result<Session> {
    let (config, catalog) = match &options.assets {
        Some(dir) => (load_game_config(dir)?, load_catalog(dir)?),
        None => (
            GameConfig {
                enforce_phases: true,
                ..GameConfig::default()
            },
            builtin_catalog()?,
        ),
    };
    log::info!(
        "catalog: {} starter, {} store, {} challenges; seed {}",
        catalog.starter.len(),
        catalog.store.len(),
        catalog.challenges.len(),
        options.seed
    );
    Ok(Session::new(config, catalog, options.seed))
}

/// Greedy scripted player: plays every card, completes whatever it can, buys
/// the priciest affordable card, repeats until the game ends.
fn run_auto(session: &mut Session) {
    while !session.state().game_over {
        while let Some(card) = session.state().hand.first().map(|card| card.instance) {
            if session.dispatch(Action::PlayCard { card }).is_err() {
                break;
            }
            complete_all(session);
        }
        complete_all(session);
        if let Err(err) = session.dispatch(Action::EndPlayPhase) {
            log::debug!("auto player could not end play phase: {err}");
        }
        complete_all(session);
        if let Some(card) = best_affordable(session.state()) {
            if let Err(err) = session.dispatch(Action::PurchaseCard { card }) {
                log::debug!("auto player could not buy {card}: {err}");
            }
        }
        if let Err(err) = session.dispatch(Action::EndBuyPhase) {
            log::warn!("auto player stalled: {err}");
            break;
        }
        for event in session.drain_events() {
            log::debug!("event: {event:?}");
        }
    }
    print_summary(session.state());
}

fn complete_all(session: &mut Session) {
    while session.state().can_complete_active() {
        if session.dispatch(Action::CompleteChallenge).is_err() {
            break;
        }
    }
}

fn best_affordable(state: &GameState) -> Option<sprintdeck_core::InstanceId> {
    state
        .store
        .offers
        .iter()
        .filter(|card| card.cost() <= state.current_tasks)
        .max_by_key(|card| card.cost())
        .map(|card| card.instance)
}

fn run_interactive(session: &mut Session, json: bool) -> anyhow::Result<()> {
    print_help();
    show_state(session.state(), json)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ").context("write prompt")?;
        stdout.flush().context("flush prompt")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read command")?;
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();
        let action = match cmd {
            "q" | "quit" | "exit" => break,
            "h" | "help" | "?" => {
                print_help();
                continue;
            }
            "s" | "state" => {
                show_state(session.state(), json)?;
                continue;
            }
            "hand" => {
                print_hand(session.state());
                continue;
            }
            "store" | "shop" => {
                print_store(session.state());
                continue;
            }
            "json" => {
                show_state(session.state(), true)?;
                continue;
            }
            "p" | "play" => match pick(&args, &session.state().hand) {
                Some(card) => Action::PlayCard { card },
                None => {
                    println!("usage: play <hand index>");
                    continue;
                }
            },
            "b" | "buy" => match pick(&args, &session.state().store.offers) {
                Some(card) => Action::PurchaseCard { card },
                None => {
                    println!("usage: buy <store index>");
                    continue;
                }
            },
            "c" | "complete" => Action::CompleteChallenge,
            "d" | "draw" => {
                let count = args
                    .first()
                    .and_then(|value| value.parse::<usize>().ok())
                    .unwrap_or(1);
                Action::DrawCards { count }
            }
            "e" | "end" => match session.state().phase {
                Phase::Play => Action::EndPlayPhase,
                Phase::Buy => Action::EndBuyPhase,
            },
            "restart" => Action::RestartGame,
            "action" => match serde_json::from_str::<Action>(&args.join(" ")) {
                Ok(action) => action,
                Err(err) => {
                    println!("bad action json: {err}");
                    continue;
                }
            },
            other => {
                println!("unknown command {other:?}, try help");
                continue;
            }
        };
        match session.dispatch(action) {
            Ok(_) => {
                for event in session.drain_events() {
                    print_event(&event);
                }
                if session.state().game_over {
                    print_summary(session.state());
                } else {
                    show_state(session.state(), json)?;
                }
            }
            Err(err) => print_rejection(&err),
        }
    }
    Ok(())
}

/// Prints the state as pretty JSON with `--json`, as text otherwise.
fn show_state(state: &GameState, json: bool) -> anyhow::Result<()> {
    if json {
        let encoded = serde_json::to_string_pretty(state).context("encode state")?;
        println!("{encoded}");
    } else {
        print_state(state);
    }
    Ok(())
}

fn pick(args: &[&str], cards: &[Card]) -> Option<sprintdeck_core::InstanceId> {
    let idx = args.first()?.parse::<usize>().ok()?;
    cards.get(idx).map(|card| card.instance)
}

fn print_help() {
    println!("flags: --seed N  --assets DIR  --auto  --json (print state as JSON)");
    println!("commands:");
    println!("  state | hand | store | json");
    println!("  play <idx>     play a card from hand");
    println!("  complete       complete the active challenge");
    println!("  end            end the current phase");
    println!("  buy <idx>      buy a store card (buy phase)");
    println!("  draw [n]       draw n cards");
    println!("  action <json>  dispatch a raw action, e.g. {{\"kind\":\"EndPlayPhase\"}}");
    println!("  restart | quit");
}

fn print_state(state: &GameState) {
    println!("== Turn {}/{} ({:?}) ==", state.turn, state.max_turns(), state.phase);
    println!(
        "Tasks {} | Specs {} | Score {}",
        state.current_tasks, state.current_specs, state.score
    );
    println!(
        "Draw pile {} | Discard {} | Played {}",
        state.deck.draw.len(),
        state.deck.discard.len(),
        state.played.len()
    );
    match state.active_challenge() {
        Some(card) => {
            let ready = can_complete(Some(card), state.current_tasks, state.current_specs);
            println!(
                "Challenge: {}{}",
                format_card(card),
                if ready { "  [ready]" } else { "" }
            );
        }
        None => println!("Challenge: none"),
    }
    print_hand(state);
}

fn print_hand(state: &GameState) {
    println!("== Hand ({} cards) ==", state.hand.len());
    for (idx, card) in state.hand.iter().enumerate() {
        println!("{:>4}  {}", idx, format_card(card));
    }
}

fn print_store(state: &GameState) {
    println!(
        "== Store ({} offers, {} in pool) ==",
        state.store.offers.len(),
        state.store.pool.len()
    );
    for (idx, card) in state.store.offers.iter().enumerate() {
        println!("{:>4}  {}", idx, format_card(card));
    }
}

fn format_card(card: &Card) -> String {
    match &card.kind {
        CardKind::Action(stats) => format!(
            "{:<18} cost {:>2} | +{} tasks +{} specs +{} draw",
            card.name, stats.cost, stats.task_points, stats.specs, stats.card_draw
        ),
        CardKind::Challenge(stats) => format!(
            "{} ({:?}) needs {} tasks {} specs, worth {}",
            card.name, stats.kind, stats.required_tasks, stats.required_specs, stats.point_value
        ),
    }
}

fn print_event(event: &Event) {
    match event {
        Event::DeckReshuffled { cards } => println!("reshuffled {cards} cards into the deck"),
        Event::ChallengeCompleted { points, score, .. } => {
            println!("challenge completed: +{points} (score {score})")
        }
        Event::ChallengesRecycled { cards } => println!("recycled {cards} challenges"),
        Event::CardPurchased {
            cost, tasks_left, ..
        } => println!("bought a card for {cost} tasks ({tasks_left} left)"),
        other => log::debug!("event: {other:?}"),
    }
}

fn print_rejection(err: &Rejection) {
    println!("not allowed: {err}");
}

fn print_summary(state: &GameState) {
    let verdict = match state.outcome() {
        Some(Outcome::Victory) => "victory",
        Some(Outcome::Defeat) => "defeat",
        None => "in progress",
    };
    println!(
        "== Game over: {} == score {} (need {}) after {} turns",
        verdict,
        state.score,
        state.config.win_score,
        state.max_turns()
    );
}
