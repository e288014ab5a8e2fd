//! Rules engine for the sprint deck-builder. Pure game state and transitions;
//! no IO, no rendering.

pub mod action;
pub mod cards;
pub mod catalog;
pub mod challenge;
pub mod config;
pub mod deck;
pub mod effects;
pub mod engine;
pub mod events;
pub mod rng;
pub mod state;
pub mod store;
pub mod turn;

pub use action::*;
pub use cards::*;
pub use catalog::*;
pub use challenge::*;
pub use config::*;
pub use deck::*;
pub use effects::*;
pub use engine::*;
pub use events::*;
pub use rng::*;
pub use state::*;
pub use store::*;
