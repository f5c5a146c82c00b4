//! Core engine types: players, RNG, configuration, errors and the state machine value.
//!
//! These are the leaves every other module builds on; none of them know
//! about cards beyond their identifiers.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use error::{Result, TakiError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{Direction, GameState, BASE_STAKE, STAKE_STEP};
