//! # taki-engine
//!
//! Rule engine for TAKI, a shedding card game in the Uno family: players
//! discard cards matching the active color or sign, and special cards skip
//! turns, flip the order, force draws or change the active constraint.
//!
//! ## Design Principles
//!
//! 1. **Closed card set**: every card is a `CardKind` variant. Legality and
//!    effects are single dispatch points over that enum.
//!
//! 2. **Decisions cross one boundary**: the engine never reads input or
//!    renders output. Card choices, colors, confirmations and announcements
//!    go through the [`Decider`] trait.
//!
//! 3. **Deterministic**: all shuffles and seating come from a seeded
//!    ChaCha stream. The same seed and the same answers replay a match.
//!
//! ## Modules
//!
//! - `core`: player ids, game state machine value, RNG, configuration, errors
//! - `cards`: card model, colors and signs, legality, hand ordering
//! - `zones`: deck, pile (with its active-card cursor) and hand
//! - `effects`: what each card does when played
//! - `decision`: the decision interface and a scripted implementation
//! - `game`: the turn orchestrator, player views and outcomes
//!
//! ## Example
//!
//! ```
//! use taki_engine::{GameBuilder, Scripted};
//!
//! let mut game = GameBuilder::new()
//!     .seed(3)
//!     .player("ann")
//!     .player("bo")
//!     .start(Scripted::new())
//!     .unwrap();
//!
//! // One turn: the current player plays or draws.
//! assert!(game.advance_turn().unwrap());
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod decision;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameRng, GameState, PlayerId, PlayerMap, Result, TakiError,
    BASE_STAKE, STAKE_STEP,
};

pub use crate::cards::{Card, CardId, CardKind, Color, Constraint, Sign, Target};

pub use crate::zones::{Deck, Hand, Pile};

pub use crate::decision::{
    Answer, Audience, Decider, Named, Notice, Prompt, Request, RequestKind, Scripted, Selection,
};

pub use crate::game::{Game, GameBuilder, GameResult, GameView, PlayersInOrder, MIN_PLAYERS};
