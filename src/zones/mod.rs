//! Card containers.
//!
//! Every card lives in exactly one of these at a time.
//!
//! ## Key Types
//!
//! - `Deck`: Face-down draw stack (LIFO), refilled by recycling
//! - `Pile`: Face-up, append-only, with an active-card cursor
//! - `Hand`: One player's cards, keyed by identity

pub mod deck;
pub mod hand;
pub mod pile;

pub use deck::Deck;
pub use hand::Hand;
pub use pile::Pile;
