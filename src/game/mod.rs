//! The match: table, orchestrator, player views and outcome.

mod builder;
mod engine;
mod result;
mod table;
mod view;

pub use builder::GameBuilder;
pub use engine::{Game, MIN_PLAYERS};
pub use result::GameResult;
pub use table::{PlayersInOrder, Seat, Table};
pub use view::GameView;
