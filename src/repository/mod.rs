//! Game values, round-log operations and persistence.

pub mod game;
pub mod store;

pub use game::Game;
pub use store::Repository;
