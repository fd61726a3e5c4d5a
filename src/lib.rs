//! Word snake: players take turns naming words, each starting with the last
//! letter of the previous one. Words come from a fixed dictionary and may be
//! used only once per game.

pub mod dictionary;
pub mod game;
pub mod player;
pub mod simulation;
pub mod stats;

pub use dictionary::{Dictionary, WordList};
pub use game::{GameState, ValidationError};
pub use player::{GameId, Player};
pub use simulation::{Move, Simulation};
pub use stats::Statistics;
