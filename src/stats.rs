use crate::game::GameState;
use std::fmt::{self, Display};

/// Aggregates over the words played so far, derived fresh from a snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub number_of_words: usize,
    /// Total letters over all words, counted per `char`.
    pub snake_length: usize,
}

impl From<&GameState> for Statistics {
    fn from(game: &GameState) -> Self {
        Self {
            number_of_words: game.turn() - 1,
            snake_length: game.words().iter().map(|word| word.chars().count()).sum(),
        }
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words, snake length {}",
            self.number_of_words, self.snake_length
        )
    }
}
