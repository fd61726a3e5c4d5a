use crate::{
    dictionary::WordList,
    player::{GameId, Player},
    stats::Statistics,
};
use color_eyre::eyre::{bail, Result};
use itertools::Itertools;
use std::{collections::BTreeSet, sync::Arc};
use thiserror::Error;
use tracing::{debug, instrument};

/// Why a word was refused. The game it was offered to is left untouched, so
/// the same player can simply try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("\"{word}\" does not start with the last letter of \"{previous}\".")]
    WrongStartingLetter { word: String, previous: String },
    #[error("\"{word}\" has already been used.")]
    WordAlreadyUsed { word: String },
    #[error("\"{word}\" is not in the dictionary.")]
    WordNotInDictionary { word: String },
}

/// A snapshot of one game. Every accepted word yields a new snapshot; an
/// existing one is never modified.
///
/// Invariants: `current_player` is one of `players`, `turn == words.len() + 1`
/// and `current_word` is `None` exactly when no word has been played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    id: GameId,
    players: Arc<[Player]>,
    current_player: Player,
    words: BTreeSet<String>,
    current_word: Option<String>,
    turn: usize,
}

impl GameState {
    /// Starts a game with the first player to move. The players must be
    /// distinct and there must be at least one.
    pub fn new(id: GameId, players: impl IntoIterator<Item = Player>) -> Result<Self> {
        let players: Arc<[Player]> = players.into_iter().collect();
        let Some(first) = players.first().cloned() else {
            bail!("game {id} needs at least one player")
        };
        if let Some(duplicate) = players.iter().duplicates().next() {
            bail!("player {duplicate} joined game {id} more than once")
        }
        Ok(Self {
            id,
            players,
            current_player: first,
            words: BTreeSet::new(),
            current_word: None,
            turn: 1,
        })
    }

    /// Plays `word` for the current player.
    ///
    /// Rules are checked in a fixed order and the first one that fails
    /// decides the error: the word must start with the last letter of the
    /// previous word (skipped for the first word), must not have been played
    /// before, and must be in `dictionary`.
    #[instrument(skip(self, dictionary), fields(game = %self.id, player = %self.current_player, turn = self.turn))]
    pub fn append_word(
        &self,
        word: &str,
        dictionary: &impl WordList,
    ) -> Result<GameState, ValidationError> {
        if let Err(err) = self.validate(word, dictionary) {
            debug!(%err, "word rejected");
            return Err(err);
        }

        let mut words = self.words.clone();
        words.insert(word.to_string());
        debug!("word accepted");
        Ok(Self {
            id: self.id,
            players: Arc::clone(&self.players),
            current_player: self.next_player().clone(),
            words,
            current_word: Some(word.to_string()),
            turn: self.turn + 1,
        })
    }

    fn validate(&self, word: &str, dictionary: &impl WordList) -> Result<(), ValidationError> {
        if let Some(previous) = &self.current_word {
            if previous.chars().last() != word.chars().next() {
                return Err(ValidationError::WrongStartingLetter {
                    word: word.to_string(),
                    previous: previous.clone(),
                });
            }
        }
        if self.words.contains(word) {
            return Err(ValidationError::WordAlreadyUsed {
                word: word.to_string(),
            });
        }
        if !dictionary.contains(word) {
            return Err(ValidationError::WordNotInDictionary {
                word: word.to_string(),
            });
        }
        Ok(())
    }

    fn next_player(&self) -> &Player {
        let index = self
            .players
            .iter()
            .position(|player| *player == self.current_player)
            .expect("current player must take part in the game");
        &self.players[(index + 1) % self.players.len()]
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.current_player
    }

    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    pub fn current_word(&self) -> Option<&str> {
        self.current_word.as_deref()
    }

    /// The number of the turn being played, starting at 1.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from(self)
    }
}
