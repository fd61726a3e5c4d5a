use crate::{
    dictionary::Dictionary,
    game::GameState,
    player::{GameId, Player},
};
use color_eyre::eyre::Result;
use itertools::{Either, Itertools};
use std::iter;
use tracing::debug;

/// One accepted word in a simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move<'d> {
    pub turn: usize,
    pub player: Player,
    pub word: &'d str,
}

/// Plays a game on its own: every player picks the word that leaves the next
/// player the fewest replies.
pub struct Simulation<'d> {
    dictionary: &'d Dictionary,
    game: GameState,
}

impl<'d> Simulation<'d> {
    pub fn new(
        id: GameId,
        players: impl IntoIterator<Item = Player>,
        dictionary: &'d Dictionary,
    ) -> Result<Self> {
        Ok(Self {
            dictionary,
            game: GameState::new(id, players)?,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.game
    }

    pub fn suggested_word(&self) -> Option<&'d str> {
        self.suggested_words(1).next()
    }

    /// Playable words ranked by how few replies they leave, ties in
    /// alphabetical order.
    pub fn suggested_words(&self, n: usize) -> impl Iterator<Item = &'d str> + '_ {
        self.candidates()
            .k_smallest_by_key(n, |&word| (self.replies(word), word))
    }

    /// The player to move, once nobody can continue the snake.
    pub fn stuck_player(&self) -> Option<&Player> {
        self.suggested_word()
            .is_none()
            .then(|| self.game.current_player())
    }

    pub fn run(&mut self) -> impl Iterator<Item = Move<'d>> + '_ {
        iter::from_fn(move || self.step())
    }

    fn step(&mut self) -> Option<Move<'d>> {
        let word = self.suggested_word()?;
        let player = self.game.current_player().clone();
        let turn = self.game.turn();
        match self.game.append_word(word, self.dictionary) {
            Ok(next) => {
                debug!(turn, %player, word, "played");
                self.game = next;
                Some(Move { turn, player, word })
            }
            // Candidates are drawn from the dictionary, chain on the current
            // word and skip used words, so every rule already holds.
            Err(err) => unreachable!("suggested word {word:?} was refused: {err}"),
        }
    }

    fn candidates(&self) -> impl Iterator<Item = &'d str> + '_ {
        let words = match self.game.current_word().and_then(|word| word.chars().last()) {
            Some(last) => Either::Left(self.dictionary.words_starting_with(last)),
            None => Either::Right(self.dictionary.iter()),
        };
        words.filter(move |&word| !self.game.words().contains(word))
    }

    fn replies(&self, word: &str) -> usize {
        let Some(last) = word.chars().last() else {
            return 0;
        };
        self.dictionary
            .words_starting_with(last)
            .filter(|&reply| reply != word && !self.game.words().contains(reply))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice_and_bob() -> [Player; 2] {
        [Player::from("alice"), Player::from("bob")]
    }

    #[test]
    fn test_suggested_words() -> Result<()> {
        let dictionary: Dictionary = ["aap", "poes", "schaap", "sok", "koe", "eend"]
            .into_iter()
            .collect();
        let simulation = Simulation::new(GameId(1), alice_and_bob(), &dictionary)?;

        assert_eq!(
            simulation.suggested_words(3).collect_vec(),
            ["eend", "aap", "koe"]
        );
        assert_eq!(simulation.stuck_player(), None);
        Ok(())
    }

    #[test]
    fn test_run() -> Result<()> {
        let dictionary: Dictionary = ["aap", "poes", "schaap"].into_iter().collect();
        let mut simulation = Simulation::new(GameId(1), alice_and_bob(), &dictionary)?;

        let moves = simulation.run().collect_vec();

        assert_eq!(
            moves
                .iter()
                .map(|m| (m.turn, m.player.name(), m.word))
                .collect_vec(),
            [(1, "alice", "aap"), (2, "bob", "poes"), (3, "alice", "schaap")]
        );
        assert_eq!(simulation.stuck_player(), Some(&Player::from("bob")));
        assert_eq!(simulation.state().statistics().number_of_words, 3);
        assert_eq!(simulation.state().statistics().snake_length, 13);
        Ok(())
    }

    #[test]
    fn test_dead_end_first() -> Result<()> {
        let dictionary: Dictionary = ["aap", "poes", "schaap", "sok", "koe", "eend"]
            .into_iter()
            .collect();
        let mut simulation = Simulation::new(GameId(1), alice_and_bob(), &dictionary)?;

        assert_eq!(simulation.run().count(), 1);
        assert_eq!(simulation.state().current_word(), Some("eend"));
        assert_eq!(simulation.stuck_player(), Some(&Player::from("bob")));
        Ok(())
    }

    #[test]
    fn test_embedded_game() -> Result<()> {
        let dictionary = Dictionary::embedded();
        let players = [Player::from("a"), Player::from("b"), Player::from("c")];
        let mut simulation = Simulation::new(GameId(9), players.clone(), &dictionary)?;

        let moves = simulation.run().collect_vec();

        assert!(!moves.is_empty());
        for (i, m) in moves.iter().enumerate() {
            assert_eq!(m.turn, i + 1);
            assert_eq!(m.player, players[i % players.len()]);
        }
        for (a, b) in moves.iter().tuple_windows() {
            assert_eq!(a.word.chars().last(), b.word.chars().next());
        }
        let state = simulation.state();
        assert_eq!(state.statistics().number_of_words, moves.len());
        assert_eq!(state.words().len(), moves.iter().map(|m| m.word).unique().count());
        assert!(simulation.stuck_player().is_some());
        Ok(())
    }

    #[test]
    fn test_run_ends_with_stuck_player() -> Result<()> {
        let dictionary = Dictionary::embedded();
        for n in 1..=4 {
            let players = (0..n).map(|i| Player::new(format!("bot{i}")));
            let mut simulation = Simulation::new(GameId(n), players, &dictionary)?;

            let played = simulation.run().count();

            assert_eq!(simulation.state().turn(), played + 1);
            assert_eq!(simulation.suggested_word(), None);
            assert_eq!(
                simulation.stuck_player(),
                Some(simulation.state().current_player())
            );
        }
        Ok(())
    }
}
