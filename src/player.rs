use std::fmt::{self, Display};

/// A participant, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Player(String);

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Player {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Player {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(pub u64);

impl Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Player::from("alice").to_string(), "alice");
        assert_eq!(GameId(7).to_string(), "#7");
    }

    #[test]
    fn test_equality_by_name() {
        assert_eq!(Player::from("bob"), Player::new(String::from("bob")));
        assert_ne!(Player::from("bob"), Player::from("Bob"));
    }
}
