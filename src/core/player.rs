//! Player identification and the two-player roster.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. A session has exactly two players, so the
//! only valid indices are 0 and 1.
//!
//! ## Roster
//!
//! The roster is stored as a `SmallVec<[Player; 2]>` on `GameState`: empty
//! before setup, exactly two entries after `set_players`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A named participant in the session.
///
/// Fixed at setup, immutable thereafter except by full reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a new player.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The ordered two-player roster type used by `GameState`.
pub type Roster = SmallVec<[Player; 2]>;

/// Build a roster from two display names.
#[must_use]
pub fn roster(name1: impl Into<String>, name2: impl Into<String>) -> Roster {
    let mut players = Roster::new();
    players.push(Player::new(PlayerId::new(0), name1));
    players.push(Player::new(PlayerId::new(1), name2));
    players
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_roster_order() {
        let players = roster("Ana", "Bruno");

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].id, PlayerId::new(0));
        assert_eq!(players[0].name, "Ana");
        assert_eq!(players[1].id, PlayerId::new(1));
        assert_eq!(players[1].name, "Bruno");
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(1), "Ana");
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
