//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index of a player, fixed once the player joins.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access. Seats are pushed
//! while the game is being assembled and never removed afterwards.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use taki_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use taki_engine::core::{PlayerId, PlayerMap};
///
/// let mut names: PlayerMap<&str> = PlayerMap::empty();
/// let alice = names.push("alice");
/// let bob = names.push("bob");
///
/// assert_eq!(names[alice], "alice");
/// assert_eq!(names[bob], "bob");
/// assert_eq!(bob, PlayerId::new(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> PlayerMap<T> {
    /// Maximum number of seats.
    pub const MAX_PLAYERS: usize = 255;

    /// Create a map with no seats.
    #[must_use]
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Add a seat and return its identifier.
    ///
    /// Panics past `MAX_PLAYERS` seats.
    pub fn push(&mut self, value: T) -> PlayerId {
        assert!(self.data.len() < Self::MAX_PLAYERS, "At most 255 players supported");
        let id = PlayerId(self.data.len() as u8);
        self.data.push(value);
        id
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether a player ID refers to a seat in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
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
    fn test_push_assigns_seat_order() {
        let mut map: PlayerMap<i32> = PlayerMap::empty();
        assert_eq!(map.push(10), PlayerId::new(0));
        assert_eq!(map.push(20), PlayerId::new(1));
        assert_eq!(map.push(30), PlayerId::new(2));

        assert_eq!(map.player_count(), 3);
        assert_eq!(map[PlayerId::new(2)], 30);
        assert!(map.contains(PlayerId::new(2)));
        assert!(!map.contains(PlayerId::new(3)));
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::default();
        let a = map.push(0);
        let b = map.push(0);

        map[a] = 10;
        map[b] += 5;

        assert_eq!(map[a], 10);
        assert_eq!(map[b], 5);
    }

    #[test]
    fn test_player_map_iter() {
        let mut map: PlayerMap<char> = PlayerMap::empty();
        for c in ['a', 'b', 'c'] {
            map.push(c);
        }

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &'a'));
        assert_eq!(pairs[2], (PlayerId::new(2), &'c'));
        assert_eq!(map.player_ids().count(), 3);
    }

    #[test]
    fn test_player_map_serialization() {
        let mut map: PlayerMap<u32> = PlayerMap::empty();
        map.push(1);
        map.push(2);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
