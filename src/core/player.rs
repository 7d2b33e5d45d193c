//! Seats at the table.
//!
//! ## PlayerId
//!
//! Seat index, 0-based in turn order.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `Vec`, indexed by `PlayerId`.
//!
//! ## PlayerState
//!
//! The engine-owned half of a player: liveness, skip flag, hand, the
//! See The Future memo and the recorded trajectory. The decision-making
//! half is the `Agent` sitting in the same seat.

use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::training::trajectory::Step;
use crate::zones::Hand;

/// Seat identifier. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a `player_count`-player game.
    ///
    /// ```
    /// use rust_kittens::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
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

/// Per-seat data with O(1) access by `PlayerId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one value per seat from a factory.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();
        Self { data }
    }

    /// Create a map from existing per-seat values, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
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

/// Engine-owned state of one seat.
#[derive(Clone, Debug, Default)]
pub struct PlayerState {
    /// False once the player drew a kitten without a Defuse.
    pub alive: bool,

    /// Set by Skip and Attack; the next draw is skipped, then it clears.
    pub skipping: bool,

    pub hand: Hand,

    /// Upcoming deck cards revealed by See The Future, top first.
    /// Each draw from the deck consumes the front entry.
    pub future_seen: VecDeque<Card>,

    /// (signature, action) pairs recorded this game, in play order.
    pub trajectory: Vec<Step>,
}

impl PlayerState {
    /// A live player with the given starting hand.
    #[must_use]
    pub fn new(hand: Hand) -> Self {
        Self {
            alive: true,
            hand,
            ..Self::default()
        }
    }

    /// Can this player be picked by a Favor or cat steal?
    #[must_use]
    pub fn is_targetable(&self) -> bool {
        self.alive && !self.hand.is_empty()
    }

    /// Drop the front entry of the memo after a card left the top of the deck.
    pub fn consume_future(&mut self) {
        self.future_seen.pop_front();
    }

    /// The next deck card this player knows about, if any.
    #[must_use]
    pub fn next_known_card(&self) -> Option<Card> {
        self.future_seen.front().copied()
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
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(3, |p| p.index() * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map = PlayerMap::from_vec(vec![0, 0]);

        map[PlayerId::new(1)] = 20;
        for (_, v) in map.iter_mut() {
            *v += 1;
        }

        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![1, 21]);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::from_vec(Vec::new());
    }

    #[test]
    fn test_player_state_targetable() {
        let mut state = PlayerState::new(Hand::from_cards([Card::Skip]));
        assert!(state.is_targetable());

        state.hand.remove(Card::Skip).unwrap();
        assert!(!state.is_targetable());

        state.hand.add(Card::Skip);
        state.alive = false;
        assert!(!state.is_targetable());
    }

    #[test]
    fn test_future_memo() {
        let mut state = PlayerState::new(Hand::new());
        state.future_seen.extend([Card::Skip, Card::ExplodingKitten]);

        assert_eq!(state.next_known_card(), Some(Card::Skip));
        state.consume_future();
        assert_eq!(state.next_known_card(), Some(Card::ExplodingKitten));
        state.consume_future();
        state.consume_future();
        assert_eq!(state.next_known_card(), None);
    }
}
