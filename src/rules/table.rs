//! Shared game state: deck, discard pile, seats and turn bookkeeping.
//!
//! Agents get read-only access to the `Table` when they decide; only the
//! engine and the effect handlers mutate it.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{GameConfig, PlayerId, PlayerMap, PlayerState};
use crate::zones::{Deck, DiscardPile, Hand};

/// Everything on the table except the agents themselves.
#[derive(Clone, Debug)]
pub struct Table {
    pub(crate) config: GameConfig,
    pub(crate) deck: Deck,
    pub(crate) discard: DiscardPile,
    pub(crate) players: PlayerMap<PlayerState>,
    /// Seat whose turn it is (or is next, between steps).
    pub(crate) on_turn: PlayerId,
    pub(crate) players_remaining: usize,
    /// Extra forced turns queued for the player on turn.
    pub(crate) pending_attacks: usize,
    /// Most recent card played or consumed, and by whom.
    pub(crate) last_played: Option<(PlayerId, Card)>,
}

impl Table {
    /// An empty table for `player_count` live players with empty hands.
    #[must_use]
    pub fn new(player_count: usize, config: GameConfig) -> Self {
        let players = PlayerMap::new(player_count, |_| PlayerState::new(Hand::new()));
        Self::from_parts(config, Deck::new(), players)
    }

    /// A mid-game table from prepared parts.
    ///
    /// Turn order starts at the first live seat. Useful for scripted
    /// scenarios; dead seats keep whatever hand they are given.
    #[must_use]
    pub fn from_parts(config: GameConfig, deck: Deck, players: PlayerMap<PlayerState>) -> Self {
        let players_remaining = players.values().filter(|p| p.alive).count();
        let on_turn = players
            .iter()
            .find(|(_, p)| p.alive)
            .map_or(PlayerId::new(0), |(id, _)| id);

        Self {
            config,
            deck,
            discard: DiscardPile::new(),
            players,
            on_turn,
            players_remaining,
            pending_attacks: 0,
            last_played: None,
        }
    }

    /// A mid-game table where every seat is alive with the given hand.
    #[must_use]
    pub fn with_hands(config: GameConfig, deck: Deck, hands: Vec<Hand>) -> Self {
        let players = PlayerMap::from_vec(hands.into_iter().map(PlayerState::new).collect());
        Self::from_parts(config, deck, players)
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn discard(&self) -> &DiscardPile {
        &self.discard
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerState> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn on_turn(&self) -> PlayerId {
        self.on_turn
    }

    #[must_use]
    pub fn players_remaining(&self) -> usize {
        self.players_remaining
    }

    #[must_use]
    pub fn pending_attacks(&self) -> usize {
        self.pending_attacks
    }

    #[must_use]
    pub fn last_played(&self) -> Option<(PlayerId, Card)> {
        self.last_played
    }

    /// Terminal check: at most one survivor, or nothing left to draw.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players_remaining <= 1 || self.deck.is_empty()
    }

    /// Cards in deck, hands and discard pile combined.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.deck.len()
            + self.players.values().map(|p| p.hand.len()).sum::<usize>()
            + self.discard.len()
    }

    pub fn alive_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().filter(|(_, p)| p.alive).map(|(id, _)| id)
    }

    /// Every other seat, dead or alive, in seat order.
    pub fn opponents(&self, me: PlayerId) -> impl Iterator<Item = (PlayerId, &PlayerState)> + '_ {
        self.players.iter().filter(move |(id, _)| *id != me)
    }

    /// Opponents that may be picked by a Favor or a cat steal.
    #[must_use]
    pub fn eligible_targets(&self, me: PlayerId) -> SmallVec<[PlayerId; 4]> {
        self.opponents(me)
            .filter(|(_, p)| p.is_targetable())
            .map(|(id, _)| id)
            .collect()
    }

    #[must_use]
    pub fn has_eligible_target(&self, me: PlayerId) -> bool {
        self.opponents(me).any(|(_, p)| p.is_targetable())
    }

    /// True when some live opponent holds no cards.
    #[must_use]
    pub fn any_opponent_empty_handed(&self, me: PlayerId) -> bool {
        self.opponents(me).any(|(_, p)| p.alive && p.hand.is_empty())
    }

    /// Distinct cards `me` may legally play right now, in `Card` order.
    ///
    /// Defuse is never playable; cats need a pair; Favor and cats need an
    /// eligible opponent.
    #[must_use]
    pub fn legal_plays(&self, me: PlayerId) -> SmallVec<[Card; 8]> {
        let hand = &self.players[me].hand;
        let can_target = self.has_eligible_target(me);

        hand.distinct()
            .into_iter()
            .filter(|&card| card.is_playable())
            .filter(|&card| hand.count(card) >= card.copies_per_play())
            .filter(|&card| can_target || !(card.is_cat() || card == Card::Favor))
            .collect()
    }

    /// The next live seat after `player` in turn order.
    #[must_use]
    pub fn next_alive(&self, player: PlayerId) -> Option<PlayerId> {
        let count = self.player_count();
        (1..=count)
            .map(|offset| PlayerId::new(((player.index() + offset) % count) as u8))
            .find(|&id| self.players[id].alive)
    }

    // === Engine-side mutation ===

    /// Forget every revealed future (positions are no longer valid).
    pub(crate) fn clear_futures(&mut self) {
        for state in self.players.values_mut() {
            state.future_seen.clear();
        }
    }

    /// The top card left the deck: every memo loses its front entry.
    pub(crate) fn consume_futures(&mut self) {
        for state in self.players.values_mut() {
            state.consume_future();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_seats() -> Table {
        Table::with_hands(
            GameConfig::default(),
            Deck::from_cards([Card::Skip, Card::ExplodingKitten]),
            vec![
                Hand::from_cards([Card::Favor, Card::Tacocat, Card::Tacocat, Card::Cattermelon, Card::Defuse]),
                Hand::from_cards([Card::Attack]),
                Hand::new(),
            ],
        )
    }

    #[test]
    fn test_from_parts_counts_survivors() {
        let table = three_seats();
        assert_eq!(table.players_remaining(), 3);
        assert_eq!(table.on_turn(), PlayerId::new(0));
        assert_eq!(table.card_total(), 2 + 5 + 1);
        assert!(!table.is_over());
    }

    #[test]
    fn test_eligible_targets_skip_empty_and_dead() {
        let mut table = three_seats();
        let me = PlayerId::new(0);

        assert_eq!(table.eligible_targets(me).as_slice(), &[PlayerId::new(1)]);
        assert!(table.any_opponent_empty_handed(me));

        table.players[PlayerId::new(1)].alive = false;
        assert!(table.eligible_targets(me).is_empty());
        assert!(!table.has_eligible_target(me));
    }

    #[test]
    fn test_legal_plays() {
        let mut table = three_seats();
        let me = PlayerId::new(0);

        // Single Cattermelon is not a pair, Defuse is never playable.
        assert_eq!(table.legal_plays(me).as_slice(), &[Card::Favor, Card::Tacocat]);

        // No one to take from: Favor and cats drop out.
        table.players[PlayerId::new(1)].hand = Hand::new();
        assert!(table.legal_plays(me).is_empty());
    }

    #[test]
    fn test_next_alive_wraps_and_skips_dead() {
        let mut table = three_seats();
        assert_eq!(table.next_alive(PlayerId::new(0)), Some(PlayerId::new(1)));
        assert_eq!(table.next_alive(PlayerId::new(2)), Some(PlayerId::new(0)));

        table.players[PlayerId::new(1)].alive = false;
        assert_eq!(table.next_alive(PlayerId::new(0)), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_future_bookkeeping() {
        let mut table = three_seats();
        let me = PlayerId::new(0);
        table.players[me].future_seen.extend([Card::Skip, Card::ExplodingKitten]);

        table.consume_futures();
        assert_eq!(table.player(me).next_known_card(), Some(Card::ExplodingKitten));

        table.clear_futures();
        assert!(table.player(me).future_seen.is_empty());
    }
}
