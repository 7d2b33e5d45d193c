//! The game state machine.
//!
//! A `Game` owns the agents, the `Table` and the game's RNG. It deals the
//! cards, schedules turns (attack stacking included), runs each agent's
//! card-play phase through a `Turn`, and resolves the draw that ends it.
//!
//! ## Lifecycle
//!
//! `NotStarted` → `setup` → `Running` → (`step` until terminal) → `Finished`.
//!
//! [`Game::start_game`] runs the whole thing; [`Game::step`] and
//! [`Game::resume`] let callers drive a prepared position one turn at a time.

use log::{debug, trace};

use crate::agents::Agent;
use crate::cards::Card;
use crate::core::{GameConfig, GameRng, PlayerId};
use crate::error::{Error, Result};
use crate::training::trajectory::Trajectory;
use crate::zones::{Deck, Hand};

use super::table::Table;
use super::turn::{Others, Turn};

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Finished,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Sole surviving player.
    Winner(PlayerId),
    /// The deck ran out with several players still alive.
    NoWinner,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// One game of Exploding Kittens.
pub struct Game {
    agents: Vec<Box<dyn Agent>>,
    table: Table,
    rng: GameRng,
    status: GameStatus,
}

impl Game {
    /// A game with default rules and an entropy-seeded RNG.
    pub fn new(agents: Vec<Box<dyn Agent>>) -> Result<Self> {
        Self::with_config(agents, GameConfig::default(), GameRng::from_entropy())
    }

    /// A reproducible game with default rules.
    pub fn with_seed(agents: Vec<Box<dyn Agent>>, seed: u64) -> Result<Self> {
        Self::with_config(agents, GameConfig::default(), GameRng::new(seed))
    }

    /// A game with explicit rules and RNG.
    ///
    /// Fails with `InvalidPlayerCount` unless there are at least two
    /// agents, at most 255, and the composition can deal every hand.
    pub fn with_config(agents: Vec<Box<dyn Agent>>, config: GameConfig, rng: GameRng) -> Result<Self> {
        let count = agents.len();
        if count < 2 || count > usize::from(u8::MAX) || !config.can_deal(count) {
            return Err(Error::InvalidPlayerCount { count });
        }
        let table = Table::new(agents.len(), config);
        Ok(Self {
            agents,
            table,
            rng,
            status: GameStatus::NotStarted,
        })
    }

    /// Continue from a prepared table. Agents sit in seat order.
    pub fn resume(agents: Vec<Box<dyn Agent>>, table: Table, rng: GameRng) -> Result<Self> {
        if agents.len() < 2 || agents.len() != table.player_count() {
            return Err(Error::InvalidPlayerCount { count: agents.len() });
        }
        Ok(Self {
            agents,
            table,
            rng,
            status: GameStatus::Running,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// The agent in seat `player`.
    #[must_use]
    pub fn agent(&self, player: PlayerId) -> Option<&dyn Agent> {
        self.agents.get(player.index()).map(|agent| agent.as_ref())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.agents.len()
    }

    /// The result, once the game is finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        (self.status == GameStatus::Finished).then(|| self.outcome())
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.result()? {
            GameResult::Winner(player) => Some(player),
            GameResult::NoWinner => None,
        }
    }

    /// Name of the sole survivor, or `None` (no winner, or not finished).
    #[must_use]
    pub fn decide_winner(&self) -> Option<&str> {
        let player = self.winner()?;
        self.agents.get(player.index()).map(|agent| agent.name())
    }

    // === Driving the game ===

    /// Deal a fresh game.
    ///
    /// Each player gets a Defuse plus `hand_size - 1` cards dealt
    /// round-robin from the shuffled deck; then `players - 1` kittens are
    /// shuffled in.
    pub fn setup(&mut self) -> Result<()> {
        let player_count = self.agents.len();
        let config = self.table.config.clone();

        let mut deck = Deck::from_composition(&config.composition);
        deck.shuffle(&mut self.rng);

        let mut hands: Vec<Hand> = (0..player_count).map(|_| Hand::from_cards([Card::Defuse])).collect();
        for _ in 1..config.hand_size {
            for hand in &mut hands {
                hand.add(deck.draw()?);
            }
        }

        for _ in 0..config.kitten_count(player_count) {
            deck.push_bottom(Card::ExplodingKitten);
        }
        deck.shuffle(&mut self.rng);

        self.table = Table::with_hands(config, deck, hands);
        self.status = GameStatus::Running;
        debug!(
            "dealt {} players, {} cards left in the deck (seed {})",
            player_count,
            self.table.deck.len(),
            self.rng.seed()
        );
        Ok(())
    }

    /// Play the game to the end.
    pub fn start_game(&mut self) -> Result<GameResult> {
        while self.step()?.is_some() {}
        Ok(self.outcome())
    }

    /// Play one scheduled turn.
    ///
    /// Deals first if needed. Returns the player who took the turn, or
    /// `None` once the game is over.
    pub fn step(&mut self) -> Result<Option<PlayerId>> {
        match self.status {
            GameStatus::NotStarted => self.setup()?,
            GameStatus::Finished => return Ok(None),
            GameStatus::Running => {}
        }

        if self.table.is_over() {
            self.finish();
            return Ok(None);
        }

        let player = self.table.on_turn;
        let pending_before = self.table.pending_attacks;
        self.take_turn(player)?;
        self.schedule_next(player, pending_before);
        Ok(Some(player))
    }

    /// Run `player`'s turn: card-play phase, then the draw (unless skipped).
    ///
    /// Does not advance turn order.
    pub fn take_turn(&mut self, player: PlayerId) -> Result<()> {
        let idx = player.index();
        if idx >= self.agents.len() || !self.table.players[player].alive {
            return Err(Error::InactivePlayer { player });
        }

        let (before, rest) = self.agents.split_at_mut(idx);
        let (agent, after) = rest
            .split_first_mut()
            .ok_or(Error::InactivePlayer { player })?;

        {
            let mut turn = Turn::new(&mut self.table, &mut self.rng, Others::new(before, after), player);
            agent.take_turn(&mut turn)?;
            turn.finish(&**agent);
        }

        let state = &mut self.table.players[player];
        if state.skipping {
            state.skipping = false;
            trace!("{} skips the draw", player);
            Ok(())
        } else {
            self.draw(player)
        }
    }

    /// Take trajectories out of every seat, labelled with the outcome.
    pub fn take_trajectories(&mut self) -> Vec<Trajectory> {
        let winner = self.decide_winner().map(str::to_owned);

        self.table
            .players
            .values_mut()
            .zip(&self.agents)
            .map(|(state, agent)| {
                let won = winner.as_deref() == Some(agent.name());
                Trajectory::new(agent.name().to_owned(), std::mem::take(&mut state.trajectory), won)
            })
            .collect()
    }

    // === Internals ===

    fn draw(&mut self, player: PlayerId) -> Result<()> {
        let card = self.table.deck.draw()?;

        if card != Card::ExplodingKitten {
            self.table.consume_futures();
            self.table.players[player].hand.add(card);
            trace!("{} draws {}", player, card);
            return Ok(());
        }

        if self.table.players[player].hand.contains(Card::Defuse) {
            let defuse = self.table.players[player].hand.remove(Card::Defuse)?;
            self.table.discard.push(defuse);
            self.table.last_played = Some((player, Card::Defuse));
            self.table.clear_futures();

            let len = self.table.deck.len();
            let spot = self.agents[player.index()]
                .choose_spot_in_deck(len, &mut self.rng)
                .min(len);
            let spot = self.table.deck.insert(spot, card);
            trace!("{} defuses and replants the kitten at {}", player, spot);
        } else {
            let state = &mut self.table.players[player];
            state.alive = false;
            state.skipping = false;
            self.table.players_remaining -= 1;
            self.table.discard.push(card);
            self.table.pending_attacks = 0;
            // The kitten left the top of the deck like any other draw.
            self.table.consume_futures();
            trace!("{} explodes", player);
        }
        Ok(())
    }

    /// Pick who plays next.
    ///
    /// An Attack played this turn (`pending` grew) passes the whole
    /// counter to the next live player; otherwise a non-zero counter keeps
    /// the same player on turn and is decremented.
    fn schedule_next(&mut self, player: PlayerId, pending_before: usize) {
        let table = &mut self.table;

        let advance = if !table.players[player].alive {
            table.pending_attacks = 0;
            true
        } else if table.pending_attacks > pending_before {
            true
        } else if table.pending_attacks > 0 {
            table.pending_attacks -= 1;
            false
        } else {
            true
        };

        if advance {
            if let Some(next) = table.next_alive(player) {
                table.on_turn = next;
            }
        }
    }

    fn finish(&mut self) {
        self.status = GameStatus::Finished;
        match self.decide_winner() {
            Some(name) => debug!("game over: {} wins", name),
            None => debug!("game over: deck exhausted, no winner"),
        }
    }

    fn outcome(&self) -> GameResult {
        let mut alive = self.table.alive_players();
        match (alive.next(), alive.next()) {
            (Some(player), None) => GameResult::Winner(player),
            _ => GameResult::NoWinner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{HeuristicAgent, RandomAgent};

    fn two_random() -> Vec<Box<dyn Agent>> {
        vec![
            Box::new(RandomAgent::new("Player1")),
            Box::new(RandomAgent::new("Player2")),
        ]
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(!GameResult::NoWinner.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_needs_two_agents() {
        let agents: Vec<Box<dyn Agent>> = vec![Box::new(RandomAgent::new("solo"))];
        assert!(matches!(
            Game::with_seed(agents, 1),
            Err(Error::InvalidPlayerCount { count: 1 })
        ));
    }

    #[test]
    fn test_deck_must_cover_the_deal() {
        let agents = |n: usize| -> Vec<Box<dyn Agent>> {
            (0..n)
                .map(|i| Box::new(RandomAgent::new(format!("p{i}"))) as Box<dyn Agent>)
                .collect()
        };

        // 24 cards deal six each to at most four players.
        assert!(Game::with_seed(agents(4), 1).is_ok());
        assert!(matches!(
            Game::with_seed(agents(5), 1),
            Err(Error::InvalidPlayerCount { count: 5 })
        ));

        let small_hands = GameConfig::default().with_hand_size(3);
        assert!(Game::with_config(agents(8), small_hands, GameRng::new(1)).is_ok());
    }

    #[test]
    fn test_setup_deals() {
        let mut game = Game::with_seed(two_random(), 3).unwrap();
        game.setup().unwrap();

        let table = game.table();
        assert_eq!(game.status(), GameStatus::Running);
        for (_, state) in table.players().iter() {
            assert_eq!(state.hand.len(), 7);
            assert_eq!(state.hand.count(Card::Defuse), 1);
            assert!(!state.hand.contains(Card::ExplodingKitten));
        }
        // 24 - 2 * 6 dealt + 1 kitten
        assert_eq!(table.deck().len(), 13);
        assert_eq!(table.deck().count(Card::ExplodingKitten), 1);
        assert_eq!(table.card_total(), GameConfig::default().total_cards(2));
    }

    #[test]
    fn test_step_before_setup_deals() {
        let mut game = Game::with_seed(two_random(), 5).unwrap();
        assert_eq!(game.step().unwrap(), Some(PlayerId::new(0)));
        assert_eq!(game.status(), GameStatus::Running);
    }

    #[test]
    fn test_defuse_replants_on_top_for_heuristic() {
        let table = Table::with_hands(
            GameConfig::default(),
            Deck::from_cards([Card::ExplodingKitten, Card::Skip, Card::Favor]),
            vec![Hand::from_cards([Card::Defuse]), Hand::from_cards([Card::Skip])],
        );
        let agents: Vec<Box<dyn Agent>> = vec![
            Box::new(HeuristicAgent::new("a")),
            Box::new(HeuristicAgent::new("b")),
        ];
        let mut game = Game::resume(agents, table, GameRng::new(0)).unwrap();

        game.take_turn(PlayerId::new(0)).unwrap();

        let table = game.table();
        assert!(table.player(PlayerId::new(0)).alive);
        assert!(table.player(PlayerId::new(0)).hand.is_empty());
        assert_eq!(table.deck().position(Card::ExplodingKitten), Some(0));
        assert_eq!(table.last_played(), Some((PlayerId::new(0), Card::Defuse)));
        assert_eq!(table.discard().count(Card::Defuse), 1);
    }

    #[test]
    fn test_explosion_ends_two_player_game() {
        let table = Table::with_hands(
            GameConfig::default(),
            Deck::from_cards([Card::ExplodingKitten, Card::Skip]),
            vec![Hand::new(), Hand::from_cards([Card::Skip])],
        );
        let mut game = Game::resume(two_random(), table, GameRng::new(0)).unwrap();

        assert_eq!(game.step().unwrap(), Some(PlayerId::new(0)));
        assert_eq!(game.step().unwrap(), None);

        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::new(1))));
        assert_eq!(game.decide_winner(), Some("Player2"));
        assert_eq!(game.table().players_remaining(), 1);
    }

    #[test]
    fn test_dead_player_cannot_take_turn() {
        let mut table = Table::with_hands(
            GameConfig::default(),
            Deck::from_cards([Card::Skip]),
            vec![Hand::new(), Hand::new(), Hand::new()],
        );
        table.players[PlayerId::new(1)].alive = false;
        table.players_remaining = 2;
        let agents: Vec<Box<dyn Agent>> = vec![
            Box::new(RandomAgent::new("a")),
            Box::new(RandomAgent::new("b")),
            Box::new(RandomAgent::new("c")),
        ];
        let mut game = Game::resume(agents, table, GameRng::new(0)).unwrap();

        assert!(matches!(
            game.take_turn(PlayerId::new(1)),
            Err(Error::InactivePlayer { .. })
        ));
        assert!(matches!(
            game.take_turn(PlayerId::new(7)),
            Err(Error::InactivePlayer { .. })
        ));
    }
}
