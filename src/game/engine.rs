//! Turn orchestrator.
//!
//! `Game` owns the table and the decider. One call to [`Game::advance_turn`]
//! is one unit of progress:
//!
//! - `normal` / `plus_two`: the current player plays a legal card or draws
//!   (one card, or the stake of an open +2 chain)
//! - `skip`: the current player is skipped
//! - afterwards, unless a "+" or +2 is still pending, empty hands end the match
//! - the pointer moves on, except after "+" and king which grant another turn

use smallvec::SmallVec;
use tracing::{debug, info, instrument, trace, warn};

use crate::cards::{Card, Color, Constraint, Sign, Target};
use crate::core::{Direction, GameConfig, GameState, PlayerId, PlayerMap, Result, TakiError};
use crate::decision::{Audience, Decider, Notice, Prompt, Request, RequestKind, Selection};
use crate::zones::{Deck, Hand, Pile};

use super::result::GameResult;
use super::table::{PlayersInOrder, Seat, Table};
use super::view::GameView;

/// Fewest seats a match can start with.
pub const MIN_PLAYERS: usize = 2;

/// A match in progress.
#[derive(Debug)]
pub struct Game<D> {
    pub(crate) table: Table,
    pub(crate) decider: D,
}

impl<D: Decider> Game<D> {
    /// A game with a freshly shuffled standard deck.
    pub fn new(config: GameConfig, decider: D) -> Self {
        let deck = Deck::standard(config.deck_copies);
        let mut game = Self::with_deck(config, deck, decider);
        game.table.deck.shuffle(&mut game.table.deck_rng);
        game
    }

    /// A game drawing from `deck` as given, top card last.
    pub fn with_deck(config: GameConfig, deck: Deck, decider: D) -> Self {
        Self {
            table: Table::new(config, deck),
            decider,
        }
    }

    /// Register a player. Only allowed before setup.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId> {
        if self.table.state != GameState::NoGame {
            return Err(TakiError::invalid_state("add a player", self.table.state));
        }
        let max = PlayerMap::<Seat>::MAX_PLAYERS;
        if self.table.seats.player_count() >= max {
            return Err(TakiError::TooManyPlayers { max });
        }
        let name = name.into();
        let player = self.table.seats.push(Seat::new(name.clone()));
        self.announce(Notice::PlayerJoined { player, name }, Audience::All);
        Ok(player)
    }

    /// Deal hands, reveal the starter and pick who begins.
    ///
    /// Starters without both a color and a sign stay on the pile as
    /// history and the next card is revealed.
    #[instrument(level = "debug", skip(self))]
    pub fn setup(&mut self, cards_per_player: usize) -> Result<()> {
        if self.table.state != GameState::NoGame {
            return Err(TakiError::invalid_state("set up", self.table.state));
        }
        let found = self.table.seats.player_count();
        if found < MIN_PLAYERS {
            return Err(TakiError::NotEnoughPlayers {
                min: MIN_PLAYERS,
                found,
            });
        }
        self.table.state = GameState::Setup;

        let players: SmallVec<[PlayerId; 8]> = self.table.seats.player_ids().collect();
        for _ in 0..cards_per_player {
            for &player in &players {
                let card = self.draw_one()?;
                self.table.seats[player].hand.insert(card);
            }
        }
        self.announce(Notice::HandsDealt, Audience::All);

        let starter = loop {
            let Some(card) = self.table.deck.draw() else {
                return Err(TakiError::NoStarterCard);
            };
            if card.is_active_eligible() {
                break card;
            }
            self.table.pile.push(card);
            self.announce(Notice::InvalidStarter(card), Audience::All);
        };
        self.announce(Notice::StarterCard(starter), Audience::All);
        self.resolve(starter, None)?;

        let start = self.table.seat_rng.gen_range_usize(0..found);
        self.table.next_player = PlayerId::new(start as u8);
        if self.table.seat_rng.gen_bool(0.5) {
            self.table.direction = Direction::Reversed;
        }
        self.announce(Notice::StartingPlayer(self.table.next_player), Audience::All);
        self.announce(Notice::TurnOrder(self.table.direction), Audience::All);

        self.table.state = GameState::Normal;
        info!(
            players = found,
            %starter,
            first = %self.table.next_player,
            direction = %self.table.direction,
            "game started"
        );
        Ok(())
    }

    /// Run one unit of progress.
    ///
    /// Returns `false` once a winner or a tie has been reported.
    #[instrument(level = "debug", skip(self), fields(player = %self.table.next_player))]
    pub fn advance_turn(&mut self) -> Result<bool> {
        if self.table.result.is_some() {
            return Err(TakiError::GameOver);
        }
        let player = self.table.next_player;
        debug!(state = %self.table.state, "turn");

        match self.table.state {
            GameState::NoGame | GameState::Setup => {
                return Err(TakiError::invalid_state("advance a turn", self.table.state));
            }
            GameState::Normal | GameState::PlusTwo { .. } => self.take_turn(player)?,
            GameState::Skip => {
                self.announce(Notice::Skipped(player), Audience::All);
                self.table.state = GameState::Normal;
            }
            // Left over from a card resolved outside a turn; nothing to do.
            GameState::Plus | GameState::King => {}
        }

        if !self.table.state.defers_win_check() {
            if let Some(result) = self.check_outcome() {
                match &result {
                    GameResult::Winner(p) => self.announce(Notice::Winner(*p), Audience::All),
                    GameResult::Tie(ps) => self.announce(Notice::Tie(ps.clone()), Audience::All),
                }
                info!(?result, "game over");
                self.table.result = Some(result);
                return Ok(false);
            }
        }

        if self.table.state.grants_extra_turn() {
            self.table.state = GameState::Normal;
        } else {
            let count = self.table.seats.player_count();
            let next = self.table.direction.step(player.index(), count);
            self.table.next_player = PlayerId::new(next as u8);
        }
        Ok(true)
    }

    /// Advance turns until the match ends.
    pub fn run(&mut self) -> Result<GameResult> {
        if let Some(result) = &self.table.result {
            return Ok(result.clone());
        }
        while self.advance_turn()? {}
        self.table
            .result
            .clone()
            .ok_or_else(|| TakiError::invalid_state("finish", self.table.state))
    }

    /// Make the player whose turn it is draw `count` cards.
    pub fn draw_for_current_player(&mut self, count: usize) -> Result<()> {
        if matches!(self.table.state, GameState::NoGame | GameState::Setup) {
            return Err(TakiError::invalid_state("draw", self.table.state));
        }
        self.draw_cards(self.table.next_player, count)
    }

    fn take_turn(&mut self, player: PlayerId) -> Result<()> {
        match self.pick_card(player)? {
            Some(card) => self.resolve(card, Some(player)),
            None => {
                let count = self.table.state.stake().unwrap_or(1) as usize;
                self.draw_cards(player, count)?;
                self.table.state = GameState::Normal;
                Ok(())
            }
        }
    }

    /// Ask for a legal card. `None` means the player draws.
    ///
    /// With no legal card nothing is asked.
    fn pick_card(&mut self, player: PlayerId) -> Result<Option<Card>> {
        let state = self.table.state;
        let active = self.table.active;
        let options: Vec<Card> = self.table.seats[player]
            .hand
            .sorted()
            .into_iter()
            .filter(|card| card.can_play(state, &active))
            .collect();
        if options.is_empty() {
            return Ok(None);
        }

        let request = Request::new(RequestKind::PlayCard, options, true);
        let attempts = self.table.config.max_decision_attempts;
        for _ in 0..attempts {
            match self.ask_among(player, &request)? {
                Selection::Pick(id) => return Ok(request.options.iter().find(|c| c.id() == id).copied()),
                Selection::Decline => {
                    if self.ask_confirm(player, Prompt::DrawInstead) {
                        return Ok(None);
                    }
                }
            }
        }
        Err(TakiError::DecisionRejected { player, attempts })
    }

    /// Draw cards into a hand, refilling the deck from the pile as needed.
    pub(crate) fn draw_cards(&mut self, player: PlayerId, count: usize) -> Result<()> {
        for _ in 0..count {
            let card = self.draw_one()?;
            self.table.seats[player].hand.insert(card);
            self.announce(Notice::DrewCard { player, card }, Audience::Only(player));
        }
        trace!(%player, count, deck = self.table.deck.len(), "drew");
        self.announce(Notice::Drew { player, count }, Audience::AllExcept(player));
        Ok(())
    }

    fn draw_one(&mut self) -> Result<Card> {
        if self.table.deck.is_empty() {
            self.recycle();
        }
        self.table.deck.draw().ok_or(TakiError::DeckExhausted)
    }

    /// Shuffle the pile's disposable cards back into the deck.
    fn recycle(&mut self) -> usize {
        let disposable = self.table.pile.extract_disposable();
        let count = disposable.len();
        if count == 0 {
            return 0;
        }
        self.announce(Notice::ReloadingDeck, Audience::All);
        self.table.deck.extend(disposable);
        self.table.deck.shuffle(&mut self.table.deck_rng);
        trace!(count, "recycled pile into deck");
        count
    }

    fn check_outcome(&self) -> Option<GameResult> {
        GameResult::from_empty_hands(
            self.table
                .seats
                .iter()
                .filter(|(_, seat)| seat.hand.is_empty())
                .map(|(player, _)| player),
        )
    }

    // === Decision boundary ===

    /// Issue a card request until the answer is within the offer.
    pub(crate) fn ask_among(&mut self, player: PlayerId, request: &Request) -> Result<Selection> {
        let attempts = self.table.config.max_decision_attempts;
        for attempt in 1..=attempts {
            let selection = self.decider.choose_among(player, &self.table.view(player), request);
            if request.accepts(selection) {
                return Ok(selection);
            }
            warn!(%player, ?selection, attempt, "answer outside the offered options");
            self.decider.notify(&Notice::InvalidAnswer, Audience::Only(player));
        }
        Err(TakiError::DecisionRejected { player, attempts })
    }

    pub(crate) fn ask_color(&mut self, player: PlayerId) -> Color {
        self.decider.choose_color(player, &self.table.view(player))
    }

    pub(crate) fn ask_confirm(&mut self, player: PlayerId, prompt: Prompt) -> bool {
        self.decider.confirm(player, &self.table.view(player), prompt)
    }

    pub(crate) fn announce(&mut self, notice: Notice, audience: Audience) {
        trace!(%notice, ?audience, "notice");
        self.decider.notify(&notice, audience);
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.table.config
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.table.state
    }

    /// Active color and sign.
    #[must_use]
    pub fn constraint(&self) -> Constraint {
        self.table.active
    }

    #[must_use]
    pub fn active_color(&self) -> Target<Color> {
        self.table.active.color
    }

    #[must_use]
    pub fn active_sign(&self) -> Target<Sign> {
        self.table.active.sign
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.table.direction
    }

    /// Whose turn it is.
    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        self.table.next_player
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.table.seats.player_count()
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> Option<&str> {
        self.table.seats.contains(player).then(|| self.table.seats[player].name())
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.table.seats.contains(player).then(|| self.table.seats[player].hand())
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.table.deck
    }

    #[must_use]
    pub fn pile(&self) -> &Pile {
        &self.table.pile
    }

    /// The outcome, once reported.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.table.result.as_ref()
    }

    /// Seats starting at `start` in the current direction.
    #[must_use]
    pub fn players_in_order(&self, start: PlayerId) -> PlayersInOrder {
        self.table.players_in_order(start)
    }

    /// The table as seen by one player.
    #[must_use]
    pub fn view(&self, viewer: PlayerId) -> GameView<'_> {
        self.table.view(viewer)
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn decider(&self) -> &D {
        &self.decider
    }

    pub fn decider_mut(&mut self) -> &mut D {
        &mut self.decider
    }

    pub fn into_decider(self) -> D {
        self.decider
    }
}
