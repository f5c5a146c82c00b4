use tracing::debug;

use crate::cards::{Card, CardKind, Constraint, Sign, Target};
use crate::core::{GameState, PlayerId, Result, TakiError};
use crate::decision::{Audience, Decider, Notice};
use crate::game::Game;

impl<D: Decider> Game<D> {
    /// Play `card` for `actor` and apply its effect.
    ///
    /// With an actor the card must be in their hand. `None` only happens
    /// for the setup starter.
    pub(crate) fn resolve(&mut self, card: Card, actor: Option<PlayerId>) -> Result<()> {
        let before = self.table.active;
        self.place(card, actor)?;

        let kind = card.kind();
        if let (Some(color), Some(sign)) = (kind.color(), kind.sign()) {
            self.table.active = Constraint::exact(color, sign);
        }

        match kind {
            CardKind::Number { .. } => {}
            CardKind::Stop(_) => self.table.state = GameState::Skip,
            CardKind::Plus(_) => self.table.state = GameState::Plus,
            CardKind::PlusTwo(_) => {
                if actor.is_some() {
                    let state = self.table.state;
                    self.table.state = match state.raised() {
                        Some(raised) => raised,
                        None if state == GameState::Normal => GameState::plus_two(),
                        None => return Err(TakiError::invalid_state("stack a +2", state)),
                    };
                }
            }
            CardKind::FlipOrder(_) => {
                if self.table.state != GameState::Setup {
                    self.table.direction = self.table.direction.flipped();
                }
            }
            CardKind::Taki(color) => {
                if let Some(player) = actor {
                    self.taki_sequence(player, color)?;
                }
            }
            CardKind::SuperTaki => {
                let player = actor.ok_or(TakiError::MissingActor { card: card.id() })?;
                let color = match before.color.exact() {
                    Some(color) if before.sign != Target::Exact(Sign::Taki) => color,
                    _ => self.ask_color(player),
                };
                self.table.pile.assign_top_color(color);
                self.table.active = Constraint::exact(color, Sign::Taki);
                self.announce(Notice::SuperTakiColor(color), Audience::All);
                self.taki_sequence(player, color)?;
            }
            CardKind::ChangeColor => {
                let player = actor.ok_or(TakiError::MissingActor { card: card.id() })?;
                let color = self.ask_color(player);
                self.table.pile.assign_top_color(color);
                self.table.active = Constraint {
                    color: Target::Exact(color),
                    sign: Target::Cleared,
                };
                self.announce(Notice::ColorChanged(color), Audience::All);
            }
            CardKind::King => {
                self.table.active = Constraint::wild();
                self.table.state = GameState::King;
            }
            CardKind::PlusThree => {
                let player = actor.ok_or(TakiError::MissingActor { card: card.id() })?;
                self.offer_breaker(player)?;
                self.table.active = before;
            }
            CardKind::BreakThree => {
                let player = actor.ok_or(TakiError::MissingActor { card: card.id() })?;
                self.draw_cards(player, 3)?;
                self.table.active = before;
            }
        }

        debug!(
            %card,
            actor = ?actor,
            state = %self.table.state,
            color = %self.table.active.color,
            sign = %self.table.active.sign,
            "resolved"
        );
        Ok(())
    }

    /// Move the card onto the pile, out of the actor's hand if there is one.
    pub(crate) fn place(&mut self, card: Card, actor: Option<PlayerId>) -> Result<()> {
        let Some(player) = actor else {
            self.table.pile.push(card);
            return Ok(());
        };
        let hand = &mut self.table.seats[player].hand;
        let card = hand.remove(card.id()).ok_or(TakiError::CardNotInHand {
            player,
            card: card.id(),
        })?;
        let cards_left = hand.len();
        self.table.pile.push(card);
        self.announce(
            Notice::Played {
                player,
                card,
                cards_left,
            },
            Audience::All,
        );
        Ok(())
    }
}
