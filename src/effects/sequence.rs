//! TAKI placement and the +3 breaker offer.

use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{Card, CardKind, Color};
use crate::core::{PlayerId, Result, TakiError};
use crate::decision::{Audience, Decider, Notice, Prompt, Request, RequestKind, Selection};
use crate::game::Game;

impl<D: Decider> Game<D> {
    /// Let `player` drop cards of `color` (or colorless ones) after a TAKI.
    ///
    /// All but the last dropped card go straight onto the pile; the last
    /// one closes the sequence and is resolved as a normal play.
    pub(crate) fn taki_sequence(&mut self, player: PlayerId, color: Color) -> Result<()> {
        let placed = self.choose_taki_cards(player, color)?;
        let Some((&closer, dropped)) = placed.split_last() else {
            self.announce(Notice::TakiClosed, Audience::All);
            return Ok(());
        };

        self.announce(
            Notice::TakiDropped {
                player,
                cards: placed.to_vec(),
            },
            Audience::All,
        );
        for card in dropped {
            let card = self.table.seats[player]
                .hand
                .remove(card.id())
                .ok_or(TakiError::CardNotInHand { player, card: card.id() })?;
            self.table.pile.push(card);
        }
        self.announce(Notice::TakiClosed, Audience::All);
        debug!(%player, %color, dropped = dropped.len(), %closer, "TAKI closed");
        self.resolve(closer, Some(player))
    }

    /// Collect the cards to drop, one request per card.
    ///
    /// Declining while cards still fit asks for confirmation.
    fn choose_taki_cards(&mut self, player: PlayerId, color: Color) -> Result<SmallVec<[Card; 8]>> {
        let mut placed: SmallVec<[Card; 8]> = SmallVec::new();
        let attempts = self.table.config.max_decision_attempts;
        let mut refusals = 0;

        loop {
            let options: Vec<Card> = self.table.seats[player]
                .hand
                .sorted()
                .into_iter()
                .filter(|card| !placed.contains(card) && card.color().map_or(true, |c| c == color))
                .collect();
            if options.is_empty() {
                return Ok(placed);
            }

            let request = Request::new(RequestKind::PlaceOnTaki { color }, options, true);
            match self.ask_among(player, &request)? {
                Selection::Pick(id) => {
                    if let Some(card) = request.options.iter().find(|c| c.id() == id) {
                        placed.push(*card);
                    }
                }
                Selection::Decline => {
                    if self.ask_confirm(player, Prompt::EndTaki) {
                        return Ok(placed);
                    }
                    refusals += 1;
                    if refusals >= attempts {
                        return Err(TakiError::DecisionRejected { player, attempts });
                    }
                }
            }
        }
    }

    /// Offer each other player, in turn order after `player`, to break the +3.
    ///
    /// The first one to accept plays their #3. If nobody does, every other
    /// player draws 3.
    pub(crate) fn offer_breaker(&mut self, player: PlayerId) -> Result<()> {
        let others: SmallVec<[PlayerId; 8]> = self.table.players_in_order(player).skip(1).collect();

        for &other in &others {
            let breaker = self.table.seats[other]
                .hand
                .iter()
                .filter(|card| card.kind() == CardKind::BreakThree)
                .min()
                .copied();
            let Some(breaker) = breaker else {
                continue;
            };
            if self.ask_confirm(other, Prompt::PlayBreaker) {
                self.announce(Notice::BrokePlusThree(other), Audience::All);
                return self.resolve(breaker, Some(other));
            }
        }

        for &other in &others {
            self.draw_cards(other, 3)?;
        }
        Ok(())
    }
}
